//! Scraper engine: endpoint resolution, HTTP clients and the controller that
//! executes core effects.
mod config;
mod controller;
mod endpoint;
mod http;
mod scrape;
mod store;

pub use config::{
    Settings, ENV_API_BASE_URL, ENV_COOKIES_FILE, ENV_MODE, ENV_REQUEST_TIMEOUT_SECS,
    ENV_STORE_KEY, ENV_STORE_URL,
};
pub use controller::Controller;
pub use endpoint::{EndpointDefaults, EndpointResolver, RuntimeMode};
pub use http::HttpSettings;
pub use scrape::{HttpScrapeClient, ScrapeService, GENERIC_SCRAPE_FAILURE};
pub use store::{RecordStore, RestRecordStore};
