use reqwest::header::{ACCEPT, CONTENT_TYPE};
use scraper_core::{ClientError, ScrapeRequest, ScrapeResult};
use scraper_logging::{scraper_debug, scraper_info, scraper_warn};
use serde::Deserialize;

use crate::endpoint::EndpointResolver;
use crate::http::{describe_transport_error, HttpSettings};

/// Message used whenever the service fails without a usable explanation.
pub const GENERIC_SCRAPE_FAILURE: &str = "Failed to scrape transcripts";

const SCRAPE_PATH: &str = "/api/scrape-transcripts";
const HEALTH_PATH: &str = "/api/health";

/// Client for the remote scraping service. One call is one attempt; there
/// are no retries at this layer.
#[async_trait::async_trait]
pub trait ScrapeService: Send + Sync {
    async fn submit(&self, request: &ScrapeRequest) -> Result<ScrapeResult, ClientError>;

    /// Advisory liveness check; the body is returned as-is.
    async fn health_check(&self) -> Result<serde_json::Value, ClientError>;
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpScrapeClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpScrapeClient {
    pub fn new(base_url: impl Into<String>, settings: &HttpSettings) -> Result<Self, ClientError> {
        let client = settings.build_client().map_err(|err| {
            ClientError::Configuration(format!("failed to build HTTP client: {err}"))
        })?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_resolver(
        resolver: &EndpointResolver,
        settings: &HttpSettings,
    ) -> Result<Self, ClientError> {
        Self::new(resolver.resolve()?, settings)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl ScrapeService for HttpScrapeClient {
    async fn submit(&self, request: &ScrapeRequest) -> Result<ScrapeResult, ClientError> {
        if request.channel_url.trim().is_empty() {
            return Err(ClientError::Validation("Channel URL is required".into()));
        }

        let body = serde_json::to_vec(request)
            .map_err(|err| ClientError::Validation(format!("invalid scrape request: {err}")))?;
        let url = format!("{}{}", self.base_url, SCRAPE_PATH);
        scraper_info!(
            "POST {} channel_url={} delay={} max_videos={}",
            url,
            request.channel_url,
            request.delay,
            request.max_videos
        );

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|err| ClientError::RemoteService(describe_transport_error(&err)))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| ClientError::RemoteService(describe_transport_error(&err)))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorEnvelope>(&bytes)
                .ok()
                .and_then(|envelope| envelope.error)
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| GENERIC_SCRAPE_FAILURE.to_string());
            scraper_warn!("Scrape rejected with {}: {}", status, message);
            return Err(ClientError::RemoteService(message));
        }

        serde_json::from_slice::<ScrapeResult>(&bytes).map_err(|err| {
            scraper_warn!("Malformed scrape response: {}", err);
            ClientError::RemoteService(GENERIC_SCRAPE_FAILURE.to_string())
        })
    }

    async fn health_check(&self) -> Result<serde_json::Value, ClientError> {
        let url = format!("{}{}", self.base_url, HEALTH_PATH);
        scraper_debug!("GET {}", url);
        let response = self.client.get(&url).send().await.map_err(|err| {
            ClientError::RemoteService(format!(
                "health check failed: {}",
                describe_transport_error(&err)
            ))
        })?;
        let bytes = response.bytes().await.map_err(|err| {
            ClientError::RemoteService(format!(
                "health check failed: {}",
                describe_transport_error(&err)
            ))
        })?;
        // Opaque body; anything that is not JSON is passed through as text.
        Ok(serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
        }))
    }
}
