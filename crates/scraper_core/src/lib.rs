//! Scraper core: pure state machine, data model and view-model helpers.
mod effect;
mod error;
mod model;
mod msg;
pub mod notice;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use error::ClientError;
pub use model::{
    Channel, RecordId, ScrapeRequest, ScrapeResult, Transcript, DEFAULT_DELAY_SECS,
    DEFAULT_MAX_VIDEOS,
};
pub use msg::Msg;
pub use notice::{Notification, NotificationId, Operation, Outcome, Severity};
pub use state::{AppState, Phase, RequestId, MAX_NOTIFICATIONS};
pub use update::update;
pub use validate::validate_channel_url;
pub use view_model::{
    truncate_transcript, AppViewModel, ChannelRowView, TranscriptRowView, SUBMIT_LABEL_BUSY,
    SUBMIT_LABEL_IDLE, TRANSCRIPT_PREVIEW_LINES, TRUNCATION_MARKER,
};
