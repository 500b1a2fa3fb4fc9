use crate::{RequestId, ScrapeRequest};

/// Work the runtime must perform on behalf of the state machine. Each effect
/// eventually answers with exactly one [`crate::Msg`].
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Answered by `Msg::ChannelsLoaded`.
    LoadChannels,
    /// Answered by `Msg::TranscriptsLoaded` carrying the same tag.
    LoadTranscripts {
        request_id: RequestId,
        channel_id: String,
    },
    /// Answered by `Msg::ScrapeFinished`.
    SubmitScrape(ScrapeRequest),
}
