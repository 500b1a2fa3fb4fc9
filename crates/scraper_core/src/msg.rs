use crate::{Channel, ClientError, NotificationId, RequestId, ScrapeResult, Transcript};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// View mounted; kicks off the initial channel load.
    Mounted { api_key: Option<String> },
    /// User edited the channel URL input. Ignored while a scrape is running.
    ChannelUrlChanged(String),
    /// User submitted the form.
    SubmitClicked,
    /// The scrape request completed.
    ScrapeFinished(Result<ScrapeResult, ClientError>),
    /// User asked for a fresh channel list.
    RefreshChannelsClicked,
    /// A channel list fetch completed.
    ChannelsLoaded(Result<Vec<Channel>, ClientError>),
    /// User picked a channel to view its transcripts.
    ChannelSelected(String),
    /// A transcript fetch completed, tagged with what it was requested for.
    TranscriptsLoaded {
        request_id: RequestId,
        channel_id: String,
        result: Result<Vec<Transcript>, ClientError>,
    },
    /// User closed a notification.
    NotificationDismissed(NotificationId),
}
