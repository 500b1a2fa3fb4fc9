use crate::{AppState, Notification, Phase, RecordId};

/// Lines of a transcript shown in the table before truncating.
pub const TRANSCRIPT_PREVIEW_LINES: usize = 5;
pub const TRUNCATION_MARKER: &str = "...";
pub const SUBMIT_LABEL_IDLE: &str = "Scrape Transcripts";
pub const SUBMIT_LABEL_BUSY: &str = "Scraping Transcripts...";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: Phase,
    pub channel_url: String,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub channels: Vec<ChannelRowView>,
    pub selected_channel: Option<String>,
    pub transcripts: Vec<TranscriptRowView>,
    pub show_transcripts: bool,
    pub notifications: Vec<Notification>,
    pub store_key_configured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRowView {
    pub id: RecordId,
    pub title: String,
    pub channel_id: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptRowView {
    pub id: RecordId,
    pub title: String,
    pub video_id: String,
    pub excerpt: String,
}

impl AppViewModel {
    pub(crate) fn from_state(state: &AppState) -> Self {
        let submitting = state.phase() == Phase::Submitting;
        let selected = state.selected_channel();

        let channels = state
            .channels()
            .iter()
            .map(|channel| ChannelRowView {
                id: channel.id.clone(),
                title: channel.title.clone(),
                channel_id: channel.channel_id.clone(),
                selected: selected == Some(channel.channel_id.as_str()),
            })
            .collect();

        let transcripts: Vec<TranscriptRowView> = state
            .transcripts()
            .iter()
            .map(|transcript| TranscriptRowView {
                id: transcript.id.clone(),
                title: transcript.title.clone(),
                video_id: transcript.video_id.clone(),
                excerpt: truncate_transcript(&transcript.transcript),
            })
            .collect();

        Self {
            phase: state.phase(),
            channel_url: state.channel_url().to_string(),
            submit_enabled: !submitting,
            submit_label: if submitting {
                SUBMIT_LABEL_BUSY
            } else {
                SUBMIT_LABEL_IDLE
            },
            channels,
            selected_channel: selected.map(ToOwned::to_owned),
            show_transcripts: !transcripts.is_empty(),
            transcripts,
            notifications: state.notifications().to_vec(),
            store_key_configured: state.api_key().is_some(),
        }
    }
}

/// Keeps the first [`TRANSCRIPT_PREVIEW_LINES`] lines and appends
/// [`TRUNCATION_MARKER`] when anything was cut.
pub fn truncate_transcript(text: &str) -> String {
    let mut lines = text.split('\n');
    let head: Vec<&str> = lines.by_ref().take(TRANSCRIPT_PREVIEW_LINES).collect();
    let mut excerpt = head.join("\n");
    if lines.next().is_some() {
        excerpt.push_str(TRUNCATION_MARKER);
    }
    excerpt
}
