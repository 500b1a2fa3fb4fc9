use crate::notice::{self, Notification, NotificationId, Outcome};
use crate::view_model::AppViewModel;
use crate::{Channel, Transcript};

/// Oldest notifications are dropped once the queue grows past this.
pub const MAX_NOTIFICATIONS: usize = 5;

/// Tag attached to each transcript fetch so late answers can be recognised.
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    channel_url: String,
    api_key: Option<String>,
    channels: Vec<Channel>,
    transcripts: Vec<Transcript>,
    phase: Phase,
    selected_channel: Option<String>,
    latest_transcript_request: RequestId,
    notifications: Vec<Notification>,
    next_notification_id: NotificationId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::from_state(self)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn channel_url(&self) -> &str {
        &self.channel_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn transcripts(&self) -> &[Transcript] {
        &self.transcripts
    }

    pub fn selected_channel(&self) -> Option<&str> {
        self.selected_channel.as_deref()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_api_key(&mut self, api_key: Option<String>) {
        self.api_key = api_key.filter(|key| !key.trim().is_empty());
        self.mark_dirty();
    }

    pub(crate) fn set_channel_url(&mut self, url: String) {
        if self.channel_url != url {
            self.channel_url = url;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            self.phase = phase;
            self.mark_dirty();
        }
    }

    pub(crate) fn replace_channels(&mut self, channels: Vec<Channel>) {
        self.channels = channels;
        self.mark_dirty();
    }

    pub(crate) fn replace_transcripts(&mut self, transcripts: Vec<Transcript>) {
        self.transcripts = transcripts;
        self.mark_dirty();
    }

    /// Records the new selection and returns the tag for its fetch.
    pub(crate) fn begin_transcript_fetch(&mut self, channel_id: String) -> RequestId {
        self.latest_transcript_request += 1;
        self.selected_channel = Some(channel_id);
        self.mark_dirty();
        self.latest_transcript_request
    }

    /// A response is current only if it answers the latest fetch for the
    /// channel that is still selected.
    pub(crate) fn is_current_transcript_fetch(&self, request_id: RequestId, channel_id: &str) -> bool {
        request_id == self.latest_transcript_request
            && self.selected_channel.as_deref() == Some(channel_id)
    }

    pub(crate) fn notify(&mut self, outcome: Outcome<'_>) {
        let (severity, title, message) = notice::describe(outcome);
        self.next_notification_id += 1;
        self.notifications.push(Notification {
            id: self.next_notification_id,
            severity,
            title,
            message,
        });
        if self.notifications.len() > MAX_NOTIFICATIONS {
            let excess = self.notifications.len() - MAX_NOTIFICATIONS;
            self.notifications.drain(..excess);
        }
        self.mark_dirty();
    }

    pub(crate) fn dismiss_notification(&mut self, id: NotificationId) {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        if self.notifications.len() != before {
            self.mark_dirty();
        }
    }
}
