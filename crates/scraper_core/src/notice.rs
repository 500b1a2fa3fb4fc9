//! The single place where operation outcomes become user-visible messages.
//!
//! `update` never formats user text itself; it hands an [`Outcome`] to
//! [`describe`] and queues the resulting [`Notification`].

use crate::{ClientError, ScrapeResult};

pub type NotificationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

/// Which asynchronous boundary an outcome came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Submit,
    Scrape,
    LoadChannels,
    LoadTranscripts,
}

#[derive(Debug, Clone, Copy)]
pub enum Outcome<'a> {
    ScrapeSucceeded(&'a ScrapeResult),
    SubmitRejectedBusy,
    Failed {
        operation: Operation,
        error: &'a ClientError,
    },
}

/// Maps an outcome to its severity, title and message.
pub fn describe(outcome: Outcome<'_>) -> (Severity, String, String) {
    match outcome {
        Outcome::ScrapeSucceeded(result) => (
            Severity::Success,
            "Success".to_string(),
            format!(
                "Processed {} videos from {}",
                result.videos_processed, result.channel_title
            ),
        ),
        Outcome::SubmitRejectedBusy => (
            Severity::Warning,
            "Busy".to_string(),
            "A scrape is already in progress".to_string(),
        ),
        Outcome::Failed { operation, error } => {
            let message = match operation {
                Operation::Submit => error.message().to_string(),
                Operation::Scrape => format!("Failed to scrape transcripts: {}", error.message()),
                Operation::LoadChannels => format!("Failed to fetch channels: {}", error.message()),
                Operation::LoadTranscripts => {
                    format!("Failed to fetch transcripts: {}", error.message())
                }
            };
            let title = match error {
                ClientError::Validation(_) => "Invalid input",
                _ => "Error",
            };
            (Severity::Error, title.to_string(), message)
        }
    }
}
