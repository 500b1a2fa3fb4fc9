use scraper_logging::{scraper_debug, scraper_info, scraper_warn};

use crate::notice::{Operation, Outcome};
use crate::{validate_channel_url, AppState, Effect, Msg, Phase, ScrapeRequest};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted { api_key } => {
            state.set_api_key(api_key);
            vec![Effect::LoadChannels]
        }
        Msg::ChannelUrlChanged(url) => {
            // The input is locked while submitting so the form keeps showing
            // the URL that is actually being scraped.
            if state.phase() == Phase::Submitting {
                scraper_debug!("Ignoring URL edit while a scrape is in progress");
            } else {
                state.set_channel_url(url);
            }
            Vec::new()
        }
        Msg::SubmitClicked => {
            // Only one scrape may be in flight; reject rather than queue.
            if state.phase() == Phase::Submitting {
                scraper_warn!("Submit rejected: scrape already in progress");
                state.notify(Outcome::SubmitRejectedBusy);
                return (state, Vec::new());
            }
            match validate_channel_url(state.channel_url()) {
                Ok(channel_url) => {
                    scraper_info!("Submitting scrape for {}", channel_url);
                    state.set_phase(Phase::Submitting);
                    vec![Effect::SubmitScrape(ScrapeRequest::new(channel_url))]
                }
                Err(error) => {
                    scraper_debug!("Submit rejected by validation: {}", error);
                    state.notify(Outcome::Failed {
                        operation: Operation::Submit,
                        error: &error,
                    });
                    Vec::new()
                }
            }
        }
        Msg::ScrapeFinished(result) => {
            state.set_phase(Phase::Idle);
            match result {
                Ok(result) => {
                    scraper_info!(
                        "Scrape finished: {} videos from {}",
                        result.videos_processed,
                        result.channel_title
                    );
                    state.notify(Outcome::ScrapeSucceeded(&result));
                    vec![Effect::LoadChannels]
                }
                Err(error) => {
                    scraper_warn!("Scrape failed ({}): {}", error.kind(), error);
                    state.notify(Outcome::Failed {
                        operation: Operation::Scrape,
                        error: &error,
                    });
                    Vec::new()
                }
            }
        }
        Msg::RefreshChannelsClicked => vec![Effect::LoadChannels],
        Msg::ChannelsLoaded(result) => {
            match result {
                Ok(channels) => {
                    scraper_debug!("Loaded {} channels", channels.len());
                    state.replace_channels(channels);
                }
                Err(error) => {
                    scraper_warn!("Channel load failed ({}): {}", error.kind(), error);
                    state.notify(Outcome::Failed {
                        operation: Operation::LoadChannels,
                        error: &error,
                    });
                }
            }
            Vec::new()
        }
        Msg::ChannelSelected(channel_id) => {
            let request_id = state.begin_transcript_fetch(channel_id.clone());
            vec![Effect::LoadTranscripts {
                request_id,
                channel_id,
            }]
        }
        Msg::TranscriptsLoaded {
            request_id,
            channel_id,
            result,
        } => {
            if !state.is_current_transcript_fetch(request_id, &channel_id) {
                scraper_debug!(
                    "Discarding stale transcripts for {} (request {})",
                    channel_id,
                    request_id
                );
                return (state, Vec::new());
            }
            match result {
                Ok(transcripts) => {
                    scraper_debug!("Loaded {} transcripts for {}", transcripts.len(), channel_id);
                    state.replace_transcripts(transcripts);
                }
                Err(error) => {
                    scraper_warn!(
                        "Transcript load for {} failed ({}): {}",
                        channel_id,
                        error.kind(),
                        error
                    );
                    state.notify(Outcome::Failed {
                        operation: Operation::LoadTranscripts,
                        error: &error,
                    });
                }
            }
            Vec::new()
        }
        Msg::NotificationDismissed(id) => {
            state.dismiss_notification(id);
            Vec::new()
        }
    };

    (state, effects)
}
