use std::sync::Once;

use pretty_assertions::assert_eq;
use scraper_core::{update, AppState, ClientError, Effect, Msg, Phase, RecordId, Transcript};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(scraper_logging::initialize_for_tests);
}

fn transcript(id: i64, channel_id: &str, video_id: &str) -> Transcript {
    Transcript {
        id: RecordId::Int(id),
        channel_id: channel_id.to_string(),
        video_id: video_id.to_string(),
        title: format!("Video {video_id}"),
        transcript: "hello\nworld".to_string(),
    }
}

/// Selects a channel and returns the tag of the fetch it started.
fn select(state: AppState, channel_id: &str) -> (AppState, u64) {
    let (state, effects) = update(state, Msg::ChannelSelected(channel_id.to_string()));
    match effects.as_slice() {
        [Effect::LoadTranscripts {
            request_id,
            channel_id: requested,
        }] => {
            assert_eq!(requested, channel_id);
            let request_id = *request_id;
            (state, request_id)
        }
        other => panic!("unexpected effects {other:?}"),
    }
}

fn loaded(
    state: AppState,
    request_id: u64,
    channel_id: &str,
    result: Result<Vec<Transcript>, ClientError>,
) -> AppState {
    let (state, effects) = update(
        state,
        Msg::TranscriptsLoaded {
            request_id,
            channel_id: channel_id.to_string(),
            result,
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn selecting_a_channel_replaces_transcripts() {
    init_logging();
    let (state, req) = select(AppState::new(), "UC1");
    let state = loaded(state, req, "UC1", Ok(vec![transcript(1, "UC1", "a")]));

    assert_eq!(state.selected_channel(), Some("UC1"));
    assert_eq!(state.transcripts(), &[transcript(1, "UC1", "a")]);
}

#[test]
fn late_response_for_previous_channel_is_discarded() {
    init_logging();
    let (state, req_a) = select(AppState::new(), "UCA");
    let (state, req_b) = select(state, "UCB");

    let state = loaded(state, req_b, "UCB", Ok(vec![transcript(2, "UCB", "b")]));
    let state = loaded(state, req_a, "UCA", Ok(vec![transcript(1, "UCA", "a")]));

    assert_eq!(state.transcripts(), &[transcript(2, "UCB", "b")]);
}

#[test]
fn superseded_request_for_same_channel_is_discarded() {
    init_logging();
    let (state, first) = select(AppState::new(), "UCA");
    let (state, second) = select(state, "UCA");

    let state = loaded(state, second, "UCA", Ok(vec![transcript(2, "UCA", "new")]));
    let state = loaded(state, first, "UCA", Ok(vec![transcript(1, "UCA", "old")]));

    assert_eq!(state.transcripts(), &[transcript(2, "UCA", "new")]);
}

#[test]
fn switching_back_and_forth_leaves_no_residue() {
    init_logging();
    let a = vec![transcript(1, "UCA", "a1"), transcript(2, "UCA", "a2")];
    let b = vec![transcript(3, "UCB", "b1")];

    let (state, req) = select(AppState::new(), "UCA");
    let state = loaded(state, req, "UCA", Ok(a.clone()));
    let (state, req) = select(state, "UCB");
    let state = loaded(state, req, "UCB", Ok(b));
    let (state, req) = select(state, "UCA");
    let state = loaded(state, req, "UCA", Ok(a.clone()));

    assert_eq!(state.transcripts(), a.as_slice());
}

#[test]
fn failed_fetch_keeps_previous_transcripts() {
    init_logging();
    let (state, req) = select(AppState::new(), "UCA");
    let state = loaded(state, req, "UCA", Ok(vec![transcript(1, "UCA", "a")]));
    let (state, req) = select(state, "UCB");
    let state = loaded(
        state,
        req,
        "UCB",
        Err(ClientError::Store("timeout".to_string())),
    );

    assert_eq!(state.transcripts(), &[transcript(1, "UCA", "a")]);
    assert_eq!(
        state.notifications()[0].message,
        "Failed to fetch transcripts: timeout"
    );
}

#[test]
fn stale_failure_is_discarded_silently() {
    init_logging();
    let (state, req_a) = select(AppState::new(), "UCA");
    let (state, _req_b) = select(state, "UCB");
    let state = loaded(
        state,
        req_a,
        "UCA",
        Err(ClientError::Store("timeout".to_string())),
    );

    assert!(state.notifications().is_empty());
}

#[test]
fn selecting_is_allowed_while_submitting() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::ChannelUrlChanged("https://youtube.com/@test".to_string()),
    );
    let (state, _) = update(state, Msg::SubmitClicked);
    assert_eq!(state.phase(), Phase::Submitting);

    let (state, req) = select(state, "UC1");
    let state = loaded(state, req, "UC1", Ok(vec![transcript(1, "UC1", "a")]));

    assert_eq!(state.phase(), Phase::Submitting);
    assert_eq!(state.transcripts().len(), 1);
}
