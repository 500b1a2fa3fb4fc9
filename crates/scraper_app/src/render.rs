use std::fmt::Write;

use scraper_core::{AppViewModel, ChannelRowView, Notification, Severity, TranscriptRowView};

const TITLE_WIDTH: usize = 40;
const ID_WIDTH: usize = 26;
const EXCERPT_INDENT: &str = "      | ";

/// Renders the whole screen as plain text.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "== YouTube Transcript Scraper ==");
    for note in &view.notifications {
        let _ = writeln!(out, "{}", format_notification(note));
    }
    if !view.store_key_configured {
        let _ = writeln!(out, "(record store key not configured)");
    }

    let url = if view.channel_url.is_empty() {
        "<e.g. https://www.youtube.com/@channelhandle>"
    } else {
        view.channel_url.as_str()
    };
    let button = if view.submit_enabled {
        format!("[{}]", view.submit_label)
    } else {
        format!("({})", view.submit_label)
    };
    let _ = writeln!(out, "Channel URL: {url}  {button}");

    let _ = writeln!(out);
    let _ = writeln!(out, "Channels");
    if view.channels.is_empty() {
        let _ = writeln!(out, "  (none yet)");
    } else {
        let _ = writeln!(
            out,
            "  {:>3}  {:<TITLE_WIDTH$}  {:<ID_WIDTH$}",
            "#", "Title", "Channel ID"
        );
        for (index, channel) in view.channels.iter().enumerate() {
            let _ = writeln!(out, "{}", format_channel_row(index + 1, channel));
        }
    }

    if view.show_transcripts {
        let _ = writeln!(out);
        let heading = match &view.selected_channel {
            Some(channel_id) => format!("Transcripts ({channel_id})"),
            None => "Transcripts".to_string(),
        };
        let _ = writeln!(out, "{heading}");
        for transcript in &view.transcripts {
            out.push_str(&format_transcript_row(transcript));
        }
    }

    out
}

fn format_notification(note: &Notification) -> String {
    let tag = match note.severity {
        Severity::Success => "OK",
        Severity::Warning => "WARN",
        Severity::Error => "ERR",
    };
    format!(
        "[{tag} #{id}] {title}: {message}",
        id = note.id,
        title = note.title,
        message = note.message
    )
}

fn format_channel_row(row: usize, channel: &ChannelRowView) -> String {
    let marker = if channel.selected { '>' } else { ' ' };
    format!(
        "{marker} {row:>3}  {title:<TITLE_WIDTH$}  {id:<ID_WIDTH$}",
        title = clip(&channel.title, TITLE_WIDTH),
        id = channel.channel_id
    )
}

fn format_transcript_row(transcript: &TranscriptRowView) -> String {
    let mut out = format!(
        "  - {title} [{video}]\n",
        title = transcript.title,
        video = transcript.video_id
    );
    for line in transcript.excerpt.split('\n') {
        out.push_str(EXCERPT_INDENT);
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
        clipped.push('~');
        clipped
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use scraper_core::{update, AppState, Channel, Msg, RecordId, Transcript};

    use super::*;

    fn loaded_state() -> AppState {
        let (state, _) = update(
            AppState::new(),
            Msg::ChannelsLoaded(Ok(vec![Channel {
                id: RecordId::Int(1),
                channel_id: "UC1".to_string(),
                title: "Test".to_string(),
            }])),
        );
        let (state, _) = update(state, Msg::ChannelSelected("UC1".to_string()));
        let (state, _) = update(
            state,
            Msg::TranscriptsLoaded {
                request_id: 1,
                channel_id: "UC1".to_string(),
                result: Ok(vec![Transcript {
                    id: RecordId::Int(9),
                    channel_id: "UC1".to_string(),
                    video_id: "vid9".to_string(),
                    title: "Episode".to_string(),
                    transcript: "1\n2\n3\n4\n5\n6".to_string(),
                }]),
            },
        );
        state
    }

    #[test]
    fn renders_channels_and_truncated_transcripts() {
        let text = render(&loaded_state().view());

        assert!(text.contains("[Scrape Transcripts]"));
        assert!(text.contains(">   1  Test"));
        assert!(text.contains("Transcripts (UC1)"));
        assert!(text.contains("  - Episode [vid9]\n"));
        assert!(text.contains(&format!("{EXCERPT_INDENT}5...\n")));
        assert!(!text.contains(&format!("{EXCERPT_INDENT}6\n")));
    }

    #[test]
    fn hides_transcripts_section_when_empty() {
        let text = render(&AppState::new().view());
        assert!(text.contains("(none yet)"));
        assert!(!text.contains("Transcripts ("));
    }

    #[test]
    fn clips_long_titles() {
        assert_eq!(clip("abcdef", 4), "abc~");
        assert_eq!(clip("abc", 4), "abc");
    }
}
