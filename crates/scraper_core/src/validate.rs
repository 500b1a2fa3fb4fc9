use url::Url;

use crate::ClientError;

const YOUTUBE_HOSTS: [&str; 2] = ["youtube.com", "youtu.be"];

/// Client-side check run before a scrape is submitted.
///
/// Returns the trimmed URL on success, with `https://` added when the input
/// had no scheme.
pub fn validate_channel_url(raw: &str) -> Result<String, ClientError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ClientError::Validation("Channel URL is required".into()));
    }

    // Bare `youtube.com/@handle` input is accepted as https.
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    let parsed =
        Url::parse(&candidate).map_err(|_| ClientError::Validation("Invalid YouTube URL".into()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ClientError::Validation("Invalid YouTube URL".into()));
    }

    let host = parsed.host_str().unwrap_or_default().to_ascii_lowercase();
    let is_youtube = YOUTUBE_HOSTS
        .iter()
        .any(|allowed| host == *allowed || host.ends_with(&format!(".{allowed}")));
    if !is_youtube {
        return Err(ClientError::Validation("Invalid YouTube URL".into()));
    }

    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_handles_and_subdomains() {
        assert!(validate_channel_url("https://www.youtube.com/@test").is_ok());
        assert!(validate_channel_url("https://youtube.com/channel/UC1").is_ok());
        assert!(validate_channel_url("https://m.youtube.com/@test").is_ok());
        assert!(validate_channel_url("  https://youtu.be/abc  ").is_ok());
    }

    #[test]
    fn adds_https_when_scheme_is_missing() {
        assert_eq!(
            validate_channel_url("youtube.com/@test"),
            Ok("https://youtube.com/@test".to_string())
        );
        assert_eq!(
            validate_channel_url(" www.youtube.com/@test "),
            Ok("https://www.youtube.com/@test".to_string())
        );
        assert_eq!(
            validate_channel_url("example.com/@test"),
            Err(ClientError::Validation("Invalid YouTube URL".into()))
        );
    }

    #[test]
    fn rejects_blank_and_foreign_hosts() {
        assert_eq!(
            validate_channel_url("   "),
            Err(ClientError::Validation("Channel URL is required".into()))
        );
        assert_eq!(
            validate_channel_url("https://notyoutube.com/@x"),
            Err(ClientError::Validation("Invalid YouTube URL".into()))
        );
        assert!(validate_channel_url("ftp://youtube.com/@x").is_err());
        assert_eq!(
            validate_channel_url("http://"),
            Err(ClientError::Validation("Invalid YouTube URL".into()))
        );
    }
}
