use scraper_core::NotificationId;

/// A line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the channel URL (if given) and submit it.
    Scrape(Option<String>),
    /// Only edit the channel URL field.
    SetUrl(String),
    Refresh,
    /// Select a channel by its YouTube channel ID.
    Select(String),
    /// Select a channel by its 1-based row in the channels table.
    SelectRow(usize),
    /// Dismiss one notification, or all when no id is given.
    Dismiss(Option<NotificationId>),
    Health,
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  scrape [URL]      submit the channel URL (sets it first when given)
  url URL           set the channel URL without submitting
  refresh           reload the channel list
  view N            show transcripts of channel row N
  select ID         show transcripts of channel ID (e.g. UC...)
  dismiss [ID]      dismiss a notification (all when ID is omitted)
  health            check the scraping service is up
  show              redraw the screen
  help              this text
  quit              exit";

pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let arg = (!rest.is_empty()).then(|| rest.to_string());

    match word.to_ascii_lowercase().as_str() {
        "" | "show" => Ok(Command::Show),
        "scrape" | "submit" => Ok(Command::Scrape(arg)),
        "url" => arg
            .map(Command::SetUrl)
            .ok_or_else(|| "usage: url URL".to_string()),
        "refresh" | "channels" => Ok(Command::Refresh),
        "view" => rest
            .parse::<usize>()
            .ok()
            .filter(|row| *row > 0)
            .map(Command::SelectRow)
            .ok_or_else(|| "usage: view N (row number from the channels table)".to_string()),
        "select" => arg
            .map(Command::Select)
            .ok_or_else(|| "usage: select CHANNEL_ID".to_string()),
        "dismiss" => match arg {
            None => Ok(Command::Dismiss(None)),
            Some(raw) => raw
                .parse()
                .map(|id| Command::Dismiss(Some(id)))
                .map_err(|_| format!("not a notification id: {raw}")),
        },
        "health" => Ok(Command::Health),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("unknown command '{other}', type 'help'")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_commands_with_and_without_arguments() {
        assert_eq!(parse("scrape"), Ok(Command::Scrape(None)));
        assert_eq!(
            parse("  scrape   https://youtube.com/@test "),
            Ok(Command::Scrape(Some("https://youtube.com/@test".to_string())))
        );
        assert_eq!(parse("view 2"), Ok(Command::SelectRow(2)));
        assert_eq!(parse("SELECT UC1"), Ok(Command::Select("UC1".to_string())));
        assert_eq!(parse("dismiss"), Ok(Command::Dismiss(None)));
        assert_eq!(parse("dismiss 3"), Ok(Command::Dismiss(Some(3))));
        assert_eq!(parse(""), Ok(Command::Show));
        assert_eq!(parse("q"), Ok(Command::Quit));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse("view 0").is_err());
        assert!(parse("view x").is_err());
        assert!(parse("url").is_err());
        assert!(parse("dismiss abc").is_err());
        assert!(parse("frobnicate").is_err());
    }
}
