use clap::{Parser, ValueEnum};
use log::LevelFilter;
use scraper_engine::RuntimeMode;
use scraper_logging::LogDestination;

/// Scrape YouTube channel transcripts through the scraping service and browse
/// what the record store holds.
#[derive(Debug, Parser)]
#[command(name = "transcript-scraper", version, about)]
pub struct Args {
    /// Runtime mode; overrides SCRAPER_MODE.
    #[arg(long)]
    pub mode: Option<RuntimeMode>,

    /// Scraping service base URL; overrides SCRAPER_API_BASE_URL.
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Record store URL; overrides SCRAPER_STORE_URL.
    #[arg(long)]
    pub store_url: Option<String>,

    /// Record store API key; overrides SCRAPER_STORE_KEY.
    #[arg(long)]
    pub store_key: Option<String>,

    /// Cookie jar forwarded to the service; overrides SCRAPER_COOKIES_FILE.
    #[arg(long)]
    pub cookies_file: Option<String>,

    /// Submit this channel URL, wait for the outcome, print it and exit.
    #[arg(long, value_name = "CHANNEL_URL")]
    pub scrape: Option<String>,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}
