use std::sync::Arc;

use anyhow::Context;
use scraper_core::{ClientError, Phase};
use scraper_engine::{
    Controller, HttpScrapeClient, RecordStore, RestRecordStore, ScrapeService, Settings,
};
use scraper_logging::{scraper_error, scraper_info, scraper_warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::Args;
use crate::command::{self, Command};
use crate::render;

pub async fn run(args: Args) -> anyhow::Result<()> {
    let settings = settings_from(&args).context("reading configuration")?;

    // Configuration problems are fatal and surface before anything mounts.
    let resolver = settings.endpoint_resolver();
    let scraper = HttpScrapeClient::from_resolver(&resolver, &settings.http)
        .context("resolving scraping service URL")?;
    let (store_url, store_key) = settings
        .store_credentials()
        .context("reading record store configuration")?;
    scraper_info!(
        "Starting in {} mode, service at {}, store at {}",
        resolver.mode(),
        scraper.base_url(),
        store_url
    );

    let scraper: Arc<dyn ScrapeService> = Arc::new(scraper);
    let store: Arc<dyn RecordStore> =
        Arc::new(RestRecordStore::new(store_url, store_key, &settings.http)?);
    let mut controller =
        Controller::new(store, scraper).with_cookies_file(settings.cookies_file.clone());
    controller.mount(Some(store_key.to_string()));

    match args.scrape {
        Some(url) => run_once(&mut controller, url).await,
        None => run_interactive(&mut controller).await,
    }
}

fn settings_from(args: &Args) -> Result<Settings, ClientError> {
    let mut settings = Settings::from_env()?;
    if let Some(mode) = args.mode {
        settings.mode = mode;
    }
    let overrides = [
        (&args.api_base_url, &mut settings.api_base_url),
        (&args.store_url, &mut settings.store_url),
        (&args.store_key, &mut settings.store_key),
        (&args.cookies_file, &mut settings.cookies_file),
    ];
    for (flag, slot) in overrides {
        if flag.is_some() {
            slot.clone_from(flag);
        }
    }
    Ok(settings)
}

/// Submits one URL, waits for everything it triggers and prints the result.
async fn run_once(controller: &mut Controller, url: String) -> anyhow::Result<()> {
    controller.set_channel_url(url);
    controller.submit();
    controller.settle().await;
    print!("{}", render::render(&controller.view()));

    let failed = controller
        .state()
        .notifications()
        .iter()
        .any(|note| note.severity == scraper_core::Severity::Error);
    if failed {
        anyhow::bail!("scrape did not complete successfully");
    }
    Ok(())
}

async fn run_interactive(controller: &mut Controller) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{}", command::HELP);
    print!("{}", render::render(&controller.view()));
    controller.consume_dirty();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };
                match command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => execute(controller, command).await,
                    Err(message) => println!("{message}"),
                }
            }
            _ = controller.next(), if controller.in_flight() > 0 => {}
        }

        if controller.consume_dirty() {
            print!("{}", render::render(&controller.view()));
        }
    }

    if controller.state().phase() == Phase::Submitting {
        scraper_warn!("Exiting while a scrape is still running on the service");
    }
    Ok(())
}

async fn execute(controller: &mut Controller, command: Command) {
    match command {
        Command::Scrape(url) => {
            if let Some(url) = url {
                controller.set_channel_url(url);
            }
            controller.submit();
        }
        Command::SetUrl(url) => controller.set_channel_url(url),
        Command::Refresh => controller.refresh_channels(),
        Command::Select(channel_id) => controller.select_channel(channel_id),
        Command::SelectRow(row) => {
            let channel_id = controller
                .state()
                .channels()
                .get(row - 1)
                .map(|channel| channel.channel_id.clone());
            match channel_id {
                Some(channel_id) => controller.select_channel(channel_id),
                None => println!("no channel in row {row}"),
            }
        }
        Command::Dismiss(Some(id)) => controller.dismiss(id),
        Command::Dismiss(None) => {
            let ids: Vec<_> = controller
                .state()
                .notifications()
                .iter()
                .map(|note| note.id)
                .collect();
            for id in ids {
                controller.dismiss(id);
            }
        }
        Command::Health => match controller.health_check().await {
            Ok(body) => println!("service is up: {body}"),
            Err(err) => {
                scraper_error!("Health check failed: {}", err);
                println!("service health check failed: {err}");
            }
        },
        Command::Show => print!("{}", render::render(&controller.view())),
        Command::Help => println!("{}", command::HELP),
        Command::Quit => {}
    }
}
