use clap::Parser;

mod app;
mod cli;
mod command;
mod render;

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real env vars still apply.
    dotenv::dotenv().ok();
    let args = cli::Args::parse();
    scraper_logging::initialize(args.log.into(), args.level());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run(args))
}
