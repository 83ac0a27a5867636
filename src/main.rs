use anyhow::Result;
use clap::Parser;
use depunify::cli;
use log::info;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    info!("Starting depunify v{}", env!("CARGO_PKG_VERSION"));
    cli::run(args)
}
