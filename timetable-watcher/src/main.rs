use std::io;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use timetable_watcher::Watcher;
use timetable_watcher::cli::Args;
use timetable_watcher::stations::StationRegistry;
use timetable_watcher::timetable::TimetableClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the timetable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let invocation = args.invocation().unwrap_or_else(|e| e.exit());

    let client = TimetableClient::new(args.timetable_config())
        .context("failed to create timetable client")?;
    let watcher = Watcher::new(StationRegistry::eurostar(), client);

    let mut out = io::stdout().lock();
    watcher
        .check(
            &invocation.start,
            &invocation.dest,
            invocation.date,
            invocation.train(),
            &mut out,
        )
        .await?;

    Ok(())
}
