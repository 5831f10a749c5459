use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use folio_core::clock::ClockZone;
use tracing::debug;

use super::Session;

#[derive(Parser, Debug)]
pub struct ClockArgs {
    /// IANA timezone, e.g. Europe/Istanbul (defaults to FOLIO_TZ, config, then local time)
    #[arg(long)]
    pub tz: Option<String>,

    /// Keep printing once per second until Ctrl+C
    #[arg(long, short = 'w')]
    pub watch: bool,
}

pub async fn run_clock(args: ClockArgs, session: &Session) -> Result<()> {
    let zone = match args.tz.as_deref() {
        Some(name) => ClockZone::from_option(Some(name)),
        None => session.config.timezone(),
    }
    .context("Invalid timezone")?;

    if !args.watch {
        println!("{}", zone.now());
        return Ok(());
    }

    debug!(zone = %zone.name(), "watching clock");
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    loop {
        tokio::select! {
            _ = ticker.tick() => println!("{}", zone.now()),
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    Ok(())
}
