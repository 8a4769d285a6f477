//! # Banana Runtime
//!
//! Command line driver for the banana selling environment. It builds an
//! environment by id, plays a number of episodes with a simple policy and
//! reports how each one ended. With `--json` every episode is written to
//! stdout as one JSON object per line; logs always go to stderr.

#![deny(clippy::all, clippy::pedantic)]

mod app;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = app::Args::parse();
    init_tracing(&args.log_level);
    app::run(&args)
}

/// `RUST_LOG` wins over `--log-level` when set.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
