//! # esbnb
//!
//! `esbnb` installs ESLint with one of the Airbnb shareable configs and
//! wires it into the project's `.eslintrc` file.
//!
//! ## Usage
//!
//! **Default (React) config:**
//! ```sh
//! esbnb
//! ```
//!
//! **Base or legacy config:**
//! ```sh
//! esbnb base
//! esbnb legacy
//! ```
//!
//! A `.eslintrc` file will be created if not already present and
//! properly configured; an existing one is backed up with a timestamp
//! before being touched.

use anyhow::Result;
use clap::Parser as _;
use esbnb::cli::Args;
use esbnb::error::EsbnbError;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber based on verbose flag
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_target(false).with_env_filter(filter).init();

    match esbnb::run(args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{}", err);
            std::process::exit(
                err.downcast_ref::<EsbnbError>()
                    .map_or(1, EsbnbError::exit_code),
            );
        }
    }
}
