//! # CLI Behavior
//!
//! This is **one possible client** of the discovery engine. It is the only
//! place that knows about terminal output, exit codes and logging setup.
//!
//! ### Naked Execution (`discover`)
//!
//! Running `discover` with no arguments defaults to `discover list` over the
//! configured default domain and the built-in sample catalog.
//!
//! ### One Session per Invocation
//!
//! `discover list` builds a fresh session from the configuration, applies the
//! flags as store mutations (domain, role, search, tags, attribute,
//! disciplinary type, subfilters) and prints what is visible. A flag the
//! store rejects, such as a subfilter that does not belong to the domain,
//! aborts with the store's error message.
//!
//! ### Logging
//!
//! Library diagnostics go through `tracing`. The subscriber writes to stderr,
//! filtered by `DISCOVER_LOG` (e.g. `DISCOVER_LOG=discoverapp=debug`), falling
//! back to `warn`, or `debug` with `--verbose`.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Dispatch, session wiring, printing
//! - `render`: Output formatting (lists, facets, JSON)
//! - `styles`: Terminal styling constants

mod commands;
mod render;
pub mod setup;
mod styles;

use anyhow::Result;
use clap::Parser;
use setup::Cli;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("DISCOVER_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ctx = commands::AppContext::load()?;
    commands::dispatch(cli, &ctx)
}
