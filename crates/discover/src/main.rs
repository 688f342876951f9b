//! # Discover CLI
//!
//! A terminal client for the `discoverapp` engine. The binary is thin: the
//! CLI lives in `src/cli/` and this file only invokes `cli::run()` and turns
//! an error into a message and an exit code.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/cli/)                                       │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Command dispatch + session wiring (commands.rs)          │
//! │  - Plain-text and JSON output (render.rs, styles.rs)        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  discoverapp::api::DiscoverApi                              │
//! │  - Filter store, context resolver, predicate engine         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each invocation is one discovery session: flags are applied as store
//! mutations in a fixed order, then the visible items are printed. Invalid
//! filter input is reported on stderr as `Error: ...` with exit code 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
