//! Interactive parking lot shell.
//!
//! Reads commands from stdin, one per line. When `PARKING_FLOORS` and
//! `PARKING_SPOTS_PER_FLOOR` are set (directly or via `.env`) the lot is
//! created at startup; otherwise run `create_parking_lot` first.

use std::io::{self, IsTerminal};

use anyhow::{anyhow, Context};
use parking_allocator::builders::LotBuilder;
use parking_allocator::config::LotConfig;
use parking_allocator::core::AppResult;
use parking_allocator::shell::Session;
use parking_allocator::util::init_tracing;

fn main() -> AppResult<()> {
    init_tracing();

    let mut session = match LotConfig::from_env().map_err(|e| anyhow!(e))? {
        Some(cfg) => {
            tracing::info!(?cfg, "creating lot from environment");
            Session::with_lot(LotBuilder::from_config(&cfg).build()?)
        }
        None => Session::new(),
    };

    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    session
        .run(stdin.lock(), io::stdout().lock(), prompt)
        .context("shell I/O failed")
}
