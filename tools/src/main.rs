//! telco-console: interactive prepaid account simulator.
//!
//! Usage:
//!   telco-console
//!   telco-console --data-dir ./accounts --catalog packages.json
//!
//! Diagnostics go to stderr; set RUST_LOG=info to see account events.

use anyhow::Result;
use std::env;
use std::io;
use std::path::Path;
use telco_core::{config::TelcoConfig, console::Console};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let data_dir = find_arg(&args, "--data-dir").unwrap_or(".");

    let mut config = TelcoConfig::default().with_data_dir(data_dir);
    if let Some(catalog) = find_arg(&args, "--catalog") {
        config = config.load_catalog(Path::new(catalog))?;
        log::info!("catalog: {} packages from {catalog}", config.packages.len());
    }
    log::debug!("data dir: {}", config.data_dir.display());

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console.run(config)?;
    Ok(())
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
