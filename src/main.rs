use clap::Parser;
use std::io;

use passforge::cli::{menu, Args};
use passforge::Config;

fn main() -> Result<(), io::Error> {
    // --help and --version only; every generation input is prompted for.
    let _args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    log::info!("🔐 Starting PassForge - Secure Password Generator");

    let config = Config::default();

    menu::run_menu(&config).map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    log::info!("✅ PassForge shutdown complete.");
    Ok(())
}
