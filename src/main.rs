mod app;
mod cli;
mod config;
mod consts;
mod error;
mod footer;
mod output;
mod stamp;
mod utils;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::{debug_log, set_debug};

fn main() -> ExitCode {
    let (config, config_path) = Config::load();
    let cli = Cli::parse().with_config(&config);

    set_debug(cli.debug);
    if let Some(path) = &config_path {
        debug_log!("Loaded config from {}", path.display());
    }

    match app::run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
