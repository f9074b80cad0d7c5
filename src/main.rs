#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use easyftp::config::{Cli, Config};
use easyftp::connection::ConnectionSimulator;
use easyftp::logging;
use easyftp::tui::{App, AppError, terminal};

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = Config::from(Cli::parse());

    let _log_guard = match logging::init(&config) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("easyftp: logging disabled: {e}");
            None
        }
    };
    info!(log_file = %config.log_file.display(), "starting easyftp");

    match run(config).await {
        Ok(()) => {
            info!("exited normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "fatal error");
            eprintln!("easyftp: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
async fn run(config: Config) -> Result<(), AppError> {
    terminal::install_panic_hook();
    let mut tui = terminal::setup()?;

    let connector = Box::new(ConnectionSimulator::new(config.connect_delay));
    let mut app = App::new(config, connector);
    let result = app.run(&mut tui).await;

    let restore_result = terminal::restore();
    match result {
        Err(e) => Err(e),
        Ok(()) => restore_result.map_err(Into::into),
    }
}
