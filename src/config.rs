//! Command-line arguments and the immutable runtime configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::connection::ConnectionSimulator;
use crate::tui::Theme;

/// Name of the log file written when `--log-file` is not given.
const LOG_FILE_NAME: &str = "easyftp.log";

/// Walks through connecting to an FTP server.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "easyftp", version, about)]
pub struct Cli {
    /// Seconds the simulated connection takes to resolve
    #[arg(long, default_value_t = ConnectionSimulator::DEFAULT_DELAY.as_secs(), env = "EASYFTP_CONNECT_DELAY")]
    pub connect_delay: u64,

    /// Spinner frame interval in milliseconds
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_rate: u64,

    /// Render without colors
    #[arg(long)]
    pub no_color: bool,

    /// Log file path (defaults to the platform cache directory)
    #[arg(long, env = "EASYFTP_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Settings fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How long a connection attempt takes.
    pub connect_delay: Duration,
    /// Interval between spinner frames.
    pub tick_rate: Duration,
    /// Styles handed to every draw function.
    pub theme: Theme,
    /// Where tracing output goes.
    pub log_file: PathBuf,
    /// Default filter directive when `RUST_LOG` is unset.
    pub log_level: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            connect_delay: ConnectionSimulator::DEFAULT_DELAY,
            tick_rate: Duration::from_millis(100),
            theme: Theme::default(),
            log_file: default_log_file(),
            log_level: "warn",
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let log_level = match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        Self {
            connect_delay: Duration::from_secs(cli.connect_delay),
            tick_rate: Duration::from_millis(cli.tick_rate.max(1)),
            theme: if cli.no_color {
                Theme::plain()
            } else {
                Theme::default()
            },
            log_file: cli.log_file.unwrap_or_else(default_log_file),
            log_level,
        }
    }
}

/// `<cache dir>/easyftp/easyftp.log`, falling back to the temp directory.
fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("easyftp")
        .join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let argv = std::iter::once("easyftp").chain(args.iter().copied());
        Config::from(Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn explicit_flags_are_applied() {
        let config = parse(&[
            "--connect-delay",
            "2",
            "--tick-rate",
            "50",
            "--no-color",
            "--log-file",
            "/tmp/x.log",
            "-vv",
        ]);
        assert_eq!(config.connect_delay, Duration::from_secs(2));
        assert_eq!(config.tick_rate, Duration::from_millis(50));
        assert_eq!(config.theme, Theme::plain());
        assert_eq!(config.log_file, PathBuf::from("/tmp/x.log"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn verbosity_saturates_at_trace() {
        assert_eq!(parse(&["-vvvvv", "--log-file", "/tmp/x.log"]).log_level, "trace");
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        let result = Cli::try_parse_from(["easyftp", "--tick-rate", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn default_log_file_is_named() {
        assert!(default_log_file().ends_with("easyftp/easyftp.log"));
    }
}
