use crate::cli::RobenchReportCli;
use clap::Parser;

/// Log level used when `RUST_LOG` is not set, so delivery failures are always visible.
const DEFAULT_LOG_FILTER: &str = "info";

/// Initialise the CLI and logging for the reporter.
pub fn init() -> RobenchReportCli {
    logger_builder(env_logger::Env::default()).init();

    RobenchReportCli::parse()
}

fn logger_builder(env: env_logger::Env) -> env_logger::Builder {
    env_logger::Builder::from_env(env.default_filter_or(DEFAULT_LOG_FILTER))
}
