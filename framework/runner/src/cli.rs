use clap::Parser;
use robench_instruments::ReporterConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
pub struct RobenchReportCli {
    /// Path to the benchmark results to report.
    ///
    /// Either a JSON array of results or one JSON result per line.
    #[clap(long)]
    pub results: PathBuf,

    /// URL to POST results to in the InfluxDB line protocol format, for example
    /// `http://localhost:8086/write?db=bench`.
    ///
    /// Results are not reported when this is not set.
    #[clap(long)]
    pub report_metrics: Option<String>,

    /// Print each line to stdout as it is reported.
    #[clap(long, default_value = "false")]
    pub print_influx_debugging: bool,

    /// Exit with this code instead of deriving one from the result statuses.
    ///
    /// Useful when the benchmark run itself failed and that should be the outcome regardless of the
    /// results that were collected.
    #[clap(long, allow_negative_numbers = true)]
    pub exit_code: Option<i32>,
}

impl RobenchReportCli {
    pub fn reporter_config(&self) -> ReporterConfig {
        ReporterConfig::new(self.report_metrics.clone())
            .with_debug_printing(self.print_influx_debugging)
    }
}
