mod influx_line_reporter;
mod transport;

use serde::Deserialize;

pub use influx_line_reporter::{InfluxLineReporter, MEASUREMENT};
pub use transport::{HttpTransport, MetricsTransport, TransportError};

/// The outcome of a single benchmark case.
///
/// Times are in seconds and are written to InfluxDB as they are, without any validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BenchResult {
    #[serde(alias = "testFolder")]
    pub test_folder: String,
    #[serde(alias = "testName")]
    pub test_name: String,
    #[serde(alias = "testPath")]
    pub test_path: String,
    /// Usually `success` or `failed`, but any text is accepted.
    pub status: String,
    #[serde(alias = "timeMin")]
    pub time_min: f64,
    #[serde(alias = "timeAvg")]
    pub time_avg: f64,
    #[serde(alias = "timeMax")]
    pub time_max: f64,
    /// Confidence interval of the average time.
    #[serde(alias = "confInt")]
    pub conf_int: f64,
    /// Name of the VM under test, e.g. `luau`
    #[serde(alias = "vmName")]
    pub vm_name: String,
    #[serde(alias = "vmPath")]
    pub vm_path: String,
}

/// Controls where, and whether, results are reported.
#[derive(Debug, Clone, Default)]
pub struct ReporterConfig {
    /// URL to POST results to. Reporting is disabled when this is unset or empty.
    pub report_metrics: Option<String>,
    /// Print each line to stdout as it is reported.
    pub print_influx_debugging: bool,
}

impl ReporterConfig {
    pub fn new(report_metrics: Option<String>) -> Self {
        Self {
            report_metrics,
            print_influx_debugging: false,
        }
    }

    pub fn with_debug_printing(mut self, enabled: bool) -> Self {
        self.print_influx_debugging = enabled;
        self
    }

    /// The destination URL, if reporting is enabled.
    pub fn destination(&self) -> Option<&str> {
        self.report_metrics.as_deref().filter(|url| !url.is_empty())
    }
}
