use crate::environment::RunEnvironment;
use crate::line_protocol::{float_literal, LineBuilder};
use crate::report::transport::{HttpTransport, MetricsTransport};
use crate::report::{BenchResult, ReporterConfig};

/// The measurement that all benchmark results are written to.
pub const MEASUREMENT: &str = "robench";

/// Collects benchmark results as InfluxDB line protocol and sends them in a single request.
///
/// Lines are kept in memory until [InfluxLineReporter::flush] is called. Flushing does not clear
/// the buffer, so flushing twice sends every line twice.
///
/// A failure to deliver results is logged and otherwise ignored. The exit status of a benchmark
/// run should reflect the benchmarks, not whether the metrics collector was reachable.
pub struct InfluxLineReporter<T = HttpTransport> {
    config: ReporterConfig,
    transport: T,
    lines: Vec<String>,
}

impl InfluxLineReporter<HttpTransport> {
    pub fn new(config: ReporterConfig) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: MetricsTransport> InfluxLineReporter<T> {
    pub fn with_transport(config: ReporterConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            lines: Vec::new(),
        }
    }

    /// Whether [InfluxLineReporter::flush] will send anything.
    pub fn is_enabled(&self) -> bool {
        self.config.destination().is_some()
    }

    /// The lines reported so far, in the order they were reported.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Record a result, tagged with the environment of the current process.
    pub fn report_result(&mut self, result: &BenchResult) {
        self.report_result_in(result, &RunEnvironment::current());
    }

    /// Record a result, tagged with the given environment.
    pub fn report_result_in(&mut self, result: &BenchResult, env: &RunEnvironment) {
        let line = LineBuilder::new(MEASUREMENT)
            .tag("hostname", &env.hostname)
            .tag("is_teamcity", env.is_teamcity_tag())
            .tag("platform", &env.platform)
            .raw_tag("type=event")
            .raw_tag("priority=high")
            .tag("test_folder", &result.test_folder)
            .tag("test_name", &result.test_name)
            .tag("test_path", &result.test_path)
            .tag("vm_name", &result.vm_name)
            .tag("vm_path", &result.vm_path)
            .field("status", result.status.as_str())
            .raw_field("time_min", float_literal(result.time_min))
            .raw_field("time_avg", float_literal(result.time_avg))
            .raw_field("time_max", float_literal(result.time_max))
            .raw_field("time_conf_int", float_literal(result.conf_int))
            .build();

        self.send_line_message(line);
    }

    fn send_line_message(&mut self, line: String) {
        if self.config.print_influx_debugging {
            println!("[influx] {line}");
        }

        self.lines.push(line);
    }

    /// Send every reported line to the configured destination in one request.
    ///
    /// Does nothing if reporting is disabled. The exit code of the run is accepted so that
    /// callers can flush the same way on success and failure, it does not change what is sent.
    pub fn flush(&self, process_exit_code: i32) {
        let Some(url) = self.config.destination() else {
            log::debug!("Metrics reporting is disabled, not sending results");
            return;
        };

        log::info!("Reporting results to Influx.");
        log::debug!(
            "Sending {} results for a run that exited with {}",
            self.lines.len(),
            process_exit_code
        );

        let request = self.lines.join("\n");
        if let Err(e) = self.transport.post(url, &request) {
            log::warn!("Unable to report metrics to influx. Reason: {}", e.reason());
            log::warn!("Request content (for debugging):\n{}", request);
        }
    }
}
