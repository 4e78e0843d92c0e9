use robench_instruments::{InfluxLineReporter, MetricsTransport};

use crate::cli::RobenchReportCli;
use crate::results::{exit_code_for, load_results};

/// Report the results named by the CLI and return the exit code for the process.
///
/// Errors are only returned if the results could not be loaded. Failing to deliver results to
/// the metrics collector does not change the outcome.
pub fn run(cli: &RobenchReportCli) -> anyhow::Result<i32> {
    run_with_reporter(cli, InfluxLineReporter::new(cli.reporter_config()))
}

pub(crate) fn run_with_reporter<T: MetricsTransport>(
    cli: &RobenchReportCli,
    mut reporter: InfluxLineReporter<T>,
) -> anyhow::Result<i32> {
    let results = load_results(&cli.results)?;
    log::info!(
        "Loaded {} results from {}",
        results.len(),
        cli.results.display()
    );

    for result in &results {
        reporter.report_result(result);
    }

    let exit_code = cli.exit_code.unwrap_or_else(|| exit_code_for(&results));
    reporter.flush(exit_code);

    Ok(exit_code)
}
