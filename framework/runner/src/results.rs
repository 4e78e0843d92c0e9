use anyhow::Context;
use robench_instruments::BenchResult;
use std::path::Path;

/// Status of a benchmark case that passed.
pub const SUCCESS_STATUS: &str = "success";

/// Load benchmark results from a file.
///
/// The file may contain a JSON array of results, or one result per line. Blank lines in the
/// per-line form are skipped.
pub fn load_results(path: impl AsRef<Path>) -> anyhow::Result<Vec<BenchResult>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read results from {}", path.display()))?;

    if content.trim_start().starts_with('[') {
        return serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse results array in {}", path.display()));
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).with_context(|| {
                format!(
                    "Failed to parse result on line {} of {}",
                    index + 1,
                    path.display()
                )
            })
        })
        .collect()
}

/// The exit code for a run: `0` if every result succeeded, otherwise `1`.
pub fn exit_code_for(results: &[BenchResult]) -> i32 {
    if results.iter().all(|r| r.status == SUCCESS_STATUS) {
        0
    } else {
        1
    }
}
