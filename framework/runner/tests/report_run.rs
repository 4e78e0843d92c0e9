use robench_runner::prelude::{load_results, run, RobenchReportCli};
use std::io::Write;
use std::net::TcpListener;

const RESULTS: &str = r#"[
  {"testFolder":"suite1","testName":"bench_a","testPath":"/t/a","status":"success","timeMin":1.0,"timeAvg":1.5,"timeMax":2.0,"confInt":0.1,"vmName":"luau","vmPath":"/bin/luau"},
  {"testFolder":"suite1","testName":"bench_b","testPath":"/t/b","status":"success","timeMin":2.0,"timeAvg":2.5,"timeMax":3.0,"confInt":0.2,"vmName":"luau","vmPath":"/bin/luau"}
]"#;

fn results_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
    file.write_all(RESULTS.as_bytes())
        .expect("failed to write results");
    file
}

#[test]
fn run_without_reporting() {
    let file = results_file();
    let cli = RobenchReportCli {
        results: file.path().to_path_buf(),
        report_metrics: None,
        print_influx_debugging: true,
        exit_code: None,
    };

    assert_eq!(load_results(file.path()).unwrap().len(), 2);
    assert_eq!(run(&cli).unwrap(), 0);
}

#[test]
fn run_with_unreachable_collector_keeps_exit_code() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind listener");
        listener.local_addr().unwrap().port()
    };

    let file = results_file();
    let cli = RobenchReportCli {
        results: file.path().to_path_buf(),
        report_metrics: Some(format!("http://127.0.0.1:{port}/write?db=bench")),
        print_influx_debugging: false,
        exit_code: Some(2),
    };

    assert_eq!(run(&cli).unwrap(), 2);
}
