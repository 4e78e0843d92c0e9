use robench_runner::prelude::{init, run};

fn main() -> anyhow::Result<()> {
    let cli = init();

    let exit_code = run(&cli)?;
    log::debug!("Exiting with code {exit_code}");

    std::process::exit(exit_code)
}
