mod cli;
mod init;
mod results;
mod run;

pub mod prelude {
    pub use crate::cli::RobenchReportCli;
    pub use crate::init::init;
    pub use crate::results::{exit_code_for, load_results, SUCCESS_STATUS};
    pub use crate::run::run;
}
