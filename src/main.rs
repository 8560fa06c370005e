//! cfn2ts binary entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    cfn2ts::cli::run()
}
