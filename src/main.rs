//! ggst-team - Command-line tool for generating 3-on-3 team images

use std::process::ExitCode;

use ggst_team::cli;

fn main() -> ExitCode {
    cli::run()
}
