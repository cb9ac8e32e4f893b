//! cli-starter entry point

use cli_starter::entry::EntryPoint;
use std::process;

fn main() {
    // Launched under a foreign name: nothing to do
    if !EntryPoint::current().is_main_module() {
        return;
    }

    let exit_code = cli_starter::cli::run(std::env::args_os());

    process::exit(exit_code);
}
