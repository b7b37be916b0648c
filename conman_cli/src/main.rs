mod ui;

use clap::Parser;
use conman_core::utils::logging::init_logging;

use crate::ui::cli;

fn main() {
    init_logging();
    let args = cli::Args::parse_from(cli::normalize_args(std::env::args_os()));
    if let Err(e) = cli::run_cli(args) {
        eprintln!("{e:#}");
        std::process::exit(cli::exit_code(&e));
    }
}
