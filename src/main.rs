use clap::Parser;
use std::process;

use taskbook::cli::{self, Cli};
use taskbook::config::Config;
use taskbook::logging;

fn main() {
    let cli_args = Cli::parse();
    let config = Config::from_cli(&cli_args);

    if let Err(e) = logging::init(config.verbose) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }

    process::exit(cli::task::run(cli_args.command, &config));
}
