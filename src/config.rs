use std::path::PathBuf;

use crate::cli::Cli;

/// File used when neither `--file` nor `TASKBOOK_FILE` is given.
pub const DEFAULT_FILE: &str = "taskbook.json";

/// Settings shared by every command run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub file: PathBuf,
    pub json: bool,
    pub verbose: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            file: cli.file.clone(),
            json: cli.json,
            verbose: cli.verbose,
        }
    }
}
