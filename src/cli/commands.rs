use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_FILE;

#[derive(Parser)]
#[command(
    name = "taskbook",
    version,
    about = "Track tasks linked to address book contacts",
    after_help = "\
VALUES:
  CATEGORY  [LEVEL:]TYPE, TYPE one of database/frontend/backend/uiux/presentation/others
            (LEVEL defaults to 0; categories match only when level and type agree)
  DATE      YYYY-MM-DD
  PRIORITY  low | medium | high

NOTE:
  INDEX is the 1-based position shown by `taskbook list`.
  `filter` keeps tasks whose deadline is strictly before --deadline.

EXIT CODES:
  0  Success
  1  Error (validation, bad index, duplicate task, storage)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Task list file
    #[arg(long, global = true, env = "TASKBOOK_FILE", default_value = DEFAULT_FILE)]
    pub file: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task
    Add(AddArgs),

    /// List all tasks
    List {
        /// Put open tasks before done ones
        #[arg(long)]
        sort_by_status: bool,
    },

    /// Edit some fields of a task
    Edit(EditArgs),

    /// Show tasks matching a category and/or due before a date
    #[command(after_help = "\
NOTE:
  At least one of --category or --deadline must be provided.
  With both, a task must match the category AND be due before the date.")]
    Filter {
        #[arg(long)]
        category: Option<String>,
        /// Keep tasks due strictly before this date
        #[arg(long)]
        deadline: Option<String>,
    },

    /// Delete a task
    Delete { index: usize },

    /// Mark a task as done
    Mark { index: usize },

    /// Mark a task as not done
    Unmark { index: usize },
}

#[derive(Args)]
pub struct AddArgs {
    /// Task name
    pub name: String,
    #[arg(long)]
    pub category: String,
    #[arg(long)]
    pub description: String,
    #[arg(long, default_value = "medium")]
    pub priority: String,
    #[arg(long)]
    pub deadline: String,
    /// Email of the contact this task is for
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Args)]
pub struct EditArgs {
    pub index: usize,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub deadline: Option<String>,
    #[arg(long, conflicts_with = "clear_email")]
    pub email: Option<String>,
    /// Unlink the contact
    #[arg(long)]
    pub clear_email: bool,
    #[arg(long, conflicts_with = "undone")]
    pub done: bool,
    #[arg(long)]
    pub undone: bool,
}
