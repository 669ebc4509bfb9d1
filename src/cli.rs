use crate::config::{DEFAULT_BASE_NAME, Language, RunConfig, SortMethod, TransferMode};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "rename_with",
    author,
    version,
    about = "Rename image files and their matching .txt files into a numbered sequence",
    long_about = None
)]
pub struct Cli {
    /// Folder containing image files (searched recursively)
    pub folder: PathBuf,

    /// Base name for renamed files
    #[arg(short, long, default_value = DEFAULT_BASE_NAME)]
    pub base: String,

    /// Copy instead of move files
    #[arg(long)]
    pub copy: bool,

    /// Sort files by name, creation time, or modification time
    #[arg(long, value_enum, default_value_t = SortMethod::Modified)]
    pub sort: SortMethod,

    /// Reverse sort order
    #[arg(long)]
    pub reverse: bool,

    /// Simulate without modifying files
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress output except the summary and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Interface language
    #[arg(long, value_enum, env = "RENAME_WITH_LANG", default_value_t = Language::EnUs)]
    pub lang: Language,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    #[must_use]
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            source: self.folder.clone(),
            base_name: self.base.clone(),
            sort_method: self.sort,
            reverse: self.reverse,
            transfer_mode: if self.copy {
                TransferMode::Copy
            } else {
                TransferMode::Move
            },
            dry_run: self.dry_run,
            quiet: self.quiet,
        }
    }
}
