use clap::Parser;
use std::path::PathBuf;

use crate::tree::TreeConfig;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "dirtree",
    version,
    about = "Print a directory hierarchy as a tree",
    after_help = "Examples:\n  dirtree .\n  dirtree src -f\n\nFlags may appear before or after the path."
)]
pub struct Args {
    /// Directory to render
    pub path: PathBuf,

    /// Include regular files, annotated with their size
    #[arg(short = 'f', long = "files")]
    pub include_files: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.verbose > 3 {
            self.verbose = 3;
        }
        self
    }

    pub fn tree_config(&self) -> TreeConfig {
        TreeConfig {
            include_files: self.include_files,
        }
    }

    /// Default log filter for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
