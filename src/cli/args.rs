//! CLI argument parsing

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Render a directory tree as plain text, Markdown and HTML
#[derive(Parser, Debug)]
#[command(name = "foldertree")]
#[command(about = "Render a directory tree as plain text, Markdown and HTML")]
#[command(version)]
pub struct Args {
    /// Stop descending after this many levels below the target
    #[arg(long, value_name = "DEPTH")]
    pub max_depth: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory to scan; separate words are joined with single spaces
    ///
    /// Words starting with `-` are path text unless they name an option;
    /// put `--` first for a path literally spelled like one.
    #[arg(value_name = "PATH", trailing_var_arg = true, allow_hyphen_values = true)]
    pub path: Vec<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Target directory rebuilt from the shell-split words
    pub fn target(&self) -> Option<PathBuf> {
        if self.path.is_empty() {
            None
        } else {
            Some(PathBuf::from(self.path.join(" ")))
        }
    }
}

/// Whether the first argument after the program name asks for the version
///
/// Matched case-insensitively, ahead of regular parsing.
pub fn is_version_request(args: &[OsString]) -> bool {
    args.get(1)
        .and_then(|arg| arg.to_str())
        .is_some_and(|arg| arg.eq_ignore_ascii_case("--version"))
}
