//! CLI module for foldertree

mod args;

pub use args::{is_version_request, Args};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{executable_dir, OutputGenerator};
use crate::tree::TreeBuilder;
use std::fs;
use std::process::ExitCode;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Run the CLI application
pub fn run() -> ExitCode {
    let raw: Vec<_> = std::env::args_os().collect();
    if is_version_request(&raw) {
        println!("{}", version());
        return ExitCode::SUCCESS;
    }

    let args = Args::parse_args();
    init_logging(args.verbose);

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Version line printed for `--version`
pub fn version() -> String {
    format!("foldertree {}", env!("CARGO_PKG_VERSION"))
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::default().add_directive(level.into()))
        .try_init();
}

fn execute(args: Args) -> Result<()> {
    let path = args.target().ok_or(Error::MissingPath)?;

    let mut cfg = Config::default();
    cfg.merge_cli(args.max_depth);
    cfg.validate()?;

    let metadata = fs::metadata(&path).map_err(|e| Error::access(&path, e))?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory(path));
    }

    let output_dir = executable_dir()?;
    debug!(target_dir = %path.display(), output_dir = %output_dir.display(), "starting scan");

    let root = TreeBuilder::from_config(&cfg.scan).build(&path)?;

    let generator = OutputGenerator::new()?;
    let report = generator.generate(&root, &output_dir);

    // Write failures are reported but the run still counts as a success
    for err in report.failures().filter_map(|a| a.error.as_ref()) {
        eprintln!("{}", err);
    }
    println!("{}", report.summary());

    Ok(())
}
