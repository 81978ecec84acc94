use std::process::ExitCode;

fn main() -> ExitCode {
    foldertree::cli::run()
}
