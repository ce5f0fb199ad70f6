mod args;
mod cmd;

use crate::args::Args;
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, Level};

fn main() -> ExitCode {
    let args = Args::parse();
    let level = if args.verbose {
        Level::TRACE
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    debug!(cmd = ?args.cmd, "executing");
    match args.cmd.execute() {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
