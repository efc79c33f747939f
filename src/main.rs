//! Main entry point for the path-handle CLI.
//!
//! Takes one file name (or `file://` URI) and prints its diagnostic report:
//! every derived name part, existence, size, a preview of the contents and
//! the content hash.

mod cli;

use clap::{CommandFactory, Parser};
use cli::Cli;
use path_handle::{HandleOptions, PathHandle};
use std::ffi::OsStr;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(path) = cli.path.as_deref() else {
        eprintln!("You must provide a file name to parse.");
        eprintln!("{}", Cli::command().render_usage());
        std::process::exit(1);
    };

    match run(path, cli.options()) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(path: &OsStr, options: HandleOptions) -> path_handle::Result<()> {
    let handle = PathHandle::from_os_str(path, options)?;
    print!("{}", handle.report()?);
    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
