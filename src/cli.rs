//! CLI structure and option definitions.

use clap::Parser;
use path_handle::{HandleOptions, HashAlgorithm, DEFAULT_BUFFER_SIZE};
use std::ffi::OsString;

/// Print everything a path handle knows about a file.
#[derive(Parser, Debug)]
#[command(name = "path-handle")]
#[command(version, about = "Inspect a file name and its contents", long_about = None)]
pub struct Cli {
    /// File name or file:// URI to inspect
    #[arg(value_name = "PATH")]
    pub path: Option<OsString>,

    /// Digest used for the content hash
    #[arg(long, value_name = "NAME", env = "PATH_HANDLE_ALGORITHM", default_value_t = HashAlgorithm::Sha256)]
    pub algorithm: HashAlgorithm,

    /// Chunk size in bytes for reading the file
    #[arg(long, value_name = "BYTES", env = "PATH_HANDLE_BUFFER_SIZE", default_value_t = DEFAULT_BUFFER_SIZE)]
    pub buffer_size: usize,

    /// Log more (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn options(&self) -> HandleOptions {
        HandleOptions::default()
            .with_algorithm(self.algorithm)
            .with_buffer_size(self.buffer_size)
    }
}
