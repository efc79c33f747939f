//! # path-handle
//!
//! Normalize a file name once, then ask it questions.
//!
//! A [`PathHandle`] takes whatever string a caller has (a relative path, a
//! `~/...` or `$VAR/...` path, a `file://` URI, forward or back slashes) and
//! turns it into a single fully qualified name. The directory, file name,
//! stem and extension are split out at construction, so they never need to
//! be re-parsed.
//!
//! ## Features
//!
//! - **Decomposition**: directory, file name, stem, extension and stem path
//! - **Live checks**: existence and size always reflect the file system now
//! - **Chunked reads**: a lazy iterator that holds the file open only while reading
//! - **Content hash**: SHA-256 (or MD5) computed once and cached
//! - **Comparison**: equality and ordering by fully qualified name, against
//!   other handles or plain strings
//!
//! ## Examples
//!
//! ### Decomposing a name
//!
//! ```rust
//! use path_handle::PathHandle;
//!
//! # #[cfg(unix)]
//! # {
//! let f = PathHandle::new("/home/data/import/big.file.dat").unwrap();
//! assert_eq!(f.file_name(), "big.file.dat");
//! assert_eq!(f.stem(), "big.file");
//! assert_eq!(f.extension(), "dat");
//!
//! // Windows-style separators name the same file
//! assert_eq!(f, PathHandle::new("\\home\\data\\import\\big.file.dat").unwrap());
//! # }
//! ```
//!
//! ### Content operations
//!
//! ```rust
//! use path_handle::PathHandle;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("notes.txt");
//! let f = PathHandle::new(path.to_str().unwrap()).unwrap();
//!
//! assert!(!f.exists_now());
//! std::fs::write(&path, b"hello world").unwrap();
//! assert!(f.exists_now());
//! assert_eq!(f.size_in_bytes().unwrap(), 11);
//! assert_eq!(
//!     f.content_hash().unwrap(),
//!     "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
//! );
//! ```

mod chunks;
mod compare;
mod digest;
mod error;
mod handle;
mod normalize;
mod report;
mod validate;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use chunks::{Chunks, DEFAULT_BUFFER_SIZE};
pub use compare::Operand;
pub use digest::{digest_bytes, HashAlgorithm};
pub use error::{PathError, Result};
pub use handle::{HandleOptions, PathHandle};
pub use normalize::{
    absolutize, expand_env_vars, expand_home, fully_qualify, is_file_uri, is_uri,
    normalize_separators, path_from_file_uri, resolve_components, split_directory,
    split_extension,
};
pub use report::{DiagnosticReport, PREVIEW_LEN};
pub use validate::{is_valid_input, validate_input};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
