//! The path handle type
//!
//! A [`PathHandle`] is parsed once. Its name parts never change afterwards;
//! existence and size are read live from the file system on every call, and
//! the content hash is computed on first use and then kept.

use crate::chunks::{Chunks, DEFAULT_BUFFER_SIZE};
use crate::digest::{ContentDigest, HashAlgorithm};
use crate::error::{PathError, Result};
use crate::normalize::{fully_qualify, is_uri, split_directory, split_extension};
use crate::validate::{validate_input, validate_os_input};
use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::path::{Path, MAIN_SEPARATOR};
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Settings that affect content operations of a handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleOptions {
    /// Chunk size used by [`PathHandle::chunks`] and hashing
    pub buffer_size: usize,
    /// Digest used by [`PathHandle::content_hash`]
    pub algorithm: HashAlgorithm,
}

impl Default for HandleOptions {
    fn default() -> Self {
        HandleOptions {
            buffer_size: DEFAULT_BUFFER_SIZE,
            algorithm: HashAlgorithm::default(),
        }
    }
}

impl HandleOptions {
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(PathError::invalid("buffer size must be greater than zero"));
        }
        Ok(())
    }
}

/// A file name, normalized once and decomposed into its parts
///
/// # Examples
/// ```
/// use path_handle::PathHandle;
///
/// # #[cfg(unix)]
/// # {
/// let f = PathHandle::new("/home/data/import/big.file.dat").unwrap();
/// assert_eq!(f.fqn(), "/home/data/import/big.file.dat");
/// assert_eq!(f.directory(), "/home/data/import");
/// assert_eq!(f.file_name(), "big.file.dat");
/// assert_eq!(f.stem(), "big.file");
/// assert_eq!(f.extension(), "dat");
/// assert_eq!(f.stem_path(), "/home/data/import/big.file");
/// # }
/// ```
#[derive(Debug)]
pub struct PathHandle {
    original: String,
    is_uri: bool,
    fqn: String,
    directory: String,
    file_name: String,
    stem: String,
    extension: String,
    stem_path: String,
    options: HandleOptions,
    content_hash: OnceLock<String>,
    reads: AtomicUsize,
}

impl PathHandle {
    /// Build a handle with default options
    pub fn new(input: &str) -> Result<Self> {
        Self::with_options(input, HandleOptions::default())
    }

    /// Build a handle with explicit options
    ///
    /// Reads the environment and the current directory but never touches
    /// the file being named.
    pub fn with_options(input: &str, options: HandleOptions) -> Result<Self> {
        validate_input(input)?;
        options.validate()?;

        let fqn = fully_qualify(input)?;
        let (directory, file_name) = split_directory(&fqn);
        let (stem, extension) = split_extension(file_name);
        let stem_path = format!("{}{}{}", directory, MAIN_SEPARATOR, stem);

        tracing::debug!(original = %input, fqn = %fqn, "path handle created");

        Ok(PathHandle {
            original: input.to_string(),
            is_uri: is_uri(input),
            directory: directory.to_string(),
            file_name: file_name.to_string(),
            stem: stem.to_string(),
            extension: extension.to_string(),
            stem_path,
            fqn,
            options,
            content_hash: OnceLock::new(),
            reads: AtomicUsize::new(0),
        })
    }

    /// Build a handle from an OS string, rejecting anything that is not UTF-8
    pub fn from_os_str(input: &OsStr, options: HandleOptions) -> Result<Self> {
        Self::with_options(validate_os_input(input)?, options)
    }

    /// The exact string this handle was built from
    pub fn original(&self) -> &str {
        &self.original
    }

    /// True if the original string was written as a URI (`file://`, `http://`, ...)
    pub fn is_uri(&self) -> bool {
        self.is_uri
    }

    /// The fully qualified name
    pub fn fqn(&self) -> &str {
        &self.fqn
    }

    /// Directory part of the name, without a trailing separator
    ///
    /// Empty for the root itself and, on Unix, for files directly under it.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Directory part of the name followed by the separator
    pub fn directory_terminated(&self) -> String {
        format!("{}{}", self.directory, MAIN_SEPARATOR)
    }

    /// File name including the extension
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// File name without directory or extension
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Extension without the leading dot, empty if there is none
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Directory and stem joined by the separator
    pub fn stem_path(&self) -> &str {
        &self.stem_path
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.fqn)
    }

    pub fn options(&self) -> HandleOptions {
        self.options
    }

    /// True if a regular file exists at this name right now
    pub fn exists_now(&self) -> bool {
        self.as_path().is_file()
    }

    /// Current size of the file, or 0 if it does not exist
    pub fn size_in_bytes(&self) -> Result<u64> {
        if !self.exists_now() {
            return Ok(0);
        }
        fs::metadata(&self.fqn)
            .map(|metadata| metadata.len())
            .map_err(|e| PathError::io(&self.fqn, e))
    }

    /// Iterate over the file contents in chunks of at most `buffer_size` bytes
    pub fn read_chunks(&self, buffer_size: usize) -> Result<Chunks<'_>> {
        if buffer_size == 0 {
            return Err(PathError::invalid("buffer size must be greater than zero"));
        }
        Ok(Chunks::new(&self.fqn, buffer_size, &self.reads))
    }

    /// Iterate over the file contents using the configured buffer size
    pub fn chunks(&self) -> Chunks<'_> {
        Chunks::new(&self.fqn, self.options.buffer_size, &self.reads)
    }

    /// Lowercase hex digest of the file contents, computed once
    ///
    /// The value is not refreshed if the file changes afterwards.
    pub fn content_hash(&self) -> Result<&str> {
        if let Some(hash) = self.cached_hash() {
            return Ok(hash);
        }

        let mut digest = ContentDigest::new(self.options.algorithm);
        let mut chunks = self.chunks();
        for chunk in chunks.by_ref() {
            digest.update(&chunk?);
        }
        // Checked after reading so a file removed mid-call is never hashed as empty
        if chunks.file_missing() {
            return Err(PathError::NotFound {
                path: self.fqn.clone(),
            });
        }
        let hash = digest.finalize_hex();

        tracing::debug!(
            fqn = %self.fqn,
            algorithm = %self.options.algorithm,
            hash = %hash,
            "content hash computed"
        );
        Ok(self.content_hash.get_or_init(|| hash).as_str())
    }

    /// The content hash if it has already been computed
    pub fn cached_hash(&self) -> Option<&str> {
        self.content_hash.get().map(String::as_str)
    }

    /// Number of times the file has been opened for reading through this handle
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    /// True if both files exist and hold the same bytes
    ///
    /// Files of different sizes are rejected without reading either one.
    pub fn same_content_as(&self, other: &PathHandle) -> Result<bool> {
        if !self.exists_now() || !other.exists_now() {
            tracing::debug!(left = %self.fqn, right = %other.fqn, "content comparison: missing file");
            return Ok(false);
        }

        let (left_size, right_size) = (self.size_in_bytes()?, other.size_in_bytes()?);
        if left_size != right_size {
            tracing::debug!(
                left = %self.fqn,
                right = %other.fqn,
                left_size = left_size,
                right_size = right_size,
                "content comparison: sizes differ"
            );
            return Ok(false);
        }

        if self.options.algorithm != other.options.algorithm {
            return Err(PathError::TypeUnsupported {
                operation: "content comparison",
                operand: format!("PathHandle hashed with {}", other.options.algorithm),
            });
        }

        Ok(self.content_hash()? == other.content_hash()?)
    }
}

impl Clone for PathHandle {
    fn clone(&self) -> Self {
        PathHandle {
            original: self.original.clone(),
            is_uri: self.is_uri,
            fqn: self.fqn.clone(),
            directory: self.directory.clone(),
            file_name: self.file_name.clone(),
            stem: self.stem.clone(),
            extension: self.extension.clone(),
            stem_path: self.stem_path.clone(),
            options: self.options,
            content_hash: self.content_hash.clone(),
            reads: AtomicUsize::new(0),
        }
    }
}

impl fmt::Display for PathHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fqn)
    }
}

impl AsRef<Path> for PathHandle {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl AsRef<str> for PathHandle {
    fn as_ref(&self) -> &str {
        &self.fqn
    }
}

impl FromStr for PathHandle {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        PathHandle::new(s)
    }
}

impl TryFrom<&str> for PathHandle {
    type Error = PathError;

    fn try_from(value: &str) -> Result<Self> {
        PathHandle::new(value)
    }
}

impl TryFrom<String> for PathHandle {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self> {
        PathHandle::new(&value)
    }
}

impl TryFrom<Option<&str>> for PathHandle {
    type Error = PathError;

    fn try_from(value: Option<&str>) -> Result<Self> {
        match value {
            Some(input) => PathHandle::new(input),
            None => Err(PathError::invalid("cannot create a path handle from nothing")),
        }
    }
}
