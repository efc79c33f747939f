//! Content digests
//!
//! SHA-256 is the default. MD5 stays available for hash stores written by
//! older tools that fingerprinted files with it.

use crate::error::{PathError, Result};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Algorithm used to fingerprint file contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Md5,
}

impl HashAlgorithm {
    /// Lowercase name, as accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Md5 => "md5",
        }
    }

    /// Width of the hex digest in characters
    pub fn hex_len(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 64,
            HashAlgorithm::Md5 => 32,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            "md5" => Ok(HashAlgorithm::Md5),
            _ => Err(PathError::invalid(format!(
                "unknown hash algorithm '{}', expected sha256 or md5",
                s
            ))),
        }
    }
}

/// Streaming digest accumulator
pub(crate) enum ContentDigest {
    Sha256(Sha256),
    Md5(md5::Context),
}

impl ContentDigest {
    pub(crate) fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Sha256 => ContentDigest::Sha256(Sha256::new()),
            HashAlgorithm::Md5 => ContentDigest::Md5(md5::Context::new()),
        }
    }

    pub(crate) fn update(&mut self, bytes: &[u8]) {
        match self {
            ContentDigest::Sha256(hasher) => Digest::update(hasher, bytes),
            ContentDigest::Md5(context) => context.consume(bytes),
        }
    }

    /// Lowercase hex of the finished digest
    pub(crate) fn finalize_hex(self) -> String {
        match self {
            ContentDigest::Sha256(hasher) => format!("{:x}", hasher.finalize()),
            ContentDigest::Md5(context) => format!("{:x}", context.compute()),
        }
    }
}

/// Hex digest of an in-memory byte slice
///
/// # Examples
/// ```
/// use path_handle::{digest_bytes, HashAlgorithm};
///
/// assert_eq!(
///     digest_bytes(HashAlgorithm::Md5, b"hello world"),
///     "5eb63bbbe01eeed093cb22bb8f5acdc3"
/// );
/// ```
pub fn digest_bytes(algorithm: HashAlgorithm, bytes: &[u8]) -> String {
    let mut digest = ContentDigest::new(algorithm);
    digest.update(bytes);
    digest.finalize_hex()
}
