//! Diagnostic listing of everything a handle knows about its file

use crate::error::Result;
use crate::handle::PathHandle;
use std::collections::VecDeque;
use std::fmt;

/// Bytes shown from each end of the file
pub const PREVIEW_LEN: usize = 30;

/// Snapshot of a handle's derived fields and its file's current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticReport {
    pub original: String,
    pub is_uri: bool,
    pub fqn: String,
    pub directory: String,
    pub file_name: String,
    pub stem: String,
    pub extension: String,
    pub stem_path: String,
    pub exists: bool,
    pub size: u64,
    pub head: Vec<u8>,
    pub tail: Vec<u8>,
    pub algorithm: String,
    /// `None` when the file does not exist
    pub hash: Option<String>,
}

impl PathHandle {
    /// Gather a [`DiagnosticReport`]; reads the whole file if it exists
    pub fn report(&self) -> Result<DiagnosticReport> {
        let exists = self.exists_now();
        let (head, tail) = if exists {
            preview(self.chunks(), PREVIEW_LEN)?
        } else {
            (Vec::new(), Vec::new())
        };
        let hash = if exists {
            Some(self.content_hash()?.to_string())
        } else {
            None
        };

        Ok(DiagnosticReport {
            original: self.original().to_string(),
            is_uri: self.is_uri(),
            fqn: self.fqn().to_string(),
            directory: self.directory().to_string(),
            file_name: self.file_name().to_string(),
            stem: self.stem().to_string(),
            extension: self.extension().to_string(),
            stem_path: self.stem_path().to_string(),
            exists,
            size: self.size_in_bytes()?,
            head,
            tail,
            algorithm: self.options().algorithm.to_string(),
            hash,
        })
    }

    /// The diagnostic report rendered as text
    pub fn diagnostic_dump(&self) -> Result<String> {
        Ok(self.report()?.to_string())
    }
}

/// First and last `len` bytes of a chunk stream, read in one pass
fn preview<I>(chunks: I, len: usize) -> Result<(Vec<u8>, Vec<u8>)>
where
    I: Iterator<Item = Result<Vec<u8>>>,
{
    let mut head = Vec::with_capacity(len);
    let mut tail = VecDeque::with_capacity(len);

    for chunk in chunks {
        let chunk = chunk?;
        if head.len() < len {
            let wanted = (len - head.len()).min(chunk.len());
            head.extend_from_slice(&chunk[..wanted]);
        }
        for &byte in &chunk[chunk.len().saturating_sub(len)..] {
            if tail.len() == len {
                tail.pop_front();
            }
            tail.push_back(byte);
        }
    }

    Ok((head, Vec::from(tail)))
}

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<12}{}", "exists", self.exists)?;
        writeln!(f, "{:<12}{}", "original", self.original)?;
        writeln!(f, "{:<12}{}", "is uri", self.is_uri)?;
        writeln!(f, "{:<12}{}", "fqn", self.fqn)?;
        writeln!(f, "{:<12}{}", "file name", self.file_name)?;
        writeln!(f, "{:<12}{}", "stem", self.stem)?;
        writeln!(f, "{:<12}{}", "directory", self.directory)?;
        writeln!(f, "{:<12}{}", "extension", self.extension)?;
        writeln!(f, "{:<12}{}", "stem path", self.stem_path)?;
        writeln!(f, "{:<12}{}", "size", self.size)?;
        writeln!(f, "{:<12}{:?}", "head", String::from_utf8_lossy(&self.head))?;
        writeln!(f, "{:<12}{:?}", "tail", String::from_utf8_lossy(&self.tail))?;
        match &self.hash {
            Some(hash) => writeln!(f, "{:<12}{}:{}", "hash", self.algorithm, hash),
            None => writeln!(f, "{:<12}-", "hash"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::{digest_bytes, HashAlgorithm};
    use tempfile::TempDir;

    fn chunked(data: &[u8], size: usize) -> impl Iterator<Item = Result<Vec<u8>>> + '_ {
        data.chunks(size).map(|c| Ok(c.to_vec()))
    }

    #[test]
    fn test_preview_short_data() {
        let (head, tail) = preview(chunked(b"hello world", 4), PREVIEW_LEN).unwrap();
        assert_eq!(head, b"hello world");
        assert_eq!(tail, b"hello world");
    }

    #[test]
    fn test_preview_long_data_across_chunks() {
        let data: Vec<u8> = (0..100u8).collect();
        let (head, tail) = preview(chunked(&data, 7), 10).unwrap();
        assert_eq!(head, (0..10u8).collect::<Vec<_>>());
        assert_eq!(tail, (90..100u8).collect::<Vec<_>>());
    }

    #[test]
    fn test_report_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big.file.dat");
        std::fs::write(&path, b"hello world").unwrap();
        let f = PathHandle::new(path.to_str().unwrap()).unwrap();

        let report = f.report().unwrap();
        assert!(report.exists);
        assert_eq!(report.size, 11);
        assert_eq!(report.file_name, "big.file.dat");
        assert_eq!(report.stem, "big.file");
        assert_eq!(report.extension, "dat");
        assert_eq!(report.head, b"hello world");
        assert_eq!(
            report.hash.as_deref(),
            Some(digest_bytes(HashAlgorithm::Sha256, b"hello world").as_str())
        );

        let text = f.diagnostic_dump().unwrap();
        assert!(text.contains("size        11"));
        assert!(text.contains("extension   dat"));
        assert!(text.contains("\"hello world\""));
        assert!(text.contains("sha256:b94d27b9"));
    }

    #[test]
    fn test_report_missing_file() {
        let dir = TempDir::new().unwrap();
        let f = PathHandle::new(dir.path().join("nope.txt").to_str().unwrap()).unwrap();

        let report = f.report().unwrap();
        assert!(!report.exists);
        assert_eq!(report.size, 0);
        assert!(report.head.is_empty());
        assert!(report.hash.is_none());
        assert!(f.diagnostic_dump().unwrap().contains("hash        -"));
    }
}
