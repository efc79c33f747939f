//! Lazy chunked reads
//!
//! [`Chunks`] opens its file on the first call to `next` and closes it on
//! EOF, on the first read error, or when the iterator is dropped.

use crate::error::{PathError, Result};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::iter::FusedIterator;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Default chunk size in bytes
pub const DEFAULT_BUFFER_SIZE: usize = 65536;

enum State {
    Pending,
    Open(File),
    Done,
}

/// Forward-only iterator over the bytes of a file, one chunk at a time
///
/// Every chunk but the last holds exactly `buffer_size` bytes. A file that
/// does not exist when iteration starts yields nothing, and
/// [`Chunks::file_missing`] tells that apart from an empty file.
pub struct Chunks<'a> {
    path: &'a str,
    buffer_size: usize,
    opens: &'a AtomicUsize,
    state: State,
    missing: bool,
}

impl<'a> Chunks<'a> {
    pub(crate) fn new(path: &'a str, buffer_size: usize, opens: &'a AtomicUsize) -> Self {
        Chunks {
            path,
            buffer_size,
            opens,
            state: State::Pending,
            missing: false,
        }
    }

    /// Chunk size this iterator was created with
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// True while the underlying file handle is held
    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open(_))
    }

    /// True once iteration found no file to read
    pub fn file_missing(&self) -> bool {
        self.missing
    }

    fn open(&mut self) -> Option<Result<()>> {
        if !Path::new(self.path).is_file() {
            self.missing = true;
            self.state = State::Done;
            return None;
        }

        match File::open(self.path) {
            Ok(file) => {
                self.opens.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(path = %self.path, "opened for chunked read");
                self.state = State::Open(file);
                Some(Ok(()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path, "file vanished before chunked read");
                self.missing = true;
                self.state = State::Done;
                None
            }
            Err(e) => {
                self.state = State::Done;
                Some(Err(PathError::io(self.path, e)))
            }
        }
    }

    fn finish(&mut self) {
        if self.is_open() {
            tracing::trace!(path = %self.path, "closed after chunked read");
        }
        self.state = State::Done;
    }
}

impl Iterator for Chunks<'_> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let State::Pending = self.state {
            match self.open()? {
                Ok(()) => {}
                Err(e) => return Some(Err(e)),
            }
        }

        let State::Open(file) = &mut self.state else {
            return None;
        };

        // Grows as needed; the requested size may be far larger than the file
        let mut chunk = Vec::with_capacity(self.buffer_size.min(DEFAULT_BUFFER_SIZE));
        let read = file
            .by_ref()
            .take(self.buffer_size as u64)
            .read_to_end(&mut chunk);
        match read {
            Ok(0) => {
                self.finish();
                None
            }
            Ok(_) => Some(Ok(chunk)),
            Err(e) => {
                self.finish();
                Some(Err(PathError::io(self.path, e)))
            }
        }
    }
}

impl FusedIterator for Chunks<'_> {}
