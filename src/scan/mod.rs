//! Line-by-line scanning of the log source.
//!
//! [`LineScanner`] is a single forward pass over a file: lines are produced
//! lazily and a second pass requires opening the file again.

use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error_handling::SourceError;

/// Lazy, one-pass reader over the lines of a log file.
///
/// Invalid UTF-8 is replaced rather than rejected; fail2ban logs occasionally
/// carry raw bytes from the jailed service's own log lines.
pub struct LineScanner {
    path: PathBuf,
    reader: BufReader<File>,
    buf: Vec<u8>,
    lines_read: usize,
}

impl LineScanner {
    /// Opens `path` for scanning.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unreadable`] if the file cannot be opened.
    pub async fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path)
            .await
            .map_err(|source| SourceError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
            buf: Vec::with_capacity(256),
            lines_read: 0,
        })
    }

    /// Returns the next line without its terminator, or `None` at end of file.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unreadable`] if reading fails mid-file.
    pub async fn next_line(&mut self) -> Result<Option<String>, SourceError> {
        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .await
            .map_err(|source| SourceError::Unreadable {
                path: self.path.clone(),
                source,
            })?;
        if read == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        self.lines_read += 1;
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }

    /// Number of lines produced so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}
