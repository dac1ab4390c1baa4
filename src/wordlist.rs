//! Line-oriented word-list reader.
//!
//! Supplies candidate secrets one line at a time from a file. Lines are
//! raw bytes: nothing is trimmed except the line terminator, and lines
//! need not be valid UTF-8.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::JwtCrackError;

/// Lazily yields one candidate secret per line.
///
/// Owns the underlying reader, so the file is closed as soon as the
/// reader is dropped, however the scan ended.
#[derive(Debug)]
pub struct WordlistReader<R> {
    reader: R,
    source: String,
    done: bool,
}

impl WordlistReader<BufReader<File>> {
    /// Open the word list at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`JwtCrackError::WordlistError`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, JwtCrackError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| JwtCrackError::WordlistError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::new(BufReader::new(file), path.display().to_string()))
    }
}

impl<R: Read> WordlistReader<BufReader<R>> {
    /// Read candidates from any byte source. `source` names it in errors.
    pub fn from_reader(reader: R, source: impl Into<String>) -> Self {
        Self::new(BufReader::new(reader), source.into())
    }
}

impl<R: BufRead> WordlistReader<R> {
    fn new(reader: R, source: String) -> Self {
        Self {
            reader,
            source,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for WordlistReader<R> {
    type Item = Result<Vec<u8>, JwtCrackError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                strip_line_terminator(&mut line);
                Some(Ok(line))
            }
            Err(e) => {
                self.done = true;
                Some(Err(JwtCrackError::WordlistError {
                    path: self.source.clone(),
                    reason: e.to_string(),
                }))
            }
        }
    }
}

/// Drop a trailing `\n`, then one trailing `\r`. The final line of a
/// file may end in a bare `\r`; it is dropped too.
fn strip_line_terminator(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    if line.last() == Some(&b'\r') {
        line.pop();
    }
}
