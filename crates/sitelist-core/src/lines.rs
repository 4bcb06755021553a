//! Line-oriented input and output for domain/URL lists.
//!
//! Inputs are UTF-8, one entry per line; every line is trimmed and blank lines
//! are skipped. Outputs carry a trailing `\n` after every entry.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ListError;

/// Fails with [`ListError::NotFound`] if `path` does not exist.
pub fn require_exists(path: &Path) -> Result<(), ListError> {
    if path.exists() {
        Ok(())
    } else {
        Err(ListError::NotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Iterator over trimmed, non-blank lines of a reader.
///
/// Read and UTF-8 errors are yielded as `Err`;
/// callers stop on the first one.
pub struct Entries<R> {
    lines: io::Lines<R>,
}

impl<R: BufRead> Iterator for Entries<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    if trimmed.len() == line.len() {
                        return Some(Ok(line));
                    }
                    return Some(Ok(trimmed.to_string()));
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

pub fn read_entries<R: BufRead>(reader: R) -> Entries<R> {
    Entries {
        lines: reader.lines(),
    }
}

/// Opens `path` for buffered reading, mapping failures to [`ListError::Io`].
pub fn open_entries(path: &Path) -> Result<Entries<BufReader<File>>, ListError> {
    let file = File::open(path).map_err(|e| ListError::io(path, e))?;
    Ok(read_entries(BufReader::new(file)))
}

/// Buffered newline-terminated writer for list output.
pub struct LineSink<W: Write> {
    inner: BufWriter<W>,
    path: PathBuf,
}

impl LineSink<File> {
    /// Creates (or truncates) `path`.
    pub fn create(path: &Path) -> Result<Self, ListError> {
        let file = File::create(path).map_err(|e| ListError::io(path, e))?;
        Ok(Self::new(file, path))
    }
}

impl<W: Write> LineSink<W> {
    /// Wraps an arbitrary writer; `path` is only used for error reporting.
    pub fn new(inner: W, path: &Path) -> Self {
        Self {
            inner: BufWriter::new(inner),
            path: path.to_path_buf(),
        }
    }

    pub fn write_entry(&mut self, entry: &str) -> Result<(), ListError> {
        self.inner
            .write_all(entry.as_bytes())
            .and_then(|()| self.inner.write_all(b"\n"))
            .map_err(|e| ListError::io(&self.path, e))
    }

    /// Flushes buffered output and returns the underlying writer.
    pub fn finish(self) -> Result<W, ListError> {
        let path = self.path;
        self.inner
            .into_inner()
            .map_err(|e| ListError::io(&path, e.into_error()))
    }
}
