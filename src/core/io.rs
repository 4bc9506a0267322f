//=========================================================================
// Text File I/O
//=========================================================================
//
// Whole-file text reads and appending writes.
//
// Writes always append, creating the file when missing. Failures carry
// the path and the phase (open, read, write) that failed.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use log::trace;

//=== TextIoError =========================================================

/// Phase of a text file operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextIoErrorKind {
    Open,
    Read,
    Write,
}

/// A failed text file operation.
#[derive(Debug)]
pub struct TextIoError {
    pub path: PathBuf,
    pub kind: TextIoErrorKind,
    pub source: std::io::Error,
}

impl TextIoError {
    fn new(path: &Path, kind: TextIoErrorKind, source: std::io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            kind,
            source,
        }
    }
}

impl std::fmt::Display for TextIoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let action = match self.kind {
            TextIoErrorKind::Open => "open",
            TextIoErrorKind::Read => "read",
            TextIoErrorKind::Write => "write",
        };
        write!(
            f,
            "Cannot {} file {}: {}",
            action,
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for TextIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

//=== Operations ==========================================================

/// Reads the whole file as UTF-8 text.
pub fn read_text(path: impl AsRef<Path>) -> Result<String, TextIoError> {
    let path = path.as_ref();
    let mut file =
        File::open(path).map_err(|e| TextIoError::new(path, TextIoErrorKind::Open, e))?;

    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|e| TextIoError::new(path, TextIoErrorKind::Read, e))?;

    trace!(target: "engine", "Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Appends `text` to the file, creating it if missing.
pub fn append_text(path: impl AsRef<Path>, text: &str) -> Result<(), TextIoError> {
    let path = path.as_ref();
    let mut file = open_append(path)?;

    file.write_all(text.as_bytes())
        .map_err(|e| TextIoError::new(path, TextIoErrorKind::Write, e))
}

/// Appends each line followed by `line_ending`, creating the file if
/// missing.
///
/// Lines are written in order; on failure, lines before the failing one
/// remain written.
pub fn append_lines<I, S>(
    path: impl AsRef<Path>,
    lines: I,
    line_ending: &str,
) -> Result<(), TextIoError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let mut file = open_append(path)?;

    for line in lines {
        file.write_all(line.as_ref().as_bytes())
            .and_then(|()| file.write_all(line_ending.as_bytes()))
            .map_err(|e| TextIoError::new(path, TextIoErrorKind::Write, e))?;
    }

    Ok(())
}

fn open_append(path: &Path) -> Result<File, TextIoError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| TextIoError::new(path, TextIoErrorKind::Open, e))
}

//=========================================================================
// Unit Tests
//=========================================================================
