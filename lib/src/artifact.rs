use crate::error::{ConvertError, Result};
use std::fmt;
use std::path::Path;

/// Rendered ASCII art: newline-terminated rows of equal width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    text: String,
    columns: u32,
    rows: u32,
}

impl AsciiArt {
    pub(crate) fn new(text: String, columns: u32, rows: u32) -> Self {
        Self { text, columns, rows }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Characters per row
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows, equal to the resampled image height
    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }

    /// Write the text verbatim to `path` as UTF-8
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.text.as_bytes()).map_err(|source| ConvertError::Export {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("wrote {} bytes to {}", self.text.len(), path.display());
        Ok(())
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for AsciiArt {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
