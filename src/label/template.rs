use super::issues::CRLF;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Marks the line that reserves room for the issues. It is removed on render.
pub const ISSUE_MARKER: &str = "{MESSAGES}";

/// Marker used by older templates, removed just like [`ISSUE_MARKER`].
pub const LEGACY_ISSUE_MARKER: &str = "{MESSAGES & PROBLEMS (MAX 2 EACH LINE)}";

/// The issue lines are inserted right after the first line containing this.
pub const NOTES_ANCHOR: &str = "Notes :";

const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug, Error)]
pub enum Error {
    #[error("Label template file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read label template {}: {}", .path.display(), .source)]
    Io { path: PathBuf, source: io::Error },
}

/// A label template in EZPL with CRLF line endings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    /// Read the template from disk. Whatever line endings the file uses, the
    /// template is normalized to CRLF. Bytes that are not UTF-8 become U+FFFD.
    pub fn load(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }

        let bytes = fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_text(&String::from_utf8_lossy(&bytes)))
    }

    pub fn from_text(content: &str) -> Self {
        let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);

        Self {
            text: split_lines(content).join(CRLF),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Split on `\r\n`, `\n` or a lone `\r`. A terminator at the very end does not
/// yield an empty last line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some(idx) = rest.find(['\r', '\n']) else {
            lines.push(rest);
            break;
        };

        lines.push(&rest[..idx]);

        let terminator_len = if rest[idx..].starts_with(CRLF) { 2 } else { 1 };
        rest = &rest[idx + terminator_len..];
    }

    lines
}

/// Drop the issue marker lines and insert `issue_lines` after the notes anchor.
/// Without an anchor the issue lines are discarded.
pub fn splice_issue_lines(text: &str, issue_lines: &str) -> String {
    let mut lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.contains(ISSUE_MARKER) && !line.contains(LEGACY_ISSUE_MARKER))
        .collect();

    if !issue_lines.is_empty() {
        match lines.iter().position(|line| line.contains(NOTES_ANCHOR)) {
            Some(idx) => lines.insert(idx + 1, issue_lines),
            None => log::warn!(
                "The template has no {:?} line, the issues are not printed.",
                NOTES_ANCHOR
            ),
        }
    }

    lines.join(CRLF)
}
