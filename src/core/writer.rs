use std::fs;
use std::path::Path;

use crate::error::{ListgenError, Result};

/// Newline-joined text with a trailing newline, or nothing at all for an empty list.
pub fn render_lines<S: AsRef<str>>(entries: &[S]) -> String {
    let capacity = entries.iter().map(|e| e.as_ref().len() + 1).sum();
    let mut out = String::with_capacity(capacity);
    for entry in entries {
        out.push_str(entry.as_ref());
        out.push('\n');
    }
    out
}

/// Overwrite `path` with the rendered entries. No backup, no atomic rename.
pub fn write_lines<S: AsRef<str>>(path: &Path, entries: &[S]) -> Result<()> {
    fs::write(path, render_lines(entries)).map_err(|e| ListgenError::write(path, e))?;
    log::debug!("Wrote {} lines to {}", entries.len(), path.display());
    Ok(())
}
