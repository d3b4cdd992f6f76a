use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::writer::write_lines;
use crate::error::{ListgenError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Drop lines equal to a filter word
    Exact,
    /// Drop lines containing a filter word anywhere
    Substring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    pub before: usize,
    pub after: usize,
}

impl FilterStats {
    pub fn removed(&self) -> usize {
        self.before - self.after
    }
}

pub fn load_filter_words(text: &str) -> HashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Keep the non-blank lines of `target` that survive the filter, in their original order.
pub fn filter_lines(target: &str, filter_words: &HashSet<String>, mode: MatchMode) -> Vec<String> {
    target
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| match mode {
            MatchMode::Exact => !filter_words.contains(*line),
            MatchMode::Substring => !filter_words.iter().any(|word| line.contains(word.as_str())),
        })
        .map(str::to_string)
        .collect()
}

/// Rewrite `target_file` in place without the words listed in `filter_file`.
pub fn filter_file(filter_file: &Path, target_file: &Path, mode: MatchMode) -> Result<FilterStats> {
    let filter_text =
        fs::read_to_string(filter_file).map_err(|e| ListgenError::read(filter_file, e))?;
    let target_text =
        fs::read_to_string(target_file).map_err(|e| ListgenError::read(target_file, e))?;

    let filter_words = load_filter_words(&filter_text);
    let before = target_text.lines().filter(|l| !l.trim().is_empty()).count();
    let kept = filter_lines(&target_text, &filter_words, mode);

    write_lines(target_file, &kept)?;

    Ok(FilterStats {
        before,
        after: kept.len(),
    })
}
