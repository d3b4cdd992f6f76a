/// Entries must be strictly longer than this many characters to survive.
pub const MIN_ENTRY_LEN: usize = 3;

/// Normalize a single raw line.
///
/// Trims surrounding whitespace, removes every apostrophe, lowercases, and
/// drops the entry when it is not longer than `min_len` characters. Whitespace
/// uncovered by removing an apostrophe is trimmed too, so normalizing an
/// already normalized entry returns it unchanged.
pub fn normalize_entry(raw: &str, min_len: usize) -> Option<String> {
    let stripped = raw.trim().replace('\'', "");
    let entry = stripped.trim().to_lowercase();

    if entry.chars().count() > min_len {
        Some(entry)
    } else {
        None
    }
}

/// Normalize every line of a source body. Order is kept but irrelevant downstream.
pub fn normalize_text(text: &str, min_len: usize) -> Vec<String> {
    text.split('\n')
        .filter_map(|line| normalize_entry(line, min_len))
        .collect()
}
