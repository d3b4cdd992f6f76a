use std::cmp::Ordering;
use std::collections::HashSet;

/// Union per-source entries into a set. Membership is exact string equality.
pub fn merge_entries<I, S>(sources: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = String>,
{
    sources.into_iter().flatten().collect()
}

/// Longest first, ties broken lexicographically ascending.
pub fn compare_entries(a: &str, b: &str) -> Ordering {
    b.chars()
        .count()
        .cmp(&a.chars().count())
        .then_with(|| a.cmp(b))
}

/// Turn the entry set into the final output sequence.
///
/// Set iteration order is never observable: the comparator is a total order
/// over distinct strings, so every run produces the same sequence.
pub fn order_entries(entries: HashSet<String>) -> Vec<String> {
    let mut ordered: Vec<String> = entries.into_iter().collect();
    ordered.sort_unstable_by(|a, b| compare_entries(a, b));
    ordered
}

/// Plain lexicographic order, used for domain lists.
pub fn order_lexicographic(entries: HashSet<String>) -> Vec<String> {
    let mut ordered: Vec<String> = entries.into_iter().collect();
    ordered.sort_unstable();
    ordered
}
