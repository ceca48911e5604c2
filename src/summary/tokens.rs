//! Note-token frequency extraction
//!
//! Free-text notes are the only place recurring failure themes show up, so
//! the summary surfaces the most frequent tokens after stop-word filtering.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::matrix::Row;

/// Tokens of length >= 4 starting with a letter, over lowercased notes.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z][a-z0-9_-]{3,}").expect("valid token pattern"));

/// Filler words that would dominate every ranking.
const STOP_WORDS: &[&str] = &["after", "with", "from", "this", "that", "sample", "control"];

/// Rank note tokens by descending frequency across all rows.
///
/// Ties keep first-encountered order: counts accumulate in insertion order
/// and the final ranking uses a stable sort, so output is reproducible.
pub fn top_note_tokens(rows: &[Row], n: usize) -> Vec<(String, usize)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let note = row.notes.to_lowercase();
        for token in TOKEN_RE.find_iter(&note).map(|m| m.as_str()) {
            if STOP_WORDS.contains(&token) {
                continue;
            }
            match counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    order.push(token.to_string());
                    counts.insert(token.to_string(), 1);
                }
            }
        }
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|token| {
            let count = counts[token.as_str()];
            (token, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}
