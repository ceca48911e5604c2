//! Summary computation
//!
//! Pure aggregation over the parsed row sequence. The empty row set is a
//! distinct outcome so the caller never prints 0/0 ratios.

use crate::matrix::Row;
use crate::summary::tokens::top_note_tokens;
use crate::summary::types::Summary;

/// Outcome strings treated as a correct result.
const AFFIRMATIVE: &[&str] = &["ok", "yes", "true", "pass", "correct"];

/// Flag strings meaning the save guard fired.
const GUARD_FIRED: &[&str] = &["yes", "true", "1"];

/// How many note tokens the summary reports.
const TOP_TOKEN_COUNT: usize = 5;

/// Whether an evaluation cell records an affirmative outcome.
///
/// Case-insensitive and whitespace-tolerant.
pub fn is_ok(value: &str) -> bool {
    AFFIRMATIVE.contains(&value.trim().to_lowercase().as_str())
}

fn guard_fired(value: &str) -> bool {
    GUARD_FIRED.contains(&value.trim().to_lowercase().as_str())
}

/// Arithmetic mean of the recorded confidence values.
///
/// Defined as 0.0 over an empty slice; callers that need to distinguish
/// "no values" check presence before calling.
pub fn mean(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64
}

/// Compute the summary over executed rows.
///
/// Returns `None` for an empty row set so the caller can print the dedicated
/// empty-state message.
pub fn summarize(rows: &[Row]) -> Option<Summary> {
    if rows.is_empty() {
        return None;
    }

    let overall: Vec<u32> = rows.iter().filter_map(|r| r.confidence_overall).collect();
    let price: Vec<u32> = rows.iter().filter_map(|r| r.confidence_price).collect();

    Some(Summary {
        total: rows.len(),
        product_ok: rows.iter().filter(|r| is_ok(&r.product)).count(),
        merchant_ok: rows.iter().filter(|r| is_ok(&r.merchant)).count(),
        date_ok: rows.iter().filter(|r| is_ok(&r.date)).count(),
        price_ok: rows.iter().filter(|r| is_ok(&r.price)).count(),
        guard_triggered: rows
            .iter()
            .filter(|r| guard_fired(&r.save_guard_triggered))
            .count(),
        mean_confidence_overall: (!overall.is_empty()).then(|| mean(&overall)),
        mean_confidence_price: (!price.is_empty()).then(|| mean(&price)),
        top_tokens: top_note_tokens(rows, TOP_TOKEN_COUNT),
    })
}
