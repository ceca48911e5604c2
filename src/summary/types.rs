//! Type definitions for the matrix summary

/// Aggregate metrics computed over all executed rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of executed rows
    pub total: usize,
    /// Rows whose product outcome is affirmative
    pub product_ok: usize,
    /// Rows whose merchant outcome is affirmative
    pub merchant_ok: usize,
    /// Rows whose date outcome is affirmative
    pub date_ok: usize,
    /// Rows whose price outcome is affirmative
    pub price_ok: usize,
    /// Rows where the save guard fired
    pub guard_triggered: usize,
    /// Mean overall confidence; `None` when no row recorded a value
    pub mean_confidence_overall: Option<f64>,
    /// Mean price confidence; `None` when no row recorded a value
    pub mean_confidence_price: Option<f64>,
    /// Note tokens ranked by descending frequency
    pub top_tokens: Vec<(String, usize)>,
}
