//! Report rendering
//!
//! Fixed line-by-line text format written to any `Write` sink. Rendering is
//! kept separate from aggregation so the summary stays a pure value.

use std::io::{self, Write};

use crate::summary::Summary;

/// Line printed when the matrix contains no executed rows.
pub const EMPTY_MESSAGE: &str = "No executed rows found in matrix.";

/// Write the summary report.
///
/// Mean-confidence lines appear only when at least one row recorded a value,
/// and the token section only when any tokens were found.
pub fn render(summary: &Summary, out: &mut impl Write) -> io::Result<()> {
    let total = summary.total;
    writeln!(out, "Phase 2 Matrix Summary")?;
    writeln!(out, "- Executed rows: {total}")?;
    writeln!(
        out,
        "- Product accuracy:  {}/{} ({:.1}%)",
        summary.product_ok,
        total,
        pct(summary.product_ok, total)
    )?;
    writeln!(
        out,
        "- Merchant accuracy: {}/{} ({:.1}%)",
        summary.merchant_ok,
        total,
        pct(summary.merchant_ok, total)
    )?;
    writeln!(
        out,
        "- Date accuracy:     {}/{} ({:.1}%)",
        summary.date_ok,
        total,
        pct(summary.date_ok, total)
    )?;
    writeln!(
        out,
        "- Price accuracy:    {}/{} ({:.1}%)",
        summary.price_ok,
        total,
        pct(summary.price_ok, total)
    )?;
    writeln!(
        out,
        "- Save guard triggered: {}/{}",
        summary.guard_triggered, total
    )?;
    if let Some(mean) = summary.mean_confidence_overall {
        writeln!(out, "- Mean overall confidence: {mean:.1}")?;
    }
    if let Some(mean) = summary.mean_confidence_price {
        writeln!(out, "- Mean price confidence:   {mean:.1}")?;
    }
    if !summary.top_tokens.is_empty() {
        writeln!(out, "- Frequent note tokens:")?;
        for (token, count) in &summary.top_tokens {
            writeln!(out, "  - {token}: {count}")?;
        }
    }
    Ok(())
}

fn pct(count: usize, total: usize) -> f64 {
    count as f64 * 100.0 / total as f64
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
