//! Type definitions for matrix rows

/// One executed test case extracted from the matrix table.
///
/// Rows are immutable once constructed and keep their source line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Position of the row in the source table, decimal digits only
    pub row_id: String,
    /// Product evaluation outcome
    pub product: String,
    /// Merchant evaluation outcome
    pub merchant: String,
    /// Date evaluation outcome
    pub date: String,
    /// Price evaluation outcome
    pub price: String,
    /// Overall confidence score; `None` when the cell is blank or non-numeric
    pub confidence_overall: Option<u32>,
    /// Price confidence score; `None` when the cell is blank or non-numeric
    pub confidence_price: Option<u32>,
    /// Whether the save guard fired for this case
    pub save_guard_triggered: String,
    /// Free-text commentary
    pub notes: String,
}
