//! Row extraction from the markdown matrix
//!
//! Line-by-line filtering keeps the parser total over arbitrary text: a line
//! that does not form a complete data row is skipped, never an error. The
//! matrix is hand-edited and routinely contains prose, template rows, and
//! half-filled cells.

use crate::matrix::types::Row;

/// Number of pipe-delimited cells in a complete data row.
const ROW_WIDTH: usize = 11;

/// Extract executed rows from the matrix document, in source line order.
///
/// A line is a data row when it starts with `|`, is neither the header nor a
/// separator line, and splits into exactly [`ROW_WIDTH`] trimmed cells with a
/// numeric ID and at least one non-empty data cell.
pub fn parse_table_rows(content: &str) -> Vec<Row> {
    let mut rows = Vec::new();
    for line in content.lines() {
        if !line.starts_with('|') {
            continue;
        }
        if line.contains("| ID |") || line.contains("|---") {
            continue;
        }
        let cells: Vec<&str> = line
            .trim()
            .trim_matches('|')
            .split('|')
            .map(str::trim)
            .collect();
        if cells.len() != ROW_WIDTH {
            log::debug!("skipping line with {} cells: {line}", cells.len());
            continue;
        }
        let row_id = cells[0];
        if row_id.is_empty() || !row_id.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        // An ID with nothing recorded yet is an unexecuted template row.
        if cells[1..].iter().all(|cell| cell.is_empty()) {
            continue;
        }
        // Cells 1 and 2 are not read by the summary.
        rows.push(Row {
            row_id: row_id.to_string(),
            product: cells[3].to_string(),
            merchant: cells[4].to_string(),
            date: cells[5].to_string(),
            price: cells[6].to_string(),
            confidence_overall: parse_int(cells[7]),
            confidence_price: parse_int(cells[8]),
            save_guard_triggered: cells[9].to_string(),
            notes: cells[10].to_string(),
        });
    }
    rows
}

/// Parse an optional confidence cell.
///
/// Blank and non-numeric cells yield `None` rather than an error; the
/// statistics layer must distinguish "no data recorded" from "recorded zero".
pub fn parse_int(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Build a data line from an ID and ten data cells
    fn data_line(id: &str, cells: [&str; 10]) -> String {
        format!("| {} | {} |", id, cells.join(" | "))
    }

    #[test]
    fn test_parse_skips_prose_and_blank_lines() {
        let content = "# Smoke test matrix\n\nSome prose about the run.\n";
        assert!(parse_table_rows(content).is_empty());
    }

    #[test]
    fn test_parse_skips_header_and_separator() {
        let content = "\
| ID | Receipt | Device | Product | Merchant | Date | Price | Conf | Conf (price) | Save guard | Notes |
|----|---------|--------|---------|----------|------|-------|------|--------------|------------|-------|
";
        assert!(parse_table_rows(content).is_empty());
    }

    #[test]
    fn test_parse_accepts_complete_row() {
        let line = data_line(
            "3",
            ["r1", "pixel", "OK", "ok", "ok", "ok", "90", "n/a", "no", "clean scan"],
        );
        let rows = parse_table_rows(&line);

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.row_id, "3");
        assert_eq!(row.product, "OK");
        assert_eq!(row.merchant, "ok");
        assert_eq!(row.date, "ok");
        assert_eq!(row.price, "ok");
        assert_eq!(row.confidence_overall, Some(90));
        assert_eq!(row.confidence_price, None);
        assert_eq!(row.save_guard_triggered, "no");
        assert_eq!(row.notes, "clean scan");
    }

    #[test]
    fn test_parse_maps_cells_by_position() {
        let line = data_line(
            "7",
            [
                "c1", "c2", "product", "merchant", "date", "price", "80", "70", "yes",
                "notes here",
            ],
        );
        let rows = parse_table_rows(&line);

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.product, "product");
        assert_eq!(row.merchant, "merchant");
        assert_eq!(row.date, "date");
        assert_eq!(row.price, "price");
        assert_eq!(row.confidence_overall, Some(80));
        assert_eq!(row.confidence_price, Some(70));
        assert_eq!(row.save_guard_triggered, "yes");
        assert_eq!(row.notes, "notes here");
    }

    #[test]
    fn test_parse_rejects_wrong_cell_count() {
        let ten = "| 1 | a | b | c | d | e | f | g | h | i |";
        let twelve = "| 1 | a | b | c | d | e | f | g | h | i | j | k |";
        assert!(parse_table_rows(ten).is_empty());
        assert!(parse_table_rows(twelve).is_empty());
    }

    #[test]
    fn test_parse_rejects_non_numeric_id() {
        for id in ["abc", "1a", "", " "] {
            let line = data_line(id, ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
            assert!(parse_table_rows(&line).is_empty(), "id {id:?} accepted");
        }
    }

    #[test]
    fn test_parse_rejects_all_empty_template_row() {
        let line = data_line("4", ["", "", "", "", "", "", "", "", "", ""]);
        assert!(parse_table_rows(&line).is_empty());
    }

    #[test]
    fn test_parse_preserves_line_order() {
        let content = [
            data_line("2", ["a", "b", "ok", "ok", "ok", "ok", "", "", "no", ""]),
            data_line("1", ["a", "b", "ok", "ok", "ok", "ok", "", "", "no", ""]),
            data_line("9", ["a", "b", "ok", "ok", "ok", "ok", "", "", "no", ""]),
        ]
        .join("\n");
        let ids: Vec<String> = parse_table_rows(&content)
            .into_iter()
            .map(|r| r.row_id)
            .collect();
        assert_eq!(ids, ["2", "1", "9"]);
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("  "), None);
        assert_eq!(parse_int("n/a"), None);
        assert_eq!(parse_int("7"), Some(7));
        assert_eq!(parse_int(" 7 "), Some(7));
    }

    /// Strategy for a cell without pipes or newlines
    fn arb_cell() -> impl Strategy<Value = String> {
        "[a-z0-9 ]{0,10}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_parse_never_panics_and_ids_are_numeric(content in any::<String>()) {
            for row in parse_table_rows(&content) {
                prop_assert!(!row.row_id.is_empty());
                prop_assert!(row.row_id.chars().all(|c| c.is_ascii_digit()));
            }
        }

        #[test]
        fn prop_well_formed_rows_round_trip(
            id in "[0-9]{1,4}",
            product in "[a-z]{1,8}",
            notes in arb_cell(),
            confidence in proptest::option::of(0u32..100),
        ) {
            let confidence_cell = confidence.map(|c| c.to_string()).unwrap_or_default();
            let line = format!(
                "| {id} | r | d | {product} | ok | ok | ok | {confidence_cell} |  | no | {notes} |"
            );
            let rows = parse_table_rows(&line);

            prop_assert_eq!(rows.len(), 1);
            prop_assert_eq!(&rows[0].row_id, &id);
            prop_assert_eq!(&rows[0].product, &product);
            prop_assert_eq!(rows[0].confidence_overall, confidence);
            prop_assert_eq!(rows[0].confidence_price, None);
            prop_assert_eq!(&rows[0].notes, notes.trim());
        }

        #[test]
        fn prop_lines_without_pipe_prefix_produce_no_rows(content in "[^|\n]*") {
            prop_assert!(parse_table_rows(&content).is_empty());
        }
    }
}
