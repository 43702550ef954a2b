//! Column-name normalization.
//!
//! One canonical rule is applied to every header cell: trim surrounding
//! whitespace, collapse internal whitespace runs to a single space, and
//! title-case each word. Lookups downstream are therefore insensitive to
//! case and stray whitespace on column names only; cell values are never
//! touched here.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{NormalizedTable, RawTable};

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static pattern"))
}

/// Normalize a single column name: `" date  ORDERED "` → `"Date Ordered"`.
pub fn normalize_column_name(name: &str) -> String {
    let collapsed = whitespace_run().replace_all(name.trim(), " ");
    collapsed
        .split(' ')
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Apply [`normalize_column_name`] to every header cell of `table`.
pub fn normalize_columns(mut table: RawTable) -> NormalizedTable {
    for name in &mut table.columns {
        *name = normalize_column_name(name);
    }
    NormalizedTable(table)
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Scalar;

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(normalize_column_name("  Sales  "), "Sales");
        assert_eq!(normalize_column_name("\tSales\n"), "Sales");
    }

    #[test]
    fn test_title_cases_each_word() {
        assert_eq!(normalize_column_name("date ordered"), "Date Ordered");
        assert_eq!(normalize_column_name("DATE ORDERED"), "Date Ordered");
        assert_eq!(normalize_column_name("dAtE oRdErEd"), "Date Ordered");
    }

    #[test]
    fn test_collapses_internal_whitespace() {
        assert_eq!(normalize_column_name("date   ordered"), "Date Ordered");
        assert_eq!(normalize_column_name(" date \t ordered "), "Date Ordered");
    }

    #[test]
    fn test_already_canonical_is_unchanged() {
        assert_eq!(normalize_column_name("Date Ordered"), "Date Ordered");
        assert_eq!(normalize_column_name("Category"), "Category");
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(normalize_column_name(""), "");
        assert_eq!(normalize_column_name("   "), "");
    }

    #[test]
    fn test_normalize_columns_leaves_values_alone() {
        let table = RawTable {
            columns: vec![" sales ".to_string(), "CATEGORY".to_string()],
            rows: vec![vec![
                Scalar::Text(" 10 ".to_string()),
                Scalar::Text("toys".to_string()),
            ]],
        };
        let normalized = normalize_columns(table);
        assert_eq!(normalized.columns(), &["Sales", "Category"]);
        // Cell values keep their whitespace and case.
        assert_eq!(
            normalized.table().rows[0][0],
            Scalar::Text(" 10 ".to_string())
        );
        assert_eq!(
            normalized.table().rows[0][1],
            Scalar::Text("toys".to_string())
        );
    }
}
