//! Search filtering.
//!
//! A row matches when the search key is a case-insensitive substring of the
//! row's flattened text: every cell's visible text, joined with a single
//! space. There is no column scoping; callers cannot know which cell matched.

use crate::row::Row;

/// Flatten a row to the text searched by [`filter_rows`].
pub fn row_text(row: &Row) -> String {
    row.columns
        .iter()
        .map(|cell| cell.visible_text())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check whether a row matches a search key.
///
/// An empty key matches every row.
pub fn row_matches(row: &Row, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    row_text(row)
        .to_lowercase()
        .contains(&search.to_lowercase())
}

/// Reduce `rows` to those matching `search`, keeping their order.
///
/// An empty key returns every row in its original order.
pub fn filter_rows<'a>(rows: &'a [Row], search: &str) -> Vec<&'a Row> {
    if search.is_empty() {
        return rows.iter().collect();
    }
    let needle = search.to_lowercase();
    rows.iter()
        .filter(|row| row_text(row).to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    fn rows() -> Vec<Row> {
        vec![
            Row::new(1, ["Bob", "bob@example.com"]),
            Row::new(2, ["Amy", "amy@contoso.com"]),
            Row::new(3, vec![Cell::text("Zed"), Cell::link("Contoso Ltd", "/a/3")]),
        ]
    }

    fn ids(rows: &[&Row]) -> Vec<String> {
        rows.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn test_empty_search_is_identity() {
        let rows = rows();
        assert_eq!(ids(&filter_rows(&rows, "")), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let rows = rows();
        assert_eq!(ids(&filter_rows(&rows, "CONTOSO")), vec!["2", "3"]);
        assert_eq!(ids(&filter_rows(&rows, "amy")), vec!["2"]);
    }

    #[test]
    fn test_search_matches_rich_content_text() {
        let rows = rows();
        assert_eq!(ids(&filter_rows(&rows, "contoso ltd")), vec!["3"]);
        assert!(filter_rows(&rows, "/a/3").is_empty());
    }

    #[test]
    fn test_row_matches_agrees_with_filter() {
        let rows = rows();
        for key in ["", "o", "EXAMPLE", "zed contoso", "nothing"] {
            let filtered = ids(&filter_rows(&rows, key));
            let expected: Vec<String> = rows
                .iter()
                .filter(|r| row_matches(r, key))
                .map(|r| r.id.to_string())
                .collect();
            assert_eq!(filtered, expected, "key {key:?}");
        }
    }
}
