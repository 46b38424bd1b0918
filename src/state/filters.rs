//! Filter-value normalization.

use crate::types::{Column, Filter, RawFilter};
use std::collections::HashMap;
use tracing::warn;

/// Normalize raw filter values against a table's columns.
///
/// Strings become text filters. `{key, value}` entries are bound to the
/// column with that key; entries naming an unknown column are dropped.
/// When several columns share a key the last one wins.
pub fn normalize_filters(table: &str, raw: &[RawFilter], columns: &[Column]) -> Vec<Filter> {
    let by_key: HashMap<&str, &Column> = columns.iter().map(|c| (c.key.as_str(), c)).collect();

    raw.iter()
        .filter_map(|entry| match entry {
            RawFilter::Text(text) => Some(Filter::text(text.clone())),
            RawFilter::Column { key, value } => match by_key.get(key.as_str()) {
                Some(column) => Some(Filter::value((*column).clone(), value.clone())),
                None => {
                    warn!(table, key = %key, "dropping filter for unknown column");
                    None
                }
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn columns() -> Vec<Column> {
        vec![Column::primary("id"), Column::new("status")]
    }

    #[test]
    fn test_text_and_value_filters() {
        let raw = vec![RawFilter::from("urgent"), RawFilter::column("status", "shipped")];
        let filters = normalize_filters("orders", &raw, &columns());

        assert_eq!(
            filters,
            vec![
                Filter::text("urgent"),
                Filter::value(Column::new("status"), "shipped"),
            ]
        );
    }

    #[test]
    fn test_unknown_column_is_dropped() {
        let raw = vec![
            RawFilter::column("missing", 1),
            RawFilter::column("id", json!(4)),
        ];
        let filters = normalize_filters("orders", &raw, &columns());

        assert_eq!(filters, vec![Filter::value(Column::primary("id"), 4)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_filters("orders", &[], &columns()).is_empty());
    }

    #[test]
    fn test_duplicate_keys_bind_last_column() {
        let columns = vec![
            Column::new("status").with_attr("label", "first"),
            Column::new("status").with_attr("label", "second"),
        ];
        let filters = normalize_filters("orders", &[RawFilter::column("status", "x")], &columns);

        let Filter::Value { column, .. } = &filters[0] else {
            panic!("expected value filter");
        };
        assert_eq!(column.extra["label"], "second");
    }
}
