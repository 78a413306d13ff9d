//! CSV serialization
//!
//! Every non-empty field is wrapped in double quotes with inner quotes
//! doubled. Null and missing values become a bare empty field. Rows are
//! joined with `\n` and the output carries no trailing newline.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::ExportError;

/// One flat record, keyed by column name in insertion order
pub type ExportRow = Map<String, Value>;

/// Serialize rows to CSV text.
///
/// The header row is `headers` when given, otherwise the key order of the
/// first row. An empty `rows` slice yields an empty string even when headers
/// are given; use [`headers_only`] for a header-only file.
pub fn to_csv(rows: &[ExportRow], headers: Option<&[&str]>) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };

    let keys: Vec<&str> = match headers {
        Some(headers) => headers.to_vec(),
        None => first.keys().map(String::as_str).collect(),
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header_line(&keys));
    for row in rows {
        let fields: Vec<String> = keys.iter().map(|key| escape_field(row.get(*key))).collect();
        lines.push(fields.join(","));
    }

    lines.join("\n")
}

/// Serialize any records that serialize to JSON objects
pub fn to_csv_from<T: Serialize>(items: &[T], headers: Option<&[&str]>) -> Result<String, ExportError> {
    let rows = items
        .iter()
        .map(|item| match serde_json::to_value(item) {
            Ok(Value::Object(row)) => Ok(row),
            Ok(other) => Err(ExportError::Serialization(format!(
                "CSV rows must be objects, got {}",
                value_kind(&other)
            ))),
            Err(e) => Err(ExportError::Serialization(e.to_string())),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(to_csv(&rows, headers))
}

/// A header row on its own, for exports that must list columns even when no
/// record matched
pub fn headers_only(headers: &[&str]) -> String {
    header_line(headers)
}

fn header_line(keys: &[&str]) -> String {
    keys.iter()
        .map(|key| quote(key))
        .collect::<Vec<_>>()
        .join(",")
}

fn escape_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => quote(s),
        Some(other) => quote(&other.to_string()),
    }
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> ExportRow {
        match value {
            Value::Object(map) => map,
            _ => panic!("test rows must be objects"),
        }
    }

    #[test]
    fn test_empty_rows_yield_empty_string() {
        assert_eq!(to_csv(&[], Some(&["A", "B"])), "");
        assert_eq!(to_csv(&[], None), "");
    }

    #[test]
    fn test_headers_from_first_row() {
        let csv = to_csv(&[row(json!({"a": 1, "b": "x"}))], None);
        assert_eq!(csv, "\"a\",\"b\"\n\"1\",\"x\"");
    }

    #[test]
    fn test_key_order_is_insertion_order() {
        let csv = to_csv(&[row(json!({"zeta": 1, "alpha": 2}))], None);
        assert!(csv.starts_with("\"zeta\",\"alpha\""));
    }

    #[test]
    fn test_quotes_are_doubled_and_commas_kept() {
        let csv = to_csv(&[row(json!({"title": "Report with \"quotes\" and, commas"}))], None);
        assert_eq!(csv, "\"title\"\n\"Report with \"\"quotes\"\" and, commas\"");
    }

    #[test]
    fn test_null_and_missing_become_bare_empty_fields() {
        let rows = [row(json!({"a": null, "b": true}))];
        assert_eq!(to_csv(&rows, Some(&["a", "b", "c"])), "\"a\",\"b\",\"c\"\n,\"true\",");
    }

    #[test]
    fn test_explicit_headers_select_and_order_columns() {
        let rows = [
            row(json!({"id": 1, "title": "Q1 Sales Report", "status": "published"})),
            row(json!({"id": 2, "title": "Marketing Campaign Analysis", "status": "draft"})),
        ];
        let csv = to_csv(&rows, Some(&["status", "id"]));
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines, vec!["\"status\",\"id\"", "\"published\",\"1\"", "\"draft\",\"2\""]);
    }

    #[test]
    fn test_no_trailing_newline() {
        let csv = to_csv(&[row(json!({"a": "x"})), row(json!({"a": "y"}))], None);
        assert!(!csv.ends_with('\n'));
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn test_headers_only() {
        assert_eq!(headers_only(&["Title", "Status"]), "\"Title\",\"Status\"");
    }

    #[test]
    fn test_to_csv_from_rejects_non_objects() {
        let err = to_csv_from(&[1, 2], None).unwrap_err();
        assert!(matches!(err, ExportError::Serialization(_)));
    }
}
