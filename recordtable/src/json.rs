//! Loading tables from JSON.
//!
//! Rows arrive as an array of objects:
//!
//! ```json
//! [
//!   { "id": 1, "columns": ["Bob", 42, { "label": "active" }],
//!     "detailColumns": ["Joined in 2019"] }
//! ]
//! ```
//!
//! Cell values map as follows: strings become text, integers and floats keep
//! their numeric kind, booleans become `"true"`/`"false"` text, `null` is an
//! empty cell, arrays are fragments, `{ "label", "href" }` is a link and
//! `{ "label" }` a badge.

use serde::Deserialize;
use serde_json::Value;

use crate::cell::Cell;
use crate::column::{Alignment, Column, ColumnWidth, SortType};
use crate::config::TableOptions;
use crate::error::{Result, TableError};
use crate::pagination::PageDescriptor;
use crate::row::{Row, RowId};

/// Convert one JSON value into a cell.
pub fn cell_from_json(value: &Value) -> Result<Cell> {
    cell_at(value, "$")
}

fn cell_at(value: &Value, path: &str) -> Result<Cell> {
    match value {
        Value::Null => Ok(Cell::Empty),
        Value::Bool(b) => Ok(Cell::Text(b.to_string())),
        Value::String(s) => Ok(Cell::Text(s.clone())),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Cell::Integer(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Cell::Float(f))
            } else {
                Err(TableError::shape(path, "number out of range"))
            }
        }
        Value::Array(parts) => parts
            .iter()
            .enumerate()
            .map(|(i, part)| cell_at(part, &format!("{path}[{i}]")))
            .collect::<Result<Vec<_>>>()
            .map(Cell::Fragment),
        Value::Object(map) => {
            let label = match map.get("label") {
                Some(Value::String(label)) => label.clone(),
                Some(_) => return Err(TableError::shape(path, "label must be a string")),
                None => return Err(TableError::shape(path, "object cells need a label")),
            };
            match map.get("href") {
                Some(Value::String(href)) => Ok(Cell::link(label, href.clone())),
                Some(_) => Err(TableError::shape(path, "href must be a string")),
                None => Ok(Cell::badge(label)),
            }
        }
    }
}

fn row_id_at(value: Option<&Value>, path: &str) -> Result<RowId> {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .map(RowId::Int)
            .ok_or_else(|| TableError::shape(path, "id must be an integer or a string")),
        Some(Value::String(s)) => Ok(RowId::Str(s.clone())),
        Some(_) => Err(TableError::shape(path, "id must be an integer or a string")),
        None => Err(TableError::shape(path, "missing id")),
    }
}

fn cells_at(value: Option<&Value>, path: &str) -> Result<Vec<Cell>> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(cells)) => cells
            .iter()
            .enumerate()
            .map(|(i, cell)| cell_at(cell, &format!("{path}[{i}]")))
            .collect(),
        Some(_) => Err(TableError::shape(path, "expected an array")),
    }
}

/// Parse a JSON array of rows.
pub fn rows_from_json(json: &str) -> Result<Vec<Row>> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(items) = value else {
        return Err(TableError::shape("$", "expected an array of rows"));
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let path = format!("$[{i}]");
            let Value::Object(map) = item else {
                return Err(TableError::shape(path, "expected an object"));
            };
            Ok(Row {
                id: row_id_at(map.get("id"), &format!("{path}.id"))?,
                columns: cells_at(map.get("columns"), &format!("{path}.columns"))?,
                detail_columns: cells_at(
                    map.get("detailColumns"),
                    &format!("{path}.detailColumns"),
                )?,
            })
        })
        .collect()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ColumnEntry {
    id: String,
    #[serde(default)]
    content: Value,
    #[serde(default)]
    align: Alignment,
    #[serde(default)]
    sortable: bool,
    #[serde(default)]
    sort_type: SortType,
    #[serde(default)]
    width: Option<u16>,
    #[serde(default)]
    flex: Option<u16>,
}

/// Parse a JSON array of column descriptors.
///
/// Each entry takes `id`, `content` (any cell value), and optionally `align`
/// (`left`/`center`/`right`), `sortable`, `sortType`
/// (`string`/`numeric`/`date`) and either a fixed `width` or a `flex` weight.
pub fn columns_from_json(json: &str) -> Result<Vec<Column>> {
    let entries: Vec<ColumnEntry> = serde_json::from_str(json)?;
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let content = cell_at(&entry.content, &format!("$[{i}].content"))?;
            let width = match (entry.width, entry.flex) {
                (Some(width), _) => ColumnWidth::Fixed(width),
                (None, Some(weight)) => ColumnWidth::Flex(weight),
                (None, None) => ColumnWidth::Auto,
            };
            Ok(Column {
                id: entry.id,
                content,
                align: entry.align,
                sortable: entry.sortable,
                sort_type: entry.sort_type,
                width,
            })
        })
        .collect()
}

/// Parse and validate table options.
pub fn options_from_json(json: &str) -> Result<TableOptions> {
    let options: TableOptions = serde_json::from_str(json)?;
    options.validate()?;
    Ok(options)
}

/// Parse a caller-owned pagination descriptor.
pub fn descriptor_from_json(json: &str) -> Result<PageDescriptor> {
    Ok(serde_json::from_str(json)?)
}
