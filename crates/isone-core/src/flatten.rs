use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Error;

/// Rectangular result of flattening an array of records.
///
/// Row count equals the length of the located array; the column set is the
/// union of keys observed across records, in first-seen order. Cells for
/// fields a record lacks are `Value::Null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell lookup by row index and column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.columns.iter().position(|name| name == column)?;
        self.rows.get(row)?.get(index)
    }

    fn push_record(&mut self, record: &Map<String, Value>) {
        let mut row = vec![Value::Null; self.columns.len()];
        let mut cells = Vec::new();
        collect_cells(record, None, &mut cells);

        for (column, value) in cells {
            let index = match self.columns.iter().position(|name| *name == column) {
                Some(index) => index,
                None => {
                    self.columns.push(column);
                    self.columns.len() - 1
                }
            };
            if index >= row.len() {
                row.resize(index + 1, Value::Null);
            }
            row[index] = value;
        }

        self.rows.push(row);
    }

    /// Pads earlier rows out to columns discovered by later records.
    fn finish(mut self) -> Self {
        let width = self.columns.len();
        for row in &mut self.rows {
            row.resize(width, Value::Null);
        }
        self
    }
}

/// Walks `record_path` through `document` and converts the located array of
/// records into a [`Table`].
///
/// With an empty path the document itself is the row source: either an array
/// of records or a single mapping treated as one record. With a non-empty
/// path, traversal is an iterative fold over the keys; a missing key, or an
/// empty/falsy value at any step before the final key, fails with
/// [`Error::PathNotFound`]. The terminal value must be an array; an empty
/// terminal array yields a zero-row table rather than an error.
pub fn flatten(document: &Value, record_path: &[&str]) -> Result<Table, Error> {
    if record_path.is_empty() {
        return rows_from(document);
    }

    let mut traversed: Vec<String> = Vec::with_capacity(record_path.len());
    let mut current = document;
    for (position, key) in record_path.iter().enumerate() {
        let next = current
            .as_object()
            .and_then(|object| object.get(*key))
            .ok_or_else(|| path_not_found(key, &traversed))?;

        // An empty intermediate container cannot contain the terminal array
        // of records, so "present but empty" fails the same way as "absent".
        let last = position + 1 == record_path.len();
        if !last && is_falsy(next) {
            return Err(path_not_found(key, &traversed));
        }

        traversed.push((*key).to_owned());
        current = next;
    }

    match current {
        Value::Array(records) => records_to_table(records),
        other => Err(shape_error(other)),
    }
}

fn rows_from(document: &Value) -> Result<Table, Error> {
    match document {
        Value::Array(records) => records_to_table(records),
        Value::Object(record) => {
            let mut table = Table::default();
            table.push_record(record);
            Ok(table.finish())
        }
        other => Err(shape_error(other)),
    }
}

fn records_to_table(records: &[Value]) -> Result<Table, Error> {
    let mut table = Table::default();
    for record in records {
        let record = record.as_object().ok_or_else(|| shape_error(record))?;
        table.push_record(record);
    }
    Ok(table.finish())
}

/// Flattens one record into `(column, value)` cells, recursing into nested
/// objects with dot-joined column names. Arrays and scalars stay cell values
/// as-is; an empty nested object contributes no cells.
fn collect_cells(record: &Map<String, Value>, prefix: Option<&str>, cells: &mut Vec<(String, Value)>) {
    for (key, value) in record {
        let column = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.clone(),
        };
        match value {
            Value::Object(nested) => collect_cells(nested, Some(&column), cells),
            other => cells.push((column, other.clone())),
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(boolean) => !boolean,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

fn path_not_found(key: &str, traversed: &[String]) -> Error {
    Error::PathNotFound {
        key: key.to_owned(),
        traversed: traversed.to_vec(),
    }
}

fn shape_error(value: &Value) -> Error {
    Error::Shape {
        found: value_kind(value),
    }
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
