//! Tabular view over the JSON the API returns.

use serde::Serialize;
use serde_json::{Map, Value};

/// One flat row: column name to JSON value.
pub type Record = Map<String, Value>;

/// Ordered rows as returned by the remote service. Rows have no identity
/// beyond their position; the column set is whatever keys the rows carry.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<Record>,
}

impl Table {
    pub fn new(rows: Vec<Record>) -> Self {
        Self { rows }
    }

    /// Shapes an API document into rows.
    ///
    /// - an array becomes one row per element;
    /// - an object with a `results` array becomes one row per result;
    /// - any other object becomes a single row;
    /// - `null` becomes an empty table.
    ///
    /// Non-object elements are wrapped as `{"value": <element>}`.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::default(),
            Value::Array(items) => Self::new(items.iter().map(to_record).collect()),
            Value::Object(map) => match map.get("results") {
                Some(Value::Array(items)) => Self::new(items.iter().map(to_record).collect()),
                _ => Self::new(vec![map.clone()]),
            },
            other => Self::new(vec![to_record(other)]),
        }
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Record> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Union of all row keys, in first-seen order.
    pub fn columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = Vec::new();
        for row in &self.rows {
            for key in row.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
        columns
    }

    /// Values of one column, `None` where a row lacks the key.
    pub fn column(&self, name: &str) -> Vec<Option<&Value>> {
        self.rows.iter().map(|row| row.get(name)).collect()
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

fn to_record(value: &Value) -> Record {
    match value {
        Value::Object(map) => map.clone(),
        other => {
            let mut record = Map::new();
            record.insert("value".to_string(), other.clone());
            record
        }
    }
}
