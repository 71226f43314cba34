// src/parse.rs
use indexmap::IndexMap;
use serde::Serialize;

/// One data line, keyed by header name, in header order.
///
/// Equality ignores key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Row {
    cells: IndexMap<String, String>,
}

/// Every parsed row of one load, in source line order.
pub type Dataset = Vec<Row>;

impl Row {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: IndexMap::with_capacity(capacity),
        }
    }

    /// Sets `key` to `value`. A key that is already present keeps its
    /// position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::default();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

/// Naive comma split: blank lines are skipped, the first remaining line is
/// the header, short rows pad with `""` and extra fields are dropped.
///
/// Quotes are not interpreted, so `"a,b"` inside a cell splits into two fields.
pub fn parse_csv(text: &str) -> Dataset {
    let mut lines = text.split('\n').filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers = split_header(header_line);

    lines.map(|line| build_row(&headers, line)).collect()
}

/// Trimmed column names; duplicates and empty names are kept.
pub fn split_header(line: &str) -> Vec<String> {
    line.split(',').map(|h| h.trim().to_string()).collect()
}

pub fn build_row(headers: &[String], line: &str) -> Row {
    let mut values = line.split(',');
    let mut row = Row::with_capacity(headers.len());
    for header in headers {
        let value = values.next().map(str::trim).unwrap_or("");
        row.insert(header.as_str(), value);
    }
    row
}
