//! Grid payload shared by every data endpoint.

use serde::{Deserialize, Serialize};

/// Name of one column of a [`TableData`] payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMeta {
    pub name: String,
}

/// Rows of a grid plus the names of its columns, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableData<T> {
    pub rows: Vec<T>,
    pub cols: Vec<ColumnMeta>,
}

/// Types that can be laid out as grid rows.
pub trait TableRow {
    /// Serialized field names of the row type, in display order.
    fn columns() -> &'static [&'static str];
}

impl<T: TableRow> TableData<T> {
    pub fn new(rows: Vec<T>) -> Self {
        let cols = T::columns()
            .iter()
            .map(|name| ColumnMeta {
                name: (*name).to_string(),
            })
            .collect();
        TableData { rows, cols }
    }
}

impl<T> TableData<T> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.cols.iter().map(|c| c.name.as_str()).collect()
    }
}
