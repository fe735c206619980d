//! In-memory tabular shelf list
//!
//! Rows are kept as raw cells so that columns the sorter does not understand
//! pass through untouched.

use super::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfList {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Index of the column holding call numbers
    pub column: usize,
}

impl ShelfList {
    /// Build a shelf list, resolving `column_name` against the headers.
    pub fn new(
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        column_name: &str,
    ) -> Result<Self, DomainError> {
        let column = headers
            .iter()
            .position(|h| h == column_name)
            .ok_or_else(|| {
                DomainError::Validation(format!("Column '{}' not found", column_name))
            })?;

        Ok(Self {
            headers,
            rows,
            column,
        })
    }

    /// Call number of a row. Empty and missing cells are absent.
    pub fn call_number(&self, row: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(self.column))
            .map(String::as_str)
            .filter(|cell| !cell.is_empty())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Set `header` to `values`, appending the column if it does not exist yet.
    /// Short rows are padded so every row reaches the column.
    pub fn set_column(&mut self, header: &str, values: Vec<String>) {
        let index = match self.headers.iter().position(|h| h == header) {
            Some(index) => index,
            None => {
                self.headers.push(header.to_string());
                self.headers.len() - 1
            }
        };

        for (row, value) in self.rows.iter_mut().zip(values) {
            if row.len() <= index {
                row.resize(index + 1, String::new());
            }
            row[index] = value;
        }
    }
}
