//! Shelf Service - Pure shelving logic without HTTP layer
//!
//! Orders call numbers (or whole CSV shelf lists) the way they stand on the
//! shelf. Called from the CLI and from the Axum handlers.

use std::path::Path;

use rayon::prelude::*;

use crate::domain::{DomainError, ShelfList};
use crate::modules::cataloguing_pro::{derive_key, normalize, SortKey};
use crate::modules::{export, import};

/// One call number with its derived key, in shelf order
#[derive(Debug, Clone)]
pub struct ShelfEntry {
    /// Index of the call number in the input
    pub position: usize,
    pub normalized: String,
    pub key: SortKey,
}

/// Outcome of sorting a shelf list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSummary {
    pub rows: usize,
    /// Rows that did not parse as LCC and were ordered as plain text
    pub unshelved: usize,
}

/// Derive every key, then stable-sort by key.
///
/// Keys are independent per row and are derived in parallel; equal keys keep
/// their input order.
pub fn shelve(call_numbers: &[Option<&str>]) -> Vec<ShelfEntry> {
    let mut entries: Vec<ShelfEntry> = call_numbers
        .par_iter()
        .enumerate()
        .map(|(position, call_number)| {
            let normalized = normalize(*call_number);
            let key = derive_key(&normalized);
            ShelfEntry {
                position,
                normalized,
                key,
            }
        })
        .collect();

    entries.sort_by(|a, b| a.key.cmp(&b.key));
    entries
}

/// Reorder the rows of a shelf list into shelf order.
///
/// The normalized call number of each row is stored in `normalized_column`,
/// replacing any column of that name.
pub fn sort_shelf_list(mut list: ShelfList, normalized_column: &str) -> (ShelfList, SortSummary) {
    let entries = {
        let call_numbers: Vec<Option<&str>> =
            (0..list.len()).map(|row| list.call_number(row)).collect();
        shelve(&call_numbers)
    };

    let mut normalized = vec![String::new(); entries.len()];
    for entry in &entries {
        normalized[entry.position] = entry.normalized.clone();
    }
    list.set_column(normalized_column, normalized);

    let mut rows: Vec<Option<Vec<String>>> =
        std::mem::take(&mut list.rows).into_iter().map(Some).collect();
    list.rows = entries
        .iter()
        .map(|entry| rows[entry.position].take().unwrap_or_default())
        .collect();

    let summary = SortSummary {
        rows: entries.len(),
        unshelved: entries.iter().filter(|e| !e.key.is_shelved()).count(),
    };

    (list, summary)
}

/// Read `input`, sort it by `column`, write the result to `output`.
pub fn sort_csv_file(
    input: &Path,
    column: &str,
    output: &Path,
    normalized_column: &str,
) -> Result<SortSummary, DomainError> {
    tracing::info!(
        "Sorting {} by column '{}' into {}",
        input.display(),
        column,
        output.display()
    );

    let list = import::read_shelf_list_file(input, column)?;
    let (sorted, summary) = sort_shelf_list(list, normalized_column);
    export::write_shelf_list_file(output, &sorted)?;

    if summary.unshelved > 0 {
        tracing::info!(
            "{} of {} rows did not parse as LCC call numbers and were placed after the shelved rows",
            summary.unshelved,
            summary.rows
        );
    }

    Ok(summary)
}
