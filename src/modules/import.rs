use std::io::Read;
use std::path::Path;

use crate::domain::{DomainError, ShelfList};

/// Read a shelf list CSV. The first record is the header row.
///
/// Rows are read flexibly: a record shorter than the header simply has no
/// call number.
pub fn read_shelf_list<R: Read>(reader: R, column_name: &str) -> Result<ShelfList, DomainError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    ShelfList::new(headers, rows, column_name)
}

pub fn read_shelf_list_file(path: &Path, column_name: &str) -> Result<ShelfList, DomainError> {
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DomainError::NotFound(path.display().to_string()),
        _ => DomainError::Io(format!("{}: {}", path.display(), e)),
    })?;

    let list = read_shelf_list(file, column_name)?;
    tracing::debug!("Read {} rows from {}", list.len(), path.display());
    Ok(list)
}
