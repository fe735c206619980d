use std::io::Write;
use std::path::Path;

use crate::domain::{DomainError, ShelfList};

pub fn write_shelf_list<W: Write>(writer: W, list: &ShelfList) -> Result<(), DomainError> {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    wtr.write_record(&list.headers)?;
    for row in &list.rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_shelf_list_file(path: &Path, list: &ShelfList) -> Result<(), DomainError> {
    let file = std::fs::File::create(path)
        .map_err(|e| DomainError::Io(format!("{}: {}", path.display(), e)))?;

    write_shelf_list(file, list)?;
    tracing::debug!("Wrote {} rows to {}", list.len(), path.display());
    Ok(())
}
