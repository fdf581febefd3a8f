use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{CropRecord, CropTable, REQUIRED_COLUMNS};

/// Ways reading the input table can fail. All of them end the run.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset {0} not found")]
    NotFound(PathBuf),
    #[error("failed to open {0}: {1}")]
    Open(PathBuf, io::Error),
    #[error("failed to read CSV header: {0}")]
    Header(csv::Error),
    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),
    #[error("CSV row {0}: {1}")]
    Row(usize, csv::Error),
}

// ---------------------------------------------------------------------------
// Locating the file
// ---------------------------------------------------------------------------

/// Find `file_name` next to the running executable, or failing that next to
/// the crate sources. The first candidate that exists wins.
pub fn locate_dataset(file_name: &str) -> Result<PathBuf, LoadError> {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(file_name)));
    let beside_sources = Path::new(env!("CARGO_MANIFEST_DIR")).join(file_name);

    let mut candidates = beside_exe.iter().chain(std::iter::once(&beside_sources));
    if let Some(found) = candidates.find(|p| p.is_file()) {
        return Ok(found.clone());
    }
    Err(LoadError::NotFound(beside_exe.unwrap_or(beside_sources)))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load the whole file into memory.
pub fn load_file(path: &Path) -> Result<CropTable, LoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Open(path.to_path_buf(), e),
    })?;
    load_reader(file)
}

/// Load a table from any byte source with a header row.
pub fn load_reader<R: Read>(source: R) -> Result<CropTable, LoadError> {
    read_table(csv::Reader::from_reader(source))
}

fn read_table<R: Read>(mut reader: csv::Reader<R>) -> Result<CropTable, LoadError> {
    let headers = reader.headers().map_err(LoadError::Header)?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(LoadError::MissingColumn(*missing));
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<CropRecord>().enumerate() {
        let record = result.map_err(|e| LoadError::Row(row_no + 1, e))?;
        records.push(record.normalized());
    }
    Ok(CropTable::new(records))
}
