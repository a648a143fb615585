pub mod fields;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::RawRecord;

/// Load screener rows from a CSV file on disk.
pub fn load_records(path: &Path) -> Result<Vec<RawRecord>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("opening CSV file {}", path.display()))?;
    let rows: Vec<RawRecord> = rdr
        .deserialize()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("parsing CSV file {}", path.display()))?;
    Ok(rows)
}

/// Read screener rows from any reader (uploaded bytes, test fixtures).
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let rows: Vec<RawRecord> = rdr
        .deserialize()
        .collect::<Result<Vec<_>, _>>()
        .context("parsing uploaded CSV")?;
    Ok(rows)
}
