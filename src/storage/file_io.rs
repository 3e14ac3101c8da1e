//! JSON data file helpers
//!
//! The expense store is rewritten whole on every save. Writes go to a sibling
//! `.json.tmp` file that is renamed over the target once fully synced.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BudgetError;

fn data_file_error(action: &str, path: &Path, err: impl std::fmt::Display) -> BudgetError {
    BudgetError::Storage(format!("Cannot {} data file {}: {}", action, path.display(), err))
}

/// Load a data file, or `T::default()` when it has not been created yet
pub fn read_json<T, P>(path: P) -> Result<T, BudgetError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(data_file_error("open", path, e)),
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|e| data_file_error("parse", path, e))
}

/// Replace a data file with `data`, going through a synced temp file
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), BudgetError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| data_file_error("create directory for", path, e))?;
    }

    // same directory, so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");
    let result = write_synced(&temp_path, data).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| data_file_error("replace", path, e))
    });
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_synced<T: Serialize>(temp_path: &Path, data: &T) -> Result<(), BudgetError> {
    let file = File::create(temp_path).map_err(|e| data_file_error("create", temp_path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| data_file_error("serialize", temp_path, e))?;
    writer
        .flush()
        .map_err(|e| data_file_error("flush", temp_path, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| data_file_error("sync", temp_path, e))
}
