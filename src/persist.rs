//! File persistence in bincode format.
//!
//! These helpers work for any serde type. [`BinArray::save`] and
//! [`BinArray::load`] delegate here, so a loaded array passes through the same
//! length and padding validation as any other deserialized array.
//!
//! [`BinArray::save`]: crate::BinArray::save
//! [`BinArray::load`]: crate::BinArray::load

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Serialize `value` with bincode and write it to `path`.
///
/// The file is created if missing and truncated otherwise.
pub fn save<T, P>(value: &T, path: P) -> Result<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let data = bincode::serialize(value)?;
    fs::write(path, &data)?;
    debug!(path = %path.display(), bytes = data.len(), "saved");
    Ok(())
}

/// Read `path` and deserialize its bincode contents.
pub fn load<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let data = fs::read(path)?;
    debug!(path = %path.display(), bytes = data.len(), "loading");
    bincode::deserialize(&data).map_err(|e| {
        warn!(path = %path.display(), error = %e, "failed to decode");
        e.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BinArrayError;

    #[test]
    fn test_save_load_plain_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.bin");

        save(&vec![1u32, 2, 3], &path).unwrap();
        let loaded: Vec<u32> = load(&path).unwrap();
        assert_eq!(loaded, vec![1, 2, 3]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<Vec<u32>> = load(dir.path().join("missing.bin"));
        assert!(matches!(result, Err(BinArrayError::Io(_))));
    }
}
