use crate::error::StoreError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let content = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;

    serde_json::from_str(&content).map_err(|e| StoreError::parse(path, e))
}

/// Writes next to the target first and renames over it, so an interrupted
/// save never leaves a truncated file behind.
pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(value).map_err(|e| StoreError::parse(path, e))?;

    let temp_path = temp_path(path);
    fs::write(&temp_path, content).map_err(|e| StoreError::io(&temp_path, e))?;
    fs::rename(&temp_path, path).map_err(|e| StoreError::io(path, e))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().map(|name| name.to_os_string()).unwrap_or_default();
    file_name.push(".tmp");

    path.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_replaces_existing_file_and_cleans_up() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("numbers.json");

        write_json(&path, &vec![1, 2, 3]).unwrap();
        write_json(&path, &vec![4]).unwrap();

        let numbers: Vec<u32> = read_json(&path).unwrap();
        assert_eq!(numbers, vec![4]);
        assert!(!temp.path().join("numbers.json.tmp").exists());
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();

        let result: Result<Vec<u32>, _> = read_json(&temp.path().join("absent.json"));

        assert!(result.unwrap_err().is_not_found());
    }
}
