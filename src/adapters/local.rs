use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-backed `Storage`: each key is stored as `<base_path>/<key>.json`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }
}

impl Storage for LocalStorage {
    fn read_value(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_value(&self, key: &str, value: &str) -> Result<()> {
        let full_path = self.path_for(key);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Readers only ever see a complete file.
        let tmp_path = full_path.with_extension("json.tmp");
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &full_path)?;
        Ok(())
    }
}
