use std::path::{Path, PathBuf};

use super::Manifest;
use crate::{Error, Result};

/// Represents a package.json file with both raw content and parsed manifest.
#[derive(Debug, Clone)]
pub struct PackageJson {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl PackageJson {
    /// Open and parse a package.json file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = read(&path)?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Re-read the file from disk.
    ///
    /// Returns `Ok(false)` when the content has not changed since the last
    /// read. On error the previous snapshot is kept.
    pub fn reload(&mut self) -> Result<bool> {
        let content = read(&self.path)?;
        if content == self.content {
            return Ok(false);
        }
        let filename = self.path.display().to_string();
        self.manifest = Manifest::from_str_with_filename(&content, &filename)?;
        self.content = content;
        Ok(true)
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_and_reload() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");
        fs::write(&path, r#"{ "name": "demo" }"#).unwrap();

        let mut file = PackageJson::open(&path).unwrap();
        assert_eq!(file.path(), path);
        assert_eq!(file.manifest().name.as_deref(), Some("demo"));

        assert!(!file.reload().unwrap());

        fs::write(&path, r#"{ "name": "renamed" }"#).unwrap();
        assert!(file.reload().unwrap());
        assert_eq!(file.manifest().name.as_deref(), Some("renamed"));
        assert_eq!(file.content(), r#"{ "name": "renamed" }"#);
    }

    #[test]
    fn test_reload_keeps_snapshot_on_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");
        fs::write(&path, r#"{ "name": "demo" }"#).unwrap();

        let mut file = PackageJson::open(&path).unwrap();
        fs::write(&path, "{ broken").unwrap();

        assert!(file.reload().is_err());
        assert_eq!(file.manifest().name.as_deref(), Some("demo"));
        assert_eq!(file.content(), r#"{ "name": "demo" }"#);
    }
}
