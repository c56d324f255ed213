// crates/ngloc-core/src/loader/source.rs
use super::common_io;
use crate::error::Result;
use crate::model::{normalize, FlatDataset, NestedDataset};
use std::io::Write;
use std::path::Path;

/// Shape of a dataset file on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceFormat {
    /// LGAs listed as plain names per state.
    #[default]
    Flat,
    /// LGAs keyed by name, each with cities, wards and postal codes.
    Nested,
}

impl FlatDataset {
    /// Read a flat dataset from `.json` or `.json.gz`.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let reader = common_io::open_stream(path.as_ref())?;
        Self::from_reader(reader)
    }
}

impl NestedDataset {
    /// Read a nested dataset from `.json` or `.json.gz`.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let reader = common_io::open_stream(path.as_ref())?;
        Self::from_reader(reader)
    }

    /// Read a dataset in either format, normalizing flat input.
    pub fn load_from_path_as(path: impl AsRef<Path>, format: SourceFormat) -> Result<Self> {
        match format {
            SourceFormat::Flat => Ok(normalize(&FlatDataset::load_from_path(path)?)),
            SourceFormat::Nested => Self::load_from_path(path),
        }
    }

    /// Write pretty JSON, gzip-compressed when `path` ends in `.gz`.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = common_io::create_stream(path.as_ref())?;
        self.to_writer_pretty(&mut writer)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NgLocError;

    const FLAT: &str = r#"{"South West": {"code": "south_west", "states": {
        "Lagos": {"code": "LA", "capital": "Ikeja", "lgas": ["Ikeja", "Eti-Osa"]}
    }}}"#;

    #[test]
    fn flat_file_normalizes_on_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.json");
        std::fs::write(&path, FLAT).unwrap();

        let nested = NestedDataset::load_from_path_as(&path, SourceFormat::Flat).unwrap();
        assert_eq!(nested.counts().lgas, 2);
    }

    #[test]
    fn nested_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested.json");
        let nested = normalize(&FlatDataset::from_json_str(FLAT).unwrap());

        nested.save_as(&path).unwrap();
        let back = NestedDataset::load_from_path_as(&path, SourceFormat::Nested).unwrap();
        assert_eq!(back, nested);
    }

    #[cfg(feature = "compact")]
    #[test]
    fn gzip_files_are_transparent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested.json.gz");
        let nested = normalize(&FlatDataset::from_json_str(FLAT).unwrap());

        nested.save_as(&path).unwrap();
        let raw = std::fs::read(&path).unwrap();
        assert_eq!(&raw[..2], &[0x1f, 0x8b]);
        assert_eq!(NestedDataset::load_from_path(&path).unwrap(), nested);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = FlatDataset::load_from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, NgLocError::NotFound(_)));
    }
}
