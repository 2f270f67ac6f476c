//! On-disk model formats for Pure Rust AdaBoost.
//!
//! Models are written either as compact bincode or as human-readable JSON.
//! The format is picked from the file extension: `.json` means JSON and
//! everything else is bincode.

use crate::core::error::{AdaBoostError, Result};
use bincode::Options;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Upper bound on bincode payloads; stops corrupt length prefixes from
/// triggering huge allocations.
const MAX_BINCODE_BYTES: u64 = 1024 * 1024 * 1024;

fn bincode_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .allow_trailing_bytes()
        .with_limit(MAX_BINCODE_BYTES)
}

/// Supported serialization formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SerializationFormat {
    /// Native Rust bincode format (fast, compact)
    #[default]
    Bincode,
    /// JSON format (human-readable, portable)
    Json,
}

impl SerializationFormat {
    /// Detect serialization format from a path's extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => SerializationFormat::Json,
            _ => SerializationFormat::Bincode,
        }
    }

    /// Recommended file extension for the format.
    pub fn file_extension(&self) -> &'static str {
        match self {
            SerializationFormat::Bincode => "bin",
            SerializationFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for SerializationFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerializationFormat::Bincode => write!(f, "bincode"),
            SerializationFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for SerializationFormat {
    type Err = AdaBoostError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bincode" | "bin" => Ok(SerializationFormat::Bincode),
            "json" => Ok(SerializationFormat::Json),
            _ => Err(AdaBoostError::config(format!("Unknown format: {}", s))),
        }
    }
}

/// Write `value` to `path` in the format implied by its extension.
pub fn save_to_path<T, P>(value: &T, path: P) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let format = SerializationFormat::from_path(path);
    let mut writer = BufWriter::new(File::create(path)?);

    match format {
        SerializationFormat::Bincode => bincode_options().serialize_into(&mut writer, value)?,
        SerializationFormat::Json => serde_json::to_writer_pretty(&mut writer, value)?,
    }
    writer.flush()?;

    log::debug!("Wrote {} model to {}", format, path.display());
    Ok(())
}

/// Read a value from `path` in the format implied by its extension.
///
/// Anything that fails to decode is reported as a persistence error.
pub fn load_from_path<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let format = SerializationFormat::from_path(path);
    let reader = BufReader::new(File::open(path)?);

    let value = match format {
        SerializationFormat::Bincode => bincode_options().deserialize_from(reader).map_err(|e| {
            AdaBoostError::persistence(format!(
                "Could not decode bincode model '{}': {}",
                path.display(),
                e
            ))
        })?,
        SerializationFormat::Json => serde_json::from_reader(reader).map_err(|e| {
            AdaBoostError::persistence(format!(
                "Could not decode JSON model '{}': {}",
                path.display(),
                e
            ))
        })?,
    };

    log::debug!("Read {} model from {}", format, path.display());
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        values: Vec<f64>,
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            SerializationFormat::from_path("model.json"),
            SerializationFormat::Json
        );
        assert_eq!(
            SerializationFormat::from_path("MODEL.JSON"),
            SerializationFormat::Json
        );
        assert_eq!(
            SerializationFormat::from_path("model.bin"),
            SerializationFormat::Bincode
        );
        assert_eq!(
            SerializationFormat::from_path("model"),
            SerializationFormat::Bincode
        );
    }

    #[test]
    fn test_extension_round_trips() {
        for format in [SerializationFormat::Bincode, SerializationFormat::Json] {
            let path = format!("model.{}", format.file_extension());
            assert_eq!(SerializationFormat::from_path(path), format);
        }
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!(
            "bin".parse::<SerializationFormat>().unwrap(),
            SerializationFormat::Bincode
        );
        assert_eq!(
            "JSON".parse::<SerializationFormat>().unwrap(),
            SerializationFormat::Json
        );
        assert!("xml".parse::<SerializationFormat>().is_err());
    }

    #[test]
    fn test_save_and_load_both_formats() {
        let dir = tempdir().unwrap();
        let sample = Sample {
            name: "stump".to_string(),
            values: vec![0.5, -1.25],
        };

        for file in ["sample.bin", "sample.json"] {
            let path = dir.path().join(file);
            save_to_path(&sample, &path).unwrap();
            let loaded: Sample = load_from_path(&path).unwrap();
            assert_eq!(loaded, sample);
        }
    }

    #[test]
    fn test_garbage_is_persistence_error() {
        let dir = tempdir().unwrap();
        for file in ["bad.bin", "bad.json"] {
            let path = dir.path().join(file);
            std::fs::write(&path, b"\xff\xfe not a model").unwrap();
            let err = load_from_path::<Sample, _>(&path).unwrap_err();
            assert!(err.is_persistence(), "{}: {}", file, err);
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = load_from_path::<Sample, _>(dir.path().join("missing.bin")).unwrap_err();
        assert!(err.is_recoverable());
    }
}
