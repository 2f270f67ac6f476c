//! CSV file loading and saving for Pure Rust AdaBoost.
//!
//! Files hold one point per line and one feature per column. Loaded matrices
//! are transposed into the crate convention of one column per point.

use crate::core::error::{AdaBoostError, Result};
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs::File;
use std::path::Path;

/// CSV-specific configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvConfig {
    /// Has header row
    pub has_header: bool,
    /// Field delimiter
    pub delimiter: char,
    /// Comment character
    pub comment_char: Option<char>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        CsvConfig {
            has_header: false,
            delimiter: ',',
            comment_char: Some('#'),
        }
    }
}

/// CSV data loader
#[derive(Debug, Clone, Default)]
pub struct CsvLoader {
    config: CsvConfig,
}

impl CsvLoader {
    /// Create a loader with default settings (no header, comma separated)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether files have a header row
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.config.has_header = has_header;
        self
    }

    /// Set delimiter character
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    fn read_records(&self, path: &Path) -> Result<Vec<StringRecord>> {
        if !path.is_file() {
            return Err(AdaBoostError::data(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .delimiter(self.config.delimiter as u8)
            .has_headers(self.config.has_header)
            .comment(self.config.comment_char.map(|c| c as u8))
            .trim(Trim::All)
            .from_reader(file);

        let mut records = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.iter().all(|field| field.is_empty()) {
                continue;
            }
            records.push(record);
        }

        log::debug!("Read {} records from {}", records.len(), path.display());
        Ok(records)
    }

    /// Load a numeric matrix; the result has one column per line of the file.
    pub fn load_matrix<P: AsRef<Path>>(&self, path: P) -> Result<Array2<f64>> {
        let path = path.as_ref();
        let records = self.read_records(path)?;
        records_to_matrix(&records, None, path)
    }

    /// Load a matrix whose last column holds the labels.
    ///
    /// Returns the features (one column per point) and the raw labels.
    pub fn load_labeled<P: AsRef<Path>>(&self, path: P) -> Result<(Array2<f64>, Vec<String>)> {
        let path = path.as_ref();
        let records = self.read_records(path)?;

        let num_columns = records.first().map(|r| r.len()).unwrap_or(0);
        if num_columns < 2 {
            return Err(AdaBoostError::data(format!(
                "{} must contain at least one feature column and one label column",
                path.display()
            )));
        }

        let features = records_to_matrix(&records, Some(num_columns - 1), path)?;
        let labels = records
            .iter()
            .map(|record| record.get(num_columns - 1).unwrap_or_default().to_string())
            .collect();

        log::info!("Using the last dimension of training set as labels.");
        Ok((features, labels))
    }

    /// Load raw labels stored either one per line or all on a single line.
    pub fn load_labels<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        let path = path.as_ref();
        let records = self.read_records(path)?;

        let labels: Vec<String> = match records.as_slice() {
            [single] if single.len() > 1 => single.iter().map(str::to_string).collect(),
            _ => records
                .iter()
                .map(|record| record.get(0).unwrap_or_default().to_string())
                .collect(),
        };

        if labels.is_empty() {
            return Err(AdaBoostError::data(format!(
                "Labels file {} is empty",
                path.display()
            )));
        }
        Ok(labels)
    }
}

fn records_to_matrix(
    records: &[StringRecord],
    num_features: Option<usize>,
    path: &Path,
) -> Result<Array2<f64>> {
    let num_points = records.len();
    if num_points == 0 {
        return Err(AdaBoostError::data(format!(
            "{} contains no data",
            path.display()
        )));
    }

    let num_features = num_features.unwrap_or_else(|| records[0].len());
    let mut matrix = Array2::zeros((num_features, num_points));

    for (point, record) in records.iter().enumerate() {
        if record.len() < num_features {
            return Err(AdaBoostError::data(format!(
                "{}: line {} has {} fields, expected {}",
                path.display(),
                point + 1,
                record.len(),
                num_features
            )));
        }
        for (feature, field) in record.iter().take(num_features).enumerate() {
            matrix[[feature, point]] = field.parse::<f64>().map_err(|_| {
                AdaBoostError::data(format!(
                    "{}: line {} field {} is not numeric: '{}'",
                    path.display(),
                    point + 1,
                    feature + 1,
                    field
                ))
            })?;
        }
    }

    Ok(matrix)
}

/// Write one value per line.
pub fn save_labels<P, L>(path: P, labels: &[L]) -> Result<()>
where
    P: AsRef<Path>,
    L: Display,
{
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path.as_ref())?;
    for label in labels {
        writer.write_record([label.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_matrix_transposes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "1.0,2.0,3.0\n4.0,5.0,6.0\n").unwrap();

        let matrix = CsvLoader::new().load_matrix(&path).unwrap();
        assert_eq!(matrix.dim(), (3, 2));
        assert_eq!(matrix[[0, 1]], 4.0);
        assert_eq!(matrix[[2, 0]], 3.0);
    }

    #[test]
    fn test_load_labeled_uses_last_column() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("train.csv");
        fs::write(&path, "0.5,1.5,cat\n2.5,3.5,dog\n").unwrap();

        let (features, labels) = CsvLoader::new().load_labeled(&path).unwrap();
        assert_eq!(features.dim(), (2, 2));
        assert_eq!(labels, vec!["cat".to_string(), "dog".to_string()]);
    }

    #[test]
    fn test_load_labels_row_or_column() {
        let dir = TempDir::new().unwrap();
        let column = dir.path().join("column.csv");
        fs::write(&column, "1\n2\n1\n").unwrap();
        let row = dir.path().join("row.csv");
        fs::write(&row, "1,2,1\n").unwrap();

        let loader = CsvLoader::new();
        assert_eq!(loader.load_labels(&column).unwrap(), vec!["1", "2", "1"]);
        assert_eq!(loader.load_labels(&row).unwrap(), vec!["1", "2", "1"]);
    }

    #[test]
    fn test_header_and_delimiter() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "x;y;label\n1.0;2.0;a\n3.0;4.0;b\n").unwrap();

        let loader = CsvLoader::new().with_header(true).with_delimiter(';');
        let (features, labels) = loader.load_labeled(&path).unwrap();
        assert_eq!(features.dim(), (2, 2));
        assert_eq!(features[[1, 1]], 4.0);
        assert_eq!(labels, vec!["a".to_string(), "b".to_string()]);

        assert!(CsvLoader::new().load_matrix(&path).unwrap_err().is_data());
    }

    #[test]
    fn test_non_numeric_field_is_data_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "1.0,abc\n").unwrap();

        let err = CsvLoader::new().load_matrix(&path).unwrap_err();
        assert!(err.is_data());
    }

    #[test]
    fn test_save_labels() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        save_labels(&path, &["a", "b"]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n");
    }
}
