//! CSV Data Loader Module
//! Handles CSV file loading and column extraction using Polars.

use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Missing column '{0}'")]
    MissingColumn(String),
    #[error("Column '{0}' contains non-numeric data")]
    NonNumeric(String),
    #[error("No data loaded")]
    NoData,
}

/// Handles CSV file loading with Polars.
pub struct DataLoader {
    df: Option<DataFrame>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self { df: None }
    }

    /// Load a CSV file using Polars.
    pub fn load_csv(&mut self, file_path: &str) -> Result<&DataFrame, LoaderError> {
        // Lazy scan, then collect once
        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;

        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// Extract a named column as f64 values, in row order.
    ///
    /// Values are cast through Float64 so integer columns load transparently.
    /// A value the cast cannot represent is malformed input, not a row to
    /// skip: the two series must stay index-aligned.
    pub fn column_values(&self, name: &str) -> Result<Vec<f64>, LoaderError> {
        let df = self.df.as_ref().ok_or(LoaderError::NoData)?;

        let col = df
            .column(name)
            .map_err(|_| LoaderError::MissingColumn(name.to_string()))?;

        let casted = col.cast(&DataType::Float64)?;
        if casted.null_count() > col.null_count() {
            return Err(LoaderError::NonNumeric(name.to_string()));
        }
        let values = casted.f64()?.into_iter().flatten().collect();

        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_both_columns_in_row_order() {
        let path = write_temp_csv("gc_plot_loader_basic.csv", "gc,non_gc\n2,1\n4,1\n6,1\n");

        let mut loader = DataLoader::new();
        let df = loader.load_csv(path.to_str().unwrap()).unwrap();

        assert_eq!(df.height(), 3);
        assert_eq!(loader.column_values("gc").unwrap(), vec![2.0, 4.0, 6.0]);
        assert_eq!(loader.column_values("non_gc").unwrap(), vec![1.0, 1.0, 1.0]);

        fs::remove_file(path).ok();
    }

    #[test]
    fn malformed_numeric_value_is_an_error() {
        let path = write_temp_csv(
            "gc_plot_loader_malformed.csv",
            "gc,non_gc\n2,1\nabc,1\n6,1\n",
        );

        let mut loader = DataLoader::new();
        loader.load_csv(path.to_str().unwrap()).unwrap();

        let err = loader.column_values("gc").unwrap_err();
        assert!(matches!(err, LoaderError::NonNumeric(ref c) if c == "gc"));

        // The clean column is unaffected
        assert_eq!(loader.column_values("non_gc").unwrap(), vec![1.0, 1.0, 1.0]);

        fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut loader = DataLoader::new();
        let result = loader.load_csv("/nonexistent/gc_data.csv");
        assert!(matches!(result, Err(LoaderError::Csv(_))));
    }

    #[test]
    fn missing_column_is_an_error() {
        let path = write_temp_csv("gc_plot_loader_missing_col.csv", "gc\n2\n4\n");

        let mut loader = DataLoader::new();
        loader.load_csv(path.to_str().unwrap()).unwrap();

        let err = loader.column_values("non_gc").unwrap_err();
        assert!(matches!(err, LoaderError::MissingColumn(ref c) if c == "non_gc"));

        fs::remove_file(path).ok();
    }

    #[test]
    fn extraction_before_load_is_an_error() {
        let loader = DataLoader::new();
        assert!(matches!(
            loader.column_values("gc"),
            Err(LoaderError::NoData)
        ));
    }
}
