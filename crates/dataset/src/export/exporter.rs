use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use super::{Table, write_archive, write_table};
use crate::builders::DatasetResult;
use crate::config::DatasetConfig;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("No file name in path {0}")]
    InvalidFileName(PathBuf),
}

/// One CSV file written by the exporter.
#[derive(Debug, Clone)]
pub struct TableSummary {
    pub file_name: &'static str,
    pub path: PathBuf,
    pub rows: usize,
}

/// Result of exporting a dataset.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub tables: Vec<TableSummary>,
    pub archive_path: PathBuf,
}

impl ExportSummary {
    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|t| t.rows).sum()
    }
}

/// Writes generated datasets to CSV files and a zip archive.
pub struct Exporter {
    output_dir: PathBuf,
    archive_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing into `output_dir`, with the archive placed
    /// next to it as `<output_dir>.zip`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        let output_dir = output_dir.into();
        let archive_path = output_dir.with_extension("zip");
        Self {
            output_dir,
            archive_path,
        }
    }

    pub fn from_config(config: &DatasetConfig) -> Self {
        Self::new(&config.output_dir).with_archive_path(&config.archive_path)
    }

    /// Sets where the zip archive is written.
    pub fn with_archive_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.archive_path = path.into();
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    /// Writes one record set to `<output_dir>/<T::FILE_NAME>`.
    pub fn export_table<T: Table>(&self, rows: &[T]) -> Result<TableSummary, ExportError> {
        let path = self.output_dir.join(T::FILE_NAME);
        info!("Writing {} rows to {}", rows.len(), path.display());

        let rows = write_table(BufWriter::new(File::create(&path)?), rows)?;

        Ok(TableSummary {
            file_name: T::FILE_NAME,
            path,
            rows,
        })
    }

    /// Writes all five record sets, then archives them.
    pub fn export(&self, dataset: &DatasetResult) -> Result<ExportSummary, ExportError> {
        std::fs::create_dir_all(&self.output_dir)?;

        let tables = vec![
            self.export_table(&dataset.products)?,
            self.export_table(&dataset.customers)?,
            self.export_table(&dataset.orders)?,
            self.export_table(&dataset.campaigns)?,
            self.export_table(&dataset.returns)?,
        ];

        let files: Vec<PathBuf> = tables.iter().map(|t| t.path.clone()).collect();
        write_archive(&self.archive_path, &files)?;
        info!(
            "Archived {} files into {}",
            files.len(),
            self.archive_path.display()
        );

        Ok(ExportSummary {
            tables,
            archive_path: self.archive_path.clone(),
        })
    }
}
