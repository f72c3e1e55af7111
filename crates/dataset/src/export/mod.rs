//! CSV and zip export of generated datasets.
//!
//! The [`Exporter`] writes every record set to its own CSV file with a header
//! row, then bundles the files into a single zip archive.

mod archive;
mod exporter;
mod table;

pub use archive::{read_archive_entries, write_archive};
pub use exporter::{ExportError, ExportSummary, Exporter, TableSummary};
pub use table::{Table, write_table};
