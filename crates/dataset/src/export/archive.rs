use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use super::ExportError;

/// Bundles `files` into a deflate-compressed zip at `archive_path`.
///
/// Entries are stored under their bare file names, in the order given.
pub fn write_archive(archive_path: &Path, files: &[PathBuf]) -> Result<(), ExportError> {
    if let Some(parent) = archive_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut zip = ZipWriter::new(BufWriter::new(File::create(archive_path)?));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| ExportError::InvalidFileName(path.clone()))?;

        debug!("Adding {} to archive", name);
        zip.start_file(name, options)?;
        io::copy(&mut BufReader::new(File::open(path)?), &mut zip)?;
    }

    zip.finish()?.flush()?;
    Ok(())
}

/// Lists entry names in the archive at `archive_path`.
pub fn read_archive_entries(archive_path: &Path) -> Result<Vec<String>, ExportError> {
    let mut archive = ZipArchive::new(BufReader::new(File::open(archive_path)?))?;

    let mut names = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        names.push(archive.by_index(i)?.name().to_string());
    }

    Ok(names)
}
