use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::analysis::scan_image;
use crate::types::{ExtractionError, ExtractionReport, ScanOutcome};

pub const PDF_EXTENSION: &str = "pdf";
pub const JPEG_EXTENSION: &str = "jpg";

/// Lists the entries of `input_dir` carrying the PDF extension, sorted
/// by path so batches process in a deterministic order.
pub fn collect_pdfs(input_dir: &Path) -> Result<Vec<PathBuf>, ExtractionError> {
    let read_dir_err = |source| ExtractionError::ReadDir {
        path: input_dir.to_path_buf(),
        source,
    };

    let mut pdfs = Vec::new();
    for entry in fs::read_dir(input_dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if has_pdf_extension(&path) {
            pdfs.push(path);
        }
    }
    pdfs.sort();
    Ok(pdfs)
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PDF_EXTENSION))
}

pub fn output_name(input: &Path) -> Option<PathBuf> {
    input
        .file_name()
        .map(|name| PathBuf::from(name).with_extension(JPEG_EXTENSION))
}

/// Runs the scanner over every PDF in `input_dir` and writes each
/// extracted image to `output_dir`.
///
/// Files without a complete image are skipped and counted. A file that
/// cannot be read or written is reported as a warning and counted as
/// failed; the batch continues with the remaining files.
pub fn process_folder(
    input_dir: &Path,
    output_dir: &Path,
    progress: Option<&dyn Fn(usize, usize)>,
) -> Result<ExtractionReport, ExtractionError> {
    let pdfs = collect_pdfs(input_dir)?;
    extract_all(&pdfs, output_dir, progress)
}

pub fn extract_all(
    pdfs: &[PathBuf],
    output_dir: &Path,
    progress: Option<&dyn Fn(usize, usize)>,
) -> Result<ExtractionReport, ExtractionError> {
    fs::create_dir_all(output_dir).map_err(|source| ExtractionError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut report = ExtractionReport::default();

    for (i, pdf_path) in pdfs.iter().enumerate() {
        match extract_single(pdf_path, output_dir) {
            Ok(FileOutcome::Extracted(output_path)) => report.extracted.push(output_path),
            Ok(FileOutcome::NoImage) => report.no_image += 1,
            Ok(FileOutcome::Truncated) => report.truncated += 1,
            Err(e) => {
                eprintln!("Warning: Failed to process {}: {}", pdf_path.display(), e);
                report.failed += 1;
            }
        }

        if let Some(cb) = progress {
            cb(i + 1, pdfs.len());
        }
    }

    Ok(report)
}

enum FileOutcome {
    Extracted(PathBuf),
    NoImage,
    Truncated,
}

fn extract_single(pdf_path: &Path, output_dir: &Path) -> io::Result<FileOutcome> {
    let data = fs::read(pdf_path)?;

    match scan_image(&data) {
        ScanOutcome::NoImage => Ok(FileOutcome::NoImage),
        ScanOutcome::Truncated => Ok(FileOutcome::Truncated),
        ScanOutcome::Image(range) => {
            let Some(name) = output_name(pdf_path) else {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "input path has no file name",
                ));
            };
            let output_path = output_dir.join(name);
            fs::write(&output_path, &data[range])?;
            Ok(FileOutcome::Extracted(output_path))
        }
    }
}
