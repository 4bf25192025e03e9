use std::io;
use std::ops::Range;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Image(Range<usize>),
    NoImage,
    Truncated,
}

#[derive(Debug, Default)]
pub struct ExtractionReport {
    pub extracted: Vec<PathBuf>,
    pub no_image: usize,
    pub truncated: usize,
    pub failed: usize,
}

impl ExtractionReport {
    pub fn total_files(&self) -> usize {
        self.extracted.len() + self.no_image + self.truncated + self.failed
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to read input directory {path:?}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create output directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
