//! Marker scan over a single in-memory buffer.
//!
//! A buffer holds one candidate image when it contains the JPEG
//! start-of-image marker; the image ends at the first end-of-image
//! marker. No PDF structure is parsed.

use memchr::memmem;

use crate::types::ScanOutcome;

pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];
pub const JPEG_EOI: [u8; 2] = [0xFF, 0xD9];

/// Locates the first embedded JPEG in `data`.
///
/// The EOI search starts from the beginning of the buffer, not from the
/// SOI position. An EOI that ends at or before the SOI offset leaves no
/// well-formed range and the buffer counts as `Truncated`.
pub fn scan_image(data: &[u8]) -> ScanOutcome {
    let soi = match memmem::find(data, &JPEG_SOI) {
        Some(pos) => pos,
        None => return ScanOutcome::NoImage,
    };

    match memmem::find(data, &JPEG_EOI) {
        Some(eoi) if eoi + JPEG_EOI.len() > soi => ScanOutcome::Image(soi..eoi + JPEG_EOI.len()),
        Some(_) | None => ScanOutcome::Truncated,
    }
}

/// Returns the bytes of the first embedded JPEG, markers included, or
/// `None` when the buffer holds no complete image.
pub fn extract_image(data: &[u8]) -> Option<&[u8]> {
    match scan_image(data) {
        ScanOutcome::Image(range) => Some(&data[range]),
        ScanOutcome::NoImage | ScanOutcome::Truncated => None,
    }
}
