//! PDF header sniffing.

use crate::error::{Error, Result};

/// Information read from a PDF header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfHeader {
    /// PDF version (e.g., "1.7", "2.0")
    pub version: String,
    /// Byte offset of the `%PDF-` marker
    pub offset: usize,
}

impl std::fmt::Display for PdfHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Readers are allowed to accept junk before the header as long as the
/// marker shows up within the first kilobyte.
const HEADER_SEARCH_WINDOW: usize = 1024;

/// Locate and validate the `%PDF-x.y` header in `data`.
///
/// # Returns
/// * `Ok(PdfHeader)` if a well-formed header is found
/// * `Err(Error::UnknownFormat)` if there is no header
/// * `Err(Error::UnsupportedVersion)` if the version is not of the form `d.d`
///
/// # Example
/// ```
/// use pdfmd::detect::detect_header;
///
/// let header = detect_header(b"%PDF-1.7\n").unwrap();
/// assert_eq!(header.version, "1.7");
/// ```
pub fn detect_header(data: &[u8]) -> Result<PdfHeader> {
    let window = &data[..data.len().min(HEADER_SEARCH_WINDOW)];
    let offset = window
        .windows(PDF_MAGIC.len())
        .position(|w| w == PDF_MAGIC)
        .ok_or(Error::UnknownFormat)?;

    let start = offset + PDF_MAGIC.len();
    let version_bytes = data
        .get(start..start + VERSION_LEN)
        .ok_or(Error::UnknownFormat)?;

    if !is_valid_version(version_bytes) {
        return Err(Error::UnsupportedVersion(
            String::from_utf8_lossy(version_bytes).into_owned(),
        ));
    }

    Ok(PdfHeader {
        version: String::from_utf8_lossy(version_bytes).into_owned(),
        offset,
    })
}

fn is_valid_version(version: &[u8]) -> bool {
    matches!(version, [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit())
}

/// Check if bytes start (within the search window) with a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    detect_header(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_valid_pdf() {
        let header = detect_header(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3").unwrap();
        assert_eq!(header.version, "1.7");
        assert_eq!(header.offset, 0);
        assert_eq!(header.to_string(), "PDF 1.7");
    }

    #[test]
    fn test_detect_with_leading_garbage() {
        let mut data = b"\x00\x01junk before the header\n".to_vec();
        data.extend_from_slice(b"%PDF-2.0\n");
        let header = detect_header(&data).unwrap();
        assert_eq!(header.version, "2.0");
        assert_eq!(header.offset, 25);
    }

    #[test]
    fn test_detect_marker_outside_window() {
        let mut data = vec![b' '; HEADER_SEARCH_WINDOW];
        data.extend_from_slice(b"%PDF-1.4\n");
        assert!(matches!(detect_header(&data), Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_invalid_format() {
        let result = detect_header(b"<!DOCTYPE html>");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_truncated_header() {
        assert!(matches!(detect_header(b"%PDF-1"), Err(Error::UnknownFormat)));
        assert!(matches!(detect_header(b""), Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_bad_version() {
        let result = detect_header(b"%PDF-x.y\n");
        assert!(matches!(result, Err(Error::UnsupportedVersion(v)) if v == "x.y"));
    }

    #[test]
    fn test_is_pdf_bytes() {
        assert!(is_pdf_bytes(b"%PDF-1.4\n"));
        assert!(!is_pdf_bytes(b"Not a PDF"));
    }
}
