//! [`PageSource`] backed by lopdf.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use lopdf::Document as LopdfDocument;

use crate::detect::detect_header;
use crate::error::{Error, Result};

use super::PageSource;

/// A PDF document loaded with `lopdf`.
pub struct LopdfSource {
    doc: LopdfDocument,
}

impl LopdfSource {
    /// Load from a file path.
    ///
    /// The file is opened in binary mode and closed before parsing starts.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = {
            let mut file = File::open(path)?;
            let mut data = Vec::new();
            file.read_to_end(&mut data)?;
            data
        };
        log::debug!("Read {} bytes from {}", data.len(), path.display());
        Self::load_bytes(&data)
    }

    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        let header = detect_header(data)?;
        log::debug!("Detected {}", header);

        let doc = LopdfDocument::load_mem(data)?;
        if doc.is_encrypted() {
            log::debug!("Document is encrypted; relying on the parser's default decryption");
        }
        Ok(Self { doc })
    }

    /// Load from a reader.
    pub fn load_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::load_bytes(&data)
    }

    /// Get PDF version string.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }
}

impl PageSource for LopdfSource {
    fn page_numbers(&self) -> Vec<u32> {
        self.doc.get_pages().into_keys().collect()
    }

    fn page_text(&self, page: u32) -> Result<Option<String>> {
        let text = self
            .doc
            .extract_text(&[page])
            .map_err(|e| Error::TextExtract(format!("Page {}: {}", page, e)))?;
        Ok(Some(text).filter(|t| !t.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_bytes_rejects_non_pdf() {
        let result = LopdfSource::load_bytes(b"plain text, not a pdf");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_load_bytes_rejects_truncated_pdf() {
        let result = LopdfSource::load_bytes(b"%PDF-1.4\n1 0 obj\n<< /Type");
        match result {
            Err(err) => assert!(err.is_parse(), "unexpected error: {err}"),
            Ok(_) => panic!("truncated document should not load"),
        }
    }

    #[test]
    fn test_load_file_missing() {
        let result = LopdfSource::load_file("/nonexistent/dir/missing.pdf");
        match result {
            Err(err) => assert!(err.is_file_access()),
            Ok(_) => panic!("missing file should not load"),
        }
    }
}
