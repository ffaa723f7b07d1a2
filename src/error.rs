//! Error types for pdfmd.

use std::io;
use thiserror::Error;

/// Result type alias for pdfmd operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting or converting a PDF.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the input or writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The data does not carry a `%PDF-` header.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The header carries a malformed version number.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// The parser could not interpret the document.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The document is encrypted and could not be opened.
    #[error("Document is encrypted")]
    Encrypted,

    /// Text extraction failed for a page.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Invalid page selection string.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),
}

impl Error {
    /// True when the error came from reading or writing a file.
    pub fn is_file_access(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// True when the input could not be interpreted as a PDF.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            Error::UnknownFormat
                | Error::UnsupportedVersion(_)
                | Error::PdfParse(_)
                | Error::Encrypted
                | Error::TextExtract(_)
        )
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}
