//! Page-by-page text extraction.
//!
//! The extractor asks a [`PageSource`] for the text of every page in order
//! and concatenates each non-empty fragment followed by a blank line
//! (`"\n\n"`). Pages without text contribute nothing, not even a separator.
//!
//! # Example
//!
//! ```no_run
//! use pdfmd::extract::{extract_with_options, ExtractOptions, PageSelection};
//!
//! fn main() -> pdfmd::Result<()> {
//!     let options = ExtractOptions::new()
//!         .lenient()
//!         .with_pages(PageSelection::parse("1-3")?);
//!     let extracted = extract_with_options("document.pdf", &options)?;
//!     println!("{} of {} pages had text", extracted.pages_with_text, extracted.page_count);
//!     Ok(())
//! }
//! ```

mod lopdf_source;
mod options;

pub use lopdf_source::LopdfSource;
pub use options::{ErrorMode, ExtractOptions, PageSelection};

use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// Separator appended after every page that produced text.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Ordered access to the text of a document's pages.
///
/// Implementations hide the concrete PDF library from the accumulation
/// logic in [`collect_text`].
pub trait PageSource {
    /// Page numbers (1-indexed) in document order.
    fn page_numbers(&self) -> Vec<u32>;

    /// Text of a single page. `Ok(None)` means the page has no extractable
    /// text, which is not an error.
    fn page_text(&self, page: u32) -> Result<Option<String>>;
}

/// Raw text collected from a document together with page statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    /// Concatenated page text, one separator after each non-empty page.
    pub text: String,
    /// Number of pages in the document.
    pub page_count: u32,
    /// Number of pages that contributed text.
    pub pages_with_text: u32,
    /// Pages whose extraction failed in lenient mode.
    pub skipped_pages: Vec<u32>,
}

impl ExtractedText {
    /// True when no page contributed any text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Accumulate the text of every selected page of `source`.
pub fn collect_text<S: PageSource + ?Sized>(
    source: &S,
    options: &ExtractOptions,
) -> Result<ExtractedText> {
    let pages = source.page_numbers();
    let mut extracted = ExtractedText {
        page_count: pages.len() as u32,
        ..ExtractedText::default()
    };

    for page in pages {
        if !options.pages.includes(page) {
            continue;
        }

        let fragment = match source.page_text(page) {
            Ok(fragment) => fragment,
            Err(e) if options.error_mode == ErrorMode::Lenient => {
                log::warn!("Failed to extract text from page {}: {}", page, e);
                extracted.skipped_pages.push(page);
                None
            }
            Err(e) => return Err(e),
        };

        match fragment {
            Some(text) if !text.is_empty() => {
                log::debug!("Page {}: {} bytes of text", page, text.len());
                extracted.text.push_str(&text);
                extracted.text.push_str(PAGE_SEPARATOR);
                extracted.pages_with_text += 1;
            }
            _ => log::debug!("Page {}: no extractable text", page),
        }
    }

    Ok(extracted)
}

/// Extract the raw text of a PDF file.
///
/// # Example
///
/// ```no_run
/// let text = pdfmd::extract_text("document.pdf").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(extract_with_options(path, &ExtractOptions::default())?.text)
}

/// Extract text from a PDF file with custom options.
pub fn extract_with_options<P: AsRef<Path>>(
    path: P,
    options: &ExtractOptions,
) -> Result<ExtractedText> {
    let source = LopdfSource::load_file(path)?;
    collect_text(&source, options)
}

/// Extract the raw text of a PDF held in memory.
pub fn extract_text_from_bytes(data: &[u8]) -> Result<String> {
    let source = LopdfSource::load_bytes(data)?;
    Ok(collect_text(&source, &ExtractOptions::default())?.text)
}

/// Extract the raw text of a PDF read from `reader`.
pub fn extract_text_from_reader<R: Read>(reader: R) -> Result<String> {
    let source = LopdfSource::load_reader(reader)?;
    Ok(collect_text(&source, &ExtractOptions::default())?.text)
}
