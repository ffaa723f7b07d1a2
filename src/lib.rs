//! # pdfmd
//!
//! Extract the text of a PDF and render it as lightweight Markdown.
//!
//! Conversion is a two-stage pipeline: page text is pulled out of the
//! document with [`lopdf`](https://docs.rs/lopdf) and concatenated, then a
//! single pass over the lines turns `#`-prefixed lines into headings and
//! `**`/`__`-wrapped lines into sub-headings.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> pdfmd::Result<()> {
//!     // Extract and format in memory
//!     let markdown = pdfmd::to_markdown("document.pdf")?;
//!     println!("{}", markdown);
//!
//!     // Or write straight to a file
//!     pdfmd::convert("document.pdf", "document.md")?;
//!     Ok(())
//! }
//! ```
//!
//! ## What it does not do
//!
//! No layout analysis: columns, tables, fonts and images are ignored, and
//! paragraphs that span several lines in the PDF come out as separate lines.

pub mod convert;
pub mod detect;
pub mod error;
pub mod extract;
pub mod markdown;

pub use convert::{convert, convert_with_options, ConversionReport, ConvertOptions};
pub use detect::{detect_header, is_pdf_bytes, PdfHeader};
pub use error::{Error, Result};
pub use extract::{
    collect_text, extract_text, extract_text_from_bytes, extract_text_from_reader,
    extract_with_options, ErrorMode, ExtractOptions, ExtractedText, LopdfSource, PageSelection,
    PageSource,
};
pub use markdown::{
    classify_line, format_as_markdown, format_as_markdown_with_options, format_line, BoldMode,
    LineKind, MarkdownOptions,
};

use std::path::Path;

/// Extract a PDF file and format it as Markdown without writing anything.
///
/// # Example
///
/// ```no_run
/// let markdown = pdfmd::to_markdown("document.pdf").unwrap();
/// std::fs::write("output.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    to_markdown_with_options(path, &ConvertOptions::default())
}

/// Extract a PDF file and format it as Markdown with custom options.
///
/// # Example
///
/// ```no_run
/// use pdfmd::{to_markdown_with_options, BoldMode, ConvertOptions, ExtractOptions, MarkdownOptions};
///
/// let options = ConvertOptions::new()
///     .with_extract_options(ExtractOptions::new().lenient())
///     .with_markdown_options(MarkdownOptions::new().with_bold_mode(BoldMode::Delimited));
/// let markdown = to_markdown_with_options("document.pdf", &options).unwrap();
/// ```
pub fn to_markdown_with_options<P: AsRef<Path>>(
    path: P,
    options: &ConvertOptions,
) -> Result<String> {
    let extracted = extract_with_options(path, &options.extract)?;
    Ok(format_as_markdown_with_options(
        &extracted.text,
        &options.markdown,
    ))
}

/// Extract a PDF held in memory and format it as Markdown.
pub fn bytes_to_markdown(data: &[u8]) -> Result<String> {
    let text = extract_text_from_bytes(data)?;
    Ok(format_as_markdown(&text))
}
