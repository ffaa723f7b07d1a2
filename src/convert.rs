//! PDF to Markdown file conversion.
//!
//! Runs extraction, then formatting, then writes the result. The output file
//! is only created once both earlier steps have succeeded.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::extract::{extract_with_options, ExtractOptions};
use crate::markdown::{format_as_markdown_with_options, MarkdownOptions, LINE_SEPARATOR};

/// Options for a full conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Extraction options
    pub extract: ExtractOptions,

    /// Formatting options
    pub markdown: MarkdownOptions,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set extraction options.
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.extract = options;
        self
    }

    /// Set formatting options.
    pub fn with_markdown_options(mut self, options: MarkdownOptions) -> Self {
        self.markdown = options;
        self
    }
}

/// Summary of a finished conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Where the Markdown was written
    pub output_path: PathBuf,
    /// Pages in the source document
    pub pages: u32,
    /// Pages that contributed text
    pub pages_with_text: u32,
    /// Markdown lines written
    pub lines: usize,
    /// Bytes written
    pub bytes_written: usize,
}

/// Convert a PDF file into a Markdown file with default options.
///
/// # Example
///
/// ```no_run
/// let report = pdfmd::convert("document.pdf", "document.md")?;
/// println!("{} lines written", report.lines);
/// # Ok::<(), pdfmd::Error>(())
/// ```
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<ConversionReport> {
    convert_with_options(input, output, &ConvertOptions::default())
}

/// Convert a PDF file into a Markdown file.
pub fn convert_with_options<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &ConvertOptions,
) -> Result<ConversionReport> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let extracted = extract_with_options(input, &options.extract)?;
    let markdown = format_as_markdown_with_options(&extracted.text, &options.markdown);
    let bytes_written = write_markdown(output, &markdown)?;

    let report = ConversionReport {
        output_path: output.to_path_buf(),
        pages: extracted.page_count,
        pages_with_text: extracted.pages_with_text,
        lines: count_lines(&markdown),
        bytes_written,
    };

    log::info!(
        "Converted {} ({} of {} pages with text) into {} ({} lines)",
        input.display(),
        report.pages_with_text,
        report.pages,
        output.display(),
        report.lines
    );

    Ok(report)
}

fn write_markdown(path: &Path, markdown: &str) -> Result<usize> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(markdown.as_bytes())?;
    writer.flush()?;
    Ok(markdown.len())
}

fn count_lines(markdown: &str) -> usize {
    if markdown.is_empty() {
        0
    } else {
        markdown.split(LINE_SEPARATOR).count()
    }
}
