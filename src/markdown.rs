//! Line-based Markdown formatting of extracted text.
//!
//! Every input line is trimmed, blank lines are dropped, and each remaining
//! line is rewritten by the first matching rule:
//!
//! | line starts with | output                                      |
//! |------------------|---------------------------------------------|
//! | `#`              | `## ` + the whole line (its `#`s are kept)  |
//! | `**` or `__`     | `### ` + the line minus two chars each side |
//! | anything else    | the line unchanged                          |
//!
//! Lines are joined with a blank line between them. Paragraphs that span
//! several source lines are not reassembled.
//!
//! Formatting is not idempotent: formatted headings start with `#` and are
//! prefixed again on a second pass.

/// Separator placed between formatted lines.
pub const LINE_SEPARATOR: &str = "\n\n";

const HEADING_PREFIX: &str = "## ";
const BOLD_PREFIX: &str = "### ";
const BOLD_DELIMITERS: [&str; 2] = ["**", "__"];

/// Classification of a trimmed, non-empty line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Starts with `#`
    Heading,
    /// Starts with `**` or `__`
    Bold,
    /// Everything else
    Plain,
}

/// How bold lines lose their delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoldMode {
    /// Drop the first two and the last two characters, whatever they are.
    #[default]
    Naive,
    /// Drop the leading delimiter, and the trailing two characters only when
    /// they repeat it.
    Delimited,
}

/// Markdown formatting options.
#[derive(Debug, Clone, Default)]
pub struct MarkdownOptions {
    /// Bold delimiter handling
    pub bold_mode: BoldMode,
}

impl MarkdownOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bold delimiter handling.
    pub fn with_bold_mode(mut self, mode: BoldMode) -> Self {
        self.bold_mode = mode;
        self
    }
}

/// Classify a trimmed line.
pub fn classify_line(line: &str) -> LineKind {
    if line.starts_with('#') {
        LineKind::Heading
    } else if BOLD_DELIMITERS.iter().any(|d| line.starts_with(d)) {
        LineKind::Bold
    } else {
        LineKind::Plain
    }
}

/// Format a single trimmed, non-empty line.
pub fn format_line(line: &str, options: &MarkdownOptions) -> String {
    match classify_line(line) {
        LineKind::Heading => format!("{HEADING_PREFIX}{line}"),
        LineKind::Bold => {
            let inner = match options.bold_mode {
                BoldMode::Naive => strip_two_each_side(line),
                BoldMode::Delimited => strip_delimiters(line),
            };
            format!("{BOLD_PREFIX}{inner}")
        }
        LineKind::Plain => line.to_string(),
    }
}

/// Format raw extracted text as Markdown using default options.
///
/// # Example
///
/// ```
/// let md = pdfmd::format_as_markdown("# Title\n\nSome body text.\n\n");
/// assert_eq!(md, "## # Title\n\nSome body text.");
/// ```
pub fn format_as_markdown(raw_text: &str) -> String {
    format_as_markdown_with_options(raw_text, &MarkdownOptions::default())
}

/// Format raw extracted text as Markdown.
pub fn format_as_markdown_with_options(raw_text: &str, options: &MarkdownOptions) -> String {
    raw_text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format_line(line, options))
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR)
}

/// Character-wise `line[2..len-2]`; empty for lines of four characters or fewer.
fn strip_two_each_side(line: &str) -> &str {
    let count = line.chars().count();
    if count <= 4 {
        return "";
    }
    let mut indices = line.char_indices().map(|(i, _)| i);
    let start = indices.nth(2).unwrap_or(line.len());
    let end = indices.nth(count - 2 - 3).unwrap_or(line.len());
    &line[start..end]
}

fn strip_delimiters(line: &str) -> &str {
    // Both delimiters are ASCII, so byte slicing stays on char boundaries.
    let (delimiter, rest) = line.split_at(2);
    rest.strip_suffix(delimiter).unwrap_or(rest)
}
