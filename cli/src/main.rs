//! pdfmd CLI - convert the text of a PDF into Markdown

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use colored::Colorize;

use pdfmd::{BoldMode, ConvertOptions, ExtractOptions, MarkdownOptions, PageSelection};

const USAGE: &str = "Usage: pdfmd <pdf_path> <output_md_path>";

#[derive(Parser)]
#[command(name = "pdfmd")]
#[command(version)]
#[command(about = "Convert the text of a PDF file to Markdown", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "PDF")]
    input: Option<PathBuf>,

    /// Output Markdown file (created or overwritten)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Page range (e.g., "1-10", "1,3,5")
    #[arg(long)]
    pages: Option<String>,

    /// Skip pages whose text cannot be extracted instead of failing
    #[arg(long)]
    lenient: bool,

    /// Only strip a closing bold delimiter when it matches the opening one
    #[arg(long)]
    strict_bold: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let (Some(input), Some(output)) = (cli.input.as_deref(), cli.output.as_deref()) else {
        println!("{}", USAGE.yellow());
        println!("       pdfmd --help for more information");
        process::exit(1);
    };

    let result = build_options(cli.pages.as_deref(), cli.lenient, cli.strict_bold)
        .and_then(|options| cmd_convert(input, output, &options));

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn build_options(
    pages: Option<&str>,
    lenient: bool,
    strict_bold: bool,
) -> Result<ConvertOptions, Box<dyn std::error::Error>> {
    let page_selection = match pages {
        Some(p) => PageSelection::parse(p)?,
        None => PageSelection::All,
    };

    let mut extract = ExtractOptions::new().with_pages(page_selection);
    if lenient {
        extract = extract.lenient();
    }

    let bold_mode = if strict_bold {
        BoldMode::Delimited
    } else {
        BoldMode::Naive
    };

    Ok(ConvertOptions::new()
        .with_extract_options(extract)
        .with_markdown_options(MarkdownOptions::new().with_bold_mode(bold_mode)))
}

fn cmd_convert(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = pdfmd::convert_with_options(input, output, options)?;

    log::debug!(
        "{} of {} pages had text, {} lines, {} bytes",
        report.pages_with_text,
        report.pages,
        report.lines,
        report.bytes_written
    );

    println!(
        "{} {}",
        "Markdown saved to".green(),
        report.output_path.display()
    );

    Ok(())
}
