//! Batch command - segment every OCR text file in a directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use stseg_core::models::config::StsegConfig;
use stseg_core::{StructuredDocument, TransactionSegmenter};

use super::process::{OutputFormat, format_document, read_text};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input directory containing OCR text files
    #[arg(required = true)]
    input_dir: PathBuf,

    /// Output directory (default: <input_dir>/structured)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    output_name: Option<String>,
    document: Option<StructuredDocument>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        StsegConfig::from_file(Path::new(path))?
    } else {
        StsegConfig::default()
    };

    if !args.input_dir.is_dir() {
        anyhow::bail!("Input directory not found: {}", args.input_dir.display());
    }

    let files = eligible_files(&args.input_dir, &config)?;

    if files.is_empty() {
        anyhow::bail!(
            "No .{} files found in '{}'",
            config.batch.input_extension,
            args.input_dir.display()
        );
    }

    println!(
        "{} Found {} file(s) to parse",
        style("ℹ").blue(),
        files.len()
    );

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.input_dir.join(&config.batch.output_subdir));
    fs::create_dir_all(&output_dir)?;

    // Set up progress bar
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let segmenter = TransactionSegmenter::new().with_date_parsing(config.segmenter.parse_dates);

    // A failure on one file never stops the batch; it is reported per file
    // and counted in the tally.
    let mut results = Vec::with_capacity(files.len());
    for path in files {
        let file_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("<non-utf8 name>")
            .to_string();

        match process_single_file(&path, &segmenter, &output_dir, &config, args.format) {
            Ok((document, output_name)) => {
                // suspend keeps the bar redraw from mangling stdout lines
                pb.suspend(|| {
                    println!(
                        "{} Parsed: {} -> {}",
                        style("✓").green(),
                        file_name,
                        output_name
                    )
                });
                results.push(ProcessResult {
                    path,
                    output_name: Some(output_name),
                    document: Some(document),
                    error: None,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                warn!("Failed to parse {}: {}", path.display(), error_msg);
                pb.suspend(|| {
                    println!(
                        "{} Error processing {}: {}",
                        style("✗").red(),
                        file_name,
                        error_msg
                    )
                });
                results.push(ProcessResult {
                    path,
                    output_name: None,
                    document: None,
                    error: Some(error_msg),
                });
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    // Generate summary if requested
    if args.summary {
        let summary_path = output_dir.join("summary.csv");
        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    // Print tally
    let successful = results.iter().filter(|r| r.error.is_none()).count();
    let failed = results.len() - successful;

    println!();
    println!(
        "{} Parsed {} file(s) in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful).green(),
        style(failed).red()
    );
    println!("   Structured files saved to {}", output_dir.display());

    if failed > 0 {
        println!();
        println!("{}", style("Failed files:").red());
        for result in results.iter().filter(|r| r.error.is_some()) {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

/// Collect eligible input files in deterministic order.
///
/// Eligible means: matching the configured extension and not already carrying
/// the output suffix (so earlier outputs living next to their inputs are not
/// reprocessed).
fn eligible_files(input_dir: &Path, config: &StsegConfig) -> anyhow::Result<Vec<PathBuf>> {
    let pattern = input_dir
        .join(format!("*.{}", config.batch.input_extension))
        .to_string_lossy()
        .into_owned();

    let mut files: Vec<PathBuf> = glob(&pattern)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.file_stem()
                .and_then(|s| s.to_str())
                .map(|s| !s.ends_with(config.batch.output_suffix.as_str()))
                .unwrap_or(true)
        })
        .collect();
    files.sort();

    Ok(files)
}

fn process_single_file(
    path: &Path,
    segmenter: &TransactionSegmenter,
    output_dir: &Path,
    config: &StsegConfig,
    format: OutputFormat,
) -> anyhow::Result<(StructuredDocument, String)> {
    let raw_text = read_text(path)?;
    let document = segmenter.segment(&raw_text);

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    let extension = match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
    };
    let output_name = format!("{}{}.{}", stem, config.batch.output_suffix, extension);
    let output_path = output_dir.join(&output_name);

    let content = format_document(&document, format)?;
    fs::write(&output_path, content)?;
    debug!("Wrote output to {}", output_path.display());

    Ok((document, output_name))
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "output",
        "header_lines",
        "transactions",
        "total_lines",
        "first_date",
        "last_date",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        if let Some(doc) = &result.document {
            let first_date = doc
                .transactions
                .first()
                .and_then(|t| t.date)
                .map(|d| d.to_string())
                .unwrap_or_default();
            let last_date = doc
                .transactions
                .last()
                .and_then(|t| t.date)
                .map(|d| d.to_string())
                .unwrap_or_default();

            wtr.write_record([
                filename,
                "success",
                result.output_name.as_deref().unwrap_or(""),
                &doc.header.len().to_string(),
                &doc.transactions.len().to_string(),
                &doc.line_count().to_string(),
                &first_date,
                &last_date,
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                "",
                "",
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
