//! Process command - segment a single OCR text file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use stseg_core::models::config::StsegConfig;
use stseg_core::report;
use stseg_core::{StructuredDocument, TransactionSegmenter};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input OCR text file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Show segmentation statistics
    #[arg(long)]
    stats: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Marker-framed text report
    Text,
    /// JSON output
    Json,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        StsegConfig::from_file(Path::new(path))?
    } else {
        StsegConfig::default()
    };

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let raw_text = read_text(&args.input)?;

    let segmenter = TransactionSegmenter::new().with_date_parsing(config.segmenter.parse_dates);
    let doc = segmenter.segment(&raw_text);

    debug!(
        "Segmented {} header line(s) and {} transaction(s)",
        doc.header.len(),
        doc.transactions.len()
    );

    // Format output
    let output = format_document(&doc, args.format)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    // Show summary
    if args.stats {
        println!();
        println!("{} Header lines: {}", style("ℹ").blue(), doc.header.len());
        println!(
            "{} Transactions: {}",
            style("ℹ").blue(),
            doc.transactions.len()
        );
        println!(
            "{} Processing time: {:?}",
            style("ℹ").blue(),
            start.elapsed()
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Read a file as UTF-8 text, rejecting invalid byte sequences.
pub fn read_text(path: &Path) -> anyhow::Result<String> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes)
        .map_err(|_| anyhow::anyhow!("{}: file is not valid UTF-8 text", path.display()))
}

/// Render a document in the requested output format.
pub fn format_document(doc: &StructuredDocument, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(report::render(doc)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(doc)?),
    }
}
