//! Batch command - extract multiple report PDFs.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error};

use faturex_core::pdf::{PdfExtractor, PdfProcessor};
use faturex_core::{BillingRecord, FaturexConfig, ReportExtractor};

use super::{load_category_table, load_config};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Combined CSV output file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Category map CSV (default: embedded map)
    #[arg(long)]
    categories: Option<PathBuf>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No PDF files match: {}", args.input);
    }

    let table = load_category_table(args.categories.as_deref(), &config)?;
    let extractor = ReportExtractor::new(table);

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let mut all_records: Vec<BillingRecord> = Vec::new();
    let mut failed = 0usize;

    for file in &files {
        pb.set_message(
            file.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("")
                .to_string(),
        );

        match extract_file(file, &extractor, &config) {
            Ok(mut records) => {
                debug!("{}: {} records", file.display(), records.len());
                all_records.append(&mut records);
            }
            Err(err) => {
                failed += 1;
                error!("{}: {}", file.display(), err);
                if !args.continue_on_error {
                    pb.abandon();
                    return Err(err);
                }
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done");

    if let Some(output_path) = &args.output {
        let csv_data = super::extract::format_csv(&all_records)?;
        super::extract::write_csv_with_bom(output_path, &csv_data)?;
        println!(
            "{} Combined CSV written to {}",
            style("✓").green(),
            output_path.display()
        );
    }

    eprintln!(
        "{} {} arquivos, {} registros, {} falhas em {:.1}s",
        style("✓").green(),
        files.len(),
        all_records.len(),
        failed,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn extract_file(
    path: &Path,
    extractor: &ReportExtractor,
    config: &FaturexConfig,
) -> anyhow::Result<Vec<BillingRecord>> {
    let pdf = PdfExtractor::open(path)?;

    let mut page_count = pdf.page_count();
    if config.pdf.max_pages > 0 {
        page_count = page_count.min(config.pdf.max_pages as u32);
    }

    let mut pages = Vec::with_capacity(page_count as usize);
    for page in 1..=page_count {
        pages.push(pdf.extract_page_text(page).unwrap_or_default());
    }

    Ok(extractor.extract_pages(pages).records)
}
