//! Extract command - pull billing records out of a single report PDF.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use faturex_core::pdf::{PdfExtractor, PdfProcessor};
use faturex_core::report::number::format_br_decimal;
use faturex_core::{
    BillingRecord, ExtractionError, FaturexConfig, ReportExtraction, ReportExtractor,
};

use super::{load_category_table, load_config};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input report PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Category map CSV (default: embedded map)
    #[arg(long)]
    categories: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// CSV output (UTF-8 with BOM)
    Csv,
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing report: {}", args.input.display());

    let table = load_category_table(args.categories.as_deref(), &config)?;
    let extractor = ReportExtractor::new(table);

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let extraction = extract_report(&args.input, &extractor, &config, &pb)?;
    pb.finish_with_message("Done");

    if extraction.is_empty() {
        eprintln!(
            "{} Nenhum dado foi encontrado. Verifique se o PDF tem o formato esperado.",
            style("✗").red()
        );
        return Err(ExtractionError::NoData.into());
    }

    let output = format_extraction(&extraction, args.format)?;

    if let Some(output_path) = &args.output {
        write_output(output_path, &output, args.format)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", output);
    }

    eprintln!(
        "{} {} linhas extraídas ({} produtos) em {} páginas",
        style("✓").green(),
        extraction.records.len(),
        extraction.product_count(),
        extraction.pages
    );

    debug!("Total processing time: {:?}", start.elapsed());
    Ok(())
}

fn extract_report(
    path: &Path,
    extractor: &ReportExtractor,
    config: &FaturexConfig,
    pb: &ProgressBar,
) -> anyhow::Result<ReportExtraction> {
    pb.set_message("Loading PDF...");
    pb.set_position(5);

    let pdf = PdfExtractor::open(path)?;
    let mut page_count = pdf.page_count();
    if config.pdf.max_pages > 0 {
        page_count = page_count.min(config.pdf.max_pages as u32);
    }
    debug!("PDF has {} pages", page_count);

    pb.set_message("Extracting text...");
    pb.set_position(15);

    let text_len = pdf.extract_text().map(|t| t.trim().len()).unwrap_or(0);
    if text_len < config.pdf.min_text_length {
        warn!("report has almost no text layer; is this a scanned PDF?");
    }

    let mut pages = Vec::with_capacity(page_count as usize);
    for page in 1..=page_count {
        pb.set_message(format!("Processando página {}/{}", page, page_count));
        pb.set_position(15 + (page as u64 * 75) / page_count.max(1) as u64);

        let text = match pdf.extract_page_text(page) {
            Ok(text) => text,
            Err(err) => {
                warn!("page {}: {}", page, err);
                String::new()
            }
        };
        pages.push(text);
    }

    pb.set_message("Parsing lines...");
    pb.set_position(95);

    Ok(extractor.extract_pages(pages))
}

fn format_extraction(
    extraction: &ReportExtraction,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Csv => format_csv(&extraction.records),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&extraction.records)?),
        OutputFormat::Text => Ok(format_text(extraction)),
    }
}

pub(crate) fn format_csv(records: &[BillingRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    for record in records {
        wtr.serialize(record)?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

/// Write CSV with a UTF-8 BOM so spreadsheet imports keep accented
/// characters.
pub(crate) fn write_csv_with_bom(path: &Path, data: &str) -> anyhow::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(b"\xef\xbb\xbf")?;
    file.write_all(data.as_bytes())?;
    Ok(())
}

fn write_output(path: &Path, output: &str, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Csv => write_csv_with_bom(path, output),
        OutputFormat::Json | OutputFormat::Text => {
            fs::write(path, output)?;
            Ok(())
        }
    }
}

fn format_text(extraction: &ReportExtraction) -> String {
    let total_valor: Decimal = extraction.records.iter().map(|r| r.valor).sum();
    let total_quantidade: Decimal = extraction.records.iter().map(|r| r.quantidade).sum();

    let mut output = String::new();
    output.push_str(&format!("Registros:  {}\n", extraction.records.len()));
    output.push_str(&format!("Produtos:   {}\n", extraction.product_count()));
    output.push_str(&format!("Páginas:    {}\n", extraction.pages));
    output.push_str(&format!(
        "Quantidade: {}\n",
        format_br_decimal(total_quantidade)
    ));
    output.push_str(&format!("Valor:      {}\n", format_br_decimal(total_valor)));
    output
}
