use crate::commands::{print_json, Context, FormatArg};
use crate::error::{invalid_input, not_found};
use anyhow::{Context as _, Result};
use chrono::{Local, NaiveDate};
use clap::Args;
use dialsort_core::domain::Table;
use dialsort_core::qa::QaReport;
use dialsort_core::{process_table, ProcessReportDto};
use dialsort_io::{read_table, write_output_table, write_qa_report, OutputFormat, OutputNames};
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Contact sheet (.csv, .xlsx, .xlsm, .xls, .ods)
    pub input: PathBuf,
    /// Directory for the output files [default: current directory]
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    /// Run date used in output file names (YYYY-MM-DD) [default: today]
    #[arg(long)]
    pub date: Option<String>,
    /// Output file format
    #[arg(long, value_enum, default_value_t = FormatArg::Xlsx)]
    pub format: FormatArg,
}

pub fn process(ctx: &Context<'_>, args: ProcessArgs) -> Result<()> {
    let date = match args.date.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => Local::now().date_naive(),
    };
    let out_dir = args.out_dir.unwrap_or_else(|| PathBuf::from("."));
    if !out_dir.is_dir() {
        return Err(not_found(format!("output directory {}", out_dir.display())));
    }

    let table = read_table(&args.input)
        .with_context(|| format!("read contact sheet {}", args.input.display()))?;
    log_preview(&table);

    let options = ctx.config.process_options()?;
    let output = process_table(&table, &options);
    if !output.qa.counts_match() {
        warn!(
            original = output.qa.original_rows,
            processed = output.qa.processed_rows(),
            "row count mismatch"
        );
    }

    let format = OutputFormat::from(args.format);
    let names = OutputNames::for_run(&output.cleaned, date, format);
    let cleaned_path = names.cleaned(&out_dir);
    let discard_path = names.discard(&out_dir);
    let qa_path = names.qa_summary(&out_dir);
    write_output_table(&cleaned_path, &output.cleaned, format)
        .with_context(|| format!("write cleaned file {}", cleaned_path.display()))?;
    write_output_table(&discard_path, &output.discard, format)
        .with_context(|| format!("write discard file {}", discard_path.display()))?;
    write_qa_report(&qa_path, &output.qa, format)
        .with_context(|| format!("write QA report {}", qa_path.display()))?;
    if format == OutputFormat::Csv && !output.qa.details.is_empty() {
        let details_path = names.qa_details(&out_dir);
        write_output_table(&details_path, &output.qa.details, format)
            .with_context(|| format!("write QA details {}", details_path.display()))?;
    }

    if ctx.json {
        let report = ProcessReportDto {
            input: args.input.display().to_string(),
            original_rows: output.qa.original_rows,
            cleaned_rows: output.qa.cleaned_rows,
            discard_rows: output.qa.discard_rows,
            counts_match: output.qa.counts_match(),
            cleaned_output: cleaned_path.display().to_string(),
            discard_output: discard_path.display().to_string(),
            qa_output: qa_path.display().to_string(),
            qa_summary: output.qa.summary.clone(),
        };
        return print_json(&report);
    }

    println!(
        "Processed {} ({} rows)",
        args.input.display(),
        output.qa.original_rows
    );
    println!("Cleaned: {} -> {}", output.cleaned.len(), cleaned_path.display());
    println!("Discard: {} -> {}", output.discard.len(), discard_path.display());
    println!("QA report: {}", qa_path.display());
    println!();
    print_summary(&output.qa);
    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| invalid_input(format!("invalid --date {raw:?}, expected YYYY-MM-DD")))
}

fn log_preview(table: &Table) {
    let phone_columns: Vec<&str> = table
        .header()
        .names()
        .iter()
        .map(String::as_str)
        .filter(|name| name.to_lowercase().contains("phone"))
        .collect();
    debug!(
        rows = table.len(),
        columns = table.header().len(),
        phone_columns = ?phone_columns,
        "input preview"
    );
}

fn print_summary(report: &QaReport) {
    let width = report
        .summary
        .iter()
        .map(|row| row.check.len())
        .max()
        .unwrap_or(0);
    for row in &report.summary {
        if row.is_blank() {
            println!();
        } else {
            println!("{:<width$}  {}", row.check, row.result);
        }
    }
}
