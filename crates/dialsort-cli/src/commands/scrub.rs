use crate::commands::{print_json, Context, FormatArg};
use crate::error::{invalid_input, not_found};
use anyhow::{Context as _, Result};
use clap::Args;
use dialsort_core::{detect_name_column, scrub_table, ScrubReportDto};
use dialsort_io::{read_table, write_table, OutputFormat, ScrubNames};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
pub struct ScrubArgs {
    /// Owner list (.csv, .xlsx, .xlsm, .xls, .ods)
    pub input: PathBuf,
    /// Name column to test [default: first owner/name/mail column]
    #[arg(long)]
    pub column: Option<String>,
    /// Extra keyword to scrub; may be repeated
    #[arg(long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,
    /// Directory for the output files [default: next to the input]
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    /// Output file format
    #[arg(long, value_enum, default_value_t = FormatArg::Xlsx)]
    pub format: FormatArg,
}

pub fn scrub(ctx: &Context<'_>, args: ScrubArgs) -> Result<()> {
    if let Some(dir) = &args.out_dir {
        if !dir.is_dir() {
            return Err(not_found(format!("output directory {}", dir.display())));
        }
    }

    let table = read_table(&args.input)
        .with_context(|| format!("read owner list {}", args.input.display()))?;
    let column = match args.column {
        Some(column) => {
            if !table.header().contains(&column) {
                return Err(invalid_input(format!(
                    "column {column:?} not found; available: {}",
                    table.header().names().join(", ")
                )));
            }
            column
        }
        None => detect_name_column(table.header())
            .map(str::to_string)
            .ok_or_else(|| invalid_input("input has no columns"))?,
    };

    let patterns = ctx
        .config
        .scrub_patterns(args.keywords.iter().map(String::as_str))?;
    let outcome = scrub_table(&table, &column, &patterns);
    info!(
        column = %column,
        removed = outcome.removed.len(),
        kept = outcome.kept.len(),
        "owner list scrubbed"
    );

    let format = OutputFormat::from(args.format);
    let names = ScrubNames::for_input(&args.input, args.out_dir.as_deref(), format);
    write_table(&names.kept, &outcome.kept, format)
        .with_context(|| format!("write kept rows {}", names.kept.display()))?;
    write_table(&names.removed, &outcome.removed, format)
        .with_context(|| format!("write removed rows {}", names.removed.display()))?;

    if ctx.json {
        let report = ScrubReportDto {
            input: args.input.display().to_string(),
            column,
            original_rows: table.len(),
            removed_rows: outcome.removed.len(),
            remaining_rows: outcome.kept.len(),
            kept_output: names.kept.display().to_string(),
            removed_output: names.removed.display().to_string(),
            removed_names: outcome.removed_names,
        };
        return print_json(&report);
    }

    println!("Scrubbed {} on column {column:?}", args.input.display());
    println!("Original rows: {}", table.len());
    println!("Removed: {} -> {}", outcome.removed.len(), names.removed.display());
    println!("Remaining: {} -> {}", outcome.kept.len(), names.kept.display());
    if ctx.verbose && !outcome.removed_names.is_empty() {
        println!();
        println!("Removed names:");
        for name in &outcome.removed_names {
            println!("  {name}");
        }
    }
    Ok(())
}
