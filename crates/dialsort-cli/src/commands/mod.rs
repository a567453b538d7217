use anyhow::Result;
use dialsort_config::AppConfig;
use dialsort_io::OutputFormat;
use serde::Serialize;
use std::io::{self, Write};

pub mod completions;
pub mod process;
pub mod scrub;

pub struct Context<'a> {
    pub json: bool,
    pub verbose: bool,
    pub config: &'a AppConfig,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum FormatArg {
    #[default]
    Xlsx,
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Xlsx => OutputFormat::Xlsx,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
