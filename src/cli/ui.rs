//! Console output: run banner and the loaded worksheet

use super::app::OutputFormat;
use crate::fetch::FetchReport;
use chrono::{DateTime, Local};
use colored::*;
use std::io::{self, Write};

const RULE: &str = "---------------------------------";

/// CSV output is meant for pipes, so its banner goes to stderr
pub fn banner_on_stdout(format: OutputFormat) -> bool {
    format == OutputFormat::Table
}

pub fn print_header(format: OutputFormat) {
    let header = render_header(Local::now());
    if banner_on_stdout(format) {
        println!("{}", header);
    } else {
        eprintln!("{}", header);
    }
}

/// Banner with the run's local start time
pub fn render_header(now: DateTime<Local>) -> String {
    format!(
        "\n{}\n{}\n  {} \n{}\n",
        RULE.bright_blue(),
        "   ACCESSING SHAREPOINT DATA     ".bright_white().bold(),
        now.format("%Y-%m-%d %H:%M:%S%.6f"),
        RULE.bright_blue()
    )
}

pub fn print_report(report: &FetchReport, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report, format)?;
    out.flush()
}

pub fn write_report<W: Write>(out: &mut W, report: &FetchReport, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(
                out,
                "{} {} ({} {})",
                "File:".dimmed(),
                report.item.name.bright_green().bold(),
                "modified".dimmed(),
                report.modified.to_rfc3339().cyan()
            )?;
            writeln!(
                out,
                "{} {} ({} rows)",
                "Sheet:".dimmed(),
                report.sheet.name.bright_white(),
                report.sheet.row_count()
            )?;
            writeln!(out)?;
            write!(out, "{}", report.sheet)
        }
        OutputFormat::Csv => write!(out, "{}", report.sheet.to_csv()),
    }
}
