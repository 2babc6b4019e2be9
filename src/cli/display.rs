use crate::{format_row, NvsRecord, Result};
use std::io::Write;

pub const NO_RESULTS_MSG: &str = "No results found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Table,
    Json,
    Csv,
}

pub fn write_report<W: Write>(out: &mut W, format: Format, records: &[NvsRecord]) -> Result {
    match format {
        Format::Table => write_table(out, records),
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
            Ok(())
        }
        Format::Csv => write_csv(out, records),
    }
}

pub fn write_table<W: Write>(out: &mut W, records: &[NvsRecord]) -> Result {
    if records.is_empty() {
        writeln!(out, "{}", NO_RESULTS_MSG)?;
        return Ok(());
    }

    writeln!(out, " Found {} NVS records", records.len())?;
    writeln!(
        out,
        "{}",
        format_row(["Type", "Name", "Value", "Block", "Expires"])
    )?;
    for record in records {
        writeln!(
            out,
            "{}",
            format_row([
                record.kind.as_str(),
                record.name.as_str(),
                record.value.as_str(),
                record.block.as_str(),
                record.expires.as_str(),
            ])
        )?;
    }
    Ok(())
}

fn write_csv<W: Write>(out: &mut W, records: &[NvsRecord]) -> Result {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    wtr.write_record(["type", "name", "value", "block", "expires"])?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
