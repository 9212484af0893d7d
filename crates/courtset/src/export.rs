//! Dataset serialization: line-delimited JSON and a CSV summary.
//!
//! The JSONL contract is strict: exactly one compact JSON value per line,
//! newline-separated, no pretty-printing. Downstream consumers split on
//! newlines, so a multi-line value would silently break them.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::DatasetError;
use crate::record::DatasetRecord;

/// Write records as line-delimited JSON.
pub fn write_jsonl<W: Write>(records: &[DatasetRecord], mut writer: W) -> Result<(), DatasetError> {
    for record in records {
        let line = serde_json::to_string(record)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Write records as line-delimited JSON to a file.
pub fn write_jsonl_file(records: &[DatasetRecord], path: &Path) -> Result<(), DatasetError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_jsonl(records, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Read records from a line-delimited JSON stream.
///
/// Blank lines are skipped; an unparseable line fails with its 1-based line
/// number in [`DatasetError::Import`].
pub fn read_jsonl<R: BufRead>(reader: R) -> Result<Vec<DatasetRecord>, DatasetError> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|source| DatasetError::Import {
            line: index + 1,
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Read records from a line-delimited JSON file.
pub fn read_jsonl_file(path: &Path) -> Result<Vec<DatasetRecord>, DatasetError> {
    read_jsonl(BufReader::new(File::open(path)?))
}

/// Write a per-record CSV summary: case number, decision date, text length,
/// source file. The full text is deliberately not included — the summary is
/// for eyeballing a build, the JSONL is the dataset.
pub fn write_csv_summary<W: Write>(
    records: &[DatasetRecord],
    mut writer: W,
) -> Result<(), DatasetError> {
    writeln!(writer, "case_number,decision_date,text_chars,source_file")?;
    for record in records {
        writeln!(
            writer,
            "{},{},{},{}",
            csv_escape(&record.case_number),
            csv_escape(&record.decision_date),
            record.text.chars().count(),
            csv_escape(record.source_file.as_deref().unwrap_or("")),
        )?;
    }
    Ok(())
}

/// Write the CSV summary to a file.
pub fn write_csv_summary_file(records: &[DatasetRecord], path: &Path) -> Result<(), DatasetError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_csv_summary(records, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Escape a string for CSV output.
///
/// If the text contains commas, double quotes, or newlines, wraps it in
/// double quotes and escapes any internal double quotes by doubling them.
fn csv_escape(text: &str) -> String {
    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}
