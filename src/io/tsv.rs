//! Two-column cluster tables (CSV or TSV)
//!
//! Each file has a header row `cluster_id<delim><field>` followed by one
//! `(cluster id, value)` row per cluster. Quoting follows RFC 4180.

use super::fs::ensure_parent_exists;
use crate::error::{Error, Result};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::Path;

/// Name of the identifier column written in the header
pub const CLUSTER_ID_COLUMN: &str = "cluster_id";

/// Values of one field, keyed by cluster id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterTable {
    /// Header name of the value column
    pub field_name: String,
    pub values: BTreeMap<u64, String>,
}

impl ClusterTable {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, cluster_id: u64) -> Option<&str> {
        self.values.get(&cluster_id).map(String::as_str)
    }
}

/// Read a two-column table.
///
/// A missing file is logged and gives an empty table. The delimiter is a
/// tab when the first line contains one, a comma otherwise.
pub fn read_tsv(path: impl AsRef<Path>) -> Result<ClusterTable> {
    let path = path.as_ref();
    if !path.exists() {
        log::warn!("{} does not exist, skipping.", path.display());
        return Ok(ClusterTable::default());
    }
    let text = std::fs::read_to_string(path)?;
    let first_line = text.lines().next().unwrap_or("");
    let delimiter = if first_line.contains('\t') { '\t' } else { ',' };

    let tabular = |line: usize, message: String| Error::Tabular {
        path: path.to_path_buf(),
        line,
        message,
    };

    let mut records = parse_records(&text, delimiter).into_iter();
    let field_name = match records.next() {
        Some((_, mut header)) if header.len() == 2 => header.swap_remove(1),
        Some((line, header)) => {
            return Err(tabular(
                line,
                format!("expected a 2-column header, got {} fields", header.len()),
            ));
        }
        None => return Err(tabular(1, "missing header row".into())),
    };

    let mut values = BTreeMap::new();
    for (line, mut row) in records {
        if row.len() != 2 {
            return Err(tabular(line, format!("expected 2 fields, got {}", row.len())));
        }
        let value = row.swap_remove(1);
        let id = row[0].trim();
        let cluster_id = id
            .parse::<u64>()
            .map_err(|_| tabular(line, format!("invalid cluster id {:?}", id)))?;
        values.insert(cluster_id, value);
    }

    log::info!("Read {}.", path.display());
    Ok(ClusterTable { field_name, values })
}

/// Write a two-column table sorted by cluster id.
///
/// The delimiter is a tab for a `.tsv` extension, a comma otherwise.
pub fn write_tsv<I, K, V>(path: impl AsRef<Path>, field_name: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = (K, V)>,
    K: Borrow<u64>,
    V: Display,
{
    let path = path.as_ref();
    let delimiter = match path.extension().and_then(|e| e.to_str()) {
        Some("tsv") => '\t',
        _ => ',',
    };

    let mut rows: Vec<(u64, String)> = values
        .into_iter()
        .map(|(id, value)| (*id.borrow(), value.to_string()))
        .collect();
    rows.sort_by_key(|(id, _)| *id);

    let mut out = String::new();
    write_row(&mut out, CLUSTER_ID_COLUMN, field_name, delimiter);
    for (id, value) in &rows {
        write_row(&mut out, &id.to_string(), value, delimiter);
    }

    ensure_parent_exists(path)?;
    std::fs::write(path, out)?;
    log::info!("Wrote {}.", path.display());
    Ok(())
}

fn write_row(out: &mut String, first: &str, second: &str, delimiter: char) {
    push_field(out, first, delimiter);
    out.push(delimiter);
    push_field(out, second, delimiter);
    out.push_str("\r\n");
}

/// Append a field, quoting it only when it holds a delimiter, a quote or
/// a line break
fn push_field(out: &mut String, field: &str, delimiter: char) {
    let needs_quotes = field
        .chars()
        .any(|c| c == delimiter || c == '"' || c == '\n' || c == '\r');
    if needs_quotes {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}

/// Split text into records of fields, each tagged with its starting line.
///
/// Quoted fields may hold delimiters, doubled quotes and line breaks.
/// Blank lines are skipped.
fn parse_records(text: &str, delimiter: char) -> Vec<(usize, Vec<String>)> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut start_line = 1;

    let mut finish = |record: &mut Vec<String>, start_line: usize| {
        let blank = record.len() == 1 && record[0].is_empty();
        if !blank {
            records.push((start_line, std::mem::take(record)));
        }
        record.clear();
    };

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push('\n');
                }
                c => field.push(c),
            }
            continue;
        }
        match c {
            '"' if field.is_empty() => in_quotes = true,
            c if c == delimiter => record.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                finish(&mut record, start_line);
                line += 1;
                start_line = line;
            }
            c => field.push(c),
        }
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        finish(&mut record, start_line);
    }

    records
}
