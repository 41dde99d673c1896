use csv::{ReaderBuilder, StringRecord, Trim};

use crate::{Error, ProcessRecord, Result};

/// Number of columns in a well-formed row.
const FIELD_COUNT: usize = 5;

/// Characters used as thousands separators by the various locales
/// `tasklist` may run under.
const THOUSANDS_SEPARATORS: [char; 5] = [',', '.', ' ', '\u{a0}', '\u{202f}'];

/// Parses a headerless CSV process listing into records, in listing order.
///
/// Rows with fewer than five fields are skipped. Numeric fields that fail
/// to parse become `0`. Only malformed quoting is reported as an error.
pub fn parse_listing(text: &str) -> Result<Vec<ProcessRecord>> {
    check_quoting(text)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(Error::listing)?;
        if let Some(record) = parse_row(&row) {
            records.push(record);
        }
    }

    Ok(records)
}

/// Quoting state while scanning a listing.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Scan {
    FieldStart,
    Unquoted,
    Quoted,
    /// A `"` inside a quoted field: either an escaped quote or the end.
    QuoteInQuoted,
}

/// Rejects quoting the `csv` reader would otherwise accept silently:
/// a `"` inside an unquoted field, text after a closing quote, and a
/// quoted field that is never closed.
fn check_quoting(text: &str) -> Result<()> {
    let mut state = Scan::FieldStart;
    let mut line = 1;

    for c in text.chars() {
        state = match (state, c) {
            (Scan::Quoted, '"') => Scan::QuoteInQuoted,
            (Scan::Quoted, _) => Scan::Quoted,
            (Scan::QuoteInQuoted, '"') => Scan::Quoted,
            (_, ',' | '\r' | '\n') => Scan::FieldStart,
            (Scan::QuoteInQuoted, _) => {
                return Err(Error::listing(format!(
                    "line {line}: unexpected {c:?} after closing quote"
                )));
            }
            (Scan::FieldStart, '"') => Scan::Quoted,
            (Scan::Unquoted, '"') => {
                return Err(Error::listing(format!(
                    "line {line}: bare quote in unquoted field"
                )));
            }
            (Scan::FieldStart | Scan::Unquoted, _) => Scan::Unquoted,
        };
        if c == '\n' {
            line += 1;
        }
    }

    if state == Scan::Quoted {
        return Err(Error::listing(format!("line {line}: unterminated quoted field")));
    }
    Ok(())
}

fn parse_row(row: &StringRecord) -> Option<ProcessRecord> {
    if row.len() < FIELD_COUNT {
        return None;
    }
    let field = |i: usize| row.get(i).unwrap_or_default().trim_matches('"').trim();

    let memory_usage = field(4).to_string();
    Some(ProcessRecord {
        image_name: field(0).to_string(),
        pid: parse_number(field(1)),
        session_name: field(2).to_string(),
        session_id: parse_number(field(3)),
        memory_bytes: parse_memory_bytes(&memory_usage),
        memory_usage,
        ..Default::default()
    })
}

/// Converts a kibibyte memory string such as `"12,345 K"` to bytes.
///
/// Returns `0` when the numeric part cannot be parsed.
pub fn parse_memory_bytes(s: &str) -> u64 {
    let s = s.trim();
    let digits = s
        .strip_suffix(['K', 'k'])
        .map(str::trim_end)
        .unwrap_or(s);

    parse_number::<u64>(digits).saturating_mul(1024)
}

fn parse_number<T: std::str::FromStr + Default>(s: &str) -> T {
    let cleaned: String = s
        .chars()
        .filter(|c| !THOUSANDS_SEPARATORS.contains(c))
        .collect();
    cleaned.parse().unwrap_or_default()
}
