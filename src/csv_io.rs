// src/csv_io.rs
use std::io::{self, Write};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::record::{columns, PredictionRecord};

/* ---------------- Parsing ---------------- */

/// Header name → column index for the fields we know about.
struct HeaderIndex {
    target_date: Option<usize>,
    predicted_close: Option<usize>,
    actual_close: Option<usize>,
    pct_error: Option<usize>,
    model_name: Option<usize>,
    date_generated: Option<usize>,
    abs_error: Option<usize>,
}

impl HeaderIndex {
    fn new(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        Self {
            target_date: find(columns::TARGET_DATE),
            predicted_close: find(columns::PREDICTED_CLOSE),
            actual_close: find(columns::ACTUAL_CLOSE),
            pct_error: find(columns::PCT_ERROR),
            model_name: find(columns::MODEL_NAME),
            date_generated: find(columns::DATE_GENERATED),
            abs_error: find(columns::ABS_ERROR),
        }
    }

    fn record(&self, row: &StringRecord) -> PredictionRecord {
        // Short rows leave trailing fields absent rather than failing.
        let get = |ix: Option<usize>| ix.and_then(|i| row.get(i)).map(String::from);
        PredictionRecord {
            target_date: get(self.target_date),
            predicted_close: get(self.predicted_close),
            actual_close: get(self.actual_close),
            pct_error: get(self.pct_error),
            model_name: get(self.model_name),
            date_generated: get(self.date_generated),
            abs_error: get(self.abs_error),
        }
    }
}

/// Parsed file: whether a `target_date` header exists, plus every data row.
pub struct ParsedRecords {
    pub has_target_date: bool,
    pub records: Vec<PredictionRecord>,
}

/// Parse the predictions CSV, mapping fields by header name.
/// Unknown columns are ignored; ragged rows are accepted.
pub fn parse_records(text: &str) -> Result<ParsedRecords, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let index = HeaderIndex::new(rdr.headers()?);
    let mut records = Vec::new();
    for row in rdr.records() {
        records.push(index.record(&row?));
    }

    Ok(ParsedRecords { has_target_date: index.target_date.is_some(), records })
}

/* ---------------- Writing ---------------- */

/// Write headers (optional) and rows with the given delimiter.
pub fn write_rows<W: Write>(
    w: W,
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    sep: u8,
) -> io::Result<()> {
    let mut wtr = WriterBuilder::new().delimiter(sep).from_writer(w);
    if let Some(h) = headers {
        wtr.write_record(h)?;
    }
    for r in rows {
        wtr.write_record(r)?;
    }
    wtr.flush()
}

/// Same as `write_rows`, into a String (clipboard path).
pub fn rows_to_string(headers: Option<&[String]>, rows: &[Vec<String>], sep: u8) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_rows(&mut buf, headers, rows, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_by_header_in_any_order() {
        let text = "model_name,pct_error,target_date,predicted_close,actual_close,extra\n\
                    ARIMA,-1.11,2024-01-02,45000,44500,x\n";
        let parsed = parse_records(text).unwrap();
        assert!(parsed.has_target_date);
        let r = &parsed.records[0];
        assert_eq!(r.target_date(), "2024-01-02");
        assert_eq!(r.predicted_close.as_deref(), Some("45000"));
        assert_eq!(r.model_name(), "ARIMA");
        assert_eq!(r.pct_error.as_deref(), Some("-1.11"));
    }

    #[test]
    fn short_rows_leave_fields_absent() {
        let text = "target_date,predicted_close,actual_close,pct_error,model_name\n2024-01-01,44000\n";
        let parsed = parse_records(text).unwrap();
        let r = &parsed.records[0];
        assert_eq!(r.actual_close, None);
        assert_eq!(r.model_name, None);
    }

    #[test]
    fn quoted_fields_and_missing_header() {
        let text = "date,predicted_close\n\"2024-01-01\",\"1,000\"\n";
        let parsed = parse_records(text).unwrap();
        assert!(!parsed.has_target_date);
        assert_eq!(parsed.records[0].predicted_close.as_deref(), Some("1,000"));
    }

    #[test]
    fn tsv_round_text() {
        let rows = vec![vec![s!("a b"), s!("c\td")]];
        let out = rows_to_string(Some(&[s!("H1"), s!("H2")]), &rows, b'\t');
        assert_eq!(out, "H1\tH2\na b\t\"c\td\"\n");
    }
}
