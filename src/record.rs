// src/record.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::parse_date;

/// Header names of the predictions file.
pub mod columns {
    pub const TARGET_DATE: &str = "target_date";
    pub const PREDICTED_CLOSE: &str = "predicted_close";
    pub const ACTUAL_CLOSE: &str = "actual_close";
    pub const PCT_ERROR: &str = "pct_error";
    pub const MODEL_NAME: &str = "model_name";
    pub const DATE_GENERATED: &str = "date_generated";
    pub const ABS_ERROR: &str = "abs_error";

    /// Column order used when writing raw records back out.
    pub const ALL: [&str; 7] = [
        DATE_GENERATED,
        TARGET_DATE,
        MODEL_NAME,
        PREDICTED_CLOSE,
        ACTUAL_CLOSE,
        ABS_ERROR,
        PCT_ERROR,
    ];
}

/// One row of the predictions file, exactly as read.
///
/// Every field keeps its raw text; `None` means the column was absent from the
/// row. Numeric and date views are computed on demand and never written back.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub target_date: Option<String>,
    pub predicted_close: Option<String>,
    pub actual_close: Option<String>,
    pub pct_error: Option<String>,
    pub model_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_generated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abs_error: Option<String>,
}

/// A field counts as present when it exists and is non-empty.
#[inline]
pub fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Lenient decimal parse, `parseFloat` style: leading whitespace, an optional
/// sign, then the longest decimal prefix or the exact word `Infinity`.
/// Anything else is NaN ("inf", "nan" and "n/a" included).
pub fn parse_decimal(raw: &str) -> f64 {
    let s = raw.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    if rest.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    let end = decimal_prefix_len(rest);
    if end == 0 {
        return f64::NAN;
    }
    rest[..end].parse::<f64>().map(|v| sign * v).unwrap_or(f64::NAN)
}

/// Length of the `digits [. digits] [e[+-]digits]` prefix, 0 if there is none.
fn decimal_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let int_end = digits_from(0);
    let mut end = int_end;
    let mut mantissa_digits = int_end;
    if end < b.len() && b[end] == b'.' {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if end < b.len() && matches!(b[end], b'e' | b'E') {
        let mut i = end + 1;
        if i < b.len() && matches!(b[i], b'+' | b'-') {
            i += 1;
        }
        let exp_end = digits_from(i);
        if exp_end > i {
            end = exp_end;
        }
    }
    end
}

impl PredictionRecord {
    pub fn target_date(&self) -> &str {
        self.target_date.as_deref().unwrap_or("")
    }

    pub fn model_name(&self) -> &str {
        self.model_name.as_deref().unwrap_or("")
    }

    pub fn has_target_date(&self) -> bool {
        present(&self.target_date).is_some()
    }

    pub fn target_day(&self) -> Option<NaiveDate> {
        present(&self.target_date).and_then(parse_date)
    }

    /// Predicted close; NaN when missing or unparseable.
    pub fn predicted(&self) -> f64 {
        self.predicted_close
            .as_deref()
            .map(parse_decimal)
            .unwrap_or(f64::NAN)
    }

    pub fn actual(&self) -> Option<f64> {
        present(&self.actual_close).map(parse_decimal)
    }

    pub fn pct_error(&self) -> Option<f64> {
        present(&self.pct_error).map(parse_decimal)
    }

    /// Look a field up by its column name.
    pub fn field(&self, column: &str) -> Option<&str> {
        use columns::*;
        let f = match column {
            TARGET_DATE => &self.target_date,
            PREDICTED_CLOSE => &self.predicted_close,
            ACTUAL_CLOSE => &self.actual_close,
            PCT_ERROR => &self.pct_error,
            MODEL_NAME => &self.model_name,
            DATE_GENERATED => &self.date_generated,
            ABS_ERROR => &self.abs_error,
            _ => return None,
        };
        f.as_deref()
    }

    /// Builder used by tests and benches.
    pub fn new(target_date: &str, predicted_close: &str) -> Self {
        Self {
            target_date: Some(s!(target_date)),
            predicted_close: Some(s!(predicted_close)),
            ..Self::default()
        }
    }

    pub fn with_actual(mut self, actual: &str) -> Self {
        self.actual_close = Some(s!(actual));
        self
    }

    pub fn with_error(mut self, pct: &str) -> Self {
        self.pct_error = Some(s!(pct));
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model_name = Some(s!(model));
        self
    }
}
