use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::error::RecordError;

/// Field separator of the price file.
pub const DELIMITER: char = ',';

/// Number of fields on every data line.
pub const FIELD_COUNT: usize = 7;

/// Date formats accepted on input. The first one is used for output.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

// ---------------------------------------------------------------------------
// StockPrice – one row of the price file
// ---------------------------------------------------------------------------

/// A single trading day for one ticker.
///
/// Column order on disk is `identifier, date, open, close, high, low, volume`;
/// the `Serialize` derive follows the same order so written files load back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockPrice {
    pub identifier: String,
    pub date: NaiveDate,
    pub open: Decimal,
    pub close: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub volume: u64,
}

impl StockPrice {
    /// Parse one data line (header excluded).
    ///
    /// The identifier is kept verbatim so that filtering stays exact; the
    /// remaining fields tolerate surrounding whitespace.
    pub fn from_csv(line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.split(DELIMITER).collect();
        if fields.len() != FIELD_COUNT {
            return Err(RecordError::FieldCount {
                expected: FIELD_COUNT,
                found: fields.len(),
            });
        }

        Ok(StockPrice {
            identifier: fields[0].to_string(),
            date: parse_date(fields[1])?,
            open: parse_price("open", fields[2])?,
            close: parse_price("close", fields[3])?,
            high: parse_price("high", fields[4])?,
            low: parse_price("low", fields[5])?,
            volume: parse_volume(fields[6])?,
        })
    }
}

impl FromStr for StockPrice {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StockPrice::from_csv(s)
    }
}

/// Renders the record as a data line in the input format.
impl fmt::Display for StockPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{id}{d}{date}{d}{open}{d}{close}{d}{high}{d}{low}{d}{volume}",
            d = DELIMITER,
            id = self.identifier,
            date = self.date.format(DATE_FORMATS[0]),
            open = self.open,
            close = self.close,
            high = self.high,
            low = self.low,
            volume = self.volume,
        )
    }
}

// -- field parsers --

fn parse_date(s: &str) -> Result<NaiveDate, RecordError> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| RecordError::InvalidField {
            field: "date",
            value: s.to_string(),
            expected: "date (YYYY-MM-DD)",
        })
}

fn parse_price(field: &'static str, s: &str) -> Result<Decimal, RecordError> {
    let s = s.trim();
    let value = Decimal::from_str(s).map_err(|_| RecordError::InvalidField {
        field,
        value: s.to_string(),
        expected: "decimal number",
    })?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(RecordError::NegativeValue {
            field,
            value: s.to_string(),
        });
    }
    Ok(value)
}

fn parse_volume(s: &str) -> Result<u64, RecordError> {
    let s = s.trim();
    if s.starts_with('-') {
        return Err(RecordError::NegativeValue {
            field: "volume",
            value: s.to_string(),
        });
    }
    s.parse::<u64>().map_err(|_| RecordError::InvalidField {
        field: "volume",
        value: s.to_string(),
        expected: "non-negative integer",
    })
}
