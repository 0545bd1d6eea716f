use std::io::BufRead;
use std::path::Path;

use super::error::LoadError;
use super::filter::filter_by_identifier;
use super::model::StockPrice;
use super::source::{LineSource, Lines};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read a price file and return the rows for `ticker`.
///
/// The first line is a header and is skipped unread. Every other line must
/// parse; the first one that does not aborts the whole load, so callers
/// never see a partial set of rows.
pub fn load_stock_prices(path: &Path, ticker: &str) -> Result<Vec<StockPrice>, LoadError> {
    let records = read_stock_prices(path)?;
    Ok(filter_by_identifier(records, ticker))
}

/// Read and parse every data line of a price file, unfiltered.
pub fn read_stock_prices(path: &Path) -> Result<Vec<StockPrice>, LoadError> {
    parse_records(LineSource::open(path)?)
}

/// Skip the header, then parse each remaining line in order.
pub fn parse_records<R: BufRead>(mut lines: Lines<R>) -> Result<Vec<StockPrice>, LoadError> {
    // Header: discarded without decoding. An empty file simply has no rows.
    if !lines.skip_line()? {
        return Ok(Vec::new());
    }

    let mut records = Vec::new();
    while let Some(line) = lines.next() {
        let line = line?;
        let price = StockPrice::from_csv(&line).map_err(|reason| LoadError::Parse {
            line: lines.line_number(),
            content: line.clone(),
            reason,
        })?;
        records.push(price);
    }

    Ok(records)
}
