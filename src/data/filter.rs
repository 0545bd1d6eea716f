use super::model::StockPrice;

// ---------------------------------------------------------------------------
// Ticker filter
// ---------------------------------------------------------------------------

/// Keep the records whose identifier is exactly `ticker`.
///
/// The comparison is case-sensitive whole-string equality: `"AAPL"` does not
/// match `"aapl"` or `"AAPL2"`, and an empty ticker only matches records with
/// an empty identifier. Input order is preserved.
pub fn filter_by_identifier(records: Vec<StockPrice>, ticker: &str) -> Vec<StockPrice> {
    records
        .into_iter()
        .filter(|sp| sp.identifier == ticker)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(line: &str) -> StockPrice {
        StockPrice::from_csv(line).unwrap()
    }

    #[test]
    fn match_is_exact_and_case_sensitive() {
        let records = vec![
            row("AAPL,2019-01-02,1,1,1,1,1"),
            row("aapl,2019-01-02,1,1,1,1,1"),
            row("AAPL2,2019-01-02,1,1,1,1,1"),
        ];
        let kept = filter_by_identifier(records, "AAPL");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].identifier, "AAPL");
    }

    #[test]
    fn input_order_is_preserved() {
        let records = vec![
            row("AAPL,2019-01-02,1,1,1,1,1"),
            row("AAPL,2019-01-03,2,2,2,2,2"),
            row("MSFT,2019-01-02,3,3,3,3,3"),
        ];
        let kept = filter_by_identifier(records.clone(), "AAPL");
        assert_eq!(kept, records[..2].to_vec());
    }

    #[test]
    fn empty_ticker_matches_only_empty_identifiers() {
        let records = vec![
            row("AAPL,2019-01-02,1,1,1,1,1"),
            row(",2019-01-02,1,1,1,1,1"),
        ];
        let kept = filter_by_identifier(records.clone(), "");
        assert_eq!(kept, vec![records[1].clone()]);

        let only_named = vec![row("AAPL,2019-01-02,1,1,1,1,1")];
        assert!(filter_by_identifier(only_named, "").is_empty());
    }
}
