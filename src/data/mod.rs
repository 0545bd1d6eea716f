/// Data layer: line reading, record parsing, and ticker filtering.
///
/// Architecture:
/// ```text
///   prices.csv
///        │
///        ▼
///   ┌──────────┐
///   │  source   │  open file → lazy lines
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  skip header, parse lines → Vec<StockPrice>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  exact ticker match → rows for the table
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod source;
