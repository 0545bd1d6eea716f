use std::path::PathBuf;

use clap::Parser;

/// Price file looked up in the working directory by default.
pub const DEFAULT_DATA_FILE: &str = "_StockPrices_Small.csv";

// ---------------------------------------------------------------------------
// Command-line / environment configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Parser)]
#[command(name = "stock-analyzer", version, about = "Browse daily stock prices from a CSV file")]
pub struct AppConfig {
    /// CSV file searched by the Search button.
    #[arg(long, env = "STOCK_ANALYZER_DATA", default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Ticker pre-filled in the search box.
    #[arg(long)]
    pub ticker: Option<String>,

    /// Initial window width in points.
    #[arg(long, default_value_t = 1200.0)]
    pub width: f32,

    /// Initial window height in points.
    #[arg(long, default_value_t = 800.0)]
    pub height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: PathBuf::from(DEFAULT_DATA_FILE),
            ticker: None,
            width: 1200.0,
            height: 800.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = AppConfig::try_parse_from([
            "stock-analyzer",
            "--data",
            "prices.csv",
            "--ticker",
            "MSFT",
            "--width",
            "640",
        ])
        .unwrap();
        assert_eq!(config.data, PathBuf::from("prices.csv"));
        assert_eq!(config.ticker.as_deref(), Some("MSFT"));
        assert_eq!(config.width, 640.0);
        assert_eq!(config.height, 800.0);
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        AppConfig::command().debug_assert();
    }
}
