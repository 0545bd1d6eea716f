use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use clap::Parser;
use rust_decimal::Decimal;

use stock_analyzer::config::DEFAULT_DATA_FILE;
use stock_analyzer::data::model::StockPrice;

/// Write a deterministic sample price file in the format the viewer reads.
#[derive(Debug, Parser)]
struct Args {
    /// Output CSV path.
    #[arg(default_value = DEFAULT_DATA_FILE)]
    output: PathBuf,

    /// Trading days per ticker.
    #[arg(long, default_value_t = 250)]
    days: usize,

    /// PRNG seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// SplitMix64: enough randomness for a reproducible price walk.
struct Walk(u64);

impl Walk {
    fn uniform(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        (z >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Zero-mean normal sample with standard deviation `sigma`.
    fn normal(&mut self, sigma: f64) -> f64 {
        let r = (-2.0 * self.uniform().max(f64::MIN_POSITIVE).ln()).sqrt();
        let theta = std::f64::consts::TAU * self.uniform();
        sigma * r * theta.cos()
    }
}

/// Round to cents, clamped at zero.
fn price(value: f64) -> Decimal {
    Decimal::from_f64_retain(value.max(0.0))
        .unwrap_or_default()
        .round_dp(2)
}

fn trading_days(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let mut days = Vec::with_capacity(count);
    let mut day = start;
    while days.len() < count {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            days.push(day);
        }
        day += Duration::days(1);
    }
    days
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = Walk(args.seed);

    // (ticker, starting close, daily volatility)
    let tickers = [("MSFT", 101.57, 0.015), ("AAPL", 157.92, 0.018), ("GOOGL", 1045.85, 0.016)];
    let start = NaiveDate::from_ymd_opt(2019, 1, 2).context("invalid start date")?;
    let days = trading_days(start, args.days);

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    let mut rows = 0usize;
    for (ticker, first_close, volatility) in tickers {
        let mut prev_close: f64 = first_close;
        for &date in &days {
            let open = prev_close * (1.0 + rng.normal(volatility / 4.0));
            let close = open * (1.0 + rng.normal(volatility));
            let high = open.max(close) * (1.0 + rng.uniform() * volatility);
            let low = open.min(close) * (1.0 - rng.uniform() * volatility);
            let volume = 5_000_000 + (rng.uniform() * 30_000_000.0) as u64;

            writer
                .serialize(StockPrice {
                    identifier: ticker.to_string(),
                    date,
                    open: price(open),
                    close: price(close),
                    high: price(high),
                    low: price(low),
                    volume,
                })
                .context("writing row")?;

            prev_close = close;
            rows += 1;
        }
    }
    writer.flush().context("flushing output")?;

    println!(
        "Wrote {rows} rows ({} tickers x {} days) to {}",
        tickers.len(),
        days.len(),
        args.output.display()
    );
    Ok(())
}
