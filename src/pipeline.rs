use std::io;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::data::error::LoadError;
use crate::data::loader::load_stock_prices;
use crate::data::model::StockPrice;
use crate::dispatch::UiHandle;

// ---------------------------------------------------------------------------
// Request / result
// ---------------------------------------------------------------------------

/// Inputs of one load, captured when the search starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub path: PathBuf,
    pub ticker: String,
}

/// Outcome of one load plus the wall-clock time it took.
#[derive(Debug)]
pub struct LoadResult {
    pub outcome: Result<Vec<StockPrice>, LoadError>,
    pub elapsed: Duration,
}

impl LoadResult {
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }

    pub fn records(&self) -> Option<&[StockPrice]> {
        self.outcome.as_deref().ok()
    }

    pub fn error(&self) -> Option<&LoadError> {
        self.outcome.as_ref().err()
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

// ---------------------------------------------------------------------------
// Running a load
// ---------------------------------------------------------------------------

/// Load, parse and filter on the calling thread. The elapsed time is
/// measured on both the success and the failure path.
pub fn run_load(request: &LoadRequest) -> LoadResult {
    let started = Instant::now();
    let outcome = load_stock_prices(&request.path, &request.ticker);
    let elapsed = started.elapsed();

    match &outcome {
        Ok(rows) => log::info!(
            "Loaded {} rows for {:?} from {} in {}ms",
            rows.len(),
            request.ticker,
            request.path.display(),
            elapsed.as_millis()
        ),
        Err(e) => log::error!(
            "Loading {} failed after {}ms: {e}",
            request.path.display(),
            elapsed.as_millis()
        ),
    }

    LoadResult { outcome, elapsed }
}

/// Run [`run_load`] on a background thread and hand the result to
/// `on_complete` on the UI thread.
///
/// `on_complete` runs exactly once, when the owner of the queue behind `ui`
/// drains it. An error is returned only if the worker thread could not be
/// started, in which case `on_complete` is never called.
pub fn spawn_load<S, F>(request: LoadRequest, ui: UiHandle<S>, on_complete: F) -> io::Result<JoinHandle<()>>
where
    S: 'static,
    F: FnOnce(&mut S, LoadResult) + Send + 'static,
{
    thread::Builder::new()
        .name("stock-loader".to_string())
        .spawn(move || {
            log::debug!("Loading {} for {:?}", request.path.display(), request.ticker);
            let result = run_load(&request);
            ui.post(move |state| on_complete(state, result));
        })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::error::LoadErrorKind;
    use crate::dispatch::UiQueue;

    const WAIT: Duration = Duration::from_secs(5);

    fn price_file(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[derive(Default)]
    struct Probe {
        results: Vec<LoadResult>,
        threads: Vec<thread::ThreadId>,
    }

    fn request(path: impl Into<PathBuf>, ticker: &str) -> LoadRequest {
        LoadRequest {
            path: path.into(),
            ticker: ticker.to_string(),
        }
    }

    #[test]
    fn missing_file_reports_resource_error_and_elapsed_time() {
        let result = run_load(&request("does_not_exist.csv", "AAPL"));
        assert_eq!(result.error().map(|e| e.kind()), Some(LoadErrorKind::ResourceNotFound));
        assert!(result.records().is_none());
        // Always measured, even on failure.
        assert!(result.elapsed_ms() < 60_000);
    }

    #[test]
    fn empty_ticker_does_not_match_everything() {
        let file = price_file(&["h", "AAPL,2019-01-02,1,1,1,1,1", "MSFT,2019-01-02,1,1,1,1,1"]);
        let result = run_load(&request(file.path(), ""));
        assert_eq!(result.records().map(|r| r.len()), Some(0));
    }

    #[test]
    fn malformed_file_delivers_no_rows() {
        let file = price_file(&["h", "AAPL,2019-01-02,1,1,1,1,1", "AAPL,2019-01-03,1,1,1,1"]);
        let result = run_load(&request(file.path(), "AAPL"));
        assert!(!result.is_success());
        assert!(result.records().is_none());
        assert_eq!(result.error().map(|e| e.kind()), Some(LoadErrorKind::Parse));
    }

    #[test]
    fn completion_runs_once_on_the_ui_thread() {
        let file = price_file(&[
            "Ticker,TradeDate,Open,Close,High,Low,Volume",
            "AAPL,2019-01-02,1,1,1,1,1",
            "AAPL,2019-01-03,2,2,2,2,2",
            "MSFT,2019-01-02,3,3,3,3,3",
        ]);
        let queue: UiQueue<Probe> = UiQueue::new();
        let worker = spawn_load(request(file.path(), "AAPL"), queue.handle(), |probe: &mut Probe, result| {
            probe.threads.push(thread::current().id());
            probe.results.push(result);
        })
        .unwrap();

        let mut probe = Probe::default();
        assert!(queue.run_next(&mut probe, WAIT));
        worker.join().unwrap();
        assert_eq!(queue.drain(&mut probe), 0);

        assert_eq!(probe.results.len(), 1);
        assert_eq!(probe.threads, vec![thread::current().id()]);
        let rows = probe.results[0].records().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date.to_string(), "2019-01-02");
        assert_eq!(rows[1].date.to_string(), "2019-01-03");
    }

    #[test]
    fn failures_cross_to_the_ui_thread_as_values() {
        let dir = tempfile::tempdir().unwrap();
        let queue: UiQueue<Probe> = UiQueue::new();
        spawn_load(
            request(dir.path().join("does_not_exist.csv"), "AAPL"),
            queue.handle(),
            |probe: &mut Probe, result| probe.results.push(result),
        )
        .unwrap();

        let mut probe = Probe::default();
        assert!(queue.run_next(&mut probe, WAIT));
        let err = probe.results[0].error().unwrap();
        assert_eq!(err.kind(), LoadErrorKind::ResourceNotFound);
    }
}
