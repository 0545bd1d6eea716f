use std::path::PathBuf;

use crate::config::AppConfig;
use crate::data::model::StockPrice;
use crate::dispatch::UiHandle;
use crate::pipeline::{self, LoadRequest, LoadResult};

// ---------------------------------------------------------------------------
// Load lifecycle
// ---------------------------------------------------------------------------

/// Where the most recent search stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. Only touched on the UI thread.
pub struct AppState {
    /// CSV file the next search reads.
    pub data_path: PathBuf,

    /// Contents of the ticker text box.
    pub ticker_input: String,

    /// Rows shown in the table (last successful search).
    pub records: Vec<StockPrice>,

    /// Ticker the table rows belong to.
    pub shown_ticker: Option<String>,

    /// Status / error message shown under the search bar.
    pub status_message: Option<String>,

    /// Free-form notes area; load errors are copied here.
    pub notes: String,

    pub phase: LoadPhase,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            data_path: config.data.clone(),
            ticker_input: config.ticker.clone().unwrap_or_default(),
            records: Vec::new(),
            shown_ticker: None,
            status_message: None,
            notes: String::new(),
            phase: LoadPhase::Idle,
        }
    }

    /// Whether a search is in flight (drives the spinner).
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Start loading rows for the current ticker on a background thread.
    ///
    /// The ticker is captured now; edits made while loading do not affect
    /// this search. Returns `false` if a search is already running.
    pub fn start_search(&mut self, ui: &UiHandle<AppState>) -> bool {
        if self.is_loading() {
            log::warn!("Search ignored: a load is already in progress");
            return false;
        }

        let request = LoadRequest {
            path: self.data_path.clone(),
            ticker: self.ticker_input.clone(),
        };
        let ticker = request.ticker.clone();

        self.phase = LoadPhase::Loading;
        self.status_message = Some(format!("Loading stocks for {ticker}…"));

        let spawned = pipeline::spawn_load(request, ui.clone(), move |state: &mut AppState, result| {
            state.finish_search(&ticker, result);
        });

        if let Err(e) = spawned {
            log::error!("Failed to start loader thread: {e}");
            self.phase = LoadPhase::Failed;
            self.status_message = Some(format!("Error: could not start loading: {e}"));
            return false;
        }
        true
    }

    /// Apply a finished load. On failure the table keeps its previous rows.
    pub fn finish_search(&mut self, ticker: &str, result: LoadResult) {
        let elapsed_ms = result.elapsed_ms();
        match result.outcome {
            Ok(rows) => {
                self.status_message =
                    Some(format!("Loaded stocks for {ticker} in {elapsed_ms}ms"));
                self.records = rows;
                self.shown_ticker = Some(ticker.to_string());
                self.phase = LoadPhase::Succeeded;
            }
            Err(e) => {
                self.status_message =
                    Some(format!("Error: {e} (after {elapsed_ms}ms)"));
                self.notes = e.to_string();
                self.phase = LoadPhase::Failed;
            }
        }
    }

    /// Point subsequent searches at another file.
    pub fn set_data_path(&mut self, path: PathBuf) {
        log::info!("Data file set to {}", path.display());
        self.data_path = path;
        self.status_message = Some(format!("Using {}", self.data_path.display()));
    }
}
