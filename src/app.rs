use eframe::egui;

use crate::config::AppConfig;
use crate::dispatch::{UiHandle, UiQueue};
use crate::state::AppState;
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct StockAnalyzerApp {
    pub state: AppState,
    /// Completions posted by loader threads, run at the start of each frame.
    ui_queue: UiQueue<AppState>,
    dispatcher: UiHandle<AppState>,
}

impl StockAnalyzerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        let ui_queue = UiQueue::with_repaint(cc.egui_ctx.clone());
        let dispatcher = ui_queue.handle();
        Self {
            state: AppState::from_config(config),
            ui_queue,
            dispatcher,
        }
    }
}

impl eframe::App for StockAnalyzerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_queue.drain(&mut self.state);

        // ---- Top panel: menu bar + search ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
            ui.separator();
            panels::search_bar(ui, &mut self.state, &self.dispatcher);
        });

        // ---- Bottom panel: notes + attribution ----
        egui::TopBottomPanel::bottom("notes_panel")
            .resizable(true)
            .show(ctx, |ui| {
                panels::notes_panel(ui, &mut self.state);
                panels::footer(ui);
            });

        // ---- Central panel: price table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::price_table(ui, &self.state);
        });
    }
}
