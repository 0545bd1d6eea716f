use eframe::egui::{Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;
const HEADERS: [&str; 7] = ["Ticker", "Date", "Open", "Close", "High", "Low", "Volume"];

// ---------------------------------------------------------------------------
// Price table (central panel)
// ---------------------------------------------------------------------------

/// Render the rows of the last successful search.
pub fn price_table(ui: &mut Ui, state: &AppState) {
    if state.records.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            match &state.shown_ticker {
                Some(ticker) => ui.label(format!("No prices found for {ticker}")),
                None => ui.heading("Enter a ticker and press Search"),
            };
        });
        return;
    }

    let numeric = Layout::right_to_left(Align::Center);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(90.0))
        .columns(Column::auto().at_least(70.0), 4)
        .column(Column::remainder())
        .header(ROW_HEIGHT + 4.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, state.records.len(), |mut row| {
                let sp = &state.records[row.index()];
                row.col(|ui| {
                    ui.label(sp.identifier.as_str());
                });
                row.col(|ui| {
                    ui.label(sp.date.to_string());
                });
                for value in [sp.open, sp.close, sp.high, sp.low] {
                    row.col(|ui| {
                        ui.with_layout(numeric, |ui| ui.label(value.to_string()));
                    });
                }
                row.col(|ui| {
                    ui.with_layout(numeric, |ui| ui.label(sp.volume.to_string()));
                });
            });
        });
}
