use eframe::egui::{self, Color32, Key, RichText, Ui};

use crate::dispatch::UiHandle;
use crate::state::{AppState, LoadPhase};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui
                .add_enabled(!state.is_loading(), egui::Button::new("Open CSV…"))
                .clicked()
            {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Close").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.separator();
        ui.label(format!("Data: {}", state.data_path.display()));
    });
}

// ---------------------------------------------------------------------------
// Search bar
// ---------------------------------------------------------------------------

/// Ticker box, Search button, progress spinner and status line.
pub fn search_bar(ui: &mut Ui, state: &mut AppState, dispatcher: &UiHandle<AppState>) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Ticker");
        let input = ui.add(
            egui::TextEdit::singleline(&mut state.ticker_input)
                .hint_text("e.g. MSFT")
                .desired_width(120.0),
        );
        let enter = input.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

        let search = ui.add_enabled(!state.is_loading(), egui::Button::new("Search"));
        if search.clicked() || (enter && !state.is_loading()) {
            state.start_search(dispatcher);
        }

        if state.is_loading() {
            ui.add(egui::Spinner::new());
        }
    });

    if let Some(msg) = &state.status_message {
        let text = RichText::new(msg);
        let text = if state.phase == LoadPhase::Failed {
            text.color(Color32::RED)
        } else {
            text
        };
        ui.label(text);
    }
}

// ---------------------------------------------------------------------------
// Notes + attribution
// ---------------------------------------------------------------------------

pub fn notes_panel(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Notes");
    ui.add(
        egui::TextEdit::multiline(&mut state.notes)
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );
}

pub fn footer(ui: &mut Ui) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Data provided for free by");
        ui.hyperlink_to("IEX", "https://iextrading.com/developer/");
        ui.label(". View");
        ui.hyperlink_to("IEX’s Terms of Use.", "https://iextrading.com/api-exhibit-a/");
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open stock prices")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.set_data_path(path);
    }
}
