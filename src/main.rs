use clap::Parser;
use eframe::egui;

use stock_analyzer::app::StockAnalyzerApp;
use stock_analyzer::config::AppConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::parse();
    log::debug!("Starting with {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width, config.height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Stock Analyzer",
        options,
        Box::new(move |cc| Ok(Box::new(StockAnalyzerApp::new(cc, &config)))),
    )
}
