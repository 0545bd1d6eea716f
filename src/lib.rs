//! Stock Analyzer: search a CSV of daily prices by ticker without blocking
//! the UI thread.

pub mod app;
pub mod config;
pub mod data;
pub mod dispatch;
pub mod pipeline;
pub mod state;
pub mod ui;
