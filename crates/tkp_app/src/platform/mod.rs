mod app;
mod config;
mod dialog;
mod effects;
mod logging;
mod ui;

pub use app::run_app;
