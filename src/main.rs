//! Diary Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod dates;
mod diary_store;
mod dom;
mod listing;
mod models;
mod overlay;
mod preferences;
mod state;
mod submission;


use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    let logs = rolling_logger::init(config.logger);
    tracing::info!("diary starting");

    mount_to_body(move || view! { <App config=config logs=logs.clone() /> });
}
