/// Toggl Tab Timer - Chrome Extension that starts Toggl timers for the open page
/// Built with Rust + WASM + Yew

mod api;
mod classifier;
mod config;
mod credential;
mod current_entry;
mod description;
mod error;
mod extractor;
mod host;
mod orchestrator;
mod project;
mod storage;
mod time_entry;
mod workspace;
pub mod ui;

#[cfg(test)]
mod testing;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export URL classification for JavaScript access, "" when unclassified
#[wasm_bindgen]
pub fn classify_url(url: &str) -> String {
    classifier::classify(url).project_name.unwrap_or_default()
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
