/// Herbal Catalog - client-side enhancements for the plant remedy catalog page
/// Built with Rust + WASM + Yew

pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod favorites;
pub mod filter;
pub mod navigation;
pub mod recipe;
pub mod scroll;
pub mod state;
pub mod storage;
pub mod theme;
pub mod ui;
pub mod views;

use config::EnhancerConfig;
use ui::CatalogSource;
use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Enhance the catalog page with the stock settings
#[wasm_bindgen]
pub fn start_enhancer() -> Result<(), JsValue> {
    ui::start(EnhancerConfig::default(), CatalogSource::Page).map_err(Into::into)
}

// Enhance the catalog page, overriding settings from a JS object
#[wasm_bindgen]
pub fn start_enhancer_with_config(config: JsValue) -> Result<(), JsValue> {
    let config = EnhancerConfig::from_js(config)?;
    ui::start(config, CatalogSource::Page).map_err(Into::into)
}

// Enhance the catalog page using authored content (JSON array of sections)
// instead of reading it back from the markup
#[wasm_bindgen]
pub fn start_enhancer_with_catalog(catalog_json: &str, config: JsValue) -> Result<(), JsValue> {
    let items = catalog::items_from_json(catalog_json)?;
    let config = EnhancerConfig::from_js(config)?;
    ui::start(config, CatalogSource::Authored(items)).map_err(Into::into)
}
