/// Enhancer configuration: element ids, selectors, labels and tuning values
///
/// Every field has a default matching the stock catalog page, so the host
/// page only needs to pass the fields it wants to override.
use crate::error::EnhancerError;
use serde::Deserialize;
use wasm_bindgen::JsValue;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EnhancerConfig {
    pub elements: ElementIds,
    pub selectors: Selectors,
    pub storage_keys: StorageKeys,
    pub labels: Labels,
    pub colors: Colors,
    /// Fraction of a section that must be visible before it counts as viewed
    pub view_threshold: f64,
    /// Vertical scroll offset past which the back-to-top control shows
    pub back_to_top_offset: f64,
    /// How long the copy confirmation stays before reverting
    pub copy_feedback_ms: u32,
}

/// Ids of the singleton controls on the page
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ElementIds {
    pub search_input: String,
    pub theme_toggle: String,
    pub show_favorites: String,
    pub fav_count: String,
    pub nav_list: String,
    pub back_to_top: String,
}

/// Class names used to find per-section elements
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Selectors {
    pub section_class: String,
    pub favorite_button_class: String,
    pub copy_button_class: String,
    pub view_count_class: String,
    pub dark_mode_class: String,
    pub icon_filled_class: String,
    pub icon_outline_class: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StorageKeys {
    pub favorites: String,
    pub views: String,
    pub theme: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Labels {
    /// Theme button text while the page is light
    pub switch_to_dark: String,
    /// Theme button text while the page is dark
    pub switch_to_light: String,
    pub show_favorites: String,
    pub show_all: String,
    pub view_singular: String,
    pub view_plural: String,
    pub copied: String,
    pub copy_failed: String,
    pub ingredients_header: String,
    pub instructions_header: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Colors {
    pub favorites_inactive: String,
    pub favorites_active: String,
    pub copied: String,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        EnhancerConfig {
            elements: ElementIds::default(),
            selectors: Selectors::default(),
            storage_keys: StorageKeys::default(),
            labels: Labels::default(),
            colors: Colors::default(),
            view_threshold: 0.6,
            back_to_top_offset: 300.0,
            copy_feedback_ms: 1_500,
        }
    }
}

impl Default for ElementIds {
    fn default() -> Self {
        ElementIds {
            search_input: "search-input".to_string(),
            theme_toggle: "theme-toggle".to_string(),
            show_favorites: "show-favorites".to_string(),
            fav_count: "fav-count".to_string(),
            nav_list: "nav-list".to_string(),
            back_to_top: "back-to-top".to_string(),
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Selectors {
            section_class: "plant-section".to_string(),
            favorite_button_class: "favorite-btn".to_string(),
            copy_button_class: "copy-btn".to_string(),
            view_count_class: "view-count".to_string(),
            dark_mode_class: "dark-mode".to_string(),
            icon_filled_class: "fas".to_string(),
            icon_outline_class: "far".to_string(),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        StorageKeys {
            favorites: "plantFavorites".to_string(),
            views: "plantViews".to_string(),
            theme: "theme".to_string(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            switch_to_dark: "Modo Oscuro".to_string(),
            switch_to_light: "Modo Claro".to_string(),
            show_favorites: "Ver Favoritos".to_string(),
            show_all: "Volver".to_string(),
            view_singular: "vista".to_string(),
            view_plural: "vistas".to_string(),
            copied: "¡Copiado!".to_string(),
            copy_failed: "No se pudo copiar la receta.".to_string(),
            ingredients_header: "Ingredientes:".to_string(),
            instructions_header: "Instrucciones:".to_string(),
        }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Colors {
            favorites_inactive: "#e91e63".to_string(),
            favorites_active: "#333".to_string(),
            copied: "#4caf50".to_string(),
        }
    }
}

impl EnhancerConfig {
    /// Build a config from a (possibly partial) JS object
    pub fn from_js(value: JsValue) -> Result<Self, EnhancerError> {
        if value.is_null() || value.is_undefined() {
            return Ok(EnhancerConfig::default());
        }

        let config: EnhancerConfig = serde_wasm_bindgen::from_value(value)
            .map_err(|e| EnhancerError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()
    }

    /// Build a config from a (possibly partial) JSON document
    pub fn from_json(json: &str) -> Result<Self, EnhancerError> {
        let config: EnhancerConfig = serde_json::from_str(json)?;
        config.validate()
    }

    fn validate(self) -> Result<Self, EnhancerError> {
        if !(self.view_threshold > 0.0 && self.view_threshold <= 1.0) {
            return Err(EnhancerError::Config(format!(
                "view_threshold must be in (0, 1], got {}",
                self.view_threshold
            )));
        }
        if self.back_to_top_offset < 0.0 {
            return Err(EnhancerError::Config(format!(
                "back_to_top_offset must not be negative, got {}",
                self.back_to_top_offset
            )));
        }
        Ok(self)
    }
}
