/// Application state shared by every component handler

use crate::catalog::Item;
use crate::config::EnhancerConfig;
use crate::events::Effect;
use crate::favorites::{self, FavoriteSet};
use crate::storage::{self, KeyValueStore};
use crate::theme::Theme;
use crate::views::{self, ViewCounts};

pub struct AppState {
    pub items: Vec<Item>,
    pub favorites: FavoriteSet,
    pub views: ViewCounts,
    pub theme: Theme,
    /// Favorites-only view; not persisted
    pub showing_favorites: bool,
    pub config: EnhancerConfig,
    store: Box<dyn KeyValueStore>,
}

impl AppState {
    /// Build the state from the extracted items and whatever the store holds
    pub fn load(items: Vec<Item>, store: Box<dyn KeyValueStore>, config: EnhancerConfig) -> Self {
        let keys = &config.storage_keys;
        let favorites = FavoriteSet::from_ids(storage::load_json_or_default(store.as_ref(), &keys.favorites));
        let views = ViewCounts::from_counts(storage::load_json_or_default(store.as_ref(), &keys.views));
        let theme = Theme::from_stored(store.get(&keys.theme).as_deref());

        log::info!(
            "Loaded {} items, {} favorites, {} theme",
            items.len(),
            favorites.count(),
            theme.as_str()
        );

        AppState {
            items,
            favorites,
            views,
            theme,
            showing_favorites: false,
            config,
            store,
        }
    }

    pub fn persist_favorites(&mut self) {
        let key = &self.config.storage_keys.favorites;
        if let Err(e) = storage::save_json(self.store.as_mut(), key, self.favorites.ids()) {
            log::warn!("Failed to persist favorites: {}", e);
        }
    }

    pub fn persist_views(&mut self) {
        let key = &self.config.storage_keys.views;
        if let Err(e) = storage::save_json(self.store.as_mut(), key, self.views.counts()) {
            log::warn!("Failed to persist view counts: {}", e);
        }
    }

    pub fn persist_theme(&mut self) {
        let key = &self.config.storage_keys.theme;
        if let Err(e) = self.store.set(key, self.theme.as_str()) {
            log::warn!("Failed to persist theme: {}", e);
        }
    }

    /// Page changes that bring the static markup in line with the loaded state
    pub fn initial_effects(&self) -> Vec<Effect> {
        let mut effects: Vec<Effect> = self
            .items
            .iter()
            .map(|item| Effect::SetFavoriteIcon {
                id: item.id.clone(),
                filled: self.favorites.is_favorite(&item.id),
            })
            .collect();

        effects.push(Effect::SetFavoriteCount(self.favorites.count()));
        effects.push(favorites::favorites_button_effect(self));
        effects.push(Effect::SetDarkMode(self.theme.is_dark()));
        effects.push(Effect::SetThemeLabel(self.theme.label(&self.config.labels).to_string()));

        effects.extend(self.items.iter().map(|item| Effect::SetViewLabel {
            id: item.id.clone(),
            label: views::view_label(self.views.count(&item.id), &self.config.labels),
        }));

        effects
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::{SectionContent, extract_items};
    use crate::storage::MemoryStore;

    pub(crate) fn create_test_items() -> Vec<Item> {
        let sections: Vec<SectionContent> = [
            ("aloe", "Aloe Vera", "Gel para quemaduras", "Quemaduras", "Hoja de aloe"),
            ("manzanilla", "Manzanilla", "Flor calmante", "Insomnio", "Flores secas"),
            ("ruda", "Ruda", "Hierba amarga", "Cólicos", "Hojas de ruda"),
            ("menta", "Menta", "Refrescante", "Náuseas", "Hojas de menta"),
        ]
        .iter()
        .map(|(id, title, description, tag, ingredient)| SectionContent {
            id: id.to_string(),
            heading: title.to_string(),
            paragraphs: vec![String::new(), description.to_string()],
            bullet_lists: vec![vec![tag.to_string()], vec![ingredient.to_string()]],
            ordered_steps: vec!["Preparar".to_string(), "Tomar".to_string()],
        })
        .collect();

        extract_items(&sections)
    }

    pub(crate) fn create_state_with_store(store: MemoryStore) -> AppState {
        AppState::load(create_test_items(), Box::new(store), EnhancerConfig::default())
    }

    pub(crate) fn create_test_state() -> (AppState, MemoryStore) {
        let store = MemoryStore::new();
        (create_state_with_store(store.clone()), store)
    }

    #[test]
    fn test_load_empty_store() {
        let (state, _store) = create_test_state();

        assert_eq!(state.items.len(), 4);
        assert_eq!(state.favorites.count(), 0);
        assert_eq!(state.views.count("aloe"), 0);
        assert_eq!(state.theme, Theme::Light);
        assert!(!state.showing_favorites);
    }

    #[test]
    fn test_load_persisted_values() {
        let store = MemoryStore::new();
        let mut handle = store.clone();
        handle.set("plantFavorites", r#"["ruda","aloe","ruda"]"#).unwrap();
        handle.set("plantViews", r#"{"menta": 4}"#).unwrap();
        handle.set("theme", "dark").unwrap();

        let state = create_state_with_store(store);

        assert_eq!(state.favorites.ids(), &["ruda".to_string(), "aloe".to_string()]);
        assert_eq!(state.views.count("menta"), 4);
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn test_load_invalid_values_falls_back() {
        let store = MemoryStore::new();
        let mut handle = store.clone();
        handle.set("plantFavorites", "oops").unwrap();
        handle.set("plantViews", "[1, 2]").unwrap();
        handle.set("theme", "purple").unwrap();

        let state = create_state_with_store(store);

        assert_eq!(state.favorites.count(), 0);
        assert_eq!(state.views.count("aloe"), 0);
        assert_eq!(state.theme, Theme::Light);
    }

    #[test]
    fn test_initial_effects() {
        let store = MemoryStore::new();
        let mut handle = store.clone();
        handle.set("plantFavorites", r#"["manzanilla"]"#).unwrap();
        handle.set("plantViews", r#"{"aloe": 2, "ruda": 1}"#).unwrap();

        let state = create_state_with_store(store);
        let effects = state.initial_effects();

        assert!(effects.contains(&Effect::SetFavoriteIcon { id: "manzanilla".into(), filled: true }));
        assert!(effects.contains(&Effect::SetFavoriteIcon { id: "aloe".into(), filled: false }));
        assert!(effects.contains(&Effect::SetFavoriteCount(1)));
        assert!(effects.contains(&Effect::SetDarkMode(false)));
        assert!(effects.contains(&Effect::SetThemeLabel("Modo Oscuro".into())));
        assert!(effects.contains(&Effect::SetViewLabel { id: "aloe".into(), label: "2 vistas".into() }));
        assert!(effects.contains(&Effect::SetViewLabel { id: "ruda".into(), label: "1 vista".into() }));
        assert!(effects.contains(&Effect::SetViewLabel { id: "menta".into(), label: "0 vista".into() }));
    }

    #[test]
    fn test_persist_theme_writes_raw_string() {
        let (mut state, store) = create_test_state();
        state.theme = Theme::Dark;

        state.persist_theme();

        assert_eq!(store.get("theme"), Some("dark".to_string()));
    }
}
