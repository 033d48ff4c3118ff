/// Section visibility filters: live text search and the favorites-only view

use crate::catalog::Item;
use crate::events::{AppEvent, Effect};
use crate::favorites::favorites_button_effect;
use crate::state::AppState;

pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Plain substring containment on the item's searchable text.
/// `query` must already be normalized.
pub fn matches_query(item: &Item, query: &str) -> bool {
    query.is_empty() || item.searchable_text().contains(query)
}

pub fn on_search_changed(event: &AppEvent, state: &mut AppState) -> Vec<Effect> {
    let AppEvent::SearchChanged(raw) = event else {
        return Vec::new();
    };

    let query = normalize_query(raw);

    state
        .items
        .iter()
        .map(|item| Effect::SetSectionVisible {
            id: item.id.clone(),
            visible: matches_query(item, &query),
        })
        .collect()
}

/// Flip the favorites-only view. Turning it off shows every section,
/// whatever the search box currently filters.
pub fn on_favorites_view_toggled(event: &AppEvent, state: &mut AppState) -> Vec<Effect> {
    if !matches!(event, AppEvent::FavoritesViewToggled) {
        return Vec::new();
    }

    state.showing_favorites = !state.showing_favorites;

    let mut effects: Vec<Effect> = state
        .items
        .iter()
        .map(|item| Effect::SetSectionVisible {
            id: item.id.clone(),
            visible: !state.showing_favorites || state.favorites.is_favorite(&item.id),
        })
        .collect();

    effects.push(favorites_button_effect(state));
    effects
}
