/// Favorites tracking: membership, toggling and the favorites-button label

use crate::config::Labels;
use crate::events::{AppEvent, Effect};
use crate::state::AppState;

/// Favorited item ids, in the order they were added. Never holds duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoriteSet {
    ids: Vec<String>,
}

impl FavoriteSet {
    pub fn from_ids(ids: Vec<String>) -> Self {
        let mut set = FavoriteSet::default();
        for id in ids {
            if !set.is_favorite(&id) {
                set.ids.push(id);
            }
        }
        set
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.iter().any(|fav| fav == id)
    }

    /// Add the id if absent, remove it if present. Returns the new membership.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.is_favorite(id) {
            self.ids.retain(|fav| fav != id);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

pub fn favorites_button_label(labels: &Labels, showing_favorites: bool, count: usize) -> String {
    let text = if showing_favorites {
        &labels.show_all
    } else {
        &labels.show_favorites
    };
    format!("{} ({})", text, count)
}

pub(crate) fn favorites_button_effect(state: &AppState) -> Effect {
    Effect::SetFavoritesButton {
        label: favorites_button_label(
            &state.config.labels,
            state.showing_favorites,
            state.favorites.count(),
        ),
        active: state.showing_favorites,
    }
}

pub fn on_favorite_toggled(event: &AppEvent, state: &mut AppState) -> Vec<Effect> {
    let AppEvent::FavoriteToggled(id) = event else {
        return Vec::new();
    };

    let filled = state.favorites.toggle(id);
    state.persist_favorites();

    vec![
        Effect::SetFavoriteIcon {
            id: id.clone(),
            filled,
        },
        Effect::SetFavoriteCount(state.favorites.count()),
        favorites_button_effect(state),
    ]
}
