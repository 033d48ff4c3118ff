/// In-process event dispatch between page listeners and component handlers
///
/// Listeners on the page translate DOM events into [`AppEvent`]s. Each
/// component subscribes a handler for the events it cares about; handlers
/// mutate [`AppState`] and describe the resulting page changes as
/// [`Effect`]s, which the UI layer then applies.
use crate::state::AppState;
use crate::{favorites, filter, recipe, scroll, theme, views};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    SearchChanged(String),
    FavoriteToggled(String),
    ThemeToggled,
    FavoritesViewToggled,
    SectionViewed(String),
    /// A copy control was clicked; `control` is its index among the page's copy controls
    CopyRequested { id: String, control: usize },
    Scrolled(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    SearchChanged,
    FavoriteToggled,
    ThemeToggled,
    FavoritesViewToggled,
    SectionViewed,
    CopyRequested,
    Scrolled,
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::SearchChanged => "search-changed",
            EventKind::FavoriteToggled => "favorite-toggled",
            EventKind::ThemeToggled => "theme-toggled",
            EventKind::FavoritesViewToggled => "favorites-view-toggled",
            EventKind::SectionViewed => "section-viewed",
            EventKind::CopyRequested => "copy-requested",
            EventKind::Scrolled => "scrolled",
        }
    }
}

impl AppEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            AppEvent::SearchChanged(_) => EventKind::SearchChanged,
            AppEvent::FavoriteToggled(_) => EventKind::FavoriteToggled,
            AppEvent::ThemeToggled => EventKind::ThemeToggled,
            AppEvent::FavoritesViewToggled => EventKind::FavoritesViewToggled,
            AppEvent::SectionViewed(_) => EventKind::SectionViewed,
            AppEvent::CopyRequested { .. } => EventKind::CopyRequested,
            AppEvent::Scrolled(_) => EventKind::Scrolled,
        }
    }
}

/// A change to make on the page
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetSectionVisible { id: String, visible: bool },
    SetFavoriteIcon { id: String, filled: bool },
    SetFavoriteCount(usize),
    SetFavoritesButton { label: String, active: bool },
    SetDarkMode(bool),
    SetThemeLabel(String),
    SetViewLabel { id: String, label: String },
    StopObserving(String),
    CopyToClipboard { control: usize, text: String },
    SetBackToTopVisible(bool),
}

pub type Handler = fn(&AppEvent, &mut AppState) -> Vec<Effect>;

#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<EventKind, Vec<Handler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatcher with every component handler subscribed
    pub fn with_default_handlers() -> Self {
        let mut dispatcher = Dispatcher::new();
        dispatcher.subscribe(EventKind::SearchChanged, filter::on_search_changed);
        dispatcher.subscribe(EventKind::FavoritesViewToggled, filter::on_favorites_view_toggled);
        dispatcher.subscribe(EventKind::FavoriteToggled, favorites::on_favorite_toggled);
        dispatcher.subscribe(EventKind::ThemeToggled, theme::on_theme_toggled);
        dispatcher.subscribe(EventKind::SectionViewed, views::on_section_viewed);
        dispatcher.subscribe(EventKind::CopyRequested, recipe::on_copy_requested);
        dispatcher.subscribe(EventKind::Scrolled, scroll::on_scrolled);
        dispatcher
    }

    pub fn subscribe(&mut self, kind: EventKind, handler: Handler) {
        self.handlers.entry(kind).or_default().push(handler);
    }

    /// Run every handler subscribed to the event's kind, in subscription order
    pub fn dispatch(&self, event: &AppEvent, state: &mut AppState) -> Vec<Effect> {
        let kind = event.kind();
        log::debug!("Dispatching {}", kind.name());

        self.handlers
            .get(&kind)
            .map(|handlers| {
                handlers
                    .iter()
                    .flat_map(|handler| handler(event, state))
                    .collect()
            })
            .unwrap_or_default()
    }
}
