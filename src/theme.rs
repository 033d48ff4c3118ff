/// Light/dark theme switch

use crate::config::Labels;
use crate::events::{AppEvent, Effect};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Anything other than "dark" (including nothing) is light
    pub fn from_stored(value: Option<&str>) -> Theme {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Button text, naming the mode the user would switch to
    pub fn label<'a>(&self, labels: &'a Labels) -> &'a str {
        match self {
            Theme::Light => &labels.switch_to_dark,
            Theme::Dark => &labels.switch_to_light,
        }
    }
}

pub fn on_theme_toggled(event: &AppEvent, state: &mut AppState) -> Vec<Effect> {
    if !matches!(event, AppEvent::ThemeToggled) {
        return Vec::new();
    }

    state.theme = state.theme.toggled();
    state.persist_theme();

    vec![
        Effect::SetDarkMode(state.theme.is_dark()),
        Effect::SetThemeLabel(state.theme.label(&state.config.labels).to_string()),
    ]
}
