/// Back-to-top control visibility

use crate::events::{AppEvent, Effect};
use crate::state::AppState;

pub fn back_to_top_visible(scroll_offset: f64, threshold: f64) -> bool {
    scroll_offset > threshold
}

pub fn on_scrolled(event: &AppEvent, state: &mut AppState) -> Vec<Effect> {
    let AppEvent::Scrolled(offset) = event else {
        return Vec::new();
    };

    vec![Effect::SetBackToTopVisible(back_to_top_visible(
        *offset,
        state.config.back_to_top_offset,
    ))]
}
