/// Plain-text recipe formatting for the "copy recipe" action

use crate::catalog::{Item, find_item};
use crate::config::Labels;
use crate::events::{AppEvent, Effect};
use crate::state::AppState;

/// Format an item's recipe:
///
/// ```text
/// TITLE
///
/// Ingredientes:
/// • ingredient
///
/// Instrucciones:
/// 1. step
/// ```
pub fn recipe_text(item: &Item, labels: &Labels) -> String {
    let ingredients = item
        .ingredients
        .iter()
        .map(|ingredient| format!("• {}", ingredient))
        .collect::<Vec<_>>()
        .join("\n");

    let steps = item
        .steps
        .iter()
        .enumerate()
        .map(|(idx, step)| format!("{}. {}", idx + 1, step))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\n{}\n{}\n\n{}\n{}",
        item.title.to_uppercase(),
        labels.ingredients_header,
        ingredients,
        labels.instructions_header,
        steps
    )
    .trim()
    .to_string()
}

pub fn on_copy_requested(event: &AppEvent, state: &mut AppState) -> Vec<Effect> {
    let AppEvent::CopyRequested { id, control } = event else {
        return Vec::new();
    };

    match find_item(&state.items, id) {
        Some(item) => vec![Effect::CopyToClipboard {
            control: *control,
            text: recipe_text(item, &state.config.labels),
        }],
        None => {
            log::debug!("No recipe for {}", id);
            Vec::new()
        }
    }
}
