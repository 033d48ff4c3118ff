/// Per-section view counter

use crate::config::Labels;
use crate::events::{AppEvent, Effect};
use crate::state::AppState;
use std::collections::{BTreeMap, HashSet};

/// Persisted counts plus the sections already counted during this page load
#[derive(Debug, Clone, Default)]
pub struct ViewCounts {
    counts: BTreeMap<String, u32>,
    counted: HashSet<String>,
}

impl ViewCounts {
    pub fn from_counts(counts: BTreeMap<String, u32>) -> Self {
        ViewCounts {
            counts,
            counted: HashSet::new(),
        }
    }

    pub fn count(&self, id: &str) -> u32 {
        self.counts.get(id).copied().unwrap_or(0)
    }

    /// Count a view of the section, once per page load.
    /// Returns the new count, or `None` if it was already counted.
    pub fn record_view(&mut self, id: &str) -> Option<u32> {
        if !self.counted.insert(id.to_string()) {
            return None;
        }

        let count = self.counts.entry(id.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        Some(*count)
    }

    pub fn counts(&self) -> &BTreeMap<String, u32> {
        &self.counts
    }
}

/// "1 vista", "3 vistas"; zero takes the singular form
pub fn view_label(count: u32, labels: &Labels) -> String {
    let noun = if count > 1 {
        &labels.view_plural
    } else {
        &labels.view_singular
    };
    format!("{} {}", count, noun)
}

/// Browsers may report a ratio just under the threshold on the crossing itself
const THRESHOLD_TOLERANCE: f64 = 1e-3;

/// Whether an intersection report means the section has been seen
pub fn crossed_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold - THRESHOLD_TOLERANCE
}

pub fn on_section_viewed(event: &AppEvent, state: &mut AppState) -> Vec<Effect> {
    let AppEvent::SectionViewed(id) = event else {
        return Vec::new();
    };

    let Some(count) = state.views.record_view(id) else {
        return vec![Effect::StopObserving(id.clone())];
    };
    state.persist_views();

    vec![
        Effect::SetViewLabel {
            id: id.clone(),
            label: view_label(count, &state.config.labels),
        },
        Effect::StopObserving(id.clone()),
    ]
}
