/// Catalog content: the raw section schema and the items derived from it
use crate::error::EnhancerError;
use serde::{Deserialize, Serialize};

/// Content of one catalog section, as authored or as read from the page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SectionContent {
    pub id: String,
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub bullet_lists: Vec<Vec<String>>,
    pub ordered_steps: Vec<String>,
}

/// A catalog entry (one plant and its remedy)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl Item {
    /// Map a section onto an item
    ///
    /// Layout of a section:
    /// - heading → title
    /// - second paragraph → description (the first one is the subtitle)
    /// - first bullet list → ailments the plant is used for
    /// - second bullet list → ingredients
    /// - ordered list → preparation steps
    ///
    /// Missing parts become empty values.
    pub fn from_section(section: &SectionContent) -> Item {
        Item {
            id: section.id.clone(),
            title: section.heading.trim().to_string(),
            description: section
                .paragraphs
                .get(1)
                .map(|p| p.trim().to_string())
                .unwrap_or_default(),
            tags: trimmed(section.bullet_lists.first()),
            ingredients: trimmed(section.bullet_lists.get(1)),
            steps: trimmed(Some(&section.ordered_steps)),
        }
    }

    /// Text the search filter matches against, lower-cased
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.description,
            self.tags.join(" "),
            self.ingredients.join(" ")
        )
        .to_lowercase()
    }
}

fn trimmed(entries: Option<&Vec<String>>) -> Vec<String> {
    entries
        .map(|list| list.iter().map(|s| s.trim().to_string()).collect())
        .unwrap_or_default()
}

/// Derive items from sections, in document order
pub fn extract_items(sections: &[SectionContent]) -> Vec<Item> {
    sections.iter().map(Item::from_section).collect()
}

/// Parse an authored content list (JSON array of sections)
pub fn parse_sections(json: &str) -> Result<Vec<SectionContent>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Parse an authored content list straight into items
pub fn items_from_json(json: &str) -> Result<Vec<Item>, EnhancerError> {
    Ok(extract_items(&parse_sections(json)?))
}

pub fn find_item<'a>(items: &'a [Item], id: &str) -> Option<&'a Item> {
    items.iter().find(|item| item.id == id)
}
