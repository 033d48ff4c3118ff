/// Handles to the catalog page's elements and the DOM side of each effect

use crate::catalog::SectionContent;
use crate::config::EnhancerConfig;
use crate::error::EnhancerError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, NodeList};

/// A control bound to an item through a data attribute
#[derive(Clone)]
pub struct ItemControl {
    pub item_id: String,
    pub element: HtmlElement,
}

pub struct Page {
    pub body: HtmlElement,
    pub search_input: HtmlInputElement,
    pub theme_toggle: HtmlElement,
    pub show_favorites: HtmlElement,
    pub fav_count: Element,
    pub nav_list: Element,
    pub back_to_top: HtmlElement,
    pub sections: Vec<HtmlElement>,
    pub favorite_buttons: Vec<ItemControl>,
    pub copy_buttons: Vec<ItemControl>,
    config: EnhancerConfig,
}

impl Page {
    /// Look up every element the enhancer touches
    pub fn query(document: &Document, config: &EnhancerConfig) -> Result<Page, EnhancerError> {
        let ids = &config.elements;
        let selectors = &config.selectors;

        let body = document
            .body()
            .ok_or_else(|| EnhancerError::MissingElement("body".to_string()))?;

        Ok(Page {
            search_input: element_by_id(document, &ids.search_input)?,
            theme_toggle: element_by_id(document, &ids.theme_toggle)?,
            show_favorites: element_by_id(document, &ids.show_favorites)?,
            fav_count: element_by_id(document, &ids.fav_count)?,
            nav_list: element_by_id(document, &ids.nav_list)?,
            back_to_top: element_by_id(document, &ids.back_to_top)?,
            sections: html_elements(&document.query_selector_all(&class_selector(&selectors.section_class))?),
            favorite_buttons: item_controls(document, &selectors.favorite_button_class, "data-id")?,
            copy_buttons: item_controls(document, &selectors.copy_button_class, "data-recipe")?,
            body,
            config: config.clone(),
        })
    }

    /// Read each section's content in document order
    pub fn read_sections(&self) -> Result<Vec<SectionContent>, EnhancerError> {
        self.sections.iter().map(read_section).collect()
    }

    pub fn section(&self, id: &str) -> Option<&HtmlElement> {
        self.sections.iter().find(|section| section.id() == id)
    }

    pub fn set_section_visible(&self, id: &str, visible: bool) -> Result<(), EnhancerError> {
        if let Some(section) = self.section(id) {
            set_displayed(section, visible, "")?;
        }
        Ok(())
    }

    pub fn set_favorite_icon(&self, id: &str, filled: bool) -> Result<(), EnhancerError> {
        let selectors = &self.config.selectors;
        let (from, to) = if filled {
            (&selectors.icon_outline_class, &selectors.icon_filled_class)
        } else {
            (&selectors.icon_filled_class, &selectors.icon_outline_class)
        };

        for button in self.favorite_buttons.iter().filter(|b| b.item_id == id) {
            if let Some(icon) = button.element.query_selector("i")? {
                icon.class_list().replace(from, to)?;
            }
        }
        Ok(())
    }

    pub fn set_favorite_count(&self, count: usize) {
        self.fav_count.set_text_content(Some(&count.to_string()));
    }

    pub fn set_favorites_button(&self, label: &str, active: bool) -> Result<(), EnhancerError> {
        let colors = &self.config.colors;
        let background = if active {
            &colors.favorites_active
        } else {
            &colors.favorites_inactive
        };

        self.show_favorites.set_text_content(Some(label));
        self.show_favorites.style().set_property("background", background)?;
        Ok(())
    }

    pub fn set_dark_mode(&self, dark: bool) -> Result<(), EnhancerError> {
        let class = &self.config.selectors.dark_mode_class;
        let classes = self.body.class_list();
        if dark {
            classes.add_1(class)?;
        } else {
            classes.remove_1(class)?;
        }
        Ok(())
    }

    pub fn set_theme_label(&self, label: &str) {
        self.theme_toggle.set_text_content(Some(label));
    }

    pub fn set_view_label(&self, id: &str, label: &str) -> Result<(), EnhancerError> {
        let Some(section) = self.section(id) else {
            return Ok(());
        };

        let selector = class_selector(&self.config.selectors.view_count_class);
        if let Some(counter) = section.query_selector(&selector)? {
            counter.set_text_content(Some(label));
        }
        Ok(())
    }

    pub fn set_back_to_top_visible(&self, visible: bool) -> Result<(), EnhancerError> {
        set_displayed(&self.back_to_top, visible, "flex")
    }
}

fn class_selector(class: &str) -> String {
    format!(".{}", class)
}

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, EnhancerError> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
        .ok_or_else(|| EnhancerError::MissingElement(id.to_string()))
}

fn html_elements(nodes: &NodeList) -> Vec<HtmlElement> {
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn item_controls(
    document: &Document,
    class: &str,
    attribute: &str,
) -> Result<Vec<ItemControl>, EnhancerError> {
    let nodes = document.query_selector_all(&class_selector(class))?;

    Ok(html_elements(&nodes)
        .into_iter()
        .filter_map(|element| {
            element
                .get_attribute(attribute)
                .map(|item_id| ItemControl { item_id, element })
        })
        .collect())
}

fn texts(nodes: &NodeList) -> Vec<String> {
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .map(|node| node.text_content().unwrap_or_default())
        .collect()
}

fn read_section(section: &HtmlElement) -> Result<SectionContent, EnhancerError> {
    let heading = section
        .query_selector("h2")?
        .and_then(|h| h.text_content())
        .unwrap_or_default();

    let lists = section.query_selector_all("ul")?;
    let bullet_lists = (0..lists.length())
        .filter_map(|i| lists.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|list| list.query_selector_all("li").map(|items| texts(&items)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SectionContent {
        id: section.id(),
        heading,
        paragraphs: texts(&section.query_selector_all("p")?),
        bullet_lists,
        ordered_steps: texts(&section.query_selector_all("ol li")?),
    })
}

/// Show with the given display value ("" restores the stylesheet's), or hide
fn set_displayed(element: &HtmlElement, visible: bool, shown: &str) -> Result<(), EnhancerError> {
    let style = element.style();
    match (visible, shown) {
        (true, "") => {
            style.remove_property("display")?;
        }
        (true, display) => style.set_property("display", display)?,
        (false, _) => style.set_property("display", "none")?,
    }
    Ok(())
}
