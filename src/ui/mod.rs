/// Browser side: reads the page, wires listeners, applies effects
pub mod nav;
pub mod page;
pub mod runtime;

use crate::catalog::{Item, extract_items};
use crate::config::EnhancerConfig;
use crate::error::EnhancerError;
use crate::events::Dispatcher;
use crate::navigation::nav_links;
use crate::state::AppState;
use crate::storage::BrowserStore;
use gloo::events::EventListener;
use nav::{NavList, NavListProps};
use page::Page;
use runtime::Runtime;

/// Where the catalog items come from
pub enum CatalogSource {
    /// Read from the page's sections
    Page,
    /// Authored content; the page still provides one section per item id
    Authored(Vec<Item>),
}

/// Enhance the page now, or once the document has finished parsing
pub fn start(config: EnhancerConfig, source: CatalogSource) -> Result<(), EnhancerError> {
    let document = gloo::utils::document();

    if document.ready_state() != "loading" {
        return enhance(config, source);
    }

    EventListener::once(&document, "DOMContentLoaded", move |_| {
        if let Err(e) = enhance(config, source) {
            log::error!("Failed to enhance page: {}", e);
        }
    })
    .forget();
    Ok(())
}

fn enhance(config: EnhancerConfig, source: CatalogSource) -> Result<(), EnhancerError> {
    let page = Page::query(&gloo::utils::document(), &config)?;
    let items = match source {
        CatalogSource::Page => extract_items(&page.read_sections()?),
        CatalogSource::Authored(items) => items,
    };

    yew::Renderer::<NavList>::with_root_and_props(
        page.nav_list.clone(),
        NavListProps {
            links: nav_links(&items),
        },
    )
    .render();

    let state = AppState::load(items, Box::new(BrowserStore), config);
    let initial_effects = state.initial_effects();

    let runtime = Runtime::new(page, state, Dispatcher::with_default_handlers());
    runtime.apply_all(initial_effects);
    runtime.wire()?;

    log::info!("Catalog page enhanced");
    Ok(())
}
