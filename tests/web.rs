//! Browser tests, run with `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use herbal_catalog::catalog::extract_items;
use herbal_catalog::config::EnhancerConfig;
use herbal_catalog::events::{AppEvent, Dispatcher};
use herbal_catalog::navigation::nav_links;
use herbal_catalog::state::AppState;
use herbal_catalog::storage::{KeyValueStore, MemoryStore};
use herbal_catalog::ui::nav::{NavList, NavListProps};
use herbal_catalog::ui::page::Page;
use herbal_catalog::ui::runtime::Runtime;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
<input id="search-input" type="text">
<button id="theme-toggle">Modo Oscuro</button>
<button id="show-favorites">Ver Favoritos</button>
<span id="fav-count">0</span>
<ul id="nav-list"></ul>
<button id="back-to-top" style="display: none">↑</button>

<section id="aloe" class="plant-section">
  <h2> Aloe Vera </h2>
  <p>Aloe barbadensis</p>
  <p>Gel para quemaduras y cortes.</p>
  <ul><li>Quemaduras</li><li>Acné</li></ul>
  <ul><li>1 hoja de aloe</li></ul>
  <ol><li>Cortar la hoja</li><li>Extraer el gel</li></ol>
  <span class="view-count"></span>
  <button class="favorite-btn" data-id="aloe"><i class="far fa-heart"></i></button>
  <button class="copy-btn" data-recipe="aloe">Copiar receta</button>
</section>

<section id="menta" class="plant-section">
  <h2>Menta</h2>
  <p>Mentha piperita</p>
  <ul><li>Náuseas</li></ul>
  <span class="view-count"></span>
  <button class="favorite-btn" data-id="menta"><i class="far fa-heart"></i></button>
  <button class="copy-btn" data-recipe="menta">Copiar receta</button>
</section>
"#;

fn mount_fixture() -> Page {
    let document = gloo::utils::document();
    document.body().unwrap().set_inner_html(FIXTURE);
    Page::query(&document, &EnhancerConfig::default()).unwrap()
}

fn create_runtime(store: MemoryStore) -> Rc<Runtime> {
    let page = mount_fixture();
    let items = extract_items(&page.read_sections().unwrap());
    let state = AppState::load(items, Box::new(store), EnhancerConfig::default());
    let initial_effects = state.initial_effects();

    let runtime = Runtime::new(page, state, Dispatcher::with_default_handlers());
    runtime.apply_all(initial_effects);
    runtime
}

// Let the Yew scheduler run before looking at rendered markup
async fn next_tick() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        gloo::utils::window()
            .set_timeout_with_callback(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn display_of(id: &str) -> String {
    let element: HtmlElement = gloo::utils::document()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into()
        .unwrap();
    element.style().get_property_value("display").unwrap()
}

fn text_of(selector: &str) -> String {
    gloo::utils::document()
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

#[wasm_bindgen_test]
fn test_read_sections_from_markup() {
    let page = mount_fixture();
    let items = extract_items(&page.read_sections().unwrap());

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "aloe");
    assert_eq!(items[0].title, "Aloe Vera");
    assert_eq!(items[0].description, "Gel para quemaduras y cortes.");
    assert_eq!(items[0].tags, vec!["Quemaduras", "Acné"]);
    assert_eq!(items[0].ingredients, vec!["1 hoja de aloe"]);
    assert_eq!(items[0].steps, vec!["Cortar la hoja", "Extraer el gel"]);

    assert_eq!(items[1].description, "");
    assert!(items[1].ingredients.is_empty());
    assert!(items[1].steps.is_empty());
}

#[wasm_bindgen_test]
fn test_missing_element_is_reported() {
    let document = gloo::utils::document();
    document.body().unwrap().set_inner_html("<div></div>");

    let result = Page::query(&document, &EnhancerConfig::default());

    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn test_initial_effects_sync_page() {
    let store = MemoryStore::with_entry("plantViews", r#"{"aloe": 3}"#);
    let _runtime = create_runtime(store);

    assert_eq!(text_of("#aloe .view-count"), "3 vistas");
    assert_eq!(text_of("#menta .view-count"), "0 vista");
    assert_eq!(text_of("#fav-count"), "0");
    assert_eq!(text_of("#theme-toggle"), "Modo Oscuro");
}

#[wasm_bindgen_test]
fn test_search_hides_sections() {
    let runtime = create_runtime(MemoryStore::new());

    runtime.emit(AppEvent::SearchChanged("QUEMADURAS".into()));
    assert_eq!(display_of("aloe"), "");
    assert_eq!(display_of("menta"), "none");

    runtime.emit(AppEvent::SearchChanged("".into()));
    assert_eq!(display_of("menta"), "");
}

#[wasm_bindgen_test]
fn test_favorite_toggle_updates_icon_and_count() {
    let runtime = create_runtime(MemoryStore::new());

    runtime.emit(AppEvent::FavoriteToggled("menta".into()));

    let icon = gloo::utils::document()
        .query_selector("#menta .favorite-btn i")
        .unwrap()
        .unwrap();
    assert!(icon.class_list().contains("fas"));
    assert!(!icon.class_list().contains("far"));
    assert_eq!(text_of("#fav-count"), "1");

    runtime.emit(AppEvent::FavoritesViewToggled);
    assert_eq!(display_of("aloe"), "none");
    assert_eq!(display_of("menta"), "");
    assert_eq!(text_of("#show-favorites"), "Volver (1)");
}

#[wasm_bindgen_test]
fn test_theme_toggle_sets_body_class() {
    let runtime = create_runtime(MemoryStore::new());
    let body = gloo::utils::document().body().unwrap();

    runtime.emit(AppEvent::ThemeToggled);
    assert!(body.class_list().contains("dark-mode"));
    assert_eq!(text_of("#theme-toggle"), "Modo Claro");

    runtime.emit(AppEvent::ThemeToggled);
    assert!(!body.class_list().contains("dark-mode"));
}

#[wasm_bindgen_test]
fn test_back_to_top_visibility() {
    let runtime = create_runtime(MemoryStore::new());

    runtime.emit(AppEvent::Scrolled(450.0));
    assert_eq!(display_of("back-to-top"), "flex");

    runtime.emit(AppEvent::Scrolled(100.0));
    assert_eq!(display_of("back-to-top"), "none");
}

#[wasm_bindgen_test]
async fn test_nav_list_links_each_section_in_order() {
    let page = mount_fixture();
    let items = extract_items(&page.read_sections().unwrap());

    yew::Renderer::<NavList>::with_root_and_props(
        page.nav_list.clone(),
        NavListProps {
            links: nav_links(&items),
        },
    )
    .render();
    next_tick().await;

    let anchors = gloo::utils::document()
        .query_selector_all("#nav-list li a")
        .unwrap();
    let anchors: Vec<Element> = (0..anchors.length())
        .filter_map(|i| anchors.item(i))
        .map(|node| node.dyn_into().unwrap())
        .collect();

    assert_eq!(anchors.len(), 2);
    assert_eq!(anchors[0].get_attribute("href").as_deref(), Some("#aloe"));
    assert_eq!(anchors[1].get_attribute("href").as_deref(), Some("#menta"));
    assert_eq!(anchors[0].text_content().as_deref(), Some("Aloe Vera"));
    assert_eq!(anchors[1].text_content().as_deref(), Some("Menta"));

    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let click = MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();

    // The link scrolls in place instead of following the href
    let not_cancelled = anchors[0].dispatch_event(&click).unwrap();
    assert!(!not_cancelled);
    assert!(click.default_prevented());
}

#[wasm_bindgen_test]
fn test_section_view_updates_label_once() {
    let store = MemoryStore::new();
    let runtime = create_runtime(store.clone());
    runtime.wire().unwrap();

    runtime.emit(AppEvent::SectionViewed("aloe".into()));
    assert_eq!(text_of("#aloe .view-count"), "1 vista");
    assert_eq!(store.get("plantViews").as_deref(), Some(r#"{"aloe":1}"#));

    runtime.emit(AppEvent::SectionViewed("aloe".into()));
    assert_eq!(text_of("#aloe .view-count"), "1 vista");
    assert_eq!(store.get("plantViews").as_deref(), Some(r#"{"aloe":1}"#));
    assert_eq!(text_of("#menta .view-count"), "0 vista");
}
