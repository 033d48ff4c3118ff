/// Page wiring: listeners feed events to the dispatcher, effects go back to the page

use crate::config::EnhancerConfig;
use crate::error::EnhancerError;
use crate::events::{AppEvent, Dispatcher, Effect};
use crate::state::AppState;
use crate::ui::page::Page;
use crate::views::crossed_threshold;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions,
};

// Import JS bridge functions
#[wasm_bindgen(module = "/bridge.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn writeClipboardText(text: &str) -> Result<(), JsValue>;
}

pub struct Runtime {
    page: Page,
    state: RefCell<AppState>,
    dispatcher: Dispatcher,
    observer: RefCell<Option<IntersectionObserver>>,
}

impl Runtime {
    pub fn new(page: Page, state: AppState, dispatcher: Dispatcher) -> Rc<Runtime> {
        Rc::new(Runtime {
            page,
            state: RefCell::new(state),
            dispatcher,
            observer: RefCell::new(None),
        })
    }

    fn config(&self) -> EnhancerConfig {
        self.state.borrow().config.clone()
    }

    /// Dispatch an event and apply whatever the handlers asked for
    pub fn emit(self: &Rc<Self>, event: AppEvent) {
        let effects = {
            let mut state = self.state.borrow_mut();
            self.dispatcher.dispatch(&event, &mut state)
        };
        self.apply_all(effects);
    }

    pub fn apply_all(self: &Rc<Self>, effects: Vec<Effect>) {
        for effect in effects {
            if let Err(e) = self.apply(effect) {
                log::warn!("Failed to update page: {}", e);
            }
        }
    }

    fn apply(self: &Rc<Self>, effect: Effect) -> Result<(), EnhancerError> {
        match effect {
            Effect::SetSectionVisible { id, visible } => self.page.set_section_visible(&id, visible),
            Effect::SetFavoriteIcon { id, filled } => self.page.set_favorite_icon(&id, filled),
            Effect::SetFavoriteCount(count) => {
                self.page.set_favorite_count(count);
                Ok(())
            }
            Effect::SetFavoritesButton { label, active } => {
                self.page.set_favorites_button(&label, active)
            }
            Effect::SetDarkMode(dark) => self.page.set_dark_mode(dark),
            Effect::SetThemeLabel(label) => {
                self.page.set_theme_label(&label);
                Ok(())
            }
            Effect::SetViewLabel { id, label } => self.page.set_view_label(&id, &label),
            Effect::StopObserving(id) => {
                if let (Some(observer), Some(section)) =
                    (self.observer.borrow().as_ref(), self.page.section(&id))
                {
                    observer.unobserve(section);
                }
                Ok(())
            }
            Effect::CopyToClipboard { control, text } => {
                let Some(button) = self.page.copy_buttons.get(control) else {
                    return Err(EnhancerError::MissingElement(format!("copy control {}", control)));
                };
                spawn_local(copy_with_feedback(button.element.clone(), text, self.config()));
                Ok(())
            }
            Effect::SetBackToTopVisible(visible) => self.page.set_back_to_top_visible(visible),
        }
    }

    /// Attach every listener. Called once, after the initial effects.
    pub fn wire(self: &Rc<Self>) -> Result<(), EnhancerError> {
        self.wire_search();
        self.wire_favorites();
        self.wire_theme();
        self.wire_favorites_view();
        self.wire_copy_buttons();
        self.wire_scroll();
        self.observe_sections()
    }

    fn wire_search(self: &Rc<Self>) {
        let runtime = self.clone();
        let input = self.page.search_input.clone();
        EventListener::new(&self.page.search_input, "input", move |_| {
            runtime.emit(AppEvent::SearchChanged(input.value()));
        })
        .forget();
    }

    fn wire_favorites(self: &Rc<Self>) {
        for button in &self.page.favorite_buttons {
            let runtime = self.clone();
            let id = button.item_id.clone();
            EventListener::new(&button.element, "click", move |event| {
                event.stop_propagation();
                runtime.emit(AppEvent::FavoriteToggled(id.clone()));
            })
            .forget();
        }
    }

    fn wire_theme(self: &Rc<Self>) {
        let runtime = self.clone();
        EventListener::new(&self.page.theme_toggle, "click", move |_| {
            runtime.emit(AppEvent::ThemeToggled);
        })
        .forget();
    }

    fn wire_favorites_view(self: &Rc<Self>) {
        let runtime = self.clone();
        EventListener::new(&self.page.show_favorites, "click", move |_| {
            runtime.emit(AppEvent::FavoritesViewToggled);
        })
        .forget();
    }

    fn wire_copy_buttons(self: &Rc<Self>) {
        for (control, button) in self.page.copy_buttons.iter().enumerate() {
            let runtime = self.clone();
            let id = button.item_id.clone();
            EventListener::new(&button.element, "click", move |_| {
                runtime.emit(AppEvent::CopyRequested {
                    id: id.clone(),
                    control,
                });
            })
            .forget();
        }
    }

    fn wire_scroll(self: &Rc<Self>) {
        let window = gloo::utils::window();

        let runtime = self.clone();
        let scrolled = window.clone();
        EventListener::new(&window, "scroll", move |_| {
            let offset = scrolled.scroll_y().unwrap_or(0.0);
            runtime.emit(AppEvent::Scrolled(offset));
        })
        .forget();

        EventListener::new(&self.page.back_to_top, "click", move |_| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })
        .forget();
    }

    fn observe_sections(self: &Rc<Self>) -> Result<(), EnhancerError> {
        let threshold = self.state.borrow().config.view_threshold;

        let runtime = self.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if crossed_threshold(entry.is_intersecting(), entry.intersection_ratio(), threshold) {
                        runtime.emit(AppEvent::SectionViewed(entry.target().id()));
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        callback.forget();

        for section in &self.page.sections {
            observer.observe(section);
        }
        *self.observer.borrow_mut() = Some(observer);
        Ok(())
    }
}

/// Write the recipe, then flash a confirmation on the button
async fn copy_with_feedback(button: HtmlElement, text: String, config: EnhancerConfig) {
    match writeClipboardText(&text).await {
        Ok(()) => {
            let original = button.text_content();
            button.set_text_content(Some(&config.labels.copied));
            if let Err(e) = button.style().set_property("background", &config.colors.copied) {
                log::warn!("Failed to update page: {:?}", e);
            }

            Timeout::new(config.copy_feedback_ms, move || {
                button.set_text_content(original.as_deref());
                if let Err(e) = button.style().remove_property("background") {
                    log::warn!("Failed to update page: {:?}", e);
                }
            })
            .forget();
        }
        Err(e) => {
            log::error!("Clipboard write failed: {:?}", e);
            gloo::dialogs::alert(&config.labels.copy_failed);
        }
    }
}
