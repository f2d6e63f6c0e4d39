//! HUD bindings: hint message, typing indicator, progress bar, quote.
//!
//! Element lookups happen once at startup; per-frame updates only toggle CSS
//! classes and the progress width, so a missing element degrades to a no-op.

use crate::core::Scene;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Hud {
    message: Option<web::Element>,
    typing_indicator: Option<web::Element>,
    progress_fill: Option<web::HtmlElement>,
    quote: Option<web::Element>,
}

impl Hud {
    pub fn lookup(document: &web::Document) -> Self {
        let progress_fill = document
            .get_element_by_id("progress-fill")
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        Self {
            message: document.get_element_by_id("message-overlay"),
            typing_indicator: document.get_element_by_id("typing-indicator"),
            progress_fill,
            quote: document.get_element_by_id("quote-container"),
        }
    }

    /// Push the current overlay flags and level into the DOM.
    pub fn apply(&self, scene: &Scene) {
        set_class(&self.message, "hidden", !scene.flags.hint_visible);
        set_class(&self.typing_indicator, "active", scene.flags.typing_indicator);
        set_class(&self.quote, "visible", scene.flags.quote_visible);
        if let Some(el) = &self.progress_fill {
            let width = format!("{:.1}%", scene.state.current_level * 100.0);
            _ = el.style().set_property("width", &width);
        }
    }
}

#[inline]
fn set_class(el: &Option<web::Element>, class: &str, on: bool) {
    if let Some(el) = el {
        let cl = el.class_list();
        if on {
            _ = cl.add_1(class);
        } else {
            _ = cl.remove_1(class);
        }
    }
}
