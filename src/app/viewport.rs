use leptos::prelude::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::sections::{PageLayout, ScrollSurface, Section, SectionBounds, Viewport};

/// The live browser page. Geometry is read fresh from the DOM on every call.
///
/// Only usable in the browser: call from event handlers or effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomPage;

impl PageLayout for DomPage {
    fn section_bounds(&self, section: Section) -> Option<SectionBounds> {
        let el = document()
            .get_element_by_id(section.id())?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(SectionBounds {
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        })
    }
}

impl ScrollSurface for DomPage {
    fn viewport(&self) -> Viewport {
        let window = window();
        Viewport {
            scroll_offset: window.scroll_y().unwrap_or_default(),
            height: window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or_default(),
        }
    }

    fn scroll_to(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&opts);
    }
}
