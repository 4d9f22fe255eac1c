//! DOM side of the overlay: panel classes, interface reveal, scroll unlock
//! and scroll measurements.

use std::collections::HashSet;

use orrery_engine::systems::overlay::{Overlay, ACTIVE_CLASS, VISIBLE_CLASS};
use orrery_engine::ScrollMetrics;
use web_sys::{Document, Element};

use crate::error::describe;

/// `Overlay` over the live document. Missing elements are skipped with one
/// warning per id.
pub struct DomOverlay {
    document: Document,
    warned: HashSet<String>,
}

impl DomOverlay {
    pub fn new(document: Document) -> Self {
        Self { document, warned: HashSet::new() }
    }

    fn element(&mut self, id: &str) -> Option<Element> {
        let element = self.document.get_element_by_id(id);
        if element.is_none() && self.warned.insert(id.to_owned()) {
            log::warn!("overlay element #{id} not found; skipping");
        }
        element
    }

    fn toggle_class(&mut self, id: &str, class: &str, on: bool) {
        let Some(element) = self.element(id) else { return };
        let list = element.class_list();
        let result = if on { list.add_1(class) } else { list.remove_1(class) };
        if let Err(e) = result {
            log::warn!("#{id}: class `{class}` update failed: {}", describe(&e));
        }
    }
}

impl Overlay for DomOverlay {
    fn set_active(&mut self, id: &str, active: bool) {
        self.toggle_class(id, ACTIVE_CLASS, active);
    }

    fn reveal(&mut self, id: &str) {
        self.toggle_class(id, VISIBLE_CLASS, true);
    }

    fn unlock_scroll(&mut self) {
        match self.document.body() {
            Some(body) => {
                if let Err(e) = body.style().set_property("overflow-y", "auto") {
                    log::warn!("scroll unlock failed: {}", describe(&e));
                }
            }
            None => log::warn!("document has no body; scroll stays locked"),
        }
    }
}

/// The root element's value unless it is missing or zero, then the body's.
pub fn root_or_body(from_root: Option<i32>, from_body: Option<i32>) -> i32 {
    match from_root {
        Some(v) if v != 0 => v,
        _ => from_body.unwrap_or(0),
    }
}

/// Read the page scroll the way browsers disagree on it: the root element
/// first, the body when the root reports zero.
pub fn scroll_metrics(document: &Document) -> ScrollMetrics {
    let root = document.document_element();
    let body = document.body();

    let scroll_top = root_or_body(
        root.as_ref().map(Element::scroll_top),
        body.as_ref().map(|b| b.scroll_top()),
    );
    let scroll_height = root_or_body(
        root.as_ref().map(Element::scroll_height),
        body.as_ref().map(|b| b.scroll_height()),
    );
    let client_height = root.as_ref().map_or(0, Element::client_height);

    ScrollMetrics::new(scroll_top as f32, scroll_height as f32, client_height as f32)
}
