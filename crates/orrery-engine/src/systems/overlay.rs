//! HTML overlay seam.
//!
//! The show only names elements and classes. The web crate maps these calls
//! onto the DOM; tests record them.

pub const UI_LAYER_ID: &str = "ui-layer";
pub const SCROLL_INDICATOR_ID: &str = "scroll-indicator";
pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";

pub trait Overlay {
    /// Add or remove the `active` class on the element `id`.
    fn set_active(&mut self, id: &str, active: bool);

    /// Add the `visible` class on the element `id`.
    fn reveal(&mut self, id: &str);

    /// Let the page scroll vertically.
    fn unlock_scroll(&mut self);
}

/// Mark exactly the `active`-th panel; clear the rest.
pub fn sync_overlay(overlay: &mut dyn Overlay, ids: &[String], active: usize) {
    for (i, id) in ids.iter().enumerate() {
        overlay.set_active(id, i == active);
    }
}

/// Show the interface chrome and unlock scrolling once the intro is over.
pub fn reveal_interface(overlay: &mut dyn Overlay) {
    overlay.reveal(UI_LAYER_ID);
    overlay.reveal(SCROLL_INDICATOR_ID);
    overlay.unlock_scroll();
}

/// Overlay that mirrors class state in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingOverlay {
    pub active: std::collections::BTreeSet<String>,
    pub revealed: Vec<String>,
    pub scroll_unlocks: usize,
    pub set_calls: usize,
}

#[cfg(test)]
impl Overlay for RecordingOverlay {
    fn set_active(&mut self, id: &str, active: bool) {
        self.set_calls += 1;
        if active {
            self.active.insert(id.to_owned());
        } else {
            self.active.remove(id);
        }
    }

    fn reveal(&mut self, id: &str) {
        self.revealed.push(id.to_owned());
    }

    fn unlock_scroll(&mut self) {
        self.scroll_unlocks += 1;
    }
}
