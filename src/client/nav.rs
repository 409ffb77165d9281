//! Scroll-spy — which page section the visitor is currently reading.
//!
//! Pure observation logic, decoupled from whatever scroll listener drives
//! it, so it tests without a DOM.

/// One navigable page section in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
}

/// Index of the active section for the current scroll position.
///
/// The probe line sits one third down the viewport; the active section is
/// the last one whose top edge has crossed it. `None` when no section has
/// been reached yet or the list is empty.
#[must_use]
pub fn active_index(sections: &[Section], scroll_y: f64, viewport_height: f64) -> Option<usize> {
    let probe = scroll_y + viewport_height / 3.0;
    let mut active = None;
    for (index, section) in sections.iter().enumerate() {
        if section.top <= probe {
            active = Some(index);
        }
    }
    active
}

#[cfg(test)]
#[path = "nav_test.rs"]
mod tests;
