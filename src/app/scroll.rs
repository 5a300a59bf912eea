use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::portfolio::nav::Anchor;

pub fn scroll_to_anchor(anchor: Anchor) {
    let Some(el) = document().get_element_by_id(anchor.id()) else {
        log::warn!("no section with id {}", anchor.id());
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub fn scroll_to_top() {
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

/// Current vertical scroll offset, 0 when it can't be read.
pub fn scroll_offset() -> f64 {
    window().scroll_y().unwrap_or_default()
}
