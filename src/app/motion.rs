use leptos::{html, prelude::*};
use leptos_use::{use_element_visibility, use_window_scroll};

use crate::motion::scroll_progress;

fn max_scroll() -> f64 {
    let page_height = document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or_default();
    let viewport_height = window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    page_height - viewport_height
}

/// Page scroll position as a fraction of the scrollable height.
///
/// Stays at 0 during server rendering; the browser starts tracking on hydrate.
pub fn use_scroll_progress() -> Signal<f64> {
    let (_, scroll_y) = use_window_scroll();
    let progress = RwSignal::new(0.0);
    Effect::new(move |_| {
        let y = scroll_y.get();
        progress.set(scroll_progress(y, max_scroll()));
    });
    progress.into()
}

/// Becomes true the first time `target` is visible and never goes back.
pub fn use_reveal_once(target: NodeRef<html::Div>) -> Signal<bool> {
    let visible = use_element_visibility(target);
    let revealed = RwSignal::new(false);
    Effect::new(move |_| {
        if visible.get() && !revealed.get_untracked() {
            revealed.set(true);
        }
    });
    revealed.into()
}
