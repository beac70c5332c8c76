use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::SmoothScrollSettings;
use crate::platform::console;
use crate::platform::dom::{js_error, query, query_all};

/// Selector for an in-page link, or `None` for the bare `#` placeholder
pub fn anchor_target(href: &str) -> Option<&str> {
    if href == "#" || href.is_empty() {
        None
    } else {
        Some(href)
    }
}

/// Document offset that lands `target_top` just below a fixed header
pub fn scroll_destination(target_top: f64, scroll_y: f64, nav_height: f64) -> f64 {
    target_top + scroll_y - nav_height
}

/// Replace jump-to-anchor with a smooth scroll that clears the nav bar
pub fn init(window: &Window, document: &Document, settings: &SmoothScrollSettings) -> Result<(), String> {
    for anchor in query_all(document, &settings.anchor_selector)? {
        let window = window.clone();
        let document = document.clone();
        let nav_selector = settings.nav_selector.clone();
        let link = anchor.clone();

        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                if let Err(err) = scroll_to_anchor(&window, &document, &href, &nav_selector) {
                    console::warn(&format!("smooth scroll to {} failed: {}", href, err));
                }
            },
        )
        .forget();
    }
    Ok(())
}

fn scroll_to_anchor(
    window: &Window,
    document: &Document,
    href: &str,
    nav_selector: &str,
) -> Result<(), String> {
    let Some(selector) = anchor_target(href) else {
        return Ok(());
    };
    let Some(target) = query(document, selector)? else {
        return Ok(());
    };

    let nav_height = query(document, nav_selector)?
        .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
        .map(|nav| nav.offset_height() as f64)
        .unwrap_or(0.0);
    let scroll_y = window.scroll_y().map_err(js_error)?;
    let top = scroll_destination(target.get_bounding_client_rect().top(), scroll_y, nav_height);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}
