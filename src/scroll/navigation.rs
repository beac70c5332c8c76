use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{Document, Window};

use super::throttle::throttled;
use crate::config::NavigationSettings;
use crate::platform::dom::query;
use crate::platform::{console, Scheduler};

/// Class applied to the nav bar once the page has scrolled
pub const SCROLLED_CLASS: &str = "scrolled";

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Toggle `scrolled` on the nav bar as the page scrolls
pub fn init(
    window: &Window,
    document: &Document,
    settings: &NavigationSettings,
    scheduler: Rc<dyn Scheduler>,
) -> Result<(), String> {
    let Some(nav) = query(document, &settings.selector)? else {
        console::debug(&format!("navigation disabled: {} not found", settings.selector));
        return Ok(());
    };

    let threshold = settings.scrolled_threshold;
    let update = throttled(scheduler, move |scroll_y| {
        let classes = nav.class_list();
        let _ = if is_scrolled(scroll_y, threshold) {
            classes.add_1(SCROLLED_CLASS)
        } else {
            classes.remove_1(SCROLLED_CLASS)
        };
    });

    let source = window.clone();
    EventListener::new(window, "scroll", move |_| update(source.scroll_y().unwrap_or(0.0)))
        .forget();
    Ok(())
}
