use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{Document, Window};

use super::throttle::throttled;
use crate::config::ParallaxSettings;
use crate::platform::dom::{query_all, set_style};
use crate::platform::Scheduler;

/// Attribute carrying an element's scroll speed factor
pub const SPEED_ATTRIBUTE: &str = "data-parallax";

/// Leading-number parse of a speed attribute; missing, unparsable, zero
/// and non-finite values fall back.
pub fn parse_speed(raw: Option<&str>, fallback: f64) -> f64 {
    raw.and_then(leading_number)
        .filter(|speed| speed.is_finite() && *speed != 0.0)
        .unwrap_or(fallback)
}

fn leading_number(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    (1..=text.len())
        .rev()
        .filter(|end| text.is_char_boundary(*end))
        .find_map(|end| text[..end].parse::<f64>().ok())
}

pub fn translate_for(scroll_y: f64, speed: f64) -> String {
    format!("translateY({}px)", 0.0 - scroll_y * speed)
}

/// Drift `[data-parallax]` elements against the scroll
pub fn init(
    window: &Window,
    document: &Document,
    settings: &ParallaxSettings,
    scheduler: Rc<dyn Scheduler>,
) -> Result<(), String> {
    let elements = query_all(document, &settings.selector)?;
    if elements.is_empty() {
        return Ok(());
    }

    let fallback = settings.default_speed;
    let update = throttled(scheduler, move |scroll_y| {
        for element in &elements {
            let speed = parse_speed(element.get_attribute(SPEED_ATTRIBUTE).as_deref(), fallback);
            let _ = set_style(element, "transform", &translate_for(scroll_y, speed));
        }
    });

    let source = window.clone();
    EventListener::new(window, "scroll", move |_| update(source.scroll_y().unwrap_or(0.0)))
        .forget();
    Ok(())
}
