use gloo::events::EventListener;
use web_sys::{Document, Element};

use crate::config::MenuSettings;
use crate::platform::console;
use crate::platform::dom::query_within;

/// Class marking the open menu and its toggle
pub const ACTIVE_CLASS: &str = "active";

/// Body overflow while the menu is open or closed
pub fn body_overflow(open: bool) -> &'static str {
    if open {
        "hidden"
    } else {
        ""
    }
}

/// Hamburger toggle for the mobile menu panel
pub fn init(document: &Document, settings: &MenuSettings) -> Result<(), String> {
    let (Some(toggle), Some(menu)) = (
        document.get_element_by_id(&settings.toggle_id),
        document.get_element_by_id(&settings.menu_id),
    ) else {
        console::debug("mobile menu disabled: toggle or panel not found");
        return Ok(());
    };

    {
        let (toggle_el, menu_el, document) = (toggle.clone(), menu.clone(), document.clone());
        EventListener::new(&toggle, "click", move |_| {
            let open = menu_el.class_list().toggle(ACTIVE_CLASS).unwrap_or(false);
            let _ = toggle_el.class_list().toggle(ACTIVE_CLASS);
            lock_scroll(&document, open);
        })
        .forget();
    }

    for link in query_within(&menu, "a")? {
        let (toggle, menu, document) = (toggle.clone(), menu.clone(), document.clone());
        EventListener::new(&link, "click", move |_| close(&document, &toggle, &menu)).forget();
    }
    Ok(())
}

fn close(document: &Document, toggle: &Element, menu: &Element) {
    let _ = menu.class_list().remove_1(ACTIVE_CLASS);
    let _ = toggle.class_list().remove_1(ACTIVE_CLASS);
    lock_scroll(document, false);
}

fn lock_scroll(document: &Document, open: bool) {
    if let Some(body) = document.body() {
        let _ = body.style().set_property("overflow", body_overflow(open));
    }
}
