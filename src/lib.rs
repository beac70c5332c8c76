use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

pub mod config;
pub mod decor;
pub mod interaction;
pub mod platform;
pub mod reveal;
pub mod scroll;

pub use config::EffectsConfig;

use platform::{console, dom, BrowserScheduler, MotionPreference, Scheduler};

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Page effects exposed to JavaScript
#[wasm_bindgen]
pub struct SiteEffects {
    config: EffectsConfig,
    mounted: bool,
}

#[wasm_bindgen]
impl SiteEffects {
    /// Effects configured for the site's own markup
    #[wasm_bindgen(constructor)]
    pub fn new() -> SiteEffects {
        Self::with_config(EffectsConfig::default())
    }

    /// Effects with YAML overrides on top of the defaults
    #[wasm_bindgen]
    pub fn from_yaml(yaml: &str) -> Result<SiteEffects, JsValue> {
        EffectsConfig::from_yaml(yaml)
            .map(Self::with_config)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Start every effect once the DOM is parsed. Only the first
    /// successful call does anything.
    #[wasm_bindgen]
    pub fn mount(&mut self) -> Result<(), JsValue> {
        self.mount_with(page, |(window, document), config| {
            start_when_ready(window, document, config)
        })
        .map_err(|e| JsValue::from_str(&e))
    }

    /// Whether a `mount` call has succeeded
    #[wasm_bindgen]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

impl SiteEffects {
    pub fn with_config(config: EffectsConfig) -> Self {
        Self {
            config,
            mounted: false,
        }
    }

    pub fn config(&self) -> &EffectsConfig {
        &self.config
    }

    /// Validate the config and look up the page; the effects only count
    /// as mounted once both succeed.
    fn mount_with<P>(
        &mut self,
        lookup: impl FnOnce() -> Result<P, String>,
        start: impl FnOnce(P, EffectsConfig),
    ) -> Result<(), String> {
        if self.mounted {
            return Ok(());
        }
        self.config.validate()?;
        let page = lookup()?;

        self.mounted = true;
        start(page, self.config.clone());
        Ok(())
    }
}

impl Default for SiteEffects {
    fn default() -> Self {
        Self::new()
    }
}

/// Type `text` into `element`, one character every `speed_ms` (default 100)
#[wasm_bindgen]
pub fn type_writer(element: Element, text: &str, speed_ms: Option<u32>) {
    interaction::typewriter::type_into(
        element,
        text,
        speed_ms.unwrap_or(interaction::typewriter::DEFAULT_SPEED_MS),
        Rc::new(BrowserScheduler),
    );
}

fn page() -> Result<(Window, Document), String> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    Ok((window, document))
}

fn start_when_ready(window: Window, document: Document, config: EffectsConfig) {
    console::set_level(config.log_level);
    if document.ready_state() == "loading" {
        let target = document.clone();
        EventListener::once(&target, "DOMContentLoaded", move |_| {
            run_initializers(&window, &document, &config);
        })
        .forget();
    } else {
        run_initializers(&window, &document, &config);
    }
}

/// Run each effect's setup independently; one failing never stops the rest
fn run_initializers(window: &Window, document: &Document, config: &EffectsConfig) {
    let scheduler: Rc<dyn Scheduler> = Rc::new(BrowserScheduler);
    let motion = MotionPreference::detect(window);
    console::info(&format!("mounting site effects (motion: {:?})", motion));

    let mut results = vec![
        (
            "particles",
            decor::init_particles(document, &config.particles, motion, Rc::clone(&scheduler)),
        ),
        (
            "leaves",
            decor::init_leaves(document, &config.leaves, motion, Rc::clone(&scheduler)),
        ),
        (
            "navigation",
            scroll::navigation::init(window, document, &config.navigation, Rc::clone(&scheduler)),
        ),
        ("mobile menu", interaction::menu::init(document, &config.mobile_menu)),
        ("reveal", reveal::init(document, &config.reveal)),
        ("newsletter", interaction::newsletter::init(document, &config.newsletter)),
    ];

    if config.smooth_scroll.enabled {
        results.push((
            "smooth scroll",
            scroll::anchors::init(window, document, &config.smooth_scroll),
        ));
    }
    if config.tilt.enabled {
        results.push(("tilt", interaction::tilt::init(document, &config.tilt)));
    }
    if config.parallax.enabled {
        results.push((
            "parallax",
            scroll::parallax::init(window, document, &config.parallax, Rc::clone(&scheduler)),
        ));
    }
    if config.cursor_trail.enabled {
        results.push((
            "cursor trail",
            interaction::cursor_trail::init(document, &config.cursor_trail, Rc::clone(&scheduler)),
        ));
    }

    for (name, result) in results {
        if let Err(err) = result {
            console::warn(&format!("{} disabled: {}", name, err));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_new_uses_site_defaults() {
        let effects = SiteEffects::new();
        assert!(!effects.is_mounted());
        assert_eq!(effects.config(), &EffectsConfig::default());
    }

    #[test]
    fn test_failed_lookup_leaves_effects_unmounted() {
        let mut effects = SiteEffects::new();
        let starts = Cell::new(0);

        let result = effects.mount_with(|| Err::<(), _>("no global window".to_string()), |_, _| {
            starts.set(starts.get() + 1)
        });
        assert!(result.is_err());
        assert!(!effects.is_mounted());

        effects
            .mount_with(|| Ok(()), |_, _| starts.set(starts.get() + 1))
            .unwrap();
        assert!(effects.is_mounted());

        effects
            .mount_with(|| Ok(()), |_, _| starts.set(starts.get() + 1))
            .unwrap();
        assert_eq!(starts.get(), 1);
    }

    #[test]
    fn test_invalid_config_is_rejected_at_mount() {
        let mut config = EffectsConfig::default();
        config.cursor_trail.follow = 0.0;
        let mut effects = SiteEffects::with_config(config);
        let looked_up = Cell::new(false);

        let err = effects
            .mount_with(
                || {
                    looked_up.set(true);
                    Ok(())
                },
                |_, _| {},
            )
            .unwrap_err();
        assert!(err.contains("cursor_trail.follow"));
        assert!(!looked_up.get());
        assert!(!effects.is_mounted());
    }

    #[test]
    fn test_with_config() {
        let config = EffectsConfig::from_yaml("tilt:\n  enabled: false\n").unwrap();
        let effects = SiteEffects::with_config(config);
        assert!(!effects.config().tilt.enabled);
        assert!(effects.config().smooth_scroll.enabled);
    }
}
