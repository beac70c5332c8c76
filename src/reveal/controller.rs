use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use super::state::{stagger_delays, transition_delay, RevealState, REVEAL_CLASS, VISIBLE_CLASS};
use crate::config::{RevealSettings, StaggerGroup};
use crate::platform::console;
use crate::platform::dom::{js_error, query_all, set_style};

/// Tags page sections for reveal and watches them with one shared observer
pub struct RevealController {
    document: Document,
    threshold: f64,
    root_margin: String,
    observer: Option<IntersectionObserver>,
}

impl RevealController {
    pub fn new(document: Document, settings: &RevealSettings) -> Self {
        Self {
            document,
            threshold: settings.threshold,
            root_margin: settings.root_margin.clone(),
            observer: None,
        }
    }

    /// Tag every match of `selectors` and start observing all tagged
    /// elements. Returns how many targets are observed.
    pub fn activate(&mut self, selectors: &[String]) -> Result<usize, String> {
        for selector in selectors {
            for element in query_all(&self.document, selector)? {
                element.class_list().add_1(REVEAL_CLASS).map_err(js_error)?;
            }
        }

        let targets = query_all(&self.document, &format!(".{}", REVEAL_CLASS))?;
        if targets.is_empty() {
            return Ok(0);
        }

        let observer = match &self.observer {
            Some(observer) => observer.clone(),
            None => {
                let observer = self.build_observer()?;
                self.observer = Some(observer.clone());
                observer
            }
        };

        let mut observed = 0;
        for target in &targets {
            // Already revealed elements never settle again
            if !target.class_list().contains(VISIBLE_CLASS) {
                observer.observe(target);
                observed += 1;
            }
        }
        Ok(observed)
    }

    /// Give each member of every group an increasing transition delay
    pub fn stagger(&self, groups: &[StaggerGroup]) -> Result<(), String> {
        for group in groups {
            let members = query_all(&self.document, &group.selector)?;
            let delays = stagger_delays(members.len(), group.step_ms);
            for (member, delay) in members.iter().zip(delays) {
                set_style(member, "transition-delay", &transition_delay(delay))?;
            }
        }
        Ok(())
    }

    fn build_observer(&self) -> Result<IntersectionObserver, String> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    if apply_entry(&target, entry.is_intersecting()) {
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(self.threshold));
        options.set_root_margin(&self.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(js_error)?;
        // The observer lives as long as the page
        callback.forget();
        Ok(observer)
    }
}

/// Feed one intersection observation to `target`, whose state lives in
/// its `visible` class. Returns true exactly once, on the observation that
/// reveals it; the caller stops observing it then.
pub fn apply_entry(target: &Element, intersecting: bool) -> bool {
    let classes = target.class_list();
    let state = RevealState::from_visible_flag(classes.contains(VISIBLE_CLASS));
    let (next, revealed) = state.observe(intersecting);
    if revealed {
        let _ = classes.add_1(VISIBLE_CLASS);
    }
    revealed && next.is_settled()
}

/// Wire up scroll reveals for the configured sections
pub fn init(document: &Document, settings: &RevealSettings) -> Result<(), String> {
    let mut controller = RevealController::new(document.clone(), settings);
    let observed = controller.activate(&settings.selectors)?;
    controller.stagger(&settings.stagger)?;
    console::debug(&format!("reveal observing {} targets", observed));
    Ok(())
}
