use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::config::CursorTrailSettings;
use crate::platform::dom::js_error;
use crate::platform::Scheduler;

pub const TRAIL_CLASS: &str = "cursor-trail";

/// Eases a point toward the last pointer position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailFollower {
    pub position: (f64, f64),
    pub target: (f64, f64),
    follow: f64,
}

impl TrailFollower {
    pub fn new(follow: f64) -> Self {
        Self {
            position: (0.0, 0.0),
            target: (0.0, 0.0),
            follow,
        }
    }

    pub fn aim(&mut self, x: f64, y: f64) {
        self.target = (x, y);
    }

    /// Advance one frame and return the new position
    pub fn step(&mut self) -> (f64, f64) {
        self.position.0 += (self.target.0 - self.position.0) * self.follow;
        self.position.1 += (self.target.1 - self.position.1) * self.follow;
        self.position
    }
}

/// Soft glow that lags behind the pointer
pub fn init(
    document: &Document,
    settings: &CursorTrailSettings,
    scheduler: Rc<dyn Scheduler>,
) -> Result<(), String> {
    let Some(body) = document.body() else {
        return Ok(());
    };

    let trail: HtmlElement = document
        .create_element("div")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| "div is not an HTML element".to_string())?;
    trail.set_class_name(TRAIL_CLASS);
    body.append_child(&trail).map_err(js_error)?;

    let follower = Rc::new(RefCell::new(TrailFollower::new(settings.follow)));
    {
        let follower = Rc::clone(&follower);
        EventListener::new(document, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                follower
                    .borrow_mut()
                    .aim(event.client_x() as f64, event.client_y() as f64);
            }
        })
        .forget();
    }

    animate(scheduler, follower, trail);
    Ok(())
}

fn animate(scheduler: Rc<dyn Scheduler>, follower: Rc<RefCell<TrailFollower>>, trail: HtmlElement) {
    let (x, y) = follower.borrow_mut().step();
    let style = trail.style();
    let _ = style.set_property("left", &format!("{}px", x));
    let _ = style.set_property("top", &format!("{}px", y));

    let next = Rc::clone(&scheduler);
    scheduler.next_frame(Box::new(move || animate(next, follower, trail)));
}
