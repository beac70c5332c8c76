use std::rc::Rc;

use web_sys::Element;

use crate::platform::Scheduler;

/// Default delay between characters
pub const DEFAULT_SPEED_MS: u32 = 100;

/// Successive prefixes of a text, one character longer each step
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }
}

impl Iterator for Typewriter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.shown >= self.chars.len() {
            return None;
        }
        self.shown += 1;
        Some(self.chars[..self.shown].iter().collect())
    }
}

/// Type `text` into `write` one character per `speed_ms`; the first
/// character appears immediately.
pub fn run(
    text: &str,
    speed_ms: u32,
    scheduler: Rc<dyn Scheduler>,
    mut write: Box<dyn FnMut(&str)>,
) {
    write("");
    type_next(Typewriter::new(text), speed_ms, scheduler, write);
}

fn type_next(
    mut typewriter: Typewriter,
    speed_ms: u32,
    scheduler: Rc<dyn Scheduler>,
    mut write: Box<dyn FnMut(&str)>,
) {
    let Some(shown) = typewriter.next() else {
        return;
    };
    write(&shown);

    let next = Rc::clone(&scheduler);
    scheduler.after(
        speed_ms,
        Box::new(move || type_next(typewriter, speed_ms, next, write)),
    );
}

/// Typing effect on a page element
pub fn type_into(element: Element, text: &str, speed_ms: u32, scheduler: Rc<dyn Scheduler>) {
    run(
        text,
        speed_ms,
        scheduler,
        Box::new(move |shown| element.set_text_content(Some(shown))),
    );
}
