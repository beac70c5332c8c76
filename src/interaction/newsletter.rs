use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlInputElement};

use crate::config::NewsletterSettings;
use crate::platform::console;
use crate::platform::dom::js_error;

/// What to do with a newsletter submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Stop the native navigation; nothing to send
    Cancel,
    /// Let the form post to the mailing service
    Proceed,
}

impl SubmitDecision {
    pub fn for_email(raw: &str) -> Self {
        if raw.trim().is_empty() {
            Self::Cancel
        } else {
            Self::Proceed
        }
    }

    /// Button state to show before the native submission runs
    pub fn feedback(self, pending_label: &str) -> Option<ButtonFeedback<'_>> {
        match self {
            Self::Cancel => None,
            Self::Proceed => Some(ButtonFeedback {
                label: pending_label,
                disabled: true,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonFeedback<'a> {
    pub label: &'a str,
    pub disabled: bool,
}

/// Guard the signup form against empty submits
pub fn init(document: &Document, settings: &NewsletterSettings) -> Result<(), String> {
    let Some(form) = document.get_element_by_id(&settings.form_id) else {
        console::debug(&format!("newsletter disabled: #{} not found", settings.form_id));
        return Ok(());
    };

    let input = form
        .query_selector(&settings.email_selector)
        .map_err(js_error)?
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    let button = form
        .query_selector(&settings.button_selector)
        .map_err(js_error)?
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
    let (Some(input), Some(button)) = (input, button) else {
        console::debug("newsletter disabled: email input or button not found");
        return Ok(());
    };

    let pending_label = settings.pending_label.clone();
    EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let decision = SubmitDecision::for_email(&input.value());
            match decision.feedback(&pending_label) {
                None => event.prevent_default(),
                Some(feedback) => {
                    button.set_text_content(Some(feedback.label));
                    button.set_disabled(feedback.disabled);
                }
            }
        },
    )
    .forget();
    Ok(())
}
