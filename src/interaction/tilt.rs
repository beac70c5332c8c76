use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

use crate::config::TiltSettings;
use crate::platform::dom::{query_all, set_style};

/// Rotation of a book cover toward the pointer, degrees
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Pointer at (`x`, `y`) inside a `width`×`height` box
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64, settings: &TiltSettings) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        if center_x <= 0.0 || center_y <= 0.0 {
            return Self::default();
        }

        Self {
            rotate_x: (center_y - y) / center_y * settings.max_rotate_x,
            rotate_y: (x - center_x) / center_x * settings.max_rotate_y,
        }
    }

    pub fn transform(&self, base_rotate_y: f64) -> String {
        format!(
            "rotateY({}deg) rotateX({}deg)",
            base_rotate_y + self.rotate_y,
            self.rotate_x
        )
    }
}

/// 3D hover tilt on book covers
pub fn init(document: &Document, settings: &TiltSettings) -> Result<(), String> {
    for cover in query_all(document, &settings.selector)? {
        {
            let (target, settings) = (cover.clone(), settings.clone());
            EventListener::new(&cover, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let rect = target.get_bounding_client_rect();
                let tilt = Tilt::from_pointer(
                    event.client_x() as f64 - rect.left(),
                    event.client_y() as f64 - rect.top(),
                    rect.width(),
                    rect.height(),
                    &settings,
                );
                if let Some(art) = cover_art(&target, &settings.art_selector) {
                    let _ = set_style(&art, "transform", &tilt.transform(settings.base_rotate_y));
                }
            })
            .forget();
        }

        let (target, art_selector) = (cover.clone(), settings.art_selector.clone());
        EventListener::new(&cover, "mouseleave", move |_| {
            if let Some(art) = cover_art(&target, &art_selector) {
                let _ = set_style(&art, "transform", "");
            }
        })
        .forget();
    }
    Ok(())
}

fn cover_art(cover: &Element, selector: &str) -> Option<Element> {
    cover.query_selector(selector).ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_neutral() {
        let tilt = Tilt::from_pointer(100.0, 150.0, 200.0, 300.0, &TiltSettings::default());
        assert_eq!(tilt, Tilt::default());
        assert_eq!(tilt.transform(-15.0), "rotateY(-15deg) rotateX(0deg)");
    }

    #[test]
    fn test_corners_hit_limits() {
        let settings = TiltSettings::default();

        let top_left = Tilt::from_pointer(0.0, 0.0, 200.0, 300.0, &settings);
        assert_eq!(top_left.rotate_y, -10.0);
        assert_eq!(top_left.rotate_x, 5.0);

        let bottom_right = Tilt::from_pointer(200.0, 300.0, 200.0, 300.0, &settings);
        assert_eq!(bottom_right.rotate_y, 10.0);
        assert_eq!(bottom_right.rotate_x, -5.0);
        assert_eq!(bottom_right.transform(-15.0), "rotateY(-5deg) rotateX(-5deg)");
    }

    #[test]
    fn test_collapsed_box_does_not_tilt() {
        let tilt = Tilt::from_pointer(10.0, 10.0, 0.0, 0.0, &TiltSettings::default());
        assert_eq!(tilt, Tilt::default());
    }
}
