//! Session configuration read from the page markup.

use crate::constants::*;
use idol_core::constants::{AMBIENT_MAX_PARTICLES, DEFAULT_VOLUME};
use idol_core::{AmbientConfig, Easing, FeedbackStyle, ParticleVariant, SessionConfig};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn from_markup(document: &web::Document, scene: &web::Element) -> SessionConfig {
    let mut config = SessionConfig {
        initial_volume: slider_volume(document).unwrap_or(DEFAULT_VOLUME),
        particles: particle_variant(document, scene),
        ..Default::default()
    };
    let animated = document
        .get_element_by_id(OBJECT_ID)
        .and_then(|el| el.get_attribute(ATTR_FEEDBACK))
        .map(|v| v == FEEDBACK_ANIMATION)
        .unwrap_or(false);
    if animated {
        config.feedback.style = FeedbackStyle::Animation {
            easing: Easing::EaseInOutQuad,
        };
    }
    config
}

pub fn slider_volume(document: &web::Document) -> Option<f32> {
    let input = document
        .get_element_by_id(VOLUME_SLIDER_ID)?
        .dyn_into::<web::HtmlInputElement>()
        .ok()?;
    parse_volume(&input.value()).map(|v| v.clamp(0.0, 1.0))
}

fn particle_variant(document: &web::Document, scene: &web::Element) -> ParticleVariant {
    if document.get_element_by_id(EMITTER_ID).is_some() {
        return ParticleVariant::default();
    }
    match scene
        .get_attribute(ATTR_AMBIENT_COUNT)
        .as_deref()
        .and_then(parse_ambient_count)
    {
        Some(count) => {
            if count > AMBIENT_MAX_PARTICLES {
                log::warn!("[config] capping ambient particles {} -> {}", count, AMBIENT_MAX_PARTICLES);
            }
            ParticleVariant::Ambient(AmbientConfig::with_count(count.min(AMBIENT_MAX_PARTICLES)))
        }
        None => ParticleVariant::None,
    }
}
