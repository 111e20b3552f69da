//! DOM/scene event wiring. Every listener turns its event into a `Signal`
//! and hands it to the dispatcher; no listener touches session state itself.

use crate::constants::*;
use crate::dom;
use crate::frame::Dispatcher;
use idol_core::{AssetId, Signal};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Declared loadable assets, in document order.
pub fn collect_assets(document: &web::Document) -> Vec<web::Element> {
    let Ok(nodes) = document.query_selector_all(ASSET_SELECTOR) else {
        log::warn!("[load] asset query failed");
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn wire_assets(assets: &[web::Element], dispatcher: &Dispatcher) {
    for (i, el) in assets.iter().enumerate() {
        let event = completion_event_for(&el.tag_name());
        let d = dispatcher.clone();
        dom::add_listener_once(el, event, move |_| d.dispatch(Signal::AssetLoaded(AssetId(i))));
    }
    log::info!("[load] tracking {} assets", assets.len());
}

pub fn wire_scene(scene: &web::Element, dispatcher: &Dispatcher) {
    let d = dispatcher.clone();
    dom::add_listener(scene, EV_LOADED, move |ev| {
        // sub-asset `loaded` events bubble up to the scene
        let from_scene = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map(|el| el.tag_name().eq_ignore_ascii_case(SCENE_SELECTOR))
            .unwrap_or(true);
        if from_scene {
            d.dispatch(Signal::SceneLoaded);
        }
    });
    let d = dispatcher.clone();
    dom::add_listener(scene, EV_MODEL_ERROR, move |ev| {
        let detail = ev
            .dyn_ref::<web::CustomEvent>()
            .map(|c| format!("{:?}", c.detail()))
            .unwrap_or_else(|| "unknown".to_string());
        d.dispatch(Signal::ModelError(detail));
    });

    // the scene may have finished loading before the module started
    let loaded = dom::property(scene.as_ref(), SCENE_HAS_LOADED)
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    if loaded {
        log::info!("[load] scene already loaded at startup");
        dispatcher.dispatch(Signal::SceneLoaded);
    }
}

pub fn wire_background_audio(audio: &web::HtmlAudioElement, dispatcher: &Dispatcher) {
    let d = dispatcher.clone();
    dom::add_listener(audio, EV_CANPLAYTHROUGH, move |_| d.dispatch(Signal::MediaReady));
    let d = dispatcher.clone();
    let el = audio.clone();
    dom::add_listener(audio, EV_ERROR, move |_| {
        let detail = el
            .error()
            .map(|e| format!("media error code {}: {}", e.code(), e.message()))
            .unwrap_or_else(|| "media error".to_string());
        d.dispatch(Signal::MediaError(detail));
    });
}

pub fn wire_controls(document: &web::Document, dispatcher: &Dispatcher) {
    let d = dispatcher.clone();
    dom::add_click_listener(document, AUDIO_BUTTON_ID, move || {
        d.dispatch(Signal::ToggleAudio)
    });

    if let Some(slider) = document
        .get_element_by_id(VOLUME_SLIDER_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    {
        let d = dispatcher.clone();
        let input = slider.clone();
        dom::add_listener(&slider, EV_INPUT, move |_| {
            if let Some(v) = parse_volume(&input.value()) {
                d.dispatch(Signal::VolumeChanged(v));
            }
        });
    }
}

/// Attach the click handler to the object. Called from the ready hook; the
/// object isn't guaranteed to be interactive before that.
pub fn wire_object(object: &web::Element, dispatcher: &Dispatcher) {
    let d = dispatcher.clone();
    dom::add_listener(object, EV_CLICK, move |_| d.dispatch(Signal::ObjectClicked));
    log::info!("[click] listening on #{}", OBJECT_ID);
}

pub fn wire_resize(window: &web::Window, dispatcher: &Dispatcher) {
    let d = dispatcher.clone();
    dom::add_listener(window, EV_RESIZE, move |_| d.dispatch(Signal::Resized));
}
