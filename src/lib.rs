#![cfg(target_arch = "wasm32")]
use idol_core::Session;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod host;
mod overlay;
mod ui;

use frame::{Clock, Dispatcher, Inbox};
use host::WebHost;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("idol-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let scene = document
        .query_selector(constants::SCENE_SELECTOR)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("missing <{}>", constants::SCENE_SELECTOR))?;

    let assets = events::collect_assets(&document);
    let config = config::from_markup(&document, &scene);

    let inbox = Inbox::default();
    let tracks = audio::MediaTracks::from_document(&document, inbox.clone());
    let background = tracks.background().cloned();
    let host = WebHost::new(window.clone(), document.clone(), scene.clone(), tracks);
    let object = host.object().cloned();

    let session = Session::new(host, config, assets.len())?;
    let dispatcher = Dispatcher::new(session, inbox, Clock::new());

    // Attachment order matters: readiness is handled by the session before
    // the object listener below is attached.
    events::wire_assets(&assets, &dispatcher);
    events::wire_scene(&scene, &dispatcher);
    if let Some(audio) = &background {
        events::wire_background_audio(audio, &dispatcher);
    }
    events::wire_controls(&document, &dispatcher);
    events::wire_resize(&window, &dispatcher);

    if let Some(object) = object {
        let d = dispatcher.clone();
        dispatcher
            .session()
            .borrow_mut()
            .on_ready(move || events::wire_object(&object, &d));
    }

    frame::start_loop(dispatcher);
    Ok(())
}
