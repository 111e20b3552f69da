use crate::constants::{BACKGROUND_AUDIO_ID, CLICK_SOUND_ID};
use crate::dom::js_error;
use crate::frame::Inbox;
use idol_core::{HostError, Signal, Track};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// The page's `<audio>` elements: the background track and the click sound.
pub struct MediaTracks {
    background: Option<web::HtmlAudioElement>,
    effect: Option<web::HtmlAudioElement>,
    inbox: Inbox,
}

fn audio_by_id(document: &web::Document, id: &str) -> Option<web::HtmlAudioElement> {
    let el = document.get_element_by_id(id)?;
    match el.dyn_into::<web::HtmlAudioElement>() {
        Ok(a) => Some(a),
        Err(_) => {
            log::warn!("[audio] #{} is not an <audio> element", id);
            None
        }
    }
}

impl MediaTracks {
    pub fn from_document(document: &web::Document, inbox: Inbox) -> Self {
        Self {
            background: audio_by_id(document, BACKGROUND_AUDIO_ID),
            effect: audio_by_id(document, CLICK_SOUND_ID),
            inbox,
        }
    }

    pub fn background(&self) -> Option<&web::HtmlAudioElement> {
        self.background.as_ref()
    }

    fn element(&self, track: Track) -> Result<&web::HtmlAudioElement, HostError> {
        let el = match track {
            Track::Background => self.background.as_ref(),
            Track::Effect => self.effect.as_ref(),
        };
        el.ok_or(HostError::MissingTrack(track))
    }

    #[inline]
    pub fn has(&self, track: Track) -> bool {
        self.element(track).is_ok()
    }

    /// Start `play()` and report the promise outcome through the inbox.
    pub fn request_play(&self, track: Track) -> Result<(), HostError> {
        let promise = self.element(track)?.play().map_err(js_error)?;
        let inbox = self.inbox.clone();
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => inbox.push(Signal::PlayResolved(track)),
                Err(e) => inbox.push(Signal::PlayRejected(track, format!("{:?}", e))),
            }
        });
        Ok(())
    }

    pub fn pause(&self, track: Track) -> Result<(), HostError> {
        self.element(track)?.pause().map_err(js_error)
    }

    pub fn rewind(&self, track: Track) -> Result<(), HostError> {
        self.element(track)?.set_current_time(0.0);
        Ok(())
    }

    pub fn set_volume(&self, track: Track, volume: f32) -> Result<(), HostError> {
        self.element(track)?.set_volume(volume as f64);
        Ok(())
    }
}
