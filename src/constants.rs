// Page markup contract: element ids, selectors, event names and labels.
// Kept free of `web-sys` so host-side tests can `include!` it directly.

// Elements
pub const SCENE_SELECTOR: &str = "a-scene";
pub const ASSET_SELECTOR: &str = "a-asset-item, img, audio";
pub const LOADING_SCREEN_ID: &str = "loading-screen";
pub const LOADING_PROGRESS_ID: &str = "loading-progress";
pub const AUDIO_BUTTON_ID: &str = "start-audio";
pub const VOLUME_SLIDER_ID: &str = "volume-slider";
pub const BACKGROUND_AUDIO_ID: &str = "background-audio";
pub const CLICK_SOUND_ID: &str = "click-sound";
pub const OBJECT_ID: &str = "idol";
pub const EMITTER_ID: &str = "particles";

// Scene components and attributes
pub const SCENE_HAS_LOADED: &str = "hasLoaded";
pub const EMITTER_COMPONENT: &str = "particle-system";
pub const FEEDBACK_ANIMATION_COMPONENT: &str = "animation__feedback";
pub const DRIFT_ANIMATION_COMPONENT: &str = "animation__drift";
pub const ATTR_AMBIENT_COUNT: &str = "data-ambient-particles";
pub const ATTR_FEEDBACK: &str = "data-feedback";
pub const FEEDBACK_ANIMATION: &str = "animation";
pub const AMBIENT_COLOR: &str = "#ffd27f";

// Events
pub const EV_LOADED: &str = "loaded";
pub const EV_CANPLAYTHROUGH: &str = "canplaythrough";
pub const EV_MODEL_ERROR: &str = "model-error";
pub const EV_ERROR: &str = "error";
pub const EV_CLICK: &str = "click";
pub const EV_INPUT: &str = "input";
pub const EV_RESIZE: &str = "resize";

// Affordance and notification styling
pub const LABEL_PLAY: &str = "Play Audio";
pub const LABEL_PAUSE: &str = "Pause Audio";
pub const ACTIVE_CLASS: &str = "active";
pub const NOTIFICATION_CLASS: &str = "notification";
pub const ERROR_CLASS: &str = "error-message";
pub const AMBIENT_CLASS: &str = "ambient-particle";

/// Audio elements announce completion with `canplaythrough`, everything
/// else with `loaded`.
#[inline]
pub fn completion_event_for(tag_name: &str) -> &'static str {
    if tag_name.eq_ignore_ascii_case("audio") {
        EV_CANPLAYTHROUGH
    } else {
        EV_LOADED
    }
}

#[inline]
pub fn affordance_label(playing: bool) -> &'static str {
    if playing {
        LABEL_PAUSE
    } else {
        LABEL_PLAY
    }
}

#[inline]
pub fn notification_class(is_error: bool) -> &'static str {
    if is_error {
        ERROR_CLASS
    } else {
        NOTIFICATION_CLASS
    }
}

#[inline]
pub fn progress_label(percent: u8) -> String {
    format!("{}%", percent)
}

#[inline]
pub fn parse_ambient_count(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}

/// Slider values arrive as strings; anything unparsable is dropped.
#[inline]
pub fn parse_volume(raw: &str) -> Option<f32> {
    raw.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}
