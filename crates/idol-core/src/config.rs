use crate::constants::*;
use crate::error::ConfigError;
use crate::host::Easing;
use glam::Vec3;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct Timings {
    pub settle_delay: Duration,
    pub overlay_remove_delay: Duration,
    pub info_display: Duration,
    pub error_display: Duration,
    pub notification_fade: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            settle_delay: SETTLE_DELAY,
            overlay_remove_delay: OVERLAY_REMOVE_DELAY,
            info_display: INFO_DISPLAY,
            error_display: ERROR_DISPLAY,
            notification_fade: NOTIFICATION_FADE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    pub breakpoint: f64,
    pub compact_position: Vec3,
    pub wide_position: Vec3,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint: LAYOUT_BREAKPOINT_PX,
            compact_position: Vec3::from_array(COMPACT_POSITION),
            wide_position: Vec3::from_array(WIDE_POSITION),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackStyle {
    /// Set the enlarged scale, revert to baseline after `duration`.
    ScalePulse,
    /// Hand the scene a one-shot scale animation lasting `duration`.
    Animation { easing: Easing },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeedbackConfig {
    pub style: FeedbackStyle,
    pub scale_factor: f32,
    pub duration: Duration,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            style: FeedbackStyle::ScalePulse,
            scale_factor: FEEDBACK_SCALE_FACTOR,
            duration: SCALE_REVERT_DELAY,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AmbientConfig {
    pub count: usize,
    pub seed: u64,
    pub center: Vec3,
    pub extent: Vec3,
}

impl AmbientConfig {
    /// Centred on the wide placement; the session moves the field onto the
    /// placement chosen at readiness before spawning it.
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            seed: AMBIENT_SEED,
            center: Vec3::from_array(WIDE_POSITION),
            extent: Vec3::from_array(AMBIENT_EXTENT),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParticleVariant {
    None,
    /// One reusable emitter switched on for `duration` per click.
    Burst { duration: Duration },
    /// Always-on field created once at readiness; clicks don't touch it.
    Ambient(AmbientConfig),
}

impl Default for ParticleVariant {
    fn default() -> Self {
        ParticleVariant::Burst {
            duration: EMITTER_BURST,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Messages {
    pub loaded: &'static str,
    pub model_error: &'static str,
    pub model_missing: &'static str,
    pub playback_rejected: &'static str,
    pub media_unavailable: &'static str,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            loaded: MSG_LOADED,
            model_error: MSG_MODEL_ERROR,
            model_missing: MSG_MODEL_MISSING,
            playback_rejected: MSG_PLAYBACK_REJECTED,
            media_unavailable: MSG_MEDIA_UNAVAILABLE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub timings: Timings,
    pub layout: LayoutConfig,
    pub feedback: FeedbackConfig,
    pub particles: ParticleVariant,
    pub initial_volume: f32,
    /// Only auto-start background audio on click once the track reported
    /// `canplaythrough`.
    pub autostart_requires_media_ready: bool,
    pub messages: Messages,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            layout: LayoutConfig::default(),
            feedback: FeedbackConfig::default(),
            particles: ParticleVariant::default(),
            initial_volume: DEFAULT_VOLUME,
            autostart_requires_media_ready: false,
            messages: Messages::default(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.initial_volume) {
            return Err(ConfigError::Volume(self.initial_volume));
        }
        if self.layout.breakpoint.is_nan() || self.layout.breakpoint <= 0.0 {
            return Err(ConfigError::Breakpoint(self.layout.breakpoint));
        }
        if self.feedback.scale_factor.is_nan() || self.feedback.scale_factor <= 0.0 {
            return Err(ConfigError::ScaleFactor(self.feedback.scale_factor));
        }
        if self.feedback.duration.is_zero() {
            return Err(ConfigError::ZeroDuration("feedback duration"));
        }
        let t = &self.timings;
        for (name, d) in [
            ("info display", t.info_display),
            ("error display", t.error_display),
            ("notification fade", t.notification_fade),
        ] {
            if d.is_zero() {
                return Err(ConfigError::ZeroDuration(name));
            }
        }
        match &self.particles {
            ParticleVariant::Burst { duration } if duration.is_zero() => {
                Err(ConfigError::ZeroDuration("emitter burst"))
            }
            ParticleVariant::Ambient(a) if a.count > AMBIENT_MAX_PARTICLES => {
                Err(ConfigError::TooManyParticles {
                    count: a.count,
                    max: AMBIENT_MAX_PARTICLES,
                })
            }
            _ => Ok(()),
        }
    }
}
