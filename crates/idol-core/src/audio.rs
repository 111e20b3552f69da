//! Background audio state machine.
//!
//! `Paused --toggle/auto-start--> Starting --resolved--> Playing --toggle--> Paused`
//!
//! The controller keeps its own state and never reads play/pause back from
//! the media element. While a play request is in flight (`Starting`) further
//! toggles and auto-starts are rejected instead of racing the request.

use crate::config::Messages;
use crate::error::{Failure, FailureKind};
use crate::host::{Affordance, Media, Page, Track};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioState {
    Paused,
    /// Play requested, waiting for the media engine to resolve or reject.
    Starting,
    Playing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    PlayRequested,
    Paused,
    /// Nothing happened: a request is in flight or the media is unavailable.
    Ignored,
}

pub struct AudioController {
    state: AudioState,
    volume: f32,
    media_ready: bool,
    unavailable: bool,
    playback_rejected: &'static str,
    media_unavailable: &'static str,
}

impl AudioController {
    pub fn new(volume: f32, messages: &Messages) -> Self {
        Self {
            state: AudioState::Paused,
            volume: volume.clamp(0.0, 1.0),
            media_ready: false,
            unavailable: false,
            playback_rejected: messages.playback_rejected,
            media_unavailable: messages.media_unavailable,
        }
    }

    pub fn state(&self) -> AudioState {
        self.state
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_playing(&self) -> bool {
        self.state == AudioState::Playing
    }

    /// `canplaythrough` has been seen for the background track.
    pub fn media_ready(&self) -> bool {
        self.media_ready
    }

    /// `false` once the track failed to load; the control stays disabled.
    pub fn is_available(&self) -> bool {
        !self.unavailable
    }

    /// Explicit user toggle.
    pub fn toggle<H: Media + Page + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> Result<ToggleOutcome, Failure> {
        if self.unavailable {
            log::debug!("[audio] toggle ignored: media unavailable");
            return Ok(ToggleOutcome::Ignored);
        }
        match self.state {
            AudioState::Paused => self.start(host),
            AudioState::Starting => {
                log::debug!("[audio] toggle ignored: play request in flight");
                Ok(ToggleOutcome::Ignored)
            }
            AudioState::Playing => {
                self.pause(host);
                Ok(ToggleOutcome::Paused)
            }
        }
    }

    /// Start path used by interaction; only acts from `Paused`.
    pub fn auto_start<H: Media + Page + ?Sized>(
        &mut self,
        host: &mut H,
        require_media_ready: bool,
    ) -> Result<ToggleOutcome, Failure> {
        if self.unavailable || self.state != AudioState::Paused {
            return Ok(ToggleOutcome::Ignored);
        }
        if require_media_ready && !self.media_ready {
            log::debug!("[audio] auto-start skipped: track not playable yet");
            return Ok(ToggleOutcome::Ignored);
        }
        self.start(host)
    }

    fn start<H: Media + Page + ?Sized>(&mut self, host: &mut H) -> Result<ToggleOutcome, Failure> {
        match host.request_play(Track::Background) {
            Ok(()) => {
                self.state = AudioState::Starting;
                log::debug!("[audio] play requested");
                Ok(ToggleOutcome::PlayRequested)
            }
            Err(e) => {
                log::error!("[audio] play request failed: {}", e);
                Err(Failure::new(FailureKind::PlaybackRejected, self.playback_rejected)
                    .with_detail(e.to_string()))
            }
        }
    }

    fn pause<H: Media + Page + ?Sized>(&mut self, host: &mut H) {
        if let Err(e) = host.pause(Track::Background) {
            log::warn!("[audio] pause failed: {}", e);
        }
        self.state = AudioState::Paused;
        host.set_affordance(Affordance::Paused);
        log::info!("[audio] paused");
    }

    pub fn play_resolved<P: Page + ?Sized>(&mut self, page: &mut P) {
        if self.state != AudioState::Starting || self.unavailable {
            log::debug!("[audio] stale play resolution in {:?}", self.state);
            return;
        }
        self.state = AudioState::Playing;
        page.set_affordance(Affordance::Playing);
        log::info!("[audio] playing");
    }

    /// Autoplay policy or similar refusal. Leaves the affordance untouched.
    pub fn play_rejected(&mut self, reason: impl Into<String>) -> Option<Failure> {
        let reason = reason.into();
        if self.state != AudioState::Starting {
            log::debug!("[audio] stale play rejection: {}", reason);
            return None;
        }
        self.state = AudioState::Paused;
        log::error!("[audio] play rejected: {}", reason);
        Some(Failure::new(FailureKind::PlaybackRejected, self.playback_rejected).with_detail(reason))
    }

    /// Returns the clamped volume actually applied.
    pub fn set_volume<M: Media + ?Sized>(&mut self, media: &mut M, volume: f32) -> f32 {
        if !volume.is_finite() {
            log::warn!("[audio] ignoring volume {}", volume);
            return self.volume;
        }
        self.volume = volume.clamp(0.0, 1.0);
        if let Err(e) = media.set_volume(Track::Background, self.volume) {
            log::warn!("[audio] set volume failed: {}", e);
        }
        self.volume
    }

    pub fn media_can_play_through(&mut self) {
        if !self.media_ready {
            self.media_ready = true;
            log::info!("[audio] track ready");
        }
    }

    /// Decode/network failure. Disables the control for the rest of the
    /// session; only the first report produces a failure.
    pub fn media_error<P: Page + ?Sized>(
        &mut self,
        page: &mut P,
        detail: impl Into<String>,
    ) -> Option<Failure> {
        if self.unavailable {
            return None;
        }
        let detail = detail.into();
        self.unavailable = true;
        self.state = AudioState::Paused;
        page.set_affordance(Affordance::Disabled);
        log::error!("[audio] media error: {}", detail);
        Some(Failure::new(FailureKind::MediaUnavailable, self.media_unavailable).with_detail(detail))
    }
}
