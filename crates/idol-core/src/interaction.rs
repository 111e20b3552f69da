//! Click/tap handling on the interactive object.
//!
//! A click runs four independent steps: feedback effect, click sound,
//! particle burst and background-audio auto-start. Each step contains its own
//! failures so one broken step never blocks the others.
//!
//! Timed effects go through the session's cancellable timers. A click that
//! lands while a scale revert or emitter shutdown is pending cancels it and
//! schedules a fresh one, so the object always settles back to its baseline.

use crate::audio::{AudioController, ToggleOutcome};
use crate::config::{FeedbackConfig, FeedbackStyle, ParticleVariant};
use crate::error::{Failure, FailureKind};
use crate::host::{
    AnimationDescriptor, Direction, Entity, Host, Repeat, Scene, SceneCommand, Track,
};
use crate::session::Task;
use crate::timer::{TimerId, TimerQueue};
use glam::Vec3;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackState {
    Idle,
    /// Scale is enlarged; `revert` restores the baseline.
    Pulsing { revert: TimerId },
}

/// What a single click did. Failures of the sound and feedback steps are
/// logged, not returned.
#[derive(Clone, Debug, PartialEq)]
pub struct ClickReport {
    pub feedback: bool,
    pub sound: bool,
    pub burst: bool,
    pub audio: Result<ToggleOutcome, Failure>,
}

pub struct InteractionHandler {
    feedback: FeedbackConfig,
    particles: ParticleVariant,
    autostart_requires_media_ready: bool,
    armed: bool,
    baseline: Vec3,
    state: FeedbackState,
    emitter_off: Option<TimerId>,
    clicks: u64,
}

impl InteractionHandler {
    pub fn new(
        feedback: FeedbackConfig,
        particles: ParticleVariant,
        autostart_requires_media_ready: bool,
    ) -> Self {
        Self {
            feedback,
            particles,
            autostart_requires_media_ready,
            armed: false,
            baseline: Vec3::ONE,
            state: FeedbackState::Idle,
            emitter_off: None,
            clicks: 0,
        }
    }

    /// Attach to the object. Only valid once the scene is ready; the current
    /// scale becomes the baseline the feedback returns to.
    pub fn arm<S: Scene + ?Sized>(&mut self, scene: &S) -> bool {
        if !scene.has_entity(Entity::Object) {
            log::error!("[click] object not found, interaction stays disabled");
            return false;
        }
        if let Some(scale) = scene.scale_of(Entity::Object) {
            self.baseline = scale;
        }
        self.armed = true;
        log::info!("[click] armed, baseline scale {:?}", self.baseline);
        true
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn baseline(&self) -> Vec3 {
        self.baseline
    }

    pub fn enlarged(&self) -> Vec3 {
        self.baseline * self.feedback.scale_factor
    }

    pub fn feedback_state(&self) -> FeedbackState {
        self.state
    }

    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    /// Returns `None` when not armed yet.
    pub fn on_click<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        timers: &mut TimerQueue<Task>,
        audio: &mut AudioController,
        now: Duration,
    ) -> Option<ClickReport> {
        if !self.armed {
            log::debug!("[click] ignored before scene ready");
            return None;
        }
        self.clicks += 1;
        log::info!("[click] object clicked (#{})", self.clicks);

        let feedback = self.run_feedback(host, timers, now);
        let sound = play_click_sound(host);
        let burst = self.run_burst(host, timers, now);
        let audio = audio.auto_start(host, self.autostart_requires_media_ready);

        Some(ClickReport {
            feedback,
            sound,
            burst,
            audio,
        })
    }

    fn run_feedback<S: Scene + ?Sized>(
        &mut self,
        scene: &mut S,
        timers: &mut TimerQueue<Task>,
        now: Duration,
    ) -> bool {
        match self.feedback.style {
            FeedbackStyle::ScalePulse => {
                if let FeedbackState::Pulsing { revert } = self.state {
                    timers.cancel(revert);
                }
                let enlarged = self.enlarged();
                if let Err(e) = scene.apply(Entity::Object, &SceneCommand::Scale(enlarged)) {
                    log::warn!("[click] scale pulse: {}", e);
                    self.state = FeedbackState::Idle;
                    return false;
                }
                let revert = timers.schedule(now, self.feedback.duration, Task::RevertScale);
                self.state = FeedbackState::Pulsing { revert };
                true
            }
            FeedbackStyle::Animation { easing } => {
                let descriptor = AnimationDescriptor {
                    property: "scale",
                    from: self.baseline,
                    to: self.enlarged(),
                    duration: self.feedback.duration,
                    easing,
                    direction: Direction::Alternate,
                    repeat: Repeat::Count(1),
                };
                match scene.apply(Entity::Object, &SceneCommand::Animate(descriptor)) {
                    Ok(()) => true,
                    Err(e) => {
                        log::warn!("[click] feedback animation: {}", e);
                        false
                    }
                }
            }
        }
    }

    pub(crate) fn revert_scale<S: Scene + ?Sized>(&mut self, scene: &mut S) {
        self.state = FeedbackState::Idle;
        if let Err(e) = scene.apply(Entity::Object, &SceneCommand::Scale(self.baseline)) {
            log::warn!("[click] scale revert: {}", e);
        }
    }

    fn run_burst<S: Scene + ?Sized>(
        &mut self,
        scene: &mut S,
        timers: &mut TimerQueue<Task>,
        now: Duration,
    ) -> bool {
        let duration = match &self.particles {
            ParticleVariant::Burst { duration } => *duration,
            _ => return false,
        };
        if !scene.has_entity(Entity::Emitter) {
            return false;
        }
        if let Some(pending) = self.emitter_off.take() {
            timers.cancel(pending);
        }
        if let Err(e) = scene.apply(Entity::Emitter, &SceneCommand::EmitterEnabled(true)) {
            log::warn!("[click] emitter enable: {}", e);
            return false;
        }
        self.emitter_off = Some(timers.schedule(now, duration, Task::DisableEmitter));
        true
    }

    pub(crate) fn disable_emitter<S: Scene + ?Sized>(&mut self, scene: &mut S) {
        self.emitter_off = None;
        if let Err(e) = scene.apply(Entity::Emitter, &SceneCommand::EmitterEnabled(false)) {
            log::warn!("[click] emitter disable: {}", e);
        }
    }

    pub fn emitter_active(&self) -> bool {
        self.emitter_off.is_some()
    }
}

/// Best effort: rewind and request play. Never surfaced to the user.
fn play_click_sound<H: Host + ?Sized>(host: &mut H) -> bool {
    if !host.has_track(Track::Effect) {
        return false;
    }
    let res = host
        .rewind(Track::Effect)
        .and_then(|_| host.request_play(Track::Effect));
    match res {
        Ok(()) => true,
        Err(e) => {
            let failure = Failure::new(FailureKind::EffectFailed, "click sound").with_detail(e.to_string());
            log::warn!("[click] {}: {:?}", failure, failure.detail);
            false
        }
    }
}
