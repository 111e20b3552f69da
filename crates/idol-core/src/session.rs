//! One page session: owns every component and routes signals between them.
//!
//! The host delivers collaborator events as [`Signal`]s through
//! [`Session::handle`] and advances the clock with [`Session::tick`]. All
//! times are `Duration`s since session start.

use crate::ambient::AmbientField;
use crate::audio::{AudioController, AudioState};
use crate::config::{ParticleVariant, SessionConfig};
use crate::error::{ConfigError, Failure, FailureKind};
use crate::host::{Host, Track};
use crate::interaction::InteractionHandler;
use crate::layout::{LayoutAdapter, LayoutPreset};
use crate::loading::{AssetId, LoadState, LoadTracker};
use crate::notify::{Notification, NotificationId, NotificationKind, Notifier};
use crate::timer::{Expired, TimerQueue};
use std::time::Duration;

/// Events from the scene, media and page collaborators.
#[derive(Clone, Debug, PartialEq)]
pub enum Signal {
    /// Per-asset `loaded` / `canplaythrough`.
    AssetLoaded(AssetId),
    /// Scene `loaded`; authoritative readiness.
    SceneLoaded,
    ModelError(String),
    /// Background track `canplaythrough`.
    MediaReady,
    /// Background track `error`.
    MediaError(String),
    PlayResolved(Track),
    PlayRejected(Track, String),
    /// Play/pause control pressed.
    ToggleAudio,
    VolumeChanged(f32),
    ObjectClicked,
    Resized,
}

/// Delayed work owned by the session's timer queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    RevealScene,
    RemoveOverlay,
    RevertScale,
    DisableEmitter,
    FadeNotification(NotificationId),
    RemoveNotification(NotificationId),
}

type ReadyHook = Box<dyn FnMut()>;
type ErrorHook = Box<dyn FnMut(&Failure)>;

pub struct Session<H: Host> {
    host: H,
    config: SessionConfig,
    timers: TimerQueue<Task>,
    notifier: Notifier,
    loading: LoadTracker,
    audio: AudioController,
    interaction: InteractionHandler,
    layout: LayoutAdapter,
    ambient: Option<AmbientField>,
    ready_hooks: Vec<ReadyHook>,
    error_hooks: Vec<ErrorHook>,
}

impl<H: Host> Session<H> {
    pub fn new(mut host: H, config: SessionConfig, total_assets: usize) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut audio = AudioController::new(config.initial_volume, &config.messages);
        audio.set_volume(&mut host, config.initial_volume);
        let ambient = match &config.particles {
            ParticleVariant::Ambient(a) => Some(AmbientField::generate(a)),
            _ => None,
        };
        log::info!(
            "[session] start: {} assets, particles {:?}",
            total_assets,
            match &config.particles {
                ParticleVariant::None => "none",
                ParticleVariant::Burst { .. } => "burst",
                ParticleVariant::Ambient(_) => "ambient",
            }
        );
        Ok(Self {
            notifier: Notifier::new(&config.timings),
            loading: LoadTracker::new(total_assets, &config.timings),
            interaction: InteractionHandler::new(
                config.feedback.clone(),
                config.particles.clone(),
                config.autostart_requires_media_ready,
            ),
            layout: LayoutAdapter::new(config.layout.clone()),
            timers: TimerQueue::new(),
            host,
            config,
            audio,
            ambient,
            ready_hooks: Vec::new(),
            error_hooks: Vec::new(),
        })
    }

    /// Run `hook` on the readiness edge. Hooks fire in attachment order;
    /// attaching after readiness runs the hook immediately.
    pub fn on_ready(&mut self, mut hook: impl FnMut() + 'static) {
        if self.loading.is_ready() {
            hook();
        }
        self.ready_hooks.push(Box::new(hook));
    }

    /// Run `hook` for every user-visible failure, in attachment order.
    pub fn on_error(&mut self, hook: impl FnMut(&Failure) + 'static) {
        self.error_hooks.push(Box::new(hook));
    }

    pub fn handle(&mut self, signal: Signal, now: Duration) {
        match signal {
            Signal::AssetLoaded(asset) => {
                self.loading.asset_loaded(&mut self.host, asset);
            }
            Signal::SceneLoaded => self.scene_loaded(now),
            Signal::ModelError(detail) => {
                let failure = self
                    .loading
                    .model_error(detail, self.config.messages.model_error);
                self.report(failure, now);
            }
            Signal::MediaReady => self.audio.media_can_play_through(),
            Signal::MediaError(detail) => {
                if let Some(failure) = self.audio.media_error(&mut self.host, detail) {
                    self.report(failure, now);
                }
            }
            Signal::PlayResolved(Track::Background) => self.audio.play_resolved(&mut self.host),
            Signal::PlayResolved(Track::Effect) => log::debug!("[click] sound playing"),
            Signal::PlayRejected(Track::Background, reason) => {
                if let Some(failure) = self.audio.play_rejected(reason) {
                    self.report(failure, now);
                }
            }
            Signal::PlayRejected(Track::Effect, reason) => {
                let failure = Failure::new(FailureKind::EffectFailed, "click sound rejected")
                    .with_detail(reason);
                self.report(failure, now);
            }
            Signal::ToggleAudio => {
                if let Err(failure) = self.audio.toggle(&mut self.host) {
                    self.report(failure, now);
                }
            }
            Signal::VolumeChanged(volume) => {
                self.audio.set_volume(&mut self.host, volume);
            }
            Signal::ObjectClicked => {
                let report = self.interaction.on_click(
                    &mut self.host,
                    &mut self.timers,
                    &mut self.audio,
                    now,
                );
                if let Some(Err(failure)) = report.map(|r| r.audio) {
                    self.report(failure, now);
                }
            }
            Signal::Resized => {
                self.layout.apply(&mut self.host, self.loading.is_ready());
            }
        }
    }

    fn scene_loaded(&mut self, now: Duration) {
        if !self.loading.scene_loaded(&mut self.timers, now) {
            return;
        }
        if !self.interaction.arm(&self.host) {
            let failure = Failure::new(FailureKind::FatalLoad, self.config.messages.model_missing);
            self.report(failure, now);
        }
        let preset = self.layout.apply(&mut self.host, true);
        if let Some(field) = self.ambient.as_mut() {
            if let Some(preset) = preset {
                field.recenter(self.layout.position_for(preset));
            }
            field.spawn(&mut self.host);
        }
        for hook in self.ready_hooks.iter_mut() {
            hook();
        }
    }

    /// Fire every timer due at or before `now`. Follow-up timers are
    /// scheduled from the deadline of the timer that fired, not from `now`.
    pub fn tick(&mut self, now: Duration) -> usize {
        let mut fired = 0;
        while let Some(Expired { due, task, .. }) = self.timers.pop_due(now) {
            self.run(task, due);
            fired += 1;
        }
        fired
    }

    fn run(&mut self, task: Task, at: Duration) {
        match task {
            Task::RevealScene => {
                self.loading.reveal(&mut self.host, &mut self.timers, at);
                self.notifier.show(
                    &mut self.host,
                    &mut self.timers,
                    self.config.messages.loaded,
                    NotificationKind::Info,
                    at,
                );
            }
            Task::RemoveOverlay => self.loading.remove_overlay(&mut self.host),
            Task::RevertScale => self.interaction.revert_scale(&mut self.host),
            Task::DisableEmitter => self.interaction.disable_emitter(&mut self.host),
            Task::FadeNotification(id) => {
                self.notifier.fade(&mut self.host, &mut self.timers, id, at)
            }
            Task::RemoveNotification(id) => self.notifier.remove(&mut self.host, id),
        }
    }

    /// Classify and route a failure: user-visible kinds become an error
    /// notification and reach the error hooks, the rest is only logged.
    fn report(&mut self, failure: Failure, now: Duration) {
        if !failure.kind.is_user_visible() {
            log::warn!("[session] {} ({:?})", failure, failure.detail);
            return;
        }
        log::error!("[session] {:?}: {} ({:?})", failure.kind, failure, failure.detail);
        self.notifier.show(
            &mut self.host,
            &mut self.timers,
            failure.message.clone(),
            NotificationKind::Error,
            now,
        );
        for hook in self.error_hooks.iter_mut() {
            hook(&failure);
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn load_state(&self) -> LoadState {
        self.loading.state()
    }

    pub fn progress(&self) -> u8 {
        self.loading.progress()
    }

    pub fn audio_state(&self) -> AudioState {
        self.audio.state()
    }

    pub fn audio(&self) -> &AudioController {
        &self.audio
    }

    pub fn interaction(&self) -> &InteractionHandler {
        &self.interaction
    }

    pub fn layout_preset(&self) -> Option<LayoutPreset> {
        self.layout.current()
    }

    pub fn ambient(&self) -> Option<&AmbientField> {
        self.ambient.as_ref()
    }

    pub fn notifications(&self) -> &[Notification] {
        self.notifier.live()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
