// Recording host shared by the session integration tests.

#![allow(dead_code)]

use glam::Vec3;
use idol_core::*;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Apply(Entity, SceneCommand),
    Spawn(usize),
    Play(Track),
    Pause(Track),
    Rewind(Track),
    Volume(Track, f32),
    Progress(u8),
    OverlayOpacity(f32),
    OverlayRemoved,
    Affordance(Affordance),
    Mount(NotificationId, NotificationKind, String),
    Fade(NotificationId),
    Unmount(NotificationId),
}

pub struct FakeHost {
    pub calls: Vec<Call>,
    pub width: f64,
    pub entities: Vec<Entity>,
    pub object_scale: Option<Vec3>,
    pub tracks: Vec<Track>,
    /// `request_play` throws synchronously for these tracks.
    pub fail_play: Vec<Track>,
    pub fail_apply: Vec<Entity>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            width: 1024.0,
            entities: vec![Entity::Object, Entity::Emitter],
            object_scale: Some(Vec3::ONE),
            tracks: vec![Track::Background, Track::Effect],
            fail_play: Vec::new(),
            fail_apply: Vec::new(),
        }
    }
}

impl FakeHost {
    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn plays(&self, track: Track) -> usize {
        self.count(|c| *c == Call::Play(track))
    }

    pub fn last_scale(&self) -> Option<Vec3> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Apply(Entity::Object, SceneCommand::Scale(s)) => Some(*s),
            _ => None,
        })
    }

    pub fn positions(&self, entity: Entity) -> Vec<Vec3> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Apply(e, SceneCommand::Position(p)) if *e == entity => Some(*p),
                _ => None,
            })
            .collect()
    }

    pub fn emitter_toggles(&self) -> Vec<bool> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Apply(Entity::Emitter, SceneCommand::EmitterEnabled(on)) => Some(*on),
                _ => None,
            })
            .collect()
    }

    pub fn progress(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Progress(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    pub fn mounted(&self) -> Vec<(NotificationKind, String)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Mount(_, kind, msg) => Some((*kind, msg.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.mounted()
            .into_iter()
            .filter(|(k, _)| *k == NotificationKind::Error)
            .map(|(_, m)| m)
            .collect()
    }

    pub fn affordances(&self) -> Vec<Affordance> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Affordance(a) => Some(*a),
                _ => None,
            })
            .collect()
    }
}

impl Scene for FakeHost {
    fn has_entity(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    fn scale_of(&self, entity: Entity) -> Option<Vec3> {
        match entity {
            Entity::Object => self.object_scale,
            _ => None,
        }
    }

    fn apply(&mut self, entity: Entity, command: &SceneCommand) -> Result<(), HostError> {
        if self.fail_apply.contains(&entity) {
            return Err(HostError::Call("apply refused".into()));
        }
        if !self.entities.contains(&entity) {
            return Err(HostError::MissingEntity(entity));
        }
        self.calls.push(Call::Apply(entity, command.clone()));
        Ok(())
    }

    fn spawn_particle(&mut self, particle: &AmbientParticle) -> Result<(), HostError> {
        self.entities.push(Entity::Ambient(particle.index));
        self.calls.push(Call::Spawn(particle.index));
        Ok(())
    }
}

impl Media for FakeHost {
    fn has_track(&self, track: Track) -> bool {
        self.tracks.contains(&track)
    }

    fn request_play(&mut self, track: Track) -> Result<(), HostError> {
        if self.fail_play.contains(&track) {
            return Err(HostError::Call("NotAllowedError".into()));
        }
        if !self.tracks.contains(&track) {
            return Err(HostError::MissingTrack(track));
        }
        self.calls.push(Call::Play(track));
        Ok(())
    }

    fn pause(&mut self, track: Track) -> Result<(), HostError> {
        self.calls.push(Call::Pause(track));
        Ok(())
    }

    fn rewind(&mut self, track: Track) -> Result<(), HostError> {
        self.calls.push(Call::Rewind(track));
        Ok(())
    }

    fn set_volume(&mut self, track: Track, volume: f32) -> Result<(), HostError> {
        self.calls.push(Call::Volume(track, volume));
        Ok(())
    }
}

impl Page for FakeHost {
    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn show_progress(&mut self, percent: u8) {
        self.calls.push(Call::Progress(percent));
    }

    fn set_overlay_opacity(&mut self, opacity: f32) {
        self.calls.push(Call::OverlayOpacity(opacity));
    }

    fn remove_overlay(&mut self) {
        self.calls.push(Call::OverlayRemoved);
    }

    fn set_affordance(&mut self, affordance: Affordance) {
        self.calls.push(Call::Affordance(affordance));
    }

    fn mount_notification(&mut self, n: &Notification) -> Result<(), HostError> {
        self.calls.push(Call::Mount(n.id, n.kind, n.message.clone()));
        Ok(())
    }

    fn fade_notification(&mut self, id: NotificationId) {
        self.calls.push(Call::Fade(id));
    }

    fn unmount_notification(&mut self, id: NotificationId) {
        self.calls.push(Call::Unmount(id));
    }
}

#[inline]
pub fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

pub fn session_with(host: FakeHost, config: SessionConfig, assets: usize) -> Session<FakeHost> {
    match Session::new(host, config, assets) {
        Ok(s) => s,
        Err(e) => panic!("config rejected: {}", e),
    }
}

pub fn session(assets: usize) -> Session<FakeHost> {
    session_with(FakeHost::default(), SessionConfig::default(), assets)
}

/// Session that has already passed the readiness edge at t=0.
pub fn ready_session() -> Session<FakeHost> {
    let mut s = session(1);
    s.handle(Signal::SceneLoaded, ms(0));
    s
}
