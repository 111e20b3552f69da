//! Seams to the external collaborators.
//!
//! The controller never touches the DOM, the scene graph or the media engine
//! directly. It issues fire-and-forget commands through these traits and
//! receives results back as [`crate::Signal`]s. The web front-end implements
//! them over `web-sys`; tests implement them with a recording fake.

use crate::ambient::AmbientParticle;
use crate::error::HostError;
use crate::notify::{Notification, NotificationId};
use glam::Vec3;
use std::fmt::Write as _;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Entity {
    /// The interactive 3D object.
    Object,
    /// Particle emitter kept in registration with the object.
    Emitter,
    /// One of the ambient particles spawned at readiness.
    Ambient(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Track {
    Background,
    Effect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseInOutQuad,
    EaseOutElastic,
    EaseInOutSine,
}

impl Easing {
    pub fn as_str(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInOutQuad => "easeInOutQuad",
            Easing::EaseOutElastic => "easeOutElastic",
            Easing::EaseInOutSine => "easeInOutSine",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Normal,
    Reverse,
    Alternate,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Normal => "normal",
            Direction::Reverse => "reverse",
            Direction::Alternate => "alternate",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Count(u32),
    Forever,
}

/// Declarative animation handed to the scene engine as a single attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationDescriptor {
    pub property: &'static str,
    pub from: Vec3,
    pub to: Vec3,
    pub duration: Duration,
    pub easing: Easing,
    pub direction: Direction,
    pub repeat: Repeat,
}

impl AnimationDescriptor {
    /// Render as an A-Frame style `key: value; ...` attribute string.
    pub fn to_attribute(&self) -> String {
        let mut out = String::with_capacity(128);
        let _ = write!(
            out,
            "property: {}; from: {}; to: {}; dur: {}; easing: {}; dir: {}; loop: ",
            self.property,
            vec3_attr(self.from),
            vec3_attr(self.to),
            self.duration.as_millis(),
            self.easing.as_str(),
            self.direction.as_str(),
        );
        match self.repeat {
            Repeat::Count(n) => {
                let _ = write!(out, "{}", n);
            }
            Repeat::Forever => out.push_str("true"),
        }
        out
    }
}

/// Space separated vector, the scene engine's attribute format.
#[inline]
pub fn vec3_attr(v: Vec3) -> String {
    format!("{} {} {}", v.x, v.y, v.z)
}

/// Build a vector from components read off a live scene object. Every
/// component must be present and finite, otherwise the read is rejected.
pub fn vec3_from_components(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Option<Vec3> {
    let v = Vec3::new(x? as f32, y? as f32, z? as f32);
    v.is_finite().then_some(v)
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneCommand {
    Position(Vec3),
    Scale(Vec3),
    EmitterEnabled(bool),
    Animate(AnimationDescriptor),
}

/// Visual state of the play/pause control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Affordance {
    Paused,
    Playing,
    Disabled,
}

pub trait Scene {
    fn has_entity(&self, entity: Entity) -> bool;
    /// Current scale of an entity, if the engine reports one.
    fn scale_of(&self, entity: Entity) -> Option<Vec3>;
    fn apply(&mut self, entity: Entity, command: &SceneCommand) -> Result<(), HostError>;
    fn spawn_particle(&mut self, particle: &AmbientParticle) -> Result<(), HostError>;
}

/// Media primitives. `request_play` only starts the request; the outcome
/// arrives later as `Signal::PlayResolved` / `Signal::PlayRejected`.
pub trait Media {
    fn has_track(&self, track: Track) -> bool;
    fn request_play(&mut self, track: Track) -> Result<(), HostError>;
    fn pause(&mut self, track: Track) -> Result<(), HostError>;
    fn rewind(&mut self, track: Track) -> Result<(), HostError>;
    fn set_volume(&mut self, track: Track, volume: f32) -> Result<(), HostError>;
}

pub trait Page {
    fn viewport_width(&self) -> f64;
    fn show_progress(&mut self, percent: u8);
    fn set_overlay_opacity(&mut self, opacity: f32);
    fn remove_overlay(&mut self);
    fn set_affordance(&mut self, affordance: Affordance);
    fn mount_notification(&mut self, notification: &Notification) -> Result<(), HostError>;
    fn fade_notification(&mut self, id: NotificationId);
    fn unmount_notification(&mut self, id: NotificationId);
}

pub trait Host: Scene + Media + Page {}

impl<T: Scene + Media + Page> Host for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec3_attr_uses_spaces() {
        assert_eq!(vec3_attr(Vec3::new(0.0, 0.0, -2.2)), "0 0 -2.2");
        assert_eq!(vec3_attr(Vec3::new(1.5, 1.0, 1.0)), "1.5 1 1");
    }

    #[test]
    fn reads_scale_components() {
        assert_eq!(
            vec3_from_components(Some(0.5), Some(0.5), Some(0.5)),
            Some(Vec3::splat(0.5))
        );
        assert_eq!(
            vec3_from_components(Some(1.0), Some(2.0), Some(-3.0)),
            Some(Vec3::new(1.0, 2.0, -3.0))
        );
    }

    #[test]
    fn incomplete_or_broken_scale_is_rejected() {
        assert_eq!(vec3_from_components(Some(1.0), None, Some(1.0)), None);
        assert_eq!(vec3_from_components(None, None, None), None);
        assert_eq!(vec3_from_components(Some(f64::NAN), Some(1.0), Some(1.0)), None);
        assert_eq!(vec3_from_components(Some(1.0), Some(f64::INFINITY), Some(1.0)), None);
    }

    #[test]
    fn one_shot_descriptor_renders_every_field() {
        let d = AnimationDescriptor {
            property: "scale",
            from: Vec3::ONE,
            to: Vec3::splat(1.2),
            duration: Duration::from_millis(300),
            easing: Easing::EaseInOutQuad,
            direction: Direction::Alternate,
            repeat: Repeat::Count(1),
        };
        assert_eq!(
            d.to_attribute(),
            "property: scale; from: 1 1 1; to: 1.2 1.2 1.2; dur: 300; easing: easeInOutQuad; dir: alternate; loop: 1"
        );
    }

    #[test]
    fn forever_renders_as_true() {
        let d = AnimationDescriptor {
            property: "position",
            from: Vec3::ZERO,
            to: Vec3::Y,
            duration: Duration::from_secs(2),
            easing: Easing::EaseInOutSine,
            direction: Direction::Alternate,
            repeat: Repeat::Forever,
        };
        assert!(d.to_attribute().ends_with("loop: true"));
    }
}
