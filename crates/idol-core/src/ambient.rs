//! Always-on ambient particle field.
//!
//! Particles are generated once from a seed and spawned at readiness. Their
//! placement and animation parameters never change afterwards; the scene
//! engine runs the looping animations on its own.

use crate::config::AmbientConfig;
use crate::constants::*;
use crate::host::{AnimationDescriptor, Direction, Easing, Repeat, Scene};
use glam::Vec3;
use rand::prelude::*;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct AmbientParticle {
    pub index: usize,
    pub position: Vec3,
    pub radius: f32,
    pub drift: AnimationDescriptor,
}

pub struct AmbientField {
    particles: Vec<AmbientParticle>,
    center: Vec3,
    spawned: bool,
}

impl AmbientField {
    pub fn generate(config: &AmbientConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let count = config.count.min(AMBIENT_MAX_PARTICLES);
        let particles = (0..count)
            .map(|index| {
                let offset = Vec3::new(
                    rng.gen_range(-1.0f32..=1.0) * config.extent.x,
                    rng.gen_range(-1.0f32..=1.0) * config.extent.y,
                    rng.gen_range(-1.0f32..=1.0) * config.extent.z,
                );
                let position = config.center + offset;
                let lift = rng.gen_range(AMBIENT_DRIFT_MIN..=AMBIENT_DRIFT_MAX);
                let period = rng.gen_range(AMBIENT_PERIOD_MIN_MS..=AMBIENT_PERIOD_MAX_MS);
                AmbientParticle {
                    index,
                    position,
                    radius: rng.gen_range(AMBIENT_RADIUS_MIN..=AMBIENT_RADIUS_MAX),
                    drift: AnimationDescriptor {
                        property: "position",
                        from: position,
                        to: position + Vec3::Y * lift,
                        duration: Duration::from_millis(period),
                        easing: Easing::EaseInOutSine,
                        direction: Direction::Alternate,
                        repeat: Repeat::Forever,
                    },
                }
            })
            .collect();
        Self {
            particles,
            center: config.center,
            spawned: false,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Shift the whole field so it surrounds `center`. Only possible before
    /// the particles are spawned; returns whether the field moved.
    pub fn recenter(&mut self, center: Vec3) -> bool {
        if self.spawned {
            log::warn!("[ambient] field already spawned, not moving it");
            return false;
        }
        let delta = center - self.center;
        for p in self.particles.iter_mut() {
            p.position += delta;
            p.drift.from += delta;
            p.drift.to += delta;
        }
        self.center = center;
        true
    }

    pub fn particles(&self) -> &[AmbientParticle] {
        &self.particles
    }

    pub fn is_spawned(&self) -> bool {
        self.spawned
    }

    /// Hand every particle to the scene once. Returns how many were accepted.
    pub fn spawn<S: Scene + ?Sized>(&mut self, scene: &mut S) -> usize {
        if self.spawned {
            return 0;
        }
        self.spawned = true;
        let mut accepted = 0;
        for p in &self.particles {
            match scene.spawn_particle(p) {
                Ok(()) => accepted += 1,
                Err(e) => log::warn!("[ambient] particle {}: {}", p.index, e),
            }
        }
        log::info!("[ambient] spawned {}/{} particles", accepted, self.particles.len());
        accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_field() {
        let cfg = AmbientConfig::with_count(24);
        let a = AmbientField::generate(&cfg);
        let b = AmbientField::generate(&cfg);
        assert_eq!(a.particles(), b.particles());
        assert_eq!(a.particles().len(), 24);
    }

    #[test]
    fn particles_stay_inside_the_box() {
        let cfg = AmbientConfig::with_count(64);
        let field = AmbientField::generate(&cfg);
        for p in field.particles() {
            let d = (p.position - cfg.center).abs();
            assert!(d.x <= cfg.extent.x + 1e-5);
            assert!(d.y <= cfg.extent.y + 1e-5);
            assert!(d.z <= cfg.extent.z + 1e-5);
            assert!(p.radius >= AMBIENT_RADIUS_MIN && p.radius <= AMBIENT_RADIUS_MAX);
            assert_eq!(p.drift.from, p.position);
            assert!(p.drift.to.y > p.position.y);
            assert_eq!(p.drift.repeat, Repeat::Forever);
        }
    }

    #[test]
    fn recenter_moves_particles_and_drift_together() {
        let cfg = AmbientConfig::with_count(8);
        let original = AmbientField::generate(&cfg);
        let mut field = AmbientField::generate(&cfg);
        let target = Vec3::new(0.0, 0.0, -2.2);
        assert!(field.recenter(target));
        assert_eq!(field.center(), target);
        let delta = target - cfg.center;
        for (moved, p) in field.particles().iter().zip(original.particles()) {
            assert!((moved.position - (p.position + delta)).abs().max_element() < 1e-5);
            assert_eq!(moved.drift.from, moved.position);
            assert!((moved.drift.to - (p.drift.to + delta)).abs().max_element() < 1e-5);
        }
    }

    #[test]
    fn spawned_field_stays_put() {
        struct Sink;
        impl Scene for Sink {
            fn has_entity(&self, _: crate::host::Entity) -> bool {
                true
            }
            fn scale_of(&self, _: crate::host::Entity) -> Option<Vec3> {
                None
            }
            fn apply(
                &mut self,
                _: crate::host::Entity,
                _: &crate::host::SceneCommand,
            ) -> Result<(), crate::error::HostError> {
                Ok(())
            }
            fn spawn_particle(&mut self, _: &AmbientParticle) -> Result<(), crate::error::HostError> {
                Ok(())
            }
        }
        let mut field = AmbientField::generate(&AmbientConfig::with_count(4));
        assert_eq!(field.spawn(&mut Sink), 4);
        let before = field.particles().to_vec();
        assert!(!field.recenter(Vec3::ZERO));
        assert_eq!(field.particles(), &before[..]);
        assert_eq!(field.spawn(&mut Sink), 0);
    }

    #[test]
    fn count_is_capped() {
        let cfg = AmbientConfig::with_count(AMBIENT_MAX_PARTICLES + 10);
        assert_eq!(
            AmbientField::generate(&cfg).particles().len(),
            AMBIENT_MAX_PARTICLES
        );
    }
}
