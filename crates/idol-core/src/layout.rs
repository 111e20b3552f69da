use crate::config::LayoutConfig;
use crate::host::{Entity, Page, Scene, SceneCommand};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutPreset {
    Compact,
    Wide,
}

/// `width < breakpoint` is compact; the breakpoint itself is already wide.
#[inline]
pub fn preset_for_width(width: f64, breakpoint: f64) -> LayoutPreset {
    if width < breakpoint {
        LayoutPreset::Compact
    } else {
        LayoutPreset::Wide
    }
}

pub struct LayoutAdapter {
    config: LayoutConfig,
    current: Option<LayoutPreset>,
}

impl LayoutAdapter {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            current: None,
        }
    }

    pub fn position_for(&self, preset: LayoutPreset) -> Vec3 {
        match preset {
            LayoutPreset::Compact => self.config.compact_position,
            LayoutPreset::Wide => self.config.wide_position,
        }
    }

    /// Last preset applied, if any.
    pub fn current(&self) -> Option<LayoutPreset> {
        self.current
    }

    /// Place the object (and its emitter) for the current viewport width.
    /// A no-op until the object is available.
    pub fn apply<H: Scene + Page + ?Sized>(
        &mut self,
        host: &mut H,
        object_available: bool,
    ) -> Option<LayoutPreset> {
        if !object_available || !host.has_entity(Entity::Object) {
            return None;
        }
        let width = host.viewport_width();
        let preset = preset_for_width(width, self.config.breakpoint);
        let cmd = SceneCommand::Position(self.position_for(preset));
        if let Err(e) = host.apply(Entity::Object, &cmd) {
            log::warn!("[layout] object position: {}", e);
        }
        if host.has_entity(Entity::Emitter) {
            if let Err(e) = host.apply(Entity::Emitter, &cmd) {
                log::warn!("[layout] emitter position: {}", e);
            }
        }
        if self.current != Some(preset) {
            log::info!("[layout] width {} -> {:?}", width, preset);
        }
        self.current = Some(preset);
        Some(preset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive_on_the_compact_side() {
        assert_eq!(preset_for_width(375.0, 768.0), LayoutPreset::Compact);
        assert_eq!(preset_for_width(767.0, 768.0), LayoutPreset::Compact);
        assert_eq!(preset_for_width(767.9, 768.0), LayoutPreset::Compact);
        assert_eq!(preset_for_width(768.0, 768.0), LayoutPreset::Wide);
        assert_eq!(preset_for_width(1024.0, 768.0), LayoutPreset::Wide);
    }

    #[test]
    fn default_positions_differ_by_depth_only() {
        let adapter = LayoutAdapter::new(LayoutConfig::default());
        let c = adapter.position_for(LayoutPreset::Compact);
        let w = adapter.position_for(LayoutPreset::Wide);
        assert_eq!(c, Vec3::new(0.0, 0.0, -2.2));
        assert_eq!(w, Vec3::new(0.0, 0.0, -3.0));
    }
}
