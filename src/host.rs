//! `web-sys` implementation of the controller's host traits.

use crate::audio::MediaTracks;
use crate::constants::*;
use crate::dom::{self, js_error};
use crate::overlay::LoadingOverlay;
use crate::ui;
use fnv::FnvHashMap;
use glam::Vec3;
use idol_core::{
    vec3_attr, vec3_from_components, Affordance, AmbientParticle, Entity, HostError, Media,
    Notification, NotificationId, Page, Scene, SceneCommand, Track,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct WebHost {
    window: web::Window,
    document: web::Document,
    scene: web::Element,
    object: Option<web::Element>,
    emitter: Option<web::Element>,
    ambient: Vec<web::Element>,
    tracks: MediaTracks,
    overlay: LoadingOverlay,
    button: Option<web::HtmlButtonElement>,
    notifications: FnvHashMap<NotificationId, web::Element>,
}

impl WebHost {
    pub fn new(
        window: web::Window,
        document: web::Document,
        scene: web::Element,
        tracks: MediaTracks,
    ) -> Self {
        let button = document
            .get_element_by_id(AUDIO_BUTTON_ID)
            .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());
        Self {
            object: document.get_element_by_id(OBJECT_ID),
            emitter: document.get_element_by_id(EMITTER_ID),
            ambient: Vec::new(),
            overlay: LoadingOverlay::from_document(&document),
            notifications: FnvHashMap::default(),
            button,
            window,
            document,
            scene,
            tracks,
        }
    }

    pub fn object(&self) -> Option<&web::Element> {
        self.object.as_ref()
    }

    fn element(&self, entity: Entity) -> Result<&web::Element, HostError> {
        let el = match entity {
            Entity::Object => self.object.as_ref(),
            Entity::Emitter => self.emitter.as_ref(),
            Entity::Ambient(i) => self.ambient.get(i),
        };
        el.ok_or(HostError::MissingEntity(entity))
    }
}

impl Scene for WebHost {
    fn has_entity(&self, entity: Entity) -> bool {
        self.element(entity).is_ok()
    }

    fn scale_of(&self, entity: Entity) -> Option<Vec3> {
        // A-Frame overrides getAttribute("scale") to return the live
        // THREE.Vector3, so read object3D.scale directly.
        let el = self.element(entity).ok()?;
        let scale = dom::property(el.as_ref(), "object3D")
            .and_then(|o| dom::property(&o, "scale"))?;
        let axis = |k: &str| dom::property(&scale, k).and_then(|v| v.as_f64());
        vec3_from_components(axis("x"), axis("y"), axis("z"))
    }

    fn apply(&mut self, entity: Entity, command: &SceneCommand) -> Result<(), HostError> {
        let el = self.element(entity)?;
        let res = match command {
            SceneCommand::Position(p) => el.set_attribute("position", &vec3_attr(*p)),
            SceneCommand::Scale(s) => el.set_attribute("scale", &vec3_attr(*s)),
            SceneCommand::EmitterEnabled(on) => {
                return dom::set_component_property(
                    el,
                    EMITTER_COMPONENT,
                    "enabled",
                    &JsValue::from_bool(*on),
                );
            }
            SceneCommand::Animate(descriptor) => {
                // an unchanged attribute would not restart the animation
                let _ = el.remove_attribute(FEEDBACK_ANIMATION_COMPONENT);
                el.set_attribute(FEEDBACK_ANIMATION_COMPONENT, &descriptor.to_attribute())
            }
        };
        res.map_err(js_error)
    }

    fn spawn_particle(&mut self, particle: &AmbientParticle) -> Result<(), HostError> {
        let el = self.document.create_element("a-entity").map_err(js_error)?;
        let attrs = [
            ("class", AMBIENT_CLASS.to_string()),
            (
                "geometry",
                format!("primitive: sphere; radius: {}", particle.radius),
            ),
            (
                "material",
                format!(
                    "color: {}; shader: flat; transparent: true; opacity: 0.8",
                    AMBIENT_COLOR
                ),
            ),
            ("position", vec3_attr(particle.position)),
            (DRIFT_ANIMATION_COMPONENT, particle.drift.to_attribute()),
        ];
        for (name, value) in attrs.iter() {
            el.set_attribute(name, value).map_err(js_error)?;
        }
        self.scene.append_child(&el).map_err(js_error)?;
        self.ambient.push(el);
        Ok(())
    }
}

impl Media for WebHost {
    fn has_track(&self, track: Track) -> bool {
        self.tracks.has(track)
    }

    fn request_play(&mut self, track: Track) -> Result<(), HostError> {
        self.tracks.request_play(track)
    }

    fn pause(&mut self, track: Track) -> Result<(), HostError> {
        self.tracks.pause(track)
    }

    fn rewind(&mut self, track: Track) -> Result<(), HostError> {
        self.tracks.rewind(track)
    }

    fn set_volume(&mut self, track: Track, volume: f32) -> Result<(), HostError> {
        self.tracks.set_volume(track, volume)
    }
}

impl Page for WebHost {
    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .or_else(|| {
                self.document
                    .document_element()
                    .map(|el| el.client_width() as f64)
            })
            .unwrap_or(0.0)
    }

    fn show_progress(&mut self, percent: u8) {
        self.overlay.set_progress(percent);
    }

    fn set_overlay_opacity(&mut self, opacity: f32) {
        self.overlay.set_opacity(opacity);
    }

    fn remove_overlay(&mut self) {
        self.overlay.hide();
    }

    fn set_affordance(&mut self, affordance: Affordance) {
        if let Some(button) = &self.button {
            ui::set_affordance(button, affordance);
        }
    }

    fn mount_notification(&mut self, notification: &Notification) -> Result<(), HostError> {
        let el = ui::mount_notification(&self.document, notification)?;
        self.notifications.insert(notification.id, el);
        Ok(())
    }

    fn fade_notification(&mut self, id: NotificationId) {
        if let Some(el) = self.notifications.get(&id) {
            ui::fade(el);
        }
    }

    fn unmount_notification(&mut self, id: NotificationId) {
        if let Some(el) = self.notifications.remove(&id) {
            el.remove();
        }
    }
}
