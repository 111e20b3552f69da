use crate::constants::{progress_label, LOADING_PROGRESS_ID, LOADING_SCREEN_ID};
use crate::dom;
use web_sys as web;

/// The loading screen shown until the scene is ready.
pub struct LoadingOverlay {
    screen: Option<web::Element>,
    progress: Option<web::Element>,
}

impl LoadingOverlay {
    pub fn from_document(document: &web::Document) -> Self {
        let screen = document.get_element_by_id(LOADING_SCREEN_ID);
        if screen.is_none() {
            log::warn!("[overlay] missing #{}", LOADING_SCREEN_ID);
        }
        Self {
            screen,
            progress: document.get_element_by_id(LOADING_PROGRESS_ID),
        }
    }

    #[inline]
    pub fn set_progress(&self, percent: u8) {
        if let Some(el) = &self.progress {
            el.set_text_content(Some(&progress_label(percent)));
        }
    }

    #[inline]
    pub fn set_opacity(&self, opacity: f32) {
        if let Some(el) = &self.screen {
            dom::set_style(el, "opacity", &opacity.to_string());
        }
    }

    #[inline]
    pub fn hide(&self) {
        if let Some(el) = &self.screen {
            dom::set_style(el, "display", "none");
        }
    }
}
