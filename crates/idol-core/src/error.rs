//! Error types and the failure taxonomy used to route problems either to the
//! notification presenter or to the log.

use crate::host::{Entity, Track};
use thiserror::Error;

/// A call into one of the external collaborators (scene, media, page) failed.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum HostError {
    #[error("scene entity {0:?} is not available")]
    MissingEntity(Entity),
    #[error("media track {0:?} is not available")]
    MissingTrack(Track),
    #[error("host call failed: {0}")]
    Call(String),
}

/// Invalid tuning values handed to [`crate::Session::new`].
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("initial volume {0} is outside [0, 1]")]
    Volume(f32),
    #[error("layout breakpoint must be positive, got {0}")]
    Breakpoint(f64),
    #[error("feedback scale factor must be positive, got {0}")]
    ScaleFactor(f32),
    #[error("{0} must be a non-zero duration")]
    ZeroDuration(&'static str),
    #[error("ambient particle count {count} exceeds the maximum of {max}")]
    TooManyParticles { count: usize, max: usize },
}

/// How a failure is surfaced. There are no automatic retries for any kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// Model or scene failed to load; the user has to reload the page.
    FatalLoad,
    /// The platform refused to start playback; a later gesture may succeed.
    PlaybackRejected,
    /// The background track can't be decoded or fetched; audio is off for the session.
    MediaUnavailable,
    /// A decorative effect (click sound) failed; logged only.
    EffectFailed,
}

impl FailureKind {
    #[inline]
    pub fn is_user_visible(self) -> bool {
        !matches!(self, FailureKind::EffectFailed)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
    pub detail: Option<String>,
}

impl Failure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
