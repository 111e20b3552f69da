//! Scene lifecycle and interaction controller for the idol experience.
//!
//! Platform independent: everything the controller needs from the browser is
//! behind the [`host`] traits, and time is passed in explicitly, so the whole
//! session can be driven from host-side tests.

pub mod ambient;
pub mod audio;
pub mod config;
pub mod constants;
pub mod error;
pub mod host;
pub mod interaction;
pub mod layout;
pub mod loading;
pub mod notify;
pub mod session;
pub mod timer;

pub use ambient::{AmbientField, AmbientParticle};
pub use audio::{AudioController, AudioState, ToggleOutcome};
pub use config::*;
pub use error::{ConfigError, Failure, FailureKind, HostError};
pub use host::*;
pub use interaction::{ClickReport, FeedbackState, InteractionHandler};
pub use layout::{preset_for_width, LayoutAdapter, LayoutPreset};
pub use loading::{progress_percent, AssetId, LoadState, LoadTracker};
pub use notify::{Notification, NotificationId, NotificationKind, Notifier};
pub use session::{Session, Signal, Task};
pub use timer::{TimerId, TimerQueue};
