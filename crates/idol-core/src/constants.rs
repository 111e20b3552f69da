use std::time::Duration;

// Session timing and layout tuning shared by the web front-end and the tests.

// Loading screen
pub const SETTLE_DELAY: Duration = Duration::from_millis(1000); // scene `loaded` -> overlay fade
pub const OVERLAY_REMOVE_DELAY: Duration = Duration::from_millis(800); // fade -> display:none

// Click feedback
pub const SCALE_REVERT_DELAY: Duration = Duration::from_millis(300);
pub const FEEDBACK_SCALE_FACTOR: f32 = 1.2; // enlarged = baseline * factor
pub const EMITTER_BURST: Duration = Duration::from_millis(2000);

// Notifications
pub const INFO_DISPLAY: Duration = Duration::from_millis(4000);
pub const ERROR_DISPLAY: Duration = Duration::from_millis(5000);
pub const NOTIFICATION_FADE: Duration = Duration::from_millis(500);

// Responsive layout (logical pixels / world units)
pub const LAYOUT_BREAKPOINT_PX: f64 = 768.0;
pub const COMPACT_POSITION: [f32; 3] = [0.0, 0.0, -2.2];
pub const WIDE_POSITION: [f32; 3] = [0.0, 0.0, -3.0];

// Audio
pub const DEFAULT_VOLUME: f32 = 0.5;

// Ambient particle field
pub const AMBIENT_SEED: u64 = 42;
pub const AMBIENT_MAX_PARTICLES: usize = 256;
pub const AMBIENT_EXTENT: [f32; 3] = [3.0, 2.0, 2.0]; // half-size of the spawn box
pub const AMBIENT_RADIUS_MIN: f32 = 0.01;
pub const AMBIENT_RADIUS_MAX: f32 = 0.04;
pub const AMBIENT_DRIFT_MIN: f32 = 0.1; // vertical float amplitude
pub const AMBIENT_DRIFT_MAX: f32 = 0.4;
pub const AMBIENT_PERIOD_MIN_MS: u64 = 2000;
pub const AMBIENT_PERIOD_MAX_MS: u64 = 6000;

// User-facing messages
pub const MSG_LOADED: &str = "Experience loaded successfully. Tap the Saraswati idol to interact!";
pub const MSG_MODEL_ERROR: &str = "Failed to load 3D model. Please refresh the page.";
pub const MSG_MODEL_MISSING: &str = "3D model not found. Please refresh the page.";
pub const MSG_PLAYBACK_REJECTED: &str = "Couldn't play audio. Try clicking the play button again.";
pub const MSG_MEDIA_UNAVAILABLE: &str =
    "Failed to load audio. The experience will continue without sound.";
