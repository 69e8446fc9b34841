// Shared tuning constants for the avatar, the ambient field and the UI glue.

// Smoothing
pub const LERP_FACTOR: f32 = 0.08; // fraction of the remaining distance covered per tick

// Avatar pose
pub const TILT_MAX_DEG: f32 = 12.0; // tilt at the container edge
pub const LIFT_SCALE: f32 = 1.05; // target scale while the pointer is over the avatar
pub const REST_SCALE: f32 = 1.0;
pub const GLOW_REST_PERCENT: f32 = 50.0; // glow centre before any pointer input
pub const PERSPECTIVE_PX: f32 = 1000.0;

// Idle breathing added on top of the smoothed scale
pub const BREATH_STEP: f32 = 0.02; // time counter increment per rendered frame
pub const BREATH_AMPLITUDE: f32 = 0.01;

// Avatar canvas (CSS px) and orbit population
pub const AVATAR_CANVAS_PX: f64 = 300.0;
pub const ORBIT_BREAKPOINT_PX: f64 = 768.0;
pub const ORBIT_COUNT_COMPACT: usize = 6;
pub const ORBIT_COUNT_FULL: usize = 12;

// Orbit particle spawn ranges
pub const ORBIT_RADIUS_MIN: f32 = 80.0;
pub const ORBIT_RADIUS_SPAN: f32 = 40.0;
pub const ORBIT_SPEED_MIN: f32 = 0.01; // radians per frame
pub const ORBIT_SPEED_SPAN: f32 = 0.02;
pub const ORBIT_OPACITY_MIN: f32 = 0.2;
pub const ORBIT_OPACITY_SPAN: f32 = 0.5;
pub const ORBIT_FADE_FLOOR: f32 = 0.3; // opacity share kept at the back of the orbit
pub const ORBIT_SHADOW_BLUR: f64 = 5.0;
pub const ORBIT_SHADOW_ALPHA: f32 = 0.5; // shadow alpha relative to the particle

// Shared particle size range
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_SPAN: f32 = 2.0;

// Ambient field
pub const FIELD_FPS_CAP: f64 = 30.0;
pub const FIELD_BREAKPOINT_PX: f64 = 900.0;
pub const FIELD_COUNT_COMPACT: usize = 40;
pub const FIELD_COUNT_FULL: usize = 80;
pub const DRIFT_SPEED_MAX: f32 = 0.25; // per axis, px per drawn frame

// Resize quiet window shared by both effects
pub const RESIZE_DEBOUNCE_MS: u32 = 200;

// Theme
pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";

// Typewriter timings (ms)
pub const TYPE_DELAY_MS: u32 = 100;
pub const DELETE_DELAY_MS: u32 = 50;
pub const HOLD_DELAY_MS: u32 = 2000; // pause on a fully typed phrase
pub const NEXT_PHRASE_DELAY_MS: u32 = 500;

// Header
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;
