// Dot lattice layout (logical/CSS pixel units throughout)
pub const DOT_SPACING: f32 = 30.0;
pub const DOT_SIZE: f32 = 1.5;

// Pointer proximity field
pub const POINTER_RADIUS: f32 = 150.0;
pub const POINTER_FORCE: f32 = 10.0;
pub const BASE_ALPHA: f32 = 0.2; // faint baseline for undisturbed dots
pub const POINTER_ALPHA_SPAN: f32 = 0.5;
pub const POINTER_SCALE_SPAN: f32 = 0.5;

// Click ripples
pub const RIPPLE_SPEED: f32 = 6.0; // radius growth per frame
pub const RIPPLE_DECAY: f32 = 0.96; // per-frame strength multiplier
pub const RIPPLE_DEAD_STRENGTH: f32 = 0.01; // swept once strength falls below this
pub const RIPPLE_MAX_RADIUS: f32 = 1500.0;
pub const RING_WIDTH: f32 = 40.0;
pub const RIPPLE_FORCE: f32 = 40.0;
pub const RIPPLE_SCALE_GAIN: f32 = 2.0;

// Spring pulling each dot toward its force target
pub const SPRING_STIFFNESS: f32 = 0.1;
pub const SPRING_DAMPING: f32 = 0.8;

// Two-tone palette keyed by accumulated alpha
pub const ACCENT_RGB: [u8; 3] = [8, 204, 217];
pub const NEUTRAL_RGB: [u8; 3] = [100, 100, 100];
pub const ACCENT_ALPHA_THRESHOLD: f32 = 0.4;

// Off-canvas parking spot for the pointer while it is outside the field
pub const POINTER_OFFSCREEN: f32 = -1.0e4;

// Below this distance a ripple's push direction is undefined
pub const MIN_RING_DIST: f32 = 1.0e-4;
