use crate::brush::{Palette, Rgba};

// Shared visual/audio tuning constants used by the web frontend and the
// software surface.

// Waveform radius band, in sample units before scaling
pub const MIN_RADIUS: f32 = 50.0;
pub const MAX_RADIUS: f32 = 200.0;

// Gradient outer radius as a multiple of the inner radius
pub const GRADIENT_OUTER_FACTOR: f32 = 5.0;
pub const GRADIENT_STOP_OFFSETS: [f32; 5] = [0.00, 0.25, 0.50, 0.75, 1.00];

// Gradient scale per layer (trail layer is quarter resolution)
pub const MAIN_GRADIENT_SCALE: f32 = 30.0;
pub const TRAIL_GRADIENT_SCALE: f32 = 7.5;

// Wave passes
pub const MAIN_WAVE_SCALE: f32 = 0.75;
pub const MAIN_LINE_WIDTH: f32 = 2.0;
pub const TRAIL_WAVE_SCALE: f32 = 0.1875;
pub const TRAIL_LINE_WIDTH: f32 = 0.25;

// Per-frame compositing
pub const FADE_ALPHA: f32 = 0.04; // decay of old trail pixels per frame
pub const ZOOM_MARGIN: f32 = 1.1; // pixels inset per side at speed 1
pub const ZOOM_SPEED: f32 = 1.0;
pub const TRAIL_BLUR_PX: f32 = 2.0;

// Analyser node
pub const FFT_SIZE: u32 = 512;
pub const SMOOTHING_TIME_CONSTANT: f64 = 0.6;
pub const FFT_SIZE_MIN: u32 = 32;
pub const FFT_SIZE_MAX: u32 = 32768;

// Frame clock debug log cadence
pub const FPS_LOG_INTERVAL_SEC: f32 = 5.0;

pub const LINE_PALETTE: Palette = Palette([
    Rgba::rgb(0x11, 0x22, 0x33),
    Rgba::rgb(0xFF, 0xFF, 0x33),
    Rgba::rgb(0xFF, 0x44, 0x11),
    Rgba::rgb(0x33, 0x44, 0x88),
    Rgba::rgb(0x55, 0xFF, 0xFF),
]);

pub const BLUR_PALETTE: Palette = Palette([
    Rgba::rgb(0x00, 0x11, 0x33),
    Rgba::rgb(0xFF, 0xFF, 0x11),
    Rgba::rgb(0xFF, 0x44, 0x00),
    Rgba::rgb(0x11, 0x22, 0x88),
    Rgba::rgb(0x22, 0xFF, 0xFF),
]);
