/// DOM hooks and canvas sizing for the web frontend.
///
/// Visual tuning (scales, palettes, compositing) lives in `viz_core::constants`;
/// this module only covers how the page is wired.
// Elements looked up at startup
pub const AUDIO_SELECTOR: &str = "audio";
pub const PLAY_BUTTON_SELECTOR: &str = ".play";
pub const CANVAS_SELECTOR: &str = "canvas";

// Class toggled on the play button while audio runs
pub const PLAYING_CLASS: &str = "shrink";

// Backing store sizes as right shifts of the CSS size
pub const MAIN_CANVAS_SHIFT: u32 = 1; // half of the client size
pub const TRAIL_CANVAS_SHIFT: u32 = 2; // quarter of the main canvas

// Events
pub const EVENT_LOAD: &str = "load";
pub const EVENT_CLICK: &str = "click";
pub const EVENT_ENDED: &str = "ended";
pub const EVENT_PAGEHIDE: &str = "pagehide";

/// Backing size for a canvas derived from `size` by `shift`, never zero.
#[inline]
pub fn shifted_size(size: u32, shift: u32) -> u32 {
    (size >> shift).max(1)
}
