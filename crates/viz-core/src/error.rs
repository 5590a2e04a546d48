use crate::playback::{PlaybackEvent, PlaybackPhase};
use thiserror::Error;

/// Errors raised by the visualizer core.
///
/// Frame-level errors are not fatal: the orchestrator logs them and lets the
/// next scheduled frame supersede the failed one.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VizError {
    #[error("sample sequence is empty")]
    EmptySamples,

    #[error("surface has zero area ({width}x{height})")]
    EmptySurface { width: u32, height: u32 },

    #[error("gradient construction failed: {0}")]
    Gradient(String),

    #[error("drawing operation failed: {0}")]
    Draw(String),

    #[error("invalid color {0:?}; expected #RRGGBB")]
    InvalidColor(String),

    #[error("invalid analyser window size {0}; expected a power of two in 32..=32768")]
    InvalidWindow(u32),

    #[error("smoothing time constant {0} outside [0, 1]")]
    InvalidSmoothing(f64),

    #[error("cannot apply {event:?} while {from:?}")]
    InvalidTransition {
        from: PlaybackPhase,
        event: PlaybackEvent,
    },
}

pub type Result<T> = std::result::Result<T, VizError>;
