pub mod analyzer;
pub mod brush;
pub mod constants;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod playback;
#[cfg(feature = "raster")]
pub mod raster;
pub mod schedule;
pub mod surface;
pub mod wave;
pub mod zoom;

pub use analyzer::*;
pub use brush::*;
pub use error::VizError;
pub use frame::*;
pub use geometry::*;
pub use glam::Vec2;
pub use playback::*;
pub use schedule::*;
pub use surface::*;
pub use wave::*;
pub use zoom::*;
