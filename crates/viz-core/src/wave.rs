use crate::error::{Result, VizError};
use crate::geometry::{arc, surface_center, wave_angle};
use crate::surface::Surface;

/// Stroke one frame of samples as a polyline around the surface center.
///
/// Uses whatever stroke brush and line width are already set on `surface`.
/// The path is left open; the last vertex is not joined back to the first.
pub fn render_wave<S: Surface>(surface: &mut S, scale: f32, samples: &[u8]) -> Result<()> {
    let (first, rest) = samples.split_first().ok_or(VizError::EmptySamples)?;
    let count = samples.len();
    let center = surface_center(surface.width(), surface.height());

    surface.begin_path();
    surface.move_to(arc(center, wave_angle(0, count), scale, *first as f32));
    for (i, &sample) in rest.iter().enumerate() {
        surface.line_to(arc(center, wave_angle(i + 1, count), scale, sample as f32));
    }
    surface.stroke();
    Ok(())
}
