use crate::constants::ZOOM_MARGIN;
use crate::error::Result;
use crate::geometry::Rect;
use crate::surface::Surface;

/// Centered source region that, stretched over the whole surface, magnifies
/// it slightly. Margins are `speed * 1.1 * aspect` horizontally and
/// `speed * 1.1` vertically, so both axes grow by the same factor.
pub fn zoom_source_rect(width: u32, height: u32, speed: f32) -> Rect {
    let (w, h) = (width as f32, height as f32);
    let aspect = w / h;
    let sx = speed * ZOOM_MARGIN * aspect;
    let sy = speed * ZOOM_MARGIN;
    Rect::new(sx, sy, w - sx * 2.0, h - sy * 2.0)
}

/// Redraw the surface onto itself, zoomed in around its center.
///
/// Applied once per frame before new strokes land, this pushes older content
/// outward and turns a single stroke into a radiating trail.
pub fn zoom_out<S: Surface>(surface: &mut S, speed: f32) -> Result<()> {
    let (width, height) = (surface.width(), surface.height());
    let src = zoom_source_rect(width, height, speed);
    surface.draw_self(src, Rect::full(width, height))
}
