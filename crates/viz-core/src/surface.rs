use crate::brush::{RadialGradient, Rgba};
use crate::error::Result;
use crate::geometry::Rect;
use glam::Vec2;

/// A fixed-size 2D drawing surface and its context.
///
/// Mirrors the subset of the Canvas 2D API the visualizer needs. Path and
/// style state persist between calls the same way a canvas context's do.
pub trait Surface {
    /// Stroke style built once per surface by [`Surface::create_radial_gradient`].
    type Brush;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn create_radial_gradient(&self, gradient: &RadialGradient) -> Result<Self::Brush>;

    fn set_stroke_brush(&mut self, brush: &Self::Brush);
    fn set_line_width(&mut self, width: f32);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    /// Stroke the current path with the current brush and line width.
    fn stroke(&mut self);

    /// Source-over fill of `rect` with a flat color.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    /// Reset every pixel to transparent black.
    fn clear(&mut self);

    /// Copy the `src` region of this surface onto `dst` of the same surface,
    /// reading the content as it was before the call. Negative extents are
    /// flipped and an empty region draws nothing, like `drawImage`.
    fn draw_self(&mut self, src: Rect, dst: Rect) -> Result<()>;

    /// Scale `other` into `dst`, blurred by `blur_px` (0 disables the filter).
    /// The filter does not outlive the call.
    fn draw_surface(&mut self, other: &Self, dst: Rect, blur_px: f32) -> Result<()>;
}
