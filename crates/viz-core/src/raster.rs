//! tiny-skia rendering for the visualizer surfaces.
//!
//! Matches the Canvas 2D semantics the pipeline relies on closely enough for
//! host-side rendering and pixel tests: source-over compositing, radial
//! gradients with an inner radius, self-copies and a Gaussian-like blur.

use crate::brush::{RadialGradient, Rgba};
use crate::error::{Result, VizError};
use crate::geometry::Rect;
use crate::surface::Surface;
use glam::Vec2;
use tiny_skia::{
    Color, FilterQuality, GradientStop, Paint, PathBuilder, Pixmap, PixmapPaint, Point, Shader,
    SpreadMode, Stroke, Transform,
};

/// Software [`Surface`] backed by a premultiplied RGBA [`Pixmap`].
pub struct PixmapSurface {
    pixmap: Pixmap,
    path: PathBuilder,
    brush: Option<Shader<'static>>,
    line_width: f32,
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(VizError::EmptySurface { width, height })?;
        Ok(Self {
            pixmap,
            path: PathBuilder::new(),
            brush: None,
            line_width: 1.0,
        })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Premultiplied RGBA of the pixel at (`x`, `y`).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap
            .pixel(x, y)
            .map(|p| [p.red(), p.green(), p.blue(), p.alpha()])
    }
}

fn to_color(c: Rgba) -> Result<Color> {
    Color::from_rgba(
        c.r as f32 / 255.0,
        c.g as f32 / 255.0,
        c.b as f32 / 255.0,
        c.a,
    )
    .ok_or_else(|| VizError::Draw(format!("color out of range: {:?}", c)))
}

fn rect_to_skia(r: Rect) -> Result<tiny_skia::Rect> {
    tiny_skia::Rect::from_xywh(r.x, r.y, r.w, r.h)
        .ok_or_else(|| VizError::Draw(format!("degenerate rect: {:?}", r)))
}

/// Transform mapping `src` onto `dst`.
fn rect_transform(src: Rect, dst: Rect) -> Transform {
    let kx = dst.w / src.w;
    let ky = dst.h / src.h;
    Transform::from_row(kx, 0.0, 0.0, ky, dst.x - src.x * kx, dst.y - src.y * ky)
}

impl Surface for PixmapSurface {
    type Brush = Shader<'static>;

    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn create_radial_gradient(&self, gradient: &RadialGradient) -> Result<Shader<'static>> {
        let r0 = gradient.inner_radius;
        let r1 = gradient.outer_radius;
        if !(r1 > 0.0 && r1 > r0) {
            return Err(VizError::Gradient(format!("radii {} .. {}", r0, r1)));
        }
        // tiny-skia gradients start at radius 0; move the stops out to r0.
        let inner = r0 / r1;
        let mut stops = Vec::with_capacity(gradient.stops.len());
        for stop in &gradient.stops {
            let position = inner + stop.offset * (1.0 - inner);
            stops.push(GradientStop::new(position, to_color(stop.color)?));
        }
        let center = Point::from_xy(gradient.center.x, gradient.center.y);
        tiny_skia::RadialGradient::new(
            center,
            center,
            r1,
            stops,
            SpreadMode::Pad,
            Transform::identity(),
        )
        .ok_or_else(|| VizError::Gradient("tiny-skia rejected gradient".into()))
    }

    fn set_stroke_brush(&mut self, brush: &Shader<'static>) {
        self.brush = Some(brush.clone());
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn begin_path(&mut self) {
        self.path = PathBuilder::new();
    }

    fn move_to(&mut self, p: Vec2) {
        self.path.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Vec2) {
        self.path.line_to(p.x, p.y);
    }

    fn stroke(&mut self) {
        // A path with fewer than two points has nothing to stroke.
        let Some(path) = self.path.clone().finish() else {
            return;
        };
        let mut paint = Paint::default();
        if let Some(brush) = &self.brush {
            paint.shader = brush.clone();
        }
        paint.anti_alias = true;
        let stroke = Stroke {
            width: self.line_width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let (rect, color) = match (rect_to_skia(rect), to_color(color)) {
            (Ok(rect), Ok(color)) => (rect, color),
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("[raster] fill skipped: {}", e);
                return;
            }
        };
        let mut paint = Paint::default();
        paint.set_color(color);
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }

    fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    fn draw_self(&mut self, src: Rect, dst: Rect) -> Result<()> {
        let (src, dst) = (src.normalized(), dst.normalized());
        if src.is_empty() || dst.is_empty() {
            log::debug!("[raster] empty self-copy {:?} -> {:?}", src, dst);
            return Ok(());
        }
        let snapshot = self.pixmap.clone();
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        self.pixmap
            .draw_pixmap(0, 0, snapshot.as_ref(), &paint, rect_transform(src, dst), None);
        Ok(())
    }

    fn draw_surface(&mut self, other: &Self, dst: Rect, blur_px: f32) -> Result<()> {
        let src = Rect::full(other.width(), other.height());
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        if blur_px <= 0.0 {
            self.pixmap.draw_pixmap(
                0,
                0,
                other.pixmap.as_ref(),
                &paint,
                rect_transform(src, dst),
                None,
            );
            return Ok(());
        }
        // Canvas filters blur the scaled image, so scale first.
        let (width, height) = (self.width(), self.height());
        let mut scaled =
            Pixmap::new(width, height).ok_or(VizError::EmptySurface { width, height })?;
        scaled.draw_pixmap(
            0,
            0,
            other.pixmap.as_ref(),
            &paint,
            rect_transform(src, dst),
            None,
        );
        gaussian_blur(scaled.data_mut(), width as usize, height as usize, blur_px);
        self.pixmap.draw_pixmap(
            0,
            0,
            scaled.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
        Ok(())
    }
}

/// Approximate a Gaussian blur of standard deviation `sigma` with three box
/// blurs, in place over premultiplied RGBA.
pub fn gaussian_blur(data: &mut [u8], width: usize, height: usize, sigma: f32) {
    if width == 0 || height == 0 || sigma <= 0.0 {
        return;
    }
    let mut scratch = vec![0u8; data.len()];
    for radius in box_radii(sigma) {
        if radius == 0 {
            continue;
        }
        box_blur_horizontal(data, &mut scratch, width, height, radius);
        box_blur_vertical(&scratch, data, width, height, radius);
    }
}

/// Box radii for three passes whose combined variance matches `sigma`.
fn box_radii(sigma: f32) -> [usize; 3] {
    const PASSES: f32 = 3.0;
    let ideal = (12.0 * sigma * sigma / PASSES + 1.0).sqrt();
    let mut lower = ideal.floor() as i32;
    if lower % 2 == 0 {
        lower -= 1;
    }
    let upper = lower + 2;
    let lower_f = lower as f32;
    let m = ((12.0 * sigma * sigma
        - PASSES * lower_f * lower_f
        - 4.0 * PASSES * lower_f
        - 3.0 * PASSES)
        / (-4.0 * lower_f - 4.0))
        .round() as i32;
    let mut radii = [0usize; 3];
    for (i, r) in radii.iter_mut().enumerate() {
        let size = if (i as i32) < m { lower } else { upper };
        *r = ((size.max(1) - 1) / 2) as usize;
    }
    radii
}

fn box_blur_horizontal(src: &[u8], dst: &mut [u8], width: usize, height: usize, radius: usize) {
    let window = (2 * radius + 1) as u32;
    for y in 0..height {
        let row = y * width;
        for c in 0..4 {
            let at = |x: usize| src[(row + x) * 4 + c] as u32;
            let mut sum: u32 = (0..=radius).map(|x| at(x.min(width - 1))).sum::<u32>()
                + radius as u32 * at(0);
            for x in 0..width {
                dst[(row + x) * 4 + c] = ((sum + window / 2) / window) as u8;
                let add = at((x + radius + 1).min(width - 1));
                let sub = at(x.saturating_sub(radius));
                sum = sum + add - sub;
            }
        }
    }
}

fn box_blur_vertical(src: &[u8], dst: &mut [u8], width: usize, height: usize, radius: usize) {
    let window = (2 * radius + 1) as u32;
    for x in 0..width {
        for c in 0..4 {
            let at = |y: usize| src[(y * width + x) * 4 + c] as u32;
            let mut sum: u32 = (0..=radius).map(|y| at(y.min(height - 1))).sum::<u32>()
                + radius as u32 * at(0);
            for y in 0..height {
                dst[(y * width + x) * 4 + c] = ((sum + window / 2) / window) as u8;
                let add = at((y + radius + 1).min(height - 1));
                let sub = at(y.saturating_sub(radius));
                sum = sum + add - sub;
            }
        }
    }
}
