//! Polar mapping from audio samples to canvas-space points.

use crate::constants::{MAX_RADIUS, MIN_RADIUS};
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Axis-aligned rectangle in canvas pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle covering a whole `width` x `height` surface.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f32, height as f32)
    }

    /// Same region with negative extents flipped, as `drawImage` reads it.
    pub fn normalized(self) -> Self {
        let x = self.x + self.w.min(0.0);
        let y = self.y + self.h.min(0.0);
        Self::new(x, y, self.w.abs(), self.h.abs())
    }

    pub fn is_empty(&self) -> bool {
        !(self.w.abs() > 0.0 && self.h.abs() > 0.0)
    }
}

/// Midpoint of a `width` x `height` surface.
#[inline]
pub fn surface_center(width: u32, height: u32) -> Vec2 {
    Vec2::new(width as f32 / 2.0, height as f32 / 2.0)
}

/// Radius for one sample, kept inside the `[50, 200] * scale` annulus.
#[inline]
pub fn sample_radius(scale: f32, sample: f32) -> f32 {
    (sample * scale).clamp(MIN_RADIUS * scale, MAX_RADIUS * scale)
}

/// Map one sample to a point on a circle around `center`.
#[inline]
pub fn arc(center: Vec2, angle: f32, scale: f32, sample: f32) -> Vec2 {
    let r = sample_radius(scale, sample);
    center + r * Vec2::new(angle.cos(), angle.sin())
}

/// Angle of vertex `index` in a wave of `count` vertices.
///
/// Vertices are evenly spaced over a full turn and start a quarter turn in.
#[inline]
pub fn wave_angle(index: usize, count: usize) -> f32 {
    FRAC_PI_2 + index as f32 * (TAU / count as f32)
}
