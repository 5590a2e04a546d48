// Shared fakes for the integration tests: a surface that records every call
// and analyser sources with predictable output.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use viz_core::error::Result;
use viz_core::{RadialGradient, Rect, Rgba, SampleSource, Surface, Vec2};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    CreateGradient(RadialGradient),
    SetBrush(u32),
    SetLineWidth(f32),
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    Stroke,
    FillRect(Rect, Rgba),
    Clear,
    DrawSelf { src: Rect, dst: Rect },
    DrawSurface { from: (u32, u32), dst: Rect, blur_px: f32 },
}

pub type OpLog = Rc<RefCell<Vec<Op>>>;

/// Surface that appends each call to a shared log. Brushes are numbered in
/// creation order.
pub struct RecordingSurface {
    width: u32,
    height: u32,
    log: OpLog,
    next_brush: RefCell<u32>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> (Self, OpLog) {
        let log: OpLog = Rc::new(RefCell::new(Vec::new()));
        let surface = Self {
            width,
            height,
            log: log.clone(),
            next_brush: RefCell::new(0),
        };
        (surface, log)
    }

    fn push(&self, op: Op) {
        self.log.borrow_mut().push(op);
    }
}

impl Surface for RecordingSurface {
    type Brush = u32;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn create_radial_gradient(&self, gradient: &RadialGradient) -> Result<u32> {
        self.push(Op::CreateGradient(gradient.clone()));
        let mut id = self.next_brush.borrow_mut();
        *id += 1;
        Ok(*id)
    }

    fn set_stroke_brush(&mut self, brush: &u32) {
        self.push(Op::SetBrush(*brush));
    }

    fn set_line_width(&mut self, width: f32) {
        self.push(Op::SetLineWidth(width));
    }

    fn begin_path(&mut self) {
        self.push(Op::BeginPath);
    }

    fn move_to(&mut self, p: Vec2) {
        self.push(Op::MoveTo(p));
    }

    fn line_to(&mut self, p: Vec2) {
        self.push(Op::LineTo(p));
    }

    fn stroke(&mut self) {
        self.push(Op::Stroke);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.push(Op::FillRect(rect, color));
    }

    fn clear(&mut self) {
        self.push(Op::Clear);
    }

    fn draw_self(&mut self, src: Rect, dst: Rect) -> Result<()> {
        self.push(Op::DrawSelf { src, dst });
        Ok(())
    }

    fn draw_surface(&mut self, other: &Self, dst: Rect, blur_px: f32) -> Result<()> {
        self.push(Op::DrawSurface {
            from: (other.width, other.height),
            dst,
            blur_px,
        });
        Ok(())
    }
}

/// Path vertices (move + line targets) in call order.
pub fn vertices(ops: &[Op]) -> Vec<Vec2> {
    ops.iter()
        .filter_map(|op| match op {
            Op::MoveTo(p) | Op::LineTo(p) => Some(*p),
            _ => None,
        })
        .collect()
}

pub fn count(ops: &[Op], pred: impl Fn(&Op) -> bool) -> usize {
    ops.iter().filter(|op| pred(op)).count()
}

/// Source that always reports the same amplitude and counts pulls.
pub struct ConstantSource {
    pub value: u8,
    pub time_pulls: Rc<RefCell<u32>>,
    pub frequency_pulls: Rc<RefCell<u32>>,
}

impl ConstantSource {
    pub fn new(value: u8) -> Self {
        Self {
            value,
            time_pulls: Rc::new(RefCell::new(0)),
            frequency_pulls: Rc::new(RefCell::new(0)),
        }
    }
}

impl SampleSource for ConstantSource {
    fn fill_time_domain(&mut self, out: &mut [u8]) {
        *self.time_pulls.borrow_mut() += 1;
        out.fill(self.value);
    }

    fn fill_frequency(&mut self, out: &mut [u8]) {
        *self.frequency_pulls.borrow_mut() += 1;
        out.fill(self.value / 2);
    }
}

/// Source whose output changes on every pull: a ramp offset by the pull count.
pub struct RampSource {
    pulls: u8,
}

impl RampSource {
    pub fn new() -> Self {
        Self { pulls: 0 }
    }
}

impl SampleSource for RampSource {
    fn fill_time_domain(&mut self, out: &mut [u8]) {
        self.pulls = self.pulls.wrapping_add(1);
        for (i, v) in out.iter_mut().enumerate() {
            *v = (i as u8).wrapping_add(self.pulls);
        }
    }

    fn fill_frequency(&mut self, out: &mut [u8]) {
        for (i, v) in out.iter_mut().enumerate() {
            *v = 255u8.saturating_sub(i as u8);
        }
    }
}
