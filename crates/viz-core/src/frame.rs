//! Per-frame compositing of the trail and foreground waves.
//!
//! Every frame fades the main surface. While audio plays it then zooms the
//! main surface onto itself, strokes a thin wave onto the quarter-resolution
//! trail surface, blurs that trail up onto the main surface and finally
//! strokes the sharp foreground wave on top. The order is what produces the
//! glow behind a crisp line.

use crate::analyzer::{Analyzer, SampleBuffer, SampleSource};
use crate::brush::{Layer, Rgba};
use crate::constants::*;
use crate::error::Result;
use crate::geometry::Rect;
use crate::playback::Playback;
use crate::schedule::{CancelToken, FrameClock, LoopControl};
use crate::surface::Surface;
use crate::wave::render_wave;
use crate::zoom::zoom_out;
use std::cell::RefCell;
use std::rc::Rc;

/// Scale and stroke width for one wave pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PassConfig {
    pub scale: f32,
    pub line_width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameConfig {
    pub fade_alpha: f32,
    pub zoom_speed: f32,
    pub trail: PassConfig,
    pub main: PassConfig,
    pub blur_px: f32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            fade_alpha: FADE_ALPHA,
            zoom_speed: ZOOM_SPEED,
            trail: PassConfig {
                scale: TRAIL_WAVE_SCALE,
                line_width: TRAIL_LINE_WIDTH,
            },
            main: PassConfig {
                scale: MAIN_WAVE_SCALE,
                line_width: MAIN_LINE_WIDTH,
            },
            blur_px: TRAIL_BLUR_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Only the fade was applied.
    Idle,
    Rendered,
    /// Playing, but the frame could not be drawn; the next frame replaces it.
    Skipped,
}

pub struct FrameOrchestrator<S: Surface> {
    main: Layer<S>,
    trail: Layer<S>,
    config: FrameConfig,
    samples: SampleBuffer,
}

impl<S: Surface> FrameOrchestrator<S> {
    pub fn new(main: Layer<S>, trail: Layer<S>, config: FrameConfig) -> Self {
        Self {
            main,
            trail,
            config,
            samples: SampleBuffer::default(),
        }
    }

    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    pub fn main_surface(&self) -> &S {
        &self.main.surface
    }

    pub fn trail_surface(&self) -> &S {
        &self.trail.surface
    }

    /// Run one frame. `analyzer` is `None` until playback was first requested.
    pub fn step<A: SampleSource>(
        &mut self,
        playing: bool,
        analyzer: Option<&mut Analyzer<A>>,
    ) -> FrameOutcome {
        self.fade();
        if !playing {
            return FrameOutcome::Idle;
        }
        let Some(analyzer) = analyzer else {
            log::warn!("[frame] playing without an analyser; frame skipped");
            return FrameOutcome::Skipped;
        };
        analyzer.time_domain_into(&mut self.samples);
        match self.composite() {
            Ok(()) => FrameOutcome::Rendered,
            Err(e) => {
                log::warn!("[frame] skipped: {}", e);
                FrameOutcome::Skipped
            }
        }
    }

    fn fade(&mut self) {
        let surface = &mut self.main.surface;
        let rect = Rect::full(surface.width(), surface.height());
        surface.fill_rect(rect, Rgba::rgba(0, 0, 0, self.config.fade_alpha));
    }

    fn composite(&mut self) -> Result<()> {
        let cfg = self.config;
        zoom_out(&mut self.main.surface, cfg.zoom_speed)?;

        let trail = &mut self.trail;
        trail.surface.clear();
        trail.surface.set_line_width(cfg.trail.line_width);
        trail.surface.set_stroke_brush(&trail.brush);
        render_wave(&mut trail.surface, cfg.trail.scale, &self.samples)?;

        let main = &mut self.main;
        let dst = Rect::full(main.surface.width(), main.surface.height());
        main.surface.draw_surface(&self.trail.surface, dst, cfg.blur_px)?;

        main.surface.set_line_width(cfg.main.line_width);
        main.surface.set_stroke_brush(&main.brush);
        render_wave(&mut main.surface, cfg.main.scale, &self.samples)
    }
}

/// Everything one scheduled frame needs, held by the render loop.
///
/// The playback state and the analyser slot are shared handles: the play
/// button fills the slot on first use and flips the state, the loop reads
/// both every tick.
pub struct FrameDriver<S: Surface, A: SampleSource> {
    orchestrator: FrameOrchestrator<S>,
    playback: Rc<RefCell<Playback>>,
    analyzer: Rc<RefCell<Option<Analyzer<A>>>>,
    clock: FrameClock,
    cancel: CancelToken,
}

impl<S: Surface, A: SampleSource> FrameDriver<S, A> {
    pub fn new(
        orchestrator: FrameOrchestrator<S>,
        playback: Rc<RefCell<Playback>>,
        analyzer: Rc<RefCell<Option<Analyzer<A>>>>,
        cancel: CancelToken,
    ) -> Self {
        Self {
            orchestrator,
            playback,
            analyzer,
            clock: FrameClock::new(),
            cancel,
        }
    }

    pub fn orchestrator(&self) -> &FrameOrchestrator<S> {
        &self.orchestrator
    }

    pub fn frames(&self) -> u64 {
        self.clock.frames()
    }

    pub fn tick(&mut self) -> LoopControl {
        if self.cancel.is_cancelled() {
            log::info!("[frame] loop cancelled after {} frames", self.clock.frames());
            return LoopControl::Stop;
        }
        self.clock.tick();
        let playing = self.playback.borrow().is_playing();
        let mut analyzer = self.analyzer.borrow_mut();
        self.orchestrator.step(playing, analyzer.as_mut());
        LoopControl::Continue
    }
}
