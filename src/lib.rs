#![cfg(target_arch = "wasm32")]
use crate::canvas::CanvasSurface;
use crate::constants::*;
use std::cell::RefCell;
use std::rc::Rc;
use viz_core::constants::{
    BLUR_PALETTE, LINE_PALETTE, MAIN_GRADIENT_SCALE, TRAIL_GRADIENT_SCALE,
};
use viz_core::{CancelToken, FrameConfig, FrameDriver, FrameOrchestrator, Layer, Playback};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod canvas;
mod constants;
mod dom;
mod frame;
mod playback;

struct Surfaces {
    main: Layer<CanvasSurface>,
    trail: Layer<CanvasSurface>,
}

fn build_surfaces(
    document: &web::Document,
    canvas: web::HtmlCanvasElement,
) -> anyhow::Result<Surfaces> {
    let width = shifted_size(canvas.client_width().max(0) as u32, MAIN_CANVAS_SHIFT);
    let height = shifted_size(canvas.client_height().max(0) as u32, MAIN_CANVAS_SHIFT);
    dom::size_canvas(&canvas, width, height);

    let trail_canvas = dom::create_canvas(document)?;
    dom::size_canvas(
        &trail_canvas,
        shifted_size(width, TRAIL_CANVAS_SHIFT),
        shifted_size(height, TRAIL_CANVAS_SHIFT),
    );
    log::info!(
        "[canvas] main={}x{} trail={}x{}",
        width,
        height,
        trail_canvas.width(),
        trail_canvas.height()
    );

    let main = Layer::new(CanvasSurface::new(canvas)?, MAIN_GRADIENT_SCALE, &LINE_PALETTE)?;
    let trail = Layer::new(
        CanvasSurface::new(trail_canvas)?,
        TRAIL_GRADIENT_SCALE,
        &BLUR_PALETTE,
    )?;
    Ok(Surfaces { main, trail })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sauron-web starting");

    dom::on_load(|| {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let audio: web::HtmlAudioElement = dom::query(&document, AUDIO_SELECTOR)?;
    let button: web::Element = dom::query(&document, PLAY_BUTTON_SELECTOR)?;
    let canvas: web::HtmlCanvasElement = dom::query(&document, CANVAS_SELECTOR)?;

    let Surfaces { main, trail } = build_surfaces(&document, canvas)?;

    // Created once here and shared by handle with the play button and the loop.
    let playback = Rc::new(RefCell::new(Playback::new()));
    let analyser: playback::AnalyserSlot = Rc::new(RefCell::new(None));

    playback::wire(playback::PlaybackWiring {
        button,
        audio,
        playback: playback.clone(),
        analyser: analyser.clone(),
    });

    let cancel = CancelToken::new();
    let driver = FrameDriver::new(
        FrameOrchestrator::new(main, trail, FrameConfig::default()),
        playback,
        analyser,
        cancel.clone(),
    );
    let handle = frame::start_loop(driver, cancel);
    dom::add_listener(&window, EVENT_PAGEHIDE, move || handle.cancel());
    Ok(())
}
