use crate::audio::WebAnalyser;
use crate::canvas::CanvasSurface;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use viz_core::{CancelToken, FrameDriver, LoopControl};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebFrameDriver = FrameDriver<CanvasSurface, WebAnalyser>;

/// Stops a running render loop.
#[derive(Clone)]
pub struct LoopHandle {
    cancel: CancelToken,
    pending: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    /// Cancel the pending frame and make every later tick a no-op.
    pub fn cancel(&self) {
        self.cancel.cancel();
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
    }
}

fn request_frame(closure: &Closure<dyn FnMut()>, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    match w.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => pending.set(Some(id)),
        Err(e) => log::error!("requestAnimationFrame: {:?}", e),
    }
}

/// Drive `driver` from `requestAnimationFrame` until `cancel` fires.
pub fn start_loop(driver: WebFrameDriver, cancel: CancelToken) -> LoopHandle {
    let driver = Rc::new(RefCell::new(driver));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let pending_tick = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if driver.borrow_mut().tick() == LoopControl::Stop {
            return;
        }
        if let Some(closure) = tick_clone.borrow().as_ref() {
            request_frame(closure, &pending_tick);
        }
    }) as Box<dyn FnMut()>));

    if let Some(closure) = tick.borrow().as_ref() {
        request_frame(closure, &pending);
    }
    LoopHandle { cancel, pending }
}
