use crate::constants::{EVENT_CLICK, EVENT_LOAD};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// First element matching `selector`, cast to `T`.
pub fn query<T: JsCast>(document: &web::Document, selector: &str) -> anyhow::Result<T> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("query {:?}: {:?}", selector, e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("{} has unexpected type: {:?}", selector, e))
}

#[inline]
pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::error!("add {} listener: {:?}", event, e);
    }
    closure.forget();
}

#[inline]
pub fn add_click_listener(element: &web::Element, handler: impl FnMut() + 'static) {
    add_listener(element, EVENT_CLICK, handler);
}

/// Run `handler` once the page has loaded, or right away if it already has.
pub fn on_load(handler: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        log::error!("no window");
        return;
    };
    let loaded = window
        .document()
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false);
    if loaded {
        handler();
        return;
    }
    let closure = Closure::once(handler);
    let options = web::AddEventListenerOptions::new();
    options.set_once(true);
    if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
        EVENT_LOAD,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::error!("add load listener: {:?}", e);
    }
    closure.forget();
}

/// Set a canvas' backing store size; the size never changes afterwards.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, width: u32, height: u32) {
    canvas.set_width(width);
    canvas.set_height(height);
}

pub fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}
