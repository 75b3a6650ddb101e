use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlCanvasElement, WebGl2RenderingContext as GL, Window};

use super::renderer::Renderer;
use crate::error::{Result, RippleError};

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Acquires the canvas' WebGL2 context.
pub fn context(canvas: &HtmlCanvasElement) -> Result<GL> {
    let gl = canvas
        .get_context("webgl2")?
        .ok_or(RippleError::Unsupported("WebGL2"))?
        .dyn_into::<GL>()
        .map_err(|_| RippleError::Unsupported("WebGL2"))?;
    Ok(gl)
}

/// Sizes the canvas to the window now and on every `resize`.
pub fn fit_to_window(canvas: &HtmlCanvasElement) -> Result<()> {
    let window = window().ok_or(RippleError::Unsupported("window"))?;
    resize(&window, canvas);

    let resize_closure = {
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            if let Some(window) = web_sys::window() {
                resize(&window, &canvas);
            }
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();
    Ok(())
}

fn resize(window: &Window, canvas: &HtmlCanvasElement) {
    if let (Some(w), Some(h)) = (css_pixels(window.inner_width()), css_pixels(window.inner_height())) {
        canvas.set_width(w);
        canvas.set_height(h);
        log::debug!("canvas resized to {}x{}", w, h);
    }
}

fn css_pixels(value: std::result::Result<JsValue, JsValue>) -> Option<u32> {
    value.ok().and_then(|v| v.as_f64()).map(|v| v as u32)
}

/// Runs `renderer` once per animation frame until the page goes away.
pub fn start(mut renderer: Renderer) -> Result<()> {
    // The frame closure reschedules itself through this slot.
    let f: FrameSlot = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        renderer.render_frame(now);

        // schedule next
        if let Err(err) = request_frame(&f) {
            log::error!("frame loop stopped: {}", err);
        }
    }) as Box<dyn FnMut(f64)>));

    request_frame(&g)
}

fn request_frame(f: &FrameSlot) -> Result<()> {
    let window = window().ok_or(RippleError::Unsupported("window"))?;
    let slot = f.borrow();
    let callback = slot.as_ref().ok_or(RippleError::Unsupported("animation frame"))?;
    window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    Ok(())
}
