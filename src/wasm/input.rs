use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, HtmlCanvasElement, MouseEvent};

use crate::error::Result;
use crate::pointer::{PointerPosition, PRESS_LOG_LEVEL};

/// Registers press, release and move listeners on `document`.
///
/// None of them touch GPU state yet. Press logs where it landed in clip space.
pub fn register(document: &Document, canvas: &HtmlCanvasElement) -> Result<()> {
    let on_down = {
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let rect = canvas.get_bounding_client_rect();
            let position = PointerPosition {
                x: event.client_x() as f64 - rect.left(),
                y: event.client_y() as f64 - rect.top(),
            };
            match position.to_clip(rect.width(), rect.height()) {
                Some([x, y]) => log::log!(
                    PRESS_LOG_LEVEL,
                    "pointer down at ({}, {}) -> clip ({:.3}, {:.3})",
                    event.client_x(),
                    event.client_y(),
                    x,
                    y
                ),
                None => log::log!(PRESS_LOG_LEVEL, "pointer down at ({}, {})", event.client_x(), event.client_y()),
            }
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    let on_up = Closure::wrap(Box::new(|_: MouseEvent| {}) as Box<dyn FnMut(MouseEvent)>);
    let on_move = Closure::wrap(Box::new(|_: MouseEvent| {}) as Box<dyn FnMut(MouseEvent)>);

    for (name, listener) in [("mousedown", on_down), ("mouseup", on_up), ("mousemove", on_move)] {
        document.add_event_listener_with_callback(name, listener.as_ref().unchecked_ref())?;
        listener.forget();
    }
    Ok(())
}
