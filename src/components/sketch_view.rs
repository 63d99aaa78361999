use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlCanvasElement, MouseEvent, TouchEvent, Window};
use yew::prelude::*;

use super::listener::Listener;
use super::viewport::inject_viewport_meta;
use crate::config::SketchConfig;
use crate::persist::LocalStore;
use crate::session::Sketchpad;
use crate::surface::{CanvasSurface, Surface};
use crate::util::{pixel_ratio, viewport_size, LogErr};

type Pad = Rc<RefCell<Sketchpad<CanvasSurface, LocalStore>>>;

/// Listeners owned by the mounted view. `None` once it unmounts, so input
/// hooked up after an await is dropped instead of leaking.
type Slot = Rc<RefCell<Option<Vec<Listener>>>>;

const CLEAR_PROMPT: &str = "Clear the drawing?";

/// Full-window drawing canvas.
#[function_component(SketchView)]
pub fn sketch_view() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((), move |_| {
            let slot: Slot = Rc::new(RefCell::new(Some(Vec::new())));
            match canvas_ref.cast::<HtmlCanvasElement>() {
                Some(canvas) => wire(canvas, slot.clone()),
                None => tracing::error!("canvas ref not attached"),
            }
            move || drop(slot.borrow_mut().take())
        });
    }

    html! {
        <canvas ref={canvas_ref} style="display:block; touch-action:none;" />
    }
}

/// Builds the session for `canvas`, paints any saved drawing, then hooks up
/// input into `slot`.
fn wire(canvas: HtmlCanvasElement, slot: Slot) {
    let Some(window) = web_sys::window() else {
        tracing::error!("no global `window`");
        return;
    };
    let Some(document) = window.document() else {
        tracing::error!("no document on window");
        return;
    };

    // The viewport scale changes `innerWidth`, so it goes in before sizing.
    if inject_viewport_meta(&document, pixel_ratio(&window)).is_err() {
        tracing::warn!("could not inject viewport meta tag");
    }

    let mut surface = match CanvasSurface::new(canvas.clone()) {
        Ok(surface) => surface,
        Err(err) => {
            tracing::error!(%err, "no 2d context");
            window.alert_with_message(&err.to_string()).ok();
            return;
        }
    };
    let (width, height) = viewport_size(&window);
    surface.reset(width, height);
    let painter = surface.clone();

    let store = LocalStore::open(&window);
    let config = if store.is_available() {
        SketchConfig::load(&store)
    } else {
        tracing::warn!("local storage unavailable, drawing will not be saved");
        SketchConfig {
            persist: false,
            ..Default::default()
        }
    };
    let pad: Pad = Rc::new(RefCell::new(Sketchpad::new(surface, store, &config)));
    let saved = pad
        .borrow_mut()
        .begin_restore()
        .log_err("could not read saved drawing")
        .flatten();

    wasm_bindgen_futures::spawn_local(async move {
        if let Some(blob) = saved {
            painter
                .paint_snapshot(&blob)
                .await
                .log_err("could not restore saved drawing");
            pad.borrow_mut().finish_restore();
        }
        let mut slot = slot.borrow_mut();
        let Some(listeners) = slot.as_mut() else {
            tracing::debug!("view unmounted before restore finished");
            return;
        };
        *listeners = listen(&window, &document, &canvas, &pad);
        tracing::debug!(width, height, persist = config.persist, "sketchpad ready");
    });
}

fn listen(window: &Window, document: &Document, canvas: &HtmlCanvasElement, pad: &Pad) -> Vec<Listener> {
    let canvas_target: &web_sys::EventTarget = canvas.as_ref();
    let mut listeners = vec![
        Listener::active(canvas_target, "touchstart", {
            let pad = pad.clone();
            let canvas = canvas.clone();
            move |e: Event| {
                let Some(e) = e.dyn_ref::<TouchEvent>() else { return };
                e.prevent_default();
                let rect = canvas.get_bounding_client_rect();
                let touches = e.touches();
                let mut pad = pad.borrow_mut();
                for i in 0..touches.length() {
                    if let Some(t) = touches.item(i) {
                        pad.pointer_start(
                            t.identifier(),
                            t.client_x() as f64 - rect.left(),
                            t.client_y() as f64 - rect.top(),
                        );
                    }
                }
            }
        }),
        Listener::active(canvas_target, "touchmove", {
            let pad = pad.clone();
            let canvas = canvas.clone();
            move |e: Event| {
                let Some(e) = e.dyn_ref::<TouchEvent>() else { return };
                e.prevent_default();
                let rect = canvas.get_bounding_client_rect();
                let touches = e.touches();
                let mut pad = pad.borrow_mut();
                for i in 0..touches.length() {
                    let Some(t) = touches.item(i) else { continue };
                    let x = t.client_x() as f64 - rect.left();
                    let y = t.client_y() as f64 - rect.top();
                    if let Err(err) = pad.pointer_move(t.identifier(), x, y) {
                        tracing::warn!(%err, "ignoring touch");
                    }
                }
            }
        }),
        Listener::new(canvas_target, "touchend", {
            let pad = pad.clone();
            move |e: Event| {
                let Some(e) = e.dyn_ref::<TouchEvent>() else { return };
                let _ = pad.borrow_mut().pointer_end(e.touches().length() as usize);
            }
        }),
        Listener::new(canvas_target, "touchcancel", {
            let pad = pad.clone();
            move |e: Event| {
                let Some(e) = e.dyn_ref::<TouchEvent>() else { return };
                let _ = pad.borrow_mut().pointer_cancel(e.touches().length() as usize);
            }
        }),
        Listener::new(canvas_target, "mousedown", {
            let pad = pad.clone();
            move |_e: Event| pad.borrow_mut().primary_down()
        }),
        Listener::new(canvas_target, "mousemove", {
            let pad = pad.clone();
            let canvas = canvas.clone();
            move |e: Event| {
                let Some(e) = e.dyn_ref::<MouseEvent>() else { return };
                let rect = canvas.get_bounding_client_rect();
                pad.borrow_mut().primary_move(
                    e.client_x() as f64 - rect.left(),
                    e.client_y() as f64 - rect.top(),
                );
            }
        }),
        Listener::new(canvas_target, "mouseup", {
            let pad = pad.clone();
            move |_e: Event| {
                let mut pad = pad.borrow_mut();
                if pad.primary_active() {
                    let _ = pad.primary_up();
                }
            }
        }),
    ];

    // Keep the page itself from scrolling under a finger.
    listeners.push(Listener::active(document.as_ref(), "touchmove", |e: Event| {
        e.prevent_default();
    }));
    listeners.push(Listener::new(window.as_ref(), "shake", {
        let pad = pad.clone();
        let window = window.clone();
        move |_e: Event| clear_on_confirm(&window, &pad)
    }));
    listeners
}

fn clear_on_confirm(window: &Window, pad: &Pad) {
    if !window.confirm_with_message(CLEAR_PROMPT).unwrap_or(false) {
        return;
    }
    let (width, height) = viewport_size(window);
    pad.borrow_mut().clear(width, height);
}
