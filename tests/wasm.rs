#![cfg(target_arch = "wasm32")]

use sketchpad::components::viewport::{inject_viewport_meta, viewport_content};
use sketchpad::model::Point;
use sketchpad::persist::{LocalStore, SnapshotStore};
use sketchpad::surface::{CanvasSurface, Surface};
use sketchpad::{GestureEnd, SketchConfig, Sketchpad, StrokeTracker};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

// https://rustwasm.github.io/wasm-bindgen/wasm-bindgen-test/browsers.html
wasm_bindgen_test_configure!(run_in_browser);

fn canvas(width: f64, height: f64) -> CanvasSurface {
    let document = web_sys::window().unwrap().document().unwrap();
    let element: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    let mut surface = CanvasSurface::new(element).unwrap();
    surface.reset(width, height);
    surface
}

fn pixels(surface: &CanvasSurface) -> Vec<u8> {
    let (w, h) = surface.size();
    surface
        .context()
        .get_image_data(0.0, 0.0, w, h)
        .unwrap()
        .data()
        .to_vec()
}

#[wasm_bindgen_test]
fn strokes_reach_the_canvas() {
    let mut tracker = StrokeTracker::with_line_width(canvas(64.0, 64.0), 6.0);
    tracker.on_pointer_start(1, 4.0, 32.0);
    assert_eq!(tracker.on_pointer_move(1, 60.0, 32.0), Ok(Point::new(60.0, 32.0)));
    let painted = pixels(tracker.surface())
        .chunks(4)
        .filter(|px| px[3] != 0)
        .count();
    assert!(painted > 0);
}

#[wasm_bindgen_test(async)]
async fn snapshot_round_trips_pixels() {
    let mut tracker = StrokeTracker::with_line_width(canvas(48.0, 48.0), 4.0);
    tracker.on_primary_down();
    tracker.on_primary_move(2.0, 2.0);
    tracker.on_primary_move(46.0, 40.0);
    let _ = tracker.on_primary_up();
    let before = pixels(tracker.surface());
    let blob = tracker.surface().snapshot().unwrap();

    let restored = canvas(48.0, 48.0);
    restored.paint_snapshot(&blob).await.unwrap();
    let after = pixels(&restored);
    assert_eq!(after.len(), before.len());
    // Premultiplied alpha makes translucent edge colors lossy; coverage and
    // opaque pixels must survive exactly.
    for (a, b) in before.chunks(4).zip(after.chunks(4)) {
        assert!(a[3].abs_diff(b[3]) <= 1, "alpha {a:?} vs {b:?}");
        if a[3] == 255 {
            assert_eq!(a[..3], b[..3]);
        }
    }
    assert!(before.chunks(4).any(|px| px[3] == 255));
}

#[wasm_bindgen_test]
fn local_store_holds_the_blob() {
    let window = web_sys::window().unwrap();
    let mut store = LocalStore::open(&window);
    assert!(store.is_available());
    let key = SketchConfig::default().storage_key + "_test";
    store.set(&key, "data:image/png;base64,AAAA").unwrap();
    assert_eq!(store.get(&key).unwrap().as_deref(), Some("data:image/png;base64,AAAA"));
    store.remove(&key).unwrap();
    assert_eq!(store.get(&key).unwrap(), None);
}

#[wasm_bindgen_test(async)]
async fn saved_drawing_survives_a_gesture_before_it_is_painted() {
    let window = web_sys::window().unwrap();
    let config = SketchConfig {
        storage_key: "sketchpad_restore_test".to_owned(),
        ..Default::default()
    };

    let mut first = Sketchpad::new(canvas(32.0, 32.0), LocalStore::open(&window), &config);
    first.pointer_start(1, 2.0, 2.0);
    first.pointer_move(1, 30.0, 30.0).unwrap();
    assert_eq!(first.pointer_end(0), GestureEnd::Finished);
    let saved = first.persistence().unwrap().load().unwrap().unwrap();

    let surface = canvas(32.0, 32.0);
    let painter = surface.clone();
    let mut second = Sketchpad::new(surface, LocalStore::open(&window), &config);
    let blob = second.begin_restore().unwrap().unwrap();
    assert_eq!(blob, saved);

    // Lands on a blank raster; saving now would lose the first drawing.
    second.pointer_start(2, 30.0, 2.0);
    second.pointer_move(2, 2.0, 30.0).unwrap();
    let _ = second.pointer_end(0);
    assert_eq!(second.persistence().unwrap().load(), Ok(Some(saved.clone())));

    painter.paint_snapshot(&blob).await.unwrap();
    second.finish_restore();
    second.primary_down();
    second.primary_move(16.0, 16.0);
    let _ = second.primary_up();
    let resaved = second.persistence().unwrap().load().unwrap().unwrap();
    assert_ne!(resaved, saved);

    LocalStore::open(&window).remove(&config.storage_key).unwrap();
}

#[wasm_bindgen_test]
fn viewport_meta_lands_in_head() {
    let document = web_sys::window().unwrap().document().unwrap();
    inject_viewport_meta(&document, 2.0).unwrap();
    let meta = document
        .query_selector("head meta[name=viewport]")
        .unwrap()
        .unwrap();
    assert_eq!(meta.get_attribute("content"), Some(viewport_content(2.0)));
    meta.remove();
}
