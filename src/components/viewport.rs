use wasm_bindgen::JsValue;
use web_sys::Document;

/// Viewport meta content that pins the page at one CSS pixel per device
/// pixel and disables pinch zoom.
pub fn viewport_content(pixel_ratio: f64) -> String {
    let scale = 1.0 / pixel_ratio;
    format!(
        "width=device-width, user-scalable=no, maximum-scale={scale}, initial-scale={scale}"
    )
}

pub fn inject_viewport_meta(document: &Document, pixel_ratio: f64) -> Result<(), JsValue> {
    let Some(head) = document.head() else {
        return Ok(());
    };
    let meta = document.create_element("meta")?;
    meta.set_attribute("name", "viewport")?;
    meta.set_attribute("content", &viewport_content(pixel_ratio))?;
    head.append_child(&meta)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_inverts_pixel_ratio() {
        assert_eq!(
            viewport_content(2.0),
            "width=device-width, user-scalable=no, maximum-scale=0.5, initial-scale=0.5"
        );
        assert!(viewport_content(1.0).ends_with("initial-scale=1"));
    }
}
