use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::Surface;
use crate::error::{describe_js, SurfaceError};
use crate::model::{BrushStyle, LinearGradient, Point};
use crate::util::LogErr;

const SNAPSHOT_MIME: &str = "image/png";

/// A browser `<canvas>` with its 2D context.
#[derive(Clone, Debug)]
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Fails with `SurfaceError::Unsupported` if the element offers no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(SurfaceError::Unsupported)?;
        Ok(Self { canvas, ctx })
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }

    /// Decodes `blob` and paints it at the origin once the image is ready.
    pub async fn paint_snapshot(&self, blob: &str) -> Result<(), SurfaceError> {
        paint_data_url(self.ctx.clone(), blob.to_owned()).await
    }

    fn gradient(&self, linear: &LinearGradient) -> CanvasGradient {
        let grad = self
            .ctx
            .create_linear_gradient(linear.start.x, linear.start.y, linear.end.x, linear.end.y);
        for stop in &linear.stops {
            grad.add_color_stop(stop.offset as f32, stop.color.as_css()).ok();
        }
        grad
    }
}

async fn paint_data_url(ctx: CanvasRenderingContext2d, blob: String) -> Result<(), SurfaceError> {
    let image = HtmlImageElement::new().map_err(|e| SurfaceError::Decode(describe_js(&e)))?;
    image.set_src(&blob);
    JsFuture::from(image.decode())
        .await
        .map_err(|e| SurfaceError::Decode(describe_js(&e)))?;
    ctx.draw_image_with_html_image_element(&image, 0.0, 0.0)
        .map_err(|e| SurfaceError::Decode(describe_js(&e)))
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn set_style(&mut self, style: &BrushStyle) {
        let grad = self.gradient(&style.gradient);
        self.ctx.set_stroke_style_canvas_gradient(&grad);
        self.ctx.set_line_cap(style.line_cap.as_str());
        self.ctx.set_line_join(style.line_join.as_str());
        self.ctx.set_line_width(style.line_width);
        self.ctx
            .set_global_composite_operation(style.composite.as_str())
            .ok();
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Point) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        self.ctx.line_to(p.x, p.y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn reset(&mut self, width: f64, height: f64) {
        // Assigning the size attributes wipes the backing store.
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", width)).ok();
        style.set_property("height", &format!("{}px", height)).ok();
    }

    fn snapshot(&self) -> Result<String, SurfaceError> {
        self.canvas
            .to_data_url_with_type(SNAPSHOT_MIME)
            .map_err(|e| SurfaceError::Encode(describe_js(&e)))
    }

    fn restore(&mut self, blob: &str) -> Result<(), SurfaceError> {
        let ctx = self.ctx.clone();
        let blob = blob.to_owned();
        wasm_bindgen_futures::spawn_local(async move {
            paint_data_url(ctx, blob).await.log_err("could not paint snapshot");
        });
        Ok(())
    }
}
