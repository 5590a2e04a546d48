use viz_core::error::{Result, VizError};
use viz_core::{RadialGradient, Rect, Rgba, Surface, Vec2};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const NO_FILTER: &str = "none";

/// [`Surface`] over an HTML canvas and its 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unsupported"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }
}

fn draw_err(op: &str, e: JsValue) -> VizError {
    VizError::Draw(format!("{}: {:?}", op, e))
}

impl Surface for CanvasSurface {
    type Brush = web::CanvasGradient;

    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn create_radial_gradient(&self, g: &RadialGradient) -> Result<web::CanvasGradient> {
        let (cx, cy) = (g.center.x as f64, g.center.y as f64);
        let gradient = self
            .ctx
            .create_radial_gradient(
                cx,
                cy,
                g.inner_radius as f64,
                cx,
                cy,
                g.outer_radius as f64,
            )
            .map_err(|e| VizError::Gradient(format!("{:?}", e)))?;
        for stop in &g.stops {
            gradient
                .add_color_stop(stop.offset, &stop.color.to_css())
                .map_err(|e| VizError::Gradient(format!("{:?}", e)))?;
        }
        Ok(gradient)
    }

    fn set_stroke_brush(&mut self, brush: &web::CanvasGradient) {
        #[allow(deprecated)]
        self.ctx.set_stroke_style(brush.as_ref());
    }

    fn set_line_width(&mut self, width: f32) {
        self.ctx.set_line_width(width as f64);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Vec2) {
        self.ctx.move_to(p.x as f64, p.y as f64);
    }

    fn line_to(&mut self, p: Vec2) {
        self.ctx.line_to(p.x as f64, p.y as f64);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        #[allow(deprecated)]
        self.ctx
            .set_fill_style(&JsValue::from_str(&color.to_css()));
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.w as f64,
            rect.h as f64,
        );
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width() as f64, self.height() as f64);
    }

    fn draw_self(&mut self, src: Rect, dst: Rect) -> Result<()> {
        self.ctx
            .draw_image_with_html_canvas_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                &self.canvas,
                src.x as f64,
                src.y as f64,
                src.w as f64,
                src.h as f64,
                dst.x as f64,
                dst.y as f64,
                dst.w as f64,
                dst.h as f64,
            )
            .map_err(|e| draw_err("drawImage(self)", e))
    }

    fn draw_surface(&mut self, other: &Self, dst: Rect, blur_px: f32) -> Result<()> {
        if blur_px > 0.0 {
            self.ctx.set_filter(&format!("blur({}px)", blur_px));
        }
        let drawn = self.ctx.draw_image_with_html_canvas_element_and_dw_and_dh(
            &other.canvas,
            dst.x as f64,
            dst.y as f64,
            dst.w as f64,
            dst.h as f64,
        );
        // An empty filter string is ignored by browsers; reset explicitly.
        self.ctx.set_filter(NO_FILTER);
        drawn.map_err(|e| draw_err("drawImage(trail)", e))
    }
}
