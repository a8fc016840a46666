//! Canvas2D draw surface and sprite loading for the browser

use glam::{Affine2, Vec2};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::error::AssetError;
use crate::renderer::colors::to_css;
use crate::renderer::surface::centered_corner;
use crate::renderer::{DrawSurface, FrameLayout, FrameRect, LineStyle, SpriteAtlas, SpriteId};

/// One frame: a source rectangle inside a shared image element
#[derive(Debug, Clone)]
pub struct WebFrame {
    image: HtmlImageElement,
    rect: FrameRect,
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Match the drawing buffer to the element's CSS width, deriving the
    /// height from `aspect_ratio`. Returns the new width.
    pub fn fit_to_client(&self, aspect_ratio: f32) -> f32 {
        let width = self.canvas.client_width().max(0) as f32;
        let height = width / aspect_ratio;
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        width
    }

    fn apply(&self, t: Affine2) {
        let m = t.matrix2;
        let _ = self.ctx.set_transform(
            m.x_axis.x as f64,
            m.x_axis.y as f64,
            m.y_axis.x as f64,
            m.y_axis.y as f64,
            t.translation.x as f64,
            t.translation.y as f64,
        );
    }

    fn reset(&self) {
        let _ = self.ctx.reset_transform();
    }
}

impl DrawSurface for CanvasSurface {
    type Bitmap = WebFrame;

    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn bitmap_size(&self, bitmap: &WebFrame) -> Vec2 {
        bitmap.rect.size
    }

    fn draw_image(&mut self, bitmap: &WebFrame, transform: Affine2) {
        let FrameRect { origin, size } = bitmap.rect;
        let corner = centered_corner(size);
        self.apply(transform);
        let _ = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                &bitmap.image,
                origin.x as f64,
                origin.y as f64,
                size.x as f64,
                size.y as f64,
                corner.x as f64,
                corner.y as f64,
                size.x as f64,
                size.y as f64,
            );
        self.reset();
    }

    fn draw_text(&mut self, text: &str, color: [f32; 4], font: &str, size: f32, transform: Affine2) {
        self.apply(transform);
        self.ctx.set_fill_style_str(&to_css(color));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_font(&format!("{}px {}", size, font));
        let _ = self.ctx.fill_text(text, 0.0, 0.0);
        self.reset();
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, style: &LineStyle, transform: Affine2) {
        let c = style.center;
        let gradient = match self.ctx.create_radial_gradient(
            c.x as f64,
            c.y as f64,
            0.0,
            c.x as f64,
            c.y as f64,
            style.radius as f64,
        ) {
            Ok(gradient) => gradient,
            Err(e) => {
                log::warn!("Radial gradient failed: {:?}", e);
                return;
            }
        };
        let _ = gradient.add_color_stop(0.0, &to_css(style.inner));
        let _ = gradient.add_color_stop(1.0, &to_css(style.outer));

        self.apply(transform);
        self.ctx.set_stroke_style_canvas_gradient(&gradient);
        self.ctx.set_line_width(style.width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        self.reset();
    }
}

async fn load_image(path: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    image.set_src(path);
    JsFuture::from(image.decode()).await?;
    Ok(image)
}

/// Load every sprite image and cut it into frames
pub async fn load_atlas() -> Result<SpriteAtlas<WebFrame>, AssetError> {
    let mut atlas = SpriteAtlas::new();
    for id in SpriteId::ALL {
        atlas.mark_loading(id);
    }

    for id in SpriteId::ALL {
        let path = id.path();
        let image = load_image(path).await.map_err(|e| {
            log::error!("Failed to load {}: {:?}", path, e);
            AssetError::LoadFailed {
                id,
                path: path.to_string(),
            }
        })?;

        let layout = id.layout();
        let image_size = match layout {
            FrameLayout::Full => Vec2::new(image.natural_width() as f32, image.natural_height() as f32),
            FrameLayout::Row { .. } => layout.image_size().unwrap_or(Vec2::ZERO),
        };
        let frames = layout
            .rects(image_size)
            .into_iter()
            .map(|rect| WebFrame {
                image: image.clone(),
                rect,
            })
            .collect();
        atlas.insert_loaded(id, frames)?;
    }

    log::info!("All sprites loaded");
    Ok(atlas)
}
