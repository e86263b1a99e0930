//! 2D-canvas renderer for the procedural background scenes.

use log::debug;
use portfolio_core::RenderingUnavailable;
use portfolio_core::scene::{BackgroundScene, Camera, FrameInput, Transform, Vec3};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::canvas::{rgb, set_fill_style, set_stroke_style};

pub struct Background {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    scene: BackgroundScene,
}

/// Attach `scene` to the canvas with this id.
pub fn init_background(
    document: &Document,
    id: &str,
    scene: BackgroundScene,
) -> Result<Background, RenderingUnavailable> {
    let unavailable = || RenderingUnavailable(id.to_string());
    let canvas = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        .ok_or_else(unavailable)?;
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or_else(unavailable)?;
    debug!("background '{id}' ready with {} particles", scene.particle_count());
    Ok(Background { canvas, ctx, scene })
}

impl Background {
    /// Ensure the canvas backing store matches the CSS size and device pixel
    /// ratio to prevent non-uniform stretching.
    pub fn sync_size(&self, window: &Window) {
        let dpr = window.device_pixel_ratio();
        let rect = self.canvas.get_bounding_client_rect();
        let target_w = (rect.width().max(1.0) * dpr).round().clamp(1.0, 10000.0) as u32;
        let target_h = (rect.height().max(1.0) * dpr).round().clamp(1.0, 10000.0) as u32;
        if self.canvas.width() != target_w {
            self.canvas.set_width(target_w);
        }
        if self.canvas.height() != target_h {
            self.canvas.set_height(target_h);
        }
    }

    pub fn render(&mut self, input: FrameInput) {
        self.scene.advance(input);
        let w = self.canvas.width() as f32;
        let h = self.canvas.height() as f32;
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
        let camera = self.scene.camera;
        for cloud in &self.scene.clouds {
            let m = cloud.transform.matrix();
            self.ctx.set_global_alpha(cloud.opacity as f64);
            set_fill_style(&self.ctx, &cloud.color);
            let colors = cloud.buffer.colors();
            for (i, p) in cloud.buffer.positions().iter().enumerate() {
                let Some(q) = camera.project(cloud.transform.apply(&m, *p), w, h) else {
                    continue;
                };
                if let Some(c) = colors.and_then(|c| c.get(i)) {
                    set_fill_style(&self.ctx, &rgb(c.to_array()));
                }
                // at least one device pixel so distant points stay visible
                let r = (cloud.size * q.scale * 0.5).max(0.5) as f64;
                self.ctx
                    .fill_rect(q.x as f64 - r, q.y as f64 - r, 2.0 * r, 2.0 * r);
            }
        }
        for line in &self.scene.lines {
            self.ctx.set_global_alpha(line.opacity as f64);
            set_stroke_style(&self.ctx, &line.color);
            self.stroke_path(&camera, &line.transform, &line.points, w, h);
        }
        if let Some(group) = &self.scene.shapes {
            let m = group.transform.matrix();
            for shape in &group.shapes {
                self.ctx.set_global_alpha(shape.opacity as f64);
                set_stroke_style(&self.ctx, &shape.color);
                self.ctx.begin_path();
                for [a, b] in &shape.edges {
                    let ends = [shape.vertices[*a], shape.vertices[*b]]
                        .map(|v| camera.project(group.transform.apply(&m, v + shape.offset), w, h));
                    if let [Some(pa), Some(pb)] = ends {
                        self.ctx.move_to(pa.x as f64, pa.y as f64);
                        self.ctx.line_to(pb.x as f64, pb.y as f64);
                    }
                }
                self.ctx.stroke();
            }
        }
        self.ctx.set_global_alpha(1.0);
    }

    fn stroke_path(
        &self,
        camera: &Camera,
        transform: &Transform,
        points: &[Vec3],
        w: f32,
        h: f32,
    ) {
        let m = transform.matrix();
        self.ctx.begin_path();
        let mut pen_down = false;
        for p in points {
            match camera.project(transform.apply(&m, *p), w, h) {
                Some(q) if pen_down => self.ctx.line_to(q.x as f64, q.y as f64),
                Some(q) => {
                    self.ctx.move_to(q.x as f64, q.y as f64);
                    pen_down = true;
                }
                None => pen_down = false,
            }
        }
        self.ctx.stroke();
    }
}
