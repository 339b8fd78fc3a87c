use rand::rngs::StdRng;
use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::CONFETTI_CANVAS_ID;
use crate::core::{overlay_size, BurstConfig, ConfettiSystem, Particle, Shape};
use crate::dom;

const OVERLAY_STYLE: &str =
    "position:fixed;top:0;left:0;width:100%;height:100%;pointer-events:none;";

/// Full-viewport 2D overlay that draws the live confetti.
///
/// The canvas is created on the first burst so pages that never celebrate
/// carry no extra layer.
pub struct ConfettiOverlay {
    system: ConfettiSystem<StdRng>,
    canvas: Option<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)>,
    was_active: bool,
}

impl ConfettiOverlay {
    pub fn new(rng: StdRng) -> Self {
        Self {
            system: ConfettiSystem::new(rng),
            canvas: None,
            was_active: false,
        }
    }

    pub fn fire(&mut self, cfg: &BurstConfig) {
        if self.canvas.is_none() {
            match create_overlay() {
                Ok(c) => self.canvas = Some(c),
                Err(e) => {
                    log::error!("confetti overlay: {:?}", e);
                    return;
                }
            }
        }
        let Some((canvas, _)) = &self.canvas else {
            return;
        };
        let (w, h) = size_to_css_viewport(canvas);
        self.system.fire(cfg, w as f32, h as f32);
        _ = canvas
            .style()
            .set_property("z-index", &self.system.z_index().to_string());
    }

    /// Step the physics and redraw. Cheap no-op once everything has landed.
    pub fn frame(&mut self) {
        let Some((canvas, ctx)) = &self.canvas else {
            return;
        };
        if self.system.is_idle() {
            if self.was_active {
                ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
                self.was_active = false;
            }
            return;
        }
        self.was_active = true;
        self.system.step();
        ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        for p in self.system.particles() {
            draw_particle(ctx, p);
        }
    }

    pub fn resize(&self) {
        if let Some((canvas, _)) = &self.canvas {
            size_to_css_viewport(canvas);
        }
    }
}

fn size_to_css_viewport(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let (css_w, css_h, _) = dom::viewport();
    let (w, h) = overlay_size(css_w, css_h);
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}

fn create_overlay() -> anyhow::Result<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let canvas = dom::append_fullscreen_canvas(&document, &body, CONFETTI_CANVAS_ID, OVERLAY_STYLE)?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok((canvas, ctx))
}

fn draw_particle(ctx: &web::CanvasRenderingContext2d, p: &Particle) {
    ctx.set_fill_style_str(&p.color.to_css(p.opacity()));
    ctx.begin_path();
    match p.shape {
        Shape::Square => {
            let q = p.quad();
            ctx.move_to(q[0][0] as f64, q[0][1] as f64);
            for [x, y] in &q[1..] {
                ctx.line_to(*x as f64, *y as f64);
            }
        }
        Shape::Circle => {
            let (c, r, rot) = p.ellipse();
            _ = ctx.ellipse(
                c[0] as f64,
                c[1] as f64,
                r[0] as f64,
                r[1] as f64,
                rot as f64,
                0.0,
                2.0 * PI,
            );
        }
        Shape::Star => {
            let pts = p.star();
            ctx.move_to(pts[0][0] as f64, pts[0][1] as f64);
            for [x, y] in &pts[1..] {
                ctx.line_to(*x as f64, *y as f64);
            }
        }
        Shape::Heart => {
            let (c, r, rot) = p.ellipse();
            let size = (r[0].max(r[1]) as f64).max(4.0 * p.scalar as f64);
            ctx.save();
            _ = ctx.translate(c[0] as f64, c[1] as f64);
            _ = ctx.rotate(rot as f64);
            trace_heart(ctx, size);
            ctx.restore();
        }
    }
    ctx.close_path();
    ctx.fill();
}

// Heart centered on the origin, roughly `2 * s` wide, point down.
fn trace_heart(ctx: &web::CanvasRenderingContext2d, s: f64) {
    ctx.move_to(0.0, 0.35 * s);
    ctx.bezier_curve_to(-0.1 * s, 0.0, -1.0 * s, -0.1 * s, -0.5 * s, -0.7 * s);
    ctx.bezier_curve_to(-0.25 * s, -1.0 * s, 0.0, -0.8 * s, 0.0, -0.5 * s);
    ctx.bezier_curve_to(0.0, -0.8 * s, 0.25 * s, -1.0 * s, 0.5 * s, -0.7 * s);
    ctx.bezier_curve_to(1.0 * s, -0.1 * s, 0.1 * s, 0.0, 0.0, 0.35 * s);
}
