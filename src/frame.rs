use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::confetti_canvas::ConfettiOverlay;
use crate::core::{physical_size, Camera, HeartField, FLOAT_TIME_SCALE};
use crate::dom;
use crate::render;

/// The 3D part of a frame; absent when the mount or WebGPU is missing.
pub struct HeartScene {
    pub field: HeartField,
    pub camera: Camera,
    pub gpu: render::GpuState,
}

impl HeartScene {
    /// Update camera aspect and renderer size for a new CSS viewport.
    pub fn on_viewport_resize(&mut self, css_width: f64, css_height: f64, pixel_ratio: f64) {
        self.camera.set_viewport(css_width as f32, css_height as f32);
        let (w, h) = physical_size(css_width, css_height, pixel_ratio);
        self.gpu.resize_if_needed(w, h);
    }
}

pub struct FrameContext {
    pub scene: Option<HeartScene>,
    pub confetti: Rc<RefCell<ConfettiOverlay>>,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let elapsed_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        if let Some(scene) = &mut self.scene {
            scene.field.tick((elapsed_ms * FLOAT_TIME_SCALE) as f32);
            if let Err(e) = scene.gpu.render(&scene.field, &scene.camera) {
                log::error!("render error: {:?}", e);
            }
        }
        self.confetti.borrow_mut().frame();
    }
}

/// Keep the scene and overlay in step with the browser window.
pub fn wire_resize(frame_ctx: Rc<RefCell<FrameContext>>, canvas: Option<web::HtmlCanvasElement>) {
    dom::on_window_resize(move || {
        let mut ctx = frame_ctx.borrow_mut();
        if let (Some(scene), Some(canvas)) = (&mut ctx.scene, &canvas) {
            let (css_w, css_h) = dom::sync_canvas_to_viewport(canvas);
            let (_, _, dpr) = dom::viewport();
            scene.on_viewport_resize(css_w, css_h, dpr);
        }
        ctx.confetti.borrow().resize();
    });
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
