#![cfg(target_arch = "wasm32")]
use crate::core::{
    hex_to_linear_rgb, heart_mesh, BoundingBox, Camera, CardConfig, HeartField, StepNavigator,
    HEART_CURVE_SEGMENTS, HEART_DEPTH, HEART_PALETTE, OVERRIDE_KEYS, SCENE_EXTENTS,
};
use glam::Vec3;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod celebrate;
mod confetti_canvas;
mod constants;
mod core;
mod dom;
mod frame;
mod render;
mod steps;

use constants::{
    AMBIENT_INTENSITY, CANVAS_CONTAINER_ID, DIRECTIONAL_INTENSITY, HEART_OPACITY,
    HEART_SHININESS, HEART_SPECULAR, LIGHT_POSITION,
};

const CANVAS_STYLE: &str = "display:block;width:100%;height:100%;";

/// Read `data-*` overrides from the 3D mount, if present.
fn load_config(document: &web::Document) -> CardConfig {
    let Some(mount) = document.get_element_by_id(CANVAS_CONTAINER_ID) else {
        return CardConfig::default();
    };
    let attrs: Vec<(&str, String)> = OVERRIDE_KEYS
        .iter()
        .filter_map(|&k| mount.get_attribute(k).map(|v| (k, v)))
        .collect();
    let (config, errors) =
        CardConfig::default().with_overrides(attrs.iter().map(|(k, v)| (*k, v.as_str())));
    for e in errors {
        log::warn!("config override ignored: {e}");
    }
    config
}

fn lighting() -> render::Lighting {
    render::Lighting {
        ambient_intensity: AMBIENT_INTENSITY,
        light_position: Vec3::from(LIGHT_POSITION),
        light_intensity: DIRECTIONAL_INTENSITY,
        opacity: HEART_OPACITY,
        specular: HEART_SPECULAR,
        shininess: HEART_SHININESS,
    }
}

/// Build the floating-heart scene inside `#canvas-container`.
///
/// Returns `Ok(None)` when the page has no mount point.
async fn build_scene(
    document: &web::Document,
    config: &CardConfig,
) -> anyhow::Result<Option<(frame::HeartScene, web::HtmlCanvasElement)>> {
    let Some(container) = document.get_element_by_id(CANVAS_CONTAINER_ID) else {
        log::info!("no #{CANVAS_CONTAINER_ID}; 3D background disabled");
        return Ok(None);
    };
    let canvas = dom::append_fullscreen_canvas(document, &container, "hearts-canvas", CANVAS_STYLE)?;
    let (css_w, css_h) = dom::sync_canvas_to_viewport(&canvas);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let palette: Vec<[f32; 3]> = HEART_PALETTE.iter().map(|&c| hex_to_linear_rgb(c)).collect();
    let bounds = BoundingBox::new(SCENE_EXTENTS[0], SCENE_EXTENTS[1], SCENE_EXTENTS[2]);
    let field = HeartField::initialize(config.heart_count, &palette, bounds, &mut rng);
    let camera = Camera::for_viewport(css_w as f32, css_h as f32);

    let mesh = heart_mesh(HEART_CURVE_SEGMENTS, HEART_DEPTH);
    let gpu = render::GpuState::new(canvas.clone(), &mesh, field.len(), lighting()).await?;
    log::info!("scene ready: {} hearts", field.len());
    Ok(Some((frame::HeartScene { field, camera, gpu }, canvas)))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heartcard starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = load_config(&document);
    let cue = Rc::new(audio::Cue::new(document.clone()));

    // Navigation works regardless of what happens to the 3D scene.
    let navigator = Rc::new(RefCell::new(StepNavigator::new(config.total_steps)?));
    steps::wire_navigation(&document, navigator, cue.clone());

    let overlay = Rc::new(RefCell::new(confetti_canvas::ConfettiOverlay::new(
        StdRng::from_entropy(),
    )));
    celebrate::wire_celebration(
        &document,
        celebrate::Celebration::new(overlay.clone(), cue, StdRng::from_entropy()),
    );

    let (scene, canvas) = match build_scene(&document, &config).await {
        Ok(Some((scene, canvas))) => (Some(scene), Some(canvas)),
        Ok(None) => (None, None),
        Err(e) => {
            log::error!("3D background disabled: {:?}", e);
            (None, None)
        }
    };

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        confetti: overlay,
        started: Instant::now(),
    }));
    frame::wire_resize(frame_ctx.clone(), canvas);
    frame::start_loop(frame_ctx);
    Ok(())
}
