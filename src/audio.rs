use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::constants::{
    CELEBRATION_CHIME_HZ, CELEBRATION_CHIME_SEC, CELEBRATION_SOUND_ID, CHIME_GAIN,
    CLICK_CHIME_HZ, CLICK_CHIME_SEC, CLICK_SOUND_ID,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CueKind {
    Click,
    Celebration,
}

impl CueKind {
    fn element_id(self) -> &'static str {
        match self {
            CueKind::Click => CLICK_SOUND_ID,
            CueKind::Celebration => CELEBRATION_SOUND_ID,
        }
    }

    fn chime(self) -> (f32, f64) {
        match self {
            CueKind::Click => (CLICK_CHIME_HZ, CLICK_CHIME_SEC),
            CueKind::Celebration => (CELEBRATION_CHIME_HZ, CELEBRATION_CHIME_SEC),
        }
    }
}

/// Best-effort sound cues. Prefers the page's `<audio>` elements and falls
/// back to a short synthesized chime when one is missing.
pub struct Cue {
    document: web::Document,
    // Created on first fallback so no context exists before a user gesture.
    ctx: RefCell<Option<web::AudioContext>>,
}

impl Cue {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            ctx: RefCell::new(None),
        }
    }

    pub fn play(&self, kind: CueKind) {
        let media = self
            .document
            .get_element_by_id(kind.element_id())
            .and_then(|el| el.dyn_into::<web::HtmlMediaElement>().ok());
        match media {
            Some(m) => play_from_start(&m),
            None => self.chime(kind),
        }
    }

    fn chime(&self, kind: CueKind) {
        let mut slot = self.ctx.borrow_mut();
        if slot.is_none() {
            match web::AudioContext::new() {
                Ok(ctx) => *slot = Some(ctx),
                Err(e) => {
                    log::warn!("AudioContext unavailable: {:?}", e);
                    return;
                }
            }
        }
        if let Some(ctx) = slot.as_ref() {
            _ = ctx.resume();
            let (hz, secs) = kind.chime();
            trigger_one_shot(ctx, hz, CHIME_GAIN, secs);
        }
    }
}

/// Rewind and play; a rejected play promise (autoplay policy) is logged only.
fn play_from_start(media: &web::HtmlMediaElement) {
    media.set_current_time(0.0);
    match media.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("Audio play prevented: {:?}", e);
            }
        }),
        Err(e) => log::warn!("Audio play prevented: {:?}", e),
    }
}

// Sine one-shot with a short attack and linear release
fn trigger_one_shot(audio_ctx: &web::AudioContext, frequency_hz: f32, velocity: f32, duration_sec: f64) {
    let Ok(src) = web::OscillatorNode::new(audio_ctx) else {
        return;
    };
    src.set_type(web::OscillatorType::Sine);
    src.frequency().set_value(frequency_hz);
    let Ok(g) = web::GainNode::new(audio_ctx) else {
        return;
    };
    g.gain().set_value(0.0);
    let t0 = audio_ctx.current_time() + 0.005;
    _ = g.gain().linear_ramp_to_value_at_time(velocity, t0 + 0.01);
    _ = g.gain().linear_ramp_to_value_at_time(0.0, t0 + duration_sec);
    _ = src.connect_with_audio_node(&g);
    _ = g.connect_with_audio_node(&audio_ctx.destination());
    _ = src.start_with_when(t0);
    _ = src.stop_with_when(t0 + duration_sec + 0.05);
}
