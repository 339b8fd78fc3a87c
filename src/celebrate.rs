use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::{Cue, CueKind};
use crate::confetti_canvas::ConfettiOverlay;
use crate::constants::{CONFETTI_BUTTON_ID, STREAM_BUTTON_ID};
use crate::core::{one_shot_sequence, wave_delays, StreamTick, SustainedBurst};
use crate::dom;

/// A sustained stream and the interval driving it. The closure is kept alive
/// until the stream is replaced, never dropped from inside its own callback.
struct RunningStream {
    task: SustainedBurst,
    interval_id: i32,
    _tick: Closure<dyn FnMut()>,
}

type StreamSlot = Rc<RefCell<Option<RunningStream>>>;

#[derive(Clone)]
pub struct Celebration {
    overlay: Rc<RefCell<ConfettiOverlay>>,
    cue: Rc<Cue>,
    rng: Rc<RefCell<StdRng>>,
    stream: StreamSlot,
}

impl Celebration {
    pub fn new(overlay: Rc<RefCell<ConfettiOverlay>>, cue: Rc<Cue>, rng: StdRng) -> Self {
        Self {
            overlay,
            cue,
            rng: Rc::new(RefCell::new(rng)),
            stream: Rc::new(RefCell::new(None)),
        }
    }

    /// Sound cue plus the three timed waves.
    pub fn one_shot(&self) {
        self.cue.play(CueKind::Celebration);
        let seq = one_shot_sequence();
        for delay in wave_delays(&seq) {
            let wave: Vec<_> = seq
                .iter()
                .filter(|b| b.delay_ms == delay)
                .map(|b| b.config.clone())
                .collect();
            if delay == 0 {
                let mut overlay = self.overlay.borrow_mut();
                for cfg in &wave {
                    overlay.fire(cfg);
                }
                continue;
            }
            let overlay = self.overlay.clone();
            let cb = Closure::once_into_js(move || {
                let mut overlay = overlay.borrow_mut();
                for cfg in &wave {
                    overlay.fire(cfg);
                }
            });
            if let Some(w) = web::window() {
                if let Err(e) = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.unchecked_ref(),
                    delay as i32,
                ) {
                    log::warn!("celebration wave at {delay}ms not scheduled: {:?}", e);
                }
            }
        }
    }

    /// Start the two-sided stream, cancelling one already running.
    pub fn start_stream(&self) {
        let Some(window) = web::window() else {
            return;
        };
        if let Some(old) = self.stream.borrow_mut().take() {
            window.clear_interval_with_handle(old.interval_id);
            log::debug!("stream restarted after {} ticks", old.task.fired());
        }

        let task = SustainedBurst::new(js_sys::Date::now());
        let period_ms = task.period_ms() as i32;
        let slot = self.stream.clone();
        let overlay = self.overlay.clone();
        let rng = self.rng.clone();
        let tick = Closure::wrap(Box::new(move || {
            let mut guard = slot.borrow_mut();
            let Some(running) = guard.as_mut() else {
                return;
            };
            match running.task.on_tick(js_sys::Date::now(), &mut *rng.borrow_mut()) {
                StreamTick::Fire { bursts, .. } => {
                    let mut overlay = overlay.borrow_mut();
                    for cfg in &bursts {
                        overlay.fire(cfg);
                    }
                }
                StreamTick::Finished => {
                    if let Some(w) = web::window() {
                        w.clear_interval_with_handle(running.interval_id);
                    }
                    log::debug!("stream finished after {} ticks", running.task.fired());
                }
            }
        }) as Box<dyn FnMut()>);

        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            period_ms,
        ) {
            Ok(interval_id) => {
                *self.stream.borrow_mut() = Some(RunningStream {
                    task,
                    interval_id,
                    _tick: tick,
                });
            }
            Err(e) => log::warn!("stream not scheduled: {:?}", e),
        }
    }
}

pub fn wire_celebration(document: &web::Document, celebration: Celebration) {
    let one_shot = celebration.clone();
    dom::add_click_listener(document, CONFETTI_BUTTON_ID, move || one_shot.one_shot());
    dom::add_click_listener(document, STREAM_BUTTON_ID, move || celebration.start_stream());
}
