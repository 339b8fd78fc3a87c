use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::{Cue, CueKind};
use crate::constants::{ACTIVE_CLASS, PROGRESS_BAR_ID, STEP_PANEL_SELECTOR};
use crate::core::{control_bindings, panel_id, StepNavigator, StepSurface};
use crate::dom;

/// Step panels and progress bar as they exist in the page.
pub struct DomSteps {
    document: web::Document,
}

impl DomSteps {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl StepSurface for DomSteps {
    fn deactivate_all(&mut self) {
        let Ok(panels) = self.document.query_selector_all(STEP_PANEL_SELECTOR) else {
            return;
        };
        for i in 0..panels.length() {
            if let Some(el) = panels.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                _ = el.class_list().remove_1(ACTIVE_CLASS);
            }
        }
    }

    fn activate(&mut self, step: u32) -> bool {
        match self.document.get_element_by_id(&panel_id(step)) {
            Some(el) => {
                _ = el.class_list().add_1(ACTIVE_CLASS);
                true
            }
            None => false,
        }
    }

    fn set_progress(&mut self, percent: f32) {
        if let Some(bar) = self
            .document
            .get_element_by_id(PROGRESS_BAR_ID)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        {
            _ = bar.style().set_property("width", &format!("{percent}%"));
        }
    }
}

pub fn show_step(navigator: &Rc<RefCell<StepNavigator>>, surface: &mut DomSteps, step: u32) {
    match navigator.borrow_mut().advance_to(step, surface) {
        Ok(t) => {
            if !t.panel_shown {
                log::warn!("no panel #{}; progress updated without it", panel_id(step));
            }
            log::debug!("step {} -> {} ({:.0}%)", t.from, t.to, t.progress);
        }
        Err(e) => log::warn!("navigation ignored: {e}"),
    }
}

/// Apply the initial step and wire every navigation control.
pub fn wire_navigation(document: &web::Document, navigator: Rc<RefCell<StepNavigator>>, cue: Rc<Cue>) {
    let mut surface = DomSteps::new(document.clone());
    let t = navigator.borrow_mut().sync(&mut surface);
    if !t.panel_shown {
        log::warn!("no panel #{} at startup", panel_id(t.to));
    }

    let total = navigator.borrow().total_steps();
    for (button_id, target) in control_bindings(total) {
        let nav = navigator.clone();
        let cue = cue.clone();
        let mut surface = DomSteps::new(document.clone());
        dom::add_click_listener(document, &button_id, move || {
            cue.play(CueKind::Click);
            show_step(&nav, &mut surface, target);
        });
    }
}
