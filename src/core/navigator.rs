// Wizard state: current step, progress, and the controls that
// drive it.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("step {step} is outside 1..={total}")]
    OutOfRange { step: u32, total: u32 },
    #[error("a wizard needs at least 2 steps, got {0}")]
    TooFewSteps(u32),
}

/// Where a transition lands; the page applies it through a [`StepSurface`].
pub trait StepSurface {
    /// Clear the active marker from every step panel.
    fn deactivate_all(&mut self);
    /// Mark panel `step` active. Returns false when no such panel exists.
    fn activate(&mut self, step: u32) -> bool;
    fn set_progress(&mut self, percent: f32);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from: u32,
    pub to: u32,
    pub progress: f32,
    /// False when the target panel was missing and activation was skipped.
    pub panel_shown: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepNavigator {
    current: u32,
    total: u32,
}

impl StepNavigator {
    pub fn new(total: u32) -> Result<Self, NavError> {
        if total < 2 {
            return Err(NavError::TooFewSteps(total));
        }
        Ok(Self { current: 1, total })
    }

    pub fn current_step(&self) -> u32 {
        self.current
    }

    pub fn total_steps(&self) -> u32 {
        self.total
    }

    pub fn is_terminal(&self) -> bool {
        self.current == self.total
    }

    /// Progress bar width in percent for the current step.
    pub fn progress_percent(&self) -> f32 {
        progress_for(self.current, self.total)
    }

    /// Jump to `step` and push the change to `surface`.
    ///
    /// Any in-range target is accepted, including backward ones. A missing
    /// panel only skips activation; state and progress still move.
    pub fn advance_to<S: StepSurface + ?Sized>(
        &mut self,
        step: u32,
        surface: &mut S,
    ) -> Result<Transition, NavError> {
        if step == 0 || step > self.total {
            return Err(NavError::OutOfRange {
                step,
                total: self.total,
            });
        }
        let from = self.current;
        surface.deactivate_all();
        let panel_shown = surface.activate(step);
        self.current = step;
        let progress = self.progress_percent();
        surface.set_progress(progress);
        Ok(Transition {
            from,
            to: step,
            progress,
            panel_shown,
        })
    }

    /// Re-apply the current step, used once at startup.
    pub fn sync<S: StepSurface + ?Sized>(&mut self, surface: &mut S) -> Transition {
        let from = self.current;
        surface.deactivate_all();
        let panel_shown = surface.activate(from);
        let progress = self.progress_percent();
        surface.set_progress(progress);
        Transition {
            from,
            to: from,
            progress,
            panel_shown,
        }
    }
}

#[inline]
pub fn progress_for(step: u32, total: u32) -> f32 {
    if total <= 1 {
        return 100.0;
    }
    (step.saturating_sub(1)) as f32 / (total - 1) as f32 * 100.0
}

/// DOM id of the panel for `step`.
#[inline]
pub fn panel_id(step: u32) -> String {
    format!("step{step}")
}

/// Button id → target step for every navigation control on the page.
///
/// Step 1 is left by `start-btn`; steps 2..total-1 each have a `next-btn-N`.
/// The final step has no navigation control.
pub fn control_bindings(total: u32) -> Vec<(String, u32)> {
    let mut out = Vec::new();
    if total < 2 {
        return out;
    }
    out.push(("start-btn".to_string(), 2));
    for step in 2..total {
        out.push((format!("next-btn-{step}"), step + 1));
    }
    out
}
