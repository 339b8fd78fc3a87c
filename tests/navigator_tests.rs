// Host-side tests for the wizard state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod card {
    pub mod navigator {
        include!("../src/core/navigator.rs");
    }
}

use card::navigator::*;

/// In-memory stand-in for the step panels and progress bar.
#[derive(Default)]
struct FakePanels {
    registered: Vec<u32>,
    active: Vec<u32>,
    progress: Option<f32>,
}

impl FakePanels {
    fn with_panels(steps: impl IntoIterator<Item = u32>) -> Self {
        Self {
            registered: steps.into_iter().collect(),
            ..Default::default()
        }
    }
}

impl StepSurface for FakePanels {
    fn deactivate_all(&mut self) {
        self.active.clear();
    }

    fn activate(&mut self, step: u32) -> bool {
        if self.registered.contains(&step) {
            self.active.push(step);
            true
        } else {
            false
        }
    }

    fn set_progress(&mut self, percent: f32) {
        self.progress = Some(percent);
    }
}

fn five_step() -> (StepNavigator, FakePanels) {
    (StepNavigator::new(5).unwrap(), FakePanels::with_panels(1..=5))
}

#[test]
fn starts_on_first_step_with_zero_progress() {
    let nav = StepNavigator::new(5).unwrap();
    assert_eq!(nav.current_step(), 1);
    assert_eq!(nav.total_steps(), 5);
    assert_eq!(nav.progress_percent(), 0.0);
    assert!(!nav.is_terminal());
}

#[test]
fn rejects_wizards_with_fewer_than_two_steps() {
    assert_eq!(StepNavigator::new(1), Err(NavError::TooFewSteps(1)));
    assert_eq!(StepNavigator::new(0), Err(NavError::TooFewSteps(0)));
}

#[test]
fn advance_sets_step_and_progress_for_every_target() {
    for n in 1..=5u32 {
        let (mut nav, mut panels) = five_step();
        let t = nav.advance_to(n, &mut panels).unwrap();
        let expected = (n - 1) as f32 / 4.0 * 100.0;
        assert_eq!(nav.current_step(), n);
        assert!((t.progress - expected).abs() < 1e-4, "step {n}: {}", t.progress);
        assert_eq!(panels.progress, Some(t.progress));
    }
}

#[test]
fn middle_step_is_half_way() {
    let (mut nav, mut panels) = five_step();
    nav.advance_to(3, &mut panels).unwrap();
    assert!((nav.progress_percent() - 50.0).abs() < 1e-4);
}

#[test]
fn first_and_last_steps_bound_progress() {
    for total in 2..=10u32 {
        assert_eq!(progress_for(1, total), 0.0);
        assert!((progress_for(total, total) - 100.0).abs() < 1e-4);
    }
}

#[test]
fn exactly_one_panel_active_after_each_transition() {
    let (mut nav, mut panels) = five_step();
    for n in [2, 3, 4, 5, 1, 4] {
        let t = nav.advance_to(n, &mut panels).unwrap();
        assert!(t.panel_shown);
        assert_eq!(panels.active, vec![n]);
    }
}

#[test]
fn scenario_jump_from_two_to_five_leaves_only_last_panel() {
    let (mut nav, mut panels) = five_step();
    nav.sync(&mut panels);
    nav.advance_to(2, &mut panels).unwrap();
    nav.advance_to(5, &mut panels).unwrap();
    assert_eq!(nav.current_step(), 5);
    assert_eq!(panels.active, vec![5]);
    assert!(nav.is_terminal());
}

#[test]
fn missing_panel_still_moves_state_and_progress() {
    let (mut nav, _) = five_step();
    let mut panels = FakePanels::with_panels([1, 2, 4, 5]);
    nav.advance_to(2, &mut panels).unwrap();
    let t = nav.advance_to(3, &mut panels).unwrap();
    assert!(!t.panel_shown);
    assert_eq!(nav.current_step(), 3);
    assert!(panels.active.is_empty());
    assert_eq!(panels.progress, Some(50.0));
}

#[test]
fn out_of_range_targets_leave_state_untouched() {
    let (mut nav, mut panels) = five_step();
    nav.advance_to(2, &mut panels).unwrap();
    assert_eq!(
        nav.advance_to(0, &mut panels),
        Err(NavError::OutOfRange { step: 0, total: 5 })
    );
    assert_eq!(
        nav.advance_to(6, &mut panels),
        Err(NavError::OutOfRange { step: 6, total: 5 })
    );
    assert_eq!(nav.current_step(), 2);
    assert_eq!(panels.active, vec![2]);
}

#[test]
fn backward_targets_are_accepted() {
    let (mut nav, mut panels) = five_step();
    nav.advance_to(4, &mut panels).unwrap();
    let t = nav.advance_to(2, &mut panels).unwrap();
    assert_eq!((t.from, t.to), (4, 2));
    assert!((t.progress - 25.0).abs() < 1e-4);
}

#[test]
fn sync_applies_initial_state() {
    let (mut nav, mut panels) = five_step();
    let t = nav.sync(&mut panels);
    assert_eq!((t.from, t.to), (1, 1));
    assert_eq!(panels.active, vec![1]);
    assert_eq!(panels.progress, Some(0.0));
}

#[test]
fn control_bindings_walk_forward_one_step_at_a_time() {
    let b = control_bindings(5);
    assert_eq!(
        b,
        vec![
            ("start-btn".to_string(), 2),
            ("next-btn-2".to_string(), 3),
            ("next-btn-3".to_string(), 4),
            ("next-btn-4".to_string(), 5),
        ]
    );
    assert!(control_bindings(1).is_empty());
}

#[test]
fn following_every_control_reaches_terminal_step() {
    let (mut nav, mut panels) = five_step();
    for (_, target) in control_bindings(nav.total_steps()) {
        assert_eq!(target, nav.current_step() + 1);
        nav.advance_to(target, &mut panels).unwrap();
    }
    assert!(nav.is_terminal());
    assert_eq!(panels.progress, Some(100.0));
}

#[test]
fn panel_ids_match_markup() {
    assert_eq!(panel_id(1), "step1");
    assert_eq!(panel_id(5), "step5");
}

#[test]
fn nav_error_messages_are_readable() {
    let e = NavError::OutOfRange { step: 9, total: 5 };
    assert_eq!(e.to_string(), "step 9 is outside 1..=5");
}
