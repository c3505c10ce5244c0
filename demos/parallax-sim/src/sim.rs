//! Stellar parallax demonstration.
//!
//! Earth orbits the Sun while two sightlines to a target star show how
//! the apparent stellar position shifts over half an orbit. Sliders set
//! the star distance and Earth's orbital position, preset cards jump to
//! known stars, and a one-question quiz checks the distance formula.

use parallax_engine::*;
use serde::Serialize;
use serde_json::Value;

use crate::scene;
use crate::state::SimState;

// ── World layout ─────────────────────────────────────────────────────

const WORLD_W: f32 = 800.0;
const WORLD_H: f32 = 500.0;
const DT: f32 = 1.0 / 60.0;

// ── Custom event kinds from the host UI ──────────────────────────────

/// Distance slider changed (a = parsecs).
const CUSTOM_SET_DISTANCE: u32 = 1;
/// Position slider changed (a = degrees).
const CUSTOM_SET_POSITION: u32 = 2;
/// Animate button clicked.
const CUSTOM_TOGGLE_ANIMATION: u32 = 3;
/// Preset card clicked (a = card index, b = distance in parsecs).
const CUSTOM_SELECT_PRESET: u32 = 4;
/// Quiz option clicked (a = option index, b = 1 if correct).
const CUSTOM_QUIZ_ANSWER: u32 = 5;
/// Viewport resize (a = width, b = height).
const CUSTOM_RESIZE: u32 = 99;

// ── UI timing ────────────────────────────────────────────────────────

/// Preset card highlight duration in seconds.
const CARD_HIGHLIGHT_SECS: f32 = 3.0;
/// Quiz feedback display duration before options re-enable.
const QUIZ_RESET_SECS: f32 = 5.0;

// ── Host-facing strings ──────────────────────────────────────────────

const BTN_START: &str = "Start orbit animation";
const BTN_STOP: &str = "Stop animation";

const QUIZ_CORRECT_FEEDBACK: &str =
    "Correct! A star with a parallax of 0.5 arcseconds is 1/0.5 = 2 parsecs away.";
const QUIZ_WRONG_FEEDBACK: &str =
    "Not quite. Use distance (parsecs) = 1 / parallax (arcseconds). The answer is 2 parsecs.";

// ── UI state ─────────────────────────────────────────────────────────

/// Keys for the delayed UI resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum UiTimer {
    CardHighlight,
    QuizReset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizVerdict {
    Correct,
    Wrong,
}

/// Quiz widget state as shown to the host.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuizView {
    /// Options are disabled while feedback is showing.
    pub locked: bool,
    pub selected: Option<u32>,
    pub verdict: Option<QuizVerdict>,
    pub feedback: String,
}

/// Snapshot of everything the host UI renders outside the canvas.
/// Serialized to JSON once per frame.
#[derive(Debug, Clone, Serialize)]
pub struct UiState {
    pub distance_parsecs: f64,
    pub position_degrees: i64,
    /// Parallax readout, 3 decimals.
    pub parallax_arcsec: String,
    /// Distance computed back from the parallax angle, 1 decimal.
    pub calculated_distance: String,
    pub distance_light_years: String,
    pub animate_button: &'static str,
    pub animating: bool,
    pub highlighted_card: Option<u32>,
    pub quiz: QuizView,
}

// ── Simulation ───────────────────────────────────────────────────────

pub struct ParallaxSim {
    state: SimState,
    animator: FrameScheduler,
    timers: OneShotTimers<UiTimer>,
    highlighted_card: Option<u32>,
    quiz: QuizView,
}

impl ParallaxSim {
    pub fn new() -> Self {
        Self {
            state: SimState::new(WORLD_W, WORLD_H),
            animator: FrameScheduler::new(),
            timers: OneShotTimers::new(),
            highlighted_card: None,
            quiz: QuizView::default(),
        }
    }

    fn handle_event(&mut self, event: &InputEvent) {
        let InputEvent::Custom { kind, a, b, .. } = *event else {
            return;
        };
        match kind {
            CUSTOM_SET_DISTANCE => {
                if a > 0.0 {
                    self.state.star_distance_parsecs = a as f64;
                }
            }
            CUSTOM_SET_POSITION => {
                self.state.set_position(a as f64);
            }
            CUSTOM_TOGGLE_ANIMATION => self.toggle_animation(),
            CUSTOM_SELECT_PRESET => self.select_preset(a as u32, b as f64),
            CUSTOM_QUIZ_ANSWER => self.answer_quiz(a as u32, b != 0.0),
            CUSTOM_RESIZE => self.state.resize(a, b),
            _ => {}
        }
    }

    fn toggle_animation(&mut self) {
        if self.state.is_animating {
            self.animator.stop();
            self.state.is_animating = false;
            log::info!("orbit animation stopped");
        } else {
            self.animator.start();
            self.state.is_animating = true;
        }
    }

    /// Apply a preset card: copy its distance into state and highlight
    /// the card. Re-clicking re-arms the highlight timer.
    fn select_preset(&mut self, card: u32, distance_parsecs: f64) {
        if distance_parsecs > 0.0 {
            self.state.star_distance_parsecs = distance_parsecs;
        }
        self.highlighted_card = Some(card);
        self.timers.arm(UiTimer::CardHighlight, CARD_HIGHLIGHT_SECS);
    }

    /// Record a quiz answer and lock the options. A second answer while
    /// feedback is showing overwrites the verdict and re-arms the reset,
    /// so the reset is idempotent rather than stacking.
    fn answer_quiz(&mut self, option: u32, correct: bool) {
        self.quiz = QuizView {
            locked: true,
            selected: Some(option),
            verdict: Some(if correct {
                QuizVerdict::Correct
            } else {
                QuizVerdict::Wrong
            }),
            feedback: if correct {
                QUIZ_CORRECT_FEEDBACK.to_string()
            } else {
                QUIZ_WRONG_FEEDBACK.to_string()
            },
        };
        self.timers.arm(UiTimer::QuizReset, QUIZ_RESET_SECS);
    }

    fn expire_timer(&mut self, key: UiTimer) {
        match key {
            UiTimer::CardHighlight => self.highlighted_card = None,
            UiTimer::QuizReset => self.quiz = QuizView::default(),
        }
    }

    fn ui_snapshot(&self) -> UiState {
        UiState {
            distance_parsecs: self.state.star_distance_parsecs,
            position_degrees: self.state.earth_position_deg.round() as i64,
            parallax_arcsec: format!("{:.3}", self.state.parallax_arcsec()),
            calculated_distance: format!("{:.1}", self.state.star_distance_parsecs),
            distance_light_years: format!("{:.1}", self.state.distance_light_years()),
            animate_button: if self.state.is_animating {
                BTN_STOP
            } else {
                BTN_START
            },
            animating: self.state.is_animating,
            highlighted_card: self.highlighted_card,
            quiz: self.quiz.clone(),
        }
    }
}

impl Default for ParallaxSim {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation for ParallaxSim {
    fn config(&self) -> SimConfig {
        SimConfig {
            fixed_dt: DT,
            world_width: WORLD_W,
            world_height: WORLD_H,
            ..SimConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut SimContext) {
        scene::draw(&self.state, ctx);
    }

    fn update(&mut self, ctx: &mut SimContext, input: &InputQueue) {
        for event in input.iter() {
            self.handle_event(event);
        }

        if self.animator.tick() {
            self.state.step_orbit();
        }

        for key in self.timers.tick(DT) {
            self.expire_timer(key);
        }

        scene::draw(&self.state, ctx);
    }

    fn ui_state(&self) -> Value {
        serde_json::to_value(self.ui_snapshot()).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run one fixed step the way the runner does: update, then drain.
    fn step(sim: &mut ParallaxSim, ctx: &mut SimContext, input: &mut InputQueue) {
        ctx.clear_frame_data();
        sim.update(ctx, input);
        input.drain();
    }

    fn custom(kind: u32, a: f32, b: f32) -> InputEvent {
        InputEvent::Custom { kind, a, b, c: 0.0 }
    }

    #[test]
    fn distance_slider_updates_state_and_readouts() {
        let mut sim = ParallaxSim::new();
        let mut ctx = SimContext::default();
        let mut input = InputQueue::new();

        input.push(custom(CUSTOM_SET_DISTANCE, 2.0, 0.0));
        step(&mut sim, &mut ctx, &mut input);

        let ui = sim.ui_snapshot();
        assert_eq!(ui.distance_parsecs, 2.0);
        assert_eq!(ui.parallax_arcsec, "0.500");
        assert_eq!(ui.distance_light_years, "6.5");
    }

    #[test]
    fn non_positive_distance_is_ignored() {
        let mut sim = ParallaxSim::new();
        let mut ctx = SimContext::default();
        let mut input = InputQueue::new();

        input.push(custom(CUSTOM_SET_DISTANCE, 0.0, 0.0));
        step(&mut sim, &mut ctx, &mut input);
        assert_eq!(sim.ui_snapshot().distance_parsecs, 10.0);
    }

    #[test]
    fn position_slider_normalizes_degrees() {
        let mut sim = ParallaxSim::new();
        let mut ctx = SimContext::default();
        let mut input = InputQueue::new();

        input.push(custom(CUSTOM_SET_POSITION, 450.0, 0.0));
        step(&mut sim, &mut ctx, &mut input);
        assert_eq!(sim.ui_snapshot().position_degrees, 90);
    }

    #[test]
    fn animation_advances_two_degrees_per_step() {
        let mut sim = ParallaxSim::new();
        let mut ctx = SimContext::default();
        let mut input = InputQueue::new();

        input.push(custom(CUSTOM_TOGGLE_ANIMATION, 0.0, 0.0));
        step(&mut sim, &mut ctx, &mut input);
        assert_eq!(sim.ui_snapshot().position_degrees, 2);
        assert_eq!(sim.ui_snapshot().animate_button, BTN_STOP);

        for _ in 0..10 {
            step(&mut sim, &mut ctx, &mut input);
        }
        assert_eq!(sim.ui_snapshot().position_degrees, 22);
    }

    #[test]
    fn stopping_animation_cancels_the_pending_step() {
        let mut sim = ParallaxSim::new();
        let mut ctx = SimContext::default();
        let mut input = InputQueue::new();

        input.push(custom(CUSTOM_TOGGLE_ANIMATION, 0.0, 0.0));
        step(&mut sim, &mut ctx, &mut input);
        input.push(custom(CUSTOM_TOGGLE_ANIMATION, 0.0, 0.0));
        step(&mut sim, &mut ctx, &mut input);

        let pos = sim.ui_snapshot().position_degrees;
        assert_eq!(sim.ui_snapshot().animate_button, BTN_START);

        // No further motion after stop
        for _ in 0..5 {
            step(&mut sim, &mut ctx, &mut input);
        }
        assert_eq!(sim.ui_snapshot().position_degrees, pos);
    }

    #[test]
    fn animation_wraps_past_360() {
        let mut sim = ParallaxSim::new();
        let mut ctx = SimContext::default();
        let mut input = InputQueue::new();

        input.push(custom(CUSTOM_SET_POSITION, 358.0, 0.0));
        input.push(custom(CUSTOM_TOGGLE_ANIMATION, 0.0, 0.0));
        step(&mut sim, &mut ctx, &mut input);
        assert_eq!(sim.ui_snapshot().position_degrees, 0);
    }

    #[test]
    fn preset_card_sets_distance_and_highlights() {
        let mut sim = ParallaxSim::new();
        let mut ctx = SimContext::default();
        let mut input = InputQueue::new();

        input.push(custom(CUSTOM_SELECT_PRESET, 1.0, 2.0));
        step(&mut sim, &mut ctx, &mut input);

        let ui = sim.ui_snapshot();
        assert_eq!(ui.distance_parsecs, 2.0);
        assert_eq!(ui.parallax_arcsec, "0.500");
        assert_eq!(ui.highlighted_card, Some(1));

        // Highlight clears after three seconds of fixed steps
        for _ in 0..185 {
            step(&mut sim, &mut ctx, &mut input);
        }
        assert_eq!(sim.ui_snapshot().highlighted_card, None);
    }

    #[test]
    fn reclicking_preset_rearms_highlight() {
        let mut sim = ParallaxSim::new();
        let mut ctx = SimContext::default();
        let mut input = InputQueue::new();

        input.push(custom(CUSTOM_SELECT_PRESET, 0.0, 5.0));
        step(&mut sim, &mut ctx, &mut input);
        for _ in 0..120 {
            step(&mut sim, &mut ctx, &mut input);
        }

        // Two seconds in, click again; highlight must survive past the
        // original deadline
        input.push(custom(CUSTOM_SELECT_PRESET, 0.0, 5.0));
        step(&mut sim, &mut ctx, &mut input);
        for _ in 0..120 {
            step(&mut sim, &mut ctx, &mut input);
        }
        assert_eq!(sim.ui_snapshot().highlighted_card, Some(0));
    }

    #[test]
    fn correct_quiz_answer_locks_and_resets() {
        let mut sim = ParallaxSim::new();
        let mut ctx = SimContext::default();
        let mut input = InputQueue::new();

        input.push(custom(CUSTOM_QUIZ_ANSWER, 1.0, 1.0));
        step(&mut sim, &mut ctx, &mut input);

        let ui = sim.ui_snapshot();
        assert!(ui.quiz.locked);
        assert_eq!(ui.quiz.selected, Some(1));
        assert_eq!(ui.quiz.verdict, Some(QuizVerdict::Correct));
        assert_eq!(ui.quiz.feedback, QUIZ_CORRECT_FEEDBACK);

        // Options re-enable after five seconds
        for _ in 0..305 {
            step(&mut sim, &mut ctx, &mut input);
        }
        let ui = sim.ui_snapshot();
        assert!(!ui.quiz.locked);
        assert_eq!(ui.quiz.selected, None);
        assert_eq!(ui.quiz.verdict, None);
        assert!(ui.quiz.feedback.is_empty());
    }

    #[test]
    fn wrong_quiz_answer_shows_formula_feedback() {
        let mut sim = ParallaxSim::new();
        let mut ctx = SimContext::default();
        let mut input = InputQueue::new();

        input.push(custom(CUSTOM_QUIZ_ANSWER, 2.0, 0.0));
        step(&mut sim, &mut ctx, &mut input);

        let ui = sim.ui_snapshot();
        assert_eq!(ui.quiz.verdict, Some(QuizVerdict::Wrong));
        assert_eq!(ui.quiz.feedback, QUIZ_WRONG_FEEDBACK);
    }

    #[test]
    fn resize_recenters_the_diagram() {
        let mut sim = ParallaxSim::new();
        let mut ctx = SimContext::default();
        let mut input = InputQueue::new();

        input.push(custom(CUSTOM_RESIZE, 1000.0, 700.0));
        step(&mut sim, &mut ctx, &mut input);

        assert_eq!(sim.state.center.x, 500.0);
        assert_eq!(sim.state.center.y, 350.0);
    }

    #[test]
    fn every_step_redraws_the_scene() {
        let mut sim = ParallaxSim::new();
        let mut ctx = SimContext::default();
        let mut input = InputQueue::new();

        step(&mut sim, &mut ctx, &mut input);
        assert!(ctx.vectors.vertex_count() > 0);
        assert!(!ctx.labels.is_empty());

        step(&mut sim, &mut ctx, &mut input);
        assert!(ctx.vectors.vertex_count() > 0);
    }

    #[test]
    fn ui_state_serializes_to_json() {
        let sim = ParallaxSim::new();
        let value = sim.ui_state();
        assert_eq!(value["distance_parsecs"], 10.0);
        assert_eq!(value["parallax_arcsec"], "0.100");
        assert_eq!(value["animate_button"], BTN_START);
        assert_eq!(value["quiz"]["locked"], false);
    }
}
