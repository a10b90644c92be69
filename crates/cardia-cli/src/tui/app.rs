//! Dashboard state and key handling.
//!
//! [`App`] owns no terminal and no client. Keys go in, an optional request
//! comes out, fetch outcomes come back through [`App::apply`]. The event loop
//! in the parent module wires it to the real world.

use cardia_api::ApiError;
use cardia_core::form::{FormField, HealthForm};
use cardia_core::wire::{FeatureWeight, HealthyBaseline, PredictRequest, Prediction};
use crossterm::event::{KeyCode, KeyModifiers};

/// Which view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Input,
    Results,
}

/// Result of one background service call, delivered over the channel.
#[derive(Debug)]
pub enum FetchOutcome {
    Baseline(Result<HealthyBaseline, ApiError>),
    Importance(Result<Vec<FeatureWeight>, ApiError>),
    Prediction(Result<Prediction, ApiError>),
}

/// Focus slots on the input screen: the six fields, then the submit row.
const FOCUS_SLOTS: usize = FormField::ALL.len() + 1;
const SUBMIT_SLOT: usize = FOCUS_SLOTS - 1;

/// Furthest the results view can be scrolled, in sections.
const MAX_SECTION_SKIP: u16 = 3;

#[derive(Debug, Default)]
pub struct App {
    pub screen: Screen,
    pub form: HealthForm,
    pub focus: usize,
    pub prediction: Option<Prediction>,
    pub baseline: Option<HealthyBaseline>,
    pub importance: Option<Vec<FeatureWeight>>,
    pub loading: bool,
    pub error: Option<String>,
    pub results_scroll: u16,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Field under the cursor, if the cursor is on a field row.
    #[must_use]
    pub fn focused_field(&self) -> Option<FormField> {
        FormField::ALL.get(self.focus).copied()
    }

    /// Handle one key press. Returns a request when the form was submitted.
    pub fn on_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Option<PredictRequest> {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return None;
        }

        match self.screen {
            Screen::Input => self.on_input_key(code),
            Screen::Results => {
                self.on_results_key(code);
                None
            }
        }
    }

    fn on_input_key(&mut self, code: KeyCode) -> Option<PredictRequest> {
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % FOCUS_SLOTS,
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + FOCUS_SLOTS - 1) % FOCUS_SLOTS;
            }
            KeyCode::Left => self.cycle_option(-1),
            KeyCode::Right => self.cycle_option(1),
            KeyCode::Char(ch) => {
                if let Some(field) = self.focused_field() {
                    self.form.field_mut(field).push(ch);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.focused_field() {
                    self.form.field_mut(field).pop();
                }
            }
            KeyCode::Enter => {
                if self.focus == SUBMIT_SLOT {
                    if !self.loading {
                        self.loading = true;
                        self.error = None;
                        return Some(self.form.to_request());
                    }
                } else {
                    self.focus += 1;
                }
            }
            _ => {}
        }
        None
    }

    fn on_results_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('b') | KeyCode::Esc => self.screen = Screen::Input,
            KeyCode::Up => self.results_scroll = self.results_scroll.saturating_sub(1),
            KeyCode::Down => {
                self.results_scroll = (self.results_scroll + 1).min(MAX_SECTION_SKIP);
            }
            KeyCode::PageUp | KeyCode::Home => self.results_scroll = 0,
            KeyCode::PageDown | KeyCode::End => self.results_scroll = MAX_SECTION_SKIP,
            _ => {}
        }
    }

    /// Step through the legal values of a categorical field. Free-numeric
    /// fields ignore the arrows.
    fn cycle_option(&mut self, step: isize) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let options = field.options();
        if options.is_empty() {
            return;
        }

        let current = options.iter().position(|(value, _)| *value == self.form.get(field));
        #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
        let next = match current {
            Some(index) => (index as isize + step).rem_euclid(options.len() as isize) as usize,
            None if step < 0 => options.len() - 1,
            None => 0,
        };
        self.form.set(field, options[next].0);
    }

    /// Fold a finished fetch into the state.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Prediction(Ok(prediction)) => {
                self.prediction = Some(prediction);
                self.screen = Screen::Results;
                self.results_scroll = 0;
                self.loading = false;
            }
            FetchOutcome::Prediction(Err(error)) => {
                self.error = Some(error.to_string());
                self.loading = false;
            }
            FetchOutcome::Baseline(Ok(baseline)) => self.baseline = Some(baseline),
            FetchOutcome::Importance(Ok(weights)) => self.importance = Some(weights),
            // A missing reference dataset just means its chart never shows.
            FetchOutcome::Baseline(Err(error)) | FetchOutcome::Importance(Err(error)) => {
                tracing::debug!(%error, "reference dataset unavailable");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use cardia_core::risk::RiskLevel;
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_prediction() -> Prediction {
        Prediction {
            risk_score: 73.42,
            risk_level: RiskLevel::High,
            outcome: Some(1),
            probability: Some(0.734),
            healthy_probability: Some(0.266),
        }
    }

    fn press(app: &mut App, code: KeyCode) -> Option<PredictRequest> {
        app.on_key(code, KeyModifiers::NONE)
    }

    #[test]
    fn tab_cycles_through_fields_and_submit() {
        let mut app = App::new();
        assert_eq!(app.focused_field(), Some(FormField::Age));

        for _ in 0..FOCUS_SLOTS - 1 {
            press(&mut app, KeyCode::Tab);
        }
        assert_eq!(app.focus, SUBMIT_SLOT);
        assert_eq!(app.focused_field(), None);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_field(), Some(FormField::Age));

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, SUBMIT_SLOT);
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.form.get(FormField::Age), "45");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.form.get(FormField::Age), "4");
    }

    #[test]
    fn arrows_cycle_categorical_options_with_wrap() {
        let mut app = App::new();
        app.focus = 1; // sex

        press(&mut app, KeyCode::Right);
        assert_eq!(app.form.get(FormField::Sex), "0");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.form.get(FormField::Sex), "1");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.form.get(FormField::Sex), "0");
        press(&mut app, KeyCode::Left);
        assert_eq!(app.form.get(FormField::Sex), "1");
    }

    #[test]
    fn arrows_do_nothing_on_free_numeric_fields() {
        let mut app = App::new();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.form.get(FormField::Age), "");
    }

    #[test]
    fn enter_on_a_field_advances_focus() {
        let mut app = App::new();
        let request = press(&mut app, KeyCode::Enter);
        assert!(request.is_none());
        assert_eq!(app.focused_field(), Some(FormField::Sex));
    }

    #[test]
    fn enter_on_submit_builds_the_request_once() {
        let mut app = App::new();
        app.form.set(FormField::Age, "54");
        app.focus = SUBMIT_SLOT;
        app.error = Some("stale".to_string());

        let request = press(&mut app, KeyCode::Enter).unwrap();
        assert!((request.age - 54.0).abs() < f64::EPSILON);
        assert!(request.sex.is_nan());
        assert!(app.loading);
        assert_eq!(app.error, None);

        // A second Enter while the first request is in flight does nothing.
        assert!(press(&mut app, KeyCode::Enter).is_none());
    }

    #[test]
    fn successful_prediction_switches_to_results() {
        let mut app = App::new();
        app.loading = true;
        app.results_scroll = 2;

        app.apply(FetchOutcome::Prediction(Ok(sample_prediction())));
        assert_eq!(app.screen, Screen::Results);
        assert!(!app.loading);
        assert_eq!(app.results_scroll, 0);
        assert!(app.prediction.is_some());
    }

    #[test]
    fn failed_prediction_stays_on_input_with_the_message() {
        let mut app = App::new();
        app.loading = true;

        app.apply(FetchOutcome::Prediction(Err(ApiError::Api {
            status: 400,
            message: "No data provided".to_string(),
        })));
        assert_eq!(app.screen, Screen::Input);
        assert!(!app.loading);
        assert!(app.error.as_deref().unwrap().contains("No data provided"));
        assert!(app.prediction.is_none());
    }

    #[test]
    fn reference_datasets_land_in_state() {
        let mut app = App::new();
        app.apply(FetchOutcome::Importance(Ok(vec![FeatureWeight {
            name: "ST slope".to_string(),
            importance: 41.69,
        }])));
        assert_eq!(app.importance.as_ref().unwrap().len(), 1);

        app.apply(FetchOutcome::Baseline(Err(ApiError::Api {
            status: 500,
            message: "down".to_string(),
        })));
        assert!(app.baseline.is_none());
    }

    #[test]
    fn results_keys_scroll_and_return() {
        let mut app = App::new();
        app.apply(FetchOutcome::Prediction(Ok(sample_prediction())));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.results_scroll, 2);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.results_scroll, MAX_SECTION_SKIP);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.results_scroll, MAX_SECTION_SKIP);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.results_scroll, MAX_SECTION_SKIP - 1);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.results_scroll, 0);

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.screen, Screen::Input);
    }

    #[test]
    fn ctrl_c_quits_from_either_screen() {
        let mut app = App::new();
        app.on_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);

        let mut app = App::new();
        app.apply(FetchOutcome::Prediction(Ok(sample_prediction())));
        app.on_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn esc_quits_only_from_the_input_screen() {
        let mut app = App::new();
        app.apply(FetchOutcome::Prediction(Ok(sample_prediction())));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Input);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
