//! The address-input / suggestion / search state machine.
//!
//! `SearchController` owns every piece of UI-observable state: the typed
//! text, the suggestion list and dropdown flag, the committed address, the
//! coverage results and the loading flag. It is a plain synchronous struct;
//! the app loop feeds it key input, polls its debounce deadline, and applies
//! the outcomes of background requests. Time enters only through explicit
//! `Instant`s so the debounce behavior stays deterministic under test.

use tokio::time::{Duration, Instant};

use crate::coverage::CoverageResults;
use crate::error::ClientResult;
use crate::geocoding::AddressSuggestion;

/// Quiescence window between the last keystroke and the suggestion lookup.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Minimum typed length before suggestion lookups are scheduled.
pub const MIN_QUERY_CHARS: usize = 3;

/// Candidates at or below this quality score are too weak to act on.
const SCORE_FLOOR: f64 = 0.3;

/// City-level matches are not actionable for a street address lookup.
const MUNICIPALITY: &str = "municipality";

fn is_actionable(suggestion: &AddressSuggestion) -> bool {
    suggestion.score > SCORE_FLOOR && suggestion.kind != MUNICIPALITY
}

/// Why a search invocation was refused without any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchRejected {
    /// No suggestion has been committed, so there is nothing to look up.
    NoSelection,
    /// A coverage check is already running.
    InFlight,
}

/// State machine behind the address search screen.
pub struct SearchController {
    /// Raw typed text, or the adopted label after a selection.
    input: String,
    /// Filtered suggestion list, in API order.
    suggestions: Vec<AddressSuggestion>,
    /// Whether the dropdown is on screen.
    show_suggestions: bool,
    /// Dropdown cursor.
    highlighted: usize,
    /// The suggestion the user committed to. Sole gate for searching.
    selected: Option<AddressSuggestion>,
    /// Last successful coverage report.
    results: Option<CoverageResults>,
    /// True between search submission and its resolution.
    loading: bool,
    /// When the pending suggestion lookup becomes due.
    lookup_deadline: Option<Instant>,
}

impl SearchController {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            suggestions: Vec::new(),
            show_suggestions: false,
            highlighted: 0,
            selected: None,
            results: None,
            loading: false,
            lookup_deadline: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn suggestions(&self) -> &[AddressSuggestion] {
        &self.suggestions
    }

    pub fn dropdown_visible(&self) -> bool {
        self.show_suggestions
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn selected(&self) -> Option<&AddressSuggestion> {
        self.selected.as_ref()
    }

    pub fn results(&self) -> Option<&CoverageResults> {
        self.results.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_pending_lookup(&self) -> bool {
        self.lookup_deadline.is_some()
    }

    /// True when invoking a search would be accepted.
    pub fn search_allowed(&self) -> bool {
        self.selected.is_some() && !self.loading
    }

    /// Append one typed character.
    pub fn push_char(&mut self, c: char) {
        let mut text = self.input.clone();
        text.push(c);
        self.set_input(text);
    }

    /// Delete the last typed character.
    pub fn backspace(&mut self) {
        let mut text = self.input.clone();
        text.pop();
        self.set_input(text);
    }

    /// Record new input text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.set_input_at(text, Instant::now());
    }

    /// Record new input text, with the caller supplying the clock.
    ///
    /// Typing unconditionally invalidates a prior selection. Below the
    /// minimum length the suggestion list empties, the dropdown hides and
    /// any pending lookup is dropped; at or above it the debounce deadline
    /// restarts from `now`.
    pub fn set_input_at(&mut self, text: impl Into<String>, now: Instant) {
        self.input = text.into();
        self.selected = None;

        if self.input.chars().count() < MIN_QUERY_CHARS {
            self.suggestions.clear();
            self.show_suggestions = false;
            self.highlighted = 0;
            self.lookup_deadline = None;
        } else {
            self.lookup_deadline = Some(now + DEBOUNCE);
        }
    }

    /// Take the suggestion lookup once its quiescence window has elapsed.
    ///
    /// Returns the query to send (the text current at fire time) at most
    /// once per scheduled deadline. A burst of keystrokes therefore yields
    /// one lookup, 300ms after the last of them.
    pub fn due_lookup(&mut self, now: Instant) -> Option<String> {
        let deadline = self.lookup_deadline?;
        if now < deadline {
            return None;
        }
        self.lookup_deadline = None;
        Some(self.input.clone())
    }

    /// Apply a finished suggestion lookup.
    ///
    /// Failures degrade to "no suggestions": typeahead is cosmetic and
    /// never surfaces an error. Stale responses are applied like any other;
    /// no request-generation tagging is performed.
    pub fn apply_suggestions(&mut self, outcome: ClientResult<Vec<AddressSuggestion>>) {
        let mut candidates = outcome.unwrap_or_else(|err| {
            tracing::debug!("suggestion lookup failed: {err}");
            Vec::new()
        });
        candidates.retain(is_actionable);

        self.show_suggestions = !candidates.is_empty();
        self.highlighted = 0;
        self.suggestions = candidates;
    }

    /// Move the dropdown cursor down.
    pub fn highlight_next(&mut self) {
        if !self.suggestions.is_empty() && self.highlighted < self.suggestions.len() - 1 {
            self.highlighted += 1;
        }
    }

    /// Move the dropdown cursor up.
    pub fn highlight_previous(&mut self) {
        if self.highlighted > 0 {
            self.highlighted -= 1;
        }
    }

    /// Commit the suggestion under the dropdown cursor.
    pub fn select_highlighted(&mut self) -> bool {
        self.select_suggestion(self.highlighted)
    }

    /// Commit a suggestion: adopt its label as the display text, record it
    /// as the selected address, close the dropdown. The adopted label is
    /// not a keystroke, so a still-pending lookup is dropped rather than
    /// left to reopen the dropdown later.
    pub fn select_suggestion(&mut self, index: usize) -> bool {
        let suggestion = match self.suggestions.get(index) {
            Some(s) => s.clone(),
            None => return false,
        };

        self.input = suggestion.label.clone();
        self.selected = Some(suggestion);
        self.suggestions.clear();
        self.show_suggestions = false;
        self.highlighted = 0;
        self.lookup_deadline = None;
        true
    }

    /// Submit a coverage search.
    ///
    /// Permitted only with a committed address and no check in flight; on
    /// success the loading flag is set synchronously, prior results are
    /// cleared, and the label to send is returned. Rejections make no
    /// network call.
    pub fn begin_search(&mut self) -> Result<String, SearchRejected> {
        if self.loading {
            return Err(SearchRejected::InFlight);
        }
        let selected = match &self.selected {
            Some(s) => s,
            None => return Err(SearchRejected::NoSelection),
        };

        self.loading = true;
        self.results = None;
        Ok(selected.label.clone())
    }

    /// Apply a finished coverage check. Loading resets on either outcome;
    /// results are stored only on success.
    pub fn apply_coverage(&mut self, outcome: ClientResult<CoverageResults>) {
        self.loading = false;
        if let Ok(results) = outcome {
            self.results = Some(results);
        }
    }

    /// Reset text, selection, suggestions, dropdown and results to their
    /// initial empty state. An in-flight check keeps its loading flag; its
    /// late outcome is applied like any other.
    pub fn clear(&mut self) {
        self.input.clear();
        self.selected = None;
        self.suggestions.clear();
        self.show_suggestions = false;
        self.highlighted = 0;
        self.results = None;
        self.lookup_deadline = None;
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::{AddressCoverage, OperatorCoverage};
    use crate::error::ClientError;

    fn suggestion(label: &str, score: f64, kind: &str) -> AddressSuggestion {
        AddressSuggestion {
            label: label.to_string(),
            score,
            kind: kind.to_string(),
        }
    }

    fn paris_candidates() -> Vec<AddressSuggestion> {
        vec![
            suggestion("1 Rue de la Paix, 75002 Paris", 0.9, "housenumber"),
            suggestion("2 Rue de la Paix, 75002 Paris", 0.8, "housenumber"),
            suggestion("Paris", 0.5, "municipality"),
        ]
    }

    fn coverage_fixture() -> CoverageResults {
        let everywhere = OperatorCoverage {
            two_g: true,
            three_g: true,
            four_g: false,
        };
        let record = AddressCoverage {
            orange: everywhere,
            sfr: everywhere,
            bouygues: everywhere,
            free: everywhere,
        };
        let mut results = CoverageResults::new();
        results.insert("1 Rue de la Paix, 75002 Paris".to_string(), record);
        results
    }

    fn server_error() -> ClientError {
        ClientError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "Internal Server Error".to_string(),
        }
    }

    #[test]
    fn short_input_shows_nothing_and_schedules_nothing() {
        let mut controller = SearchController::new();
        let now = Instant::now();

        controller.set_input_at("pa", now);

        assert!(controller.suggestions().is_empty());
        assert!(!controller.dropdown_visible());
        assert_eq!(controller.due_lookup(now + Duration::from_secs(1)), None);
    }

    #[test]
    fn short_input_clears_suggestions_left_from_a_longer_query() {
        let mut controller = SearchController::new();
        controller.set_input_at("paris", Instant::now());
        controller.apply_suggestions(Ok(paris_candidates()));
        assert!(controller.dropdown_visible());

        controller.set_input_at("pa", Instant::now());

        assert!(controller.suggestions().is_empty());
        assert!(!controller.dropdown_visible());
    }

    #[test]
    fn burst_of_keystrokes_fires_one_lookup_with_the_final_text() {
        let mut controller = SearchController::new();
        let now = Instant::now();

        controller.set_input_at("par", now);
        controller.set_input_at("pari", now + Duration::from_millis(100));
        controller.set_input_at("paris", now + Duration::from_millis(200));

        // 300ms have not yet passed since the last keystroke.
        assert_eq!(controller.due_lookup(now + Duration::from_millis(400)), None);

        assert_eq!(
            controller.due_lookup(now + Duration::from_millis(500)),
            Some("paris".to_string())
        );

        // The deadline is consumed; nothing fires twice.
        assert_eq!(controller.due_lookup(now + Duration::from_secs(2)), None);
    }

    #[test]
    fn shrinking_below_the_minimum_cancels_the_pending_lookup() {
        let mut controller = SearchController::new();
        let now = Instant::now();

        controller.set_input_at("par", now);
        controller.set_input_at("pa", now + Duration::from_millis(100));

        assert_eq!(controller.due_lookup(now + Duration::from_secs(1)), None);
    }

    #[test]
    fn typing_invalidates_a_prior_selection() {
        let mut controller = SearchController::new();
        controller.set_input_at("paris", Instant::now());
        controller.apply_suggestions(Ok(paris_candidates()));
        assert!(controller.select_suggestion(0));
        assert!(controller.selected().is_some());

        controller.push_char('x');

        assert!(controller.selected().is_none());
        assert!(!controller.search_allowed());
    }

    #[test]
    fn backspace_reedits_the_adopted_label() {
        let mut controller = SearchController::new();
        controller.set_input_at("paris", Instant::now());
        controller.apply_suggestions(Ok(paris_candidates()));
        controller.select_suggestion(0);

        controller.backspace();

        assert_eq!(controller.input(), "1 Rue de la Paix, 75002 Pari");
        assert!(controller.selected().is_none());
    }

    #[test]
    fn filtering_keeps_confident_street_level_matches_in_order() {
        let mut controller = SearchController::new();

        controller.apply_suggestions(Ok(paris_candidates()));

        let labels: Vec<&str> = controller
            .suggestions()
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec![
                "1 Rue de la Paix, 75002 Paris",
                "2 Rue de la Paix, 75002 Paris"
            ]
        );
        assert!(controller.dropdown_visible());
    }

    #[test]
    fn score_floor_is_strict_and_municipalities_are_dropped() {
        let mut controller = SearchController::new();

        controller.apply_suggestions(Ok(vec![
            suggestion("weak", 0.3, "housenumber"),
            suggestion("barely", 0.31, "street"),
            suggestion("Lyon", 0.95, "municipality"),
        ]));

        let labels: Vec<&str> = controller
            .suggestions()
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(labels, vec!["barely"]);
    }

    #[test]
    fn nothing_actionable_hides_the_dropdown() {
        let mut controller = SearchController::new();

        controller.apply_suggestions(Ok(vec![suggestion("Paris", 0.5, "municipality")]));

        assert!(controller.suggestions().is_empty());
        assert!(!controller.dropdown_visible());
    }

    #[test]
    fn lookup_failure_degrades_to_no_suggestions() {
        let mut controller = SearchController::new();
        controller.apply_suggestions(Ok(paris_candidates()));
        assert!(controller.dropdown_visible());

        controller.apply_suggestions(Err(server_error()));

        assert!(controller.suggestions().is_empty());
        assert!(!controller.dropdown_visible());
    }

    #[test]
    fn stale_responses_are_accepted_when_they_arrive() {
        let mut controller = SearchController::new();
        let now = Instant::now();

        controller.set_input_at("par", now);
        assert_eq!(
            controller.due_lookup(now + DEBOUNCE),
            Some("par".to_string())
        );

        // The user kept deleting; the in-flight response lands anyway.
        controller.set_input_at("pa", now + Duration::from_millis(400));
        controller.apply_suggestions(Ok(paris_candidates()));

        assert_eq!(controller.suggestions().len(), 2);
        assert!(controller.dropdown_visible());
    }

    #[test]
    fn selection_adopts_the_label_and_closes_the_dropdown() {
        let mut controller = SearchController::new();
        controller.set_input_at("1 rue de la paix", Instant::now());
        controller.apply_suggestions(Ok(paris_candidates()));

        assert!(controller.select_suggestion(0));

        assert_eq!(controller.input(), "1 Rue de la Paix, 75002 Paris");
        assert_eq!(
            controller.selected().map(|s| s.label.as_str()),
            Some("1 Rue de la Paix, 75002 Paris")
        );
        assert!(controller.suggestions().is_empty());
        assert!(!controller.dropdown_visible());
        assert!(controller.search_allowed());
    }

    #[test]
    fn repeating_a_selection_changes_nothing() {
        let mut controller = SearchController::new();
        controller.set_input_at("1 rue de la paix", Instant::now());
        controller.apply_suggestions(Ok(paris_candidates()));
        controller.select_suggestion(0);

        assert!(!controller.select_suggestion(0));

        assert_eq!(controller.input(), "1 Rue de la Paix, 75002 Paris");
        assert!(controller.suggestions().is_empty());
        assert!(!controller.dropdown_visible());
        assert!(controller.search_allowed());
    }

    #[test]
    fn selection_drops_a_still_pending_lookup() {
        let mut controller = SearchController::new();
        let now = Instant::now();

        controller.set_input_at("par", now);
        controller.apply_suggestions(Ok(paris_candidates()));
        controller.select_suggestion(0);

        assert_eq!(controller.due_lookup(now + Duration::from_secs(1)), None);
    }

    #[test]
    fn highlight_moves_within_bounds() {
        let mut controller = SearchController::new();
        controller.apply_suggestions(Ok(paris_candidates()));

        assert_eq!(controller.highlighted(), 0);
        controller.highlight_next();
        assert_eq!(controller.highlighted(), 1);
        controller.highlight_next();
        assert_eq!(controller.highlighted(), 1);
        controller.highlight_previous();
        controller.highlight_previous();
        assert_eq!(controller.highlighted(), 0);

        assert!(controller.select_highlighted());
        assert_eq!(controller.input(), "1 Rue de la Paix, 75002 Paris");
    }

    #[test]
    fn search_without_a_selection_is_rejected() {
        let mut controller = SearchController::new();
        controller.set_input_at("1 rue de la paix", Instant::now());

        assert_eq!(controller.begin_search(), Err(SearchRejected::NoSelection));
        assert!(!controller.is_loading());
        assert!(controller.results().is_none());
    }

    #[test]
    fn search_while_loading_is_rejected() {
        let mut controller = SearchController::new();
        controller.apply_suggestions(Ok(paris_candidates()));
        controller.select_suggestion(0);

        assert!(controller.begin_search().is_ok());
        assert_eq!(controller.begin_search(), Err(SearchRejected::InFlight));
    }

    #[test]
    fn search_sets_loading_synchronously_and_clears_prior_results() {
        let mut controller = SearchController::new();
        controller.apply_suggestions(Ok(paris_candidates()));
        controller.select_suggestion(0);

        controller.begin_search().unwrap();
        controller.apply_coverage(Ok(coverage_fixture()));
        assert!(controller.results().is_some());

        let label = controller.begin_search().unwrap();

        assert_eq!(label, "1 Rue de la Paix, 75002 Paris");
        assert!(controller.is_loading());
        assert!(controller.results().is_none());
    }

    #[test]
    fn successful_check_stores_results_and_resets_loading() {
        let mut controller = SearchController::new();
        controller.apply_suggestions(Ok(paris_candidates()));
        controller.select_suggestion(0);
        controller.begin_search().unwrap();

        controller.apply_coverage(Ok(coverage_fixture()));

        assert!(!controller.is_loading());
        assert_eq!(controller.results(), Some(&coverage_fixture()));
    }

    #[test]
    fn failed_check_resets_loading_and_leaves_results_absent() {
        let mut controller = SearchController::new();
        controller.apply_suggestions(Ok(paris_candidates()));
        controller.select_suggestion(0);
        controller.begin_search().unwrap();

        controller.apply_coverage(Err(server_error()));

        assert!(!controller.is_loading());
        assert!(controller.results().is_none());
    }

    #[test]
    fn clear_resets_every_field_from_any_state() {
        let mut controller = SearchController::new();
        let now = Instant::now();
        controller.set_input_at("1 rue de la paix", now);
        controller.apply_suggestions(Ok(paris_candidates()));
        controller.select_suggestion(0);
        controller.begin_search().unwrap();
        controller.apply_coverage(Ok(coverage_fixture()));
        // A stale suggestion response reopened the dropdown meanwhile.
        controller.apply_suggestions(Ok(paris_candidates()));

        controller.clear();

        assert_eq!(controller.input(), "");
        assert!(controller.selected().is_none());
        assert!(controller.suggestions().is_empty());
        assert!(!controller.dropdown_visible());
        assert!(controller.results().is_none());
        assert!(!controller.has_pending_lookup());
    }

    #[test]
    fn clear_leaves_an_inflight_check_running() {
        let mut controller = SearchController::new();
        controller.apply_suggestions(Ok(paris_candidates()));
        controller.select_suggestion(0);
        controller.begin_search().unwrap();

        controller.clear();
        assert!(controller.is_loading());

        // Its late outcome is applied like any other.
        controller.apply_coverage(Ok(coverage_fixture()));
        assert!(!controller.is_loading());
        assert!(controller.results().is_some());
    }
}
