//! State of the demo screen: which alert is showing, what is selected and
//! how far the overlay has animated in.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::catalog::{AlertKind, ColorScheme, Hue};
use crate::config::Config;
use crate::transition::Transition;
use crate::ui::AlertView;

/// Hardcoded copy for the demo alert of each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoCopy {
    pub title: &'static str,
    pub message: &'static str,
    pub button: &'static str,
}

/// Title, message and button label shown when `kind` is triggered.
pub const fn demo_copy(kind: AlertKind) -> DemoCopy {
    match kind {
        AlertKind::Success => DemoCopy {
            title: "Success",
            message: "This is message Success",
            button: "OK",
        },
        AlertKind::Error => DemoCopy {
            title: "Error",
            message: "Fix this error",
            button: "OK",
        },
        AlertKind::Question => DemoCopy {
            title: "Question",
            message: "Please Answer the question",
            button: "OK",
        },
        AlertKind::Network => DemoCopy {
            title: "Network",
            message: "Connecting Network",
            button: "OK",
        },
    }
}

/// Label of the trigger button for `kind`.
pub const fn trigger_label(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Success => "Complete Success",
        AlertKind::Error => "Fix Error",
        AlertKind::Question => "Ask the question",
        AlertKind::Network => "Check Connecting Network",
    }
}

/// Fill of the trigger button for `kind`. Not the alert's accent.
pub const fn trigger_hue(kind: AlertKind) -> Hue {
    match kind {
        AlertKind::Success => Hue::Green,
        AlertKind::Error => Hue::Red,
        AlertKind::Question => Hue::Blue,
        AlertKind::Network => Hue::Gray,
    }
}

/// Screen regions from the last drawn frame, used for mouse hit testing.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    /// Trigger buttons on the base screen.
    pub triggers: Vec<(Rect, AlertKind)>,
    /// Content card of the open alert.
    pub card: Option<Rect>,
    /// Buttons of the open alert, in rendered order.
    pub buttons: Vec<Rect>,
}

impl HitMap {
    /// Forget the alert's regions (it is no longer interactive).
    pub fn clear_alert(&mut self) {
        self.card = None;
        self.buttons.clear();
    }
}

/// Host screen for the alert demo.
#[derive(Debug)]
pub struct AlertPresenter {
    /// The alert currently requested, if any.
    pub active: Option<AlertKind>,
    /// The alert last shown; keeps drawing while the overlay fades out.
    displayed: Option<AlertKind>,
    /// Index of the selected trigger button
    pub selected: usize,
    /// Index of the focused button inside the open alert
    pub focused_action: usize,
    /// Host-owned color scheme handed to every alert view
    pub scheme: ColorScheme,
    /// Overlay visibility, 0.0 hidden to 1.0 shown
    overlay: Transition,
    transition_duration: Duration,
    /// Regions from the last frame
    pub hits: HitMap,
}

impl Default for AlertPresenter {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AlertPresenter {
    /// Create a presenter with nothing showing.
    pub fn new(config: &Config) -> Self {
        Self {
            active: None,
            displayed: None,
            selected: 0,
            focused_action: 0,
            scheme: config.appearance.color_scheme,
            overlay: Transition::default(),
            transition_duration: Duration::from_millis(config.behavior.transition_ms),
            hits: HitMap::default(),
        }
    }

    /// Apply a state change and animate the overlay towards the result.
    ///
    /// A change made while a previous transition is still running starts
    /// from wherever that transition currently is.
    pub fn with_transition(&mut self, change: impl FnOnce(&mut Self)) {
        let now = Instant::now();
        change(self);
        if self.active.is_some() {
            self.displayed = self.active;
        }
        let target = if self.active.is_some() { 1.0 } else { 0.0 };
        self.overlay.retarget(target, self.transition_duration, now);
    }

    /// Show the alert for `kind`.
    pub fn trigger(&mut self, kind: AlertKind) {
        if self.active == Some(kind) {
            return;
        }
        tracing::info!(?kind, "showing alert");
        self.with_transition(|presenter| {
            presenter.active = Some(kind);
            presenter.focused_action = 0;
        });
    }

    /// Hide the open alert.
    pub fn dismiss(&mut self) {
        if self.active.is_none() {
            return;
        }
        tracing::info!(kind = ?self.active, "dismissing alert");
        self.with_transition(|presenter| presenter.active = None);
    }

    /// Whether an alert is open and accepting input.
    pub fn is_alert_open(&self) -> bool {
        self.active.is_some()
    }

    /// Overlay visibility right now.
    pub fn overlay_progress(&self) -> f32 {
        self.overlay.progress()
    }

    /// Whether the overlay is still animating.
    pub fn is_animating(&self) -> bool {
        self.overlay.is_running_at(Instant::now())
    }

    /// The kind to draw: the open alert, or the one fading out.
    pub fn visible_kind(&self) -> Option<AlertKind> {
        match self.active {
            Some(kind) => Some(kind),
            None if self.overlay_progress() > 0.0 => self.displayed,
            None => None,
        }
    }

    /// The demo alert for `kind`; its OK button dismisses.
    pub fn demo_alert(kind: AlertKind) -> AlertView<AlertPresenter> {
        let copy = demo_copy(kind);
        AlertView::new(kind, copy.title, copy.message)
            .with_primary(copy.button, |presenter: &mut AlertPresenter| presenter.dismiss())
    }

    /// The view for the open alert.
    pub fn alert_view(&self) -> Option<AlertView<AlertPresenter>> {
        self.active.map(Self::demo_alert)
    }

    /// Move the trigger cursor down.
    pub fn select_next(&mut self) {
        if self.selected < AlertKind::all().len() - 1 {
            self.selected += 1;
        }
    }

    /// Move the trigger cursor up.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// The kind under the trigger cursor.
    pub fn selected_kind(&self) -> AlertKind {
        let kinds = AlertKind::all();
        kinds[self.selected.min(kinds.len() - 1)]
    }

    /// Trigger the kind under the cursor.
    pub fn trigger_selected(&mut self) {
        self.trigger(self.selected_kind());
    }

    /// Move focus to the next button of the open alert, wrapping around.
    pub fn focus_next_action(&mut self) {
        let count = self.alert_button_count();
        if count > 0 {
            self.focused_action = (self.focused_action + 1) % count;
        }
    }

    /// Move focus to the previous button of the open alert, wrapping around.
    pub fn focus_previous_action(&mut self) {
        let count = self.alert_button_count();
        if count > 0 {
            self.focused_action = (self.focused_action + count - 1) % count;
        }
    }

    fn alert_button_count(&self) -> usize {
        self.alert_view().map_or(0, |view| view.button_count())
    }

    /// Press the focused button of the open alert.
    pub fn press_focused(&mut self) -> bool {
        let Some(view) = self.alert_view() else {
            return false;
        };
        view.press(self.focused_action, self)
    }

    /// Flip between light and dark.
    pub fn toggle_color_scheme(&mut self) {
        self.scheme = self.scheme.toggled();
        tracing::debug!(scheme = ?self.scheme, "color scheme changed");
    }

    /// Handle a left click at a screen cell.
    ///
    /// With an alert open, a click on one of its buttons presses it and any
    /// other click dismisses. While a dismissed alert is still fading out,
    /// clicks are swallowed. Otherwise a click on a trigger button triggers it.
    pub fn click(&mut self, column: u16, row: u16) {
        if self.is_alert_open() {
            let hit = self
                .hits
                .buttons
                .iter()
                .position(|rect| contains(*rect, column, row));
            if let Some(index) = hit {
                self.focused_action = index;
                if let Some(view) = self.alert_view() {
                    view.press(index, self);
                }
            } else {
                self.dismiss();
            }
            return;
        }
        if self.overlay_progress() > 0.0 {
            tracing::debug!(column, row, "click ignored while alert fades out");
            return;
        }

        let hit = self
            .hits
            .triggers
            .iter()
            .find(|(rect, _)| contains(*rect, column, row))
            .map(|(_, kind)| *kind);
        if let Some(kind) = hit {
            if let Some(index) = AlertKind::all().iter().position(|k| *k == kind) {
                self.selected = index;
            }
            self.trigger(kind);
        }
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.left() && column < rect.right() && row >= rect.top() && row < rect.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_presenter() -> AlertPresenter {
        let mut config = Config::default();
        config.behavior.transition_ms = 0;
        AlertPresenter::new(&config)
    }

    #[test]
    fn test_starts_with_nothing_active() {
        let presenter = instant_presenter();
        assert_eq!(presenter.active, None);
        assert_eq!(presenter.visible_kind(), None);
        assert!(presenter.alert_view().is_none());
    }

    #[test]
    fn test_trigger_then_dismiss_round_trips() {
        let mut presenter = instant_presenter();
        for &kind in AlertKind::all() {
            presenter.trigger(kind);
            assert_eq!(presenter.active, Some(kind));
            presenter.dismiss();
            assert_eq!(presenter.active, None);
        }
    }

    #[test]
    fn test_trigger_same_kind_is_idempotent() {
        let mut presenter = instant_presenter();
        presenter.trigger(AlertKind::Question);
        presenter.trigger(AlertKind::Question);
        assert_eq!(presenter.active, Some(AlertKind::Question));
        assert_eq!(presenter.overlay_progress(), 1.0);
    }

    #[test]
    fn test_dismiss_when_nothing_active_is_noop() {
        let mut presenter = instant_presenter();
        presenter.dismiss();
        assert_eq!(presenter.active, None);
        assert_eq!(presenter.overlay_progress(), 0.0);
    }

    #[test]
    fn test_animated_trigger_and_dismiss_retarget_overlay() {
        let mut presenter = AlertPresenter::default();
        presenter.trigger(AlertKind::Network);
        assert!(presenter.is_animating());
        assert_eq!(presenter.overlay.target(), 1.0);
        assert_eq!(presenter.visible_kind(), Some(AlertKind::Network));

        presenter.dismiss();
        assert_eq!(presenter.active, None);
        assert_eq!(presenter.overlay.target(), 0.0);
        assert!(presenter.alert_view().is_none());
    }

    #[test]
    fn test_fade_out_draws_last_kind() {
        let mut presenter = instant_presenter();
        presenter.trigger(AlertKind::Question);
        // a slow fade-out starting from fully shown
        presenter.transition_duration = Duration::from_secs(60);
        presenter.dismiss();
        assert_eq!(presenter.active, None);
        assert!(presenter.overlay_progress() > 0.9);
        assert_eq!(presenter.visible_kind(), Some(AlertKind::Question));
    }

    #[test]
    fn test_demo_copy_for_error() {
        let copy = demo_copy(AlertKind::Error);
        assert_eq!(copy.title, "Error");
        assert_eq!(copy.message, "Fix this error");
        assert_eq!(copy.button, "OK");
    }

    #[test]
    fn test_press_focused_primary_dismisses() {
        let mut presenter = instant_presenter();
        presenter.trigger(AlertKind::Success);
        assert!(presenter.press_focused());
        assert_eq!(presenter.active, None);
        assert!(!presenter.press_focused());
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut presenter = instant_presenter();
        presenter.select_previous();
        assert_eq!(presenter.selected, 0);
        for _ in 0..10 {
            presenter.select_next();
        }
        assert_eq!(presenter.selected, 3);
        assert_eq!(presenter.selected_kind(), AlertKind::Network);
    }

    #[test]
    fn test_trigger_selected() {
        let mut presenter = instant_presenter();
        presenter.select_next();
        presenter.trigger_selected();
        assert_eq!(presenter.active, Some(AlertKind::Error));
    }

    #[test]
    fn test_focus_wraps_over_single_button() {
        let mut presenter = instant_presenter();
        presenter.focus_next_action();
        assert_eq!(presenter.focused_action, 0);
        presenter.trigger(AlertKind::Error);
        presenter.focus_next_action();
        assert_eq!(presenter.focused_action, 0);
        presenter.focus_previous_action();
        assert_eq!(presenter.focused_action, 0);
    }

    #[test]
    fn test_click_on_trigger() {
        let mut presenter = instant_presenter();
        presenter.hits.triggers = vec![
            (Rect::new(0, 0, 10, 3), AlertKind::Success),
            (Rect::new(0, 4, 10, 3), AlertKind::Question),
        ];
        presenter.click(5, 5);
        assert_eq!(presenter.active, Some(AlertKind::Question));
        assert_eq!(presenter.selected, 2);
    }

    #[test]
    fn test_click_on_card_dismisses() {
        let mut presenter = instant_presenter();
        presenter.trigger(AlertKind::Error);
        presenter.hits.card = Some(Rect::new(10, 10, 20, 8));
        presenter.hits.buttons = vec![Rect::new(12, 14, 16, 3)];

        presenter.click(12, 11);
        assert_eq!(presenter.active, None);
    }

    #[test]
    fn test_click_on_backdrop_dismisses() {
        let mut presenter = instant_presenter();
        presenter.trigger(AlertKind::Question);
        presenter.hits.card = Some(Rect::new(10, 10, 20, 8));

        presenter.click(0, 0);
        assert_eq!(presenter.active, None);
    }

    #[test]
    fn test_clicks_are_swallowed_while_alert_fades_out() {
        let mut presenter = instant_presenter();
        presenter.hits.triggers = vec![(Rect::new(10, 10, 20, 3), AlertKind::Question)];
        presenter.trigger(AlertKind::Error);
        presenter.transition_duration = Duration::from_secs(60);
        presenter.dismiss();

        // lands on the fading card, above the Question trigger
        presenter.click(15, 11);
        assert_eq!(presenter.active, None);
        assert_eq!(presenter.selected, 0);
        assert_eq!(presenter.visible_kind(), Some(AlertKind::Error));
    }

    #[test]
    fn test_click_on_trigger_after_fade_out() {
        let mut presenter = instant_presenter();
        presenter.hits.triggers = vec![(Rect::new(10, 10, 20, 3), AlertKind::Question)];
        presenter.trigger(AlertKind::Error);
        presenter.dismiss();
        assert_eq!(presenter.overlay_progress(), 0.0);

        presenter.click(15, 11);
        assert_eq!(presenter.active, Some(AlertKind::Question));
    }

    #[test]
    fn test_click_on_alert_button_presses_it() {
        let mut presenter = instant_presenter();
        presenter.trigger(AlertKind::Success);
        presenter.hits.card = Some(Rect::new(10, 10, 20, 8));
        presenter.hits.buttons = vec![Rect::new(12, 14, 16, 3)];

        presenter.click(15, 15);
        assert_eq!(presenter.active, None);
    }

    #[test]
    fn test_toggle_color_scheme() {
        let mut presenter = instant_presenter();
        let initial = presenter.scheme;
        presenter.toggle_color_scheme();
        assert_eq!(presenter.scheme, initial.toggled());
    }
}
