use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::calendar::{self, shift_months};
use crate::clock::{Clock, SystemClock};
use crate::config::{Mode, PickerConfig};
use crate::overlay::Overlay;
use crate::rules::{self, DisabledReason};
use crate::selection::SelectionState;
use crate::value::ValuePort;

const END_PLACEHOLDER: &str = "End Date";
const BASIC_PLACEHOLDER: &str = "Select Date Range";
const ADVANCED_PLACEHOLDER: &str = "Advanced Date Selection";

/// A two-month date range picker: view navigation, range selection with
/// mode-dependent validity rules, and the value pushed to the host form.
///
/// `left_month` and `right_month` are always one month apart; navigation
/// moves both together. "Today" is read from the injected [`Clock`].
#[derive(Debug)]
pub struct DateRangePicker<C = SystemClock> {
    config: PickerConfig,
    clock: C,
    selection: SelectionState,
    left_month: NaiveDate,
    right_month: NaiveDate,
    left_days: Vec<NaiveDate>,
    right_days: Vec<NaiveDate>,
    overlay: Overlay,
    value: ValuePort,
}

impl DateRangePicker<SystemClock> {
    pub fn with_system_clock(config: PickerConfig) -> Self {
        Self::new(config, SystemClock)
    }
}

impl<C: Clock> DateRangePicker<C> {
    /// Create a picker showing the current month and the next one, with an
    /// empty selection and the overlay closed.
    pub fn new(config: PickerConfig, clock: C) -> Self {
        let today = clock.today();
        let right = shift_months(today, 1).unwrap_or(today);
        let mut picker = Self {
            config,
            clock,
            selection: SelectionState::default(),
            left_month: today,
            right_month: right,
            left_days: Vec::new(),
            right_days: Vec::new(),
            overlay: Overlay::default(),
            value: ValuePort::new(),
        };
        picker.generate_days();
        picker
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Replace the host options. The current selection is kept.
    pub fn set_config(&mut self, config: PickerConfig) {
        debug!(mode = %config.mode, "picker config replaced");
        self.config = config;
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn left_month(&self) -> NaiveDate {
        self.left_month
    }

    pub fn right_month(&self) -> NaiveDate {
        self.right_month
    }

    pub fn left_days(&self) -> &[NaiveDate] {
        &self.left_days
    }

    pub fn right_days(&self) -> &[NaiveDate] {
        &self.right_days
    }

    fn generate_days(&mut self) {
        self.left_days = calendar::month_grid(self.left_month);
        self.right_days = calendar::month_grid(self.right_month);
    }

    /// Move both view months by `delta` months. Out-of-range moves are dropped.
    fn shift_view(&mut self, delta: i32) {
        match (
            shift_months(self.left_month, delta),
            shift_months(self.right_month, delta),
        ) {
            (Some(left), Some(right)) => {
                self.left_month = left;
                self.right_month = right;
                self.generate_days();
            }
            _ => warn!(delta, "view navigation out of calendar range, ignoring"),
        }
    }

    pub fn previous_month(&mut self) {
        self.shift_view(-1);
    }

    pub fn next_month(&mut self) {
        self.shift_view(1);
    }

    pub fn previous_year(&mut self) {
        self.shift_view(-12);
    }

    pub fn next_year(&mut self) {
        self.shift_view(12);
    }

    /// Jump the view so that `month` is on the left.
    pub fn show_month(&mut self, month: NaiveDate) {
        match shift_months(month, 1) {
            Some(right) => {
                self.left_month = month;
                self.right_month = right;
                self.generate_days();
            }
            None => warn!(%month, "month out of calendar range, ignoring"),
        }
    }

    /// Rule that currently disables `day`, if any.
    pub fn disabled_reason(&self, day: NaiveDate) -> Option<DisabledReason> {
        rules::disabled_reason(&self.config, self.selection.start(), self.clock.now(), day)
    }

    pub fn is_disabled(&self, day: NaiveDate) -> bool {
        self.disabled_reason(day).is_some()
    }

    /// Click on a day. Returns `false` when the day is disabled and the click
    /// was ignored.
    pub fn select_date(&mut self, day: NaiveDate) -> bool {
        if let Some(reason) = self.disabled_reason(day) {
            debug!(%day, %reason, "ignoring click on disabled day");
            return false;
        }
        self.selection.select(day);
        debug!(
            start = ?self.selection.start(),
            end = ?self.selection.end(),
            "selection updated"
        );
        true
    }

    /// Pointer moved over a day. Disabled days are ignored.
    pub fn on_date_hover(&mut self, day: NaiveDate) {
        if self.is_disabled(day) {
            return;
        }
        self.selection.hover_over(day);
    }

    /// Reset start and end. The hover preview is not touched.
    pub fn clear_date_range(&mut self) {
        self.selection.clear();
    }

    /// Push the selected range to the host and close the overlay.
    ///
    /// Returns the pushed value, or `None` if the range is incomplete, in
    /// which case nothing is pushed.
    pub fn apply_date_range(&mut self) -> Option<String> {
        let pushed = match self.selection.range() {
            Some((start, end)) => {
                let value = format!("{} - {}", self.format(start), self.format(end));
                self.value.push(value.clone());
                Some(value)
            }
            None => {
                warn!("apply with incomplete range, nothing pushed");
                None
            }
        };
        self.overlay.close();
        pushed
    }

    fn format(&self, date: NaiveDate) -> String {
        self.config.date_format.format(date)
    }

    /// Text for the input field.
    pub fn display_date_range(&self) -> String {
        let (start, end) = (self.selection.start(), self.selection.end());
        if start.is_none() && end.is_none() {
            return match self.config.mode {
                Mode::Basic => BASIC_PLACEHOLDER.to_string(),
                Mode::Advanced => ADVANCED_PLACEHOLDER.to_string(),
            };
        }
        let start = start.map(|d| self.format(d)).unwrap_or_default();
        let end = end
            .map(|d| self.format(d))
            .unwrap_or_else(|| END_PLACEHOLDER.to_string());
        format!("{start} - {end}")
    }

    /// Days between the endpoints of a complete range.
    pub fn range_days(&self) -> Option<i64> {
        self.selection
            .range()
            .map(|(start, end)| calendar::date_span(start, end))
    }

    pub fn is_selected(&self, day: NaiveDate) -> bool {
        self.selection.is_selected(day)
    }

    pub fn is_in_range(&self, day: NaiveDate) -> bool {
        self.selection.is_in_range(day)
    }

    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    pub fn on_input_focus(&mut self) {
        self.overlay.toggle();
    }

    pub fn handle_document_click(&mut self, inside: bool) {
        self.overlay.handle_document_click(inside);
    }

    pub fn value(&self) -> Option<&str> {
        self.value.value()
    }

    /// Host-side write of the form value.
    pub fn write_value(&mut self, value: impl Into<String>) {
        self.value.set_value(value);
    }

    pub fn on_value_change(&mut self, callback: impl FnMut(&str) + 'static) {
        self.value.on_value_change(callback);
    }

    pub fn on_touched(&mut self, callback: impl FnMut() + 'static) {
        self.value.on_touched(callback);
    }
}
