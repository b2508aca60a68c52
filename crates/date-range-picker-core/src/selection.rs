use chrono::NaiveDate;

/// In-progress or committed start/end selection.
///
/// Invariant: `end` is only set when `start` is set, and `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    hover: Option<NaiveDate>,
}

impl SelectionState {
    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn hover(&self) -> Option<NaiveDate> {
        self.hover
    }

    /// Both endpoints, once the range is complete.
    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.start.zip(self.end)
    }

    /// True while a start is chosen and the end is still open.
    pub fn is_pending(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }

    /// Apply a click on `day`.
    ///
    /// A click with no start, or after a complete range, starts over. A
    /// second click closes the range, swapping endpoints if it lands before
    /// the start.
    pub fn select(&mut self, day: NaiveDate) {
        match (self.start, self.end) {
            (Some(start), None) if day < start => {
                self.start = Some(day);
                self.end = Some(start);
            }
            (Some(_), None) => self.end = Some(day),
            _ => {
                self.start = Some(day);
                self.end = None;
            }
        }
    }

    /// Track the pointer for the range preview. Cleared outside of a pending selection.
    pub fn hover_over(&mut self, day: NaiveDate) {
        self.hover = self.is_pending().then_some(day);
    }

    /// Drop both endpoints. The hover preview is kept as-is.
    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    pub fn is_selected(&self, day: NaiveDate) -> bool {
        self.start == Some(day) || self.end == Some(day)
    }

    /// Strictly between the endpoints, or between start and the hover
    /// preview while the end is still open.
    pub fn is_in_range(&self, day: NaiveDate) -> bool {
        match (self.start, self.end, self.hover) {
            (Some(start), Some(end), _) => start < day && day < end,
            (Some(start), None, Some(hover)) => start < day && day < hover,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assert_ordered(state: &SelectionState) {
        if let Some(end) = state.end() {
            let start = state.start().expect("end without start");
            assert!(start <= end, "{start} > {end}");
        }
    }

    #[test]
    fn first_click_sets_start() {
        let mut state = SelectionState::default();
        state.select(date(2024, 6, 5));
        assert_eq!(state.start(), Some(date(2024, 6, 5)));
        assert_eq!(state.end(), None);
        assert!(state.is_pending());
    }

    #[test]
    fn second_click_sets_end() {
        let mut state = SelectionState::default();
        state.select(date(2024, 6, 5));
        state.select(date(2024, 6, 9));
        assert_eq!(state.range(), Some((date(2024, 6, 5), date(2024, 6, 9))));
    }

    #[test]
    fn second_click_before_start_swaps() {
        let mut state = SelectionState::default();
        state.select(date(2024, 6, 9));
        state.select(date(2024, 6, 5));
        assert_eq!(state.range(), Some((date(2024, 6, 5), date(2024, 6, 9))));
    }

    #[test]
    fn same_day_twice_is_single_day_range() {
        let mut state = SelectionState::default();
        state.select(date(2024, 6, 5));
        state.select(date(2024, 6, 5));
        assert_eq!(state.range(), Some((date(2024, 6, 5), date(2024, 6, 5))));
    }

    #[test]
    fn third_click_starts_over() {
        let mut state = SelectionState::default();
        state.select(date(2024, 6, 5));
        state.select(date(2024, 6, 9));
        state.select(date(2024, 6, 1));
        assert_eq!(state.start(), Some(date(2024, 6, 1)));
        assert_eq!(state.end(), None);
    }

    #[test]
    fn ordering_holds_for_any_click_sequence() {
        let clicks = [20, 3, 3, 17, 1, 30, 12, 12, 8, 25, 2, 2, 29];
        let mut state = SelectionState::default();
        for d in clicks {
            state.select(date(2024, 6, d));
            assert_ordered(&state);
        }
    }

    #[test]
    fn hover_only_while_pending() {
        let mut state = SelectionState::default();
        state.hover_over(date(2024, 6, 7));
        assert_eq!(state.hover(), None);

        state.select(date(2024, 6, 5));
        state.hover_over(date(2024, 6, 7));
        assert_eq!(state.hover(), Some(date(2024, 6, 7)));

        state.select(date(2024, 6, 9));
        state.hover_over(date(2024, 6, 10));
        assert_eq!(state.hover(), None);
    }

    #[test]
    fn clear_keeps_hover() {
        let mut state = SelectionState::default();
        state.select(date(2024, 6, 5));
        state.hover_over(date(2024, 6, 7));
        state.clear();
        assert_eq!(state.start(), None);
        assert_eq!(state.end(), None);
        assert_eq!(state.hover(), Some(date(2024, 6, 7)));
    }

    #[test]
    fn is_selected_matches_endpoints() {
        let mut state = SelectionState::default();
        state.select(date(2024, 6, 5));
        state.select(date(2024, 6, 9));
        assert!(state.is_selected(date(2024, 6, 5)));
        assert!(state.is_selected(date(2024, 6, 9)));
        assert!(!state.is_selected(date(2024, 6, 7)));
    }

    #[test]
    fn in_range_is_exclusive() {
        let mut state = SelectionState::default();
        state.select(date(2024, 6, 5));
        state.select(date(2024, 6, 9));
        assert!(!state.is_in_range(date(2024, 6, 5)));
        assert!(state.is_in_range(date(2024, 6, 6)));
        assert!(state.is_in_range(date(2024, 6, 8)));
        assert!(!state.is_in_range(date(2024, 6, 9)));
    }

    #[test]
    fn in_range_follows_hover_preview() {
        let mut state = SelectionState::default();
        state.select(date(2024, 6, 5));
        assert!(!state.is_in_range(date(2024, 6, 6)));

        state.hover_over(date(2024, 6, 8));
        assert!(state.is_in_range(date(2024, 6, 6)));
        assert!(state.is_in_range(date(2024, 6, 7)));
        assert!(!state.is_in_range(date(2024, 6, 8)));

        // Hovering before the start previews nothing
        state.hover_over(date(2024, 6, 2));
        assert!(!state.is_in_range(date(2024, 6, 3)));
    }
}
