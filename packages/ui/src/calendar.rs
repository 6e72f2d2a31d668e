//! Date-range picker for the trip search bar.
//!
//! Selection rules:
//!
//! - the first click sets the start date
//! - a click on or after the start sets the end date and completes the range
//! - a click before the start restarts the selection there
//! - any click after a completed range starts a new one

use api::models::DateRange;
use chrono::{Datelike, Local, Months, NaiveDate};
use dioxus::prelude::*;

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;

pub const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month `delta` months away from `first`.
pub fn shift_month(first: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        first.checked_add_months(months)
    } else {
        first.checked_sub_months(months)
    };
    month_start(shifted.unwrap_or(first))
}

/// Cells of a Sunday-first month grid. Leading `None`s pad the first week.
pub fn month_grid(first: NaiveDate) -> Vec<Option<NaiveDate>> {
    let first = month_start(first);
    let offset = first.weekday().num_days_from_sunday() as usize;
    let mut cells = vec![None; offset];
    cells.extend(
        first
            .iter_days()
            .take_while(|d| d.month() == first.month())
            .map(Some),
    );
    cells
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeSelection {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl RangeSelection {
    /// Apply a click. Returns the range when this click completed it.
    pub fn click(&mut self, date: NaiveDate) -> Option<DateRange> {
        match (self.start, self.end) {
            (Some(start), None) if date >= start => {
                self.end = Some(date);
                DateRange::new(start, date)
            }
            _ => {
                self.start = Some(date);
                self.end = None;
                None
            }
        }
    }

    pub fn is_endpoint(&self, date: NaiveDate) -> bool {
        self.start == Some(date) || self.end == Some(date)
    }

    /// Strictly between start and end.
    pub fn is_inside(&self, date: NaiveDate) -> bool {
        matches!((self.start, self.end), (Some(s), Some(e)) if s < date && date < e)
    }
}

#[component]
pub fn DateRangePicker(on_select: EventHandler<DateRange>) -> Element {
    let mut shown_month = use_signal(|| month_start(Local::now().date_naive()));
    let selection = use_signal(RangeSelection::default);

    let title = shown_month().format("%B %Y").to_string();
    let cells = month_grid(shown_month());

    rsx! {
        div {
            class: "calendar",
            onclick: move |evt| evt.stop_propagation(),
            div {
                class: "calendar-header",
                button {
                    class: "calendar-nav",
                    onclick: move |_| shown_month.set(shift_month(shown_month(), -1)),
                    Icon { icon: FaChevronLeft, width: 14, height: 14 }
                }
                span { "{title}" }
                button {
                    class: "calendar-nav",
                    onclick: move |_| shown_month.set(shift_month(shown_month(), 1)),
                    Icon { icon: FaChevronRight, width: 14, height: 14 }
                }
            }
            div {
                class: "calendar-grid",
                for day in WEEKDAYS {
                    div { key: "{day}", class: "calendar-weekday", "{day}" }
                }
                for (i, cell) in cells.into_iter().enumerate() {
                    {day_cell(i, cell, selection, on_select)}
                }
            }
        }
    }
}

fn day_cell(
    i: usize,
    cell: Option<NaiveDate>,
    mut selection: Signal<RangeSelection>,
    on_select: EventHandler<DateRange>,
) -> Element {
    let Some(date) = cell else {
        return rsx! { div { key: "pad-{i}", class: "calendar-day" } };
    };
    let current = selection();
    let class = if current.is_endpoint(date) {
        "calendar-day calendar-day--selected"
    } else if current.is_inside(date) {
        "calendar-day calendar-day--in-range"
    } else {
        "calendar-day"
    };
    let label = date.day();

    rsx! {
        button {
            key: "{date}",
            class: "{class}",
            onclick: move |_| {
                let completed = selection.write().click(date);
                if let Some(range) = completed {
                    on_select.call(range);
                }
            },
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_grid_offsets() {
        // March 2026 starts on a Sunday
        let march = month_grid(date(2026, 3, 17));
        assert_eq!(march.len(), 31);
        assert_eq!(march[0], Some(date(2026, 3, 1)));

        // April 2026 starts on a Wednesday
        let april = month_grid(date(2026, 4, 1));
        assert_eq!(april.iter().take_while(|c| c.is_none()).count(), 3);
        assert_eq!(april.last(), Some(&Some(date(2026, 4, 30))));
    }

    #[test]
    fn test_shift_month_crosses_years() {
        assert_eq!(shift_month(date(2026, 12, 1), 1), date(2027, 1, 1));
        assert_eq!(shift_month(date(2026, 1, 1), -1), date(2025, 12, 1));
        assert_eq!(shift_month(date(2026, 1, 31), 1), date(2026, 2, 1));
    }

    #[test]
    fn test_range_selection() {
        let mut selection = RangeSelection::default();
        assert_eq!(selection.click(date(2026, 3, 9)), None);

        // Before the start: restart
        assert_eq!(selection.click(date(2026, 3, 3)), None);
        assert_eq!(selection.start, Some(date(2026, 3, 3)));

        let range = selection.click(date(2026, 3, 9)).unwrap();
        assert_eq!(range.label(), "Mar 3, 2026 to Mar 9, 2026");
        assert!(selection.is_endpoint(date(2026, 3, 9)));
        assert!(selection.is_inside(date(2026, 3, 5)));
        assert!(!selection.is_inside(date(2026, 3, 3)));

        // After a completed range the next click starts over
        assert_eq!(selection.click(date(2026, 4, 1)), None);
        assert_eq!(selection.end, None);
    }

    #[test]
    fn test_single_day_range() {
        let mut selection = RangeSelection::default();
        selection.click(date(2026, 3, 3));
        let range = selection.click(date(2026, 3, 3)).unwrap();
        assert_eq!(range.days(), 1);
    }
}
