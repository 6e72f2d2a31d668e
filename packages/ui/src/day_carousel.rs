//! One-day-at-a-time view of an itinerary.
//!
//! Prev/next wrap around at both ends. On touch screens a horizontal drag of
//! more than [`SWIPE_THRESHOLD`] pixels turns the page once per gesture.

use api::models::DailyItinerary;
use dioxus::prelude::*;

use crate::day_card::DayCard;
use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;

pub const SWIPE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Next,
    Prev,
}

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

/// Dragging left (finger moves toward smaller x) shows the next day.
pub fn swipe_direction(start_x: f64, current_x: f64) -> Option<Swipe> {
    let diff = start_x - current_x;
    if diff.abs() <= SWIPE_THRESHOLD {
        None
    } else if diff > 0.0 {
        Some(Swipe::Next)
    } else {
        Some(Swipe::Prev)
    }
}

#[component]
pub fn DayCarousel(days: Vec<DailyItinerary>) -> Element {
    let mut current = use_signal(|| 0usize);
    let mut touch_start = use_signal(|| Option::<f64>::None);
    let len = days.len();

    let Some(day) = days.get(current().min(len.saturating_sub(1))).cloned() else {
        return rsx! {};
    };
    let index = current().min(len - 1);
    let day_number = index + 1;

    rsx! {
        div {
            class: "carousel",
            ontouchstart: move |evt: TouchEvent| {
                if let Some(touch) = evt.touches().first() {
                    touch_start.set(Some(touch.client_coordinates().x));
                }
            },
            ontouchmove: move |evt: TouchEvent| {
                let Some(start) = touch_start() else { return };
                let touches = evt.touches();
                let Some(touch) = touches.first() else { return };
                match swipe_direction(start, touch.client_coordinates().x) {
                    Some(Swipe::Next) => current.set(next_index(current(), len)),
                    Some(Swipe::Prev) => current.set(prev_index(current(), len)),
                    None => return,
                }
                touch_start.set(None);
            },
            ontouchend: move |_| touch_start.set(None),

            div { class: "carousel-progress", "Day {day_number} of {len}" }

            button {
                class: "carousel-arrow carousel-arrow--prev",
                onclick: move |_| current.set(prev_index(current(), len)),
                Icon { icon: FaChevronLeft, width: 18, height: 18 }
            }
            button {
                class: "carousel-arrow carousel-arrow--next",
                onclick: move |_| current.set(next_index(current(), len)),
                Icon { icon: FaChevronRight, width: 18, height: 18 }
            }

            DayCard { day, index }

            div {
                class: "carousel-dots",
                for i in 0..len {
                    button {
                        key: "{i}",
                        class: dot_class(i == index),
                        onclick: move |_| current.set(i),
                    }
                }
            }
        }
    }
}

fn dot_class(active: bool) -> &'static str {
    if active {
        "carousel-dot carousel-dot--active"
    } else {
        "carousel-dot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(prev_index(2, 3), 1);
    }

    #[test]
    fn test_single_and_empty() {
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }

    #[test]
    fn test_swipe_threshold() {
        assert_eq!(swipe_direction(200.0, 150.0), None);
        assert_eq!(swipe_direction(200.0, 149.0), Some(Swipe::Next));
        assert_eq!(swipe_direction(100.0, 151.0), Some(Swipe::Prev));
        assert_eq!(swipe_direction(100.0, 100.0), None);
    }
}
