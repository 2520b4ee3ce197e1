//! Press / drag / click disambiguation.
//!
//! Timestamps are passed in rather than read from a clock so every transition
//! can be driven from tests.

use std::time::{Duration, Instant};

use super::geometry::Point;
use crate::types::CardId;

/// State of the pointer gesture on the board
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// No button held
    #[default]
    Idle,
    /// Button went down on a card and has not travelled far yet
    Pressed {
        card: CardId,
        /// Pointer position at press
        origin: Point,
        /// Pointer offset from the card's top-left corner
        grab: Point,
        at: Instant,
    },
    /// Travel exceeded the threshold; the card follows the pointer
    Dragging { card: CardId, grab: Point },
}

/// What a finished gesture amounted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Nothing was pressed
    None,
    /// Short, still press: open the card
    Clicked(CardId),
    /// The card was moved
    Dragged(CardId),
    /// Still, but held past the click window
    Released(CardId),
}

impl Gesture {
    /// Start a press on `card` whose top-left corner is at `card_origin`.
    pub fn press(card: CardId, pointer: Point, card_origin: Point, now: Instant) -> Self {
        Gesture::Pressed {
            card,
            origin: pointer,
            grab: pointer.offset_from(card_origin),
            at: now,
        }
    }

    pub fn card(&self) -> Option<CardId> {
        match self {
            Gesture::Idle => None,
            Gesture::Pressed { card, .. } | Gesture::Dragging { card, .. } => Some(*card),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Gesture::Dragging { .. })
    }

    /// Feed a pointer move. Once dragging, returns the card and the top-left
    /// corner it should move to (unclamped).
    pub fn motion(&mut self, pointer: Point, threshold: f64) -> Option<(CardId, Point)> {
        match *self {
            Gesture::Idle => None,
            Gesture::Pressed {
                card, origin, grab, ..
            } => {
                if origin.distance_to(pointer) < threshold {
                    return None;
                }
                *self = Gesture::Dragging { card, grab };
                Some((card, pointer.offset_from(grab)))
            }
            Gesture::Dragging { card, grab } => Some((card, pointer.offset_from(grab))),
        }
    }

    /// Finish the gesture and return to [`Gesture::Idle`].
    pub fn release(
        &mut self,
        pointer: Point,
        now: Instant,
        threshold: f64,
        click_window: Duration,
    ) -> GestureOutcome {
        let outcome = match *self {
            Gesture::Idle => GestureOutcome::None,
            Gesture::Dragging { card, .. } => GestureOutcome::Dragged(card),
            Gesture::Pressed {
                card, origin, at, ..
            } => {
                if origin.distance_to(pointer) >= threshold {
                    GestureOutcome::Dragged(card)
                } else if now.saturating_duration_since(at) < click_window {
                    GestureOutcome::Clicked(card)
                } else {
                    GestureOutcome::Released(card)
                }
            }
        };
        *self = Gesture::Idle;
        outcome
    }

    pub fn cancel(&mut self) {
        *self = Gesture::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 5.0;
    const WINDOW: Duration = Duration::from_millis(200);

    fn pressed(now: Instant) -> Gesture {
        Gesture::press(
            CardId(1),
            Point::new(110.0, 120.0),
            Point::new(100.0, 100.0),
            now,
        )
    }

    #[test]
    fn test_quick_still_press_is_click() {
        let t0 = Instant::now();
        let mut g = pressed(t0);
        assert_eq!(g.motion(Point::new(112.0, 121.0), THRESHOLD), None);
        let out = g.release(Point::new(112.0, 121.0), t0 + Duration::from_millis(80), THRESHOLD, WINDOW);
        assert_eq!(out, GestureOutcome::Clicked(CardId(1)));
        assert_eq!(g, Gesture::Idle);
    }

    #[test]
    fn test_slow_still_press_is_release() {
        let t0 = Instant::now();
        let mut g = pressed(t0);
        let out = g.release(Point::new(110.0, 120.0), t0 + Duration::from_millis(450), THRESHOLD, WINDOW);
        assert_eq!(out, GestureOutcome::Released(CardId(1)));
    }

    #[test]
    fn test_travel_starts_drag_and_keeps_grab_offset() {
        let t0 = Instant::now();
        let mut g = pressed(t0);
        let step = g.motion(Point::new(130.0, 150.0), THRESHOLD);
        // grab offset is (10, 20)
        assert_eq!(step, Some((CardId(1), Point::new(120.0, 130.0))));
        assert!(g.is_dragging());

        // Coming back near the origin does not turn it into a click
        g.motion(Point::new(110.0, 120.0), THRESHOLD);
        let out = g.release(Point::new(110.0, 120.0), t0 + Duration::from_millis(50), THRESHOLD, WINDOW);
        assert_eq!(out, GestureOutcome::Dragged(CardId(1)));
    }

    #[test]
    fn test_release_far_without_moves_is_drag() {
        let t0 = Instant::now();
        let mut g = pressed(t0);
        let out = g.release(Point::new(200.0, 200.0), t0, THRESHOLD, WINDOW);
        assert_eq!(out, GestureOutcome::Dragged(CardId(1)));
    }

    #[test]
    fn test_idle_release_is_none() {
        let mut g = Gesture::Idle;
        assert_eq!(g.motion(Point::new(1.0, 1.0), THRESHOLD), None);
        assert_eq!(
            g.release(Point::default(), Instant::now(), THRESHOLD, WINDOW),
            GestureOutcome::None
        );
    }

    #[test]
    fn test_cancel() {
        let mut g = pressed(Instant::now());
        assert_eq!(g.card(), Some(CardId(1)));
        g.cancel();
        assert_eq!(g.card(), None);
    }
}
