// Copyright 2025 the Juxtapose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: track the offset of a single pointer drag from its start point.
//!
//! ## Usage
//!
//! 1) Start a session with [`DragSession::begin`] on pointer-down. Presses of
//!    any button other than the primary one are rejected.
//! 2) On each pointer-move, call [`DragSession::update`]. It returns the delta
//!    since the previous update; [`DragSession::offset`] returns the total
//!    offset from the start point.
//! 3) On pointer-up, consume the session with [`DragSession::finish`] to get
//!    the offset that should be committed.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use juxtapose_gesture::{DragSession, PointerButton};
//!
//! let mut drag = DragSession::begin(PointerButton::Primary, Point::new(10.0, 20.0)).unwrap();
//!
//! // Move to (15, 25): delta is (5, 5).
//! let delta = drag.update(Point::new(15.0, 25.0));
//! assert_eq!(delta, Vec2::new(5.0, 5.0));
//!
//! // Move to (12, 30): delta is (-3, 5), total offset is (2, 10).
//! drag.update(Point::new(12.0, 30.0));
//! assert_eq!(drag.offset(), Vec2::new(2.0, 10.0));
//! ```

use kurbo::{Point, Vec2};

use crate::button::PointerButton;

/// State of one in-progress drag gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    start: Point,
    last: Point,
}

impl DragSession {
    /// Starts a drag at `pos` if `button` may start gestures.
    ///
    /// Returns `None` for non-primary buttons.
    #[must_use]
    pub fn begin(button: PointerButton, pos: Point) -> Option<Self> {
        button.starts_gesture().then_some(Self {
            start: pos,
            last: pos,
        })
    }

    /// Records a new pointer position, returning the movement since the last update.
    pub fn update(&mut self, pos: Point) -> Vec2 {
        let delta = pos - self.last;
        self.last = pos;
        delta
    }

    /// Position where the drag started.
    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Last recorded pointer position.
    #[must_use]
    pub fn last(&self) -> Point {
        self.last
    }

    /// Total offset from the start point to the last recorded position.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.last - self.start
    }

    /// Ends the drag, returning the offset to commit.
    #[must_use]
    pub fn finish(self) -> Vec2 {
        self.offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_rejects_non_primary_buttons() {
        let pos = Point::new(3.0, 4.0);
        assert!(DragSession::begin(PointerButton::Auxiliary, pos).is_none());
        assert!(DragSession::begin(PointerButton::Secondary, pos).is_none());
        assert!(DragSession::begin(PointerButton::Other(7), pos).is_none());
    }

    #[test]
    fn begin_sets_start_and_last() {
        let start = Point::new(10.0, 20.0);
        let drag = DragSession::begin(PointerButton::Primary, start).unwrap();

        assert_eq!(drag.start(), start);
        assert_eq!(drag.last(), start);
        assert_eq!(drag.offset(), Vec2::ZERO);
    }

    #[test]
    fn multiple_updates_track_incremental_deltas() {
        let mut drag = DragSession::begin(PointerButton::Primary, Point::ZERO).unwrap();

        assert_eq!(drag.update(Point::new(5.0, 3.0)), Vec2::new(5.0, 3.0));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Vec2::new(3.0, 4.0));
        assert_eq!(drag.update(Point::new(10.0, 10.0)), Vec2::new(2.0, 3.0));

        assert_eq!(drag.offset(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn offset_is_measured_from_start_not_last_delta() {
        let mut drag = DragSession::begin(PointerButton::Primary, Point::new(100.0, 100.0)).unwrap();
        drag.update(Point::new(140.0, 90.0));
        drag.update(Point::new(90.0, 85.0));

        assert_eq!(drag.offset(), Vec2::new(-10.0, -15.0));
        assert_eq!(drag.finish(), Vec2::new(-10.0, -15.0));
    }

    #[test]
    fn returning_to_start_commits_nothing() {
        let start = Point::new(50.0, 50.0);
        let mut drag = DragSession::begin(PointerButton::Primary, start).unwrap();
        drag.update(Point::new(80.0, 10.0));
        drag.update(start);

        assert_eq!(drag.finish(), Vec2::ZERO);
    }

    #[test]
    fn fractional_coordinates() {
        let mut drag = DragSession::begin(PointerButton::Primary, Point::new(1.5, 2.7)).unwrap();
        let delta = drag.update(Point::new(3.2, 4.1));

        let expected = Vec2::new(1.7, 1.4);
        assert!((delta.x - expected.x).abs() < f64::EPSILON * 10.0);
        assert!((delta.y - expected.y).abs() < f64::EPSILON * 10.0);
        assert!((drag.offset().x - expected.x).abs() < f64::EPSILON * 10.0);
        assert!((drag.offset().y - expected.y).abs() < f64::EPSILON * 10.0);
    }
}
