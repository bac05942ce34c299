// SPDX-License-Identifier: BSD-3-Clause

//! Freehand stroke capture.
//!
//! A drawing session tracks a single stroke through an `Idle -> Tracking ->
//! Idle` gesture cycle. Points arrive in drawing-surface coordinates and are
//! stored in order; the rendered shape is the polyline through them. Nothing
//! here is persisted: the path lives and dies with the session.

/// A 2D point in drawing-surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The ordered points of one freehand stroke.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokePath {
    points: Vec<Point>,
}

impl StrokePath {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Whether a drag gesture is currently feeding the stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Tracking,
}

/// State for one visit to the drawing surface.
///
/// Only one stroke is active at a time: each gesture start discards the
/// previous path and begins a new one at the gesture's location.
#[derive(Debug, Clone)]
pub struct SketchSession {
    path: StrokePath,
    phase: GesturePhase,
}

impl SketchSession {
    /// Create a session with an empty path, ready for the first gesture.
    pub fn new() -> Self {
        Self {
            path: StrokePath::default(),
            phase: GesturePhase::Idle,
        }
    }

    /// The stroke captured so far.
    pub fn path(&self) -> &StrokePath {
        &self.path
    }

    pub fn is_tracking(&self) -> bool {
        self.phase == GesturePhase::Tracking
    }

    /// Gesture start: reset the path to a single point at `point`.
    pub fn begin_stroke(&mut self, point: Point) {
        self.path.points.clear();
        self.path.points.push(point);
        self.phase = GesturePhase::Tracking;
    }

    /// Gesture move: append `point` to the active stroke.
    ///
    /// Ignored while no gesture is tracking.
    pub fn extend_stroke(&mut self, point: Point) {
        if self.phase != GesturePhase::Tracking {
            return;
        }
        self.path.points.push(point);
    }

    /// Gesture end: back to idle. The finished path stays on screen.
    pub fn end_stroke(&mut self) {
        self.phase = GesturePhase::Idle;
    }
}

impl Default for SketchSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_produces_points_in_order() {
        let mut session = SketchSession::new();
        session.begin_stroke(Point::new(0.0, 0.0));
        session.extend_stroke(Point::new(5.0, 5.0));
        session.extend_stroke(Point::new(10.0, 2.0));
        session.end_stroke();

        assert_eq!(
            session.path().points(),
            &[
                Point::new(0.0, 0.0),
                Point::new(5.0, 5.0),
                Point::new(10.0, 2.0),
            ]
        );
        assert!(!session.is_tracking());
    }

    #[test]
    fn new_gesture_discards_previous_stroke() {
        let mut session = SketchSession::new();
        session.begin_stroke(Point::new(0.0, 0.0));
        session.extend_stroke(Point::new(5.0, 5.0));
        session.extend_stroke(Point::new(10.0, 2.0));
        session.end_stroke();

        session.begin_stroke(Point::new(7.0, 7.0));
        assert_eq!(session.path().points(), &[Point::new(7.0, 7.0)]);
        assert!(session.is_tracking());
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut session = SketchSession::new();
        session.extend_stroke(Point::new(1.0, 1.0));
        assert!(session.path().is_empty());

        session.begin_stroke(Point::new(2.0, 2.0));
        session.end_stroke();
        session.extend_stroke(Point::new(3.0, 3.0));
        assert_eq!(session.path().points(), &[Point::new(2.0, 2.0)]);
    }

    #[test]
    fn session_starts_idle_and_empty() {
        let session = SketchSession::new();
        assert!(session.path().is_empty());
        assert!(!session.is_tracking());
    }
}
