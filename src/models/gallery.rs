// SPDX-License-Identifier: BSD-3-Clause

//! Paged gallery navigation state.
//!
//! A gallery session pages through the fixed project sequence one item at a
//! time, bounded at both ends with no wraparound. The session holds only the
//! page count and the current index; pages are looked up by index in the
//! project library, so at most the previous, current, and next page are ever
//! materialized at once.

/// The page indices the gallery needs concurrently: the displayed page and
/// its immediate neighbours, when they exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub previous: Option<usize>,
    pub current: usize,
    pub next: Option<usize>,
}

/// Navigation state for one gallery visit.
///
/// Created when a grid tile is selected and dropped on dismissal. The
/// current index changes only through [`go_to_previous`](Self::go_to_previous)
/// and [`go_to_next`](Self::go_to_next), both of which refuse to cross the
/// sequence boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySession {
    page_count: usize,
    current: usize,
}

impl GallerySession {
    /// Start a session over `page_count` pages at `start_index`.
    ///
    /// The grid builds sessions from tile indices of the same sequence it
    /// displays, so `start_index` is in range by construction.
    pub fn new(page_count: usize, start_index: usize) -> Self {
        debug_assert!(start_index < page_count);
        Self {
            page_count,
            current: start_index,
        }
    }

    /// Index of the currently displayed page.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Total number of pages in the fixed sequence.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Whether a page exists before the current one.
    pub fn has_previous(&self) -> bool {
        self.current > 0
    }

    /// Whether a page exists after the current one.
    pub fn has_next(&self) -> bool {
        self.current + 1 < self.page_count
    }

    /// Move one page back. Refused silently at the start boundary.
    ///
    /// Returns whether the transition was taken.
    pub fn go_to_previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Move one page forward. Refused silently at the end boundary.
    ///
    /// Returns whether the transition was taken.
    pub fn go_to_next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current += 1;
        true
    }

    /// The current page and its existing neighbours.
    pub fn page_window(&self) -> PageWindow {
        PageWindow {
            previous: self.current.checked_sub(1),
            current: self.current,
            next: if self.has_next() {
                Some(self.current + 1)
            } else {
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_the_selected_index() {
        for i in 0..5 {
            let session = GallerySession::new(5, i);
            assert_eq!(session.current_index(), i);
        }
    }

    #[test]
    fn next_then_previous_restores_interior_index() {
        for i in 0..4 {
            let mut session = GallerySession::new(5, i);
            assert!(session.go_to_next());
            assert!(session.go_to_previous());
            assert_eq!(session.current_index(), i);
        }
    }

    #[test]
    fn previous_at_start_is_a_no_op() {
        let mut session = GallerySession::new(3, 0);
        assert!(!session.go_to_previous());
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn next_at_end_is_a_no_op() {
        let mut session = GallerySession::new(3, 2);
        assert!(!session.go_to_next());
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn paging_forward_stops_at_the_last_page() {
        // Three projects, session starts at the first tile.
        let mut session = GallerySession::new(3, 0);

        assert!(session.go_to_next());
        assert_eq!(session.current_index(), 1);
        assert!(session.go_to_next());
        assert_eq!(session.current_index(), 2);
        assert!(!session.go_to_next());
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn page_window_omits_missing_neighbours() {
        let mut session = GallerySession::new(3, 0);
        assert_eq!(
            session.page_window(),
            PageWindow {
                previous: None,
                current: 0,
                next: Some(1),
            }
        );

        session.go_to_next();
        assert_eq!(
            session.page_window(),
            PageWindow {
                previous: Some(0),
                current: 1,
                next: Some(2),
            }
        );

        session.go_to_next();
        assert_eq!(
            session.page_window(),
            PageWindow {
                previous: Some(1),
                current: 2,
                next: None,
            }
        );
    }

    #[test]
    fn single_page_session_has_no_neighbours() {
        let mut session = GallerySession::new(1, 0);
        assert!(!session.has_previous());
        assert!(!session.has_next());
        assert!(!session.go_to_previous());
        assert!(!session.go_to_next());
        assert_eq!(session.current_index(), 0);
    }
}
