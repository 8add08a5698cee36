//! Navigation session
//!
//! Holds the whole navigation state of one browsing session:
//! - a site map of observed transitions (page -> pages visited from it)
//! - the current page
//! - back and forward stacks
//!
//! Sessions are plain values. Create as many as needed; nothing is shared.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// Page identifier (trimmed, never empty)
pub type PageId = String;

// =============================================================================
// History Snapshot
// =============================================================================

/// Point-in-time view of the back/current/forward history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    /// Oldest first, most recent last
    pub back: Vec<PageId>,
    pub current: Option<PageId>,
    /// Next `forward()` target first
    pub forward: Vec<PageId>,
}

// =============================================================================
// Navigation Session
// =============================================================================

/// Browser-style navigation state with back/forward history
#[derive(Debug, Clone, Default)]
pub struct NavigationSession {
    site_map: HashMap<PageId, HashSet<PageId>>,
    current: Option<PageId>,
    back_stack: Vec<PageId>,
    forward_stack: Vec<PageId>,
}

impl NavigationSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Visit a page
    ///
    /// Records an edge from the current page (if any), pushes the current
    /// page onto the back stack and drops the forward history.
    ///
    /// # Errors
    /// `CliError::InvalidInput` if `url` is blank. The session is left untouched.
    pub fn visit(&mut self, url: &str) -> Result<()> {
        let url = url.trim();
        if url.is_empty() {
            return Err(CliError::InvalidInput("URL cannot be empty".to_string()));
        }

        if let Some(previous) = self.current.take() {
            self.site_map
                .entry(previous.clone())
                .or_default()
                .insert(url.to_string());
            self.back_stack.push(previous);
            self.forward_stack.clear();
        }

        self.site_map.entry(url.to_string()).or_default();
        self.current = Some(url.to_string());
        Ok(())
    }

    /// Step back one page. Returns `false` when there is no back history.
    pub fn back(&mut self) -> bool {
        step(&mut self.current, &mut self.back_stack, &mut self.forward_stack)
    }

    /// Step forward one page. Returns `false` when there is no forward history.
    pub fn forward(&mut self) -> bool {
        step(&mut self.current, &mut self.forward_stack, &mut self.back_stack)
    }

    /// Pages visited directly from `url`. Empty for unknown pages.
    pub fn neighbors(&self, url: &str) -> HashSet<PageId> {
        self.site_map.get(url).cloned().unwrap_or_default()
    }

    /// The current page, `None` until the first visit
    pub fn current_page(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn history_snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            back: self.back_stack.clone(),
            current: self.current.clone(),
            forward: self.forward_stack.iter().rev().cloned().collect(),
        }
    }

    #[cfg(test)]
    pub(crate) fn contains_page(&self, url: &str) -> bool {
        self.site_map.contains_key(url)
    }

    /// Number of distinct pages seen in this session
    pub fn page_count(&self) -> usize {
        self.site_map.len()
    }
}

/// Move the current page onto `to` and pop `from` into current.
///
/// The current page is always present when `from` is non-empty, since
/// stacks only ever grow after a visit.
fn step(current: &mut Option<PageId>, from: &mut Vec<PageId>, to: &mut Vec<PageId>) -> bool {
    let Some(target) = from.pop() else {
        return false;
    };
    if let Some(page) = current.replace(target) {
        to.push(page);
    }
    true
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pages: &[&str]) -> HashSet<PageId> {
        pages.iter().map(|p| p.to_string()).collect()
    }

    fn visited(pages: &[&str]) -> NavigationSession {
        let mut session = NavigationSession::new();
        for page in pages {
            session.visit(page).unwrap();
        }
        session
    }

    #[test]
    fn new_session_is_empty() {
        let session = NavigationSession::new();
        assert_eq!(session.current_page(), None);
        assert_eq!(session.page_count(), 0);
        assert_eq!(
            session.history_snapshot(),
            HistorySnapshot {
                back: vec![],
                current: None,
                forward: vec![],
            }
        );
    }

    #[test]
    fn first_visit_sets_current_and_trims() {
        let mut session = NavigationSession::new();
        session.visit("  example.com \t").unwrap();

        let snapshot = session.history_snapshot();
        assert_eq!(session.current_page(), Some("example.com"));
        assert!(snapshot.back.is_empty());
        assert!(snapshot.forward.is_empty());
        assert!(session.contains_page("example.com"));
        assert!(session.neighbors("example.com").is_empty());
    }

    #[test]
    fn blank_visit_is_rejected_without_state_change() {
        let mut session = visited(&["a", "b", "c"]);
        session.back();
        let before = session.history_snapshot();
        let pages_before = session.page_count();

        for blank in ["", "   ", "\t\n"] {
            let err = session.visit(blank).unwrap_err();
            assert!(matches!(err, CliError::InvalidInput(_)));
        }

        assert_eq!(session.history_snapshot(), before);
        assert_eq!(session.page_count(), pages_before);
        assert_eq!(session.neighbors("a"), set(&["b"]));
        assert_eq!(session.neighbors("b"), set(&["c"]));
    }

    #[test]
    fn blank_visit_on_empty_session_keeps_it_empty() {
        let mut session = NavigationSession::new();
        assert!(session.visit(" ").is_err());
        assert_eq!(session.current_page(), None);
        assert_eq!(session.page_count(), 0);
    }

    #[test]
    fn sequential_visits_build_back_stack_and_edges() {
        let session = visited(&["A", "B", "C"]);

        let snapshot = session.history_snapshot();
        assert_eq!(session.current_page(), Some("C"));
        assert_eq!(snapshot.back, vec!["A", "B"]);
        assert!(snapshot.forward.is_empty());
        assert_eq!(session.neighbors("A"), set(&["B"]));
        assert_eq!(session.neighbors("B"), set(&["C"]));
        assert!(session.neighbors("C").is_empty());
    }

    #[test]
    fn back_then_forward_is_a_no_op() {
        let mut session = visited(&["A", "B", "C"]);
        let before = session.history_snapshot();

        assert!(session.back());
        assert_eq!(session.current_page(), Some("B"));
        assert!(session.forward());

        assert_eq!(session.history_snapshot(), before);
    }

    #[test]
    fn back_moves_current_onto_forward_stack() {
        let mut session = visited(&["A", "B", "C"]);
        assert!(session.back());
        assert!(session.back());

        let snapshot = session.history_snapshot();
        assert_eq!(snapshot.current.as_deref(), Some("A"));
        assert!(snapshot.back.is_empty());
        // next forward target first
        assert_eq!(snapshot.forward, vec!["B", "C"]);
    }

    #[test]
    fn visit_after_back_clears_forward_and_branches() {
        let mut session = visited(&["A", "B"]);
        assert!(session.back());
        assert_eq!(session.history_snapshot().forward, vec!["B"]);

        session.visit("D").unwrap();

        let snapshot = session.history_snapshot();
        assert!(snapshot.forward.is_empty());
        assert_eq!(snapshot.back, vec!["A"]);
        assert_eq!(session.neighbors("A"), set(&["B", "D"]));
        assert!(!session.forward());
    }

    #[test]
    fn repeated_edge_is_not_duplicated() {
        let mut session = visited(&["A", "B"]);
        session.back();
        session.visit("B").unwrap();

        assert_eq!(session.neighbors("A"), set(&["B"]));
        assert_eq!(session.neighbors("A").len(), 1);
    }

    #[test]
    fn revisiting_current_page_records_self_edge() {
        let session = visited(&["A", "A"]);
        assert_eq!(session.neighbors("A"), set(&["A"]));
        assert_eq!(session.history_snapshot().back, vec!["A"]);
    }

    #[test]
    fn back_and_forward_on_fresh_session_do_nothing() {
        let mut session = NavigationSession::new();
        assert!(!session.back());
        assert!(!session.forward());
        assert_eq!(session.current_page(), None);
        assert_eq!(session.page_count(), 0);
    }

    #[test]
    fn back_on_exhausted_history_returns_false() {
        let mut session = visited(&["A", "B"]);
        assert!(session.back());
        let before = session.history_snapshot();
        assert!(!session.back());
        assert_eq!(session.history_snapshot(), before);
    }

    #[test]
    fn neighbors_of_unknown_page_is_empty() {
        let session = visited(&["A"]);
        assert!(session.neighbors("never-visited").is_empty());
    }

    #[test]
    fn every_page_in_history_is_in_site_map() {
        let mut session = visited(&["A", "B", "C", "D"]);
        session.back();
        session.back();

        let snapshot = session.history_snapshot();
        let all = snapshot
            .back
            .iter()
            .chain(snapshot.forward.iter())
            .chain(snapshot.current.iter());
        for page in all {
            assert!(session.contains_page(page), "{page} missing from site map");
        }
    }

    #[test]
    fn sessions_are_independent() {
        let mut first = NavigationSession::new();
        let second = NavigationSession::new();
        first.visit("A").unwrap();

        assert_eq!(first.current_page(), Some("A"));
        assert_eq!(second.current_page(), None);
    }
}
