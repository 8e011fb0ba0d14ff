//! Pattern registry and which entry is active
//!
//! The registry is fixed: the nine patterns in gallery order. Selection is
//! index-based and wraps for next/previous.

use gallery_core::PatternKind;

/// Ordered registry of pattern entries with one active
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    active: usize,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new(PatternKind::Singleton)
    }
}

impl Navigation {
    pub fn new(start: PatternKind) -> Self {
        Self {
            active: index_of(start),
        }
    }

    /// Every entry, in display order
    pub fn entries(&self) -> &'static [PatternKind] {
        &PatternKind::ALL
    }

    pub fn len(&self) -> usize {
        PatternKind::ALL.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn active(&self) -> PatternKind {
        PatternKind::ALL[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Select entry by index (0-based)
    ///
    /// Returns true only if a different entry became active; selecting the
    /// active entry or an index past the end changes nothing.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len() || index == self.active {
            return false;
        }
        self.active = index;
        true
    }

    /// Same as [`Navigation::select`], by pattern
    pub fn select_kind(&mut self, kind: PatternKind) -> bool {
        self.select(index_of(kind))
    }

    /// Select next entry (wraps around)
    pub fn next(&mut self) {
        self.active = (self.active + 1) % self.len();
    }

    /// Select previous entry (wraps around)
    pub fn previous(&mut self) {
        self.active = if self.active == 0 {
            self.len() - 1
        } else {
            self.active - 1
        };
    }
}

fn index_of(kind: PatternKind) -> usize {
    PatternKind::ALL
        .iter()
        .position(|k| *k == kind)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        let nav = Navigation::default();
        let labels: Vec<&str> = nav.entries().iter().map(|k| k.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Singleton",
                "Factory Method",
                "Abstract Factory",
                "Adapter",
                "Decorator",
                "Proxy",
                "Observer",
                "Visitor",
                "State",
            ]
        );
    }

    #[test]
    fn test_select_active_is_noop() {
        let mut nav = Navigation::new(PatternKind::Proxy);
        assert!(!nav.select(5));
        assert_eq!(nav.active(), PatternKind::Proxy);
    }

    #[test]
    fn test_select_other_changes_active() {
        let mut nav = Navigation::default();
        assert!(nav.select(8));
        assert_eq!(nav.active(), PatternKind::State);
        assert!(nav.select_kind(PatternKind::Adapter));
        assert_eq!(nav.active_index(), 3);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut nav = Navigation::default();
        assert!(!nav.select(9));
        assert_eq!(nav.active(), PatternKind::Singleton);
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut nav = Navigation::new(PatternKind::State);
        nav.next();
        assert_eq!(nav.active(), PatternKind::Singleton);
        nav.previous();
        assert_eq!(nav.active(), PatternKind::State);
        nav.previous();
        assert_eq!(nav.active(), PatternKind::Visitor);
    }
}
