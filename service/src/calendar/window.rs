//! [`DayWindow`] definitions.

use std::collections::BTreeSet;

use common::{Date, DateRange};

/// Session-scoped record of the visible and the loaded [`Date`]s.
///
/// A [`Date`] is either fully cached or not cached at all: a single day is
/// refreshed by [`evict`]ing it and fetching it again, never by patching it.
///
/// [`evict`]: DayWindow::evict
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DayWindow {
    /// Contiguous run of [`Date`]s currently visible, if navigated anywhere.
    visible: Option<DateRange>,

    /// [`Date`]s whose schedules are fully held in memory.
    cached: BTreeSet<Date>,
}

impl DayWindow {
    /// Creates a new empty [`DayWindow`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the visible [`Date`]s, leaving the cached ones untouched.
    pub fn set_visible(&mut self, dates: DateRange) {
        self.visible = Some(dates);
    }

    /// Returns the visible [`DateRange`], if any.
    #[must_use]
    pub fn visible(&self) -> Option<DateRange> {
        self.visible
    }

    /// Iterates over the visible [`Date`]s in ascending order.
    pub fn visible_dates(&self) -> impl Iterator<Item = Date> {
        self.visible.into_iter().flat_map(|r| r.iter())
    }

    /// Indicates whether the provided [`Date`] is visible.
    #[must_use]
    pub fn is_visible(&self, date: Date) -> bool {
        self.visible.is_some_and(|r| r.contains(date))
    }

    /// Indicates whether the provided [`Date`] is cached.
    #[must_use]
    pub fn is_cached(&self, date: Date) -> bool {
        self.cached.contains(&date)
    }

    /// Returns the cached [`Date`]s.
    #[must_use]
    pub fn cached(&self) -> &BTreeSet<Date> {
        &self.cached
    }

    /// Returns the visible [`Date`]s that aren't cached, in ascending order.
    ///
    /// These must be fetched now.
    #[must_use]
    pub fn missing_dates(&self) -> Vec<Date> {
        self.visible_dates()
            .filter(|d| !self.cached.contains(d))
            .collect()
    }

    /// Marks the provided [`Date`]s as cached after they have been fetched.
    pub fn mark_cached(&mut self, dates: impl IntoIterator<Item = Date>) {
        self.cached.extend(dates);
    }

    /// Evicts the provided [`Date`] from the cache.
    ///
    /// Returns whether the [`Date`] was cached.
    pub fn evict(&mut self, date: Date) -> bool {
        self.cached.remove(&date)
    }

    /// Evicts every [`Date`] from the cache, leaving the visible ones
    /// untouched.
    pub fn evict_all(&mut self) {
        self.cached.clear();
    }
}

#[cfg(test)]
mod tests {
    use common::{Date, DateRange};
    use proptest::prelude::*;

    use crate::calendar::fixture::date;

    use super::DayWindow;

    fn range(first: &str, last: &str) -> DateRange {
        DateRange::new(date(first), date(last)).unwrap()
    }

    #[test]
    fn reports_uncached_visible_dates() {
        let mut window = DayWindow::new();
        window.set_visible(range("2025-03-01", "2025-03-03"));
        window.mark_cached([date("2025-03-01")]);

        assert_eq!(
            window.missing_dates(),
            [date("2025-03-02"), date("2025-03-03")],
        );
    }

    #[test]
    fn nothing_is_missing_before_navigation() {
        let mut window = DayWindow::new();
        window.mark_cached([date("2025-03-01")]);

        assert!(window.missing_dates().is_empty());
        assert!(!window.is_visible(date("2025-03-01")));
    }

    #[test]
    fn navigation_keeps_cache() {
        let mut window = DayWindow::new();
        window.set_visible(range("2025-03-01", "2025-03-02"));
        window.mark_cached(range("2025-03-01", "2025-03-02").iter());

        window.set_visible(range("2025-03-02", "2025-03-04"));

        assert!(window.is_cached(date("2025-03-01")));
        assert_eq!(
            window.missing_dates(),
            [date("2025-03-03"), date("2025-03-04")],
        );
    }

    #[test]
    fn eviction_keeps_visible_dates() {
        let visible = range("2025-03-01", "2025-03-03");
        let mut window = DayWindow::new();
        window.set_visible(visible);
        window.mark_cached(visible.iter());

        assert!(window.evict(date("2025-03-02")));
        assert!(!window.evict(date("2025-03-02")));
        assert_eq!(window.missing_dates(), [date("2025-03-02")]);

        window.evict_all();

        assert!(window.cached().is_empty());
        assert_eq!(window.visible(), Some(visible));
        assert_eq!(window.missing_dates(), visible.iter().collect::<Vec<_>>());
    }

    /// Arbitrary [`DateRange`] in 2025 of up to three weeks.
    fn ranges() -> impl Strategy<Value = DateRange> {
        (0..300_u16, 1..21_u16).prop_map(|(offset, days)| {
            let first = DateRange::starting_at(date("2025-01-01"), offset + 1)
                .unwrap()
                .last();
            DateRange::starting_at(first, days).unwrap()
        })
    }

    proptest! {
        #[test]
        fn mark_cached_is_idempotent(
            visible in ranges(),
            marked in prop::collection::vec(0..400_u16, 0..20),
        ) {
            let marked = marked
                .into_iter()
                .map(|o| {
                    DateRange::starting_at(date("2025-01-01"), o + 1)
                        .unwrap()
                        .last()
                })
                .collect::<Vec<Date>>();
            let mut once = DayWindow::new();
            once.set_visible(visible);
            once.mark_cached(marked.clone());
            let mut twice = once.clone();
            twice.mark_cached(marked);

            prop_assert_eq!(once, twice);
        }

        #[test]
        fn cached_visible_window_misses_nothing(visible in ranges()) {
            let mut window = DayWindow::new();
            window.set_visible(visible);
            window.mark_cached(visible.iter());

            prop_assert!(window.missing_dates().is_empty());
        }

        #[test]
        fn eviction_round_trip(visible in ranges(), other in ranges()) {
            let mut window = DayWindow::new();
            window.set_visible(other);
            window.mark_cached(other.iter());
            window.mark_cached(visible.iter());

            window.evict_all();
            window.set_visible(visible);

            prop_assert_eq!(
                window.missing_dates(),
                visible.iter().collect::<Vec<_>>(),
            );
        }
    }
}
