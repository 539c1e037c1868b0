//! Allocation of non-overlapping display columns.

use std::{
    cmp::Reverse,
    collections::{BTreeSet, BinaryHeap, HashMap},
};

use common::{DateTime, Interval};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::domain::item;

/// Columns assigned to the items of one venue on one day.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ColumnLayout {
    /// Number of columns required to show all the items without overlaps.
    pub required_column_count: usize,

    /// Zero-based column of every item.
    pub item_columns: HashMap<item::Id, usize>,
}

/// Assigns every item a column, so that no two overlapping items share one,
/// using the minimal number of columns.
///
/// Items are swept in order of their start (ties broken by end, then by ID).
/// Every column whose last item ends no later than the current item starts
/// becomes free, and the item takes the free column with the lowest index.
/// A new column is opened only if none is free, so the resulting number of
/// columns equals the maximum number of items overlapping at a single moment.
///
/// All the provided [`Interval`]s are expected to be valid.
#[must_use]
pub fn allocate(
    items: impl IntoIterator<Item = (item::Id, Interval)>,
) -> ColumnLayout {
    let mut items = items.into_iter().collect::<Vec<_>>();
    items.sort_by_key(|(id, i)| (i.start, i.end, *id));

    // Min-heap of `(end of the last item, column)` of the occupied columns.
    let mut occupied = BinaryHeap::<Reverse<(DateTime, usize)>>::new();
    let mut free = BTreeSet::<usize>::new();
    let mut layout = ColumnLayout {
        required_column_count: 0,
        item_columns: HashMap::with_capacity(items.len()),
    };

    for (id, interval) in items {
        while let Some(Reverse((end, column))) = occupied.peek().copied() {
            if end > interval.start {
                break;
            }
            drop(occupied.pop());
            _ = free.insert(column);
        }

        let column = free.pop_first().unwrap_or_else(|| {
            layout.required_column_count += 1;
            layout.required_column_count - 1
        });
        occupied.push(Reverse((interval.end, column)));
        _ = layout.item_columns.insert(id, column);
    }

    layout
}

#[cfg(test)]
mod tests {
    use common::{DateTime, Interval};
    use proptest::prelude::*;

    use crate::domain::item;

    use super::allocate;

    fn at(hh_mm: &str) -> DateTime {
        DateTime::from_rfc3339(&format!("2025-03-01T{hh_mm}:00Z")).unwrap()
    }

    fn interval(start: &str, end: &str) -> Interval {
        Interval::new(at(start), at(end))
    }

    #[test]
    fn overlapping_items_get_own_columns() {
        let (a, b) = (item::Id::new(), item::Id::new());

        let layout = allocate([
            (a, interval("09:00", "10:00")),
            (b, interval("09:30", "11:00")),
        ]);

        assert_eq!(layout.required_column_count, 2);
        assert_ne!(layout.item_columns[&a], layout.item_columns[&b]);
    }

    #[test]
    fn touching_items_share_column() {
        let (first, second, short) =
            (item::Id::new(), item::Id::new(), item::Id::new());

        let layout = allocate([
            (first, interval("09:00", "10:00")),
            (second, interval("10:00", "11:00")),
            (short, interval("09:30", "09:45")),
        ]);

        assert_eq!(layout.required_column_count, 2);
        assert_eq!(layout.item_columns[&first], 0);
        assert_eq!(layout.item_columns[&second], 0);
        assert_eq!(layout.item_columns[&short], 1);
    }

    #[test]
    fn no_items_need_no_columns() {
        let layout = allocate([]);

        assert_eq!(layout.required_column_count, 0);
        assert!(layout.item_columns.is_empty());
    }

    #[test]
    fn identical_items_never_share() {
        let ids = (0..4).map(|_| item::Id::new()).collect::<Vec<_>>();

        let layout = allocate(
            ids.iter().map(|id| (*id, interval("12:00", "13:00"))),
        );

        assert_eq!(layout.required_column_count, 4);
        let mut columns = layout.item_columns.values().collect::<Vec<_>>();
        columns.sort_unstable();
        assert_eq!(columns, [&0, &1, &2, &3]);
    }

    #[test]
    fn is_deterministic() {
        let ids = (0..6).map(|_| item::Id::new()).collect::<Vec<_>>();
        let items = ids
            .iter()
            .map(|id| (*id, interval("08:00", "09:00")))
            .collect::<Vec<_>>();

        let forward = allocate(items.clone());
        let backward = allocate(items.into_iter().rev());

        assert_eq!(forward, backward);
    }

    /// Arbitrary valid intervals within one day as `(start, length)` minutes.
    fn intervals() -> impl Strategy<Value = Vec<(i64, i64)>> {
        prop::collection::vec((0..1380_i64, 1..240_i64), 0..40)
    }

    fn to_items(raw: &[(i64, i64)]) -> Vec<(item::Id, Interval)> {
        let midnight = at("00:00");
        raw.iter()
            .map(|(start, len)| {
                let start = midnight + time::Duration::minutes(*start);
                let end = start + time::Duration::minutes(*len);
                (item::Id::new(), Interval::new(start, end))
            })
            .collect()
    }

    proptest! {
        #[test]
        fn column_count_equals_max_overlap(raw in intervals()) {
            let items = to_items(&raw);
            let layout = allocate(items.clone());

            // Maximum depth is reached at some item's start.
            let depth = items
                .iter()
                .map(|(_, i)| {
                    items.iter().filter(|(_, o)| o.contains(i.start)).count()
                })
                .max()
                .unwrap_or(0);

            prop_assert_eq!(layout.required_column_count, depth);
        }

        #[test]
        fn same_column_never_overlaps(raw in intervals()) {
            let items = to_items(&raw);
            let layout = allocate(items.clone());

            prop_assert_eq!(layout.item_columns.len(), items.len());
            for (a, ai) in &items {
                for (b, bi) in &items {
                    if a != b
                        && layout.item_columns[a] == layout.item_columns[b]
                    {
                        prop_assert!(!ai.overlaps(bi));
                    }
                }
            }
        }
    }
}
