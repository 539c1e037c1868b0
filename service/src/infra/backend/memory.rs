//! In-memory [`Backend`] implementation.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use common::{
    operations::{By, Delete, Insert, Select},
    Date,
};
use tokio::sync::RwLock;
use tracerr::Traced;

use crate::{
    calendar::{DaySchedule, Filter},
    domain::{item, Item, Venue},
    infra::{backend, Backend},
};

/// [`Backend`] keeping everything in memory.
///
/// Cloned [`Memory`] backends share the same data.
#[derive(Clone, Debug, Default)]
pub struct Memory(Arc<RwLock<State>>);

/// Data of a [`Memory`] backend.
#[derive(Debug, Default)]
struct State {
    /// [`Venue`]s in the order they are listed.
    venues: Vec<Venue>,

    /// Stored [`Item`]s.
    items: HashMap<item::Id, Item>,

    /// [`Date`]s whose [`DaySchedule`]s fail to be fetched.
    unavailable: HashSet<Date>,
}

impl Memory {
    /// Creates a new [`Memory`] backend holding the provided [`Venue`]s and
    /// [`Item`]s.
    #[must_use]
    pub fn new(
        venues: impl IntoIterator<Item = Venue>,
        items: impl IntoIterator<Item = Item>,
    ) -> Self {
        Self(Arc::new(RwLock::new(State {
            venues: venues.into_iter().collect(),
            items: items.into_iter().map(|i| (i.id, i)).collect(),
            unavailable: HashSet::new(),
        })))
    }

    /// Makes fetching the [`DaySchedule`] of the provided [`Date`] fail (or
    /// succeed again).
    pub async fn set_unavailable(&self, date: Date, unavailable: bool) {
        let mut state = self.0.write().await;
        if unavailable {
            _ = state.unavailable.insert(date);
        } else {
            _ = state.unavailable.remove(&date);
        }
    }
}

impl Backend<Select<By<DaySchedule, (Date, Filter)>>> for Memory {
    type Ok = DaySchedule;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<DaySchedule, (Date, Filter)>>,
    ) -> Result<Self::Ok, Self::Err> {
        let (date, filter) = by.into_inner();

        let state = self.0.read().await;
        if state.unavailable.contains(&date) {
            return Err(tracerr::new!(backend::Error::Unavailable(date)));
        }

        let mut items = state
            .items
            .values()
            .filter(|i| i.start_date() == date && filter.matches(i))
            .cloned()
            .collect::<Vec<_>>();
        items.sort_by_key(|i| (i.interval.start, i.id));

        Ok(DaySchedule { date, items })
    }
}

impl Backend<Select<By<Vec<Venue>, ()>>> for Memory {
    type Ok = Vec<Venue>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Venue>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.0.read().await.venues.clone())
    }
}

impl Backend<Insert<Item>> for Memory {
    type Ok = ();
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Insert(item): Insert<Item>,
    ) -> Result<Self::Ok, Self::Err> {
        _ = self.0.write().await.items.insert(item.id, item);
        Ok(())
    }
}

impl Backend<Delete<By<Option<Item>, item::Id>>> for Memory {
    type Ok = Option<Item>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Option<Item>, item::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.0.write().await.items.remove(by.as_inner()))
    }
}

#[cfg(test)]
mod tests {
    use common::{
        operations::{By, Delete, Insert, Select},
        Date,
    };

    use crate::{
        calendar::{
            fixture::{activity, date, shift},
            DaySchedule, Filter,
        },
        domain::{item, venue, Item, Name, Venue},
        infra::{backend, Backend as _},
    };

    use super::Memory;

    fn day(filter: Filter) -> Select<By<DaySchedule, (Date, Filter)>> {
        Select(By::new((date("2025-03-01"), filter)))
    }

    #[tokio::test]
    async fn selects_items_starting_on_date() {
        let late = shift("2025-03-01T22:00:00Z", "2025-03-02T02:00:00Z", None);
        let early =
            activity("2025-03-01T08:00:00Z", "2025-03-01T09:00:00Z", None);
        let next = shift("2025-03-02T08:00:00Z", "2025-03-02T09:00:00Z", None);
        let backend =
            Memory::new([], [late.clone(), early.clone(), next]);

        let schedule = backend.execute(day(Filter::default())).await.unwrap();

        assert_eq!(schedule.date, date("2025-03-01"));
        assert_eq!(schedule.items, [early, late]);
    }

    #[tokio::test]
    async fn applies_filter() {
        let backend = Memory::new(
            [],
            [
                shift("2025-03-01T08:00:00Z", "2025-03-01T09:00:00Z", None),
                activity(
                    "2025-03-01T08:00:00Z",
                    "2025-03-01T09:00:00Z",
                    None,
                ),
            ],
        );

        let schedule = backend
            .execute(day(Filter {
                kind: Some(item::Kind::Activity),
                ..Filter::default()
            }))
            .await
            .unwrap();

        assert_eq!(schedule.items.len(), 1);
        assert_eq!(schedule.items[0].kind(), item::Kind::Activity);
    }

    #[tokio::test]
    async fn fails_unavailable_dates() {
        let backend = Memory::default();
        backend.set_unavailable(date("2025-03-01"), true).await;

        let err = backend.execute(day(Filter::default())).await.unwrap_err();
        let err: &backend::Error = err.as_ref();
        assert!(matches!(
            err,
            backend::Error::Unavailable(d) if *d == date("2025-03-01"),
        ));

        backend.set_unavailable(date("2025-03-01"), false).await;
        assert!(backend.execute(day(Filter::default())).await.is_ok());
    }

    #[tokio::test]
    async fn lists_venues_in_order() {
        let venues = ["Main stage", "Bar"].map(|n| Venue {
            id: venue::Id::new(),
            name: Name::new(n).unwrap(),
        });
        let backend = Memory::new(venues.clone(), []);

        let listed = backend
            .execute(Select(By::<Vec<Venue>, _>::new(())))
            .await
            .unwrap();

        assert_eq!(listed, venues);
    }

    #[tokio::test]
    async fn inserts_and_deletes_items() {
        let backend = Memory::default();
        let mut item =
            shift("2025-03-01T08:00:00Z", "2025-03-01T09:00:00Z", None);

        backend.execute(Insert(item.clone())).await.unwrap();
        item.venue_id = Some(venue::Id::new());
        backend.execute(Insert(item.clone())).await.unwrap();

        let schedule = backend.execute(day(Filter::default())).await.unwrap();
        assert_eq!(schedule.items, [item.clone()]);

        let deleted = backend
            .execute(Delete(By::<Option<Item>, _>::new(item.id)))
            .await
            .unwrap();
        assert_eq!(deleted, Some(item.clone()));
        let deleted = backend
            .execute(Delete(By::<Option<Item>, _>::new(item.id)))
            .await
            .unwrap();
        assert_eq!(deleted, None);
    }
}
