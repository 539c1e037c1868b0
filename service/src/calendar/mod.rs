//! Windowed calendar of day schedules.

pub mod grid;
pub mod session;
pub mod window;

use std::collections::BTreeSet;

use common::Date;

use crate::domain::{item, venue, Item};

pub use self::{
    grid::{project, RenderModel},
    session::{FetchRequest, Fetched, Session},
    window::DayWindow,
};

/// All the [`Item`]s starting on one [`Date`], as delivered by a backend.
#[derive(Clone, Debug, PartialEq)]
pub struct DaySchedule {
    /// [`Date`] of this [`DaySchedule`].
    pub date: Date,

    /// [`Item`]s starting on the [`Date`].
    pub items: Vec<Item>,
}

/// Criteria of the [`Item`]s a calendar shows.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Filter {
    /// Venues to show [`Item`]s of, or all of them if [`None`].
    ///
    /// [`Item`]s without a venue are only shown when this is [`None`].
    pub venues: Option<BTreeSet<venue::Id>>,

    /// [`item::Kind`] to show, or all of them if [`None`].
    pub kind: Option<item::Kind>,

    /// Indicator whether to show only shifts having open positions.
    pub open_positions_only: bool,
}

impl Filter {
    /// Indicates whether the provided [`Item`] passes this [`Filter`].
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        let venue_ok = self.venues.as_ref().map_or(true, |venues| {
            item.venue_id.is_some_and(|id| venues.contains(&id))
        });
        let kind_ok = self.kind.map_or(true, |k| item.kind() == k);
        let open_ok = !self.open_positions_only
            || item.shift().is_some_and(item::Shift::has_open_positions);

        venue_ok && kind_ok && open_ok
    }
}

#[cfg(test)]
pub(crate) mod fixture {
    //! Builders of [`Item`]s for tests.

    use std::str::FromStr as _;

    use common::{Date, DateTime, Interval};

    use crate::domain::{
        item::{
            self,
            shift::{LockStatus, Position, PositionId, SignupState},
            Activity, Payload, Shift,
        },
        venue, Item, Name,
    };

    pub(crate) fn date(s: &str) -> Date {
        Date::from_str(s).unwrap()
    }

    pub(crate) fn at(s: &str) -> DateTime {
        DateTime::from_rfc3339(s).unwrap()
    }

    pub(crate) fn shift(
        start: &str,
        end: &str,
        venue_id: Option<venue::Id>,
    ) -> Item {
        Item {
            id: item::Id::new(),
            name: Name::new("Bar").unwrap(),
            interval: Interval::new(at(start), at(end)),
            venue_id,
            payload: Payload::Shift(Shift {
                lock_status: LockStatus::SelfSignup,
                positions: vec![Position {
                    id: PositionId::new(),
                    name: Name::new("Bartender").unwrap(),
                    signup_state: SignupState::SignupPossible,
                    is_own_assignment: false,
                }],
            }),
        }
    }

    pub(crate) fn activity(
        start: &str,
        end: &str,
        venue_id: Option<venue::Id>,
    ) -> Item {
        Item {
            id: item::Id::new(),
            name: Name::new("Opening talk").unwrap(),
            interval: Interval::new(at(start), at(end)),
            venue_id,
            payload: Payload::Activity(Activity::default()),
        }
    }
}
