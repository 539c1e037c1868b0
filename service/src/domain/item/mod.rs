//! Schedule [`Item`] definitions.

pub mod activity;
pub mod shift;

use common::{define_kind, Date, Interval};
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{venue, Name};
#[cfg(doc)]
use crate::domain::Venue;

pub use self::{activity::Activity, shift::Shift};

/// Shift or activity taking place within an [`Interval`], optionally at a
/// [`Venue`].
///
/// [`Item`]s are owned by the backend and are only ever read here.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Item {
    /// ID of this [`Item`].
    pub id: Id,

    /// [`Name`] of this [`Item`].
    pub name: Name,

    /// [`Interval`] this [`Item`] occupies.
    pub interval: Interval,

    /// ID of the [`Venue`] this [`Item`] takes place at, if assigned yet.
    pub venue_id: Option<venue::Id>,

    /// [`Kind`]-specific [`Payload`] of this [`Item`].
    pub payload: Payload,
}

impl Item {
    /// Returns [`Kind`] of this [`Item`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        match &self.payload {
            Payload::Shift(_) => Kind::Shift,
            Payload::Activity(_) => Kind::Activity,
        }
    }

    /// Returns the [`Shift`] payload of this [`Item`], if it's a shift.
    #[must_use]
    pub fn shift(&self) -> Option<&Shift> {
        match &self.payload {
            Payload::Shift(s) => Some(s),
            Payload::Activity(_) => None,
        }
    }

    /// Returns the UTC [`Date`] this [`Item`] starts on.
    ///
    /// An [`Item`] belongs to the day schedule of this [`Date`] only.
    #[must_use]
    pub fn start_date(&self) -> Date {
        self.interval.start.date()
    }
}

/// ID of an [`Item`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// [`Kind`]-specific data of an [`Item`].
#[derive(Clone, Debug, From, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Payload {
    #[doc(hidden)]
    Shift(Shift),
    #[doc(hidden)]
    Activity(Activity),
}

define_kind! {
    #[doc = "Kind of an [`Item`]."]
    enum Kind {
        #[doc = "Block of volunteer work holding position slots."]
        Shift = 1,

        #[doc = "Event without position slots (a talk, for example)."]
        Activity = 2,
    }
}
