//! Mapping of time onto linear grid lengths.

use common::{Date, DateTime, Interval};
use derive_more::{Display, Error};
#[cfg(feature = "serde")]
use serde::Serialize;

/// Number of minutes in a calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Error of an [`Interval`] not lasting at least one whole minute.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
#[display("`Interval({start}..{end})` is empty or reversed")]
pub struct InvalidInterval {
    /// Start of the invalid [`Interval`].
    pub start: DateTime,

    /// End of the invalid [`Interval`].
    pub end: DateTime,
}

/// Fixed [`Length`] of one minute in the grid.
#[derive(Clone, Copy, Debug, Display, PartialEq, PartialOrd)]
pub struct MinuteHeight(f64);

impl MinuteHeight {
    /// Default [`MinuteHeight`] of one length unit per minute.
    pub const DEFAULT: Self = Self(1.0);

    /// Creates a new [`MinuteHeight`] if the provided value is positive and
    /// finite.
    #[must_use]
    pub fn new(val: f64) -> Option<Self> {
        (val.is_finite() && val > 0.0).then_some(Self(val))
    }

    /// Returns the raw value of this [`MinuteHeight`].
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

/// Length along the time axis of the grid.
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Length(f64);

impl Length {
    /// Returns the raw value of this [`Length`].
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

/// Returns the whole minutes passed from `day_start` until `at`.
///
/// Moments before `day_start` are clamped to `0`.
#[must_use]
pub fn offset_minutes(day_start: DateTime, at: DateTime) -> u32 {
    let minutes = (at - day_start).whole_minutes().max(0);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// Returns the whole minutes the provided [`Interval`] lasts (rounded down).
///
/// # Errors
///
/// With an [`InvalidInterval`] if the [`Interval`] lasts less than a minute,
/// including the ones ending before they start.
pub fn duration_minutes(interval: &Interval) -> Result<u32, InvalidInterval> {
    let Interval { start, end } = *interval;
    u32::try_from((end - start).whole_minutes())
        .ok()
        .filter(|m| *m > 0)
        .ok_or(InvalidInterval { start, end })
}

/// Scales the provided number of minutes into a [`Length`].
#[must_use]
pub fn size_for(minutes: u32, minute_height: MinuteHeight) -> Length {
    Length(f64::from(minutes) * minute_height.0)
}

/// Cuts the provided [`Interval`] down to the bounds of the provided [`Date`].
///
/// [`None`] is returned if nothing of the [`Interval`] falls on that [`Date`].
#[must_use]
pub fn truncate_to_day(interval: &Interval, date: Date) -> Option<Interval> {
    interval.intersect(&Interval::new(date.start(), date.end()))
}
