//! [`Interval`] definitions.

use crate::DateTime;

/// Half-open `[start, end)` span of time.
///
/// An [`Interval`] may be malformed (`end <= start`) when it comes straight
/// from outside, so consumers check [`Interval::is_valid()`] before relying on
/// it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize)
)]
pub struct Interval {
    /// [`DateTime`] this [`Interval`] starts at (inclusive).
    pub start: DateTime,

    /// [`DateTime`] this [`Interval`] ends at (exclusive).
    pub end: DateTime,
}

impl Interval {
    /// Creates a new [`Interval`] without validating it.
    #[must_use]
    pub fn new(start: DateTime, end: DateTime) -> Self {
        Self { start, end }
    }

    /// Indicates whether this [`Interval`] ends strictly after it starts.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    /// Indicates whether the provided moment lies within this [`Interval`].
    #[must_use]
    pub fn contains(&self, at: DateTime) -> bool {
        self.start <= at && at < self.end
    }

    /// Indicates whether this [`Interval`] overlaps the `other` one.
    ///
    /// Touching endpoints don't overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns the part of this [`Interval`] lying within the `other` one.
    ///
    /// [`None`] is returned if they don't overlap.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        self.overlaps(other).then(|| Self {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }
}
