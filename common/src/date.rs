//! Calendar [`Date`] and contiguous [`DateRange`] definitions.

use std::{fmt, iter, str::FromStr};

use time::{format_description::BorrowedFormatItem, macros::format_description};

use crate::DateTime;

/// `YYYY-MM-DD` format of a [`Date`].
const FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// UTC calendar date.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Date(time::Date);

impl Date {
    /// Creates a new [`Date`] from the provided calendar components.
    ///
    /// [`None`] is returned if the components don't form a valid date.
    #[must_use]
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day).ok().map(Self)
    }

    /// Returns the [`Date`] following this one.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.next_day().map(Self)
    }

    /// Returns the [`Date`] preceding this one.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.0.previous_day().map(Self)
    }

    /// Returns the midnight (UTC) this [`Date`] starts at.
    #[must_use]
    pub fn start(self) -> DateTime {
        self.0.midnight().into()
    }

    /// Returns the midnight (UTC) this [`Date`] ends at, which is the
    /// [`start`] of the next one.
    ///
    /// [`start`]: Date::start
    #[must_use]
    pub fn end(self) -> DateTime {
        self.start() + time::Duration::DAY
    }
}

impl From<time::Date> for Date {
    fn from(date: time::Date) -> Self {
        Self(date)
    }
}

impl From<Date> for time::Date {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day(),
        )
    }
}

impl FromStr for Date {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        time::Date::parse(s, FORMAT)
            .map(Self)
            .map_err(|_| "invalid `Date`, expected `YYYY-MM-DD`")
    }
}

/// Contiguous inclusive run of [`Date`]s.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DateRange {
    /// First [`Date`] of this [`DateRange`].
    first: Date,

    /// Last [`Date`] of this [`DateRange`] (inclusive).
    last: Date,
}

impl DateRange {
    /// Creates a new [`DateRange`] from `first` to `last` inclusively.
    ///
    /// [`None`] is returned if `first` is after `last`.
    #[must_use]
    pub fn new(first: Date, last: Date) -> Option<Self> {
        (first <= last).then_some(Self { first, last })
    }

    /// Creates a new [`DateRange`] containing the single provided [`Date`].
    #[must_use]
    pub fn single(date: Date) -> Self {
        Self {
            first: date,
            last: date,
        }
    }

    /// Creates a new [`DateRange`] of `days` consecutive [`Date`]s starting at
    /// `first`.
    ///
    /// [`None`] is returned if `days` is zero or the range overflows the
    /// calendar.
    #[must_use]
    pub fn starting_at(first: Date, days: u16) -> Option<Self> {
        let last = (1..days).try_fold(first, |d, _| d.next())?;
        (days > 0).then_some(Self { first, last })
    }

    /// Returns the first [`Date`] of this [`DateRange`].
    #[must_use]
    pub fn first(&self) -> Date {
        self.first
    }

    /// Returns the last [`Date`] of this [`DateRange`].
    #[must_use]
    pub fn last(&self) -> Date {
        self.last
    }

    /// Indicates whether the provided [`Date`] belongs to this [`DateRange`].
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.first <= date && date <= self.last
    }

    /// Returns the number of [`Date`]s in this [`DateRange`].
    #[must_use]
    pub fn len(&self) -> usize {
        let days = (self.last.0 - self.first.0).whole_days();
        usize::try_from(days).map_or(0, |d| d + 1)
    }

    /// Always `false`, as a [`DateRange`] holds at least one [`Date`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the [`Date`]s of this [`DateRange`] in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Date> {
        let last = self.last;
        iter::successors(Some(self.first), move |d| {
            d.next().filter(|d| *d <= last)
        })
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.first, self.last)
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use std::{borrow::Cow, str::FromStr as _};

    use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

    use super::Date;

    impl Serialize for Date {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Date {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = Cow::<'de, str>::deserialize(deserializer)?;
            Self::from_str(&s).map_err(Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::{Date, DateRange};

    fn date(s: &str) -> Date {
        Date::from_str(s).unwrap()
    }

    #[test]
    fn parses_and_displays() {
        assert_eq!(date("2025-03-01"), Date::from_ymd(2025, 3, 1).unwrap());
        assert_eq!(date("2025-03-01").to_string(), "2025-03-01");

        assert!(Date::from_str("2025-02-30").is_err());
        assert!(Date::from_str("01.03.2025").is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_none());
    }

    #[test]
    fn steps_over_month_boundaries() {
        assert_eq!(date("2024-02-28").next(), Some(date("2024-02-29")));
        assert_eq!(date("2024-03-01").previous(), Some(date("2024-02-29")));
    }

    #[test]
    fn day_bounds_are_utc_midnights() {
        let d = date("2025-03-01");

        assert_eq!(d.start().to_rfc3339(), "2025-03-01T00:00:00Z");
        assert_eq!(d.end().to_rfc3339(), "2025-03-02T00:00:00Z");
        assert_eq!(d.start().date(), d);
    }

    #[test]
    fn range_iterates_inclusively() {
        let range =
            DateRange::new(date("2025-02-27"), date("2025-03-02")).unwrap();

        assert_eq!(
            range.iter().collect::<Vec<_>>(),
            vec![
                date("2025-02-27"),
                date("2025-02-28"),
                date("2025-03-01"),
                date("2025-03-02"),
            ],
        );
        assert_eq!(range.len(), 4);
        assert!(range.contains(date("2025-03-01")));
        assert!(!range.contains(date("2025-03-03")));
    }

    #[test]
    fn range_rejects_reversed_and_empty() {
        let (first, last) = (date("2025-03-02"), date("2025-03-01"));

        assert!(DateRange::new(first, last).is_none());
        assert!(DateRange::starting_at(date("2025-03-01"), 0).is_none());

        let single = DateRange::starting_at(date("2025-03-01"), 1).unwrap();
        assert_eq!(single, DateRange::single(date("2025-03-01")));
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn range_starting_at_counts_days() {
        let range = DateRange::starting_at(date("2025-03-30"), 3).unwrap();

        assert_eq!(range.first(), date("2025-03-30"));
        assert_eq!(range.last(), date("2025-04-01"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_iso_string() {
        let d = date("2025-03-01");

        assert_eq!(serde_json::to_string(&d).unwrap(), "\"2025-03-01\"");
        assert_eq!(
            serde_json::from_str::<Date>("\"2025-03-01\"").unwrap(),
            d,
        );
    }
}
