//! [`DateTime`] definitions.

use std::{fmt, ops};

use derive_more::{Display, Error};
use time::{format_description::well_known::Rfc3339, UtcOffset};

use crate::Date;

/// Moment in time, always held in UTC.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DateTime(time::OffsetDateTime);

impl DateTime {
    /// Parses a [`DateTime`] from the provided [RFC 3339] string, converting
    /// it to UTC.
    ///
    /// # Errors
    ///
    /// If the string isn't a valid [RFC 3339] date and time, or it doesn't fit
    /// the supported range once converted to UTC.
    ///
    /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
    pub fn from_rfc3339(input: &str) -> Result<Self, ParseError> {
        time::OffsetDateTime::parse(input, &Rfc3339)
            .map_err(ParseError::Malformed)?
            .checked_to_offset(UtcOffset::UTC)
            .map(Self)
            .ok_or(ParseError::OutOfRange)
    }

    /// Formats this [`DateTime`] as an [RFC 3339] string in UTC.
    ///
    /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        // Only years beyond `9999` fail to format.
        self.0.format(&Rfc3339).unwrap_or_else(|e| {
            unreachable!("`DateTime` is always formattable: {e}")
        })
    }

    /// Returns the UTC calendar [`Date`] of this [`DateTime`].
    #[must_use]
    pub fn date(&self) -> Date {
        self.0.date().into()
    }
}

/// Error of parsing a [`DateTime`].
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ParseError {
    /// Input isn't an [RFC 3339] date and time.
    ///
    /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
    #[display("malformed RFC 3339 date and time: {_0}")]
    Malformed(time::error::Parse),

    /// Input doesn't fit the supported range once converted to UTC.
    #[display("date and time is out of range")]
    OutOfRange,
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

/// Interprets a [`time::PrimitiveDateTime`] as UTC.
impl From<time::PrimitiveDateTime> for DateTime {
    fn from(dt: time::PrimitiveDateTime) -> Self {
        Self(dt.assume_utc())
    }
}

impl From<DateTime> for time::OffsetDateTime {
    fn from(dt: DateTime) -> Self {
        dt.0
    }
}

impl ops::Add<time::Duration> for DateTime {
    type Output = Self;

    fn add(self, rhs: time::Duration) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl ops::Sub<time::Duration> for DateTime {
    type Output = Self;

    fn sub(self, rhs: time::Duration) -> Self::Output {
        Self(self.0 - rhs)
    }
}

/// Signed distance between two [`DateTime`]s, negative when `rhs` is later.
impl ops::Sub for DateTime {
    type Output = time::Duration;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use std::borrow::Cow;

    use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

    use super::DateTime;

    /// Serializes as an [RFC 3339] string.
    ///
    /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
    impl Serialize for DateTime {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&self.to_rfc3339())
        }
    }

    impl<'de> Deserialize<'de> for DateTime {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = Cow::<'de, str>::deserialize(deserializer)?;
            Self::from_rfc3339(&s).map_err(Error::custom)
        }
    }
}
