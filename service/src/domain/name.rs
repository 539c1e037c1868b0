//! [`Name`] definition.

use std::str::FromStr;

use derive_more::{AsRef, Display, Into};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Human-readable name of a venue, a schedule item or a position.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, Into, PartialEq)]
#[as_ref(forward)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(try_from = "String", into = "String")
)]
pub struct Name(String);

impl Name {
    /// Maximum length of a [`Name`] in bytes.
    pub const MAX_LEN: usize = 256;

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= Self::MAX_LEN
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

impl TryFrom<String> for Name {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `Name`")
    }
}
