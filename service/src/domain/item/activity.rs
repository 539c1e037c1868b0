//! [`Activity`] [`Item`] definition.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use crate::domain::Item;

/// Schedulable event without position slots, such as a talk.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Activity {
    /// Free-form description of this [`Activity`], if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
}
