//! [`Query`] collection related to multiple [`Venue`]s.

use common::operations::By;

use crate::domain::Venue;
#[cfg(doc)]
use crate::Query;

use super::BackendQuery;

/// Queries all the [`Venue`]s in their listed order.
pub type All = BackendQuery<By<Vec<Venue>, ()>>;
