//! [`Query`] collection related to a single [`DaySchedule`].

use common::{operations::By, Date};

use crate::calendar::{DaySchedule, Filter};
#[cfg(doc)]
use crate::Query;

use super::BackendQuery;

/// Queries a [`DaySchedule`] by its [`Date`] and the [`Filter`] its items
/// must pass.
pub type ByDate = BackendQuery<By<DaySchedule, (Date, Filter)>>;
