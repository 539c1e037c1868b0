//! [`Backend`]-related implementations.

pub mod memory;

use common::Date;
use derive_more::{Display, Error as StdError};

pub use self::memory::Memory;

/// Schedule backend operation.
pub use common::Handler as Backend;

/// [`Backend`] error.
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// Day schedule of a [`Date`] cannot be fetched at the moment.
    #[display("`DaySchedule(date: {_0})` is unavailable")]
    Unavailable(#[error(not(source))] Date),
}
