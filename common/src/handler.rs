//! [`Handler`] abstractions.

use std::future::Future;

/// Asynchronous handler of an operation described by its `Args`.
///
/// Commands, queries and schedule backend operations are all expressed as
/// [`Handler`]s, so the same type may handle many distinct operations.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
