//! [`Command`] for creating or editing an [`Item`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    calendar::Session,
    domain::Item,
    infra::{backend, Backend},
    layout::{duration_minutes, InvalidInterval},
    Service,
};

use super::Command;

/// [`Command`] for creating or editing an [`Item`].
///
/// Once stored, every day of the [`Session`] is fetched again, as the
/// [`Item`] may have moved away from the days it was shown on.
#[derive(Debug)]
pub struct SaveItem<'s> {
    /// [`Session`] showing the [`Item`].
    pub session: &'s mut Session,

    /// [`Item`] to be stored.
    pub item: Item,
}

impl<'s, Bk> Command<SaveItem<'s>> for Service<Bk>
where
    Bk: Backend<Insert<Item>, Err = Traced<backend::Error>>,
{
    type Ok = Item;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: SaveItem<'s>) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SaveItem { session, item } = cmd;

        _ = duration_minutes(&item.interval)
            .map_err(E::InvalidInterval)
            .map_err(tracerr::wrap!())?;

        self.backend()
            .execute(Insert(item.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        session.invalidate();

        Ok(item)
    }
}

/// Error of [`SaveItem`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    #[from]
    Backend(backend::Error),

    /// [`Item`] doesn't last at least one whole minute.
    #[display("Cannot save `Item`: {_0}")]
    InvalidInterval(InvalidInterval),
}
