//! [`Command`] for deleting an [`Item`].

use common::operations::{By, Delete};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    calendar::Session,
    domain::{item, Item},
    infra::{backend, Backend},
    Service,
};

use super::Command;

/// [`Command`] for deleting an [`Item`].
///
/// Once deleted, every day of the [`Session`] is fetched again.
#[derive(Debug)]
pub struct DeleteItem<'s> {
    /// [`Session`] showing the [`Item`].
    pub session: &'s mut Session,

    /// ID of the [`Item`] to be deleted.
    pub item_id: item::Id,
}

impl<'s, Bk> Command<DeleteItem<'s>> for Service<Bk>
where
    Bk: Backend<
        Delete<By<Option<Item>, item::Id>>,
        Ok = Option<Item>,
        Err = Traced<backend::Error>,
    >,
{
    type Ok = Item;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteItem<'s>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteItem { session, item_id } = cmd;

        let item = self
            .backend()
            .execute(Delete(By::<Option<Item>, _>::new(item_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ItemNotExists(item_id))
            .map_err(tracerr::wrap!())?;
        session.invalidate();

        Ok(item)
    }
}

/// Error of [`DeleteItem`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    #[from]
    Backend(backend::Error),

    /// [`Item`] with the provided ID does not exist.
    #[display("`Item(id: {_0})` does not exist")]
    ItemNotExists(#[error(not(source))] item::Id),
}

#[cfg(test)]
mod tests {
    use common::DateRange;

    use crate::{
        calendar::{
            fixture::{date, shift},
            Session,
        },
        command::{Command as _, LoadWindow},
        domain::item,
        infra::Memory,
        Config, Service,
    };

    use super::{DeleteItem, ExecutionError};

    #[tokio::test]
    async fn deleted_item_disappears_after_refetch() {
        let item = shift("2025-03-01T09:00:00Z", "2025-03-01T10:00:00Z", None);
        let service = Service::new(
            Config::default(),
            Memory::new([], [item.clone()]),
        );
        let mut session = Session::default();
        let dates = DateRange::single(date("2025-03-01"));
        let model = service
            .execute(LoadWindow {
                session: &mut session,
                dates,
            })
            .await
            .unwrap();
        assert_eq!(model.days[0].venues[0].placements.len(), 1);

        let deleted = service
            .execute(DeleteItem {
                session: &mut session,
                item_id: item.id,
            })
            .await
            .unwrap();
        assert_eq!(deleted, item);

        let model = service
            .execute(LoadWindow {
                session: &mut session,
                dates,
            })
            .await
            .unwrap();
        assert!(model.days[0].venues.is_empty());
    }

    #[tokio::test]
    async fn fails_on_unknown_item() {
        let service = Service::new(Config::default(), Memory::default());
        let mut session = Session::default();
        let id = item::Id::new();

        let err = service
            .execute(DeleteItem {
                session: &mut session,
                item_id: id,
            })
            .await
            .unwrap_err();

        let err: &ExecutionError = err.as_ref();
        assert!(matches!(err, ExecutionError::ItemNotExists(i) if *i == id));
        assert_eq!(session.generation(), 0);
    }
}
