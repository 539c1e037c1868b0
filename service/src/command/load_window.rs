//! [`Command`] for loading and projecting the visible days of a [`Session`].

use common::{
    operations::{By, Select},
    Date, DateRange,
};
use derive_more::{Display, Error, From};
use futures::{stream, StreamExt as _};
use tracerr::Traced;
use tracing as log;

use crate::{
    calendar::{
        DaySchedule, FetchRequest, Fetched, Filter, RenderModel, Session,
    },
    domain::Venue,
    infra::{backend, Backend},
    Service,
};

use super::Command;

/// [`Command`] for moving the visible window of a [`Session`], fetching the
/// [`DaySchedule`]s it misses and projecting the result.
///
/// [`DaySchedule`]s are fetched concurrently and applied in the order they
/// arrive. A [`Date`] whose fetch fails stays missing in the returned
/// [`RenderModel`], so executing this [`Command`] again retries it.
#[derive(Debug)]
pub struct LoadWindow<'s> {
    /// [`Session`] to load the days of.
    pub session: &'s mut Session,

    /// [`DateRange`] to make visible.
    pub dates: DateRange,
}

impl<'s, Bk> Command<LoadWindow<'s>> for Service<Bk>
where
    Bk: Backend<
            Select<By<Vec<Venue>, ()>>,
            Ok = Vec<Venue>,
            Err = Traced<backend::Error>,
        > + Backend<
            Select<By<DaySchedule, (Date, Filter)>>,
            Ok = DaySchedule,
            Err = Traced<backend::Error>,
        >,
{
    type Ok = RenderModel;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: LoadWindow<'s>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let LoadWindow { session, dates } = cmd;

        _ = session.navigate(dates);
        let FetchRequest {
            dates,
            filter,
            generation,
        } = session.request();

        let venues = self
            .backend()
            .execute(Select(By::<Vec<Venue>, _>::new(())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut fetches = stream::iter(dates)
            .map(|date| {
                let by = By::<DaySchedule, _>::new((date, filter.clone()));
                async move { (date, self.backend().execute(Select(by)).await) }
            })
            .buffer_unordered(self.config().fetch_concurrency.get());
        while let Some((date, res)) = fetches.next().await {
            match res {
                Ok(schedule) => {
                    _ = session.apply(Fetched {
                        generation,
                        schedule,
                    });
                }
                Err(e) => log::warn!(
                    "Failed to fetch `DaySchedule(date: {date})`, leaving it \
                     missing: {e}",
                ),
            }
        }

        let venues = venues.iter().map(|v| v.id).collect::<Vec<_>>();
        Ok(session.project(&venues, &self.config().layout))
    }
}

/// Error of [`LoadWindow`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    #[from]
    Backend(backend::Error),
}
