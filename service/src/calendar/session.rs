//! [`Session`] definitions.

use std::collections::HashMap;

use common::{Date, DateRange};
use tracing as log;

use crate::{
    calendar::{grid, DaySchedule, DayWindow, Filter, RenderModel},
    domain::{venue, Item},
    layout,
};

/// State of a single calendar view.
///
/// Every fetch is tagged with the generation of the [`Session`] it was
/// requested in. Invalidating the [`Session`] starts a new generation, so the
/// results of fetches still in flight are discarded once they arrive.
#[derive(Clone, Debug, Default)]
pub struct Session {
    /// [`DayWindow`] of this [`Session`].
    window: DayWindow,

    /// [`Filter`] the loaded [`DaySchedule`]s were fetched with.
    filter: Filter,

    /// Current generation of this [`Session`].
    generation: u64,

    /// [`Item`]s of every cached [`Date`].
    days: HashMap<Date, Vec<Item>>,
}

/// Day schedules a [`Session`] needs fetched.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FetchRequest {
    /// [`Date`]s to fetch, in ascending order.
    pub dates: Vec<Date>,

    /// [`Filter`] to fetch with.
    pub filter: Filter,

    /// Generation of the [`Session`] the request was made in.
    pub generation: u64,
}

/// Result of fetching a [`DaySchedule`] requested by a [`FetchRequest`].
#[derive(Clone, Debug, PartialEq)]
pub struct Fetched {
    /// Generation of the [`FetchRequest`].
    pub generation: u64,

    /// Fetched [`DaySchedule`].
    pub schedule: DaySchedule,
}

impl Session {
    /// Creates a new empty [`Session`] showing [`Item`]s passing the provided
    /// [`Filter`].
    #[must_use]
    pub fn new(filter: Filter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Returns [`DayWindow`] of this [`Session`].
    #[must_use]
    pub fn window(&self) -> &DayWindow {
        &self.window
    }

    /// Returns the current [`Filter`] of this [`Session`].
    #[must_use]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Returns the current generation of this [`Session`].
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Moves the visible window to the provided [`DateRange`], returning the
    /// [`Date`]s to fetch now.
    pub fn navigate(&mut self, dates: DateRange) -> Vec<Date> {
        self.window.set_visible(dates);
        self.window.missing_dates()
    }

    /// Builds a [`FetchRequest`] for the currently missing [`Date`]s.
    #[must_use]
    pub fn request(&self) -> FetchRequest {
        FetchRequest {
            dates: self.window.missing_dates(),
            filter: self.filter.clone(),
            generation: self.generation,
        }
    }

    /// Applies the provided [`Fetched`] result, in any order relatively to
    /// the other ones.
    ///
    /// Returns `false` if the result is discarded: it was requested in a
    /// previous generation, its [`Date`] is no longer visible or is already
    /// cached.
    pub fn apply(&mut self, fetched: Fetched) -> bool {
        let Fetched {
            generation,
            schedule: DaySchedule { date, items },
        } = fetched;

        if generation != self.generation {
            log::debug!(
                "Discarding stale `DaySchedule(date: {date})` of generation \
                 {generation}, current is {}",
                self.generation,
            );
            return false;
        }
        if !self.window.is_visible(date) || self.window.is_cached(date) {
            log::debug!(
                "Discarding `DaySchedule(date: {date})` as no longer missing",
            );
            return false;
        }

        _ = self.days.insert(date, items);
        self.window.mark_cached([date]);
        true
    }

    /// Evicts every cached [`Date`], so all the visible ones are fetched
    /// again.
    pub fn invalidate(&mut self) {
        log::debug!(
            "Evicting {} cached days of generation {}",
            self.window.cached().len(),
            self.generation,
        );
        self.window.evict_all();
        self.days.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Evicts the provided [`Date`] only, so it's fetched again.
    ///
    /// Fetches in flight are discarded anyway, as they may carry the evicted
    /// data.
    pub fn invalidate_date(&mut self, date: Date) {
        if self.window.evict(date) {
            log::debug!("Evicting cached `DaySchedule(date: {date})`");
        }
        _ = self.days.remove(&date);
        self.generation = self.generation.wrapping_add(1);
    }

    /// Replaces the [`Filter`] of this [`Session`], invalidating it if the
    /// [`Filter`] changes.
    pub fn set_filter(&mut self, filter: Filter) {
        if filter != self.filter {
            self.filter = filter;
            self.invalidate();
        }
    }

    /// Projects the loaded [`DaySchedule`]s onto the calendar grid.
    #[must_use]
    pub fn project(
        &self,
        venues: &[venue::Id],
        config: &layout::Config,
    ) -> RenderModel {
        grid::project(&self.window, venues, &self.days, config)
    }
}
