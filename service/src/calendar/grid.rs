//! Projection of loaded day schedules onto the calendar grid.

use std::{
    collections::{HashMap, HashSet},
    iter,
};

use common::{define_kind, Date, Interval};
#[cfg(feature = "serde")]
use serde::Serialize;
use tracing as log;

use crate::{
    calendar::DayWindow,
    domain::{
        item::{self, shift::PositionId},
        venue, Item,
    },
    layout::{
        self, allocate, duration_minutes, offset_minutes, size_for,
        truncate_to_day, ColumnLayout, Length, MinuteHeight,
    },
    Eligibility,
};
#[cfg(doc)]
use crate::{domain::Venue, layout::InvalidInterval};

/// Renderable grid of the visible [`Date`]s.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RenderModel {
    /// [`DayLayout`]s of the visible and loaded [`Date`]s, in ascending
    /// order.
    pub days: Vec<DayLayout>,

    /// [`Item`]s excluded from the layout.
    pub rejected_items: Vec<Rejected>,

    /// Visible [`Date`]s still to be fetched, in ascending order.
    pub missing_dates: Vec<Date>,
}

/// Layout of a single [`Date`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DayLayout {
    /// [`Date`] being laid out.
    pub date: Date,

    /// [`VenueColumnLayout`] of every known [`Venue`] in the provided order,
    /// followed by the [`Bucket::Unassigned`] one, if it has any [`Item`]s.
    pub venues: Vec<VenueColumnLayout>,
}

/// Layout of the [`Item`]s of a single [`Bucket`] on a single [`Date`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct VenueColumnLayout {
    /// [`Bucket`] the [`Item`]s are laid out in.
    pub venue: Bucket,

    /// Columns assigned to the [`Item`]s.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub columns: ColumnLayout,

    /// [`Placement`]s of the [`Item`]s, ordered by their start.
    pub placements: Vec<Placement>,
}

/// Grid column group the [`Item`]s are bucketed into.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(tag = "kind", content = "id", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Bucket {
    /// Known [`Venue`].
    Venue(venue::Id),

    /// [`Item`]s not assigned to any known [`Venue`].
    Unassigned,
}

/// Position of an [`Item`] in the grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Placement {
    /// ID of the placed [`Item`].
    pub item_id: item::Id,

    /// [`item::Kind`] of the placed [`Item`].
    pub kind: item::Kind,

    /// Zero-based column of the placed [`Item`].
    pub column: usize,

    /// Distance from the start of the day.
    pub offset: Length,

    /// Extent along the time axis.
    pub size: Length,

    /// Indicator whether the [`Item`] was cut at a day boundary.
    pub truncated: bool,

    /// [`Eligibility`] of every position of a shift [`Item`], in the order
    /// of the positions. Empty for other [`Item`]s.
    pub positions: Vec<PositionEligibility>,
}

/// [`Eligibility`] of the current volunteer for a single shift position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PositionEligibility {
    /// ID of the position.
    pub position_id: PositionId,

    /// [`Eligibility`] for the position.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub eligibility: Eligibility,
}

/// [`Item`] excluded from the layout.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Rejected {
    /// ID of the excluded [`Item`].
    pub item_id: item::Id,

    /// [`Date`] the [`Item`] was delivered for.
    pub date: Date,

    /// [`Rejection`] reason.
    pub reason: Rejection,
}

define_kind! {
    #[doc = "Reason of an [`Item`] being excluded from the layout."]
    enum Rejection {
        #[doc = "[`Item`] has an [`InvalidInterval`]."]
        InvalidInterval = 1,

        #[doc = "Nothing of the [`Item`] falls on the [`Date`] it was \
                 delivered for."]
        OutsideDay = 2,
    }
}

/// [`Item`] fitted into a single day.
#[derive(Clone, Copy, Debug)]
struct Fitted<'i> {
    /// Fitted [`Item`].
    item: &'i Item,

    /// Part of the [`Item`]'s [`Interval`] shown on the day.
    shown: Interval,
}

/// Projects the provided day schedules onto the grid of the visible
/// [`Date`]s.
///
/// Only the visible [`Date`]s cached in the [`DayWindow`] are laid out, the
/// other visible ones are reported as missing. A cached [`Date`] absent from
/// `items_by_date` is laid out empty.
///
/// Malformed [`Item`]s never abort the projection: each one is reported in
/// [`RenderModel::rejected_items`] and the rest of its day is laid out as if
/// it didn't exist.
#[must_use]
pub fn project(
    window: &DayWindow,
    venues: &[venue::Id],
    items_by_date: &HashMap<Date, Vec<Item>>,
    config: &layout::Config,
) -> RenderModel {
    let mut seen = HashSet::with_capacity(venues.len());
    let venues = venues
        .iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .collect::<Vec<_>>();

    let mut model = RenderModel {
        missing_dates: window.missing_dates(),
        ..RenderModel::default()
    };
    for date in window.visible_dates().filter(|d| window.is_cached(*d)) {
        let items = items_by_date.get(&date).map_or(&[][..], Vec::as_slice);
        let day = project_day(
            date,
            items,
            &venues,
            &seen,
            config.minute_height,
            &mut model.rejected_items,
        );
        model.days.push(day);
    }
    model
}

/// Lays out the provided [`Item`]s of a single [`Date`].
fn project_day(
    date: Date,
    items: &[Item],
    venues: &[venue::Id],
    known: &HashSet<venue::Id>,
    minute_height: MinuteHeight,
    rejected: &mut Vec<Rejected>,
) -> DayLayout {
    let mut buckets = HashMap::<Bucket, Vec<Fitted<'_>>>::new();
    for item in items {
        match fit(item, date) {
            Ok(fitted) => {
                buckets.entry(bucket(item, known)).or_default().push(fitted);
            }
            Err(reason) => rejected.push(Rejected {
                item_id: item.id,
                date,
                reason,
            }),
        }
    }

    let venues = venues
        .iter()
        .copied()
        .map(Bucket::Venue)
        .chain(iter::once(Bucket::Unassigned))
        .filter_map(|b| {
            let fitted = buckets.remove(&b).unwrap_or_default();
            (b != Bucket::Unassigned || !fitted.is_empty())
                .then(|| lay_out(b, fitted, date, minute_height))
        })
        .collect();

    DayLayout { date, venues }
}

/// Fits the provided [`Item`] into the provided [`Date`].
fn fit(item: &Item, date: Date) -> Result<Fitted<'_>, Rejection> {
    _ = duration_minutes(&item.interval).map_err(|e| {
        log::debug!("`Item(id: {})` is not laid out: {e}", item.id);
        Rejection::InvalidInterval
    })?;

    let shown = truncate_to_day(&item.interval, date)
        .filter(|i| duration_minutes(i).is_ok())
        .ok_or_else(|| {
            log::debug!(
                "`Item(id: {})` has no whole minute within `{date}`",
                item.id,
            );
            Rejection::OutsideDay
        })?;

    Ok(Fitted { item, shown })
}

/// Returns the [`Bucket`] of the provided [`Item`].
fn bucket(item: &Item, known: &HashSet<venue::Id>) -> Bucket {
    match item.venue_id {
        Some(id) if known.contains(&id) => Bucket::Venue(id),
        Some(id) => {
            log::warn!(
                "`Item(id: {})` references unknown `Venue(id: {id})`, \
                 laying it out as unassigned",
                item.id,
            );
            Bucket::Unassigned
        }
        None => Bucket::Unassigned,
    }
}

/// Allocates columns to the provided [`Fitted`] items of a single [`Bucket`]
/// and places them.
fn lay_out(
    venue: Bucket,
    mut fitted: Vec<Fitted<'_>>,
    date: Date,
    minute_height: MinuteHeight,
) -> VenueColumnLayout {
    let columns = allocate(fitted.iter().map(|f| (f.item.id, f.shown)));

    fitted.sort_by_key(|f| (f.shown.start, f.shown.end, f.item.id));
    let placements = fitted
        .iter()
        .map(|f| Placement {
            item_id: f.item.id,
            kind: f.item.kind(),
            column: columns.item_columns.get(&f.item.id).copied().unwrap_or(0),
            offset: size_for(
                offset_minutes(date.start(), f.shown.start),
                minute_height,
            ),
            size: size_for(
                duration_minutes(&f.shown).unwrap_or(0),
                minute_height,
            ),
            truncated: f.shown != f.item.interval,
            positions: f
                .item
                .shift()
                .into_iter()
                .flat_map(|s| s.eligibilities())
                .map(|(p, eligibility)| PositionEligibility {
                    position_id: p.id,
                    eligibility,
                })
                .collect(),
        })
        .collect();

    VenueColumnLayout {
        venue,
        columns,
        placements,
    }
}
