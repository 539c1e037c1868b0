//! Geometry of the calendar grid.

pub mod column;
pub mod geometry;

use smart_default::SmartDefault;

pub use self::{
    column::{allocate, ColumnLayout},
    geometry::{
        duration_minutes, offset_minutes, size_for, truncate_to_day,
        InvalidInterval, Length, MinuteHeight,
    },
};

/// Layout configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Fixed [`Length`] of one minute in the grid.
    #[default(MinuteHeight::DEFAULT)]
    pub minute_height: MinuteHeight,
}
