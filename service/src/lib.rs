//! Service contains the shift-scheduling calendar logic: laying schedule items
//! out into a column grid, tracking which days are loaded and deciding what a
//! volunteer may do with a position.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod calendar;
pub mod command;
pub mod domain;
pub mod eligibility;
pub mod infra;
pub mod layout;
pub mod query;

use std::num::NonZeroUsize;

use derive_more::Debug;
use smart_default::SmartDefault;
#[cfg(test)]
use {proptest as _, serde_json as _, time as _};

#[cfg(doc)]
use infra::Backend;

pub use self::{
    calendar::{DayWindow, RenderModel, Session},
    command::Command,
    eligibility::Eligibility,
    query::Query,
};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// [`layout::Config`] used when projecting the calendar grid.
    pub layout: layout::Config,

    /// Maximum number of day schedules fetched from a [`Backend`]
    /// concurrently.
    #[default(NonZeroUsize::MIN.saturating_add(3))]
    pub fetch_concurrency: NonZeroUsize,
}

/// Calendar service.
#[derive(Clone, Debug)]
pub struct Service<B> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Backend`] of this [`Service`].
    #[debug(skip)]
    backend: B,
}

impl<B> Service<B> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub fn new(config: Config, backend: B) -> Self {
        Self { config, backend }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Backend`] of this [`Service`].
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
