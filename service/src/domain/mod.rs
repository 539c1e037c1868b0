//! Domain definitions.

pub mod item;
mod name;
pub mod venue;

pub use self::{item::Item, name::Name, venue::Venue};
