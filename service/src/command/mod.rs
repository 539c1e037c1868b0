//! [`Command`] definition.

pub mod delete_item;
pub mod load_window;
pub mod save_item;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    delete_item::DeleteItem, load_window::LoadWindow, save_item::SaveItem,
};
