//! Infrastructure layer.

pub mod backend;

pub use self::backend::{Backend, Memory};
