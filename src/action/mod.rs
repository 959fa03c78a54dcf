//! Typed multicast actions.
//!
//! - [`gameaction`] – the [`GameAction`] wrapper and its construction shapes
//! - [`handler`] – named subscriber handles and hooks
//! - [`args`] – argument tuples of arity 0 to 7
pub mod args;
pub mod gameaction;
pub mod handler;

pub use args::{ActionArgs, IntoHandler};
pub use gameaction::{GameAction, RaiseType};
pub use handler::{Handler, Hook};
