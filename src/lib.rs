//! Game action library.
//!
//! Typed, synchronous multicast actions for game objects: subscribers are
//! attached and detached by handle, raised with zero to seven arguments
//! between optional pre/post hooks, and cleared in bulk through a
//! [`DestroySignal`](resources::destroysignal::DestroySignal).
//!
//! The `diagnostics` feature (on by default) adds the subscriber naming check
//! and the event log. Without it those code paths are not compiled at all.

pub mod action;
#[cfg(feature = "diagnostics")]
pub mod diagnostics;
pub mod events;
pub mod resources;

pub use action::{GameAction, Handler, RaiseType};
pub use resources::destroysignal::DestroySignal;
