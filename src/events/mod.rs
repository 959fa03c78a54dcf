//! Host engine events.
//!
//! Submodules:
//! - [`sceneteardown`] – scene unload notification that fires the world's
//!   [`DestroySignal`](crate::resources::destroysignal::DestroySignal)
pub mod sceneteardown;
