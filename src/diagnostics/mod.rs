//! Development-time diagnostics, compiled only with the `diagnostics` feature.
//!
//! - [`naming`] – checks that subscriber names follow `<ActionName>Handler`
//! - [`eventlog`] – append-only record of every raised action
//!
//! Nothing here can veto an operation; results only reach the `log` sink.
pub mod eventlog;
pub mod naming;
