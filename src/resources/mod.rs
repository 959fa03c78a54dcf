//! Shared state the actions collaborate with.
//!
//! - [`destroysignal`] – aggregate teardown broadcast actions link onto
//! - [`actionsconfig`] – INI-backed diagnostics and demo settings
pub mod actionsconfig;
pub mod destroysignal;
