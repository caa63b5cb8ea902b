//! # space_objects
//!
//! Concrete object kinds for the collision demo and the handlers that bind
//! them together.
//!
//! - [`Ship`], [`Station`], [`Debris`] — the kinds.
//! - [`default_bindings`] — the built-in registration table.
//! - [`catalog`] — kinds and handlers by name, for JSON manifests.

pub mod handlers;
pub mod objects;

pub use handlers::{catalog, default_bindings, report, reporting};
pub use objects::{Debris, Ship, Station};
