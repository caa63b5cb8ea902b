//! # collide_dispatch
//!
//! Double dispatch over [`GameObject`](collide_object::GameObject)s without
//! language support for it: handlers are bound to ordered pairs of
//! [`TypeKey`](collide_object::TypeKey)s and selected at runtime from the
//! concrete kinds of both objects.
//!
//! This crate provides:
//!
//! - [`CollisionHandler`] — named, shareable handler closure.
//! - [`HandlerRegistry`] — pair-keyed table with symmetric registration and
//!   fail-fast duplicate detection.
//! - [`FrozenRegistry`] — read-only registry handle for multi-threaded lookups.
//! - [`Dispatcher`] — resolves and invokes the handler for a pair of objects.
//! - [`bootstrap`] — builds a registry from a list of [`HandlerBinding`]s or a
//!   JSON [`BindingManifest`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! let registry = bootstrap([
//!     HandlerBinding::new::<Ship, Ship>(ship_ship, Symmetry::Ordered),
//!     HandlerBinding::new::<Ship, Debris>(ship_debris, Symmetry::Symmetric),
//! ])?;
//!
//! match registry.dispatcher().dispatch(&enterprise, &halley) {
//!     DispatchOutcome::Handled => {}
//!     DispatchOutcome::NotHandled => warn!("no collision handler"),
//! }
//! ```

pub mod bootstrap;
pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod registry;

pub use bootstrap::{BindingEntry, BindingManifest, HandlerBinding, HandlerCatalog, bootstrap};
pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use error::{BootstrapError, RegistryError};
pub use handler::{CollisionHandler, HandlerFn};
pub use registry::{FrozenRegistry, HandlerRegistry, KindPair, Symmetry};
