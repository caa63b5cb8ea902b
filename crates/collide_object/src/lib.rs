//! # collide_object
//!
//! The objects that pairwise dispatch operates over.
//!
//! This crate provides:
//!
//! - [`TypeKey`] — FNV-1a derived, process-stable identity of a concrete kind.
//! - [`Kind`] — a key plus the `TypeId` of the type that declared it.
//! - [`ObjectKind`] — declares a kind's stable name.
//! - [`Keyed`] — infallible key derivation, implemented for every kind.
//! - [`GameObject`] — the polymorphic object contract.
//! - [`ObjectId`] / [`ObjectIdAllocator`] — per-instance identity.

pub mod object;
pub mod type_key;

pub use object::{GameObject, ObjectId, ObjectIdAllocator};
pub use type_key::{Keyed, Kind, ObjectKind, TypeKey};
