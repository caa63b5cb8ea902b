//! Handler registry — maps ordered pairs of object kinds to handlers.
//!
//! The registry is filled during bootstrap and read on every dispatch. It is
//! an ordinary owned value: the composition root builds it, then either lends
//! it to a [`Dispatcher`] or freezes it for sharing across threads.

use std::collections::HashMap;
use std::ops::Deref;
use std::sync::Arc;

use collide_object::{Kind, ObjectKind, TypeKey};
use tracing::{debug, info, warn};

use crate::dispatcher::Dispatcher;
use crate::error::RegistryError;
use crate::handler::CollisionHandler;

/// Whether a registration also covers the reversed pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Symmetry {
    /// Register `(a, b)` and `(b, a)`.
    #[default]
    Symmetric,
    /// Register `(a, b)` only.
    Ordered,
}

impl Symmetry {
    /// `true` maps to [`Symmetry::Symmetric`].
    #[must_use]
    pub fn from_flag(symmetric: bool) -> Self {
        if symmetric {
            Self::Symmetric
        } else {
            Self::Ordered
        }
    }
}

/// Ordered pair of kinds used as the registry key.
pub type KindPair = (TypeKey, TypeKey);

/// What the registry knows about one key.
#[derive(Debug, Clone, Copy)]
struct KindRecord {
    /// The kind name the key was derived from.
    name: &'static str,
    /// The type that declared the name, once a typed registration saw it.
    declared_by: Option<Kind>,
}

impl KindRecord {
    /// Fold an incoming registration of `key` into what is already `known`.
    fn merge(known: Option<Self>, key: TypeKey, kind: Option<Kind>) -> Result<Self, RegistryError> {
        let incoming = Self {
            name: key.name(),
            declared_by: kind,
        };
        let Some(known) = known else {
            return Ok(incoming);
        };
        if known.name != key.name() {
            return Err(RegistryError::KeyCollision {
                key: key.raw(),
                name: key.name(),
                known: known.name,
            });
        }
        match (known.declared_by, kind) {
            (Some(existing), Some(kind)) if existing != kind => Err(RegistryError::KeyCollision {
                key: key.raw(),
                name: kind.rust_name(),
                known: existing.rust_name(),
            }),
            (Some(_), _) => Ok(known),
            (None, _) => Ok(incoming),
        }
    }
}

/// Registry of collision handlers keyed by ordered kind pair.
#[derive(Debug, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<KindPair, CollisionHandler>,
    /// Name and declaring type first seen for each key, used to reject hash
    /// collisions and distinct types that reuse a kind name.
    kinds: HashMap<TypeKey, KindRecord>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            kinds: HashMap::new(),
        }
    }

    /// Register `handler` for `(first, second)`, and for `(second, first)`
    /// when `symmetry` is [`Symmetry::Symmetric`].
    ///
    /// Both directions are checked before anything is inserted, so a rejected
    /// call leaves the registry untouched. A symmetric self-pair has only one
    /// ordering and produces a single entry.
    ///
    /// Bare keys carry no declaring type. Prefer [`HandlerRegistry::register_typed`]
    /// when the kinds are known, so two types reusing one name are caught.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateHandler`] if any of the pairs is
    /// already bound, or [`RegistryError::KeyCollision`] if either key
    /// matches a known kind under a different name.
    pub fn register(
        &mut self,
        first: TypeKey,
        second: TypeKey,
        handler: CollisionHandler,
        symmetry: Symmetry,
    ) -> Result<(), RegistryError> {
        self.insert((first, None), (second, None), handler, symmetry)
    }

    /// Register `handler` for a pair of declared kinds.
    ///
    /// # Errors
    ///
    /// Same as [`HandlerRegistry::register`]. Additionally returns
    /// [`RegistryError::KeyCollision`] if a kind's name was already
    /// registered by a different type, or if `first` and `second` are
    /// different types under one name.
    pub fn register_typed(
        &mut self,
        first: Kind,
        second: Kind,
        handler: CollisionHandler,
        symmetry: Symmetry,
    ) -> Result<(), RegistryError> {
        self.insert(
            (first.key(), Some(first)),
            (second.key(), Some(second)),
            handler,
            symmetry,
        )
    }

    /// Typed form of [`HandlerRegistry::register`].
    ///
    /// # Errors
    ///
    /// Same as [`HandlerRegistry::register_typed`].
    pub fn register_kinds<A: ObjectKind, B: ObjectKind>(
        &mut self,
        handler: CollisionHandler,
        symmetry: Symmetry,
    ) -> Result<(), RegistryError> {
        self.register_typed(Kind::of::<A>(), Kind::of::<B>(), handler, symmetry)
    }

    fn insert(
        &mut self,
        (first, first_kind): (TypeKey, Option<Kind>),
        (second, second_kind): (TypeKey, Option<Kind>),
        handler: CollisionHandler,
        symmetry: Symmetry,
    ) -> Result<(), RegistryError> {
        let first_record = KindRecord::merge(self.kinds.get(&first).copied(), first, first_kind)?;
        let known_second = if second == first {
            Some(first_record)
        } else {
            self.kinds.get(&second).copied()
        };
        let second_record = KindRecord::merge(known_second, second, second_kind)?;

        let symmetric = symmetry == Symmetry::Symmetric;
        let mut pairs = vec![(first, second)];
        if symmetric && first != second {
            pairs.push((second, first));
        }

        for pair in &pairs {
            if let Some(existing) = self.handlers.get(pair) {
                return Err(RegistryError::DuplicateHandler {
                    first: pair.0.name(),
                    second: pair.1.name(),
                    existing: existing.name().to_string(),
                });
            }
        }

        if symmetric && first == second {
            warn!(
                kind = first.name(),
                handler = handler.name(),
                "symmetric self-pair has one ordering; register it as ordered"
            );
        }
        info!(
            first = first.name(),
            second = second.name(),
            handler = handler.name(),
            symmetric = pairs.len() == 2,
            "registering collision handler"
        );

        self.kinds.insert(first, first_record);
        self.kinds.insert(second, second_record);
        for pair in pairs {
            self.handlers.insert(pair, handler.clone());
        }
        Ok(())
    }

    /// Look up the handler for the exact ordered pair `(first, second)`.
    #[must_use]
    pub fn lookup(&self, first: TypeKey, second: TypeKey) -> Option<&CollisionHandler> {
        let found = self.handlers.get(&(first, second));
        if found.is_none() {
            debug!(first = first.name(), second = second.name(), "no handler bound");
        }
        found
    }

    /// Returns `false` if `kind`'s key is registered under another name or
    /// by another type. Unregistered kinds and keys bound without a type are
    /// accepted.
    #[must_use]
    pub fn recognizes(&self, kind: Kind) -> bool {
        self.kinds.get(&kind.key()).is_none_or(|record| {
            record.name == kind.key().name() && record.declared_by.is_none_or(|known| known == kind)
        })
    }

    /// Returns `true` if `(first, second)` has a handler.
    #[must_use]
    pub fn contains(&self, first: TypeKey, second: TypeKey) -> bool {
        self.handlers.contains_key(&(first, second))
    }

    /// Returns the number of ordered pairs bound.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Iterate over all bound pairs, sorted by key for stable output.
    pub fn pairs(&self) -> impl Iterator<Item = (KindPair, &CollisionHandler)> {
        let mut entries: Vec<_> = self.handlers.iter().map(|(k, h)| (*k, h)).collect();
        entries.sort_by_key(|(k, _)| *k);
        entries.into_iter()
    }

    /// Borrow a dispatcher over this registry.
    #[must_use]
    pub fn dispatcher(&self) -> Dispatcher<'_> {
        Dispatcher::new(self)
    }

    /// Finish bootstrap: no further registrations are possible, and the
    /// returned handle can be cloned into any number of threads.
    #[must_use]
    pub fn freeze(self) -> FrozenRegistry {
        info!(pairs = self.len(), "handler registry frozen");
        FrozenRegistry(Arc::new(self))
    }
}

/// A read-only, shareable registry.
///
/// Derefs to [`HandlerRegistry`] for lookups; there is no path back to
/// `&mut`, so lookups from many threads need no locking.
#[derive(Debug, Clone)]
pub struct FrozenRegistry(Arc<HandlerRegistry>);

impl Deref for FrozenRegistry {
    type Target = HandlerRegistry;

    fn deref(&self) -> &HandlerRegistry {
        &self.0
    }
}
