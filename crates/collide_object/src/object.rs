//! The [`GameObject`] trait and per-instance identity.
//!
//! Objects are owned by whoever spawned them. Dispatch only ever sees them as
//! `&dyn GameObject` for the duration of a single call.

use std::fmt;

use crate::type_key::Keyed;

/// A unique object instance identifier.
///
/// Two objects of the same kind share a [`TypeKey`](crate::TypeKey) but never
/// an `ObjectId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

impl ObjectId {
    /// Returns the raw `u64` identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Allocates monotonically increasing object ids, starting at 1.
#[derive(Debug)]
pub struct ObjectIdAllocator {
    next_id: u64,
}

impl ObjectIdAllocator {
    /// Creates a new allocator. Ids start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Allocates a fresh id.
    pub fn allocate(&mut self) -> ObjectId {
        let id = self.next_id;
        self.next_id += 1;
        ObjectId(id)
    }
}

impl Default for ObjectIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// A polymorphic object that can take part in pairwise dispatch.
///
/// `Display` is the object's description (e.g. `"Ship: Enterprise"`);
/// [`Keyed::type_key`] names its concrete kind. Implementors get `Keyed` by
/// implementing [`ObjectKind`](crate::ObjectKind).
pub trait GameObject: Keyed + fmt::Display + Send + Sync {
    /// This instance's identity.
    fn id(&self) -> ObjectId;

    /// The object's identifying label, e.g. its name.
    fn label(&self) -> &str;

    /// Perform the object's primary action, returning a description of it.
    fn fly(&self) -> String;
}

impl fmt::Debug for dyn GameObject + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameObject")
            .field("id", &self.id())
            .field("kind", &self.type_key().name())
            .field("label", &self.label())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ObjectKind, TypeKey};

    struct Satellite {
        id: ObjectId,
    }

    impl ObjectKind for Satellite {
        fn type_name() -> &'static str {
            "Satellite"
        }
    }

    impl fmt::Display for Satellite {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Satellite: {}", self.label())
        }
    }

    impl GameObject for Satellite {
        fn id(&self) -> ObjectId {
            self.id
        }

        fn label(&self) -> &str {
            "voyager"
        }

        fn fly(&self) -> String {
            format!("{self} coasting")
        }
    }

    #[test]
    fn test_object_id_display() {
        let id = ObjectId(42);
        assert_eq!(id.id(), 42);
        assert_eq!(id.to_string(), "#42");
    }

    #[test]
    fn test_allocator_produces_unique_ids() {
        let mut alloc = ObjectIdAllocator::new();
        let a = alloc.allocate();
        let b = alloc.allocate();
        let c = alloc.allocate();
        assert_eq!(a.id(), 1);
        assert_eq!(b.id(), 2);
        assert_eq!(c.id(), 3);
    }

    #[test]
    fn test_dyn_object_exposes_type_key() {
        let satellite = Satellite {
            id: ObjectId(7),
        };
        let object: &dyn GameObject = &satellite;
        assert_eq!(object.type_key(), TypeKey::of::<Satellite>());
        assert_eq!(object.to_string(), "Satellite: voyager");
        assert_eq!(object.fly(), "Satellite: voyager coasting");
    }

    #[test]
    fn test_dyn_object_debug() {
        let satellite = Satellite {
            id: ObjectId(7),
        };
        let object: &dyn GameObject = &satellite;
        let debug = format!("{object:?}");
        assert!(debug.contains("Satellite"));
        assert!(debug.contains("voyager"));
    }
}
