//! Runtime type identity for collidable objects.
//!
//! A [`TypeKey`] is derived from the kind's **string name** using the FNV-1a
//! 64-bit hash. The hash is deterministic across runs and builds, so the same
//! kind always maps to the same key and keys can be written into manifests
//! and logs by name.

use std::any::TypeId;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A stable identifier for a concrete object kind.
///
/// Equality, hashing and ordering use only the 64-bit hash. The name rides
/// along for diagnostics. Two names hashing to one value, or two types
/// declaring one name (see [`Kind`]), are caught at registration time rather
/// than here.
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    hash: u64,
    name: &'static str,
}

impl TypeKey {
    /// FNV-1a 64-bit offset basis.
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

    /// FNV-1a 64-bit prime.
    const FNV_PRIME: u64 = 0x0100_0000_01b3;

    /// Compute the key for a kind name.
    ///
    /// # Algorithm (FNV-1a 64-bit)
    ///
    /// ```text
    /// hash = 0xcbf29ce484222325
    /// for each byte in name.as_bytes():
    ///     hash = hash XOR byte
    ///     hash = hash * 0x00000100000001b3
    /// ```
    #[must_use]
    pub const fn from_name(name: &'static str) -> Self {
        let bytes = name.as_bytes();
        let mut hash = Self::FNV_OFFSET_BASIS;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(Self::FNV_PRIME);
            i += 1;
        }
        Self { hash, name }
    }

    /// The key for kind `K`.
    #[must_use]
    pub fn of<K: ObjectKind>() -> Self {
        Self::from_name(K::type_name())
    }

    /// Returns the raw hash value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.hash
    }

    /// Returns the kind name this key was derived from.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl PartialOrd for TypeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hash.cmp(&other.hash)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A [`TypeKey`] paired with the Rust type it was declared by.
///
/// The key is what dispatch tables are indexed by. The `TypeId` only serves
/// to catch two distinct types declaring the same name.
#[derive(Debug, Clone, Copy)]
pub struct Kind {
    key: TypeKey,
    type_id: TypeId,
    rust_name: &'static str,
}

impl Kind {
    /// The kind of `K`.
    #[must_use]
    pub fn of<K: ObjectKind>() -> Self {
        Self {
            key: TypeKey::of::<K>(),
            type_id: TypeId::of::<K>(),
            rust_name: std::any::type_name::<K>(),
        }
    }

    /// Returns the dispatch key.
    #[must_use]
    pub const fn key(self) -> TypeKey {
        self.key
    }

    /// Returns the declaring type's id.
    #[must_use]
    pub const fn type_id(self) -> TypeId {
        self.type_id
    }

    /// Returns the declaring type's path, for diagnostics only.
    #[must_use]
    pub const fn rust_name(self) -> &'static str {
        self.rust_name
    }
}

impl PartialEq for Kind {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Kind {}

/// Implemented by every concrete object type that takes part in dispatch.
///
/// The name must be unique among the kinds registered in one process; the
/// registry rejects a second type that reuses one.
pub trait ObjectKind: 'static {
    /// A human-readable, stable name for this kind (e.g. `"Ship"`).
    fn type_name() -> &'static str;
}

/// Produces the [`TypeKey`] of a value's concrete kind.
///
/// Every [`ObjectKind`] gets this for free, so key derivation cannot disagree
/// with the kind's declared name.
pub trait Keyed {
    /// Returns the key of this value's concrete kind.
    fn type_key(&self) -> TypeKey;

    /// Returns the key together with the concrete type's id.
    fn kind(&self) -> Kind;
}

impl<K: ObjectKind> Keyed for K {
    fn type_key(&self) -> TypeKey {
        TypeKey::of::<K>()
    }

    fn kind(&self) -> Kind {
        Kind::of::<K>()
    }
}
