//! Startup population of the handler registry.
//!
//! Bindings are plain data: a list of `(first, second, handler, symmetry)`
//! tuples. They can be written in code with [`HandlerBinding::new`] or loaded
//! from a JSON [`BindingManifest`] resolved against a [`HandlerCatalog`].
//!
//! ```json
//! {
//!   "bindings": [
//!     { "first": "Ship", "second": "Ship", "handler": "ship_ship", "symmetric": false },
//!     { "first": "Ship", "second": "Debris", "handler": "ship_debris" }
//!   ]
//! }
//! ```
//!
//! `symmetric` defaults to `true`.

use std::collections::BTreeMap;
use std::path::Path;

use collide_object::{Kind, ObjectKind};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{BootstrapError, RegistryError};
use crate::handler::CollisionHandler;
use crate::registry::{HandlerRegistry, Symmetry};

/// One registration: a handler for an ordered (or unordered) pair of kinds.
#[derive(Debug, Clone)]
pub struct HandlerBinding {
    /// The first kind of the pair.
    pub first: Kind,
    /// The second kind of the pair.
    pub second: Kind,
    /// The handler to run.
    pub handler: CollisionHandler,
    /// Whether `(second, first)` is bound too.
    pub symmetry: Symmetry,
}

impl HandlerBinding {
    /// Bind `handler` to kinds `A` and `B`.
    #[must_use]
    pub fn new<A: ObjectKind, B: ObjectKind>(handler: CollisionHandler, symmetry: Symmetry) -> Self {
        Self {
            first: Kind::of::<A>(),
            second: Kind::of::<B>(),
            handler,
            symmetry,
        }
    }

    /// Register this binding.
    ///
    /// # Errors
    ///
    /// Propagates [`RegistryError`] from [`HandlerRegistry::register_typed`].
    pub fn apply(self, registry: &mut HandlerRegistry) -> Result<(), RegistryError> {
        registry.register_typed(self.first, self.second, self.handler, self.symmetry)
    }
}

/// Build a registry from `bindings`, in order.
///
/// Stops at the first rejected binding; the caller is expected to treat that
/// as fatal rather than run with a partial table.
///
/// # Errors
///
/// Returns the first [`RegistryError`] encountered.
pub fn bootstrap<I>(bindings: I) -> Result<HandlerRegistry, RegistryError>
where
    I: IntoIterator<Item = HandlerBinding>,
{
    let mut registry = HandlerRegistry::new();
    for binding in bindings {
        binding.apply(&mut registry)?;
    }
    info!(pairs = registry.len(), "collision handlers bootstrapped");
    Ok(registry)
}

fn default_symmetric() -> bool {
    true
}

/// A serialised binding, naming kinds and handler by string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingEntry {
    pub first: String,
    pub second: String,
    pub handler: String,
    #[serde(default = "default_symmetric")]
    pub symmetric: bool,
}

/// A declarative list of bindings, usually read from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingManifest {
    pub bindings: Vec<BindingEntry>,
}

impl BindingManifest {
    /// Parse a manifest from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::Parse`] on malformed input.
    pub fn from_json(json: &str) -> Result<Self, BootstrapError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::Io`] if the file cannot be read, or
    /// [`BootstrapError::Parse`] on malformed input.
    pub fn load(path: &Path) -> Result<Self, BootstrapError> {
        let json = std::fs::read_to_string(path).map_err(|source| BootstrapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loading binding manifest");
        Self::from_json(&json)
    }
}

/// Known kinds and named handlers that a manifest may refer to.
#[derive(Debug, Default)]
pub struct HandlerCatalog {
    kinds: BTreeMap<&'static str, Kind>,
    handlers: BTreeMap<String, CollisionHandler>,
}

impl HandlerCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare kind `K` so manifests can name it. Declaring the same type
    /// twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::DuplicateKind`] if another type already
    /// declared `K`'s name.
    pub fn with_kind<K: ObjectKind>(mut self) -> Result<Self, BootstrapError> {
        let kind = Kind::of::<K>();
        match self.kinds.get(K::type_name()) {
            Some(&known) if known != kind => {
                return Err(BootstrapError::DuplicateKind {
                    name: K::type_name(),
                    known: known.rust_name(),
                    incoming: kind.rust_name(),
                });
            }
            Some(_) => {}
            None => {
                self.kinds.insert(K::type_name(), kind);
            }
        }
        Ok(self)
    }

    /// Add a handler under its own name.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::DuplicateHandlerName`] if a handler with the
    /// same name is already in the catalog.
    pub fn with_handler(mut self, handler: CollisionHandler) -> Result<Self, BootstrapError> {
        if self.handlers.contains_key(handler.name()) {
            return Err(BootstrapError::DuplicateHandlerName(handler.name().to_string()));
        }
        self.handlers.insert(handler.name().to_string(), handler);
        Ok(self)
    }

    /// Look up a declared kind by name.
    #[must_use]
    pub fn kind(&self, name: &str) -> Option<Kind> {
        self.kinds.get(name).copied()
    }

    /// Look up a handler by name.
    #[must_use]
    pub fn handler(&self, name: &str) -> Option<&CollisionHandler> {
        self.handlers.get(name)
    }

    /// Turn a manifest into bindings.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::UnknownKind`] or
    /// [`BootstrapError::UnknownHandler`] for the first unresolved name.
    pub fn resolve(&self, manifest: &BindingManifest) -> Result<Vec<HandlerBinding>, BootstrapError> {
        manifest
            .bindings
            .iter()
            .map(|entry| {
                let first = self
                    .kind(&entry.first)
                    .ok_or_else(|| BootstrapError::UnknownKind(entry.first.clone()))?;
                let second = self
                    .kind(&entry.second)
                    .ok_or_else(|| BootstrapError::UnknownKind(entry.second.clone()))?;
                let handler = self
                    .handler(&entry.handler)
                    .cloned()
                    .ok_or_else(|| BootstrapError::UnknownHandler(entry.handler.clone()))?;
                Ok(HandlerBinding {
                    first,
                    second,
                    handler,
                    symmetry: Symmetry::from_flag(entry.symmetric),
                })
            })
            .collect()
    }

    /// Resolve `manifest` and build a registry from it.
    ///
    /// # Errors
    ///
    /// Returns any resolution error, or [`BootstrapError::Registry`] if a
    /// binding is rejected.
    pub fn bootstrap(&self, manifest: &BindingManifest) -> Result<HandlerRegistry, BootstrapError> {
        let bindings = self.resolve(manifest)?;
        Ok(bootstrap(bindings)?)
    }
}

#[cfg(test)]
mod tests {
    use collide_object::TypeKey;

    use super::*;

    struct Ship;
    struct Station;
    struct Debris;

    impl ObjectKind for Ship {
        fn type_name() -> &'static str {
            "Ship"
        }
    }

    impl ObjectKind for Station {
        fn type_name() -> &'static str {
            "Station"
        }
    }

    impl ObjectKind for Debris {
        fn type_name() -> &'static str {
            "Debris"
        }
    }

    fn noop(name: &str) -> CollisionHandler {
        CollisionHandler::new(name, |_, _| {})
    }

    fn try_catalog() -> Result<HandlerCatalog, BootstrapError> {
        HandlerCatalog::new()
            .with_kind::<Ship>()?
            .with_kind::<Station>()?
            .with_kind::<Debris>()?
            .with_handler(noop("ship_ship"))?
            .with_handler(noop("ship_debris"))?
            .with_handler(noop("station_debris"))
    }

    fn catalog() -> HandlerCatalog {
        try_catalog().unwrap()
    }

    const MANIFEST: &str = r#"{
        "bindings": [
            { "first": "Ship", "second": "Ship", "handler": "ship_ship", "symmetric": false },
            { "first": "Ship", "second": "Debris", "handler": "ship_debris" },
            { "first": "Station", "second": "Debris", "handler": "station_debris", "symmetric": true }
        ]
    }"#;

    #[test]
    fn test_bootstrap_from_bindings() {
        let registry = bootstrap([
            HandlerBinding::new::<Ship, Ship>(noop("ship_ship"), Symmetry::Ordered),
            HandlerBinding::new::<Ship, Debris>(noop("ship_debris"), Symmetry::Symmetric),
        ])
        .unwrap();
        assert_eq!(registry.len(), 3);
        assert!(registry.contains(TypeKey::of::<Debris>(), TypeKey::of::<Ship>()));
    }

    #[test]
    fn test_bootstrap_stops_at_duplicate() {
        let err = bootstrap([
            HandlerBinding::new::<Ship, Debris>(noop("ship_debris"), Symmetry::Symmetric),
            HandlerBinding::new::<Debris, Ship>(noop("debris_ship"), Symmetry::Ordered),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::DuplicateHandler {
                first: "Debris",
                second: "Ship",
                ..
            }
        ));
    }

    #[test]
    fn test_manifest_symmetric_defaults_to_true() {
        let manifest = BindingManifest::from_json(MANIFEST).unwrap();
        assert_eq!(manifest.bindings.len(), 3);
        assert!(!manifest.bindings[0].symmetric);
        assert!(manifest.bindings[1].symmetric);
    }

    #[test]
    fn test_catalog_bootstrap_from_manifest() {
        let manifest = BindingManifest::from_json(MANIFEST).unwrap();
        let registry = catalog().bootstrap(&manifest).unwrap();

        let ship = TypeKey::of::<Ship>();
        let station = TypeKey::of::<Station>();
        let debris = TypeKey::of::<Debris>();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.lookup(ship, ship).unwrap().name(), "ship_ship");
        assert_eq!(registry.lookup(debris, station).unwrap().name(), "station_debris");
        assert!(registry.lookup(ship, station).is_none());
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let manifest = BindingManifest::from_json(
            r#"{ "bindings": [ { "first": "Ship", "second": "Comet", "handler": "ship_ship" } ] }"#,
        )
        .unwrap();
        let err = catalog().resolve(&manifest).unwrap_err();
        assert!(matches!(err, BootstrapError::UnknownKind(name) if name == "Comet"));
    }

    #[test]
    fn test_unknown_handler_rejected() {
        let manifest = BindingManifest::from_json(
            r#"{ "bindings": [ { "first": "Ship", "second": "Station", "handler": "ship_station" } ] }"#,
        )
        .unwrap();
        let err = catalog().resolve(&manifest).unwrap_err();
        assert!(matches!(err, BootstrapError::UnknownHandler(name) if name == "ship_station"));
    }

    #[test]
    fn test_manifest_duplicate_surfaces_registry_error() {
        let manifest = BindingManifest::from_json(
            r#"{ "bindings": [
                { "first": "Ship", "second": "Ship", "handler": "ship_ship", "symmetric": false },
                { "first": "Ship", "second": "Ship", "handler": "ship_ship", "symmetric": false }
            ] }"#,
        )
        .unwrap();
        let err = catalog().bootstrap(&manifest).unwrap_err();
        assert!(matches!(
            err,
            BootstrapError::Registry(RegistryError::DuplicateHandler { .. })
        ));
    }

    #[test]
    fn test_malformed_manifest() {
        let err = BindingManifest::from_json("{ \"bindings\": 3 }").unwrap_err();
        assert!(matches!(err, BootstrapError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = BindingManifest::load(Path::new("/nonexistent/bindings.json")).unwrap_err();
        assert!(matches!(err, BootstrapError::Io { .. }));
    }

    #[test]
    fn test_catalog_lookups() {
        let catalog = catalog();
        assert_eq!(catalog.kind("Debris"), Some(Kind::of::<Debris>()));
        assert!(catalog.kind("Comet").is_none());
        assert!(catalog.handler("ship_debris").is_some());
    }

    #[test]
    fn test_catalog_rejects_second_type_under_one_name() {
        // Declares Ship's name from a different type.
        struct Freighter;

        impl ObjectKind for Freighter {
            fn type_name() -> &'static str {
                "Ship"
            }
        }

        let err = catalog().with_kind::<Freighter>().unwrap_err();
        assert!(matches!(
            err,
            BootstrapError::DuplicateKind { name: "Ship", .. }
        ));

        let again = catalog().with_kind::<Ship>().unwrap();
        assert_eq!(again.kind("Ship"), Some(Kind::of::<Ship>()));
    }

    #[test]
    fn test_catalog_rejects_duplicate_handler_name() {
        let err = catalog()
            .with_handler(CollisionHandler::new("ship_debris", |_, _| {}))
            .unwrap_err();
        assert!(matches!(err, BootstrapError::DuplicateHandlerName(name) if name == "ship_debris"));
    }

    #[test]
    fn test_bootstrap_rejects_bindings_of_types_sharing_a_name() {
        struct Freighter;

        impl ObjectKind for Freighter {
            fn type_name() -> &'static str {
                "Ship"
            }
        }

        let err = bootstrap([
            HandlerBinding::new::<Ship, Ship>(noop("ship_ship"), Symmetry::Ordered),
            HandlerBinding::new::<Freighter, Debris>(noop("freighter_debris"), Symmetry::Symmetric),
        ])
        .unwrap_err();
        assert!(matches!(err, RegistryError::KeyCollision { .. }));
    }
}
