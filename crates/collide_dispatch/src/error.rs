//! Registry and bootstrap error types.

use std::path::PathBuf;

/// Errors raised while populating a [`HandlerRegistry`](crate::HandlerRegistry).
///
/// A failed registration leaves the registry exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The ordered pair already has a handler.
    #[error("duplicate collision handler for ({first}, {second}): already bound to '{existing}'")]
    DuplicateHandler {
        first: &'static str,
        second: &'static str,
        existing: String,
    },

    /// A key is already held by a different kind name, or a kind name is
    /// already declared by a different type.
    #[error("type key collision: '{name}' and '{known}' share key {key:#018x}")]
    KeyCollision {
        key: u64,
        name: &'static str,
        known: &'static str,
    },
}

/// Errors raised while turning a binding manifest into registrations.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// Failed to read a manifest file.
    #[error("failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid JSON for the binding schema.
    #[error("failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// A binding names a kind the catalog does not know.
    #[error("unknown object kind '{0}'")]
    UnknownKind(String),

    /// Two different types declare the same kind name.
    #[error("kind '{name}' is declared by both {known} and {incoming}")]
    DuplicateKind {
        name: &'static str,
        known: &'static str,
        incoming: &'static str,
    },

    /// Two catalog handlers share a name.
    #[error("collision handler '{0}' is already in the catalog")]
    DuplicateHandlerName(String),

    /// A binding names a handler the catalog does not know.
    #[error("unknown collision handler '{0}'")]
    UnknownHandler(String),

    /// Registration was rejected.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
