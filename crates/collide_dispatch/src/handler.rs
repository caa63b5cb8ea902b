//! Collision handler objects.

use std::fmt;
use std::sync::Arc;

use collide_object::GameObject;

/// The callable behind a [`CollisionHandler`].
///
/// Receives both objects in dispatch order. Handlers must not hold on to the
/// references past the call.
pub type HandlerFn = dyn Fn(&dyn GameObject, &dyn GameObject) + Send + Sync;

/// A named, shareable collision handler.
///
/// Cloning is cheap and preserves identity: clones compare equal under
/// [`CollisionHandler::same_as`]. Symmetric registration stores two clones of
/// the same handler.
#[derive(Clone)]
pub struct CollisionHandler {
    name: Arc<str>,
    func: Arc<HandlerFn>,
}

impl CollisionHandler {
    /// Wrap a closure as a handler.
    #[must_use]
    pub fn new<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&dyn GameObject, &dyn GameObject) + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// The handler's name, as used in logs and manifests.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the handler on `(first, second)`.
    pub fn invoke(&self, first: &dyn GameObject, second: &dyn GameObject) {
        (self.func)(first, second);
    }

    /// Returns `true` if both handles point at the same underlying closure.
    #[must_use]
    pub fn same_as(&self, other: &CollisionHandler) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for CollisionHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CollisionHandler").field(&self.name).finish()
    }
}
