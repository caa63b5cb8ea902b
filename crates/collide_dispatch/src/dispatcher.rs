//! Pairwise dispatch.
//!
//! The dispatcher resolves the concrete kinds of two objects, finds the
//! handler bound to that exact ordered pair, and runs it. A missing handler is
//! a normal outcome, reported as [`DispatchOutcome::NotHandled`].
//!
//! Lookup goes by [`TypeKey`](collide_object::TypeKey) alone. An object whose
//! type merely reuses a registered kind name is not handled.

use collide_object::{GameObject, Keyed};
use tracing::{trace, warn};

use crate::registry::HandlerRegistry;

/// Result of a single dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum DispatchOutcome {
    /// A handler was found and ran.
    Handled,
    /// No handler is bound for this ordered pair of kinds.
    NotHandled,
}

impl DispatchOutcome {
    /// Returns `true` for [`DispatchOutcome::Handled`].
    #[must_use]
    pub fn is_handled(self) -> bool {
        self == Self::Handled
    }
}

/// Runs collision handlers looked up from a borrowed registry.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'r> {
    registry: &'r HandlerRegistry,
}

impl<'r> Dispatcher<'r> {
    /// Create a dispatcher over `registry`.
    #[must_use]
    pub fn new(registry: &'r HandlerRegistry) -> Self {
        Self { registry }
    }

    /// Dispatch a collision between `first` and `second`.
    ///
    /// The handler receives the objects in exactly this order.
    pub fn dispatch(&self, first: &dyn GameObject, second: &dyn GameObject) -> DispatchOutcome {
        let first_kind = first.kind();
        let second_kind = second.kind();

        let Some(handler) = self.registry.lookup(first_kind.key(), second_kind.key()) else {
            return DispatchOutcome::NotHandled;
        };
        if !self.registry.recognizes(first_kind) || !self.registry.recognizes(second_kind) {
            warn!(
                handler = handler.name(),
                first = first_kind.rust_name(),
                second = second_kind.rust_name(),
                "object type reuses a kind name bound to another type"
            );
            return DispatchOutcome::NotHandled;
        }

        trace!(
            handler = handler.name(),
            first = %first.id(),
            second = %second.id(),
            "dispatching collision"
        );
        handler.invoke(first, second);
        DispatchOutcome::Handled
    }
}
