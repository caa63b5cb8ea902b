//! The object collection the driver owns, and the collision script it runs.

use collide_dispatch::{DispatchOutcome, Dispatcher};
use collide_object::{GameObject, ObjectId, ObjectIdAllocator};
use space_objects::{Debris, Ship, Station};
use tracing::{info, warn};

/// Pairs of scene indices that collide, in order.
pub const REFERENCE_SCRIPT: [(usize, usize); 7] =
    [(0, 1), (0, 2), (0, 3), (2, 1), (2, 3), (3, 2), (3, 0)];

/// Owns every object in the run.
#[derive(Debug, Default)]
pub struct Scene {
    allocator: ObjectIdAllocator,
    objects: Vec<Box<dyn GameObject>>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The four objects of the reference run.
    #[must_use]
    pub fn reference() -> Self {
        let mut scene = Self::new();
        scene.spawn(|id| Ship::new(id, "Enterprise", 1000.0));
        scene.spawn(|id| Ship::new(id, "Millennium Falcon", 2000.0));
        scene.spawn(|id| Station::new(id, "Deep Space 9", 2.0));
        scene.spawn(|id| Debris::new(id, "Halley's Comet", 150.0));
        scene
    }

    /// Add an object built from a freshly allocated id.
    pub fn spawn<O, F>(&mut self, make: F) -> ObjectId
    where
        O: GameObject + 'static,
        F: FnOnce(ObjectId) -> O,
    {
        let id = self.allocator.allocate();
        self.objects.push(Box::new(make(id)));
        id
    }

    /// Returns the object at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&dyn GameObject> {
        self.objects.get(index).map(|o| o.as_ref())
    }

    /// Iterate over all objects in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn GameObject> {
        self.objects.iter().map(|o| o.as_ref())
    }

    /// Returns the number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the scene is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Dispatch every pair in `script`. Pairs naming a missing index are
    /// skipped with a warning.
    pub fn run_script(&self, dispatcher: &Dispatcher<'_>, script: &[(usize, usize)]) -> ScriptSummary {
        let mut summary = ScriptSummary::default();
        for &(a, b) in script {
            let (Some(first), Some(second)) = (self.get(a), self.get(b)) else {
                warn!(a, b, "collision pair refers to a missing object");
                summary.skipped += 1;
                continue;
            };
            match dispatcher.dispatch(first, second) {
                DispatchOutcome::Handled => summary.handled += 1,
                DispatchOutcome::NotHandled => {
                    warn!(
                        first = %first,
                        second = %second,
                        "no collision handler exists for this pair"
                    );
                    summary.not_handled += 1;
                }
            }
        }
        info!(
            handled = summary.handled,
            not_handled = summary.not_handled,
            skipped = summary.skipped,
            "collision script finished"
        );
        summary
    }
}

/// Counts from one [`Scene::run_script`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    /// Pairs a handler ran for.
    pub handled: usize,
    /// Pairs with no bound handler.
    pub not_handled: usize,
    /// Pairs naming an index outside the scene.
    pub skipped: usize,
}

#[cfg(test)]
mod tests {
    use collide_dispatch::bootstrap;
    use space_objects::default_bindings;

    use super::*;

    #[test]
    fn test_reference_scene() {
        let scene = Scene::reference();
        assert_eq!(scene.len(), 4);
        let labels: Vec<String> = scene.iter().map(|o| o.to_string()).collect();
        assert_eq!(
            labels,
            [
                "Ship: Enterprise",
                "Ship: Millennium Falcon",
                "Station: Deep Space 9",
                "Debris: Halley's Comet",
            ]
        );
        assert_eq!(scene.get(0).map(|o| o.id()), Some(ObjectId(1)));
        assert!(scene.get(4).is_none());
    }

    #[test]
    fn test_reference_script_with_default_bindings() {
        let registry = bootstrap(default_bindings()).unwrap();
        let summary = Scene::reference().run_script(&registry.dispatcher(), &REFERENCE_SCRIPT);
        assert_eq!(
            summary,
            ScriptSummary {
                handled: 7,
                not_handled: 0,
                skipped: 0,
            }
        );
    }

    #[test]
    fn test_reference_script_with_bundled_manifest() {
        let manifest =
            collide_dispatch::BindingManifest::from_json(include_str!("../bindings.json")).unwrap();
        let registry = space_objects::catalog()
            .unwrap()
            .bootstrap(&manifest)
            .unwrap()
            .freeze();
        let summary = Scene::reference().run_script(&registry.dispatcher(), &REFERENCE_SCRIPT);
        // Ship-station is not bound in the manifest, in either order.
        assert_eq!(
            summary,
            ScriptSummary {
                handled: 5,
                not_handled: 2,
                skipped: 0,
            }
        );
    }

    #[test]
    fn test_script_counts_unhandled_and_skipped() {
        let registry = collide_dispatch::HandlerRegistry::new();
        let summary = Scene::reference().run_script(&registry.dispatcher(), &[(0, 1), (0, 9)]);
        assert_eq!(summary.not_handled, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.handled, 0);
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new();
        assert!(scene.is_empty());
    }
}
