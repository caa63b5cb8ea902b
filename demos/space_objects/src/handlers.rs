//! Collision handlers between the space object kinds, and the default
//! binding table.

use collide_dispatch::{BootstrapError, CollisionHandler, HandlerBinding, HandlerCatalog, Symmetry};
use collide_object::GameObject;
use tracing::info;

use crate::objects::{Debris, Ship, Station};

/// Handler names paired with the headline each one reports.
pub const HEADLINES: [(&str, &str); 4] = [
    ("ship_ship", "Collision between 2 ships"),
    ("ship_debris", "Collision between ship and debris"),
    ("ship_station", "Collision between ship and station"),
    ("debris_station", "Collision between debris and station"),
];

/// Format a collision report line.
#[must_use]
pub fn report(headline: &str, first: &dyn GameObject, second: &dyn GameObject) -> String {
    format!("{headline}: {first} and {second}")
}

/// A handler that logs `report(headline, first, second)`.
#[must_use]
pub fn reporting(name: &'static str, headline: &'static str) -> CollisionHandler {
    CollisionHandler::new(name, move |first, second| {
        info!(
            handler = name,
            first = %first.id(),
            second = %second.id(),
            "{}",
            report(headline, first, second)
        );
    })
}

/// The built-in bindings: ship-ship one way, every other pair both ways.
#[must_use]
pub fn default_bindings() -> Vec<HandlerBinding> {
    let [ship_ship, ship_debris, ship_station, debris_station] =
        HEADLINES.map(|(name, headline)| reporting(name, headline));
    vec![
        HandlerBinding::new::<Ship, Ship>(ship_ship, Symmetry::Ordered),
        HandlerBinding::new::<Ship, Debris>(ship_debris, Symmetry::Symmetric),
        HandlerBinding::new::<Ship, Station>(ship_station, Symmetry::Symmetric),
        HandlerBinding::new::<Debris, Station>(debris_station, Symmetry::Symmetric),
    ]
}

/// Every kind and handler in this crate, for resolving binding manifests.
///
/// # Errors
///
/// Returns [`BootstrapError`] if two kinds or two handlers share a name.
pub fn catalog() -> Result<HandlerCatalog, BootstrapError> {
    let mut catalog = HandlerCatalog::new()
        .with_kind::<Ship>()?
        .with_kind::<Station>()?
        .with_kind::<Debris>()?;
    for (name, headline) in HEADLINES {
        catalog = catalog.with_handler(reporting(name, headline))?;
    }
    Ok(catalog)
}
