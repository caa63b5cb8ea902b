//! The three object kinds: [`Ship`], [`Station`] and [`Debris`].
//!
//! Each carries a name and a top speed. Construction and drop are traced at
//! debug level.

use std::fmt;

use collide_object::{GameObject, ObjectId, ObjectKind};
use tracing::debug;

/// A powered spacecraft.
#[derive(Debug)]
pub struct Ship {
    id: ObjectId,
    name: String,
    max_speed: f64,
}

impl Ship {
    /// Create a new ship.
    #[must_use]
    pub fn new(id: ObjectId, name: impl Into<String>, max_speed: f64) -> Self {
        let ship = Self {
            id,
            name: name.into(),
            max_speed,
        };
        debug!(id = %ship.id, name = %ship.name, "ship constructed");
        ship
    }

    /// Top speed in mph.
    #[must_use]
    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }
}

impl ObjectKind for Ship {
    fn type_name() -> &'static str {
        "Ship"
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ship: {}", self.name)
    }
}

impl GameObject for Ship {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn fly(&self) -> String {
        format!("{self} flying at {} mph.", self.max_speed)
    }
}

impl Drop for Ship {
    fn drop(&mut self) {
        debug!(id = %self.id, name = %self.name, "ship destroyed");
    }
}

/// An orbital station. Stations orbit rather than fly.
#[derive(Debug)]
pub struct Station {
    id: ObjectId,
    name: String,
    max_speed: f64,
}

impl Station {
    /// Create a new station.
    #[must_use]
    pub fn new(id: ObjectId, name: impl Into<String>, max_speed: f64) -> Self {
        let station = Self {
            id,
            name: name.into(),
            max_speed,
        };
        debug!(id = %station.id, name = %station.name, "station constructed");
        station
    }

    /// Orbital speed in mph.
    #[must_use]
    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }
}

impl ObjectKind for Station {
    fn type_name() -> &'static str {
        "Station"
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station: {}", self.name)
    }
}

impl GameObject for Station {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn fly(&self) -> String {
        format!("{self} orbiting at {} mph.", self.max_speed)
    }
}

impl Drop for Station {
    fn drop(&mut self) {
        debug!(id = %self.id, name = %self.name, "station destroyed");
    }
}

/// Unpowered rock or wreckage.
#[derive(Debug)]
pub struct Debris {
    id: ObjectId,
    name: String,
    max_speed: f64,
}

impl Debris {
    /// Create a new piece of debris.
    #[must_use]
    pub fn new(id: ObjectId, name: impl Into<String>, max_speed: f64) -> Self {
        let debris = Self {
            id,
            name: name.into(),
            max_speed,
        };
        debug!(id = %debris.id, name = %debris.name, "debris constructed");
        debris
    }

    /// Drift speed in mph.
    #[must_use]
    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }
}

impl ObjectKind for Debris {
    fn type_name() -> &'static str {
        "Debris"
    }
}

impl fmt::Display for Debris {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Debris: {}", self.name)
    }
}

impl GameObject for Debris {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn fly(&self) -> String {
        format!("{self} flying at {} mph.", self.max_speed)
    }
}

impl Drop for Debris {
    fn drop(&mut self) {
        debug!(id = %self.id, name = %self.name, "debris destroyed");
    }
}

#[cfg(test)]
mod tests {
    use collide_object::{Keyed, TypeKey};

    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Ship::new(ObjectId(1), "Enterprise", 1000.0).to_string(),
            "Ship: Enterprise"
        );
        assert_eq!(
            Station::new(ObjectId(2), "DS9", 2.0).to_string(),
            "Station: DS9"
        );
        assert_eq!(
            Debris::new(ObjectId(3), "Halley", 150.0).to_string(),
            "Debris: Halley"
        );
    }

    #[test]
    fn test_fly() {
        let ship = Ship::new(ObjectId(1), "Enterprise", 1000.0);
        assert_eq!(ship.fly(), "Ship: Enterprise flying at 1000 mph.");
        let station = Station::new(ObjectId(2), "DS9", 2.5);
        assert_eq!(station.fly(), "Station: DS9 orbiting at 2.5 mph.");
    }

    #[test]
    fn test_kinds_have_distinct_keys() {
        let ship = Ship::new(ObjectId(1), "Enterprise", 1000.0);
        let other = Ship::new(ObjectId(2), "Falcon", 2000.0);
        let station = Station::new(ObjectId(3), "DS9", 2.0);
        let rock = Debris::new(ObjectId(4), "Halley", 150.0);

        assert_eq!(ship.type_key(), other.type_key());
        assert_eq!(ship.type_key(), TypeKey::of::<Ship>());
        assert_ne!(ship.type_key(), station.type_key());
        assert_ne!(station.type_key(), rock.type_key());
        assert_ne!(ship.type_key(), rock.type_key());
    }

    #[test]
    fn test_label_and_id() {
        let rock = Debris::new(ObjectId(9), "Halley", 150.0);
        assert_eq!(rock.label(), "Halley");
        assert_eq!(rock.id(), ObjectId(9));
        assert_eq!(rock.max_speed(), 150.0);
    }
}
