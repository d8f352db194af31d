use std::fmt;

/// Block position inside a named world
///
/// Locations are compared by value, so two signs at the same coordinates in
/// the same world are the same sign.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    /// World name as known to the game server
    pub world: String,
    /// Block X coordinate
    pub x: i32,
    /// Block Y coordinate
    pub y: i32,
    /// Block Z coordinate
    pub z: i32,
}

impl Location {
    /// Create a new location
    pub fn new(world: impl Into<String>, x: i32, y: i32, z: i32) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {}, {})", self.world, self.x, self.y, self.z)
    }
}
