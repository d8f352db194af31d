use super::Location;

/// A sign block bound to a remote server and a layout
///
/// This is the unit persisted in `signs.yml`. Two bindings are equal when
/// they sit at the same location, whatever server or layout they show.
#[derive(Debug, Clone)]
pub struct BungeeSign {
    server: String,
    location: Location,
    layout: String,
}

impl BungeeSign {
    /// Create a new sign binding
    pub fn new(server: impl Into<String>, location: Location, layout: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            location,
            layout: layout.into(),
        }
    }

    /// Name of the target server
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Block the sign occupies
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Name of the layout used to render the sign
    pub fn layout(&self) -> &str {
        &self.layout
    }
}

impl PartialEq for BungeeSign {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location
    }
}

impl Eq for BungeeSign {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_by_location() {
        let loc = Location::new("world", 1, 2, 3);
        let a = BungeeSign::new("lobby", loc.clone(), "default");
        let b = BungeeSign::new("survival", loc, "compact");
        let c = BungeeSign::new("lobby", Location::new("world", 1, 2, 4), "default");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(b.server(), "survival");
        assert_eq!(b.layout(), "compact");
    }
}
