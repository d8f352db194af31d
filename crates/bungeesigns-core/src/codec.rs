//! Sign string codec
//!
//! Every entry of the `signs` list in `signs.yml` is a single string:
//!
//! ```text
//! world;x;y;z;server;layout
//! ```
//!
//! Coordinates are signed block coordinates. None of the text components
//! may contain the separator, and world, server and layout must be
//! non-empty.

use crate::error::{Error, Result};
use crate::model::Location;

/// Field separator inside an encoded sign
pub const SEPARATOR: char = ';';

const FIELD_COUNT: usize = 6;

/// A decoded sign entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignEntry {
    pub location: Location,
    pub server: String,
    pub layout: String,
}

/// Encode a sign binding into its persisted string form
pub fn encode(location: &Location, server: &str, layout: &str) -> Result<String> {
    for (field, value) in [
        ("world", location.world.as_str()),
        ("server", server),
        ("layout", layout),
    ] {
        if value.is_empty() {
            return Err(Error::invalid_sign(format!("{} must not be empty", field)));
        }
        if value.contains(SEPARATOR) {
            return Err(Error::invalid_sign(format!(
                "{} '{}' contains '{}'",
                field, value, SEPARATOR
            )));
        }
    }

    Ok(format!(
        "{world}{s}{x}{s}{y}{s}{z}{s}{server}{s}{layout}",
        world = location.world,
        x = location.x,
        y = location.y,
        z = location.z,
        s = SEPARATOR,
    ))
}

/// Decode a persisted sign string
pub fn decode(entry: &str) -> Result<SignEntry> {
    let fields: Vec<&str> = entry.split(SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return Err(Error::invalid_sign(format!(
            "'{}' has {} fields, expected {}",
            entry,
            fields.len(),
            FIELD_COUNT
        )));
    }

    let coord = |raw: &str| -> Result<i32> {
        raw.trim()
            .parse()
            .map_err(|_| Error::invalid_sign(format!("'{}' has bad coordinate '{}'", entry, raw)))
    };

    let world = fields[0];
    let server = fields[4];
    let layout = fields[5];
    if world.is_empty() || server.is_empty() || layout.is_empty() {
        return Err(Error::invalid_sign(format!("'{}' has an empty field", entry)));
    }

    Ok(SignEntry {
        location: Location::new(world, coord(fields[1])?, coord(fields[2])?, coord(fields[3])?),
        server: server.to_string(),
        layout: layout.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_then_decode_preserves_triple() {
        let location = Location::new("world_the_end", -120, 5, 3001);
        let encoded = encode(&location, "survival", "compact").unwrap();
        assert_eq!(encoded, "world_the_end;-120;5;3001;survival;compact");

        let decoded = decode(&encoded).unwrap();
        assert_eq!(decoded.location, location);
        assert_eq!(decoded.server, "survival");
        assert_eq!(decoded.layout, "compact");
    }

    #[test]
    fn test_encode_rejects_separator_and_empty() {
        let location = Location::new("world", 0, 0, 0);
        assert!(encode(&location, "lob;by", "default").is_err());
        assert!(encode(&location, "lobby", "").is_err());
        assert!(encode(&Location::new("", 0, 0, 0), "lobby", "default").is_err());
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(decode("world;1;2;3;lobby").is_err());
        assert!(decode("world;1;2;3;lobby;default;extra").is_err());
        assert!(decode("world;1;two;3;lobby;default").is_err());
        assert!(decode(";1;2;3;lobby;default").is_err());

        let err = decode("world;1;2").unwrap_err();
        assert!(matches!(err, Error::InvalidSign(_)));
    }
}
