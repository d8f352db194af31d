/// Named text template controlling how a sign renders a server
///
/// Built from a `layouts.<name>` entry of `layout.yml`. Absent text fields
/// stay `None` so the renderer can apply its own fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignLayout {
    pub name: String,
    /// Status text while the server answers pings
    pub online: Option<String>,
    /// Status text while the server is unreachable
    pub offline: Option<String>,
    /// Sign lines, top to bottom
    pub lines: Vec<String>,
    /// Whether clicking the sign sends the player to the server
    pub teleport: bool,
    /// Replacement for numeric placeholders while offline
    pub offline_int: Option<String>,
    /// Replacement for the MOTD while offline
    pub offline_motd: Option<String>,
    /// Chat message when a player clicks an offline sign
    pub offline_message: Option<String>,
    /// Chat message when a player clicks during the cooldown
    pub cooldown_message: Option<String>,
}

impl SignLayout {
    /// Create an empty layout with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            online: None,
            offline: None,
            lines: Vec::new(),
            teleport: false,
            offline_int: None,
            offline_motd: None,
            offline_message: None,
            cooldown_message: None,
        }
    }

    /// Status text for the given server state
    pub fn status_text(&self, online: bool) -> Option<&str> {
        if online {
            self.online.as_deref()
        } else {
            self.offline.as_deref()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        let mut layout = SignLayout::new("default");
        assert_eq!(layout.status_text(true), None);

        layout.online = Some("&aOnline".to_string());
        layout.offline = Some("&cOffline".to_string());
        assert_eq!(layout.status_text(true), Some("&aOnline"));
        assert_eq!(layout.status_text(false), Some("&cOffline"));
    }
}
