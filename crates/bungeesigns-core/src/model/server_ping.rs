use std::time::Duration;

/// Last status reported by the external pinger
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerStatus {
    /// Whether the last ping was answered
    pub online: bool,
    /// Message of the day from the last answer
    pub motd: String,
    /// Players online
    pub players: u32,
    /// Player slots
    pub max_players: u32,
}

/// A remote server whose status is displayed on signs
///
/// Created from a `servers.<name>` entry of `config.yml`. The pinger that
/// polls the server lives outside this crate; it reads the address and
/// timeout from here and writes results back through [`ServerPing::set_status`].
#[derive(Debug, Clone)]
pub struct ServerPing {
    name: String,
    display_name: String,
    host: String,
    port: u16,
    timeout_secs: u32,
    ping_delay: u32,
    status: ServerStatus,
}

impl ServerPing {
    /// Create a new ping target
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        host: impl Into<String>,
        port: u16,
        timeout_secs: u32,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            host: host.into(),
            port,
            timeout_secs,
            ping_delay: 0,
            status: ServerStatus::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// `host:port` as written in the settings document
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_secs))
    }

    /// Seconds left before this server is pinged again
    pub fn ping_delay(&self) -> u32 {
        self.ping_delay
    }

    /// Make the server due for a ping on the next scheduler pass
    pub fn reset_ping_delay(&mut self) {
        self.ping_delay = 0;
    }

    /// Push the next ping `interval_secs` into the future
    pub fn delay_next_ping(&mut self, interval_secs: u32) {
        self.ping_delay = interval_secs;
    }

    /// Count down by `elapsed_secs`; returns true once the server is due
    pub fn tick(&mut self, elapsed_secs: u32) -> bool {
        self.ping_delay = self.ping_delay.saturating_sub(elapsed_secs);
        self.ping_delay == 0
    }

    pub fn status(&self) -> &ServerStatus {
        &self.status
    }

    pub fn is_online(&self) -> bool {
        self.status.online
    }

    /// Record a successful ping
    pub fn set_status(&mut self, status: ServerStatus) {
        self.status = status;
    }

    /// Record a failed ping; keeps nothing from the previous answer
    pub fn mark_offline(&mut self) {
        self.status = ServerStatus::default();
    }
}
