// # bungeesignsd - BungeeSigns host process
//
// This is a THIN integration layer. All configuration logic lives in
// bungeesigns-core.
//
// The process is responsible for:
// 1. Reading its own settings from environment variables
// 2. Initializing logging
// 3. Loading the configuration store
// 4. Reloading on SIGHUP and unloading on SIGTERM / SIGINT
//
// ## Configuration
//
// - `BUNGEESIGNS_DATA_DIR`: Directory holding config.yml, layout.yml and
//   signs.yml (default: plugins/BungeeSigns)
// - `BUNGEESIGNS_LOG_LEVEL`: trace, debug, info, warn or error (default: info)
//
// ## Example
//
// ```bash
// export BUNGEESIGNS_DATA_DIR=/srv/minecraft/plugins/BungeeSigns
// bungeesignsd
// kill -HUP $(pidof bungeesignsd)   # reload after editing the YAML files
// ```

use anyhow::Result;
use bungeesigns_core::ConfigStore;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

const DEFAULT_DATA_DIR: &str = "plugins/BungeeSigns";

/// Exit codes for different termination scenarios
///
/// - 0: Clean shutdown
/// - 1: Configuration or startup error
/// - 2: Runtime error (unexpected)
#[derive(Debug, Clone, Copy)]
enum SignsExitCode {
    CleanShutdown = 0,
    ConfigError = 1,
    RuntimeError = 2,
}

impl From<SignsExitCode> for ExitCode {
    fn from(code: SignsExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Process settings
struct Config {
    data_dir: PathBuf,
    log_level: String,
}

impl Config {
    /// Load settings from environment variables
    fn from_env() -> Self {
        Self {
            data_dir: env::var("BUNGEESIGNS_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
            log_level: env::var("BUNGEESIGNS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            anyhow::bail!("BUNGEESIGNS_DATA_DIR cannot be empty");
        }

        if self.data_dir.exists() && !self.data_dir.is_dir() {
            anyhow::bail!(
                "BUNGEESIGNS_DATA_DIR is not a directory: {}",
                self.data_dir.display()
            );
        }

        self.level()?;
        Ok(())
    }

    fn level(&self) -> Result<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            _ => anyhow::bail!(
                "BUNGEESIGNS_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        }
    }
}

/// What the signal loop was woken up for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    Reload,
    Shutdown(&'static str),
}

fn main() -> ExitCode {
    let config = Config::from_env();

    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {}", e);
        return SignsExitCode::ConfigError.into();
    }

    let log_level = config.level().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return SignsExitCode::ConfigError.into();
    }

    info!("Starting bungeesignsd");
    info!("Data directory: {}", config.data_dir.display());

    let mut store = match ConfigStore::open(&config.data_dir) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open data directory: {}", e);
            return SignsExitCode::ConfigError.into();
        }
    };

    if let Err(e) = store.load_config() {
        error!("Failed to load configuration: {}", e);
        return SignsExitCode::ConfigError.into();
    }
    log_summary(&store);

    // The store is not thread-safe; keep everything on one thread
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return SignsExitCode::RuntimeError.into();
        }
    };

    match rt.block_on(run(&mut store)) {
        Ok(()) => SignsExitCode::CleanShutdown.into(),
        Err(e) => {
            error!("Runtime error: {}", e);
            store.unload_config();
            SignsExitCode::RuntimeError.into()
        }
    }
}

/// Serve signals until shutdown
async fn run(store: &mut ConfigStore) -> Result<()> {
    let mut signals = SignalListener::new()?;
    loop {
        match signals.recv().await? {
            Signal::Reload => match store.reload_config() {
                Ok(()) => log_summary(store),
                Err(e) => error!(
                    "Reload failed, configuration stays unloaded until the next SIGHUP: {}",
                    e
                ),
            },
            Signal::Shutdown(name) => {
                info!("Received shutdown signal: {}", name);
                store.unload_config();
                info!("Shut down cleanly");
                return Ok(());
            }
        }
    }
}

fn log_summary(store: &ConfigStore) {
    info!(
        "Ping interval {}s, timeout {}s, cooldown {}ms, console log {}",
        store.ping_interval(),
        store.ping_timeout(),
        store.cooldown(),
        store.console_log()
    );
    for server in store.servers() {
        info!("Server {} at {}", server.name(), server.address());
    }
    for sign in store.signs() {
        info!(
            "Sign at {} -> {} ({})",
            sign.location(),
            sign.server(),
            sign.layout()
        );
    }
}

/// Listens for SIGHUP, SIGTERM and SIGINT
#[cfg(unix)]
struct SignalListener {
    sighup: tokio::signal::unix::Signal,
    sigterm: tokio::signal::unix::Signal,
    sigint: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl SignalListener {
    fn new() -> Result<Self> {
        Ok(Self {
            sighup: signal(SignalKind::hangup())
                .map_err(|e| anyhow::anyhow!("Failed to setup SIGHUP handler: {}", e))?,
            sigterm: signal(SignalKind::terminate())
                .map_err(|e| anyhow::anyhow!("Failed to setup SIGTERM handler: {}", e))?,
            sigint: signal(SignalKind::interrupt())
                .map_err(|e| anyhow::anyhow!("Failed to setup SIGINT handler: {}", e))?,
        })
    }

    async fn recv(&mut self) -> Result<Signal> {
        let received = tokio::select! {
            _ = self.sighup.recv() => Signal::Reload,
            _ = self.sigterm.recv() => Signal::Shutdown("SIGTERM"),
            _ = self.sigint.recv() => Signal::Shutdown("SIGINT"),
        };
        Ok(received)
    }
}

/// Listens for CTRL-C
///
/// Fallback for non-Unix platforms, where reload needs a restart.
#[cfg(not(unix))]
struct SignalListener;

#[cfg(not(unix))]
impl SignalListener {
    fn new() -> Result<Self> {
        Ok(Self)
    }

    async fn recv(&mut self) -> Result<Signal> {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to wait for CTRL-C: {}", e))?;
        Ok(Signal::Shutdown("SIGINT"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_validation() {
        let config = Config {
            data_dir: PathBuf::from("plugins/BungeeSigns"),
            log_level: "DEBUG".to_string(),
        };
        assert_eq!(config.level().unwrap(), Level::DEBUG);
        assert!(config.validate().is_ok());

        let config = Config {
            data_dir: PathBuf::from("plugins/BungeeSigns"),
            log_level: "verbose".to_string(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_data_dir_rejected() {
        let config = Config {
            data_dir: PathBuf::new(),
            log_level: "info".to_string(),
        };
        assert!(config.validate().is_err());
    }
}
