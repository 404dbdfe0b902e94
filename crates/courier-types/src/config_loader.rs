//! Config directory loader with validation and hot-reload support.
//!
//! Reads `gateway.yaml` from a directory path, validates on load, watches for
//! file changes via `notify`, and emits config change events via
//! `tokio::sync::watch`. An invalid config on disk never replaces the last
//! valid one.

use std::path::{Path, PathBuf};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::watch;

use crate::config::GatewayConfig;
use crate::errors::CourierError;

/// Loads, validates, and watches gateway configuration.
#[derive(Debug)]
pub struct ConfigLoader {
    /// Root config directory path.
    config_dir: PathBuf,
    /// Watch sender for broadcasting config changes.
    tx: watch::Sender<GatewayConfig>,
    /// File watcher handle (kept alive to maintain the watch).
    _watcher: Option<RecommendedWatcher>,
}

impl ConfigLoader {
    /// Load configuration from a directory, validate, and return a
    /// `ConfigLoader` along with a `watch::Receiver` for subscribing to
    /// config changes.
    ///
    /// This performs initial load and validation. Call `watch()` afterwards
    /// to start hot-reload file watching.
    pub fn load(config_dir: &Path) -> Result<(Self, watch::Receiver<GatewayConfig>), CourierError> {
        let config = Self::load_gateway(config_dir)?;
        Self::validate(&config)?;

        let (tx, rx) = watch::channel(config);

        Ok((
            Self {
                config_dir: config_dir.to_path_buf(),
                tx,
                _watcher: None,
            },
            rx,
        ))
    }

    /// Start watching the config directory for changes.
    ///
    /// File changes trigger a reload. If the new config is valid, it is
    /// broadcast via the watch channel. Invalid configs are logged but don't
    /// replace the current valid config.
    pub fn watch(&mut self) -> Result<(), CourierError> {
        let config_dir = self.config_dir.clone();
        let tx = self.tx.clone();

        let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            match res {
                Ok(event) => {
                    if matches!(
                        event.kind,
                        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
                    ) {
                        match Self::load_gateway(&config_dir) {
                            Ok(config) => match Self::validate(&config) {
                                Ok(()) => {
                                    let _ = tx.send(config);
                                    tracing::info!("config reloaded successfully");
                                }
                                Err(e) => {
                                    tracing::warn!("config validation failed after file change, keeping previous config: {e}");
                                }
                            },
                            Err(e) => {
                                tracing::warn!("config load failed after file change, keeping previous config: {e}");
                            }
                        }
                    }
                }
                Err(e) => {
                    tracing::error!("file watcher error: {e}");
                }
            }
        })
        .map_err(|e| CourierError::Config(format!("failed to create file watcher: {e}")))?;

        watcher
            .watch(&self.config_dir, RecursiveMode::NonRecursive)
            .map_err(|e| CourierError::Config(format!("failed to watch config directory: {e}")))?;

        self._watcher = Some(watcher);
        tracing::info!(dir = %self.config_dir.display(), "started watching config directory");
        Ok(())
    }

    /// Load `gateway.yaml` from the config directory.
    pub fn load_gateway(config_dir: &Path) -> Result<GatewayConfig, CourierError> {
        let path = config_dir.join("gateway.yaml");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| CourierError::Config(format!("failed to read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| CourierError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Validate the config for internal consistency.
    ///
    /// Checks:
    /// - Engine base URL is present and uses http or https
    /// - Webhook timeout is positive
    /// - Realtime channel capacity is positive
    pub fn validate(config: &GatewayConfig) -> Result<(), CourierError> {
        let base = config.engine.base_url.trim();
        if base.is_empty() {
            return Err(CourierError::Config(
                "engine.base_url must not be empty".to_string(),
            ));
        }
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(CourierError::Config(format!(
                "engine.base_url must be an http(s) URL, got '{base}'"
            )));
        }
        if config.engine.webhook_timeout_secs == 0 {
            return Err(CourierError::Config(
                "engine.webhook_timeout_secs must be positive".to_string(),
            ));
        }
        if config.realtime.channel_capacity == 0 {
            return Err(CourierError::Config(
                "realtime.channel_capacity must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
