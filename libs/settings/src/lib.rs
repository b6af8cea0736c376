//! Configuration for the price mock generator
//!
//! Sources, later ones winning:
//! 1. built-in defaults
//! 2. an optional TOML file
//! 3. `PRICEMOCK__*` environment variables (`PRICEMOCK__MOCK_SERVER__URL`)
//! 4. `SMOCKER_HOST`, which overrides the mock server URL when set
//!
//! `${VAR}` references in paths and URLs are expanded after loading.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config_crate::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Mock server URL used when nothing else is configured
pub const DEFAULT_MOCK_SERVER_URL: &str = "http://localhost:8081";

/// Filter applied when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "origins=info,smocker=info,settings=info,warn";

/// Prefix of structured environment overrides
pub const ENV_PREFIX: &str = "PRICEMOCK";

/// Legacy variable naming the mock server URL
pub const SMOCKER_HOST_VAR: &str = "SMOCKER_HOST";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub mock_server: MockServerSettings,
    pub output: OutputSettings,
    pub log_filter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MockServerSettings {
    /// Admin API base URL
    pub url: String,
    /// Clear existing mocks before deploying
    pub reset: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Where to write the serialized mock list before deploying, if anywhere
    pub dump_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mock_server: MockServerSettings::default(),
            output: OutputSettings::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Default for MockServerSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_MOCK_SERVER_URL.to_string(),
            reset: true,
        }
    }
}

impl Settings {
    /// Load from defaults, `path` (if given) and the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None, std::env::var(SMOCKER_HOST_VAR).ok())
    }

    /// Like [`Settings::load`] but with an explicit environment instead of the
    /// process one
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
        smocker_host: Option<String>,
    ) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            info!("Loading settings from {:?}", path);
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config = builder.build().context("Failed to build configuration")?;
        let mut settings: Settings = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        if let Some(host) = smocker_host.filter(|host| !host.is_empty()) {
            debug!(%host, "Mock server URL taken from {}", SMOCKER_HOST_VAR);
            settings.mock_server.url = host;
        }

        settings.expand_env_vars()?;
        Ok(settings)
    }

    /// Expand `${VAR}` references in the URL and dump path
    pub fn expand_env_vars(&mut self) -> Result<()> {
        self.mock_server.url = shellexpand::env(&self.mock_server.url)
            .context("Failed to expand mock server URL")?
            .into_owned();

        if let Some(path) = &self.output.dump_path {
            let raw = path.to_string_lossy();
            let expanded = shellexpand::env(&raw).context("Failed to expand dump path")?;
            self.output.dump_path = Some(PathBuf::from(expanded.as_ref()));
        }
        Ok(())
    }
}
