//! Configuration for the gitclone agent
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (GITCLONE_*)
//! 3. Config file (~/.config/gitclone/config.toml)
//! 4. Default values

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::worker::WorkerPolicy;
use crate::{Error, Result};

/// Agent identity and repository settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Identity announced to the message bus
    pub agent_id: String,

    /// Root directory for local clones
    ///
    /// Defaults to `~/.cache/gitclone/repos` when unset.
    pub workdir: Option<PathBuf>,

    /// Base URL for remote repositories
    pub remote_base: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            agent_id: "gitclone_agent".to_string(),
            workdir: None,
            remote_base: "https://github.com".to_string(),
        }
    }
}

/// Worker loop timing settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WorkerConfig {
    /// How long a single wait for a mention may block
    #[serde(with = "humantime_serde")]
    pub poll_timeout: Duration,

    /// Pause between successive iterations
    #[serde(with = "humantime_serde")]
    pub idle_delay: Duration,

    /// Pause before retrying after a transport failure
    #[serde(with = "humantime_serde")]
    pub restart_delay: Duration,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        let policy = WorkerPolicy::default();
        Self {
            poll_timeout: policy.poll_timeout,
            idle_delay: policy.idle_delay,
            restart_delay: policy.restart_delay,
        }
    }
}

impl WorkerConfig {
    /// Convert to the worker's timing policy
    pub fn policy(&self) -> WorkerPolicy {
        WorkerPolicy {
            poll_timeout: self.poll_timeout,
            idle_delay: self.idle_delay,
            restart_delay: self.restart_delay,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Agent configuration
    pub agent: AgentConfig,

    /// Worker loop configuration
    pub worker: WorkerConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if the file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/gitclone/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gitclone").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - GITCLONE_AGENT_ID: Identity announced to the message bus
    /// - GITCLONE_WORKDIR: Root directory for local clones
    /// - GITCLONE_REMOTE_BASE: Base URL for remote repositories
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(agent_id) = std::env::var("GITCLONE_AGENT_ID") {
            self.agent.agent_id = agent_id;
        }

        if let Ok(workdir) = std::env::var("GITCLONE_WORKDIR") {
            self.agent.workdir = Some(PathBuf::from(workdir));
        }

        if let Ok(remote_base) = std::env::var("GITCLONE_REMOTE_BASE") {
            self.agent.remote_base = remote_base;
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        workdir: Option<PathBuf>,
        agent_id: Option<String>,
    ) -> Self {
        if let Some(dir) = workdir {
            self.agent.workdir = Some(dir);
        }

        if let Some(id) = agent_id {
            self.agent.agent_id = id;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(
        workdir: Option<PathBuf>,
        agent_id: Option<String>,
    ) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(workdir, agent_id))
    }

    /// Resolve the clone root directory
    ///
    /// Falls back to `~/.cache/gitclone/repos` when no workdir is
    /// configured.
    pub fn resolve_workdir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.agent.workdir {
            return Ok(dir.clone());
        }

        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| Error::Config("Could not determine cache directory".to_string()))?;

        Ok(cache_dir.join("gitclone").join("repos"))
    }
}
