//! CLI configuration management.
//!
//! All configuration can be provided via CLI arguments or environment
//! variables. Use `--help` to see all available options.
//!
//! # Example
//!
//! ```bash
//! # Point the console at a server
//! studia-cli --base-url "https://api.studia.app" books list
//!
//! # Or via environment variables
//! STUDIA_BASE_URL="https://api.studia.app" studia-cli books list
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, anyhow};
use clap::{Args, Parser};
use studia_admin::AdminClient;
use studia_http::{FileStorage, HttpClientConfig};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::TRACING_TARGET_CONFIG;
use crate::command::Command;

/// Complete CLI configuration.
#[derive(Debug, Parser)]
#[command(name = "studia")]
#[command(about = "Admin console for the Studia education platform")]
#[command(version)]
pub struct Cli {
    /// Connection and credential configuration.
    #[clap(flatten)]
    pub client: ClientConfig,

    /// The operation to perform.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses
    /// CLI arguments.
    ///
    /// This is the preferred way to initialize the CLI configuration as it
    /// ensures .env files are loaded before clap parses arguments, allowing
    /// environment variables from .env to be used as defaults.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is
    /// enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with environment-based filtering.
    ///
    /// Logs go to stderr so command output on stdout stays parseable.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Connection and credential configuration.
#[derive(Debug, Clone, Args)]
#[must_use = "config does nothing unless you use it"]
pub struct ClientConfig {
    /// Base URL of the Studia API server.
    #[arg(long, env = "STUDIA_BASE_URL", default_value = "http://localhost:8000")]
    pub base_url: String,

    /// Path of the credentials file.
    ///
    /// Defaults to `studia/credentials.json` under the platform config
    /// directory. Deleting the file signs the console out.
    #[arg(long, env = "STUDIA_CREDENTIALS")]
    pub credentials: Option<PathBuf>,

    /// Request timeout in seconds. Valid range: 1-300.
    #[arg(long, env = "STUDIA_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,
}

impl ClientConfig {
    /// Validates all configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is outside the 1-300 second range.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.timeout == 0 || self.timeout > 300 {
            return Err(anyhow!(
                "Timeout {} seconds is invalid. Must be between 1 and 300 seconds.",
                self.timeout
            ));
        }

        Ok(())
    }

    /// Logs configuration at debug level (no sensitive information).
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            base_url = %self.base_url,
            timeout_secs = self.timeout,
            "client configuration"
        );
    }

    /// Builds the admin client over file-backed credentials.
    pub fn build(&self) -> anyhow::Result<AdminClient> {
        let storage = FileStorage::open(self.credentials_path()?)
            .context("failed to open the credentials file")?;

        let config = HttpClientConfig::new(&self.base_url)?
            .with_timeout(Duration::from_secs(self.timeout));

        AdminClient::new(config, Arc::new(storage)).context("failed to create the admin client")
    }

    /// Resolves the credentials file path, preferring the explicit flag.
    fn credentials_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = &self.credentials {
            return Ok(path.clone());
        }

        let base = dirs::config_dir().context("no config directory found; pass --credentials")?;
        Ok(base.join("studia").join("credentials.json"))
    }
}
