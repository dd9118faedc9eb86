//! Configuration model loaded from external sources.
//!
//! Values are layered: built-in defaults, then an optional YAML file, then
//! `JOBMATCH_`-prefixed environment variables using `__` for nesting
//! (for example `JOBMATCH_SMTP__PASSWORD`).

use std::env;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use config::{Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::DEFAULT_SIMILARITY_THRESHOLD;

/// Environment variable pointing at the YAML configuration file.
pub const CONFIG_PATH_VAR: &str = "JOBMATCH_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config/jobmatch.yaml";

const DEFAULT_SUBJECT: &str = "🔍 Matched DevOps/SRE Jobs This Hour";
const DEFAULT_USER_AGENT: &str = concat!("pushkind-jobmatch/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, Deserialize)]
/// Top-level configuration; each section is handed to one component.
pub struct AppConfig {
    pub storage: StorageConfig,
    pub mail: MailConfig,
    pub smtp: SmtpConfig,
    #[serde(default)]
    pub crawl: CrawlConfig,
}

#[derive(Clone, Debug, Deserialize)]
/// Location of the resume object.
pub struct StorageConfig {
    pub bucket: String,
    pub key: String,
    /// Overrides the region from the AWS provider chain.
    #[serde(default)]
    pub region: Option<String>,
    /// Custom endpoint for S3-compatible storage.
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MailConfig {
    pub sender: String,
    pub recipient: String,
    #[serde(default = "default_subject")]
    pub subject: String,
}

#[derive(Clone, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    pub user: String,
    pub password: String,
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Debug, Deserialize)]
/// Pages to scrape and the criteria a posting has to meet.
pub struct CrawlConfig {
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl CrawlConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            urls: vec![],
            keywords: default_keywords(),
            threshold: default_threshold(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

fn default_smtp_port() -> u16 {
    465
}

fn default_keywords() -> Vec<String> {
    ["devops", "site reliability", "sre", "platform engineer"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_threshold() -> f64 {
    DEFAULT_SIMILARITY_THRESHOLD
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl AppConfig {
    /// Checks the values serde cannot express constraints for.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let crawl = &self.crawl;

        if !crawl.threshold.is_finite() || !(0.0..=100.0).contains(&crawl.threshold) {
            return Err(ConfigError::Invalid(format!(
                "crawl.threshold must be within 0..=100, got {}",
                crawl.threshold
            )));
        }

        if crawl.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "crawl.request_timeout_secs must be positive".to_string(),
            ));
        }

        if crawl.keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "crawl.keywords must contain at least one keyword".to_string(),
            ));
        }

        for raw in &crawl.urls {
            let url = Url::parse(raw)
                .map_err(|e| ConfigError::Invalid(format!("crawl.urls: {raw}: {e}")))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ConfigError::Invalid(format!(
                    "crawl.urls: {raw}: unsupported scheme {}",
                    url.scheme()
                )));
            }
        }

        if self.storage.bucket.is_empty() || self.storage.key.is_empty() {
            return Err(ConfigError::Invalid(
                "storage.bucket and storage.key must be set".to_string(),
            ));
        }

        Ok(())
    }
}

/// Loads configuration from the file named by [`CONFIG_PATH_VAR`], falling
/// back to [`DEFAULT_CONFIG_PATH`].
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_config_from(Path::new(&path))
}

/// Loads and validates configuration using `path` as the optional YAML layer.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let settings = config::Config::builder()
        .add_source(File::from(path).format(FileFormat::Yaml).required(false))
        .add_source(
            Environment::with_prefix("JOBMATCH")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    config.validate()?;

    if config.crawl.urls.is_empty() {
        log::warn!("No crawl.urls configured; nothing will be scraped");
    }

    Ok(config)
}
