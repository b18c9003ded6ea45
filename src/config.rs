use std::env;
use std::sync::Arc;

use crate::error::StoreError;
use crate::store::{CmsStore, MemoryStore, PostgresStore, RecordStore};

/// Which backend serves the content collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Cms {
        base_url: String,
        api_key: Option<String>,
    },
    Postgres {
        database_url: String,
    },
    Fixture {
        path: String,
    },
}

impl StoreBackend {
    fn from_env() -> Self {
        match env_or("RECORD_STORE", "cms").to_ascii_lowercase().as_str() {
            "postgres" => StoreBackend::Postgres {
                database_url: env_or("DATABASE_URL", "postgres://localhost/portfolio"),
            },
            "fixture" => StoreBackend::Fixture {
                path: env_or("FIXTURE_PATH", "./fixtures/content.json"),
            },
            other => {
                if other != "cms" {
                    tracing::warn!("Unknown RECORD_STORE '{other}', using the CMS backend");
                }
                StoreBackend::Cms {
                    base_url: env_or("CMS_BASE_URL", "http://localhost:4000/api"),
                    api_key: env::var("CMS_API_KEY").ok().filter(|k| !k.is_empty()),
                }
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            StoreBackend::Cms { .. } => "cms",
            StoreBackend::Postgres { .. } => "postgres",
            StoreBackend::Fixture { .. } => "fixture",
        }
    }

    /// Build the configured record store.
    pub async fn connect(&self) -> Result<Arc<dyn RecordStore>, StoreError> {
        Ok(match self {
            StoreBackend::Cms { base_url, api_key } => {
                Arc::new(CmsStore::new(base_url, api_key.clone())?)
            }
            StoreBackend::Postgres { database_url } => {
                Arc::new(PostgresStore::connect(database_url).await?)
            }
            StoreBackend::Fixture { path } => Arc::new(MemoryStore::from_json_file(path)?),
        })
    }
}

/// Copy and outbound links shown in the site chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    pub site_name: String,
    pub contact_email: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub twitter_url: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "PORTFOLIO".to_string(),
            contact_email: "contact@portfolio.com".to_string(),
            linkedin_url: "https://linkedin.com".to_string(),
            github_url: "https://github.com".to_string(),
            twitter_url: "https://twitter.com".to_string(),
        }
    }
}

impl SiteSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            site_name: env_or("SITE_NAME", &defaults.site_name),
            contact_email: env_or("CONTACT_EMAIL", &defaults.contact_email),
            linkedin_url: env_or("LINKEDIN_URL", &defaults.linkedin_url),
            github_url: env_or("GITHUB_URL", &defaults.github_url),
            twitter_url: env_or("TWITTER_URL", &defaults.twitter_url),
        }
    }
}

/// Server configuration
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub store: StoreBackend,
    pub settings: SiteSettings,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self {
            host: env_or("BIND_HOST", "0.0.0.0"),
            port: parse_port("PORT", 8080),
            static_dir: env_or("STATIC_DIR", "./static"),
            store: StoreBackend::from_env(),
            settings: SiteSettings::from_env(),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_or(env_var: &str, default: &str) -> String {
    env::var(env_var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_port(env_var: &str, default: u16) -> u16 {
    env::var(env_var)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
