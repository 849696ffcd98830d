use crate::utils::errors::{ImporterError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub supabase: SupabaseConfig,
    pub csv: CsvConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupabaseConfig {
    /// Name of the environment variable holding the project base URL.
    pub url_env: String,
    /// Name of the environment variable holding the service role key.
    pub key_env: String,
    pub table: String,
    pub conflict_target: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvConfig {
    pub delimiter: char,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            supabase: SupabaseConfig {
                url_env: "NEXT_PUBLIC_SUPABASE_URL".to_string(),
                key_env: "SUPABASE_SERVICE_ROLE_KEY".to_string(),
                table: "onboarding_notifications".to_string(),
                conflict_target: "applicant_id".to_string(),
                timeout_seconds: 30,
            },
            csv: CsvConfig { delimiter: ';' },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ImporterError::ConfigError(e.to_string()))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ImporterError::ConfigError(e.to_string()))?;
        config.csv.delimiter_byte()?;
        Ok(config)
    }

    /// Falls back to defaults when the file is missing or invalid.
    pub fn load_or_default(path: Option<&str>) -> Self {
        match path {
            Some(p) if Path::new(p).exists() => Self::load_from_file(p).unwrap_or_else(|e| {
                tracing::warn!(path = p, error = %e, "Ignoring invalid config file");
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}

impl CsvConfig {
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(ImporterError::ConfigError(format!(
                "CSV delimiter must be ASCII, got {:?}",
                self.delimiter
            )))
        }
    }
}

/// Connection details for the hosted table service, read from the environment.
#[derive(Clone)]
pub struct SupabaseCredentials {
    pub base_url: String,
    pub service_key: String,
}

impl std::fmt::Debug for SupabaseCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseCredentials")
            .field("base_url", &self.base_url)
            .field("service_key", &"<redacted>")
            .finish()
    }
}

impl SupabaseCredentials {
    pub fn from_env(config: &SupabaseConfig) -> Result<Self> {
        Self::from_lookup(config, |name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(config: &SupabaseConfig, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| {
                    ImporterError::ConfigError(format!("environment variable {} is not set", name))
                })
        };

        Ok(Self {
            base_url: read(&config.url_env)?,
            service_key: read(&config.key_env)?,
        })
    }
}
