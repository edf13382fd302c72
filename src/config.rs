use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub recommendation: RecommendationSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    #[serde(default = "default_model_path")]
    pub path: String,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self { path: default_model_path() }
    }
}

fn default_model_path() -> String { "models/career_recommender_model.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationSettings {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            delimiter: default_delimiter(),
        }
    }
}

fn default_top_k() -> usize { 3 }
fn default_delimiter() -> String { ";".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_cache_capacity")]
    pub capacity: u64,
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

fn default_cache_capacity() -> u64 { 1000 }
fn default_cache_ttl() -> u64 { 300 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CAREER_)
    /// 5. MODEL_PATH, if set
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CAREER__SERVER__PORT -> server.port
            .add_source(env_source());

        if let Ok(path) = std::env::var("MODEL_PATH") {
            builder = builder.set_override("model.path", path)?;
        }

        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        let settings: Self = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that would make every recommendation empty or unreadable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recommendation.top_k == 0 {
            return Err(ConfigError::Message(
                "recommendation.top_k must be at least 1".to_string(),
            ));
        }
        if self.recommendation.delimiter.is_empty() {
            return Err(ConfigError::Message(
                "recommendation.delimiter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("CAREER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_recommendation() {
        let rec = RecommendationSettings::default();
        assert_eq!(rec.top_k, 3);
        assert_eq!(rec.delimiter, ";");
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_load_from_file_fills_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = 9000\n\n[model]\npath = \"/srv/model.json\"").unwrap();

        let settings = Settings::load_from(file.path()).unwrap();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.model.path, "/srv/model.json");
        assert_eq!(settings.recommendation.top_k, 3);
        assert_eq!(settings.cache.capacity, 1000);
    }

    #[test]
    fn test_zero_top_k_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[recommendation]\ntop_k = 0").unwrap();

        let err = Settings::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("top_k"));
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[recommendation]\ndelimiter = \"\"").unwrap();

        let err = Settings::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("delimiter"));
    }
}
