use serde::Deserialize;
use std::env::vars;
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub enum Env {
    #[default]
    #[serde(rename = "local")]
    Local,
    #[serde(rename = "test")]
    Test,
    #[serde(rename = "prod")]
    Prod,
}

impl Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Env::Local => write!(f, "local"),
            Env::Test => write!(f, "test"),
            Env::Prod => write!(f, "prod"),
        }
    }
}

// The final, validated configuration struct.
#[derive(Debug, Clone)]
pub struct Config {
    env: Env,
    database_url: String,
    server_addr: String,
    port: u16,
    // Where `GET /api/mps` mirrors its payload, if anywhere.
    mps_snapshot_path: Option<PathBuf>,
}

// Intermediate struct for deserializing environment variables, where most
// fields are optional and get environment-aware defaults.
#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    env: Env,
    database_url: Option<String>,
    server_addr: Option<String>,
    port: Option<u16>,
    mps_snapshot_path: Option<String>,
}

impl Config {
    /// Create a test configuration with default values.
    ///
    /// Available to unit and integration tests; not meant for production.
    pub fn new_for_test() -> Self {
        Self {
            env: Env::Local,
            database_url: "postgres://localhost:5432/test".to_owned(),
            server_addr: "127.0.0.1".to_owned(),
            port: DEFAULT_PORT,
            mps_snapshot_path: None,
        }
    }

    /// Test configuration that mirrors MPS responses into `path`.
    pub fn new_for_test_with_snapshot(path: impl Into<PathBuf>) -> Self {
        Self {
            mps_snapshot_path: Some(path.into()),
            ..Self::new_for_test()
        }
    }

    pub fn environment(&self) -> &Env {
        &self.env
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_addr(&self) -> &str {
        &self.server_addr
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn mps_snapshot_path(&self) -> Option<&Path> {
        self.mps_snapshot_path.as_deref()
    }

    pub fn is_prod(&self) -> bool {
        matches!(self.env, Env::Prod)
    }

    /// Initializes configuration by reading from environment variables
    /// and applying environment-aware defaults.
    pub fn init() -> anyhow::Result<Self> {
        let raw_config: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw_config)
    }

    fn from_raw(raw_config: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            env,
            database_url,
            server_addr,
            port,
            mps_snapshot_path,
        } = raw_config;

        let Some(database_url) = database_url.filter(|url| !url.trim().is_empty()) else {
            anyhow::bail!("DATABASE_URL must be set for {} environment", env);
        };

        let server_addr = server_addr.unwrap_or_else(|| {
            match env {
                Env::Local | Env::Test => "127.0.0.1",
                Env::Prod => "0.0.0.0",
            }
            .to_owned()
        });

        let port = port.unwrap_or(DEFAULT_PORT);
        if port == 0 {
            anyhow::bail!("PORT must be a non-zero port number");
        }

        let mps_snapshot_path = mps_snapshot_path
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Config {
            env,
            database_url,
            server_addr,
            port,
            mps_snapshot_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_env::from_iter;

    #[test]
    fn defaults_for_local() {
        let raw: RawConfig = from_iter(vec![("DATABASE_URL", "postgres://example")])
            .expect("RawConfig should deserialize");

        let config = Config::from_raw(raw).expect("local config should build");
        assert!(!config.is_prod());
        assert_eq!(config.server_addr(), "127.0.0.1");
        assert_eq!(config.port(), 5000);
        assert!(config.mps_snapshot_path().is_none());
    }

    #[test]
    fn prod_listens_publicly() {
        let raw: RawConfig = from_iter(vec![
            ("ENV", "prod"),
            ("DATABASE_URL", "postgres://example"),
            ("PORT", "8080"),
        ])
        .expect("RawConfig should deserialize");

        let config = Config::from_raw(raw).expect("prod config should build");
        assert!(config.is_prod());
        assert_eq!(config.server_addr(), "0.0.0.0");
        assert_eq!(config.port(), 8080);
    }

    #[test]
    fn database_url_is_required() {
        let raw: RawConfig = from_iter(vec![("ENV", "local")]).expect("RawConfig should deserialize");

        let result = Config::from_raw(raw);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn snapshot_path_is_optional() {
        let raw: RawConfig = from_iter(vec![
            ("DATABASE_URL", "postgres://example"),
            ("MPS_SNAPSHOT_PATH", "data/mpsData.json"),
        ])
        .expect("RawConfig should deserialize");

        let config = Config::from_raw(raw).expect("config should build");
        assert_eq!(
            config.mps_snapshot_path(),
            Some(Path::new("data/mpsData.json"))
        );
    }

    #[test]
    fn explicit_server_addr_wins() {
        let raw: RawConfig = from_iter(vec![
            ("ENV", "prod"),
            ("DATABASE_URL", "postgres://example"),
            ("SERVER_ADDR", "10.0.0.5"),
        ])
        .expect("RawConfig should deserialize");

        let config = Config::from_raw(raw).expect("config should build");
        assert_eq!(config.server_addr(), "10.0.0.5");
    }
}
