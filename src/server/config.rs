use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// MySQL connection string, e.g. `mysql://root@localhost/parkrightjbu`.
    pub database_url: String,
    pub listen_addr: String,
    pub max_connections: u32,
    pub log_dir: String,
}

// Partial config for layering
#[derive(Deserialize, Default, Debug)]
pub struct PartialDashboardConfig {
    database_url: Option<String>,
    listen_addr: Option<String>,
    max_connections: Option<u32>,
    log_dir: Option<String>,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_log_dir() -> String {
    "logs".to_string()
}

impl PartialDashboardConfig {
    /// Reads a TOML file. A missing file is treated as empty.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file at {path:?}: {e}"))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse TOML from config file at {path:?}: {e}"))
    }

    pub fn from_env() -> Result<Self, String> {
        envy::from_env::<PartialDashboardConfig>()
            .map_err(|e| format!("Failed to load config from environment: {e}"))
    }
}

impl DashboardConfig {
    pub fn load(config_path: Option<&str>) -> Result<Self, String> {
        dotenv::dotenv().ok();

        let file_config = match config_path {
            Some(path_str) => PartialDashboardConfig::from_file(Path::new(path_str))?,
            None => PartialDashboardConfig::default(),
        };
        let env_config = PartialDashboardConfig::from_env()?;

        Self::from_layers(file_config, env_config)
    }

    /// Merges two layers; values from `env_config` win.
    pub fn from_layers(
        file_config: PartialDashboardConfig,
        env_config: PartialDashboardConfig,
    ) -> Result<Self, String> {
        let database_url = env_config
            .database_url
            .or(file_config.database_url)
            .filter(|url| !url.trim().is_empty())
            .ok_or("DATABASE_URL is required")?;

        Ok(DashboardConfig {
            database_url,
            listen_addr: env_config
                .listen_addr
                .or(file_config.listen_addr)
                .unwrap_or_else(default_listen_addr),
            max_connections: env_config
                .max_connections
                .or(file_config.max_connections)
                .unwrap_or_else(default_max_connections),
            log_dir: env_config
                .log_dir
                .or(file_config.log_dir)
                .unwrap_or_else(default_log_dir),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn partial(toml_text: &str) -> PartialDashboardConfig {
        toml::from_str(toml_text).unwrap()
    }

    #[test]
    fn test_defaults_apply() {
        let config = DashboardConfig::from_layers(
            partial(r#"database_url = "mysql://root@localhost/parkrightjbu""#),
            PartialDashboardConfig::default(),
        )
        .unwrap();
        assert_eq!(config.database_url, "mysql://root@localhost/parkrightjbu");
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.log_dir, "logs");
    }

    #[test]
    fn test_env_overrides_file() {
        let file = partial(
            r#"
            database_url = "mysql://file/db"
            listen_addr = "127.0.0.1:3000"
            max_connections = 2
            "#,
        );
        let env = partial(
            r#"
            database_url = "mysql://env/db"
            max_connections = 8
            "#,
        );
        let config = DashboardConfig::from_layers(file, env).unwrap();
        assert_eq!(config.database_url, "mysql://env/db");
        assert_eq!(config.listen_addr, "127.0.0.1:3000");
        assert_eq!(config.max_connections, 8);
    }

    #[test]
    fn test_database_url_required() {
        let err = DashboardConfig::from_layers(
            PartialDashboardConfig::default(),
            partial(r#"database_url = "  ""#),
        )
        .unwrap_err();
        assert!(err.contains("DATABASE_URL"));
    }

    #[test]
    fn test_reads_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "database_url = \"mysql://root@db/parkrightjbu\"").unwrap();
        writeln!(file, "log_dir = \"/var/log/parkright\"").unwrap();

        let layer = PartialDashboardConfig::from_file(file.path()).unwrap();
        let config =
            DashboardConfig::from_layers(layer, PartialDashboardConfig::default()).unwrap();
        assert_eq!(config.database_url, "mysql://root@db/parkrightjbu");
        assert_eq!(config.log_dir, "/var/log/parkright");
    }

    #[test]
    fn test_missing_file_is_empty_layer() {
        let dir = tempfile::tempdir().unwrap();
        let layer = PartialDashboardConfig::from_file(&dir.path().join("absent.toml")).unwrap();
        assert!(layer.database_url.is_none());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_connections = \"many\"").unwrap();
        let err = PartialDashboardConfig::from_file(file.path()).unwrap_err();
        assert!(err.contains("Failed to parse TOML"));
    }
}
