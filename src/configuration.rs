use crate::format::{format_json_only, Formattable, FormattingError, OutputFormat};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

pub const DEFAULT_APPLICATION_ID: &str = "ercli";
pub const DEFAULT_CONFIGURATION_FILE_NAME: &str = "config.json";
pub const CONFIG_DIR_ENV: &str = "ERCLI_CONFIG_DIR";

const REDACTED: &str = "********";

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to resolve the configuration directory")]
    FailedToFindConfigurationDirectory,
    #[error("failed to load configuration data from {path:?}, because of: {cause}")]
    FailedToLoadData {
        path: PathBuf,
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("failed to write configuration data to file, because of: {cause}")]
    FailedToWriteData {
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("missing value for property {name:?}")]
    MissingRequiredPropertyValue { name: String },
    #[error("{cause}")]
    FormattingError {
        #[from]
        cause: FormattingError,
    },
}

/// Credentials and endpoints for one Emergency Reporting account.
///
/// Loaded once per process; requests never modify it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub username: String,
    pub password: String,
    pub client_id: String,
    pub client_secret: String,
    pub account_id: String,
    pub user_id: String,
    pub tenant_host: String,
    pub tenant_segment: String,
    /// Pre-acquired token; when set no token flow runs.
    pub token: String,
    pub host: String,
    pub subscription_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub force_tenant_flow: bool,
}

enum FileKind {
    Json,
    Yaml,
}

impl FileKind {
    fn of(path: &Path) -> FileKind {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml") => {
                FileKind::Yaml
            }
            _ => FileKind::Json,
        }
    }
}

impl Configuration {
    pub fn get_default_configuration_file_path() -> Result<PathBuf, ConfigurationError> {
        if let Ok(config_dir_str) = std::env::var(CONFIG_DIR_ENV) {
            let mut config_path = PathBuf::from(config_dir_str);
            config_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
            return Ok(config_path);
        }

        match config_dir() {
            Some(mut path) => {
                path.push(DEFAULT_APPLICATION_ID);
                path.push(DEFAULT_CONFIGURATION_FILE_NAME);
                Ok(path)
            }
            None => Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }
    }

    /// Loads the file at `path`, or the default location when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Configuration, ConfigurationError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::get_default_configuration_file_path()?,
        };
        debug!("Loading configuration from {}...", path.display());
        let configuration = Self::load_from_file(&path)?;
        configuration.validate()?;
        Ok(configuration)
    }

    /// Parses a JSON or YAML file, chosen by extension. Does not validate.
    pub fn load_from_file(path: &Path) -> Result<Configuration, ConfigurationError> {
        let failed = |cause: Box<dyn std::error::Error + Send + Sync>| {
            ConfigurationError::FailedToLoadData {
                path: path.to_path_buf(),
                cause,
            }
        };

        let contents = fs::read_to_string(path).map_err(|e| failed(Box::new(e)))?;
        match FileKind::of(path) {
            FileKind::Yaml => serde_yaml::from_str(&contents).map_err(|e| failed(Box::new(e))),
            FileKind::Json => serde_json::from_str(&contents).map_err(|e| failed(Box::new(e))),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.subscription_key.is_empty() {
            return Err(ConfigurationError::MissingRequiredPropertyValue {
                name: "subscription_key".to_string(),
            });
        }
        Ok(())
    }

    /// A copy that is safe to print: secrets are masked.
    pub fn redacted(&self) -> Configuration {
        let mask = |value: &str| {
            if value.is_empty() {
                String::new()
            } else {
                REDACTED.to_string()
            }
        };

        Configuration {
            password: mask(&self.password),
            client_secret: mask(&self.client_secret),
            token: mask(&self.token),
            subscription_key: mask(&self.subscription_key),
            ..self.clone()
        }
    }

    pub fn write(&self, writer: &mut dyn Write, path: &Path) -> Result<(), ConfigurationError> {
        let failed = |cause: Box<dyn std::error::Error + Send + Sync>| {
            ConfigurationError::FailedToWriteData { cause }
        };

        match FileKind::of(path) {
            FileKind::Yaml => serde_yaml::to_writer(writer, self).map_err(|e| failed(Box::new(e))),
            FileKind::Json => {
                serde_json::to_writer_pretty(writer, self).map_err(|e| failed(Box::new(e)))
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigurationError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|_| ConfigurationError::FailedToFindConfigurationDirectory)?;
            }
        }

        let mut file =
            File::create(path).map_err(|e| ConfigurationError::FailedToWriteData {
                cause: Box::new(e),
            })?;
        self.write(&mut file, path)
    }
}

impl Formattable for Configuration {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
        format_json_only(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::tempdir;

    const SAMPLE_JSON: &str = r#"{
        "username": "pat",
        "password": "secret",
        "client_id": "cid",
        "client_secret": "csecret",
        "account_id": "1001",
        "user_id": "42",
        "subscription_key": "sub"
    }"#;

    #[test]
    fn test_load_json_configuration() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        File::create(&path)
            .unwrap()
            .write_all(SAMPLE_JSON.as_bytes())
            .unwrap();

        let configuration = Configuration::load(Some(&path)).unwrap();
        assert_eq!(configuration.username, "pat");
        assert_eq!(configuration.account_id, "1001");
        assert_eq!(configuration.subscription_key, "sub");
        assert_eq!(configuration.host, "");
        assert!(!configuration.force_tenant_flow);
    }

    #[test]
    fn test_load_yaml_configuration() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(
            &path,
            "username: pat\nsubscription_key: sub\ntimeout_seconds: 30\nforce_tenant_flow: true\n",
        )
        .unwrap();

        let configuration = Configuration::load(Some(&path)).unwrap();
        assert_eq!(configuration.username, "pat");
        assert_eq!(configuration.timeout_seconds, Some(30));
        assert!(configuration.force_tenant_flow);
    }

    #[test]
    fn test_missing_subscription_key_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"username": "pat"}"#).unwrap();

        match Configuration::load(Some(&path)) {
            Err(ConfigurationError::MissingRequiredPropertyValue { name }) => {
                assert_eq!(name, "subscription_key")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let dir = tempdir().unwrap();
        let result = Configuration::load(Some(&dir.path().join("absent.json")));
        assert!(matches!(
            result,
            Err(ConfigurationError::FailedToLoadData { .. })
        ));
    }

    #[test]
    fn test_redacted_masks_secrets() {
        let configuration: Configuration = serde_json::from_str(SAMPLE_JSON).unwrap();
        let redacted = configuration.redacted();
        assert_eq!(redacted.password, REDACTED);
        assert_eq!(redacted.client_secret, REDACTED);
        assert_eq!(redacted.subscription_key, REDACTED);
        assert_eq!(redacted.token, "");
        assert_eq!(redacted.username, "pat");
    }

    #[test]
    fn test_save_and_reload_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let configuration: Configuration = serde_json::from_str(SAMPLE_JSON).unwrap();
        configuration.save(&path).unwrap();

        let reloaded = Configuration::load_from_file(&path).unwrap();
        assert_eq!(reloaded, configuration);
    }
}
