use std::path::PathBuf;

use common_utils::consts;
use domain_types::types::{Connectors, GeneralSettings, InstallmentsSettings, PlusSettings};
use interfaces::services::SettingsService;

use crate::logger::config::Log;

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Failed while loading the configuration: {0}")]
    ConfigError(#[from] config::ConfigError),
    #[error("Failed to initialize the logger: {0}")]
    LoggerInitialization(String),
}

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Config {
    #[serde(default)]
    pub log: Log,
    pub connectors: Connectors,
    #[serde(default)]
    pub settings: ShopSettings,
}

/// PayPal settings of the shop, as the settings backend stores them.
#[derive(Clone, serde::Deserialize, Debug, Default)]
#[serde(default)]
pub struct ShopSettings {
    pub general: GeneralSettings,
    pub plus: Option<PlusSettings>,
    pub installments: Option<InstallmentsSettings>,
}

impl Config {
    /// Function to build the configuration by picking it from default locations
    pub fn new() -> Result<Self, ConfigurationError> {
        Self::new_with_config_path(None)
    }

    /// Function to build the configuration by picking it from default locations
    pub fn new_with_config_path(
        explicit_config_path: Option<PathBuf>,
    ) -> Result<Self, ConfigurationError> {
        let env = consts::Env::current_env();
        let config_path = Self::config_path(&env, explicit_config_path);

        let config = Self::builder(&env)?
            .add_source(config::File::from(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(consts::NAME)
                    .try_parsing(true)
                    .separator("__"),
            )
            .build()?;

        #[allow(clippy::print_stderr)]
        let config: Self = serde_path_to_error::deserialize(config).map_err(|error| {
            eprintln!("Unable to deserialize application configuration: {error}");
            error.into_inner()
        })?;

        Ok(config)
    }

    pub fn builder(
        environment: &consts::Env,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            // "env" can't be altered by config field.
            .set_override("env", environment.to_string())
    }

    /// Config path.
    pub fn config_path(
        environment: &consts::Env,
        explicit_config_path: Option<PathBuf>,
    ) -> PathBuf {
        let mut config_path = PathBuf::new();
        if let Some(explicit_config_path_val) = explicit_config_path {
            config_path.push(explicit_config_path_val);
        } else {
            let config_directory: String = "config".into();
            let config_file_name = environment.config_path();

            config_path.push(workspace_path());
            config_path.push(config_directory);
            config_path.push(config_file_name);
        }
        config_path
    }
}

pub fn workspace_path() -> PathBuf {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let mut path = PathBuf::from(manifest_dir);
        path.pop();
        path.pop();
        path
    } else {
        PathBuf::from(".")
    }
}

/// [`SettingsService`] backed by the loaded configuration.
#[derive(Clone, Debug)]
pub struct ConfiguredSettingsService {
    settings: ShopSettings,
}

impl ConfiguredSettingsService {
    pub fn new(settings: ShopSettings) -> Self {
        Self { settings }
    }
}

impl From<&Config> for ConfiguredSettingsService {
    fn from(config: &Config) -> Self {
        Self::new(config.settings.clone())
    }
}

impl SettingsService for ConfiguredSettingsService {
    fn general(&self) -> &GeneralSettings {
        &self.settings.general
    }

    fn plus(&self) -> Option<&PlusSettings> {
        self.settings.plus.as_ref()
    }

    fn installments(&self) -> Option<&InstallmentsSettings> {
        self.settings.installments.as_ref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use common_enums::LogLevel;
    use hyperswitch_masking::PeekInterface;

    use super::*;

    #[test]
    fn test_loads_configuration_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[log.console]
enabled = false
level = "DEBUG"

[connectors.paypal]
base_url = "https://api.paypal.com/"
sandbox_base_url = "https://api.sandbox.paypal.com/"

[settings.general]
client_id = "client"
client_secret = "secret"
sandbox = true
intent = 1
log_level = "extended"

[settings.plus]
active = true
restyle = true
"#
        )
        .unwrap();

        let config = Config::new_with_config_path(Some(file.path().to_path_buf())).unwrap();
        let settings = ConfiguredSettingsService::from(&config);

        assert!(!config.log.console.enabled);
        assert!(settings.is_sandbox());
        assert_eq!(settings.general().client_id.peek(), "client");
        assert_eq!(settings.general().intent, 1);
        assert_eq!(settings.general().log_level, LogLevel::Extended);
        assert!(settings.general().submit_cart);
        assert!(settings.plus().is_some_and(|plus| plus.restyle));
        assert!(settings.installments().is_none());
        assert_eq!(
            config.connectors.paypal.for_mode(settings.is_sandbox()),
            "https://api.sandbox.paypal.com/"
        );
    }

    #[test]
    fn test_loads_numeric_log_level() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[connectors.paypal]
base_url = "https://api.paypal.com/"
sandbox_base_url = "https://api.sandbox.paypal.com/"

[settings.general]
log_level = 1
"#
        )
        .unwrap();

        let config = Config::new_with_config_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.settings.general.log_level, LogLevel::Extended);
    }

    #[test]
    fn test_missing_connectors_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[settings.general]\nsandbox = true").unwrap();

        let result = Config::new_with_config_path(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(ConfigurationError::ConfigError(_))));
    }
}
