use crate::error::{DashboardError, Result};
use crate::readers::DelimitedReader;
use crate::utils::constants::*;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use validator::{Validate, ValidationError};

/// Runtime configuration.
///
/// Layered from lowest to highest precedence: built-in defaults, the
/// optional `dashboard.toml` (or an explicit config file), `DASHBOARD_*`
/// environment variables, then command line overrides.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    #[validate(custom(function = "non_empty_path"))]
    pub traffic_csv: PathBuf,

    #[validate(custom(function = "non_empty_path"))]
    pub gares_csv: PathBuf,

    #[validate(length(equal = 1))]
    pub delimiter: String,

    #[validate(custom(function = "non_empty_path"))]
    pub map_output: PathBuf,

    #[validate(length(min = 1))]
    pub bind_address: String,

    #[validate(length(min = 1))]
    pub default_mode: String,

    #[validate(length(min = 1))]
    pub default_network: String,

    #[validate(range(min = 1))]
    pub top_stations: usize,

    #[validate(range(min = 1))]
    pub top_cities: usize,
}

/// Values given on the command line; `None` leaves the lower layers alone
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub traffic_csv: Option<PathBuf>,
    pub gares_csv: Option<PathBuf>,
    pub map_output: Option<PathBuf>,
    pub bind_address: Option<String>,
}

impl Settings {
    pub fn load(config_file: Option<&Path>, overrides: &SettingsOverrides) -> Result<Self> {
        let file_source = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::from(Path::new(SETTINGS_FILE)).required(false),
        };

        let settings: Settings = Config::builder()
            .set_default("traffic_csv", TRAFFIC_FILE)?
            .set_default("gares_csv", GARES_FILE)?
            .set_default("delimiter", DEFAULT_DELIMITER.to_string())?
            .set_default("map_output", MAP_FILE)?
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("default_mode", DEFAULT_MODE)?
            .set_default("default_network", DEFAULT_NETWORK)?
            .set_default("top_stations", TOP_STATIONS as i64)?
            .set_default("top_cities", TOP_CITIES as i64)?
            .add_source(file_source)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .set_override_option("traffic_csv", path_value(&overrides.traffic_csv))?
            .set_override_option("gares_csv", path_value(&overrides.gares_csv))?
            .set_override_option("map_output", path_value(&overrides.map_output))?
            .set_override_option("bind_address", overrides.bind_address.clone())?
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn delimited_reader(&self) -> Result<DelimitedReader> {
        let delimiter = self.delimiter.chars().next().ok_or_else(|| {
            DashboardError::InvalidFormat("Delimiter must not be empty".to_string())
        })?;
        DelimitedReader::with_delimiter_char(delimiter)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            traffic_csv: PathBuf::from(TRAFFIC_FILE),
            gares_csv: PathBuf::from(GARES_FILE),
            delimiter: DEFAULT_DELIMITER.to_string(),
            map_output: PathBuf::from(MAP_FILE),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            default_mode: DEFAULT_MODE.to_string(),
            default_network: DEFAULT_NETWORK.to_string(),
            top_stations: TOP_STATIONS,
            top_cities: TOP_CITIES,
        }
    }
}

fn path_value(path: &Option<PathBuf>) -> Option<String> {
    path.as_ref().map(|p| p.to_string_lossy().into_owned())
}

fn non_empty_path(path: &PathBuf) -> std::result::Result<(), ValidationError> {
    if path.as_os_str().is_empty() {
        return Err(ValidationError::new("empty_path"));
    }
    Ok(())
}

/// Serializes tests that load settings, since they read the process environment
#[cfg(test)]
pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_file_layer_and_overrides() -> Result<()> {
        let _env = env_lock();
        let file = toml_file("top_stations = 3\ndefault_network = \"RER\"\nmap_output = \"out/map.html\"\n");
        let overrides = SettingsOverrides {
            map_output: Some(PathBuf::from("elsewhere/map.html")),
            ..SettingsOverrides::default()
        };

        let settings = Settings::load(Some(file.path()), &overrides)?;

        assert_eq!(settings.top_stations, 3);
        assert_eq!(settings.top_cities, TOP_CITIES);
        assert_eq!(settings.default_network, "RER");
        assert_eq!(settings.map_output, PathBuf::from("elsewhere/map.html"));
        assert_eq!(settings.delimited_reader()?.delimiter(), b';');

        Ok(())
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let _env = env_lock();
        let file = toml_file("top_cities = 0\n");
        let result = Settings::load(Some(file.path()), &SettingsOverrides::default());
        assert!(matches!(result, Err(DashboardError::Validation(_))));

        let file = toml_file("delimiter = \";;\"\n");
        let result = Settings::load(Some(file.path()), &SettingsOverrides::default());
        assert!(matches!(result, Err(DashboardError::Validation(_))));
    }

    #[test]
    fn test_missing_explicit_config_file() {
        let _env = env_lock();
        let result = Settings::load(
            Some(Path::new("no/such/dashboard.toml")),
            &SettingsOverrides::default(),
        );
        assert!(matches!(result, Err(DashboardError::Config(_))));
    }

    #[test]
    fn test_environment_layer_precedence() -> Result<()> {
        let _env = env_lock();
        let file = toml_file("top_stations = 5\ntop_cities = 4\nbind_address = \"0.0.0.0:9000\"\n");
        std::env::set_var("DASHBOARD_TOP_STATIONS", "3");
        std::env::set_var("DASHBOARD_BIND_ADDRESS", "0.0.0.0:9001");

        let overrides = SettingsOverrides {
            bind_address: Some("127.0.0.1:9002".to_string()),
            ..SettingsOverrides::default()
        };
        let result = Settings::load(Some(file.path()), &overrides);

        std::env::remove_var("DASHBOARD_TOP_STATIONS");
        std::env::remove_var("DASHBOARD_BIND_ADDRESS");
        let settings = result?;

        // environment over file
        assert_eq!(settings.top_stations, 3);
        // file over defaults
        assert_eq!(settings.top_cities, 4);
        // command line over environment
        assert_eq!(settings.bind_address, "127.0.0.1:9002");

        Ok(())
    }

    #[test]
    fn test_defaults_validate() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.bind_address, "127.0.0.1:8050");
    }
}
