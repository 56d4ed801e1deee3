use anyhow::Result;
use config::Config;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_IMAGE_FETCH_TIMEOUT_SECS, DEFAULT_MAX_IMAGE_SIZE, DEFAULT_MAX_VCARD_SIZE,
    DEFAULT_VCARD_VERSION,
};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub vcard: VCardConfig,
    pub logging: LoggingConfig,
}

/// Options consumed by the vCard import/export service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VCardConfig {
    /// Largest accepted vCard document in bytes. Checked before parsing.
    pub max_vcard_size: u64,
    /// Largest accepted decoded contact image in bytes.
    pub max_image_size: u64,
    /// Keep the raw vCard next to the imported contact.
    pub keep_original_vcard: bool,
    /// Strip `PHOTO` from the kept raw vCard.
    pub remove_image_from_kept_vcard: bool,
    /// Attach source line numbers to warnings.
    pub include_line_numbers: bool,
    /// Version written by exports that don't ask for one ("2.1", "3.0" or "4.0").
    pub default_version: String,
    pub image_fetch_timeout_secs: u64,
}

impl Default for VCardConfig {
    fn default() -> Self {
        Self {
            max_vcard_size: DEFAULT_MAX_VCARD_SIZE,
            max_image_size: DEFAULT_MAX_IMAGE_SIZE,
            keep_original_vcard: false,
            remove_image_from_kept_vcard: true,
            include_line_numbers: true,
            default_version: DEFAULT_VCARD_VERSION.to_string(),
            image_fetch_timeout_secs: DEFAULT_IMAGE_FETCH_TIMEOUT_SECS,
        }
    }
}

impl VCardConfig {
    /// ## Summary
    /// Checks the limits and the default version for obviously unusable values.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfig` if a size limit is zero or the
    /// default version is not one of "2.1", "3.0" or "4.0".
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_vcard_size == 0 {
            return Err(CoreError::InvalidConfig(
                "vcard.max_vcard_size must be greater than zero".to_string(),
            ));
        }
        if self.max_image_size == 0 {
            return Err(CoreError::InvalidConfig(
                "vcard.max_image_size must be greater than zero".to_string(),
            ));
        }
        if !matches!(self.default_version.trim(), "2.1" | "3.0" | "4.0") {
            return Err(CoreError::InvalidConfig(format!(
                "unsupported default vCard version: {}",
                self.default_version
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`.
    ///
    /// Environment variables use the `CARDSHIFT_` prefix and `__` between
    /// sections, e.g. `CARDSHIFT_VCARD__MAX_VCARD_SIZE`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("vcard.max_vcard_size", DEFAULT_MAX_VCARD_SIZE)?
            .set_default("vcard.max_image_size", DEFAULT_MAX_IMAGE_SIZE)?
            .set_default("vcard.keep_original_vcard", false)?
            .set_default("vcard.remove_image_from_kept_vcard", true)?
            .set_default("vcard.include_line_numbers", true)?
            .set_default("vcard.default_version", DEFAULT_VCARD_VERSION)?
            .set_default(
                "vcard.image_fetch_timeout_secs",
                DEFAULT_IMAGE_FETCH_TIMEOUT_SECS,
            )?
            .set_default("logging.level", "info")?
            .add_source(
                config::Environment::with_prefix("CARDSHIFT")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.vcard.validate()?;
        tracing::debug!(vcard = ?settings.vcard, "Loaded settings");

        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vcard: VCardConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn load_without_sources_uses_defaults() {
        let settings = Settings::load().unwrap();
        tracing::debug!(?settings, "Loaded");

        assert_eq!(settings.vcard.max_vcard_size, DEFAULT_MAX_VCARD_SIZE);
        assert_eq!(settings.vcard.default_version, "3.0");
        assert!(settings.vcard.remove_image_from_kept_vcard);
        assert!(!settings.vcard.keep_original_vcard);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(VCardConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_size_limit_rejected() {
        let config = VCardConfig {
            max_vcard_size: 0,
            ..VCardConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfig(_))
        ));
    }

    #[test]
    fn unknown_default_version_rejected() {
        let config = VCardConfig {
            default_version: "5.0".to_string(),
            ..VCardConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
