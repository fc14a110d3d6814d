//! Host-supplied picker configuration.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_LOCALE_CODE;
use crate::{Bounds, CalendarDate, DateError, LocaleProfile, resolve};

/// Error type for picker configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Minimum selectable date is after the maximum.
    #[error("Invalid bounds: min date ({min}) is after max date ({max})")]
    InvertedBounds { min: CalendarDate, max: CalendarDate },

    /// A date in the configuration is invalid.
    #[error(transparent)]
    Date(#[from] DateError),

    /// The configuration document could not be read.
    #[error("Invalid picker configuration: {0}")]
    Malformed(String),
}

/// Static properties of one picker instance.
///
/// Every field is optional in serialized form; missing fields take the
/// values of [`PickerConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerConfig {
    pub locale:      String,
    pub min_date:    Option<CalendarDate>,
    pub max_date:    Option<CalendarDate>,
    pub disabled:    bool,
    pub date_format: Option<String>,
    pub label:       Option<String>,
    pub placeholder: Option<String>,
    pub error:       Option<String>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            locale:      DEFAULT_LOCALE_CODE.to_owned(),
            min_date:    None,
            max_date:    None,
            disabled:    false,
            date_format: None,
            label:       None,
            placeholder: None,
            error:       None,
        }
    }
}

/// Wire form read by [`PickerConfig::from_json`]; dates stay strings until
/// they are validated.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawConfig {
    locale:      Option<String>,
    min_date:    Option<String>,
    max_date:    Option<String>,
    disabled:    bool,
    date_format: Option<String>,
    label:       Option<String>,
    placeholder: Option<String>,
    error:       Option<String>,
}

fn parse_bound(value: Option<&str>) -> Result<Option<CalendarDate>, DateError> {
    value.map(str::parse).transpose()
}

impl PickerConfig {
    /// Parses a JSON configuration document and validates it.
    ///
    /// # Errors
    /// Returns `ConfigError::Malformed` for unreadable JSON,
    /// `ConfigError::Date` for a bound that is not a valid `YYYY-MM-DD` date
    /// and `ConfigError::InvertedBounds` for crossed bounds.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        let config = Self {
            locale:      raw.locale.unwrap_or_else(|| DEFAULT_LOCALE_CODE.to_owned()),
            min_date:    parse_bound(raw.min_date.as_deref())?,
            max_date:    parse_bound(raw.max_date.as_deref())?,
            disabled:    raw.disabled,
            date_format: raw.date_format,
            label:       raw.label,
            placeholder: raw.placeholder,
            error:       raw.error,
        };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns `ConfigError::InvertedBounds` if `min_date > max_date`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let (Some(min), Some(max)) = (self.min_date, self.max_date)
            && min > max
        {
            return Err(ConfigError::InvertedBounds { min, max });
        }
        Ok(())
    }

    pub fn profile(&self) -> &'static LocaleProfile {
        resolve(Some(&self.locale))
    }

    pub const fn bounds(&self) -> Bounds {
        Bounds::new(self.min_date, self.max_date)
    }

    /// The display format: the override if set, else `profile`'s.
    pub fn effective_date_format<'a>(&'a self, profile: &'a LocaleProfile) -> &'a str {
        self.date_format.as_deref().unwrap_or(profile.date_format)
    }

    pub fn effective_label<'a>(&'a self, profile: &'a LocaleProfile) -> &'a str {
        self.label.as_deref().unwrap_or(profile.texts.date_label)
    }

    pub fn effective_placeholder<'a>(&'a self, profile: &'a LocaleProfile) -> &'a str {
        self.placeholder
            .as_deref()
            .unwrap_or(profile.texts.date_placeholder)
    }

    pub fn with_locale(mut self, code: impl Into<String>) -> Self {
        self.locale = code.into();
        self
    }

    /// # Errors
    /// Returns `ConfigError::InvertedBounds` if `min > max`.
    pub fn with_bounds(
        mut self,
        min: Option<CalendarDate>,
        max: Option<CalendarDate>,
    ) -> Result<Self, ConfigError> {
        self.min_date = min;
        self.max_date = max;
        self.validate()?;
        Ok(self)
    }

    pub const fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_date_format(mut self, pattern: impl Into<String>) -> Self {
        self.date_format = Some(pattern.into());
        self
    }
}
