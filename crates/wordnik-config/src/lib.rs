use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub mod store;

pub use store::SettingsStore;

pub const DEFAULT_TEMPLATE: &str =
    "## {{searchTerm}}\n{{text}}\n{{relatedWords}}\n> [Additional info]({{url}})";

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn default_max_definitions() -> u32 {
    5
}

/// Take a stored value, or fall back to the default when it has the wrong type
fn lenient<'de, D, T>(deserializer: D, key: &str, fallback: fn() -> T) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::warn!("Ignoring stored {key}: {e}");
        fallback()
    }))
}

fn lenient_template<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    lenient(deserializer, "template", default_template)
}

fn lenient_api_key<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    lenient(deserializer, "api_key", String::new)
}

fn lenient_max_definitions<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    lenient(deserializer, "max_definitions", default_max_definitions)
}

/// Persisted plugin settings. Unset keys and keys holding the wrong type fall
/// back to their defaults on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Markdown template for the inserted extract
    #[serde(default = "default_template", deserialize_with = "lenient_template")]
    pub template: String,
    /// Wordnik API key, sent as a query parameter
    #[serde(default, deserialize_with = "lenient_api_key")]
    pub api_key: String,
    /// Most definitions rendered into `{{text}}`
    #[serde(
        default = "default_max_definitions",
        deserialize_with = "lenient_max_definitions"
    )]
    pub max_definitions: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            template: default_template(),
            api_key: String::new(),
            max_definitions: default_max_definitions(),
        }
    }
}

/// A settings key exposed to the host's settings surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    Template,
    ApiKey,
    MaxDefinitions,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [Self::Template, Self::ApiKey, Self::MaxDefinitions];

    pub fn name(self) -> &'static str {
        match self {
            Self::Template => "template",
            Self::ApiKey => "api_key",
            Self::MaxDefinitions => "max_definitions",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Template => {
                "Markdown template for the extract to be inserted. \
                 Available template variables are {{text}}, {{searchTerm}}, {{relatedWords}} and {{url}}."
            }
            Self::ApiKey => "You will need to include your Wordnik API key to look up words.",
            Self::MaxDefinitions => "The most definitions from Wordnik that will be shown in the result.",
        }
    }
}

impl std::str::FromStr for SettingKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // camelCase spellings match the keys shown in the template help text
        match s {
            "template" => Ok(Self::Template),
            "api_key" | "apiKey" => Ok(Self::ApiKey),
            "max_definitions" | "maxDefinitions" => Ok(Self::MaxDefinitions),
            other => Err(ConfigError::UnknownKey(other.to_string())),
        }
    }
}

impl Settings {
    pub fn get(&self, key: SettingKey) -> String {
        match key {
            SettingKey::Template => self.template.clone(),
            SettingKey::ApiKey => self.api_key.clone(),
            SettingKey::MaxDefinitions => self.max_definitions.to_string(),
        }
    }

    /// Set one key from its text form. Nothing changes when the value is rejected.
    pub fn set(&mut self, key: SettingKey, value: &str) -> Result<(), ConfigError> {
        match key {
            SettingKey::Template => self.template = value.to_string(),
            SettingKey::ApiKey => self.api_key = value.trim().to_string(),
            SettingKey::MaxDefinitions => {
                self.max_definitions =
                    value
                        .trim()
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue {
                            key: key.name(),
                            value: value.to_string(),
                        })?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown setting: {0}")]
    UnknownKey(String),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"api_key": "abc"}"#).unwrap();
        assert_eq!(settings.api_key, "abc");
        assert_eq!(settings.template, DEFAULT_TEMPLATE);
        assert_eq!(settings.max_definitions, 5);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let settings: Settings =
            serde_json::from_str(r#"{"language": "en", "max_definitions": 2}"#).unwrap();
        assert_eq!(settings.max_definitions, 2);
    }

    #[test]
    fn test_wrong_types_fall_back_per_key() {
        let settings: Settings = serde_json::from_str(
            r#"{"max_definitions": null, "api_key": "k", "template": 7}"#,
        )
        .unwrap();
        assert_eq!(settings.max_definitions, 5);
        assert_eq!(settings.api_key, "k");
        assert_eq!(settings.template, DEFAULT_TEMPLATE);

        let settings: Settings =
            serde_json::from_str(r#"{"max_definitions": "5", "api_key": null}"#).unwrap();
        assert_eq!(settings.max_definitions, 5);
        assert!(settings.api_key.is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let mut settings = Settings::default();
        settings.set(SettingKey::MaxDefinitions, " 12 ").unwrap();
        settings.set(SettingKey::Template, "{{text}}").unwrap();
        assert_eq!(settings.get(SettingKey::MaxDefinitions), "12");
        assert_eq!(settings.get(SettingKey::Template), "{{text}}");
    }

    #[test]
    fn test_non_numeric_max_definitions_is_rejected() {
        let mut settings = Settings::default();
        let err = settings.set(SettingKey::MaxDefinitions, "lots").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "max_definitions", .. }));
        assert_eq!(settings.max_definitions, 5);
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!("apiKey".parse::<SettingKey>().unwrap(), SettingKey::ApiKey);
        assert_eq!(
            "max_definitions".parse::<SettingKey>().unwrap(),
            SettingKey::MaxDefinitions
        );
        assert!(matches!(
            "language".parse::<SettingKey>(),
            Err(ConfigError::UnknownKey(_))
        ));
    }
}
