use std::env;

use super::env::{ConfigError, FilterConfig, LoggingConfig};

/// Defaults overridden from the environment, then validated once.
pub fn load_config() -> Result<FilterConfig, ConfigError> {
    let config = FilterConfig::from_env();
    config.validate()?;
    Ok(config)
}

impl FilterConfig {
    fn from_env() -> Self {
        let defaults = FilterConfig::default();

        Self {
            honeypot_field: string_var("HONEYPOT_FIELD").unwrap_or(defaults.honeypot_field),
            timestamp_field: string_var("TIMESTAMP_FIELD").unwrap_or(defaults.timestamp_field),
            max_urls: parse_var("MAX_URLS").unwrap_or(defaults.max_urls),
            max_caps_percentage: parse_var("MAX_CAPS_PERCENTAGE")
                .unwrap_or(defaults.max_caps_percentage),
            min_words: parse_var("MIN_WORDS").unwrap_or(defaults.min_words),
            min_submit_secs: parse_var("MIN_SUBMIT_SECONDS").unwrap_or(defaults.min_submit_secs),
            max_submit_secs: parse_var("MAX_SUBMIT_SECONDS").unwrap_or(defaults.max_submit_secs),
            max_special_char_percentage: parse_var("MAX_SPECIAL_CHAR_PERCENTAGE")
                .unwrap_or(defaults.max_special_char_percentage),
            spam_keywords: list_var("SPAM_KEYWORDS").unwrap_or(defaults.spam_keywords),
            message_fields: list_var("MESSAGE_FIELDS").unwrap_or(defaults.message_fields),
            logging: LoggingConfig {
                level: string_var("LOG_LEVEL").unwrap_or(defaults.logging.level),
                logs_dir: string_var("LOGS_DIR"),
            },
        }
    }
}

fn string_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.parse::<T>().ok())
}

fn list_var(key: &str) -> Option<Vec<String>> {
    env::var(key).ok().map(|value| {
        value
            .split(',')
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
    })
}
