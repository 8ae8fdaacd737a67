use thiserror::Error;

/// Default keyword list, grouped the way the spam corpus clusters.
pub const DEFAULT_SPAM_KEYWORDS: &[&str] = &[
    // Pharmaceutical
    "viagra",
    "cialis",
    "pharmacy",
    "prescription",
    // Gambling
    "casino",
    "poker",
    "betting",
    "gambling",
    // Financial
    "loan",
    "mortgage",
    "crypto",
    "bitcoin",
    "forex",
    "investment opportunity",
    "passive income",
    "cash flow",
    "earning money",
    "earn money",
    "make money",
    "making money",
    "thousands of dollars",
    "hundreds of dollars",
    "money flow",
    // Call-to-action
    "click here",
    "buy now",
    "limited offer",
    "act now",
    "order now",
    "visit now",
    "check this out",
    // Marketing/SEO
    "weight loss",
    "work from home",
    "seo service",
    "seo services",
    "link building",
    "increase traffic",
    "backlinks",
    "boost your ranking",
    "get more followers",
    "grow your business",
    // Social media
    "instagram followers",
    "facebook likes",
    "youtube views",
    "increase followers",
    "gain followers",
    // Generic phrases
    "real deal",
    "skeptical at first",
    "evaluation copy",
    "this system",
    "amazing opportunity",
    "limited time",
    "don't miss out",
    "act fast",
    "special offer",
    "congratulations",
    "you've been selected",
    "claim your",
    "risk free",
    "money back guarantee",
    "no obligation",
];

pub const DEFAULT_MESSAGE_FIELDS: &[&str] = &["your-message", "message", "your-comment", "comment"];

#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Hidden field bots fill in and humans never see.
    pub honeypot_field: String,
    /// Hidden field carrying the epoch second the form was rendered.
    pub timestamp_field: String,
    pub max_urls: usize,
    pub max_caps_percentage: f64,
    pub min_words: usize,
    pub min_submit_secs: i64,
    pub max_submit_secs: i64,
    pub max_special_char_percentage: f64,
    pub spam_keywords: Vec<String>,
    pub message_fields: Vec<String>,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub logs_dir: Option<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            honeypot_field: "your-website".to_string(),
            timestamp_field: "cf7_timestamp".to_string(),
            max_urls: 1,
            max_caps_percentage: 50.0,
            min_words: 3,
            min_submit_secs: 5,
            max_submit_secs: 3600,
            max_special_char_percentage: 30.0,
            spam_keywords: DEFAULT_SPAM_KEYWORDS
                .iter()
                .map(|kw| kw.to_string())
                .collect(),
            message_fields: DEFAULT_MESSAGE_FIELDS
                .iter()
                .map(|field| field.to_string())
                .collect(),
            logging: LoggingConfig {
                level: "info".to_string(),
                logs_dir: None,
            },
        }
    }
}

impl FilterConfig {
    /// Rejects malformed configuration at load time so classification never
    /// has to deal with it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.honeypot_field.is_empty() {
            return Err(ConfigError::EmptyField("honeypot_field"));
        }
        if self.timestamp_field.is_empty() {
            return Err(ConfigError::EmptyField("timestamp_field"));
        }
        if self.message_fields.is_empty() {
            return Err(ConfigError::EmptyField("message_fields"));
        }
        if self.min_words == 0 {
            return Err(ConfigError::NonPositive("min_words"));
        }
        if self.max_caps_percentage <= 0.0 {
            return Err(ConfigError::NonPositive("max_caps_percentage"));
        }
        if self.max_special_char_percentage <= 0.0 {
            return Err(ConfigError::NonPositive("max_special_char_percentage"));
        }
        if self.min_submit_secs <= 0 {
            return Err(ConfigError::NonPositive("min_submit_secs"));
        }
        if self.min_submit_secs >= self.max_submit_secs {
            return Err(ConfigError::InvalidSubmitWindow {
                min: self.min_submit_secs,
                max: self.max_submit_secs,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration field must not be empty: {0}")]
    EmptyField(&'static str),
    #[error("configuration value must be positive: {0}")]
    NonPositive(&'static str),
    #[error("submit window is invalid: min {min}s must be below max {max}s")]
    InvalidSubmitWindow { min: i64, max: i64 },
}
