use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{content::ROLE_PHRASES, typing::TypingDelays};

pub const WEB3FORMS_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Stamped by build.rs.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Whole milliseconds for timer APIs, saturating instead of wrapping.
pub fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("phrase list must not be empty")]
    EmptyPhrases,
    #[error("{0} must be greater than zero")]
    ZeroDelay(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub owner_name: String,
    pub phrases: Vec<String>,
    pub typing: TypingDelays,
    pub splash_duration: Duration,
    pub progress_interval: Duration,
    pub progress_step: u8,
    pub loading_text_interval: Duration,
    pub status_reset: Duration,
    pub form_endpoint: String,
    pub form_access_key: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: "Your Name".to_string(),
            phrases: ROLE_PHRASES.iter().map(|s| s.to_string()).collect(),
            typing: TypingDelays::default(),
            splash_duration: Duration::from_millis(3000),
            progress_interval: Duration::from_millis(50),
            progress_step: 2,
            loading_text_interval: Duration::from_millis(800),
            status_reset: Duration::from_millis(3000),
            form_endpoint: WEB3FORMS_ENDPOINT.to_string(),
            form_access_key: None,
        }
    }
}

impl SiteConfig {
    /// Defaults plus whatever was supplied through the build environment.
    pub fn from_env() -> Self {
        Self {
            form_access_key: option_env!("WEB3FORMS_ACCESS_KEY")
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.phrases.is_empty() {
            return Err(ConfigError::EmptyPhrases);
        }
        let delays = [
            ("type delay", self.typing.type_delay),
            ("pause delay", self.typing.pause_delay),
            ("delete delay", self.typing.delete_delay),
            ("splash duration", self.splash_duration),
            ("progress interval", self.progress_interval),
            ("loading text interval", self.loading_text_interval),
            ("status reset delay", self.status_reset),
        ];
        if let Some((name, _)) = delays.into_iter().find(|(_, d)| d.is_zero()) {
            return Err(ConfigError::ZeroDelay(name));
        }
        if self.progress_step == 0 {
            return Err(ConfigError::ZeroDelay("progress step"));
        }
        Ok(())
    }

    pub fn build_time(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(BUILD_TIME)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }

    /// Footer stamp, e.g. "March 2025".
    pub fn build_stamp(&self) -> String {
        self.build_time()
            .map(|t| t.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}
