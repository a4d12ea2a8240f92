use std::env;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use tracing::warn;

use crate::catalog::text::Language;

/// Runtime settings, resolved once at startup from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub language: Language,
    /// Base URL of the clinic backend; `None` runs fully offline.
    pub api_base: Option<String>,
    /// Local catalog document; takes precedence over the backend.
    pub catalog_path: Option<PathBuf>,
    /// Fixed "today" for reproducible runs; `None` uses the wall clock.
    pub today_override: Option<NaiveDate>,
    /// Branch preselected when the wizard mounts.
    pub default_branch: Option<String>,
    /// Scripted prompt mode for non-interactive runs.
    pub script: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::En,
            api_base: None,
            catalog_path: None,
            today_override: None,
            default_branch: None,
            script: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the real
    /// environment, tests pass a map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup("BOOKING_LANG") {
            match Language::from_code(&raw) {
                Some(language) => config.language = language,
                None => warn!(value = %raw, "unsupported BOOKING_LANG, staying with English"),
            }
        }
        config.api_base = lookup("BOOKING_API_BASE").filter(|value| !value.trim().is_empty());
        config.catalog_path = lookup("BOOKING_CATALOG")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        if let Some(raw) = lookup("BOOKING_TODAY") {
            match raw.trim().parse::<NaiveDate>() {
                Ok(date) => config.today_override = Some(date),
                Err(_) => warn!(value = %raw, "BOOKING_TODAY is not a YYYY-MM-DD date, ignoring"),
            }
        }
        config.default_branch = lookup("BOOKING_BRANCH").filter(|value| !value.trim().is_empty());
        config.script = lookup("BOOKING_CLI_SCRIPT").is_some();
        config
    }

    /// The wizard's injected "today": the override when set, otherwise the
    /// local calendar date.
    pub fn today(&self) -> NaiveDate {
        self.today_override
            .unwrap_or_else(|| Local::now().date_naive())
    }
}
