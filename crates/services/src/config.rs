use std::env;

use edumate_core::{ApiBase, ApiBaseError};

pub const DEFAULT_ORIGIN: &str = "http://localhost:8080";
pub const DEFAULT_DB_URL: &str = "sqlite://edumate.sqlite3";

/// Where the client believes it is served from and where it keeps its state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub page_origin: String,
    pub api_base_override: Option<String>,
    pub db_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            page_origin: DEFAULT_ORIGIN.to_string(),
            api_base_override: None,
            db_url: DEFAULT_DB_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Read `EDUMATE_ORIGIN`, `EDUMATE_API_BASE` and `EDUMATE_DB_URL`, keeping defaults
    /// for unset or blank values.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default()
            .with_origin(env::var("EDUMATE_ORIGIN").ok())
            .with_api_base(env::var("EDUMATE_API_BASE").ok())
            .with_db_url(env::var("EDUMATE_DB_URL").ok())
    }

    #[must_use]
    pub fn with_origin(mut self, origin: Option<String>) -> Self {
        if let Some(origin) = non_blank(origin) {
            self.page_origin = origin;
        }
        self
    }

    #[must_use]
    pub fn with_api_base(mut self, api_base: Option<String>) -> Self {
        if let Some(api_base) = non_blank(api_base) {
            self.api_base_override = Some(api_base);
        }
        self
    }

    #[must_use]
    pub fn with_db_url(mut self, db_url: Option<String>) -> Self {
        if let Some(db_url) = non_blank(db_url) {
            self.db_url = db_url;
        }
        self
    }

    /// The explicit override wins; otherwise the base is derived from the page origin.
    ///
    /// # Errors
    ///
    /// Returns `ApiBaseError` if the chosen value is not an absolute URL, or if an
    /// override carries a path.
    pub fn api_base(&self) -> Result<ApiBase, ApiBaseError> {
        match &self.api_base_override {
            Some(raw) => ApiBase::explicit(raw),
            None => ApiBase::resolve(&self.page_origin),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
