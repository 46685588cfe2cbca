use std::fmt;

use thiserror::Error;
use url::Url;

/// Backend origin used when the client itself is served from a loopback host.
pub const LOOPBACK_API_BASE: &str = "http://127.0.0.1:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApiBaseError {
    #[error("invalid origin: {raw}")]
    InvalidOrigin { raw: String },
    #[error("api base must be an origin without a path: {raw}")]
    HasPath { raw: String },
}

/// Base origin every API path is appended to. Never ends with `/`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiBase {
    origin: String,
    root: Url,
}

impl ApiBase {
    /// Resolve the API base from the origin the client is served from.
    ///
    /// Loopback origins (`localhost`, `127.0.0.1`) talk to the local backend port;
    /// any other origin is used as-is.
    ///
    /// # Errors
    ///
    /// Returns `ApiBaseError::InvalidOrigin` if `page_origin` is not an absolute URL.
    pub fn resolve(page_origin: &str) -> Result<Self, ApiBaseError> {
        let url = parse_origin(page_origin)?;
        let is_loopback = matches!(url.host_str(), Some("localhost" | "127.0.0.1"));
        if is_loopback {
            return Self::from_url(parse_origin(LOOPBACK_API_BASE)?);
        }
        Self::from_url(url)
    }

    /// Use an explicit base, bypassing loopback detection.
    ///
    /// Only an origin is accepted: `http://host/prefix` is refused rather than
    /// having its path silently dropped.
    ///
    /// # Errors
    ///
    /// Returns `ApiBaseError::InvalidOrigin` if `raw` is not an absolute URL and
    /// `ApiBaseError::HasPath` if it carries a path beyond `/`.
    pub fn explicit(raw: &str) -> Result<Self, ApiBaseError> {
        let url = parse_origin(raw)?;
        if url.path() != "/" {
            return Err(ApiBaseError::HasPath {
                raw: raw.to_string(),
            });
        }
        Self::from_url(url)
    }

    fn from_url(url: Url) -> Result<Self, ApiBaseError> {
        let origin = url.origin().ascii_serialization();
        let root = parse_origin(&origin)?;
        Ok(Self { origin, root })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.origin
    }

    /// Build the URL for a path made of `segments`, percent-encoding each one.
    ///
    /// A segment never introduces extra path levels, a query or a fragment.
    #[must_use]
    pub fn endpoint(&self, segments: &[&str]) -> String {
        let mut url = self.root.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.clear().extend(segments);
        }
        url.into()
    }
}

fn parse_origin(raw: &str) -> Result<Url, ApiBaseError> {
    let invalid = || ApiBaseError::InvalidOrigin {
        raw: raw.to_string(),
    };
    let url = Url::parse(raw.trim()).map_err(|_| invalid())?;
    if url.cannot_be_a_base()
        || url.host_str().is_none()
        || !matches!(url.scheme(), "http" | "https")
    {
        return Err(invalid());
    }
    Ok(url)
}

impl fmt::Debug for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiBase({})", self.origin)
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.origin)
    }
}
