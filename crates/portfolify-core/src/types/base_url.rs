//! API base URL type.

use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated API base URL.
///
/// The base URL must use HTTPS (or HTTP for localhost) and may carry a path
/// prefix, which is how deployments mount the API under `/api`.
///
/// # Example
///
/// ```
/// use portfolify_core::BaseUrl;
///
/// let base = BaseUrl::new("http://localhost:8000/api").unwrap();
/// assert_eq!(base.endpoint("/auth/me"), "http://localhost:8000/api/auth/me");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Create a new base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::BaseUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        // Normalize: remove trailing slash
        let normalized = if url.path() == "/" {
            let mut u = url.clone();
            u.set_path("");
            u
        } else {
            url
        };

        Ok(Self(normalized))
    }

    /// Returns the full URL for an endpoint path.
    ///
    /// `path` is an API route starting with a slash, e.g. `/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        // The URL crate always adds a trailing slash to root paths,
        // so trim it when joining the endpoint path
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}{}", base, path)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the URL scheme ("https" or "http").
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        // Must be absolute
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        // Must be HTTPS (or HTTP for localhost)
        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "::1");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        // Must have a host
        if url.host_str().is_none() {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let base = BaseUrl::new("https://api.portfolify.app").unwrap();
        assert_eq!(base.host(), Some("api.portfolify.app"));
        assert_eq!(base.scheme(), "https");
    }

    #[test]
    fn valid_localhost_http() {
        let base = BaseUrl::new("http://localhost:8000/api").unwrap();
        assert_eq!(base.host(), Some("localhost"));
    }

    #[test]
    fn endpoint_construction() {
        let base = BaseUrl::new("http://localhost:8000/api").unwrap();
        assert_eq!(
            base.endpoint("/auth/login"),
            "http://localhost:8000/api/auth/login"
        );
    }

    #[test]
    fn endpoint_with_bare_host() {
        let base = BaseUrl::new("https://api.portfolify.app").unwrap();
        assert_eq!(
            base.endpoint("/resumes"),
            "https://api.portfolify.app/resumes"
        );
    }

    #[test]
    fn normalizes_trailing_slash_in_endpoint() {
        let base = BaseUrl::new("http://localhost:8000/api/").unwrap();
        assert_eq!(
            base.endpoint("/resumes"),
            "http://localhost:8000/api/resumes"
        );
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(BaseUrl::new("http://api.portfolify.app").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(BaseUrl::new("/api").is_err());
    }

    #[test]
    fn loopback_ip_allows_http() {
        let base = BaseUrl::new("http://127.0.0.1:8000/api").unwrap();
        assert_eq!(base.host(), Some("127.0.0.1"));
    }

    #[test]
    fn parse_via_from_str() {
        let base: BaseUrl = "https://api.portfolify.app/api".parse().unwrap();
        assert_eq!(base.as_str(), "https://api.portfolify.app/api");
    }
}
