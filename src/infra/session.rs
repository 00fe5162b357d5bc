//! Explicit connection state handed to HTTP clients at construction.

use std::fmt;

use url::Url;

use crate::domain::resources::Resource;

use super::error::InfraError;

/// Bearer token for the admin API. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Returns `None` for blank input so an empty token file means "anonymous".
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    base_url: Url,
    token: Option<AuthToken>,
}

impl Session {
    /// Parse the API root. A trailing slash is added so resource paths join
    /// beneath it instead of replacing its last segment.
    pub fn new(base_url: &str) -> Result<Self, InfraError> {
        let mut base_url = Url::parse(base_url.trim()).map_err(|err| {
            InfraError::configuration(format!("invalid base URL `{base_url}`: {err}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(InfraError::configuration(format!(
                "base URL `{base_url}` cannot carry resource paths"
            )));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        base_url.set_query(None);
        Ok(Self {
            base_url,
            token: None,
        })
    }

    pub fn with_token(mut self, token: Option<AuthToken>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    /// List endpoint for `resource`, without query string.
    pub fn endpoint(&self, resource: Resource) -> Result<Url, InfraError> {
        self.base_url.join(resource.path()).map_err(|err| {
            InfraError::configuration(format!("failed to build `{resource}` endpoint: {err}"))
        })
    }
}
