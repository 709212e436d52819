//! Base URL of a SigningHub instance.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::{Host, Url};

use crate::error::{Error, InvalidInputError};

/// A validated SigningHub API base URL.
///
/// Must be absolute and use `https`. Plain `http` is accepted for loopback
/// hosts so tests can point at a local server. A query or fragment is
/// rejected since request paths are appended to the URL.
///
/// # Example
///
/// ```
/// use signinghub::BaseUrl;
///
/// let base = BaseUrl::new("https://api.signinghub.be/").unwrap();
/// assert_eq!(base.endpoint("v4/packages"), "https://api.signinghub.be/v4/packages");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Parse and validate a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::BaseUrl`] naming the violated rule.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let reject = |reason: String| -> Error {
            InvalidInputError::BaseUrl {
                value: s.to_string(),
                reason,
            }
            .into()
        };

        let url = Url::parse(s).map_err(|e| reject(e.to_string()))?;
        check(&url).map_err(|reason| reject(reason.to_string()))?;
        Ok(Self(url))
    }

    /// Absolute URL for an API path, joined with exactly one slash.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }
}

fn check(url: &Url) -> Result<(), &'static str> {
    let Some(host) = url.host() else {
        return Err("must be an absolute URL with a host");
    };

    match url.scheme() {
        "https" => {}
        "http" if is_loopback(&host) => {}
        "http" => return Err("plain HTTP is only allowed for loopback hosts"),
        _ => return Err("scheme must be https"),
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err("must not carry a query or fragment");
    }
    Ok(())
}

fn is_loopback(host: &Host<&str>) -> bool {
    match host {
        Host::Domain(name) => name.eq_ignore_ascii_case("localhost"),
        Host::Ipv4(ip) => ip.is_loopback(),
        Host::Ipv6(ip) => ip.is_loopback(),
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for BaseUrl {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<BaseUrl> for String {
    fn from(base: BaseUrl) -> Self {
        base.0.into()
    }
}
