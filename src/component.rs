//! Component tags accepted by [`RawUrl::update`](crate::RawUrl::update).

use std::fmt;
use std::str::FromStr;

use crate::error::ComponentError;

/// A single replaceable component of a [`RawUrl`](crate::RawUrl).
///
/// # Examples
///
/// ```
/// use rawurl::Component;
///
/// let component: Component = "raw_request_uri".parse().unwrap();
/// assert_eq!(component, Component::RawRequestUri);
/// assert!("userinfo".parse::<Component>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Component {
    /// The scheme
    Scheme,
    /// The userinfo username
    Username,
    /// The userinfo password
    Password,
    /// The full host literal, including port
    Host,
    /// The hostname without port
    Hostname,
    /// The port
    Port,
    /// The path
    Path,
    /// The query, without `?`
    Query,
    /// The fragment, without `#`
    Fragment,
    /// The request-URI override sent on the wire
    RawRequestUri,
}

impl Component {
    /// Every component, in URL order.
    pub const ALL: [Self; 10] = [
        Self::Scheme,
        Self::Username,
        Self::Password,
        Self::Host,
        Self::Hostname,
        Self::Port,
        Self::Path,
        Self::Query,
        Self::Fragment,
        Self::RawRequestUri,
    ];

    /// Returns the canonical tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheme => "scheme",
            Self::Username => "username",
            Self::Password => "password",
            Self::Host => "host",
            Self::Hostname => "hostname",
            Self::Port => "port",
            Self::Path => "path",
            Self::Query => "query",
            Self::Fragment => "fragment",
            Self::RawRequestUri => "raw_request_uri",
        }
    }

    /// Parses a tag, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns `ComponentError::Unknown` if the tag names no component.
    pub fn parse(tag: &str) -> Result<Self, ComponentError> {
        let component = match tag.to_ascii_lowercase().as_str() {
            "scheme" => Self::Scheme,
            "username" | "user" => Self::Username,
            "password" => Self::Password,
            "host" => Self::Host,
            "hostname" => Self::Hostname,
            "port" => Self::Port,
            "path" => Self::Path,
            "query" => Self::Query,
            "fragment" => Self::Fragment,
            "raw_request_uri" | "rawrequesturi" | "request_uri" => Self::RawRequestUri,
            _ => {
                return Err(ComponentError::Unknown {
                    name: tag.to_string(),
                });
            }
        };
        Ok(component)
    }

    /// Returns true if replacing this component discards a request-URI override.
    #[must_use]
    pub const fn invalidates_request_uri(self) -> bool {
        !matches!(self, Self::RawRequestUri)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Component {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Component {
    type Error = ComponentError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Component {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Component {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
