//! The decomposed raw URL, its recomposition views and its mutator.

use std::fmt;
use std::str::FromStr;

use crate::component::Component;
use crate::constants::{DEFAULT_PATH, SCHEME_SEPARATOR};
use crate::error::{ParseError, UpdateError};
use crate::host::Host;
use crate::log::debug;
use crate::options::ParseOptions;
use crate::parse::decompose;
use crate::query::QueryValues;
use crate::userinfo::Userinfo;

/// A URL split into components without decoding or normalization.
///
/// Every component holds exactly the bytes found in the input. The only
/// normalization anywhere is [`display_path`](Self::display_path), which
/// shows an empty path as `/`.
///
/// ```text
///          userinfo       host      port      path              query          fragment
///         |-------| |-------------| |-||---------------||-------------------------| |-|
/// https://john.doe@www.example.com:123/forum/questions/?tag=networking&order=newest#top
/// |---|   |--------------------------|
/// scheme           authority
/// ```
///
/// # Examples
///
/// ```
/// use rawurl::RawUrl;
///
/// let url = RawUrl::parse("https://host.com/..%2f/etc/passwd").unwrap();
/// assert_eq!(url.path(), "/..%2f/etc/passwd");
/// assert_eq!(url.full_url(), "https://host.com/..%2f/etc/passwd");
///
/// // Opaque form
/// let url = RawUrl::parse("mailto:user@example.com").unwrap();
/// assert_eq!(url.opaque(), Some("user@example.com"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawUrl {
    original: String,
    scheme: String,
    opaque: Option<String>,
    userinfo: Option<Userinfo>,
    host: Host,
    path: String,
    query: String,
    fragment: String,
    raw_request_uri: Option<String>,
}

impl RawUrl {
    /// Parses a raw URL with default options.
    ///
    /// Input without a scheme is accepted and keeps an empty scheme.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the input is empty or the host is malformed.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        decompose(input, &ParseOptions::default())
    }

    /// Parses a raw URL with the given options.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the input is empty, has no scheme while
    /// `options` requires one, or the host is malformed.
    pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        decompose(input, options)
    }

    pub(crate) fn from_opaque(original: &str, scheme: &str, opaque: &str) -> Self {
        Self {
            original: original.to_string(),
            scheme: scheme.to_string(),
            opaque: Some(opaque.to_string()),
            userinfo: None,
            host: Host::default(),
            path: String::new(),
            query: String::new(),
            fragment: String::new(),
            raw_request_uri: None,
        }
    }

    pub(crate) fn from_parts(
        original: &str,
        scheme: String,
        userinfo: Option<Userinfo>,
        host: Host,
        path: &str,
        query: &str,
        fragment: &str,
    ) -> Self {
        let mut url = Self {
            original: original.to_string(),
            scheme,
            opaque: None,
            userinfo,
            host,
            path: path.to_string(),
            query: query.to_string(),
            fragment: fragment.to_string(),
            raw_request_uri: None,
        };
        url.raw_request_uri = Some(url.derived_request_uri());
        url
    }

    /// Returns the exact input this URL was parsed from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Returns the scheme, or an empty string if there is none.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the part after `scheme:` for opaque URLs such as `mailto:`.
    #[must_use]
    pub fn opaque(&self) -> Option<&str> {
        self.opaque.as_deref()
    }

    /// Returns true if this is an opaque URL.
    #[must_use]
    pub const fn is_opaque(&self) -> bool {
        self.opaque.is_some()
    }

    /// Returns the userinfo, if an `@` was present in the authority.
    #[must_use]
    pub const fn userinfo(&self) -> Option<&Userinfo> {
        self.userinfo.as_ref()
    }

    /// Returns the username, or an empty string.
    #[must_use]
    pub fn username(&self) -> &str {
        self.userinfo.as_ref().map_or("", Userinfo::username)
    }

    /// Returns the password, or an empty string.
    #[must_use]
    pub fn password(&self) -> &str {
        self.userinfo.as_ref().map_or("", Userinfo::password)
    }

    /// Returns true if a password field is present, even an empty one.
    #[must_use]
    pub fn password_set(&self) -> bool {
        self.userinfo.as_ref().is_some_and(Userinfo::password_set)
    }

    /// Returns the raw `user[:password]` text, without `@`.
    #[must_use]
    pub fn userinfo_str(&self) -> String {
        self.userinfo
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// Returns the split host.
    #[must_use]
    pub const fn host_parts(&self) -> &Host {
        &self.host
    }

    /// Returns the full host literal, including brackets and port.
    #[must_use]
    pub fn host(&self) -> &str {
        self.host.as_str()
    }

    /// Returns the hostname, with IPv6 brackets stripped.
    #[must_use]
    pub fn hostname(&self) -> &str {
        self.host.hostname()
    }

    /// Returns the port, or an empty string.
    #[must_use]
    pub fn port(&self) -> &str {
        self.host.port()
    }

    /// Returns the path exactly as found (possibly empty).
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query, without `?`.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the fragment, without `#`.
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Returns the request-URI override, if one is set.
    ///
    /// Parsing sets it to the recomposed `path?query#fragment`; replacing
    /// any other component clears it.
    #[must_use]
    pub fn raw_request_uri(&self) -> Option<&str> {
        self.raw_request_uri.as_deref()
    }

    /// Returns `[userinfo@]host`.
    #[must_use]
    pub fn authority(&self) -> String {
        match &self.userinfo {
            Some(userinfo) => format!("{userinfo}@{}", self.host),
            None => self.host.as_str().to_string(),
        }
    }

    /// Returns the path, or `/` if it is empty.
    #[must_use]
    pub fn display_path(&self) -> &str {
        if self.path.is_empty() {
            DEFAULT_PATH
        } else {
            &self.path
        }
    }

    /// Returns the display path without its leading `/`, for callers that
    /// prepend their own slash.
    ///
    /// # Examples
    ///
    /// ```
    /// use rawurl::RawUrl;
    ///
    /// let url = RawUrl::parse("https://example.com//..;/").unwrap();
    /// assert_eq!(url.path_unsafe(), "/..;/");
    /// ```
    #[must_use]
    pub fn path_unsafe(&self) -> &str {
        let path = self.display_path();
        path.strip_prefix('/').unwrap_or(path)
    }

    /// Reconstructs the URL from its components.
    ///
    /// ```text
    /// [scheme "://"] authority display-path ["?" query] ["#" fragment]
    /// ```
    ///
    /// Opaque URLs recompose as `scheme:opaque`.
    #[must_use]
    pub fn full_url(&self) -> String {
        self.to_string()
    }

    /// Returns the request target to send on the wire.
    ///
    /// This is the override if one is set, otherwise
    /// `display-path ["?" query] ["#" fragment]`. For opaque URLs without an
    /// override it is the opaque part.
    ///
    /// # Examples
    ///
    /// ```
    /// use rawurl::{Component, RawUrl};
    ///
    /// let mut url = RawUrl::parse("http://example.com/a?b=1").unwrap();
    /// assert_eq!(url.request_uri(), "/a?b=1");
    ///
    /// url.update(Component::RawRequestUri, "/a/%2e%2e/b").unwrap();
    /// assert_eq!(url.request_uri(), "/a/%2e%2e/b");
    /// ```
    #[must_use]
    pub fn request_uri(&self) -> String {
        match (&self.raw_request_uri, &self.opaque) {
            (Some(raw), _) => raw.clone(),
            (None, Some(opaque)) => opaque.clone(),
            (None, None) => self.derived_request_uri(),
        }
    }

    /// Splits the query into multi-value parameters, without decoding.
    #[must_use]
    pub fn query_values(&self) -> QueryValues {
        QueryValues::parse(&self.query)
    }

    /// Replaces one component, re-deriving what depends on it.
    ///
    /// - `Host` keeps the current port when the new literal has none.
    /// - `Hostname` and `Port` rebuild the host literal and split it again.
    /// - `Password` marks the password as present, even when empty.
    /// - Anything but `RawRequestUri` clears the request-URI override.
    /// - Any hierarchical component turns an opaque URL hierarchical.
    /// - `Scheme` and `RawRequestUri` keep an opaque URL opaque. The override
    ///   is a wire-level value, not a hierarchical field, so an opaque URL
    ///   may carry one; `full_url()` still prints `scheme:opaque`.
    ///
    /// On error the URL is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `UpdateError::InvalidHost` if the rebuilt host opens an IPv6
    /// literal without closing it, if a new port is not all digits, or if
    /// the port could not be kept apart from the new hostname.
    ///
    /// # Examples
    ///
    /// ```
    /// use rawurl::{Component, RawUrl};
    ///
    /// let mut url = RawUrl::parse("http://[::1]:8080/x").unwrap();
    /// url.update(Component::Hostname, "2001:db8::2").unwrap();
    /// assert_eq!(url.host(), "[2001:db8::2]:8080");
    ///
    /// url.update(Component::Password, "").unwrap();
    /// assert_eq!(url.full_url(), "http://:@[2001:db8::2]:8080/x");
    /// ```
    pub fn update(&mut self, component: Component, value: &str) -> Result<(), UpdateError> {
        // Host updates are the only fallible ones; resolve them before touching self.
        let host = match component {
            Component::Host => Some(self.host.replaced_keeping_port(value)?),
            Component::Hostname => Some(self.host.with_hostname(value)?),
            Component::Port => Some(self.host.with_port(value)?),
            _ => None,
        };

        debug!("update {component} to {value:?}");

        if component.invalidates_request_uri() {
            self.raw_request_uri = None;
        }
        if !matches!(component, Component::Scheme | Component::RawRequestUri) {
            self.opaque = None;
        }

        match component {
            Component::Scheme => value.clone_into(&mut self.scheme),
            Component::Username => match &mut self.userinfo {
                Some(userinfo) => userinfo.set_username(value),
                None => self.userinfo = Some(Userinfo::new(value)),
            },
            Component::Password => self
                .userinfo
                .get_or_insert_with(Userinfo::default)
                .set_password(value),
            Component::Host | Component::Hostname | Component::Port => {
                if let Some(host) = host {
                    self.host = host;
                }
            }
            Component::Path => value.clone_into(&mut self.path),
            Component::Query => value.clone_into(&mut self.query),
            Component::Fragment => value.clone_into(&mut self.fragment),
            Component::RawRequestUri => self.raw_request_uri = Some(value.to_string()),
        }

        Ok(())
    }

    /// Parses a component tag, then replaces that component.
    ///
    /// # Errors
    ///
    /// Returns `UpdateError::InvalidComponent` for an unknown tag, or any
    /// error [`update`](Self::update) returns. On error the URL is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rawurl::{RawUrl, UpdateError};
    ///
    /// let mut url = RawUrl::parse("http://example.com/").unwrap();
    /// url.update_str("path", "/..;/admin").unwrap();
    /// assert_eq!(url.full_url(), "http://example.com/..;/admin");
    ///
    /// let err = url.update_str("authority", "x").unwrap_err();
    /// assert!(matches!(err, UpdateError::InvalidComponent(_)));
    /// ```
    pub fn update_str(&mut self, tag: &str, value: &str) -> Result<(), UpdateError> {
        let component = Component::parse(tag)?;
        self.update(component, value)
    }

    /// Drops the request-URI override so it is re-derived from the parts.
    pub fn clear_raw_request_uri(&mut self) {
        self.raw_request_uri = None;
    }

    fn derived_request_uri(&self) -> String {
        let path = self.display_path();
        let mut uri = String::with_capacity(path.len() + self.query.len() + self.fragment.len() + 2);
        uri.push_str(path);
        if !self.query.is_empty() {
            uri.push('?');
            uri.push_str(&self.query);
        }
        if !self.fragment.is_empty() {
            uri.push('#');
            uri.push_str(&self.fragment);
        }
        uri
    }
}

impl fmt::Display for RawUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(opaque) = &self.opaque {
            return write!(f, "{}:{opaque}", self.scheme);
        }

        if !self.scheme.is_empty() {
            write!(f, "{}{SCHEME_SEPARATOR}", self.scheme)?;
        }
        if let Some(userinfo) = &self.userinfo {
            write!(f, "{userinfo}@")?;
        }
        write!(f, "{}{}", self.host, self.display_path())?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }
        Ok(())
    }
}

impl FromStr for RawUrl {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for RawUrl {
    fn as_ref(&self) -> &str {
        &self.original
    }
}

impl TryFrom<&str> for RawUrl {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RawUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RawUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
