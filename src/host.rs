//! Host literal splitting.
//!
//! ```abnf
//! host = "[" ipv6-literal "]" [ ":" port ]
//!      / reg-name [ ":" port ]
//! port = 1*DIGIT
//! ```
//!
//! Nothing is validated beyond the bracket and the digits-only port: a
//! suffix that is not a port stays part of the hostname.

use std::fmt;
use std::str::FromStr;

use crate::error::HostError;

/// The host portion of an authority, split into hostname and port.
///
/// The literal is kept byte for byte; `hostname` and `port` are views
/// derived from it and are only recomputed through the `with_*` methods.
///
/// # Examples
///
/// ```
/// use rawurl::Host;
///
/// let host = Host::parse("[2001:db8::1]:8443").unwrap();
/// assert_eq!(host.as_str(), "[2001:db8::1]:8443");
/// assert_eq!(host.hostname(), "2001:db8::1");
/// assert_eq!(host.port(), "8443");
///
/// let host = Host::parse("host:abc").unwrap();
/// assert_eq!(host.hostname(), "host:abc");
/// assert_eq!(host.port(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Host {
    literal: String,
    hostname: String,
    port: String,
    bracketed: bool,
}

impl Host {
    /// Splits a host literal into hostname and port.
    ///
    /// # Errors
    ///
    /// Returns `HostError` if the literal starts with `[` and has no `]`.
    pub fn parse(input: &str) -> Result<Self, HostError> {
        if input.starts_with('[') {
            return Self::parse_ipv6_literal(input);
        }

        let (hostname, port) = split_host_port(input);
        Ok(Self {
            literal: input.to_string(),
            hostname: hostname.to_string(),
            port: port.to_string(),
            bracketed: false,
        })
    }

    /// Returns the full host literal, including brackets and port.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.literal
    }

    /// Returns the hostname, with IPv6 brackets stripped.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Returns the port, or an empty string if none was split off.
    #[must_use]
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Returns true if the hostname was a bracketed IPv6 literal.
    #[must_use]
    pub const fn is_ipv6_literal(&self) -> bool {
        self.bracketed
    }

    /// Returns true if the literal is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.literal.is_empty()
    }

    /// Returns a new host with the given hostname and the current port.
    ///
    /// A hostname containing `:` is wrapped in brackets unless it already
    /// starts with `[`.
    ///
    /// # Errors
    ///
    /// Returns `HostError` if the rebuilt literal is malformed, or if it no
    /// longer splits back into the current port.
    ///
    /// # Examples
    ///
    /// ```
    /// use rawurl::Host;
    ///
    /// let host = Host::parse("example.com:8080").unwrap();
    /// let host = host.with_hostname("::1").unwrap();
    /// assert_eq!(host.as_str(), "[::1]:8080");
    /// ```
    pub fn with_hostname(&self, hostname: &str) -> Result<Self, HostError> {
        let bracketed = hostname.contains(':') && !hostname.starts_with('[');
        Self::rebuild(hostname, bracketed, &self.port)
    }

    /// Returns a new host with the given port and the current hostname.
    ///
    /// An empty port removes the port.
    ///
    /// # Errors
    ///
    /// Returns `HostError::InvalidPort` if `port` is neither empty nor all
    /// ASCII digits, or `HostError::PortNotSeparable` if the current
    /// hostname would swallow the port.
    ///
    /// # Examples
    ///
    /// ```
    /// use rawurl::Host;
    ///
    /// let host = Host::parse("[::1]").unwrap();
    /// let host = host.with_port("9090").unwrap();
    /// assert_eq!(host.as_str(), "[::1]:9090");
    /// ```
    pub fn with_port(&self, port: &str) -> Result<Self, HostError> {
        if !port.is_empty() && !is_port(port) {
            return Err(HostError::InvalidPort {
                value: port.to_string(),
            });
        }
        Self::rebuild(&self.hostname, self.bracketed, port)
    }

    /// Parses `input` as a new literal, re-appending the current port when
    /// `input` does not carry one of its own.
    ///
    /// # Errors
    ///
    /// Returns `HostError` if `input` is malformed, or if the re-appended
    /// port would end up inside the hostname (`[::1]x:8080`).
    pub fn replaced_keeping_port(&self, input: &str) -> Result<Self, HostError> {
        let host = Self::parse(input)?;
        if host.port.is_empty() && !self.port.is_empty() {
            return host.with_port(&self.port);
        }
        Ok(host)
    }

    fn rebuild(hostname: &str, bracketed: bool, port: &str) -> Result<Self, HostError> {
        let literal = compose(hostname, bracketed, port);
        let host = Self::parse(&literal)?;
        if host.port != port {
            return Err(HostError::PortNotSeparable { value: literal });
        }
        Ok(host)
    }

    fn parse_ipv6_literal(input: &str) -> Result<Self, HostError> {
        let closing_bracket = input
            .rfind(']')
            .ok_or_else(|| HostError::UnclosedIpv6Literal {
                value: input.to_string(),
            })?;

        let suffix = &input[closing_bracket + 1..];
        let port = if suffix.is_empty() {
            Some("")
        } else {
            suffix.strip_prefix(':').filter(|p| is_port(p))
        };

        // A suffix that is not `:digits` keeps the literal whole.
        let (hostname, port, bracketed) = match port {
            Some(port) => (&input[1..closing_bracket], port, true),
            None => (input, "", false),
        };

        Ok(Self {
            literal: input.to_string(),
            hostname: hostname.to_string(),
            port: port.to_string(),
            bracketed,
        })
    }
}

fn split_host_port(input: &str) -> (&str, &str) {
    if let Some(colon_idx) = input.rfind(':') {
        let port = &input[colon_idx + 1..];
        if is_port(port) {
            return (&input[..colon_idx], port);
        }
    }
    (input, "")
}

fn is_port(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn compose(hostname: &str, bracketed: bool, port: &str) -> String {
    let mut literal = String::with_capacity(hostname.len() + port.len() + 3);
    if bracketed {
        literal.push('[');
        literal.push_str(hostname);
        literal.push(']');
    } else {
        literal.push_str(hostname);
    }
    if !port.is_empty() {
        literal.push(':');
        literal.push_str(port);
    }
    literal
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

impl FromStr for Host {
    type Err = HostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Host {
    fn as_ref(&self) -> &str {
        &self.literal
    }
}
