//! Error types for raw URL decomposition and component updates.

use std::error::Error;
use std::fmt;

/// Errors that can occur when decomposing a raw URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific decomposition error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input is empty
    Empty,
    /// No scheme delimiter was found and a missing scheme is not allowed
    MissingScheme,
    /// The host could not be split
    InvalidHost(HostError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse raw URL '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::Empty => write!(f, "input is empty"),
            ParseErrorKind::MissingScheme => write!(
                f,
                "no scheme found; expected 'scheme://' or 'scheme:' prefix, or allow a missing scheme"
            ),
            ParseErrorKind::InvalidHost(e) => write!(f, "invalid host: {e}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ParseErrorKind::InvalidHost(e) => Some(e),
            ParseErrorKind::Empty | ParseErrorKind::MissingScheme => None,
        }
    }
}

/// Errors for host splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// An IPv6 literal opened with `[` but never closed
    UnclosedIpv6Literal {
        /// The offending host text
        value: String,
    },
    /// A new port is not empty and not all ASCII digits
    InvalidPort {
        /// The rejected port
        value: String,
    },
    /// A rebuilt host literal no longer splits back into its port
    PortNotSeparable {
        /// The rebuilt host literal
        value: String,
    },
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnclosedIpv6Literal { value } => {
                write!(f, "IPv6 literal '{value}' is missing its closing bracket")
            }
            Self::InvalidPort { value } => {
                write!(f, "port '{value}' must be empty or ASCII digits only")
            }
            Self::PortNotSeparable { value } => {
                write!(f, "port cannot be split back out of host '{value}'")
            }
        }
    }
}

impl Error for HostError {}

/// Errors for component tag parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentError {
    /// The tag does not name a component
    Unknown {
        /// The unrecognized tag
        name: String,
    },
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { name } => write!(
                f,
                "unknown component '{name}'; expected one of scheme, username, password, host, hostname, port, path, query, fragment, raw_request_uri"
            ),
        }
    }
}

impl Error for ComponentError {}

/// Errors returned when replacing a single component of a [`RawUrl`](crate::RawUrl).
///
/// A failed update leaves the URL untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    /// The component tag was not recognized
    InvalidComponent(ComponentError),
    /// The new host (or the host rebuilt from a new hostname or port) is malformed
    InvalidHost(HostError),
}

impl fmt::Display for UpdateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidComponent(e) => write!(f, "invalid component: {e}"),
            Self::InvalidHost(e) => write!(f, "invalid host: {e}"),
        }
    }
}

impl Error for UpdateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidComponent(e) => Some(e),
            Self::InvalidHost(e) => Some(e),
        }
    }
}

impl From<ComponentError> for UpdateError {
    fn from(e: ComponentError) -> Self {
        Self::InvalidComponent(e)
    }
}

impl From<HostError> for UpdateError {
    fn from(e: HostError) -> Self {
        Self::InvalidHost(e)
    }
}
