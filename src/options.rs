//! Decomposition options.

/// Options controlling how a raw URL without a scheme is handled.
///
/// # Examples
///
/// ```
/// use rawurl::{ParseOptions, RawUrl};
///
/// let options = ParseOptions::new().with_fallback_scheme("https");
/// let url = RawUrl::parse_with("example.com/..%2f", &options).unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.path(), "/..%2f");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParseOptions {
    /// Scheme assigned when the input carries none.
    ///
    /// Default: None (the scheme stays empty)
    pub fallback_scheme: Option<String>,

    /// Whether input without a scheme is accepted at all.
    ///
    /// When false, such input fails with a missing-scheme error even if a
    /// fallback scheme is configured.
    /// Default: true
    pub allow_missing_scheme: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            fallback_scheme: None,
            allow_missing_scheme: true,
        }
    }
}

impl ParseOptions {
    /// Creates options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that reject any input without a scheme.
    #[must_use]
    pub fn strict() -> Self {
        Self::default().with_allow_missing_scheme(false)
    }

    /// Sets the fallback scheme.
    #[must_use]
    pub fn with_fallback_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.fallback_scheme = Some(scheme.into());
        self
    }

    /// Enables or disables accepting input without a scheme.
    #[must_use]
    pub const fn with_allow_missing_scheme(mut self, allow: bool) -> Self {
        self.allow_missing_scheme = allow;
        self
    }
}
