//! Delimiters and defaults used when splitting raw URLs.

/// Separator between a hierarchical scheme and its authority.
pub const SCHEME_SEPARATOR: &str = "://";

/// Path substituted for an empty path when a URL is displayed or sent.
pub const DEFAULT_PATH: &str = "/";

/// Characters that disqualify the text before a bare `:` from being an
/// opaque scheme (`mailto:` is opaque, `example.com:8080` is not).
pub const OPAQUE_SCHEME_FORBIDDEN: &[char] = &['/', '.', '?', '#', '@', '['];

/// Characters that terminate the authority.
pub(crate) const AUTHORITY_TERMINATORS: &[char] = &['/', '?', '#'];
