//! Decomposition of raw URL strings.
//!
//! Each step consumes a prefix or suffix of what remains and is never
//! revisited:
//!
//! 1. scheme (`scheme://`, or opaque `scheme:rest`)
//! 2. authority, up to the first `/`, `?` or `#`
//! 3. userinfo, before the first `@` of the authority
//! 4. host and port
//! 5. fragment after the first `#`, then query after the first `?`
//!
//! The remainder is the path, kept byte for byte.

use crate::constants::{AUTHORITY_TERMINATORS, OPAQUE_SCHEME_FORBIDDEN, SCHEME_SEPARATOR};
use crate::error::{ParseError, ParseErrorKind};
use crate::host::Host;
use crate::log::trace;
use crate::options::ParseOptions;
use crate::url::RawUrl;
use crate::userinfo::Userinfo;

/// Decomposes a raw URL without decoding or normalizing anything.
///
/// # Errors
///
/// Returns `ParseError` if:
/// - The input is empty
/// - No scheme is present and `options` does not allow a missing scheme
/// - The host opens an IPv6 literal with `[` and never closes it
///
/// # Examples
///
/// ```
/// use rawurl::{decompose, ParseOptions};
///
/// let url = decompose("https://example.com/a?b=1#c?d=2", &ParseOptions::default()).unwrap();
/// assert_eq!(url.path(), "/a");
/// assert_eq!(url.query(), "b=1");
/// assert_eq!(url.fragment(), "c?d=2");
/// ```
pub fn decompose(input: &str, options: &ParseOptions) -> Result<RawUrl, ParseError> {
    decompose_inner(input, options).map_err(|kind| ParseError {
        input: input.to_string(),
        kind,
    })
}

/// Returns true if the text before a bare `:` should be read as an opaque
/// scheme (`mailto:`) rather than a host with a port (`10.0.0.1:8080`).
#[must_use]
pub fn is_opaque_scheme(candidate: &str) -> bool {
    !candidate.is_empty() && !candidate.contains(OPAQUE_SCHEME_FORBIDDEN)
}

enum SchemeSplit<'a> {
    Hierarchical { scheme: &'a str, rest: &'a str },
    Opaque { scheme: &'a str, opaque: &'a str },
    Missing,
}

fn decompose_inner(input: &str, options: &ParseOptions) -> Result<RawUrl, ParseErrorKind> {
    if input.is_empty() {
        return Err(ParseErrorKind::Empty);
    }

    let (scheme, rest) = match split_scheme(input) {
        SchemeSplit::Hierarchical { scheme, rest } => (scheme.to_string(), rest),
        SchemeSplit::Opaque { scheme, opaque } => {
            trace!("opaque url: scheme {scheme:?}, opaque {opaque:?}");
            return Ok(RawUrl::from_opaque(input, scheme, opaque));
        }
        SchemeSplit::Missing => {
            if !options.allow_missing_scheme {
                return Err(ParseErrorKind::MissingScheme);
            }
            (options.fallback_scheme.clone().unwrap_or_default(), input)
        }
    };
    trace!("scheme {scheme:?}");

    let (authority, tail) = split_authority(rest);
    let (userinfo, host) = split_userinfo(authority);
    let host = Host::parse(host).map_err(ParseErrorKind::InvalidHost)?;
    trace!("authority {authority:?}, host {host:?}");

    let (tail, fragment) = split_fragment(tail);
    let (path, query) = split_query(tail);
    trace!("path {path:?}, query {query:?}, fragment {fragment:?}");

    Ok(RawUrl::from_parts(
        input,
        scheme,
        userinfo.map(Userinfo::parse),
        host,
        path,
        query,
        fragment,
    ))
}

fn split_scheme(input: &str) -> SchemeSplit<'_> {
    if let Some(idx) = input.find(SCHEME_SEPARATOR) {
        let scheme = &input[..idx];
        // `host/?next=http://x` has no scheme; its `://` sits in the query.
        // `://host` has none either; it is read as a path.
        if !scheme.is_empty() && !scheme.contains(AUTHORITY_TERMINATORS) {
            return SchemeSplit::Hierarchical {
                scheme,
                rest: &input[idx + SCHEME_SEPARATOR.len()..],
            };
        }
    }

    match input.split_once(':') {
        Some((scheme, opaque)) if is_opaque_scheme(scheme) => SchemeSplit::Opaque { scheme, opaque },
        _ => SchemeSplit::Missing,
    }
}

fn split_authority(input: &str) -> (&str, &str) {
    match input.find(AUTHORITY_TERMINATORS) {
        Some(idx) => input.split_at(idx),
        None => (input, ""),
    }
}

fn split_userinfo(authority: &str) -> (Option<&str>, &str) {
    match authority.split_once('@') {
        Some((userinfo, host)) => (Some(userinfo), host),
        None => (None, authority),
    }
}

fn split_fragment(input: &str) -> (&str, &str) {
    input.split_once('#').unwrap_or((input, ""))
}

fn split_query(input: &str) -> (&str, &str) {
    input.split_once('?').unwrap_or((input, ""))
}
