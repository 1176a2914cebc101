//! Byte-exact URL decomposition and reconstruction.
//!
//! This crate splits a raw URL into scheme, userinfo, host, port, path,
//! query and fragment, and rebuilds it, without percent-decoding, path
//! normalization, case folding or grammar validation. Payloads such as
//! `..%2f`, `..;/` or `。。` survive untouched, which is what HTTP fuzzers
//! and path-traversal tooling need from a URL type.
//!
//! # Quick Start
//!
//! ```rust
//! use rawurl::RawUrl;
//!
//! let url = RawUrl::parse("https://example.com/path1/..%2f/path2?a=1&a=2#top").unwrap();
//!
//! assert_eq!(url.scheme(), "https");
//! assert_eq!(url.host(), "example.com");
//! assert_eq!(url.path(), "/path1/..%2f/path2");
//! assert_eq!(url.query_values().get_all("a"), &["1", "2"]);
//! assert_eq!(url.fragment(), "top");
//!
//! // Nothing was normalized on the way back out
//! assert_eq!(url.full_url(), "https://example.com/path1/..%2f/path2?a=1&a=2#top");
//! ```
//!
//! # Updating Components
//!
//! ```rust
//! use rawurl::{Component, RawUrl};
//!
//! let mut url = RawUrl::parse("http://[2001:db8::1]:8443/x").unwrap();
//! url.update(Component::Port, "443").unwrap();
//! url.update(Component::Path, "/%2e%2e/admin").unwrap();
//!
//! assert_eq!(url.full_url(), "http://[2001:db8::1]:443/%2e%2e/admin");
//! assert_eq!(url.request_uri(), "/%2e%2e/admin");
//! ```
//!
//! # Grammar
//!
//! ```text
//! raw-url  = scheme "://" authority path-query-fragment
//!          / scheme ":" opaque                  ; e.g. mailto:user@host
//!          / authority path-query-fragment       ; scheme omitted
//! authority = [ userinfo "@" ] host
//! host      = "[" ipv6-literal "]" [ ":" port ]
//!           / reg-name [ ":" port ]
//! path-query-fragment = [ path ] [ "?" query ] [ "#" fragment ]
//! ```
//!
//! Any byte sequence is accepted in `path`, `query` and `fragment`.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`RawUrl`], [`Component`] and
//!   [`ParseOptions`]
//! - `log`: trace decomposition steps and debug component updates through
//!   the `log` facade

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod component;
mod constants;
mod error;
mod host;
#[cfg(kani)]
mod kani_impls;
mod log;
mod options;
mod parse;
pub mod prelude;
mod query;
mod url;
mod userinfo;

pub use component::Component;
pub use constants::{DEFAULT_PATH, OPAQUE_SCHEME_FORBIDDEN, SCHEME_SEPARATOR};
pub use error::{ComponentError, HostError, ParseError, ParseErrorKind, UpdateError};
pub use host::Host;
pub use options::ParseOptions;
pub use parse::{decompose, is_opaque_scheme};
pub use query::QueryValues;
pub use url::RawUrl;
pub use userinfo::Userinfo;
