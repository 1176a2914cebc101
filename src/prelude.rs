//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use rawurl::prelude::*;
//!
//! let url = RawUrl::parse("https://example.com/..;/").unwrap();
//! assert_eq!(url.path(), "/..;/");
//! ```

pub use crate::{
    // Core types
    Component, Host, ParseOptions, QueryValues, RawUrl, Userinfo,
    // Functions
    decompose,
    // Errors
    ComponentError, HostError, ParseError, ParseErrorKind, UpdateError,
};
