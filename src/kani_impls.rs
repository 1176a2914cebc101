//! Kani proof harnesses for the decomposer and the host splitter.
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{Host, ParseOptions, RawUrl};

/// Characters that drive every branch of the decomposer.
const URL_CHARS: &[u8] = b"ab:/?#@[].%1";

/// Upper bound on generated input length, for tractability.
const MAX_LEN: usize = 6;

fn arbitrary_url_string() -> String {
    let len: usize = kani::any();
    kani::assume(len <= MAX_LEN);

    (0..len)
        .map(|_| {
            let idx: usize = kani::any();
            URL_CHARS[idx % URL_CHARS.len()] as char
        })
        .collect()
}

#[kani::proof]
#[kani::unwind(8)]
fn decompose_never_panics() {
    let input = arbitrary_url_string();
    let _ = RawUrl::parse_with(&input, &ParseOptions::default());
}

#[kani::proof]
#[kani::unwind(8)]
fn opaque_excludes_hierarchical_fields() {
    let input = arbitrary_url_string();
    if let Ok(url) = RawUrl::parse(&input) {
        if url.is_opaque() {
            assert!(url.host().is_empty());
            assert!(url.path().is_empty());
            assert!(url.query().is_empty());
            assert!(url.fragment().is_empty());
            assert!(url.userinfo().is_none());
        }
    }
}

#[kani::proof]
#[kani::unwind(8)]
fn host_split_is_consistent() {
    let input = arbitrary_url_string();
    if let Ok(host) = Host::parse(&input) {
        assert_eq!(host.as_str(), input);
        assert!(host.port().bytes().all(|b| b.is_ascii_digit()));
        if !host.port().is_empty() {
            assert!(host.as_str().ends_with(host.port()));
        }
    }
}
