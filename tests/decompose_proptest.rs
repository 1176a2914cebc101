//! Property-based tests for decomposition and recomposition.
//!
//! These generate URLs carrying traversal payloads, IPv6 literals and
//! credentials, and check that nothing is lost or reinterpreted between
//! parsing and rebuilding.

use proptest::prelude::*;

use rawurl::{Component, ParseOptions, RawUrl};

/// Strategies for generating raw URLs.
mod strategies {
    use super::*;

    /// Lowercase letters for schemes and labels
    const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

    /// Characters for DNS labels
    const LABEL_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-";

    /// Characters allowed in userinfo parts (no `@`, `:`, `/`, `?`, `#`)
    const USER_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-._~%!$&'()*+,;=";

    /// Payload fragments commonly used to probe path normalization
    const PATH_PIECES: &[&str] = &[
        "a", "admin", "..", ".", "%2e%2e", "..%2f", "%2f", "..;", ";", "。。", "%00", "\\", "", "etc",
        "passwd", "%252e", "~", "@", ":", "=",
    ];

    fn chars_from(alphabet: &'static [u8], len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(alphabet.to_vec()), len)
            .prop_map(|chars| chars.into_iter().map(char::from).collect())
    }

    /// Generate a scheme (1-8 lowercase letters)
    pub fn scheme() -> impl Strategy<Value = String> {
        chars_from(LOWERCASE, 1..=8)
    }

    /// Generate a domain name (1-3 labels)
    pub fn domain() -> impl Strategy<Value = String> {
        prop::collection::vec(chars_from(LABEL_CHARS, 1..=12), 1..=3)
            .prop_map(|labels| labels.join("."))
    }

    /// Generate an IPv6 address (full form)
    pub fn ipv6() -> impl Strategy<Value = String> {
        prop::collection::vec(0u16..=0xffff, 8).prop_map(|groups| {
            groups
                .iter()
                .map(|g| format!("{g:x}"))
                .collect::<Vec<_>>()
                .join(":")
        })
    }

    /// Generate a host literal with optional port; yields (literal, hostname, port)
    pub fn host() -> impl Strategy<Value = (String, String, String)> {
        let port = prop::option::of(0u32..=99_999).prop_map(|p| p.map(|p| p.to_string()).unwrap_or_default());

        let domain_host = (domain(), port.clone()).prop_map(|(d, p)| {
            let literal = if p.is_empty() { d.clone() } else { format!("{d}:{p}") };
            (literal, d, p)
        });

        let ipv6_host = (ipv6(), port).prop_map(|(ip, p)| {
            let literal = if p.is_empty() {
                format!("[{ip}]")
            } else {
                format!("[{ip}]:{p}")
            };
            (literal, ip, p)
        });

        prop_oneof![
            3 => domain_host,
            1 => ipv6_host,
        ]
    }

    /// Generate optional userinfo text (without `@`)
    pub fn userinfo() -> impl Strategy<Value = Option<String>> {
        prop::option::of((chars_from(USER_CHARS, 0..=8), prop::option::of(chars_from(USER_CHARS, 0..=8))))
            .prop_map(|info| {
                info.map(|(user, password)| match password {
                    Some(password) => format!("{user}:{password}"),
                    None => user,
                })
            })
    }

    /// Generate a non-empty path starting with `/`
    pub fn path() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(PATH_PIECES.to_vec()), 0..=8).prop_map(|pieces| {
            let mut path = String::from("/");
            path.push_str(&pieces.join("/"));
            path
        })
    }

    /// Generate an optional non-empty query (no `#`)
    pub fn query() -> impl Strategy<Value = Option<String>> {
        prop::option::of("[a-z0-9=&%./?;:@]{1,16}")
    }

    /// Generate an optional non-empty fragment (anything goes)
    pub fn fragment() -> impl Strategy<Value = Option<String>> {
        prop::option::of("[a-z0-9=&%./?#;:@]{1,16}")
    }

    /// A generated URL together with the parts it was assembled from
    #[derive(Debug, Clone)]
    pub struct Generated {
        pub url: String,
        pub scheme: String,
        pub userinfo: Option<String>,
        pub host: String,
        pub hostname: String,
        pub port: String,
        pub path: String,
        pub query: String,
        pub fragment: String,
    }

    /// Generate a full hierarchical URL with a non-empty path
    pub fn url() -> impl Strategy<Value = Generated> {
        (scheme(), userinfo(), host(), path(), query(), fragment()).prop_map(
            |(scheme, userinfo, (host, hostname, port), path, query, fragment)| {
                let mut url = format!("{scheme}://");
                if let Some(info) = &userinfo {
                    url.push_str(info);
                    url.push('@');
                }
                url.push_str(&host);
                url.push_str(&path);
                if let Some(q) = &query {
                    url.push('?');
                    url.push_str(q);
                }
                if let Some(f) = &fragment {
                    url.push('#');
                    url.push_str(f);
                }
                Generated {
                    url,
                    scheme,
                    userinfo,
                    host,
                    hostname,
                    port,
                    path,
                    query: query.unwrap_or_default(),
                    fragment: fragment.unwrap_or_default(),
                }
            },
        )
    }

    /// Generate an arbitrary tail after `scheme://`, built from delimiter-heavy characters.
    /// The scheme is sometimes empty, leaving a bare `://` prefix.
    pub fn noisy_url() -> impl Strategy<Value = String> {
        let scheme_or_empty = prop_oneof![
            1 => Just(String::new()),
            4 => scheme(),
        ];
        (scheme_or_empty, "[ab:/?#@\\[\\].%1;]{0,24}").prop_map(|(scheme, rest)| format!("{scheme}://{rest}"))
    }
}

mod roundtrip_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn full_url_is_identity(generated in url()) {
            let parsed = RawUrl::parse(&generated.url).unwrap();
            prop_assert_eq!(parsed.full_url(), generated.url.clone());
            prop_assert_eq!(parsed.as_str(), generated.url.as_str());
        }

        #[test]
        fn components_match_generated_parts(generated in url()) {
            let parsed = RawUrl::parse(&generated.url).unwrap();

            prop_assert_eq!(parsed.scheme(), generated.scheme.as_str());
            prop_assert_eq!(parsed.userinfo_str(), generated.userinfo.clone().unwrap_or_default());
            prop_assert_eq!(parsed.userinfo().is_some(), generated.userinfo.is_some());
            prop_assert_eq!(parsed.host(), generated.host.as_str());
            prop_assert_eq!(parsed.hostname(), generated.hostname.as_str());
            prop_assert_eq!(parsed.port(), generated.port.as_str());
            prop_assert_eq!(parsed.path(), generated.path.as_str());
            prop_assert_eq!(parsed.query(), generated.query.as_str());
            prop_assert_eq!(parsed.fragment(), generated.fragment.as_str());
        }

        #[test]
        fn request_uri_is_path_query_fragment(generated in url()) {
            let parsed = RawUrl::parse(&generated.url).unwrap();
            let authority_end = generated.scheme.len() + 3
                + generated.userinfo.as_ref().map_or(0, |u| u.len() + 1)
                + generated.host.len();
            prop_assert_eq!(parsed.request_uri(), &generated.url[authority_end..]);
        }

        #[test]
        fn recomposition_is_idempotent(input in noisy_url()) {
            let Ok(first) = RawUrl::parse(&input) else {
                return Ok(());
            };
            // An empty path is shown as `/`, which reparses differently.
            if !first.path().is_empty() {
                let second = RawUrl::parse(&first.full_url()).unwrap();

                prop_assert_eq!(first.scheme(), second.scheme());
                prop_assert_eq!(first.userinfo(), second.userinfo());
                prop_assert_eq!(first.host(), second.host());
                prop_assert_eq!(first.hostname(), second.hostname());
                prop_assert_eq!(first.port(), second.port());
                prop_assert_eq!(first.path(), second.path());
                prop_assert_eq!(first.query(), second.query());
                prop_assert_eq!(first.fragment(), second.fragment());
            }
        }
    }
}

mod opaque_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn opaque_takes_everything_after_colon(scheme in scheme(), rest in "[a-z0-9@:?#%=&]{0,24}") {
            let input = format!("{scheme}:{rest}");
            let parsed = RawUrl::parse(&input).unwrap();

            prop_assert_eq!(parsed.scheme(), scheme.as_str());
            prop_assert_eq!(parsed.opaque(), Some(rest.as_str()));
            prop_assert!(parsed.userinfo().is_none());
            prop_assert_eq!(parsed.host(), "");
            prop_assert_eq!(parsed.path(), "");
            prop_assert_eq!(parsed.query(), "");
            prop_assert_eq!(parsed.fragment(), "");
            prop_assert_eq!(parsed.full_url(), input);
        }

        #[test]
        fn dotted_host_with_port_is_not_opaque(a in domain(), b in domain(), port in 0u32..=65535) {
            let host = format!("{a}.{b}");
            let input = format!("{host}:{port}/x");
            let parsed = RawUrl::parse(&input).unwrap();

            prop_assert!(parsed.opaque().is_none());
            prop_assert_eq!(parsed.hostname(), host.as_str());
            prop_assert_eq!(parsed.port(), port.to_string());
        }
    }
}

mod mutator_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn port_update_keeps_hostname(generated in url(), port in 0u32..=65535) {
            let mut parsed = RawUrl::parse(&generated.url).unwrap();
            let port = port.to_string();
            parsed.update(Component::Port, &port).unwrap();

            prop_assert_eq!(parsed.hostname(), generated.hostname.as_str());
            prop_assert_eq!(parsed.port(), port.as_str());
            let port_suffix = format!(":{}", port);
            prop_assert!(parsed.host().ends_with(&port_suffix));
        }

        #[test]
        fn host_update_keeps_port(generated in url(), new_host in domain()) {
            let mut parsed = RawUrl::parse(&generated.url).unwrap();
            parsed.update(Component::Host, &new_host).unwrap();

            prop_assert_eq!(parsed.hostname(), new_host.as_str());
            prop_assert_eq!(parsed.port(), generated.port.as_str());
        }

        #[test]
        fn path_update_rederives_request_uri(generated in url(), new_path in path()) {
            let mut parsed = RawUrl::parse(&generated.url).unwrap();
            parsed.update(Component::RawRequestUri, "*").unwrap();
            parsed.update(Component::Path, &new_path).unwrap();

            prop_assert_eq!(parsed.raw_request_uri(), None);
            prop_assert!(parsed.request_uri().starts_with(new_path.as_str()));
            prop_assert_eq!(parsed.as_str(), generated.url.as_str());
        }

        #[test]
        fn fallback_scheme_only_fills_missing(generated in url()) {
            let options = ParseOptions::new().with_fallback_scheme("fallback");
            let parsed = RawUrl::parse_with(&generated.url, &options).unwrap();
            prop_assert_eq!(parsed.scheme(), generated.scheme.as_str());

            let without = generated.url.split_once("://").unwrap().1;
            if let Ok(parsed) = RawUrl::parse_with(without, &options) {
                if !parsed.is_opaque() {
                    prop_assert_eq!(parsed.scheme(), "fallback");
                }
            }
        }
    }
}
