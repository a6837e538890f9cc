#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![cfg_attr(not(feature = "std"), no_std)]

//! A URI reference parser that strictly adheres to IETF [RFC 3986],
//! yielding fully percent-decoded components.
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//!
//! Unlike zero-copy parsers, [`Uri`] is a plain owned value: parsing
//! resolves every percent escape up front, so accessors hand back the
//! decoded scheme, user information, host, port, path segments, query
//! and fragment with no further processing. The path is kept as a
//! segment list, which makes [dot-segment removal][`Uri::normalize_path`]
//! and [equivalence comparison](Uri#equivalence) natural operations on
//! the parsed value.
//!
//! This crate never dereferences a URI, knows nothing about
//! scheme-specific semantics such as default ports, and does not
//! recompose a parsed reference back into a string.
//!
//! # Feature flags
//!
//! - `std` (default): [`std::error::Error`] implementation for
//!   [`ParseError`]. Disable for `no_std` operation; the crate always
//!   requires `alloc`.
//!
//! - `serde`: structural `Serialize`/`Deserialize` implementations
//!   for [`Uri`].

extern crate alloc;

pub mod component;

mod encoding;
mod error;
mod fmt;
mod normalizer;
mod parser;

pub use error::{ParseError, ParseErrorKind};

use crate::component::{Host, Scheme};
use alloc::{string::String, vec::Vec};
use core::{hash, str::FromStr};

/// A [URI reference] with all components percent-decoded.
///
/// [URI reference]: https://datatracker.ietf.org/doc/html/rfc3986/#section-4.1
///
/// # Equivalence
///
/// Two `Uri`s are equal iff their schemes and hosts compare equal
/// case-insensitively and every other component matches exactly.
/// No normalization is applied implicitly; normalize both paths with
/// [`normalize_path`](Self::normalize_path) first to detect
/// equivalence across dot segments.
///
/// ```
/// use decoded_uri::Uri;
///
/// // Inspired by Section 6.2.2 of RFC 3986.
/// let uri = Uri::parse("example://a/b/c/%7Bfoo%7D")?;
/// let mut other = Uri::parse("eXAMPLE://a/./b/../b/%63/%7bfoo%7d")?;
/// assert_ne!(uri, other);
///
/// other.normalize_path();
/// assert_eq!(uri, other);
/// # Ok::<_, decoded_uri::ParseError>(())
/// ```
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uri {
    pub(crate) scheme: String,
    pub(crate) userinfo: String,
    pub(crate) host: String,
    pub(crate) port: Option<u16>,
    pub(crate) path: Vec<String>,
    pub(crate) query: String,
    pub(crate) fragment: String,
}

impl Uri {
    /// Parses a URI reference from a string into a `Uri`.
    ///
    /// The input is validated against the RFC 3986 grammar before any
    /// component is decoded; any violation fails the whole parse and
    /// no partial result is produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use decoded_uri::Uri;
    ///
    /// let uri = Uri::parse("foo://user@example.com:8042/over/there?name=ferret#nose")?;
    /// assert_eq!(uri.scheme().as_str(), "foo");
    /// assert_eq!(uri.userinfo(), "user");
    /// assert_eq!(uri.host().as_str(), "example.com");
    /// assert_eq!(uri.port(), Some(8042));
    /// assert_eq!(uri.path(), ["", "over", "there"]);
    /// assert_eq!(uri.query(), "name=ferret");
    /// assert_eq!(uri.fragment(), "nose");
    /// # Ok::<_, decoded_uri::ParseError>(())
    /// ```
    pub fn parse(s: &str) -> Result<Uri, ParseError> {
        parser::parse(s)
    }

    /// Returns the [scheme] component in its original case.
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.1
    ///
    /// The scheme is empty iff the reference is [relative]. Note that
    /// [`Scheme`] compares case-insensitively.
    ///
    /// [relative]: Self::is_relative_reference
    ///
    /// # Examples
    ///
    /// ```
    /// use decoded_uri::Uri;
    ///
    /// let uri = Uri::parse("HTTP://example.com/")?;
    /// assert_eq!(uri.scheme().as_str(), "HTTP");
    /// assert!(uri.scheme().eq_lowercase("http"));
    /// # Ok::<_, decoded_uri::ParseError>(())
    /// ```
    #[inline]
    pub fn scheme(&self) -> &Scheme {
        Scheme::new_validated(&self.scheme)
    }

    /// Returns the decoded [userinfo] subcomponent, empty if absent.
    ///
    /// [userinfo]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.1
    ///
    /// # Examples
    ///
    /// ```
    /// use decoded_uri::Uri;
    ///
    /// let uri = Uri::parse("ftp://user@192.168.1.24/")?;
    /// assert_eq!(uri.userinfo(), "user");
    /// # Ok::<_, decoded_uri::ParseError>(())
    /// ```
    #[inline]
    pub fn userinfo(&self) -> &str {
        &self.userinfo
    }

    /// Returns the decoded [host] subcomponent.
    ///
    /// [host]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.2
    ///
    /// IP literals keep their surrounding brackets verbatim. The host
    /// is empty both when the authority has an empty host and when no
    /// authority is present at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use decoded_uri::Uri;
    ///
    /// let uri = Uri::parse("ftp://user@[2001:db8::7]/")?;
    /// assert_eq!(uri.host().as_str(), "[2001:db8::7]");
    /// # Ok::<_, decoded_uri::ParseError>(())
    /// ```
    #[inline]
    pub fn host(&self) -> &Host {
        Host::new(&self.host)
    }

    /// Returns the [port] subcomponent.
    ///
    /// [port]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.3
    ///
    /// The port must fit in 16 bits; larger or non-numeric port text
    /// fails the parse. An empty port is the same as no port at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use decoded_uri::Uri;
    ///
    /// let uri = Uri::parse("ssh://device.local:4673/")?;
    /// assert_eq!(uri.port(), Some(4673));
    ///
    /// let uri = Uri::parse("ssh://device.local:/")?;
    /// assert_eq!(uri.port(), None);
    /// # Ok::<_, decoded_uri::ParseError>(())
    /// ```
    #[inline]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the decoded [path] segments.
    ///
    /// [path]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.3
    ///
    /// An empty slice means no path at all; a leading empty segment
    /// marks an absolute path, and a trailing empty segment a path
    /// ending in "/". Consecutive slashes are not collapsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use decoded_uri::Uri;
    ///
    /// assert!(Uri::parse("")?.path().is_empty());
    /// assert_eq!(Uri::parse("/")?.path(), [""]);
    /// assert_eq!(Uri::parse("/foo")?.path(), ["", "foo"]);
    /// assert_eq!(Uri::parse("foo/")?.path(), ["foo", ""]);
    /// # Ok::<_, decoded_uri::ParseError>(())
    /// ```
    #[inline]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Returns the decoded [query] component, empty if absent.
    ///
    /// [query]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.4
    ///
    /// # Examples
    ///
    /// ```
    /// use decoded_uri::Uri;
    ///
    /// let uri = Uri::parse("http://example.com/?name=ferret")?;
    /// assert_eq!(uri.query(), "name=ferret");
    ///
    /// // An absent query and a present-but-empty one are not
    /// // distinguished.
    /// assert_eq!(Uri::parse("http://example.com/?")?.query(), "");
    /// assert_eq!(Uri::parse("http://example.com/")?.query(), "");
    /// # Ok::<_, decoded_uri::ParseError>(())
    /// ```
    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the decoded [fragment] component, empty if absent.
    ///
    /// [fragment]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.5
    ///
    /// As with the [query](Self::query), an absent fragment and an
    /// empty one are not distinguished.
    #[inline]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Returns `true` if the URI reference is [relative], i.e.,
    /// without a scheme.
    ///
    /// [relative]: https://datatracker.ietf.org/doc/html/rfc3986/#section-4.2
    ///
    /// # Examples
    ///
    /// ```
    /// use decoded_uri::Uri;
    ///
    /// assert!(Uri::parse("/path/to/file")?.is_relative_reference());
    /// assert!(!Uri::parse("http://example.com/")?.is_relative_reference());
    /// # Ok::<_, decoded_uri::ParseError>(())
    /// ```
    #[inline]
    pub fn is_relative_reference(&self) -> bool {
        self.scheme.is_empty()
    }

    /// Returns `true` unless the path is present and absolute.
    ///
    /// An empty path counts as relative.
    ///
    /// # Examples
    ///
    /// ```
    /// use decoded_uri::Uri;
    ///
    /// assert!(Uri::parse("foo")?.has_relative_path());
    /// // No path at all.
    /// assert!(Uri::parse("http://example.com")?.has_relative_path());
    /// assert!(!Uri::parse("/foo")?.has_relative_path());
    /// # Ok::<_, decoded_uri::ParseError>(())
    /// ```
    #[inline]
    pub fn has_relative_path(&self) -> bool {
        self.path.first().map_or(true, |s| !s.is_empty())
    }

    /// Removes dot segments from the path in place, per
    /// [Section 5.2.4 of RFC 3986][rds].
    ///
    /// [rds]: https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.4
    ///
    /// Segments are treated as opaque decoded strings; percent
    /// escapes were already resolved by the parse. A `..` never pops
    /// the leading empty segment that marks an absolute path.
    ///
    /// # Examples
    ///
    /// ```
    /// use decoded_uri::Uri;
    ///
    /// let mut uri = Uri::parse("/a/b/c/./../../g")?;
    /// uri.normalize_path();
    /// assert_eq!(uri.path(), ["", "a", "g"]);
    ///
    /// let mut uri = Uri::parse("mid/content=5/../6")?;
    /// uri.normalize_path();
    /// assert_eq!(uri.path(), ["mid", "6"]);
    /// # Ok::<_, decoded_uri::ParseError>(())
    /// ```
    pub fn normalize_path(&mut self) {
        normalizer::remove_dot_segments(&mut self.path);
    }
}

impl FromStr for Uri {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Uri, ParseError> {
        Uri::parse(s)
    }
}

impl PartialEq for Uri {
    fn eq(&self, other: &Self) -> bool {
        self.scheme() == other.scheme()
            && self.userinfo == other.userinfo
            && self.host() == other.host()
            && self.port == other.port
            && self.path == other.path
            && self.query == other.query
            && self.fragment == other.fragment
    }
}

impl Eq for Uri {}

impl hash::Hash for Uri {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        // Scheme and host compare case-insensitively, so their case
        // must not reach the hasher.
        self.scheme.to_ascii_lowercase().hash(state);
        self.userinfo.hash(state);
        self.host.to_ascii_lowercase().hash(state);
        self.port.hash(state);
        self.path.hash(state);
        self.query.hash(state);
        self.fragment.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_uris() {
        let u = Uri::parse("http://127.0.0.1:8080/").unwrap();
        assert_eq!(u, u);
        let v = Uri::parse("http://127.0.0.1:8087/").unwrap();
        assert_ne!(u, v);
    }

    #[test]
    fn hashes_consistently_with_eq() {
        use core::hash::{Hash, Hasher};
        use std::collections::hash_map::DefaultHasher;

        fn calculate_hash<T: Hash>(t: &T) -> u64 {
            let mut s = DefaultHasher::new();
            t.hash(&mut s);
            s.finish()
        }

        let u = Uri::parse("HTTP://EXAMPLE.com/a").unwrap();
        let v = Uri::parse("http://example.COM/a").unwrap();
        assert_eq!(u, v);
        assert_eq!(calculate_hash(&u), calculate_hash(&v));
    }

    #[test]
    fn parses_via_from_str() {
        let u: Uri = "http://example.com/".parse().unwrap();
        assert!(u.scheme().eq_lowercase("http"));
        assert!("http://[".parse::<Uri>().is_err());
    }

    #[test]
    fn default_is_empty_relative_reference() {
        let u = Uri::default();
        assert!(u.is_relative_reference());
        assert!(u.has_relative_path());
        assert!(u.path().is_empty());
        assert_eq!(u.port(), None);
    }
}
