//! Borrowed views of URI components with component-specific comparison.

use crate::encoding::table;
use alloc::string::String;
use ref_cast::RefCast;

const ASCII_CASE_MASK: u8 = 0b010_0000;

/// The [scheme] component of a URI reference.
///
/// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
///
/// # Comparison
///
/// `Scheme`s are compared case-insensitively. You should do a
/// case-insensitive comparison if the scheme specification allows both
/// letter cases in the scheme name.
///
/// # Examples
///
/// ```
/// use decoded_uri::{component::Scheme, Uri};
///
/// let uri = Uri::parse("HTTP://example.com/")?;
///
/// // Case-insensitive comparison.
/// assert_eq!(uri.scheme(), Scheme::new_or_panic("http"));
/// // Case-sensitive comparison.
/// assert_eq!(uri.scheme().as_str(), "HTTP");
/// # Ok::<_, decoded_uri::ParseError>(())
/// ```
#[derive(RefCast)]
#[repr(transparent)]
pub struct Scheme {
    inner: str,
}

impl Scheme {
    /// Converts a string slice to a `Scheme`, returning `None` if the
    /// string is not a valid scheme name according to
    /// [Section 3.1 of RFC 3986][scheme].
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
    #[must_use]
    pub fn new(s: &str) -> Option<&Scheme> {
        if matches!(s.as_bytes(), [first, rem @ ..]
            if first.is_ascii_alphabetic() && table::SCHEME.validate(rem))
        {
            Some(Scheme::ref_cast(s))
        } else {
            None
        }
    }

    /// Converts a string slice to a `Scheme`.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid scheme name. For a
    /// non-panicking variant, use [`new`](Self::new).
    #[must_use]
    pub fn new_or_panic(s: &str) -> &Scheme {
        match Self::new(s) {
            Some(scheme) => scheme,
            None => panic!("invalid scheme"),
        }
    }

    /// Wraps possibly-empty scheme text without validation.
    pub(crate) fn new_validated(s: &str) -> &Scheme {
        Scheme::ref_cast(s)
    }

    /// Returns the scheme as a string slice in its original case.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns `true` if no scheme is present.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the scheme as a string in lower case.
    #[must_use]
    pub fn to_lowercase(&self) -> String {
        self.inner.to_ascii_lowercase()
    }

    /// Checks if the scheme equals case-insensitively with a lowercase
    /// string.
    ///
    /// This method is slightly faster than [`str::eq_ignore_ascii_case`]
    /// but will always return `false` if there is any uppercase letter
    /// in the given string.
    pub fn eq_lowercase(&self, other: &str) -> bool {
        let (a, b) = (self.inner.as_bytes(), other.as_bytes());
        // The only characters allowed in a scheme are alphabets, digits,
        // "+", "-" and ".", the ASCII codes of which allow us to simply
        // set the sixth bit and compare.
        a.len() == b.len() && (0..a.len()).all(|i| a[i] | ASCII_CASE_MASK == b[i])
    }
}

impl PartialEq for Scheme {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }
}

impl Eq for Scheme {}

/// The decoded [host] subcomponent of a URI reference.
///
/// [host]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
///
/// The text is fully percent-decoded for registered names; IP literals
/// keep their surrounding brackets verbatim.
///
/// # Comparison
///
/// `Host`s are compared case-insensitively, as host names are
/// case-insensitive per [Section 3.2.2 of RFC 3986][host].
#[derive(RefCast)]
#[repr(transparent)]
pub struct Host {
    inner: str,
}

impl Host {
    /// Wraps decoded host text.
    #[inline]
    #[must_use]
    pub fn new(s: &str) -> &Host {
        Host::ref_cast(s)
    }

    /// Returns the host as a string slice in its original case.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns `true` if the host is empty or absent.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl PartialEq for Host {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }
}

impl Eq for Host {}
