//! Byte membership tables from RFC 3986.
//!
//! The predefined table constants in this module are documented with
//! the ABNF notation of [RFC 2234].
//!
//! [RFC 2234]: https://datatracker.ietf.org/doc/html/rfc2234/

/// A table determining the bytes allowed in a URI component.
///
/// Percent-encoded octets are never listed in a table; the `%` escape
/// syntax is handled by the decoding routines themselves.
#[derive(Clone, Copy)]
pub(crate) struct Table {
    arr: [u8; 256],
}

impl Table {
    /// Generates a table that only allows the given bytes.
    pub(crate) const fn gen(mut bytes: &[u8]) -> Table {
        let mut arr = [0; 256];
        while let [cur, rem @ ..] = bytes {
            arr[*cur as usize] = 1;
            bytes = rem;
        }
        Table { arr }
    }

    /// Generates a table that allows the inclusive range `lo..=hi`.
    pub(crate) const fn range(lo: u8, hi: u8) -> Table {
        let mut arr = [0; 256];
        let mut i = lo as usize;
        while i <= hi as usize {
            arr[i] = 1;
            i += 1;
        }
        Table { arr }
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the bytes allowed either
    /// by `self` or by `other`.
    pub(crate) const fn or(mut self, other: &Table) -> Table {
        let mut i = 0;
        while i < 256 {
            self.arr[i] |= other.arr[i];
            i += 1;
        }
        self
    }

    /// Returns `true` if the given byte is allowed by the table.
    #[inline]
    pub(crate) const fn allows(&self, x: u8) -> bool {
        self.arr[x as usize] != 0
    }

    /// Validates the given byte sequence with the table.
    pub(crate) const fn validate(&self, s: &[u8]) -> bool {
        let mut i = 0;
        while i < s.len() {
            if !self.allows(s[i]) {
                return false;
            }
            i += 1;
        }
        true
    }
}

const fn gen(bytes: &[u8]) -> Table {
    Table::gen(bytes)
}

/// ALPHA = A-Z / a-z
pub(crate) const ALPHA: &Table = &Table::range(b'A', b'Z').or(&Table::range(b'a', b'z'));

/// DIGIT = 0-9
pub(crate) const DIGIT: &Table = &Table::range(b'0', b'9');

/// HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"
///                / "a" / "b" / "c" / "d" / "e" / "f"
pub(crate) const HEXDIG: &Table = &DIGIT.or(&Table::range(b'A', b'F')).or(&Table::range(b'a', b'f'));

/// sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
///            / "*" / "+" / "," / ";" / "="
pub(crate) const SUB_DELIMS: &Table = &gen(b"!$&'()*+,;=");

/// unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
pub(crate) const UNRESERVED: &Table = &ALPHA.or(DIGIT).or(&gen(b"-._~"));

/// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
///
/// This table covers the characters after the first; the first is
/// checked against `ALPHA` on its own.
pub(crate) const SCHEME: &Table = &ALPHA.or(DIGIT).or(&gen(b"+-."));

/// pchar = unreserved / pct-encoded / sub-delims / ":" / "@"
pub(crate) const PCHAR: &Table = &UNRESERVED.or(SUB_DELIMS).or(&gen(b":@"));

/// userinfo = *( unreserved / pct-encoded / sub-delims / ":" )
pub(crate) const USERINFO: &Table = &UNRESERVED.or(SUB_DELIMS).or(&gen(b":"));

/// reg-name = *( unreserved / pct-encoded / sub-delims )
pub(crate) const REG_NAME: &Table = &UNRESERVED.or(SUB_DELIMS);

/// IPvFuture = "v" 1\*HEXDIG "." 1\*( unreserved / sub-delims / ":" )
///
/// This table covers the part after the dot.
pub(crate) const IPV_FUTURE: &Table = &UNRESERVED.or(SUB_DELIMS).or(&gen(b":"));

/// query = *( pchar / "/" / "?" )
pub(crate) const QUERY: &Table = &PCHAR.or(&gen(b"/?"));

/// fragment = *( pchar / "/" / "?" )
pub(crate) const FRAGMENT: &Table = QUERY;
