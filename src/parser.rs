use crate::{
    component::Scheme,
    encoding::{
        decode,
        table::{FRAGMENT, HEXDIG, IPV_FUTURE, PCHAR, QUERY, REG_NAME, USERINFO},
        OctetDecoder,
    },
    error::{err, ParseErrorKind, Result},
    Uri,
};
use alloc::string::{String, ToString};

pub(crate) fn parse(input: &str) -> Result<Uri> {
    let mut parser = Parser {
        input,
        out: Uri::default(),
    };
    parser.parse_reference()?;
    Ok(parser.out)
}

/// URI reference parser.
///
/// All indexes passed between methods are byte indexes into `input`,
/// always on ASCII boundaries since every delimiter is ASCII.
struct Parser<'a> {
    input: &'a str,
    out: Uri,
}

/// States of the host-and-port scan.
///
/// `Ipv6` copies the literal verbatim with no validation beyond
/// locating the closing bracket; `open` is the index of `[`.
#[derive(Clone, Copy)]
enum HostState {
    Start,
    RegName,
    RegNameOctet { dec: OctetDecoder, at: usize },
    IpLiteral { open: usize },
    Ipv6 { open: usize },
    IpvFutureVersion { open: usize, seen_digit: bool },
    IpvFutureAddr { open: usize, seen_char: bool },
    AfterIpLiteral,
}

impl Parser<'_> {
    fn parse_reference(&mut self) -> Result<()> {
        let input = self.input;
        let len = input.len();

        // The scheme delimiter is only searched for up to the first
        // slash, so a colon later in the reference (in a path segment,
        // userinfo, or an IP literal) is not mistaken for it.
        let first_slash = input.find('/').unwrap_or(len);
        let hier_start = match input[..first_slash].find(':') {
            Some(colon) => {
                self.parse_scheme(colon)?;
                colon + 1
            }
            None => 0,
        };

        let tail_start = input[hier_start..]
            .find(|c| c == '?' || c == '#')
            .map_or(len, |i| hier_start + i);

        let (path_start, path_end) = if input[hier_start..tail_start].starts_with("//") {
            let auth_start = hier_start + 2;
            let auth_end = input[auth_start..tail_start]
                .find('/')
                .map_or(tail_start, |i| auth_start + i);
            self.parse_authority(auth_start, auth_end)?;
            (auth_end, tail_start)
        } else {
            (hier_start, tail_start)
        };
        self.parse_path(path_start, path_end)?;

        self.parse_query_fragment(tail_start)
    }

    fn parse_scheme(&mut self, end: usize) -> Result<()> {
        match Scheme::new(&self.input[..end]) {
            Some(scheme) => self.out.scheme = scheme.as_str().to_string(),
            None => err!(0, InvalidScheme),
        }
        Ok(())
    }

    fn parse_authority(&mut self, start: usize, end: usize) -> Result<()> {
        let host_start = match self.input[start..end].find('@') {
            Some(i) => {
                let userinfo = &self.input[start..start + i];
                self.out.userinfo =
                    decode(userinfo, USERINFO, start, ParseErrorKind::InvalidUserinfo)?;
                start + i + 1
            }
            None => start,
        };
        self.parse_host_port(host_start, end)
    }

    fn parse_host_port(&mut self, start: usize, end: usize) -> Result<()> {
        let bytes = self.input.as_bytes();
        let mut host = String::new();
        let mut state = HostState::Start;
        let mut port_start = None;

        let mut i = start;
        while i < end {
            let x = bytes[i];
            state = match state {
                HostState::Start => {
                    if x == b'[' {
                        i += 1;
                        HostState::IpLiteral { open: i - 1 }
                    } else {
                        HostState::RegName
                    }
                }
                HostState::RegName => {
                    let next = if x == b'%' {
                        HostState::RegNameOctet {
                            dec: OctetDecoder::new(),
                            at: i,
                        }
                    } else if x == b':' {
                        port_start = Some(i + 1);
                        break;
                    } else if REG_NAME.allows(x) {
                        host.push(x as char);
                        HostState::RegName
                    } else {
                        err!(i, InvalidHost)
                    };
                    i += 1;
                    next
                }
                HostState::RegNameOctet { mut dec, at } => {
                    if !dec.feed(x) {
                        err!(at, InvalidPercentEncoding);
                    }
                    i += 1;
                    if dec.done() {
                        host.push(dec.octet() as char);
                        HostState::RegName
                    } else {
                        HostState::RegNameOctet { dec, at }
                    }
                }
                HostState::IpLiteral { open } => {
                    if x == b'v' {
                        i += 1;
                        HostState::IpvFutureVersion {
                            open,
                            seen_digit: false,
                        }
                    } else {
                        HostState::Ipv6 { open }
                    }
                }
                HostState::Ipv6 { open } => {
                    let next = if x == b']' {
                        host.push_str(&self.input[open..=i]);
                        HostState::AfterIpLiteral
                    } else {
                        HostState::Ipv6 { open }
                    };
                    i += 1;
                    next
                }
                HostState::IpvFutureVersion { open, seen_digit } => {
                    let next = if x == b'.' {
                        if !seen_digit {
                            err!(i, InvalidHostLiteral);
                        }
                        HostState::IpvFutureAddr {
                            open,
                            seen_char: false,
                        }
                    } else if HEXDIG.allows(x) {
                        HostState::IpvFutureVersion {
                            open,
                            seen_digit: true,
                        }
                    } else {
                        err!(i, InvalidHostLiteral)
                    };
                    i += 1;
                    next
                }
                HostState::IpvFutureAddr { open, seen_char } => {
                    let next = if x == b']' {
                        if !seen_char {
                            err!(i, InvalidHostLiteral);
                        }
                        host.push_str(&self.input[open..=i]);
                        HostState::AfterIpLiteral
                    } else if IPV_FUTURE.allows(x) {
                        HostState::IpvFutureAddr {
                            open,
                            seen_char: true,
                        }
                    } else {
                        err!(i, InvalidHostLiteral)
                    };
                    i += 1;
                    next
                }
                HostState::AfterIpLiteral => {
                    if x == b':' {
                        port_start = Some(i + 1);
                        break;
                    }
                    err!(i, InvalidHostLiteral)
                }
            };
        }

        match state {
            HostState::RegNameOctet { at, .. } => err!(at, InvalidPercentEncoding),
            HostState::IpLiteral { open }
            | HostState::Ipv6 { open }
            | HostState::IpvFutureVersion { open, .. }
            | HostState::IpvFutureAddr { open, .. } => err!(open, InvalidHostLiteral),
            _ => {}
        }

        self.out.host = host;
        if let Some(port_start) = port_start {
            self.parse_port(port_start, end)?;
        }
        Ok(())
    }

    /// Parses the port as a 16-bit decimal integer, rejecting overflow
    /// as soon as the accumulated value exceeds the range.
    fn parse_port(&mut self, start: usize, end: usize) -> Result<()> {
        if start == end {
            // A lone colon with no digits carries no port.
            return Ok(());
        }
        let mut value: u32 = 0;
        for i in start..end {
            let x = self.input.as_bytes()[i];
            if !x.is_ascii_digit() {
                err!(i, InvalidPort);
            }
            value = value * 10 + u32::from(x - b'0');
            if value > u32::from(u16::MAX) {
                err!(i, InvalidPort);
            }
        }
        self.out.port = Some(value as u16);
        Ok(())
    }

    fn parse_path(&mut self, start: usize, end: usize) -> Result<()> {
        let path = &self.input[start..end];
        if path.is_empty() {
            return Ok(());
        }
        if path == "/" {
            // An absolute path with no further segments: one empty
            // segment marks the root.
            self.out.path.push(String::new());
            return Ok(());
        }
        let mut seg_start = start;
        for seg in path.split('/') {
            self.out
                .path
                .push(decode(seg, PCHAR, seg_start, ParseErrorKind::InvalidPathCharacter)?);
            seg_start += seg.len() + 1;
        }
        Ok(())
    }

    fn parse_query_fragment(&mut self, start: usize) -> Result<()> {
        let len = self.input.len();
        let hash = self.input[start..].find('#').map_or(len, |i| start + i);

        if hash < len {
            self.out.fragment = decode(
                &self.input[hash + 1..],
                FRAGMENT,
                hash + 1,
                ParseErrorKind::InvalidQueryOrFragment,
            )?;
        }
        if hash > start {
            // What remains before the hash starts with the query mark.
            self.out.query = decode(
                &self.input[start + 1..hash],
                QUERY,
                start + 1,
                ParseErrorKind::InvalidQueryOrFragment,
            )?;
        }
        Ok(())
    }
}
