use crate::{
    component::Scheme,
    log::{debug, trace},
    pct_enc,
};
use alloc::string::{String, ToString};

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseErrorKind {
    /// The port contains a character other than an ASCII digit.
    ///
    /// The error index points to the first such character.
    InvalidPort,
    /// The port is made of ASCII digits but does not fit in a `u16`.
    ///
    /// The error index points to the first byte of the port.
    PortOverflow,
}

/// An error occurred when parsing a URI.
///
/// Parsing is forgiving and almost never fails: malformed input simply
/// leaves components empty. The exception is an explicit port that cannot
/// be read as a number.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParseError {
    pub(crate) index: usize,
    pub(crate) kind: ParseErrorKind,
}

impl ParseError {
    /// Returns the index at which the error occurred.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

#[cfg(feature = "impl-error")]
impl core::error::Error for ParseError {}

type Result<T> = core::result::Result<T, ParseError>;

/// Returns immediately with an error.
macro_rules! err {
    ($index:expr, $kind:ident) => {
        return Err(ParseError {
            index: $index,
            kind: ParseErrorKind::$kind,
        })
    };
}

/// Components of a parsed URI.
#[derive(Clone, Debug, Default)]
pub(crate) struct Parts {
    pub scheme: String,
    pub userinfo: String,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: String,
    pub fragment: String,
}

pub(crate) fn parse(s: &str) -> Result<Parts> {
    let mut parser = Parser {
        reader: Reader::new(s),
        out: Parts::default(),
    };
    parser.parse_from_scheme()?;
    trace!("parsed {s:?} into {:?}", parser.out);
    Ok(parser.out)
}

/// A set of ASCII bytes at which reading stops.
#[derive(Clone, Copy)]
struct Delims(u128);

impl Delims {
    const fn new(mut bytes: &[u8]) -> Self {
        let mut set = 0;
        while let [cur, rem @ ..] = bytes {
            assert!(cur.is_ascii(), "delimiter must be ASCII");
            set |= 1u128 << *cur;
            bytes = rem;
        }
        Self(set)
    }

    #[inline]
    const fn contains(self, x: u8) -> bool {
        x < 128 && self.0 & (1u128 << x) != 0
    }
}

const SCHEME_END: Delims = Delims::new(b":?#/");
const AUTHORITY_END: Delims = Delims::new(b"/?#");
const IP_LITERAL_END: Delims = Delims::new(b"]");
const HOST_END: Delims = Delims::new(b":");
const PATH_END: Delims = Delims::new(b"?#");
const QUERY_END: Delims = Delims::new(b"#");

/// A cursor over a string slice.
///
/// # Invariants
///
/// `pos <= len` and `pos` is on a char boundary. `pos` only ever stops
/// right before an ASCII delimiter or at either end of the input,
/// so slicing at it is always valid.
struct Reader<'a> {
    s: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(s: &'a str) -> Self {
        Reader { s, pos: 0 }
    }

    fn len(&self) -> usize {
        self.s.len()
    }

    fn has_remaining(&self) -> bool {
        self.pos < self.len()
    }

    fn peek(&self, i: usize) -> Option<u8> {
        self.s.as_bytes().get(self.pos + i).copied()
    }

    /// Moves back to the start of the input.
    fn rewind(&mut self) {
        self.pos = 0;
    }

    fn read_str(&mut self, s: &str) -> bool {
        if self.s.as_bytes()[self.pos..].starts_with(s.as_bytes()) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    /// Reads up to, but not including, the first delimiter or the end.
    fn read_until(&mut self, delims: Delims) -> &'a str {
        let start = self.pos;
        let end = self.s.as_bytes()[start..]
            .iter()
            .position(|&x| delims.contains(x))
            .map_or(self.len(), |i| start + i);
        self.pos = end;
        &self.s[start..end]
    }

    fn read_to_end(&mut self) -> &'a str {
        let start = self.pos;
        self.pos = self.len();
        &self.s[start..]
    }
}

/// Forgiving URI parser.
///
/// Scans the input once from left to right. The only step back is taken
/// when a leading run of characters turns out not to be a scheme, in which
/// case the whole input is parsed again as a path.
///
/// Components are only written once the phase that produces them
/// completes, so an early return leaves the rest at their defaults.
struct Parser<'a> {
    reader: Reader<'a>,
    out: Parts,
}

impl Parser<'_> {
    fn parse_from_scheme(&mut self) -> Result<()> {
        let r = &mut self.reader;
        if !r.has_remaining() {
            return Ok(());
        }

        if let Some(b'/' | b'.' | b'?' | b'#') = r.peek(0) {
            self.parse_full_path();
            return Ok(());
        }

        let scheme = r.read_until(SCHEME_END);

        if r.read_str(":") {
            if !r.has_remaining() {
                return Ok(());
            }
            self.out.scheme = scheme.to_ascii_lowercase();

            // A single slash is left for the path.
            if r.read_str("//") {
                self.parse_authority()?;
            }
        } else {
            // Scheme chars are retried as part of the path.
            r.rewind();
        }
        self.parse_full_path();
        Ok(())
    }

    fn parse_authority(&mut self) -> Result<()> {
        let start = self.reader.pos;
        let authority = self.reader.read_until(AUTHORITY_END);

        // FIXME: With several "@"s, only the segment right before the last one
        // is kept as userinfo and everything before it is dropped.
        let (userinfo, host_port, host_start) = match authority.rfind('@') {
            Some(i) => {
                let userinfo = authority[..i].rsplit('@').next().unwrap_or_default();
                (userinfo, &authority[i + 1..], start + i + 1)
            }
            None => ("", authority, start),
        };

        self.parse_host_and_port(host_port, host_start)?;
        self.out.userinfo = userinfo.to_string();
        Ok(())
    }

    /// Parses host and port out of `s`, which starts at `offset` in the input.
    fn parse_host_and_port(&mut self, s: &str, offset: usize) -> Result<()> {
        let mut r = Reader::new(s);
        if !r.has_remaining() {
            return Ok(());
        }

        let host = if r.read_str("[") {
            let host = r.read_until(IP_LITERAL_END);
            if !r.read_str("]") {
                // Unterminated IP literal.
                return Ok(());
            }
            host
        } else {
            r.read_until(HOST_END)
        };

        self.out.port = if r.read_str(":") && r.has_remaining() {
            let port_start = offset + r.pos;
            parse_port(r.read_to_end(), port_start)?
        } else {
            Scheme::new(&self.out.scheme).default_port()
        };
        self.out.host = host.to_ascii_lowercase();
        Ok(())
    }

    fn parse_full_path(&mut self) {
        let r = &mut self.reader;
        if !r.has_remaining() {
            return;
        }

        if !matches!(r.peek(0), Some(b'?' | b'#')) {
            let path = r.read_until(PATH_END);
            self.out.path = pct_enc::decode_lossy(path).into_owned();
        }

        if r.read_str("?") {
            self.out.query = r.read_until(QUERY_END).to_string();
        }

        if r.read_str("#") {
            self.out.fragment = pct_enc::decode_lossy(r.read_to_end()).into_owned();
        }
    }
}

/// Parses a non-empty port that starts at `index` in the input.
fn parse_port(s: &str, index: usize) -> Result<u16> {
    if let Some(i) = s.bytes().position(|x| !x.is_ascii_digit()) {
        debug!("rejecting port {s:?}: not a decimal number");
        err!(index + i, InvalidPort);
    }

    match s.parse() {
        Ok(port) => Ok(port),
        Err(_) => {
            debug!("rejecting port {s:?}: out of range");
            err!(index, PortOverflow);
        }
    }
}
