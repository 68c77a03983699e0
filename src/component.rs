//! URI components with behavior beyond plain strings.

use crate::pct_enc;
use alloc::{borrow::Cow, string::String, vec::Vec};
use core::{hash, iter::FusedIterator};
use ref_cast::{ref_cast_custom, RefCastCustom};

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// A scheme component.
///
/// Schemes parsed by [`Uri`] are always lower-cased. No validation is
/// performed on the characters of a scheme.
///
/// # Comparison
///
/// `Scheme`s are compared case-insensitively.
///
/// # Examples
///
/// ```
/// use lenient_uri::{component::Scheme, Uri};
///
/// const SCHEME_RTSP: &Scheme = Scheme::new("RTSP");
///
/// let uri = Uri::parse("rtsp://camera.local/stream")?;
/// assert_eq!(uri.scheme(), SCHEME_RTSP);
/// assert_eq!(uri.scheme().as_str(), "rtsp");
/// assert_eq!(uri.port(), 554);
/// # Ok::<_, lenient_uri::ParseError>(())
/// ```
///
/// [`Uri`]: crate::Uri
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Scheme {
    inner: str,
}

/// Well-known schemes and their default ports.
const DEFAULT_PORTS: &[(&str, u16)] = &[
    ("rtmp", 1935),
    ("http", 80),
    ("ws", 80),
    ("https", 443),
    ("wss", 443),
    ("rtsp", 554),
];

impl Scheme {
    /// Converts a string slice to `&Scheme`.
    #[ref_cast_custom]
    #[inline]
    #[must_use]
    pub const fn new(s: &str) -> &Scheme;

    /// Returns the scheme component as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Checks whether the scheme is empty, that is, absent from the URI.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the port assumed when a URI with this scheme has no explicit port.
    ///
    /// | Scheme | Port |
    /// |---|---|
    /// | `rtmp` | 1935 |
    /// | `http`, `ws` | 80 |
    /// | `https`, `wss` | 443 |
    /// | `rtsp` | 554 |
    ///
    /// Any other scheme, including an empty one, yields `0`.
    ///
    /// ```
    /// use lenient_uri::component::Scheme;
    ///
    /// assert_eq!(Scheme::new("wss").default_port(), 443);
    /// assert_eq!(Scheme::new("ftp").default_port(), 0);
    /// ```
    #[must_use]
    pub fn default_port(&self) -> u16 {
        DEFAULT_PORTS
            .iter()
            .find(|(name, _)| self.inner.eq_ignore_ascii_case(name))
            .map_or(0, |&(_, port)| port)
    }
}

impl PartialEq for Scheme {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }
}

impl Eq for Scheme {}

impl hash::Hash for Scheme {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        for x in self.inner.bytes() {
            state.write_u8(x.to_ascii_lowercase());
        }
        state.write_u8(0xff);
    }
}

impl AsRef<str> for Scheme {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Default for &Scheme {
    #[inline]
    fn default() -> Self {
        Scheme::new("")
    }
}

/// A raw query component.
///
/// The query is kept exactly as it appears in the URI. Its parameters are
/// decoded every time they are requested, see [`params`](Self::params).
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Query {
    inner: str,
}

impl Query {
    /// Converts a string slice to `&Query`.
    ///
    /// ```
    /// use lenient_uri::component::Query;
    ///
    /// let q = Query::new("name=a+b&flag");
    /// assert_eq!(
    ///     q.to_pairs(),
    ///     [("name".to_owned(), "a b".to_owned()), ("flag".to_owned(), String::new())]
    /// );
    /// ```
    #[ref_cast_custom]
    #[inline]
    #[must_use]
    pub const fn new(s: &str) -> &Query;

    /// Returns the query component as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Checks whether the query is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over the decoded `name=value` pairs of the query.
    ///
    /// Pairs are separated by `&`. The name runs to the first `=` and the
    /// value runs from there to the next `&`; a pair without `=` has an empty
    /// value. In both, `+` is turned into a space before percent-decoding
    /// with [`pct_enc::decode_lossy`] semantics.
    ///
    /// Pairs are yielded in order of appearance and repeated names are kept.
    #[inline]
    pub fn params(&self) -> QueryParams<'_> {
        QueryParams {
            source: &self.inner,
        }
    }

    /// Collects the decoded pairs into a vector of owned strings.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.params()
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect()
    }
}

impl AsRef<str> for Query {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for Query {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Query {}

impl hash::Hash for Query {
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl PartialEq<str> for Query {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &self.inner == other
    }
}

impl Default for &Query {
    #[inline]
    fn default() -> Self {
        Query::new("")
    }
}

/// An iterator over the decoded parameters of a query.
///
/// This struct is created by [`Query::params`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct QueryParams<'a> {
    source: &'a str,
}

impl<'a> Iterator for QueryParams<'a> {
    type Item = (Cow<'a, str>, Cow<'a, str>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.source.is_empty() {
            return None;
        }

        let pair;
        (pair, self.source) = match self.source.split_once('&') {
            Some(split) => split,
            None => (self.source, ""),
        };

        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        Some((
            pct_enc::decode_form_lossy(name),
            pct_enc::decode_form_lossy(value),
        ))
    }
}

impl FusedIterator for QueryParams<'_> {}

#[cfg(feature = "serde")]
impl Serialize for Scheme {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl Serialize for Query {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
