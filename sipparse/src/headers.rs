//! SIP Headers types
//!
//! The module provide the [`Headers`] struct that contains
//! an list of [`Header`] and a can be used to manipulating
//! SIP headers, and one type per header with a dedicated grammar.

mod accept;
mod accept_encoding;
mod accept_language;
mod alert_info;
mod allow;
mod allow_events;
mod authentication_info;
mod authorization;
mod call_id;
mod call_info;
mod contact;
mod content_disposition;
mod content_encoding;
mod content_language;
mod content_length;
mod content_type;
mod cseq;
mod date;
mod error_info;
mod event;
mod expires;
mod from;
mod header;
mod in_reply_to;
mod max_forwards;
mod mime_version;
mod min_expires;
mod organization;
mod priority;
mod proxy_authenticate;
mod proxy_authorization;
mod proxy_require;
mod record_route;
mod reply_to;
mod require;
mod retry_after;
mod route;
mod server;
mod subject;
mod supported;
mod timestamp;
mod to;
mod unsupported;
mod user_agent;
mod via;
mod warning;
mod www_authenticate;

pub mod registry;

pub use accept::Accept;
pub use accept_encoding::*;
pub use accept_language::*;
pub use alert_info::*;
pub use allow::Allow;
pub use allow_events::AllowEvents;
pub use authentication_info::AuthenticationInfo;
pub use authorization::Authorization;
pub use call_id::CallId;
pub use call_info::CallInfo;
pub use contact::*;
pub use content_disposition::ContentDisposition;
pub use content_encoding::ContentEncoding;
pub use content_language::ContentLanguage;
pub use content_length::ContentLength;
pub use content_type::ContentType;
pub use cseq::CSeq;
pub use date::Date;
pub use error_info::ErrorInfo;
pub use event::Event;
pub use expires::Expires;
pub use from::From;
pub use header::*;
pub use in_reply_to::InReplyTo;
pub use max_forwards::MaxForwards;
pub use mime_version::MimeVersion;
pub use min_expires::MinExpires;
pub use organization::Organization;
pub use priority::Priority;
pub use proxy_authenticate::ProxyAuthenticate;
pub use proxy_authorization::ProxyAuthorization;
pub use proxy_require::ProxyRequire;
pub use record_route::RecordRoute;
pub use reply_to::ReplyTo;
pub use require::Require;
pub use retry_after::RetryAfter;
pub use route::Route;
pub use server::Server;
pub use subject::Subject;
pub use supported::Supported;
pub use timestamp::Timestamp;
pub use to::To;
pub use unsupported::Unsupported;
pub use user_agent::UserAgent;
pub use via::*;
pub use warning::*;
pub use www_authenticate::WWWAuthenticate;

use std::fmt;
use std::ops::Index;

use crate::error::Result;
use crate::parser::ParseCtx;

/// The tag parameter that is used normaly in [`From`] and [`To`] headers.
const TAG_PARAM: &str = "tag";

/// The q parameter that is used normaly in [`Contact`], [`AcceptEncoding`] and
/// [`AcceptLanguage`] headers.
const Q_PARAM: &str = "q";

/// The expires parameter that is used normaly in [`Contact`] headers.
const EXPIRES_PARAM: &str = "expires";

/// Trait to parse SIP headers.
///
/// This trait defines how a specific SIP header type can be parsed from a byte
/// slice, as typically received in SIP messages.
pub trait SipHeaderParse: Sized {
    /// The full name of the SIP header (e.g., `"Contact"`).
    const NAME: &'static str;
    /// The abbreviated name of the SIP header, if any (e.g., `"f"` for
    /// `"From"`).
    const SHORT_NAME: Option<&'static str> = None;

    /// Parses this header's value from the given `ParseCtx`.
    ///
    /// The cursor is right after the colon and the spaces that follow it.
    fn parse(parser: &mut ParseCtx) -> Result<Self>;

    /// Parses this header value from a raw byte slice.
    ///
    /// Trailing text after the value is an error.
    fn from_bytes(src: &[u8]) -> Result<Self> {
        let mut parser = ParseCtx::new(src);
        parser.ws();
        let header = Self::parse(&mut parser)?;
        parser.expect_end()?;

        Ok(header)
    }
}

/// A coolection of SIP Headers.
///
/// A wrapper over Vec<[`Header`]> that contains the header
/// list in wire order.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::Headers;
/// # use sipparse::headers::Header;
/// # use sipparse::headers::ContentLength;
/// let mut headers = Headers::new();
/// headers.push(Header::ContentLength(ContentLength::new(10)));
///
/// assert_eq!(headers.len(), 1);
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Headers(Vec<Header>);

impl Headers {
    /// Create a new empty collection of headers.
    #[inline]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Constructs a new, empty  collection of `Headers` with at least the
    /// specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Appends an header.
    #[inline]
    pub fn push(&mut self, hdr: Header) {
        self.0.push(hdr);
    }

    /// Extends the headers collection with the contents of an
    /// another.
    pub fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Header>,
    {
        self.0.extend(iter);
    }

    /// Returns an iterator over headers.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.0.iter()
    }

    /// Returns an iterator over headers.
    #[inline]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Header> {
        self.0.iter_mut()
    }

    /// Returns the first header named `name`.
    ///
    /// Long and compact names are equivalent for registered headers:
    ///
    /// ```
    /// let msg = sipparse::parse_message(b"SIP/2.0 200 OK\r\nf: <sip:a@b>\r\n\r\n")
    ///     .unwrap()
    ///     .unwrap();
    ///
    /// assert!(msg.headers().get("From").is_some());
    /// ```
    pub fn get(&self, name: &str) -> Option<&Header> {
        self.get_all(name).next()
    }

    /// Returns all the headers named `name`, in wire order.
    pub fn get_all<'a, 'n>(&'a self, name: &'n str) -> impl Iterator<Item = &'a Header> + use<'a, 'n> {
        let kind = registry::HeaderRegistry::global().lookup(name).map(|entry| entry.kind);

        self.0.iter().filter(move |hdr| match (kind, hdr) {
            (Some(kind), hdr) => hdr.kind() == Some(kind),
            (None, Header::Extension(ext)) => ext.name().eq_ignore_ascii_case(name),
            (None, _) => false,
        })
    }

    /// Searches for an header that satisfies a predicate.
    pub fn find<F>(&self, f: F) -> Option<&Header>
    where
        F: FnMut(&&Header) -> bool,
    {
        self.0.iter().find(f)
    }

    /// Removes all the headers named `name`.
    pub fn remove(&mut self, name: &str) {
        let kind = registry::HeaderRegistry::global().lookup(name).map(|entry| entry.kind);

        self.0.retain(|hdr| match (kind, hdr) {
            (Some(kind), hdr) => hdr.kind() != Some(kind),
            (None, Header::Extension(ext)) => !ext.name().eq_ignore_ascii_case(name),
            (None, _) => true,
        });
    }

    /// Returns the number of headers in the collection.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the collection contains no headers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for Headers {
    type Item = Header;
    type IntoIter = std::vec::IntoIter<Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a Header;
    type IntoIter = std::slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Header> for Headers {
    fn from_iter<I: IntoIterator<Item = Header>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Index<usize> for Headers {
    type Output = Header;

    fn index(&self, index: usize) -> &Header {
        &self.0[index]
    }
}

impl std::convert::From<Vec<Header>> for Headers {
    fn from(headers: Vec<Header>) -> Self {
        Self(headers)
    }
}

impl fmt::Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hdr in &self.0 {
            write!(f, "{hdr}\r\n")?;
        }
        Ok(())
    }
}
