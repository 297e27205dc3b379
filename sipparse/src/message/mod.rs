//! SIP Message types
//!
//! The module provide the [`SipMessage`] enum that can be an
//! [`SipMessage::Request`] or [`SipMessage::Response`] and represents a
//! parsed SIP message, along with the URI, address and parameter types
//! shared by the headers.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;

use crate::error::HeaderError;
use crate::headers::Headers;
use crate::matching::Matches;

pub mod auth;

mod address;
mod code;
mod method;
mod param;
mod uri;

pub use address::*;
pub use code::*;
pub use method::*;
pub use param::*;
pub use uri::*;

/// The `SIP/major.minor` protocol version of a start line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
}

impl Version {
    /// `SIP/2.0`
    pub const V2: Version = Version { major: 2, minor: 0 };
}

impl Default for Version {
    fn default() -> Self {
        Self::V2
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SIP/{}.{}", self.major, self.minor)
    }
}

/// The first line of a request, e.g. `INVITE sip:bob@biloxi.com SIP/2.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// The request method.
    pub method: SipMethod,
    /// The Request-URI.
    pub uri: Uri,
    /// The protocol version.
    pub version: Version,
}

impl RequestLine {
    pub fn new(method: SipMethod, uri: Uri) -> Self {
        Self {
            method,
            uri,
            version: Version::V2,
        }
    }
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.method, self.uri, self.version)
    }
}

impl Matches for RequestLine {
    fn matches(&self, template: &Self) -> bool {
        self.method.matches(&template.method) && self.uri.matches(&template.uri)
    }
}

/// The first line of a response, e.g. `SIP/2.0 180 Ringing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// The protocol version.
    pub version: Version,
    /// The status code.
    pub code: StatusCode,
    /// The reason phrase as received, may be empty.
    pub reason: Arc<str>,
}

impl StatusLine {
    pub fn new(code: StatusCode, reason: &str) -> Self {
        Self {
            version: Version::V2,
            code,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.version, self.code, self.reason)
    }
}

impl Matches for StatusLine {
    fn matches(&self, template: &Self) -> bool {
        self.code.matches(&template.code) && self.reason.matches(&template.reason)
    }
}

/// An SIP message, either Request or Response.
///
/// This enum can contain either an [`Request`] or an [`Response`], see their
/// respective documentation for more details.
#[derive(Debug, Clone)]
pub enum SipMessage {
    /// An SIP Request.
    Request(Request),
    /// An SIP Response.
    Response(Response),
}

impl SipMessage {
    /// Returns [`true`] if this message is an [`Request`] message, and [`false`]
    /// otherwise.
    pub const fn is_request(&self) -> bool {
        matches!(self, SipMessage::Request(_))
    }

    /// Returns [`true`] if this message is an [`Response`] message, and [`false`]
    /// otherwise.
    pub const fn is_response(&self) -> bool {
        matches!(self, SipMessage::Response(_))
    }

    /// Returns a reference to the [`Request`] if this is a [`SipMessage::Request`] variant.
    pub fn request(&self) -> Option<&Request> {
        if let SipMessage::Request(request) = self {
            Some(request)
        } else {
            None
        }
    }

    /// Returns a reference to the [`Response`] if this is a [`SipMessage::Response`] variant.
    pub fn response(&self) -> Option<&Response> {
        if let SipMessage::Response(response) = self {
            Some(response)
        } else {
            None
        }
    }

    /// Returns a reference to the headers of the message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let msg = sipparse::parse_message(b"SIP/2.0 200 OK\r\nExpires: 10\r\n\r\n")
    ///     .unwrap()
    ///     .unwrap();
    ///
    /// assert_eq!(msg.headers().len(), 1);
    /// ```
    pub fn headers(&self) -> &Headers {
        match self {
            SipMessage::Request(req) => &req.headers,
            SipMessage::Response(res) => &res.headers,
        }
    }

    /// Returns a mutable reference to the headers of the message.
    pub fn headers_mut(&mut self) -> &mut Headers {
        match self {
            SipMessage::Request(req) => &mut req.headers,
            SipMessage::Response(res) => &mut res.headers,
        }
    }

    /// Returns the message body, empty when there is none.
    pub fn body(&self) -> &Bytes {
        match self {
            SipMessage::Request(req) => &req.body,
            SipMessage::Response(res) => &res.body,
        }
    }

    /// Header lines that failed to parse, in order.
    pub fn header_errors(&self) -> &[HeaderError] {
        match self {
            SipMessage::Request(req) => &req.errors,
            SipMessage::Response(res) => &res.errors,
        }
    }

    /// Encodes the message to wire bytes with `CRLF` line endings.
    pub fn to_bytes(&self) -> Bytes {
        let (start_line, body) = match self {
            SipMessage::Request(req) => (req.req_line.to_string(), &req.body),
            SipMessage::Response(res) => (res.status_line.to_string(), &res.body),
        };
        let mut buf = Vec::with_capacity(start_line.len() + 512 + body.len());

        buf.extend_from_slice(start_line.as_bytes());
        buf.extend_from_slice(b"\r\n");
        for header in self.headers().iter() {
            buf.extend_from_slice(header.to_string().as_bytes());
            buf.extend_from_slice(b"\r\n");
        }
        buf.extend_from_slice(b"\r\n");
        buf.extend_from_slice(body);

        Bytes::from(buf)
    }
}

impl fmt::Display for SipMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_bytes()))
    }
}

impl Matches for SipMessage {
    /// Start lines must match and every template header must match one of
    /// the message headers.
    fn matches(&self, template: &Self) -> bool {
        let lines = match (self, template) {
            (SipMessage::Request(req), SipMessage::Request(t)) => req.req_line.matches(&t.req_line),
            (SipMessage::Response(res), SipMessage::Response(t)) => res.status_line.matches(&t.status_line),
            _ => false,
        };

        lines
            && template
                .headers()
                .iter()
                .all(|t| self.headers().iter().any(|h| h.matches(t)))
    }
}

impl From<Request> for SipMessage {
    fn from(request: Request) -> Self {
        SipMessage::Request(request)
    }
}

impl From<Response> for SipMessage {
    fn from(response: Response) -> Self {
        SipMessage::Response(response)
    }
}

/// A parsed SIP request.
#[derive(Debug, Clone)]
pub struct Request {
    /// The request line.
    pub req_line: RequestLine,
    /// The headers in wire order.
    pub headers: Headers,
    /// The body, at most `Content-Length` bytes.
    pub body: Bytes,
    pub(crate) errors: Vec<HeaderError>,
}

impl Request {
    /// Creates a request without headers and body.
    pub fn new(method: SipMethod, uri: Uri) -> Self {
        Self::with_headers(RequestLine::new(method, uri), Headers::new())
    }

    pub fn with_headers(req_line: RequestLine, headers: Headers) -> Self {
        Self {
            req_line,
            headers,
            body: Bytes::new(),
            errors: Vec::new(),
        }
    }

    pub fn method(&self) -> &SipMethod {
        &self.req_line.method
    }

    pub fn uri(&self) -> &Uri {
        &self.req_line.uri
    }
}

/// A parsed SIP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The status line.
    pub status_line: StatusLine,
    /// The headers in wire order.
    pub headers: Headers,
    /// The body, at most `Content-Length` bytes.
    pub body: Bytes,
    pub(crate) errors: Vec<HeaderError>,
}

impl Response {
    /// Creates a response without headers and body.
    pub fn new(status_line: StatusLine) -> Self {
        Self::with_headers(status_line, Headers::new())
    }

    pub fn with_headers(status_line: StatusLine, headers: Headers) -> Self {
        Self {
            status_line,
            headers,
            body: Bytes::new(),
            errors: Vec::new(),
        }
    }

    pub fn code(&self) -> StatusCode {
        self.status_line.code
    }

    pub fn reason(&self) -> &str {
        &self.status_line.reason
    }
}
