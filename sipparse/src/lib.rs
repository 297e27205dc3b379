//! # sipparse
//!
//! A rust library that parses SIP messages, headers, URIs and addresses
//! into strongly typed values that encode back to wire text.
//!
//! ```
//! let msg = sipparse::parse_message(
//!     b"INVITE sip:bob@biloxi.com SIP/2.0\r\n\
//!       f: Alice <sip:alice@atlanta.com>;tag=1928301774\r\n\
//!       CSeq: 314159 INVITE\r\n\
//!       Content-Length: 0\r\n\r\n",
//! )
//! .unwrap()
//! .unwrap();
//!
//! assert!(msg.is_request());
//! assert_eq!(msg.headers().len(), 3);
//! ```

pub mod config;
pub mod headers;
pub mod matching;
pub mod message;
pub mod parser;
pub mod preprocess;

pub(crate) mod error;
pub(crate) mod macros;

pub use error::{Error, HeaderError, Result};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::headers::Header;
use crate::matching::{matches_ignore_case, Matches};
use crate::message::{Address, Host, HostPort, Parameters, RequestLine, SipMessage, StatusLine, Uri};
use crate::parser::{MessageParser, ParseCtx};

/// Represents a quality value (q-value) used in SIP
/// headers.
///
/// The value is kept in thousandths, `1` being `Q(1000)`. The q-value is
/// typically used to indicate the preference of certain SIP headers.
///
/// # Example
///
/// ```
/// use sipparse::Q;
///
/// let q_value = "0.5".parse();
/// assert_eq!(q_value, Ok(Q(500)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Copy)]
pub struct Q(pub u16);

impl Q {
    pub const MAX: Q = Q(1000);

    pub fn new(thousandths: u16) -> Self {
        Self(thousandths.min(1000))
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
#[error("invalid q-value")]
pub struct ParseQError;

impl FromStr for Q {
    type Err = ParseQError;

    /// `qvalue = ( "0" [ "." 0*3DIGIT ] ) / ( "1" [ "." 0*3("0") ] )`
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (int, frac) = s.split_once('.').unwrap_or((s, ""));

        if frac.len() > 3 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseQError);
        }
        let frac: u16 = format!("{frac:0<3}").parse().map_err(|_| ParseQError)?;

        match int {
            "0" => Ok(Q(frac)),
            "1" if frac == 0 => Ok(Q::MAX),
            _ => Err(ParseQError),
        }
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= 1000 {
            return f.write_str("1");
        }
        let frac = format!("{:03}", self.0);

        write!(f, "0.{}", frac.trim_end_matches('0').max("0"))
    }
}

/// This type reprents an MIME type that indicates an
/// content format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeType {
    pub mtype: Arc<str>,
    pub subtype: Arc<str>,
}

/// The `media-type` that appears in `Accept` and
/// `Content-Type` SIP headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    pub mimetype: MimeType,
    pub params: Parameters,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let MediaType { mimetype, params } = self;

        write!(f, "{}/{}{}", mimetype.mtype, mimetype.subtype, params)
    }
}

impl MediaType {
    /// Constructs a `MediaType` from a type and a subtype.
    pub fn new(mtype: &str, subtype: &str) -> Self {
        Self::from_parts(mtype, subtype, Parameters::new())
    }

    /// Parse `m-type SLASH m-subtype *(SEMI m-parameter)`.
    pub fn parse(parser: &mut ParseCtx) -> Result<Self> {
        let mtype = parser.parse_token()?;
        parser.ws();
        parser.must_read(b'/')?;
        parser.ws();
        let subtype = parser.parse_token()?;
        let params = crate::macros::parse_params!(parser, ParseCtx::parse_param);

        Ok(Self::from_parts(mtype, subtype, params))
    }

    /// Constructs a `MediaType` with parameters.
    pub fn from_parts(mtype: &str, subtype: &str, params: Parameters) -> Self {
        Self {
            mimetype: MimeType {
                mtype: mtype.into(),
                subtype: subtype.into(),
            },
            params,
        }
    }

    /// Returns the named parameter, e.g. `charset`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get_named(name)
    }
}

impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parser = ParseCtx::new(s);
        let media_type = Self::parse(&mut parser)?;
        parser.expect_end()?;

        Ok(media_type)
    }
}

impl Matches for MediaType {
    fn matches(&self, template: &Self) -> bool {
        matches_ignore_case(&self.mimetype.mtype, &template.mimetype.mtype)
            && matches_ignore_case(&self.mimetype.subtype, &template.mimetype.subtype)
            && self.params.matches(&template.params)
    }
}

/// Parse a SIP message with the default [`ParserConfig`].
///
/// Returns `Ok(None)` when `src` is a keep-alive.
///
/// [`ParserConfig`]: crate::config::ParserConfig
pub fn parse_message(src: &[u8]) -> Result<Option<SipMessage>> {
    MessageParser::new().parse(src)
}

/// Parse one header line, e.g. `"Expires: 1000"`.
///
/// Folded lines are accepted. Unknown names give [`Header::Extension`].
///
/// # Examples
///
/// ```
/// use sipparse::headers::Header;
///
/// let hdr = sipparse::parse_header("Allow-Events: pack1.pack2, pack3 , pack4").unwrap();
/// let events = hdr.as_allow_events().unwrap();
///
/// assert_eq!(events.iter().collect::<Vec<_>>(), ["pack1.pack2", "pack3", "pack4"]);
/// ```
pub fn parse_header(text: &str) -> Result<Header> {
    let line = preprocess::unfold_header(text);

    parser::parse_header_line(&line)
}

/// Parse a name-addr or addr-spec with its parameters.
pub fn parse_address(text: &str) -> Result<Address> {
    let mut parser = ParseCtx::new(text);
    let addr = parser.parse_address()?;

    parser.ws();
    if !parser.is_eof() {
        return Err(Error::MalformedAddress {
            text: text.into(),
            offset: parser.offset(),
            reason: "unexpected trailing text".into(),
        });
    }

    Ok(addr)
}

/// Parse a SIP, tel or generic URI, parameters included.
pub fn parse_uri(text: &str) -> Result<Uri> {
    let mut parser = ParseCtx::new(text);
    parser.ws();
    let uri = parser.parse_uri(true)?;

    parser.ws();
    if !parser.is_eof() {
        return Err(Error::MalformedUri {
            text: text.into(),
            offset: parser.offset(),
            reason: "unexpected trailing text".into(),
        });
    }

    Ok(uri)
}

/// Parse a host name, an IPv4 address or a bracketed IPv6 address.
pub fn parse_host(text: &str) -> Result<Host> {
    standalone(text, ParseCtx::parse_host)
}

/// Parse `host [":" port]`.
pub fn parse_host_port(text: &str) -> Result<HostPort> {
    standalone(text, ParseCtx::parse_host_port)
}

/// Parse a request line such as `INVITE sip:bob@biloxi.com SIP/2.0`.
pub fn parse_request_line(text: &str) -> Result<RequestLine> {
    standalone(text.trim_end_matches(['\r', '\n']), ParseCtx::parse_request_line)
}

/// Parse a status line such as `SIP/2.0 180 Ringing`.
pub fn parse_status_line(text: &str) -> Result<StatusLine> {
    standalone(text.trim_end_matches(['\r', '\n']), ParseCtx::parse_status_line)
}

fn standalone<'a, T>(text: &'a str, rule: impl FnOnce(&mut ParseCtx<'a>) -> Result<T>) -> Result<T> {
    let mut parser = ParseCtx::new(text);
    parser.ws();
    let value = rule(&mut parser)?;
    parser.expect_end()?;

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_q_value() {
        assert_eq!("0.7".parse(), Ok(Q(700)));
        assert_eq!("1".parse(), Ok(Q(1000)));
        assert_eq!("0.001".parse(), Ok(Q(1)));
        assert_eq!("1.000".parse(), Ok(Q::MAX));
        assert_eq!("1.5".parse::<Q>(), Err(ParseQError));
        assert_eq!("0.1234".parse::<Q>(), Err(ParseQError));

        assert_eq!(Q(700).to_string(), "0.7");
        assert_eq!(Q(0).to_string(), "0.0");
        assert_eq!(Q(1000).to_string(), "1");
    }

    #[test]
    fn test_media_type() {
        let media: MediaType = "text/html; charset=ISO-8859-4".parse().unwrap();

        assert_eq!(&*media.mimetype.mtype, "text");
        assert_eq!(&*media.mimetype.subtype, "html");
        assert_eq!(media.param("charset"), Some("ISO-8859-4"));
        assert_eq!(media.to_string(), "text/html;charset=ISO-8859-4");
    }

    #[test]
    fn test_standalone_rejects_trailing_text() {
        assert_matches!(parse_host_port("atlanta.com:5060 x"), Err(Error::Syntax { .. }));
        assert_matches!(parse_uri("sip:a@b c"), Err(Error::MalformedUri { .. }));
        assert_matches!(parse_address("<sip:a@b> c"), Err(Error::MalformedAddress { .. }));
    }

    #[test]
    fn test_parse_start_lines() {
        let line = parse_request_line("REGISTER sip:registrar.biloxi.com SIP/2.0\r\n").unwrap();
        assert_eq!(line.to_string(), "REGISTER sip:registrar.biloxi.com SIP/2.0");

        let line = parse_status_line("SIP/2.0 404 Not Found").unwrap();
        assert_eq!(line.code.as_u16(), 404);
        assert_eq!(&*line.reason, "Not Found");

        assert!(parse_status_line("SIP/2.0 2000 OK").is_err());
        assert!(parse_status_line("SIP/2.0 99 OK").is_err());
    }
}
