//! SIP Parser
//!
//! The module provides the [`ParseCtx`] cursor used by every grammar rule of
//! the crate and the [`MessageParser`] that assembles a [`SipMessage`] from
//! raw bytes.

use std::str;
use std::sync::Arc;

use bytes::Bytes;
use log::{debug, trace, warn};
use sipparse_util::util::is_space;
use sipparse_util::{digits, until_newline, Mark, Position, Scanner};

use crate::config::ParserConfig;
use crate::error::HeaderError;
use crate::headers::registry::HeaderRegistry;
use crate::headers::{ExtensionHeader, Header, Headers};
use crate::macros::{comma_separated, lookup_table};
use crate::message::auth::*;
use crate::message::{
    Parameter, Parameters, Request, RequestLine, Response, SipMessage, SipMethod, StatusCode, StatusLine, Version,
};
use crate::{preprocess, Error, Result};

mod uri;

// ---------------------------------------------------------------------
// Parser constants
// ---------------------------------------------------------------------
/// Alphanumeric is valid in all sip message components.
const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Unreserved characters in user, password, uri and header
/// parameters in SIP uris.
const UNRESERVED: &[u8] = b"-_.!~*'()%";
/// Escaped character in SIP URIs.
const ESCAPED: &[u8] = b"%";
/// Unreserverd charaters in user part of SIP URIs.
const USER_UNRESERVED: &[u8] = b"&=+$,;?/";
/// Token in SIP Messages
const TOKEN: &[u8] = b"-.!%*_`'~+";
/// Password valid characters in SIP URIs.
const PASS: &[u8] = b"&=+$,";
/// Valid characters in SIP URIs host part.
const HOST: &[u8] = b"_-.";
/// Characters of a `word`, as used in `Call-ID`.
const WORD: &[u8] = b"-.!%*_+`'~()<>:\\\"/[]?{}";
/// Visual separators and digits of a telephone number.
const PHONE: &[u8] = b"0123456789-.()*#ABCDEFabcdef";

// ---------------------------------------------------------------------
// Lookup Tables
// ---------------------------------------------------------------------
// For reading user in uri.
lookup_table!(USER_TAB => ALPHANUMERIC, UNRESERVED, USER_UNRESERVED, ESCAPED);
// For reading password in uri.
lookup_table!(PASS_TAB => ALPHANUMERIC, UNRESERVED, ESCAPED, PASS);
// For reading host in uri.
lookup_table!(HOST_TAB => ALPHANUMERIC, HOST);
// For reading parameter in uri.
lookup_table!(PARAM_TAB => b"[]/:&+$", ALPHANUMERIC, UNRESERVED, ESCAPED);
// For reading the headers part of an uri.
lookup_table!(HDR_TAB => b"[]/?:+$&=", ALPHANUMERIC, UNRESERVED, ESCAPED);
// For reading token.
lookup_table!(TOKEN_TAB => ALPHANUMERIC, TOKEN);
// For reading header parameter values.
lookup_table!(PARAM_VALUE_TAB => b"[:]/", ALPHANUMERIC, TOKEN);
// For reading a call-id word.
lookup_table!(WORD_TAB => ALPHANUMERIC, WORD);
// For reading an uri scheme.
lookup_table!(SCHEME_TAB => b"+-.", ALPHANUMERIC);
// For reading a tel number.
lookup_table!(PHONE_TAB => PHONE);

/// A cursor over one header line, start line or standalone value.
///
/// Every grammar rule of the crate is a method of `ParseCtx`; the header
/// types call them from their [`SipHeaderParse::parse`] implementation.
///
/// [`SipHeaderParse::parse`]: crate::headers::SipHeaderParse::parse
pub struct ParseCtx<'buf> {
    /// The scanner used to read the input buffer.
    scanner: Scanner<'buf>,
}

impl<'buf> ParseCtx<'buf> {
    /// Creates a new `ParseCtx` from the given byte slice.
    #[inline]
    pub fn new<B>(buf: &'buf B) -> Self
    where
        B: AsRef<[u8]> + ?Sized,
    {
        Self {
            scanner: Scanner::new(buf.as_ref()),
        }
    }

    /// Get next byte without advance.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.scanner.peek().copied()
    }

    /// Read the next byte.
    #[inline]
    pub fn advance(&mut self) -> Option<u8> {
        self.scanner.next()
    }

    /// Read the next byte if it is equal to `byte`.
    #[inline]
    pub fn advance_if(&mut self, byte: u8) -> Option<u8> {
        self.scanner.consume_if(|b| b == byte)
    }

    #[inline]
    pub fn must_read(&mut self, byte: u8) -> Result<()> {
        Ok(self.scanner.must_read(byte)?)
    }

    /// Read space characters.
    #[inline]
    pub fn ws(&mut self) {
        self.scanner.read_while(is_space);
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.scanner.is_eof()
    }

    /// Byte offset of the cursor.
    #[inline]
    pub fn offset(&self) -> usize {
        self.scanner.offset()
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.scanner.position()
    }

    /// Get the remaining bytes in the scanner.
    #[inline]
    pub fn remaining(&self) -> &'buf [u8] {
        self.scanner.remaining()
    }

    #[inline]
    pub fn mark(&self) -> Mark {
        self.scanner.mark()
    }

    #[inline]
    pub fn restore(&mut self, mark: Mark) {
        self.scanner.restore(mark)
    }

    #[inline]
    pub fn read_while(&mut self, func: impl Fn(u8) -> bool) -> &'buf [u8] {
        self.scanner.read_while(func)
    }

    pub fn read_while_str(&mut self, func: impl Fn(u8) -> bool) -> Result<&'buf str> {
        let bytes = self.read_while(func);

        Ok(str::from_utf8(bytes)?)
    }

    /// Text between `start` and the cursor.
    pub(crate) fn slice_from(&self, start: usize) -> Result<&'buf str> {
        let src = self.scanner.source();
        let bytes = src.get(start..self.offset()).unwrap_or_default();

        Ok(str::from_utf8(bytes)?)
    }

    /// Build a syntax error at the cursor.
    pub fn error(&self, reason: impl Into<String>) -> Error {
        Error::Syntax {
            offset: self.offset(),
            reason: reason.into(),
        }
    }

    /// Shortcut for yielding a syntax error wrapped in a result type.
    pub fn syntax_error<T>(&self, reason: impl Into<String>) -> Result<T> {
        Err(self.error(reason))
    }

    /// Skip spaces and fail unless the input is fully consumed.
    pub fn expect_end(&mut self) -> Result<()> {
        self.ws();
        if self.is_eof() {
            Ok(())
        } else {
            self.syntax_error("unexpected trailing text")
        }
    }

    /// Parse a non-empty `token`.
    pub fn parse_token(&mut self) -> Result<&'buf str> {
        // `is_token` only accepts ASCII bytes.
        let token = self.read_while_str(is_token)?;
        if token.is_empty() {
            return self.syntax_error("expected token");
        }
        Ok(token)
    }

    /// Parse a `word` (`Call-ID` and `In-Reply-To` values).
    pub fn parse_word(&mut self) -> Result<&'buf str> {
        let word = self.read_while_str(is_word)?;
        if word.is_empty() {
            return self.syntax_error("expected word");
        }
        Ok(word)
    }

    #[inline]
    pub fn parse_u32(&mut self) -> Result<u32> {
        Ok(self.scanner.read_u32()?)
    }

    #[inline]
    pub fn parse_u64(&mut self) -> Result<u64> {
        Ok(self.scanner.read_u64()?)
    }

    /// Parse `1*DIGIT [ "." *DIGIT ]` keeping the text as written.
    pub fn parse_number_str(&mut self) -> Result<&'buf str> {
        if !self.peek().is_some_and(|b| b.is_ascii_digit()) {
            return self.syntax_error("expected number");
        }
        let digits = self.scanner.scan_number_str();

        Ok(str::from_utf8(digits)?)
    }

    /// Read until the end of line, trailing spaces removed.
    pub fn read_rest(&mut self) -> Result<&'buf str> {
        let bytes = until_newline!(self);

        Ok(str::from_utf8(bytes)?.trim_end())
    }

    /// Parse a quoted string, returning its content with the
    /// escapes resolved.
    pub fn parse_quoted(&mut self) -> Result<String> {
        self.must_read(b'"')?;
        let mut out = Vec::new();

        loop {
            match self.advance() {
                Some(b'"') => break,
                Some(b'\\') => match self.advance() {
                    Some(b) => out.push(b),
                    None => return self.syntax_error("unterminated quoted string"),
                },
                Some(b) => out.push(b),
                None => return self.syntax_error("unterminated quoted string"),
            }
        }

        Ok(String::from_utf8(out).map_err(|err| err.utf8_error())?)
    }

    /// Read a quoted string as written, quotes and escapes included.
    pub fn read_quoted_raw(&mut self) -> Result<&'buf str> {
        let start = self.offset();
        self.parse_quoted()?;

        self.slice_from(start)
    }

    /// Parse a comment in parentheses, nesting allowed, returning the text
    /// inside the outer parentheses.
    pub fn parse_comment(&mut self) -> Result<&'buf str> {
        self.must_read(b'(')?;
        let start = self.offset();
        let mut depth = 1;

        loop {
            match self.advance() {
                Some(b'(') => depth += 1,
                Some(b')') => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                Some(b'\\') => {
                    self.advance();
                }
                Some(_) => (),
                None => return self.syntax_error("unterminated comment"),
            }
        }
        let text = self.slice_from(start)?;

        Ok(&text[..text.len() - 1])
    }

    // Parse parameter (";" pname ["=" pvalue]).
    pub fn parse_param(&mut self) -> Result<Parameter> {
        self.parse_param_with(is_token, is_param_value)
    }

    pub(crate) fn parse_param_with(
        &mut self,
        name_class: impl Fn(u8) -> bool,
        value_class: impl Fn(u8) -> bool,
    ) -> Result<Parameter> {
        let name = self.read_while_str(name_class)?;
        if name.is_empty() {
            return self.syntax_error("expected parameter name");
        }
        self.ws();

        if self.advance_if(b'=').is_none() {
            return Ok(Parameter::new(name, None));
        }
        self.ws();

        let value = if self.peek() == Some(b'"') {
            self.read_quoted_raw()?
        } else {
            self.read_while_str(value_class)?
        };

        Ok(Parameter::new(name, Some(value)))
    }

    /// Parse the `SIP/x.y` version of a start line.
    pub fn parse_version(&mut self) -> Result<Version> {
        if !self.scanner.starts_with_ignore_case(b"SIP/") {
            return self.syntax_error("expected SIP version");
        }
        self.scanner.bump_n(4);

        let major = self.scanner.read_num::<u8>()?;
        self.must_read(b'.')?;
        let minor = self.scanner.read_num::<u8>()?;

        Ok(Version { major, minor })
    }

    /// Parse a request line.
    ///
    /// ```text
    /// Request-Line  =  Method SP Request-URI SP SIP-Version
    /// ```
    pub fn parse_request_line(&mut self) -> Result<RequestLine> {
        let method = SipMethod::from(self.parse_token()?);

        if self.read_while(is_space).is_empty() {
            return self.syntax_error("expected space after method");
        }
        let uri = self.parse_uri(true)?;
        self.ws();
        let version = self.parse_version()?;
        self.expect_end()?;

        Ok(RequestLine { method, uri, version })
    }

    /// Parse a status line, the reason phrase may be empty.
    ///
    /// ```text
    /// Status-Line  =  SIP-Version SP Status-Code SP Reason-Phrase
    /// ```
    pub fn parse_status_line(&mut self) -> Result<StatusLine> {
        let version = self.parse_version()?;

        if self.read_while(is_space).is_empty() {
            return self.syntax_error("expected space after version");
        }
        let digits = digits!(self);
        let Ok(code) = StatusCode::try_from(digits) else {
            return self.syntax_error("status code must be three digits in 100..=699");
        };

        if !self.is_eof() && self.read_while(is_space).is_empty() {
            return self.syntax_error("expected space after status code");
        }
        let reason = self.read_rest()?;
        self.expect_end()?;

        Ok(StatusLine {
            version,
            code,
            reason: reason.into(),
        })
    }

    /// Parse the credentials of `Authorization` and `Proxy-Authorization`.
    pub fn parse_auth_credential(&mut self) -> Result<Credential> {
        let scheme = self.parse_token()?;
        self.ws();

        if scheme.eq_ignore_ascii_case(DIGEST) {
            return self.parse_digest_credential();
        }

        Ok(Credential::Other {
            scheme: scheme.into(),
            param: self.parse_auth_params()?,
        })
    }

    /// Parse the challenge of `WWW-Authenticate` and `Proxy-Authenticate`.
    pub fn parse_auth_challenge(&mut self) -> Result<Challenge> {
        let scheme = self.parse_token()?;
        self.ws();

        if scheme.eq_ignore_ascii_case(DIGEST) {
            return self.parse_digest_challenge();
        }

        Ok(Challenge::Other {
            scheme: scheme.into(),
            param: self.parse_auth_params()?,
        })
    }

    /// Parse a comma separated list of auth params.
    pub(crate) fn parse_auth_params(&mut self) -> Result<Parameters> {
        let mut params = Parameters::new();

        comma_separated!(self => {
            let param = self.parse_auth_param()?;
            params.push(param);
        });

        Ok(params)
    }

    // auth-param or token68, e.g. `realm="x"` or `QWxhZGRpbg==`.
    fn parse_auth_param(&mut self) -> Result<Parameter> {
        let mark = self.mark();
        self.parse_token()?;

        let (padding, next) = self.scanner.peek_while(|b| b == b'=');
        if !padding.is_empty() && matches!(next, None | Some(b',' | b' ' | b'\t')) {
            self.scanner.bump_n(padding.len());
            return Ok(Parameter::new(self.slice_from(mark.offset())?, None));
        }

        self.restore(mark);
        self.parse_param()
    }

    fn parse_digest_challenge(&mut self) -> Result<Challenge> {
        let mut digest = DigestChallenge::default();

        comma_separated!(self => {
            let (name, value, param) = self.parse_digest_param()?;

            match name.to_ascii_lowercase().as_str() {
                REALM => digest.realm = value,
                NONCE => digest.nonce = value,
                DOMAIN => digest.domain = value,
                ALGORITHM => digest.algorithm = value,
                OPAQUE => digest.opaque = value,
                QOP => digest.qop = value,
                STALE => digest.stale = value,
                _ => digest.other.push(param),
            }
        });

        Ok(Challenge::Digest(digest))
    }

    fn parse_digest_credential(&mut self) -> Result<Credential> {
        let mut digest = DigestCredential::default();

        comma_separated!(self => {
            let (name, value, param) = self.parse_digest_param()?;

            match name.to_ascii_lowercase().as_str() {
                REALM => digest.realm = value,
                USERNAME => digest.username = value,
                NONCE => digest.nonce = value,
                URI => digest.uri = value,
                RESPONSE => digest.response = value,
                ALGORITHM => digest.algorithm = value,
                CNONCE => digest.cnonce = value,
                OPAQUE => digest.opaque = value,
                QOP => digest.qop = value,
                NC => digest.nc = value,
                _ => digest.other.push(param),
            }
        });

        Ok(Credential::Digest(digest))
    }

    // Returns the name, the unquoted value and the raw parameter.
    fn parse_digest_param(&mut self) -> Result<(Arc<str>, Option<Arc<str>>, Parameter)> {
        let param = self.parse_param()?;
        let value = param.unquoted_value().map(Arc::from);

        Ok((param.name.clone(), value, param))
    }
}

/// Parse one unfolded header line into a [`Header`].
///
/// Names without a registered grammar give a [`Header::Extension`] holding
/// the line as written. Failures of a registered grammar are wrapped in an
/// [`Error::MalformedHeader`].
pub(crate) fn parse_header_line(line: &str) -> Result<Header> {
    let mut parser = ParseCtx::new(line);

    let name = parser.read_while_str(is_token)?;
    if name.is_empty() {
        let err = parser.error("missing header name");
        return Err(malformed_header("", line, parser.offset(), err));
    }
    parser.ws();
    if parser.advance_if(b':').is_none() {
        let err = parser.error("expected ':' after header name");
        return Err(malformed_header(name, line, parser.offset(), err));
    }
    parser.ws();

    let Some(entry) = HeaderRegistry::global().lookup(name) else {
        let value = parser.read_rest()?;
        return Ok(Header::Extension(ExtensionHeader::from_parts(line.trim_end(), name, value)));
    };

    let result = (entry.parse)(&mut parser);
    let result = result.and_then(|header| {
        parser.expect_end()?;
        Ok(header)
    });

    result.map_err(|err| malformed_header(entry.name, line, parser.offset(), err))
}

fn malformed_header(name: &str, line: &str, cursor: usize, source: Error) -> Error {
    let offset = source.offset().unwrap_or(cursor).min(line.len());

    Error::MalformedHeader {
        name: name.into(),
        text: line.get(offset..).unwrap_or_default().into(),
        offset,
        source: Box::new(source),
    }
}

/// Assembles [`SipMessage`]s from raw bytes.
///
/// # Examples
///
/// ```
/// use sipparse::config::ParserConfig;
/// use sipparse::parser::MessageParser;
///
/// let parser = MessageParser::with_config(ParserConfig::builder().with_strict(true).build());
/// let msg = parser
///     .parse(b"OPTIONS sip:carol@chicago.com SIP/2.0\r\nMax-Forwards: 70\r\n\r\n")
///     .unwrap()
///     .unwrap();
///
/// assert!(msg.is_request());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageParser {
    config: ParserConfig,
}

impl MessageParser {
    /// Creates a parser with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse one message.
    ///
    /// Returns `Ok(None)` for a keep-alive (only line breaks, NULs or
    /// whitespace). A bad start line or a missing end of headers fails the
    /// whole message; a bad header line fails it only in strict mode.
    pub fn parse(&self, src: &[u8]) -> Result<Option<SipMessage>> {
        let Some(unfolded) = preprocess::unfold_message(src)? else {
            trace!("Ignoring keep-alive of {} bytes", src.len());
            return Ok(None);
        };
        let mut lines = unfolded.lines().enumerate();

        let Some((_, start_line)) = lines.next() else {
            return Err(Error::MalformedMessage("missing start line".into()));
        };
        let mut msg = parse_start_line(start_line)?;
        trace!("Parsed start line: {start_line}");

        let mut errors = Vec::new();
        let headers = msg.headers_mut();

        for (line, text) in lines {
            if text.trim().is_empty() {
                continue;
            }
            match parse_header_line(text) {
                Ok(header) => headers.push(header),
                Err(error) => {
                    let err = HeaderError {
                        line,
                        name: header_name(text).into(),
                        text: text.into(),
                        error,
                    };
                    debug!("Bad header line {line}: {}", err.error);

                    if let Some(listener) = &self.config.error_listener {
                        listener(&err);
                    }
                    if self.config.strict {
                        return Err(err.error);
                    }
                    errors.push(err);
                }
            }
        }
        trace!("Parsed {} headers, {} errors", headers.len(), errors.len());

        let body = if self.config.read_body {
            read_body(headers, unfolded.body)
        } else {
            Bytes::new()
        };

        match &mut msg {
            SipMessage::Request(req) => {
                req.body = body;
                req.errors = errors;
            }
            SipMessage::Response(res) => {
                res.body = body;
                res.errors = errors;
            }
        }

        Ok(Some(msg))
    }
}

fn header_name(line: &str) -> &str {
    line.split(':').next().unwrap_or_default().trim()
}

/// A status line starts with `SIP/`, anything else must be a request line.
fn parse_start_line(line: &str) -> Result<SipMessage> {
    let first = line.split([' ', '\t']).next().unwrap_or_default();
    let is_status = first.get(..4).is_some_and(|prefix| prefix.eq_ignore_ascii_case("SIP/"));
    let mut parser = ParseCtx::new(line);

    let msg: Result<SipMessage> = if is_status {
        parser.parse_status_line().map(|status_line| Response::new(status_line).into())
    } else {
        parser.parse_request_line().map(|req_line| Request::with_headers(req_line, Headers::new()).into())
    };

    msg.map_err(|err| Error::MalformedMessage(format!("invalid start line '{line}': {err}")))
}

fn read_body(headers: &Headers, available: &[u8]) -> Bytes {
    let Some(clen) = crate::find_map_header!(headers, ContentLength) else {
        return Bytes::new();
    };
    let declared = clen.value() as usize;

    if declared > available.len() {
        warn!(
            "Content-Length is {declared} but only {} bytes are available",
            available.len()
        );
    }

    Bytes::copy_from_slice(&available[..declared.min(available.len())])
}

#[inline(always)]
pub(crate) fn is_host(b: u8) -> bool {
    HOST_TAB[b as usize]
}

/// Returns `true` for the bytes of a `token`.
#[inline(always)]
pub(crate) fn is_token(b: u8) -> bool {
    TOKEN_TAB[b as usize]
}

#[inline(always)]
fn is_word(b: u8) -> bool {
    WORD_TAB[b as usize]
}

#[inline(always)]
pub(crate) fn is_param_value(b: u8) -> bool {
    PARAM_VALUE_TAB[b as usize]
}

#[inline(always)]
fn is_user(b: u8) -> bool {
    USER_TAB[b as usize]
}

#[inline(always)]
fn is_pass(b: u8) -> bool {
    PASS_TAB[b as usize]
}

#[inline(always)]
fn is_param(b: u8) -> bool {
    PARAM_TAB[b as usize]
}

#[inline(always)]
fn is_hdr_uri(b: u8) -> bool {
    HDR_TAB[b as usize]
}

#[inline(always)]
fn is_scheme(b: u8) -> bool {
    SCHEME_TAB[b as usize]
}

#[inline(always)]
fn is_phone(b: u8) -> bool {
    PHONE_TAB[b as usize]
}

/// Strip one pair of surrounding double quotes, if present.
pub(crate) fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
