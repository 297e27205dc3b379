//! URI, host and address grammar.

use std::sync::Arc;

use itertools::Itertools;
use sipparse_util::util::{is_alphabetic, is_newline, is_space, is_valid_port};

use super::{is_hdr_uri, is_host, is_param, is_pass, is_phone, is_scheme, is_user, ParseCtx};
use crate::macros::parse_params;
use crate::message::{Address, GenericUri, Host, HostPort, Parameter, Scheme, SipUri, TelUrl, Uri, UserInfo};
use crate::{Error, Result};

impl<'buf> ParseCtx<'buf> {
    /// Parse any URI.
    ///
    /// `sip` and `sips` give a [`SipUri`], `tel` a [`TelUrl`] and any other
    /// scheme an opaque [`GenericUri`]. When `parse_params` is `false` the
    /// URI stops before the first `;`, which then belongs to the enclosing
    /// address.
    pub fn parse_uri(&mut self, parse_params: bool) -> Result<Uri> {
        let start = self.offset();

        match self.parse_uri_inner(parse_params) {
            Ok(uri) => Ok(uri),
            Err(err @ Error::MalformedUri { .. }) => Err(err),
            Err(err) => self.uri_error(start, err.to_string()),
        }
    }

    fn parse_uri_inner(&mut self, parse_params: bool) -> Result<Uri> {
        let start = self.offset();
        let scheme = self.read_while_str(is_scheme)?;

        if !scheme.bytes().next().is_some_and(is_alphabetic) || self.advance_if(b':').is_none() {
            return self.uri_error(start, "missing scheme");
        }

        if scheme.eq_ignore_ascii_case("sip") {
            self.parse_sip_uri(Scheme::Sip, parse_params).map(Uri::Sip)
        } else if scheme.eq_ignore_ascii_case("sips") {
            self.parse_sip_uri(Scheme::Sips, parse_params).map(Uri::Sip)
        } else if scheme.eq_ignore_ascii_case("tel") {
            self.parse_tel_url(start, parse_params).map(Uri::Tel)
        } else {
            self.parse_generic_uri(start, scheme, parse_params).map(Uri::Generic)
        }
    }

    // "sip:" [ userinfo ] hostport uri-parameters [ headers ]
    fn parse_sip_uri(&mut self, scheme: Scheme, parse_params: bool) -> Result<SipUri> {
        let user = self.parse_user_info()?;
        let host_port = self.parse_host_port()?;

        if !parse_params {
            return Ok(SipUri::new(scheme, user, host_port));
        }

        let params = parse_params!(self, Self::parse_uri_param);
        let headers = if self.advance_if(b'?').is_some() {
            Some(self.read_while_str(is_hdr_uri)?.into())
        } else {
            None
        };

        Ok(SipUri {
            scheme,
            user,
            host_port,
            params,
            headers,
        })
    }

    fn parse_tel_url(&mut self, start: usize, parse_params: bool) -> Result<TelUrl> {
        let global = self.advance_if(b'+').is_some();
        let number = self.read_while_str(is_phone)?;

        if number.is_empty() {
            return self.uri_error(start, "missing telephone number");
        }
        let mut tel = TelUrl::new(global, number);

        if parse_params {
            tel.params = parse_params!(self, Self::parse_uri_param);
        }

        Ok(tel)
    }

    fn parse_generic_uri(&mut self, start: usize, scheme: &str, parse_params: bool) -> Result<GenericUri> {
        let rest = self.read_while_str(|b| {
            !is_space(b) && !is_newline(b) && b != b'>' && (parse_params || (b != b';' && b != b','))
        })?;

        if rest.is_empty() {
            return self.uri_error(start, "empty URI");
        }

        Ok(GenericUri::new(scheme, rest))
    }

    fn exists_user_part_in_uri(&self) -> bool {
        self.remaining()
            .iter()
            .take_while(|&&b| !is_space(b) && !is_newline(b) && !matches!(b, b'>' | b',' | b'?'))
            .any(|&b| b == b'@')
    }

    fn parse_user_info(&mut self) -> Result<Option<UserInfo>> {
        if !self.exists_user_part_in_uri() {
            return Ok(None);
        }

        // We have user part in uri.
        let user = self.read_while_str(is_user)?;
        let pass = if self.advance_if(b':').is_some() {
            Some(self.read_while_str(is_pass)?)
        } else {
            None
        };

        // Take '@'.
        self.must_read(b'@')?;

        Ok(Some(UserInfo::new(user, pass)))
    }

    /// Parse a host, an IPv6 address must be in brackets.
    pub fn parse_host(&mut self) -> Result<Host> {
        if self.advance_if(b'[').is_some() {
            // the '[' and ']' characters are removed from the host
            let host = self.read_while_str(|b| b != b']')?;
            self.must_read(b']')?;

            return match host.parse() {
                Ok(ipv6_addr) => Ok(Host::IpAddr(std::net::IpAddr::V6(ipv6_addr))),
                Err(_) => self.syntax_error("invalid IPv6 reference"),
            };
        }

        // Is a domain name or Ipv4 host.
        let host = self.read_while_str(is_host)?;
        if host.is_empty() {
            return self.syntax_error("missing host");
        }

        match host.parse() {
            Ok(ip_addr) => Ok(Host::IpAddr(ip_addr)),
            Err(_) => Ok(Host::DomainName(host.into())),
        }
    }

    /// Parse `host [":" port]`.
    pub fn parse_host_port(&mut self) -> Result<HostPort> {
        let host = self.parse_host()?;
        let port = self.parse_port()?;

        Ok(HostPort { host, port })
    }

    fn parse_port(&mut self) -> Result<Option<u16>> {
        if self.advance_if(b':').is_none() {
            return Ok(None);
        }
        let Ok(port) = self.scanner.read_u16() else {
            return self.syntax_error("invalid port");
        };

        if is_valid_port(port) {
            Ok(Some(port))
        } else {
            self.syntax_error("port must not be zero")
        }
    }

    fn parse_uri_param(&mut self) -> Result<Parameter> {
        self.parse_param_with(is_param, is_param)
    }

    /// Parse a name-addr or addr-spec followed by its parameters.
    ///
    /// ```text
    /// (name-addr / addr-spec) *(SEMI generic-param)
    /// ```
    pub fn parse_address(&mut self) -> Result<Address> {
        self.ws();
        let start = self.offset();

        match self.parse_address_inner(start) {
            Ok(addr) => Ok(addr),
            Err(err @ (Error::MalformedUri { .. } | Error::MalformedAddress { .. })) => Err(err),
            Err(err) => self.address_error(start, err.to_string()),
        }
    }

    fn parse_address_inner(&mut self, start: usize) -> Result<Address> {
        if self.is_eof() {
            return self.address_error(start, "empty address");
        }

        let (display, uri) = if self.is_name_addr() {
            let display = self.parse_display_name()?;
            self.ws();

            if self.advance_if(b'<').is_none() {
                return self.address_error(start, "expected '<'");
            }
            self.ws();
            let uri = self.parse_uri(true)?;
            self.ws();

            if self.advance_if(b'>').is_none() {
                return self.address_error(start, "missing closing '>'");
            }
            (display, uri)
        } else {
            (None, self.parse_uri(false)?)
        };

        let params = parse_params!(self, Self::parse_param);

        Ok(Address { display, uri, params })
    }

    /// A quoted display name or a `<` before the next unquoted comma means
    /// the name-addr form.
    fn is_name_addr(&self) -> bool {
        let src = self.remaining();
        if src.first() == Some(&b'"') {
            return true;
        }

        let mut in_quotes = false;
        let mut escaped = false;

        for &b in src {
            if in_quotes {
                match b {
                    _ if escaped => escaped = false,
                    b'\\' => escaped = true,
                    b'"' => in_quotes = false,
                    _ => (),
                }
                continue;
            }
            match b {
                b'<' => return true,
                b'"' => in_quotes = true,
                b',' | b'\r' | b'\n' => return false,
                _ => (),
            }
        }

        false
    }

    fn parse_display_name(&mut self) -> Result<Option<Arc<str>>> {
        if self.peek() == Some(b'"') {
            let name = self.parse_quoted()?;
            return Ok(Some(name.into()));
        }

        let name = self.read_while_str(|b| b != b'<')?;
        let name = name.split_whitespace().join(" ");

        Ok((!name.is_empty()).then(|| name.into()))
    }

    fn uri_error<T>(&self, start: usize, reason: impl Into<String>) -> Result<T> {
        Err(Error::MalformedUri {
            text: self.text_from(start),
            offset: start,
            reason: reason.into(),
        })
    }

    fn address_error<T>(&self, start: usize, reason: impl Into<String>) -> Result<T> {
        Err(Error::MalformedAddress {
            text: self.text_from(start),
            offset: start,
            reason: reason.into(),
        })
    }

    /// The input from `start` up to the end of the line.
    fn text_from(&self, start: usize) -> String {
        let src = self.scanner.source();
        let text = src.get(start..).unwrap_or_default();
        let end = text.iter().position(|&b| is_newline(b)).unwrap_or(text.len());

        String::from_utf8_lossy(&text[..end]).trim_end().to_string()
    }
}
