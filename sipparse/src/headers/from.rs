use std::fmt;

use crate::error::Result;
use crate::headers::{SipHeaderParse, TAG_PARAM};
use crate::matching::Matches;
use crate::message::{Address, Parameters};
use crate::parser::ParseCtx;

/// The `From` SIP header.
///
/// Indicates the initiator of the request.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::{From, SipHeaderParse};
/// let from = From::from_bytes(b"\"Bob\" <sips:bob@biloxi.com>;tag=a48s").unwrap();
///
/// assert_eq!(from.tag(), Some("a48s"));
/// assert_eq!(from.to_string(), "From: Bob <sips:bob@biloxi.com>;tag=a48s");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct From(Address);

impl From {
    /// Creates a new `From` header.
    pub fn new(addr: Address) -> Self {
        Self(addr)
    }

    /// Returns the `tag` parameter.
    pub fn tag(&self) -> Option<&str> {
        self.0.param(TAG_PARAM)
    }

    pub fn address(&self) -> &Address {
        &self.0
    }

    pub fn params(&self) -> &Parameters {
        self.0.params()
    }
}

impl SipHeaderParse for From {
    const NAME: &'static str = "From";
    const SHORT_NAME: Option<&'static str> = Some("f");
    /*
     * From        =  ( "From" / "f" ) HCOLON from-spec
     * from-spec   =  ( name-addr / addr-spec )
     *                *( SEMI from-param )
     * from-param  =  tag-param / generic-param
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        Ok(Self(parser.parse_address()?))
    }
}

impl fmt::Display for From {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.0)
    }
}

impl Matches for From {
    fn matches(&self, template: &Self) -> bool {
        self.0.matches(&template.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{Host, HostPort, Scheme};

    #[test]
    fn test_parse() {
        let src = b"\"A. G. Bell\" <sip:agb@bell-telephone.com> ;tag=a48s\r\n";
        let mut parser = ParseCtx::new(src);
        let from = From::parse(&mut parser).unwrap();

        assert_eq!(parser.remaining(), b"\r\n");
        assert_eq!(from.address().display(), Some("A. G. Bell"));
        assert_eq!(from.tag(), Some("a48s"));

        let uri = from.address().uri().as_sip().unwrap();
        assert_eq!(uri.scheme(), Scheme::Sip);
        assert_eq!(uri.user().map(|u| u.user()), Some("agb"));
        assert_eq!(
            uri.host_port(),
            &HostPort::new(Host::DomainName("bell-telephone.com".into()), None)
        );
    }

    #[test]
    fn test_parse_addr_spec() {
        let from = From::from_bytes(b"sip:+12125551212@server.phone2net.com;tag=887s").unwrap();

        assert_eq!(from.tag(), Some("887s"));
        assert!(from.address().uri().as_sip().unwrap().params().is_empty());
    }
}
