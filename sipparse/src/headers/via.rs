use std::fmt;
use std::sync::Arc;

use itertools::Itertools;
use sipparse_util::util::is_space;

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::macros::{comma_separated_header_value, parse_params};
use crate::matching::{matches_ignore_case, Matches};
use crate::message::{HostPort, Parameters};
use crate::parser::ParseCtx;

const MADDR_PARAM: &str = "maddr";
const BRANCH_PARAM: &str = "branch";
const TTL_PARAM: &str = "ttl";
const RPORT_PARAM: &str = "rport";
const RECEIVED_PARAM: &str = "received";

/// One `via-parm` of a `Via` header.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::ViaHop;
/// let hop: ViaHop = "SIP/2.0/UDP pc33.atlanta.com;branch=z9hG4bK776asdhds".parse().unwrap();
///
/// assert_eq!(hop.transport(), "UDP");
/// assert_eq!(hop.branch(), Some("z9hG4bK776asdhds"));
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ViaHop {
    protocol: Arc<str>,
    version: Arc<str>,
    transport: Arc<str>,
    sent_by: HostPort,
    params: Parameters,
    comment: Option<Arc<str>>,
}

impl ViaHop {
    /// Creates a `SIP/2.0` hop.
    pub fn new(transport: &str, sent_by: HostPort) -> Self {
        Self {
            protocol: "SIP".into(),
            version: "2.0".into(),
            transport: transport.into(),
            sent_by,
            params: Parameters::new(),
            comment: None,
        }
    }

    /// Sets the hop parameters.
    pub fn with_params(mut self, params: Parameters) -> Self {
        self.params = params;
        self
    }

    /// The protocol name, `SIP` for any real message.
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The transport as written, e.g. `UDP` or `TLS`.
    pub fn transport(&self) -> &str {
        &self.transport
    }

    pub fn sent_by(&self) -> &HostPort {
        &self.sent_by
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// The comment without its parentheses.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Returns the `branch` parameter.
    pub fn branch(&self) -> Option<&str> {
        self.params.get_named(BRANCH_PARAM)
    }

    /// Returns the `received` parameter.
    pub fn received(&self) -> Option<&str> {
        self.params.get_named(RECEIVED_PARAM)
    }

    /// Returns the `rport` value, `None` when absent or empty.
    pub fn rport(&self) -> Option<u16> {
        self.params.get_named(RPORT_PARAM)?.parse().ok()
    }

    /// Returns `true` if `rport` is present, with or without value.
    pub fn has_rport(&self) -> bool {
        self.params.contains(RPORT_PARAM)
    }

    /// Returns the `ttl` parameter.
    pub fn ttl(&self) -> Option<u8> {
        self.params.get_named(TTL_PARAM)?.parse().ok()
    }

    /// Returns the `maddr` parameter.
    pub fn maddr(&self) -> Option<&str> {
        self.params.get_named(MADDR_PARAM)
    }

    /*
     * via-parm          =  sent-protocol LWS sent-by *( SEMI via-params )
     * sent-protocol     =  protocol-name SLASH protocol-version
     *                      SLASH transport
     * sent-by           =  host [ COLON port ]
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        let protocol = parser.parse_token()?.into();
        parser.ws();
        parser.must_read(b'/')?;
        parser.ws();
        let version = parser.parse_token()?.into();
        parser.ws();
        parser.must_read(b'/')?;
        parser.ws();
        let transport = parser.parse_token()?.into();

        if parser.read_while(is_space).is_empty() {
            return parser.syntax_error("expected space before sent-by");
        }
        let sent_by = parser.parse_host_port()?;
        let params = parse_params!(parser, ParseCtx::parse_param);

        let comment = if parser.peek() == Some(b'(') {
            Some(parser.parse_comment()?.into())
        } else {
            None
        };

        Ok(Self {
            protocol,
            version,
            transport,
            sent_by,
            params,
            comment,
        })
    }
}

impl std::str::FromStr for ViaHop {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parser = ParseCtx::new(s);
        let hop = Self::parse(&mut parser)?;
        parser.expect_end()?;

        Ok(hop)
    }
}

impl fmt::Display for ViaHop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{} {}{}",
            self.protocol, self.version, self.transport, self.sent_by, self.params
        )?;
        if let Some(comment) = &self.comment {
            write!(f, " ({comment})")?;
        }
        Ok(())
    }
}

impl Matches for ViaHop {
    fn matches(&self, template: &Self) -> bool {
        matches_ignore_case(&self.protocol, &template.protocol)
            && self.version.matches(&template.version)
            && matches_ignore_case(&self.transport, &template.transport)
            && self.sent_by.matches(&template.sent_by)
            && self.params.matches(&template.params)
    }
}

/// The `Via` SIP header.
///
/// Indicates the path taken by the request so far and the
/// path that should be followed in routing responses.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::{Via, SipHeaderParse};
/// let via = Via::from_bytes(b"SIP/2.0/UDP server10.biloxi.com;branch=z9hG4bKnashds8").unwrap();
///
/// assert_eq!(via.branch(), Some("z9hG4bKnashds8"));
/// assert_eq!(via.to_string(), "Via: SIP/2.0/UDP server10.biloxi.com;branch=z9hG4bKnashds8");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Via(Vec<ViaHop>);

impl Via {
    /// Creates a `Via` with a single hop.
    pub fn new(hop: ViaHop) -> Self {
        Self(vec![hop])
    }

    /// The hops, in wire order.
    pub fn hops(&self) -> &[ViaHop] {
        &self.0
    }

    /// The first hop.
    pub fn top(&self) -> Option<&ViaHop> {
        self.0.first()
    }

    /// The `branch` of the first hop.
    pub fn branch(&self) -> Option<&str> {
        self.top()?.branch()
    }

    /// The `received` of the first hop.
    pub fn received(&self) -> Option<&str> {
        self.top()?.received()
    }

    /// The `rport` of the first hop.
    pub fn rport(&self) -> Option<u16> {
        self.top()?.rport()
    }
}

impl SipHeaderParse for Via {
    const NAME: &'static str = "Via";
    const SHORT_NAME: Option<&'static str> = Some("v");
    /*
     * Via  =  ( "Via" / "v" ) HCOLON via-parm *(COMMA via-parm)
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        let hops = comma_separated_header_value!(parser => ViaHop::parse(parser)?);

        Ok(Self(hops))
    }
}

impl fmt::Display for Via {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.0.iter().format(", "))
    }
}

impl Matches for Via {
    fn matches(&self, template: &Self) -> bool {
        self.0.matches(&template.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Host;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn test_parse() {
        let src = b"SIP/2.0/UDP bobspc.biloxi.com:5060;received=192.0.2.4\r\n";
        let mut parser = ParseCtx::new(src);
        let via = Via::parse(&mut parser).unwrap();
        let hop = via.top().unwrap();

        assert_eq!(parser.remaining(), b"\r\n");
        assert_eq!(hop.transport(), "UDP");
        assert_eq!(
            hop.sent_by(),
            &HostPort::new(Host::DomainName("bobspc.biloxi.com".into()), Some(5060))
        );
        assert_eq!(hop.received(), Some("192.0.2.4"));
    }

    #[test]
    fn test_parse_params() {
        let via = Via::from_bytes(b"SIP/2.0/UDP 192.0.2.1:5060 ;received=192.0.2.207;branch=z9hG4bK77asjd;rport;ttl=16;maddr=224.2.0.1").unwrap();
        let hop = via.top().unwrap();

        assert_eq!(hop.sent_by().ip_addr(), Some(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1))));
        assert_eq!(hop.branch(), Some("z9hG4bK77asjd"));
        assert!(hop.has_rport());
        assert_eq!(hop.rport(), None);
        assert_eq!(hop.ttl(), Some(16));
        assert_eq!(hop.maddr(), Some("224.2.0.1"));
    }

    #[test]
    fn test_parse_multiple_hops_and_comment() {
        let via = Via::from_bytes(
            b"SIP / 2.0 / TCP [2001:db8::9]:5061;rport=5060 (proxy), SIP/2.0/TLS client.atlanta.example.com:5061;branch=z9hG4bKn",
        )
        .unwrap();
        let hops = via.hops();

        assert_eq!(hops.len(), 2);
        assert_eq!(hops[0].rport(), Some(5060));
        assert_eq!(hops[0].comment(), Some("proxy"));
        assert!(hops[0].sent_by().ip_addr().is_some());
        assert_eq!(hops[1].transport(), "TLS");
        assert_eq!(via.rport(), Some(5060));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Via::from_bytes(b"SIP/2.0/UDP").is_err());
        assert!(Via::from_bytes(b"SIP/2.0 pc33.atlanta.com").is_err());
    }
}
