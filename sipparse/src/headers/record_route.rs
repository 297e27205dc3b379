use std::fmt;

use itertools::Itertools;

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::macros::comma_separated_header_value;
use crate::matching::Matches;
use crate::message::Address;
use crate::parser::ParseCtx;

/// The `Record-Route` SIP header.
///
/// Inserted by proxies in a request to force future requests in the
/// dialog to be routed through the proxy.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::{RecordRoute, SipHeaderParse};
/// let rr = RecordRoute::from_bytes(b"<sip:server10.biloxi.com;lr>").unwrap();
///
/// assert_eq!(rr.to_string(), "Record-Route: <sip:server10.biloxi.com;lr>");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RecordRoute(Vec<Address>);

impl RecordRoute {
    pub fn new(addrs: Vec<Address>) -> Self {
        Self(addrs)
    }

    /// The recorded route, in wire order.
    pub fn addresses(&self) -> &[Address] {
        &self.0
    }
}

impl SipHeaderParse for RecordRoute {
    const NAME: &'static str = "Record-Route";
    /*
     * Record-Route  =  "Record-Route" HCOLON rec-route *(COMMA rec-route)
     * rec-route     =  name-addr *( SEMI rr-param )
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        let addrs = comma_separated_header_value!(parser => parser.parse_address()?);

        Ok(Self(addrs))
    }
}

impl fmt::Display for RecordRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.0.iter().format(", "))
    }
}

impl Matches for RecordRoute {
    fn matches(&self, template: &Self) -> bool {
        self.0.matches(&template.0)
    }
}
