use std::fmt;

use itertools::Itertools;

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::macros::comma_separated_header_value;
use crate::matching::Matches;
use crate::message::Address;
use crate::parser::ParseCtx;

/// The `Route` SIP header.
///
/// Forces routing for a request through the listed set of proxies.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::{Route, SipHeaderParse};
/// let route = Route::from_bytes(b"<sip:bigbox3.site3.atlanta.com;lr>").unwrap();
///
/// assert_eq!(route.to_string(), "Route: <sip:bigbox3.site3.atlanta.com;lr>");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Route(Vec<Address>);

impl Route {
    pub fn new(addrs: Vec<Address>) -> Self {
        Self(addrs)
    }

    /// The route set, in wire order.
    pub fn addresses(&self) -> &[Address] {
        &self.0
    }
}

impl SipHeaderParse for Route {
    const NAME: &'static str = "Route";
    /*
     * Route        =  "Route" HCOLON route-param *(COMMA route-param)
     * route-param  =  name-addr *( SEMI rr-param )
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        let addrs = comma_separated_header_value!(parser => parser.parse_address()?);

        Ok(Self(addrs))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.0.iter().format(", "))
    }
}

impl Matches for Route {
    fn matches(&self, template: &Self) -> bool {
        self.0.matches(&template.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let route = Route::from_bytes(b"<sip:p1.example.com;lr>, <sip:p2.domain.com;lr>").unwrap();
        let addrs = route.addresses();

        assert_eq!(addrs.len(), 2);
        assert!(addrs[0].uri().as_sip().unwrap().lr_param());
        assert_eq!(addrs[1].uri().as_sip().unwrap().host_port().host_as_str(), "p2.domain.com");
    }
}
