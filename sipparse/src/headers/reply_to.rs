use std::fmt;

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::matching::Matches;
use crate::message::Address;
use crate::parser::ParseCtx;

/// The `Reply-To` SIP header.
///
/// Contains a logical return URI that may be different from the `From`
/// header field.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::{ReplyTo, SipHeaderParse};
/// let reply = ReplyTo::from_bytes(b"Bob <sip:bob@biloxi.com>").unwrap();
///
/// assert_eq!(reply.to_string(), "Reply-To: Bob <sip:bob@biloxi.com>");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ReplyTo(Address);

impl ReplyTo {
    pub fn new(addr: Address) -> Self {
        Self(addr)
    }

    pub fn address(&self) -> &Address {
        &self.0
    }
}

impl SipHeaderParse for ReplyTo {
    const NAME: &'static str = "Reply-To";
    /*
     * Reply-To      =  "Reply-To" HCOLON rplyto-spec
     * rplyto-spec   =  ( name-addr / addr-spec )
     *                  *( SEMI rplyto-param )
     * rplyto-param  =  generic-param
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        Ok(Self(parser.parse_address()?))
    }
}

impl fmt::Display for ReplyTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.0)
    }
}

impl Matches for ReplyTo {
    fn matches(&self, template: &Self) -> bool {
        self.0.matches(&template.0)
    }
}
