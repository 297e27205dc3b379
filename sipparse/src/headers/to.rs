use std::fmt;

use crate::error::Result;
use crate::headers::{SipHeaderParse, TAG_PARAM};
use crate::matching::Matches;
use crate::message::{Address, Parameters};
use crate::parser::ParseCtx;

/// The `To` SIP header.
///
/// Specifies the logical recipient of the request.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::To;
/// # use sipparse::message::Address;
/// let addr: Address = "Alice <sip:alice@atlanta.com>".parse().unwrap();
/// let to = To::new(addr);
///
/// assert_eq!(to.to_string(), "To: Alice <sip:alice@atlanta.com>");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct To(Address);

impl To {
    /// Creates a new `To` header.
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

impl SipHeaderParse for To {
    const NAME: &'static str = "To";
    const SHORT_NAME: Option<&'static str> = Some("t");
    /*
     * To        =  ( "To" / "t" ) HCOLON ( name-addr
     *              / addr-spec ) *( SEMI to-param )
     * to-param  =  tag-param / generic-param
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        Ok(Self(parser.parse_address()?))
    }
}

impl fmt::Display for To {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.0)
    }
}

impl Matches for To {
    fn matches(&self, template: &Self) -> bool {
        self.0.matches(&template.0)
    }
}
