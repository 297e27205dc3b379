use std::fmt;

use itertools::Itertools;

use crate::error::Result;
use crate::headers::{SipHeaderParse, EXPIRES_PARAM, Q_PARAM};
use crate::macros::comma_separated_header_value;
use crate::matching::Matches;
use crate::message::Address;
use crate::parser::ParseCtx;
use crate::Q;

/// The `Contact` SIP header.
///
/// Specifies the URIs where the user can be reached, or `*` in a
/// `REGISTER` that removes every binding.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::{Contact, SipHeaderParse};
/// # use sipparse::Q;
/// let contact = Contact::from_bytes(b"<sip:alice@client.atlanta.com>;q=0.7;expires=3600").unwrap();
///
/// assert_eq!(contact.q(), Some(Q(700)));
/// assert_eq!(contact.expires(), Some(3600));
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Contact {
    /// `Contact: *`
    Wildcard,
    /// One or more contact addresses, in wire order.
    Addresses(Vec<Address>),
}

impl Contact {
    /// Creates a `Contact` with a single address.
    pub fn new(addr: Address) -> Self {
        Contact::Addresses(vec![addr])
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Contact::Wildcard)
    }

    /// The contact addresses, empty for the wildcard.
    pub fn addresses(&self) -> &[Address] {
        match self {
            Contact::Wildcard => &[],
            Contact::Addresses(addrs) => addrs,
        }
    }

    /// The `q` parameter of the first address.
    pub fn q(&self) -> Option<Q> {
        self.addresses().first().and_then(contact_q)
    }

    /// The `expires` parameter of the first address.
    pub fn expires(&self) -> Option<u32> {
        self.addresses().first().and_then(contact_expires)
    }
}

/// The `q` parameter of a contact address.
pub fn contact_q(addr: &Address) -> Option<Q> {
    addr.param(Q_PARAM)?.parse().ok()
}

/// The `expires` parameter of a contact address.
pub fn contact_expires(addr: &Address) -> Option<u32> {
    addr.param(EXPIRES_PARAM)?.parse().ok()
}

impl SipHeaderParse for Contact {
    const NAME: &'static str = "Contact";
    const SHORT_NAME: Option<&'static str> = Some("m");
    /*
     * Contact        =  ("Contact" / "m" ) HCOLON
     *                   ( STAR / (contact-param *(COMMA contact-param)))
     * contact-param  =  (name-addr / addr-spec) *(SEMI contact-params)
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        parser.ws();
        if parser.advance_if(b'*').is_some() {
            return Ok(Contact::Wildcard);
        }
        let addrs = comma_separated_header_value!(parser => parser.parse_address()?);

        Ok(Contact::Addresses(addrs))
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Contact::Wildcard => write!(f, "{}: *", Self::NAME),
            Contact::Addresses(addrs) => write!(f, "{}: {}", Self::NAME, addrs.iter().format(", ")),
        }
    }
}

impl Matches for Contact {
    fn matches(&self, template: &Self) -> bool {
        match (self, template) {
            (Contact::Wildcard, Contact::Wildcard) => true,
            (Contact::Addresses(addrs), Contact::Addresses(t)) => addrs.matches(t),
            _ => false,
        }
    }
}
