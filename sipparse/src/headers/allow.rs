use std::fmt;

use itertools::Itertools;

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::macros::comma_separated_header_value;
use crate::matching::Matches;
use crate::message::SipMethod;
use crate::parser::ParseCtx;

/// The `Allow` SIP header.
///
/// Lists the set of methods supported by the UA generating the message.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::Allow;
/// # use sipparse::message::SipMethod;
/// let allow = Allow::new(vec![SipMethod::Invite, SipMethod::Register]);
///
/// assert_eq!(allow.to_string(), "Allow: INVITE, REGISTER");
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Allow(Vec<SipMethod>);

impl Allow {
    pub fn new(methods: Vec<SipMethod>) -> Self {
        Self(methods)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SipMethod> {
        self.0.iter()
    }

    /// Returns `true` if `method` is allowed.
    pub fn contains(&self, method: &SipMethod) -> bool {
        self.0.contains(method)
    }
}

impl SipHeaderParse for Allow {
    const NAME: &'static str = "Allow";
    /*
     * Allow  =  "Allow" HCOLON [Method *(COMMA Method)]
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        parser.ws();
        if parser.is_eof() {
            return Ok(Self::default());
        }
        let methods = comma_separated_header_value!(parser => SipMethod::from(parser.parse_token()?));

        Ok(Self(methods))
    }
}

impl fmt::Display for Allow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.0.iter().format(", "))
    }
}

impl Matches for Allow {
    fn matches(&self, template: &Self) -> bool {
        template.iter().all(|method| self.contains(method))
    }
}
