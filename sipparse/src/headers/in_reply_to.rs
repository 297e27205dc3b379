use std::fmt;
use std::sync::Arc;

use itertools::Itertools;

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::macros::comma_separated_header_value;
use crate::matching::Matches;
use crate::parser::ParseCtx;

/// The `In-Reply-To` SIP header.
///
/// Enumerates the `Call-ID`s that this call references or returns.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::{InReplyTo, SipHeaderParse};
/// let reply = InReplyTo::from_bytes(b"70710@saturn.bell-tel.com, 17320@saturn.bell-tel.com").unwrap();
///
/// assert_eq!(reply.iter().count(), 2);
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct InReplyTo(Vec<Arc<str>>);

impl InReplyTo {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(ids.into_iter().map(|id| Arc::from(id.as_ref())).collect())
    }

    /// Returns an iterator over the call ids.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|id| id.as_ref())
    }
}

impl SipHeaderParse for InReplyTo {
    const NAME: &'static str = "In-Reply-To";
    /*
     * In-Reply-To  =  "In-Reply-To" HCOLON callid *(COMMA callid)
     * callid       =  word [ "@" word ]
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        let ids = comma_separated_header_value!(parser => {
            let start = parser.offset();
            parser.parse_word()?;
            if parser.advance_if(b'@').is_some() {
                parser.parse_word()?;
            }
            Arc::from(parser.slice_from(start)?)
        });

        Ok(Self(ids))
    }
}

impl fmt::Display for InReplyTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.0.iter().format(", "))
    }
}

impl Matches for InReplyTo {
    fn matches(&self, template: &Self) -> bool {
        self.0.matches(&template.0)
    }
}
