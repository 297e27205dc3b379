use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::matching::{matches_ignore_case, Matches};
use crate::parser::ParseCtx;

/// The `Priority` SIP header.
///
/// Indicates the urgency of the request as perceived by the client, one of
/// `emergency`, `urgent`, `normal`, `non-urgent` or an extension token.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::Priority;
/// let priority = Priority::new("emergency");
///
/// assert_eq!(priority.to_string(), "Priority: emergency");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Priority(Arc<str>);

impl Priority {
    pub fn new(priority: &str) -> Self {
        Self(priority.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl SipHeaderParse for Priority {
    const NAME: &'static str = "Priority";
    /*
     * Priority        =  "Priority" HCOLON priority-value
     * priority-value  =  "emergency" / "urgent" / "normal"
     *                    / "non-urgent" / other-priority
     * other-priority  =  token
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        Ok(Self::new(parser.parse_token()?))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.0)
    }
}

impl Matches for Priority {
    fn matches(&self, template: &Self) -> bool {
        matches_ignore_case(&self.0, &template.0)
    }
}
