use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::macros::parse_params;
use crate::matching::Matches;
use crate::message::Parameters;
use crate::parser::ParseCtx;

const DURATION_PARAM: &str = "duration";

/// The `Retry-After` SIP header.
///
/// Indicates how long the service is expected to be unavailable.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::RetryAfter;
/// let retry = RetryAfter::new(18000);
///
/// assert_eq!(retry.to_string(), "Retry-After: 18000");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RetryAfter {
    seconds: u32,
    comment: Option<Arc<str>>,
    params: Parameters,
}

impl RetryAfter {
    pub fn new(seconds: u32) -> Self {
        Self {
            seconds,
            comment: None,
            params: Parameters::new(),
        }
    }

    /// Number of seconds after which to retry.
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// The comment without its parentheses.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Returns the `duration` parameter.
    pub fn duration(&self) -> Option<u32> {
        self.params.get_named(DURATION_PARAM)?.parse().ok()
    }
}

impl SipHeaderParse for RetryAfter {
    const NAME: &'static str = "Retry-After";
    /*
     * Retry-After  =  "Retry-After" HCOLON delta-seconds
     *                 [ comment ] *( SEMI retry-param )
     * retry-param  =  ("duration" EQUAL delta-seconds)
     *                 / generic-param
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        let seconds = parser.parse_u32()?;
        parser.ws();

        let comment = if parser.peek() == Some(b'(') {
            Some(parser.parse_comment()?.into())
        } else {
            None
        };
        let params = parse_params!(parser, ParseCtx::parse_param);

        Ok(Self {
            seconds,
            comment,
            params,
        })
    }
}

impl fmt::Display for RetryAfter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.seconds)?;
        if let Some(comment) = &self.comment {
            write!(f, " ({comment})")?;
        }
        write!(f, "{}", self.params)
    }
}

impl Matches for RetryAfter {
    fn matches(&self, template: &Self) -> bool {
        self.seconds == template.seconds && self.params.matches(&template.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let retry = RetryAfter::from_bytes(b"18000;duration=3600").unwrap();

        assert_eq!(retry.seconds(), 18000);
        assert_eq!(retry.duration(), Some(3600));
        assert_eq!(retry.comment(), None);
    }

    #[test]
    fn test_parse_comment() {
        let retry = RetryAfter::from_bytes(b"120 (I'm in a meeting)").unwrap();

        assert_eq!(retry.seconds(), 120);
        assert_eq!(retry.comment(), Some("I'm in a meeting"));
        assert_eq!(retry.to_string(), "Retry-After: 120 (I'm in a meeting)");
    }
}
