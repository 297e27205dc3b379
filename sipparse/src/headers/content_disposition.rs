use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::macros::parse_params;
use crate::matching::{matches_ignore_case, Matches};
use crate::message::Parameters;
use crate::parser::ParseCtx;

const HANDLING_PARAM: &str = "handling";

/// The `Content-Disposition` SIP header.
///
/// Describes how the message body is to be interpreted by the UAC or UAS.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::ContentDisposition;
/// let disposition = ContentDisposition::new("session");
///
/// assert_eq!(disposition.to_string(), "Content-Disposition: session");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ContentDisposition {
    disposition: Arc<str>,
    params: Parameters,
}

impl ContentDisposition {
    pub fn new(disposition: &str) -> Self {
        Self {
            disposition: disposition.into(),
            params: Parameters::new(),
        }
    }

    /// The disposition type, e.g. `session` or `render`.
    pub fn disposition(&self) -> &str {
        &self.disposition
    }

    /// Returns the `handling` parameter.
    pub fn handling(&self) -> Option<&str> {
        self.params.get_named(HANDLING_PARAM)
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }
}

impl SipHeaderParse for ContentDisposition {
    const NAME: &'static str = "Content-Disposition";
    /*
     * Content-Disposition   =  "Content-Disposition" HCOLON
     *                          disp-type *( SEMI disp-param )
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        let disposition = parser.parse_token()?.into();
        let params = parse_params!(parser, ParseCtx::parse_param);

        Ok(Self { disposition, params })
    }
}

impl fmt::Display for ContentDisposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}{}", Self::NAME, self.disposition, self.params)
    }
}

impl Matches for ContentDisposition {
    fn matches(&self, template: &Self) -> bool {
        matches_ignore_case(&self.disposition, &template.disposition) && self.params.matches(&template.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let disposition = ContentDisposition::from_bytes(b"session;handling=optional").unwrap();

        assert_eq!(disposition.disposition(), "session");
        assert_eq!(disposition.handling(), Some("optional"));
        assert_eq!(disposition.to_string(), "Content-Disposition: session;handling=optional");
    }
}
