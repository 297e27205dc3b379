use std::fmt;

use itertools::Itertools;

use crate::error::Result;
use crate::headers::{InfoUri, SipHeaderParse};
use crate::matching::Matches;
use crate::parser::ParseCtx;

/// The `Error-Info` SIP header.
///
/// Provides a pointer to additional information about the error status
/// response.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::{ErrorInfo, SipHeaderParse};
/// let info = ErrorInfo::from_bytes(b"<sip:not-in-service-recording@atlanta.com>").unwrap();
///
/// assert_eq!(info.to_string(), "Error-Info: <sip:not-in-service-recording@atlanta.com>");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ErrorInfo(Vec<InfoUri>);

impl ErrorInfo {
    pub fn new(infos: Vec<InfoUri>) -> Self {
        Self(infos)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InfoUri> {
        self.0.iter()
    }
}

impl SipHeaderParse for ErrorInfo {
    const NAME: &'static str = "Error-Info";
    /*
     * Error-Info  =  "Error-Info" HCOLON error-uri *(COMMA error-uri)
     * error-uri   =  LAQUOT absoluteURI RAQUOT *( SEMI generic-param )
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        Ok(Self(InfoUri::parse_list(parser)?))
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.0.iter().format(", "))
    }
}

impl Matches for ErrorInfo {
    fn matches(&self, template: &Self) -> bool {
        self.0.matches(&template.0)
    }
}
