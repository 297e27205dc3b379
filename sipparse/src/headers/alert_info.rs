use std::fmt;

use itertools::Itertools;

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::macros::{comma_separated_header_value, parse_params};
use crate::matching::Matches;
use crate::message::{Parameters, Uri};
use crate::parser::ParseCtx;

/// An URI in angle brackets followed by parameters, the element of
/// `Alert-Info`, `Call-Info` and `Error-Info`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct InfoUri {
    uri: Uri,
    params: Parameters,
}

impl InfoUri {
    pub fn new(uri: Uri) -> Self {
        Self {
            uri,
            params: Parameters::new(),
        }
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Parse `LAQUOT absoluteURI RAQUOT *( SEMI generic-param )`.
    pub(crate) fn parse(parser: &mut ParseCtx) -> Result<Self> {
        parser.ws();
        parser.must_read(b'<')?;
        let uri = parser.parse_uri(true)?;
        parser.must_read(b'>')?;
        let params = parse_params!(parser, ParseCtx::parse_param);

        Ok(Self { uri, params })
    }

    pub(crate) fn parse_list(parser: &mut ParseCtx) -> Result<Vec<Self>> {
        Ok(comma_separated_header_value!(parser => InfoUri::parse(parser)?))
    }
}

impl fmt::Display for InfoUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>{}", self.uri, self.params)
    }
}

impl Matches for InfoUri {
    fn matches(&self, template: &Self) -> bool {
        self.uri.matches(&template.uri) && self.params.matches(&template.params)
    }
}

/// The `Alert-Info` SIP header.
///
/// Specifies an alternative ring tone to the UAS.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::{AlertInfo, SipHeaderParse};
/// let info = AlertInfo::from_bytes(b"<http://www.example.com/sounds/moo.wav>").unwrap();
///
/// assert_eq!(info.to_string(), "Alert-Info: <http://www.example.com/sounds/moo.wav>");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct AlertInfo(Vec<InfoUri>);

impl AlertInfo {
    pub fn new(infos: Vec<InfoUri>) -> Self {
        Self(infos)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InfoUri> {
        self.0.iter()
    }
}

impl SipHeaderParse for AlertInfo {
    const NAME: &'static str = "Alert-Info";
    /*
     * Alert-Info   =  "Alert-Info" HCOLON alert-param *(COMMA alert-param)
     * alert-param  =  LAQUOT absoluteURI RAQUOT *( SEMI generic-param )
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        Ok(Self(InfoUri::parse_list(parser)?))
    }
}

impl fmt::Display for AlertInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.0.iter().format(", "))
    }
}

impl Matches for AlertInfo {
    fn matches(&self, template: &Self) -> bool {
        self.0.matches(&template.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let src = b"<http://www.example.com/sounds/moo.wav>;appearance=2, <sip:ring@example.com>\r\n";
        let mut parser = ParseCtx::new(src);
        let info = AlertInfo::parse(&mut parser).unwrap();
        let infos: Vec<_> = info.iter().collect();

        assert_eq!(parser.remaining(), b"\r\n");
        assert_eq!(infos[0].uri().scheme_str(), "http");
        assert_eq!(infos[0].params().get_named("appearance"), Some("2"));
        assert!(infos[1].uri().is_sip());
    }

    #[test]
    fn test_parse_without_brackets() {
        assert!(AlertInfo::from_bytes(b"http://www.example.com/sounds/moo.wav").is_err());
    }
}
