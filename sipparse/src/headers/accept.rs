use std::fmt;

use itertools::Itertools;

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::macros::comma_separated_header_value;
use crate::matching::Matches;
use crate::parser::ParseCtx;
use crate::MediaType;

/// The `Accept` SIP header.
///
/// Indicates witch media types the client can process. An empty `Accept`
/// means that no body is acceptable.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::Accept;
/// # use sipparse::MediaType;
/// let accept = Accept::new(vec![MediaType::new("application", "sdp")]);
///
/// assert_eq!(accept.to_string(), "Accept: application/sdp");
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Accept(Vec<MediaType>);

impl Accept {
    pub fn new(media_types: Vec<MediaType>) -> Self {
        Self(media_types)
    }

    /// Returns an iterator over the accepted media types.
    pub fn iter(&self) -> impl Iterator<Item = &MediaType> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl SipHeaderParse for Accept {
    const NAME: &'static str = "Accept";
    /*
     * Accept         =  "Accept" HCOLON
     *                    [ accept-range *(COMMA accept-range) ]
     * accept-range   =  media-range *(SEMI accept-param)
     * media-range    =  ( "*" "/" "*"
     *                   / ( m-type SLASH "*" )
     *                   / ( m-type SLASH m-subtype )
     *                   ) *( SEMI m-parameter )
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        parser.ws();
        if parser.is_eof() {
            return Ok(Self::default());
        }
        let media_types = comma_separated_header_value!(parser => MediaType::parse(parser)?);

        Ok(Self(media_types))
    }
}

impl fmt::Display for Accept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.0.iter().format(", "))
    }
}

impl Matches for Accept {
    fn matches(&self, template: &Self) -> bool {
        self.0.matches(&template.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let src = b"application/sdp;level=1, application/x-private, text/html\r\n";
        let mut parser = ParseCtx::new(src);
        let accept = Accept::parse(&mut parser).unwrap();

        assert_eq!(parser.remaining(), b"\r\n");
        assert_eq!(accept.len(), 3);

        let first = accept.iter().next().unwrap();
        assert_eq!(&*first.mimetype.subtype, "sdp");
        assert_eq!(first.param("level"), Some("1"));
    }

    #[test]
    fn test_parse_wildcard_and_empty() {
        let accept = Accept::from_bytes(b"*/*").unwrap();
        assert_eq!(&*accept.iter().next().unwrap().mimetype.mtype, "*");

        let accept = Accept::from_bytes(b"").unwrap();
        assert!(accept.is_empty());
    }
}
