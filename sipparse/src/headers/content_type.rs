use std::fmt;

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::matching::Matches;
use crate::parser::ParseCtx;
use crate::MediaType;

/// The `Content-Type` SIP header.
///
/// Indicates the media type of the message body.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::ContentType;
/// # use sipparse::MediaType;
/// let c_type = ContentType::new(MediaType::new("application", "sdp"));
///
/// assert_eq!(c_type.to_string(), "Content-Type: application/sdp");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ContentType(MediaType);

impl ContentType {
    pub fn new(media_type: MediaType) -> Self {
        Self(media_type)
    }

    pub fn media_type(&self) -> &MediaType {
        &self.0
    }
}

impl SipHeaderParse for ContentType {
    const NAME: &'static str = "Content-Type";
    const SHORT_NAME: Option<&'static str> = Some("c");
    /*
     * Content-Type     =  ( "Content-Type" / "c" ) HCOLON media-type
     * media-type       =  m-type SLASH m-subtype *(SEMI m-parameter)
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        Ok(Self(MediaType::parse(parser)?))
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.0)
    }
}

impl Matches for ContentType {
    fn matches(&self, template: &Self) -> bool {
        self.0.matches(&template.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let src = b"multipart/mixed ; boundary=\"unique-boundary-1\"\r\n";
        let mut parser = ParseCtx::new(src);
        let c_type = ContentType::parse(&mut parser).unwrap();

        assert_eq!(parser.remaining(), b"\r\n");
        assert_eq!(&*c_type.media_type().mimetype.mtype, "multipart");
        assert_eq!(c_type.media_type().param("boundary"), Some("\"unique-boundary-1\""));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(ContentType::from_bytes(b"application").is_err());
        assert!(ContentType::from_bytes(b"application/").is_err());
    }
}
