use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::matching::Matches;
use crate::parser::ParseCtx;

/// The `Timestamp` SIP header.
///
/// Describes when the UAC sent the request to the UAS.
///
/// Both values are kept as written, e.g. `"54.6"`.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::Timestamp;
/// let timestamp = Timestamp::new("54", Some("0.5"));
///
/// assert_eq!(timestamp.to_string(), "Timestamp: 54 0.5");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Timestamp {
    time: Arc<str>,
    delay: Option<Arc<str>>,
}

impl Timestamp {
    pub fn new(time: &str, delay: Option<&str>) -> Self {
        Self {
            time: time.into(),
            delay: delay.map(Into::into),
        }
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn delay(&self) -> Option<&str> {
        self.delay.as_deref()
    }
}

impl SipHeaderParse for Timestamp {
    const NAME: &'static str = "Timestamp";
    /*
     * Timestamp  =  "Timestamp" HCOLON 1*(DIGIT)
     *                [ "." *(DIGIT) ] [ LWS delay ]
     * delay      =  *(DIGIT) [ "." *(DIGIT) ]
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        let time = parser.parse_number_str()?;
        parser.ws();
        let delay = match parser.peek() {
            Some(b) if b.is_ascii_digit() => Some(parser.parse_number_str()?),
            _ => None,
        };

        Ok(Self::new(time, delay))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.time)?;
        if let Some(delay) = &self.delay {
            write!(f, " {delay}")?;
        }
        Ok(())
    }
}

impl Matches for Timestamp {
    fn matches(&self, template: &Self) -> bool {
        self.time.matches(&template.time) && self.delay.matches(&template.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let src = b"54.6 0.3\r\n";
        let mut parser = ParseCtx::new(src);
        let timestamp = Timestamp::parse(&mut parser).unwrap();

        assert_eq!(parser.remaining(), b"\r\n");
        assert_eq!(timestamp.time(), "54.6");
        assert_eq!(timestamp.delay(), Some("0.3"));
    }

    #[test]
    fn test_parse_without_delay() {
        let timestamp = Timestamp::from_bytes(b"54").unwrap();

        assert_eq!(timestamp.delay(), None);
        assert_eq!(timestamp.to_string(), "Timestamp: 54");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Timestamp::from_bytes(b"54.6.1").is_err());
        assert!(Timestamp::from_bytes(b".5").is_err());
    }
}
