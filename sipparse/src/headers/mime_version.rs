use std::fmt;

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::matching::Matches;
use crate::parser::ParseCtx;

/// The `MIME-Version` SIP header.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::MimeVersion;
/// let version = MimeVersion::new(1, 0);
///
/// assert_eq!(version.to_string(), "MIME-Version: 1.0");
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct MimeVersion {
    pub major: u32,
    pub minor: u32,
}

impl MimeVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl SipHeaderParse for MimeVersion {
    const NAME: &'static str = "MIME-Version";
    /*
     * MIME-Version  =  "MIME-Version" HCOLON 1*DIGIT "." 1*DIGIT
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        let major = parser.parse_u32()?;
        parser.must_read(b'.')?;
        let minor = parser.parse_u32()?;

        Ok(Self { major, minor })
    }
}

impl fmt::Display for MimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}.{}", Self::NAME, self.major, self.minor)
    }
}

impl Matches for MimeVersion {
    fn matches(&self, template: &Self) -> bool {
        self == template
    }
}
