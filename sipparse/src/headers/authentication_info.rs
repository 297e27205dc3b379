use std::fmt;

use itertools::Itertools;

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::matching::Matches;
use crate::message::{Parameter, Parameters};
use crate::parser::ParseCtx;

/// The `Authentication-Info` SIP header.
///
/// Provides mutual authentication with HTTP Digest. Values are kept as
/// written, quotes included.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::{AuthenticationInfo, SipHeaderParse};
/// let info = AuthenticationInfo::from_bytes(b"nextnonce=\"47364c23432d2e131a5fb210812c\"").unwrap();
///
/// assert_eq!(info.nextnonce(), Some("47364c23432d2e131a5fb210812c"));
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct AuthenticationInfo(Parameters);

impl AuthenticationInfo {
    pub fn new(params: Parameters) -> Self {
        Self(params)
    }

    pub fn params(&self) -> &Parameters {
        &self.0
    }

    fn unquoted(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Parameter::unquoted_value)
    }

    pub fn nextnonce(&self) -> Option<&str> {
        self.unquoted("nextnonce")
    }

    pub fn qop(&self) -> Option<&str> {
        self.unquoted("qop")
    }

    pub fn rspauth(&self) -> Option<&str> {
        self.unquoted("rspauth")
    }

    pub fn cnonce(&self) -> Option<&str> {
        self.unquoted("cnonce")
    }

    pub fn nc(&self) -> Option<&str> {
        self.unquoted("nc")
    }
}

impl SipHeaderParse for AuthenticationInfo {
    const NAME: &'static str = "Authentication-Info";
    /*
     * Authentication-Info  =  "Authentication-Info" HCOLON ainfo
     *                         *(COMMA ainfo)
     * ainfo                =  nextnonce / message-qop
     *                         / response-auth / cnonce
     *                         / nonce-count
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        Ok(Self(parser.parse_auth_params()?))
    }
}

impl fmt::Display for AuthenticationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.0.iter().format(", "))
    }
}

impl Matches for AuthenticationInfo {
    fn matches(&self, template: &Self) -> bool {
        self.0.matches(&template.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let info = AuthenticationInfo::from_bytes(
            b"qop=auth, rspauth=\"6629fae49393a05397450978507c4ef1\", cnonce=\"0a4f113b\", nc=00000001",
        )
        .unwrap();

        assert_eq!(info.qop(), Some("auth"));
        assert_eq!(info.rspauth(), Some("6629fae49393a05397450978507c4ef1"));
        assert_eq!(info.cnonce(), Some("0a4f113b"));
        assert_eq!(info.nc(), Some("00000001"));
        assert_eq!(info.nextnonce(), None);
        assert_eq!(
            info.to_string(),
            "Authentication-Info: qop=auth, rspauth=\"6629fae49393a05397450978507c4ef1\", cnonce=\"0a4f113b\", nc=00000001"
        );
    }
}
