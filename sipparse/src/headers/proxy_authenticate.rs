use std::fmt;

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::matching::Matches;
use crate::message::auth::Challenge;
use crate::parser::ParseCtx;

/// The `Proxy-Authenticate` SIP header.
///
/// The authentication requirements from a proxy server to a client.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ProxyAuthenticate(Challenge);

impl ProxyAuthenticate {
    pub fn new(challenge: Challenge) -> Self {
        Self(challenge)
    }

    pub fn challenge(&self) -> &Challenge {
        &self.0
    }
}

impl SipHeaderParse for ProxyAuthenticate {
    const NAME: &'static str = "Proxy-Authenticate";
    /*
     * Proxy-Authenticate  =  "Proxy-Authenticate" HCOLON challenge
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        Ok(Self(parser.parse_auth_challenge()?))
    }
}

impl fmt::Display for ProxyAuthenticate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.0)
    }
}

impl Matches for ProxyAuthenticate {
    fn matches(&self, template: &Self) -> bool {
        self.0.matches(&template.0)
    }
}
