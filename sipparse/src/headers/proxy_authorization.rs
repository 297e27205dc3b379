use std::fmt;

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::matching::Matches;
use crate::message::auth::Credential;
use crate::parser::ParseCtx;

/// The `Proxy-Authorization` SIP header.
///
/// Allows the client to identify itself to a proxy that requires
/// authentication.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ProxyAuthorization(Credential);

impl ProxyAuthorization {
    pub fn new(credential: Credential) -> Self {
        Self(credential)
    }

    pub fn credential(&self) -> &Credential {
        &self.0
    }
}

impl SipHeaderParse for ProxyAuthorization {
    const NAME: &'static str = "Proxy-Authorization";
    /*
     * Proxy-Authorization  =  "Proxy-Authorization" HCOLON credentials
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        Ok(Self(parser.parse_auth_credential()?))
    }
}

impl fmt::Display for ProxyAuthorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.0)
    }
}

impl Matches for ProxyAuthorization {
    fn matches(&self, template: &Self) -> bool {
        self.0.matches(&template.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let auth = ProxyAuthorization::from_bytes(
            b"Digest username=\"Alice\", realm=\"atlanta.com\", nonce=\"wf84f1ceczx41ae6cbe5aea9c8e88d359\", \
              opaque=\"\", uri=\"sip:bob@biloxi.com\", response=\"42ce3cef44b22f50c6a6071bc8\"",
        )
        .unwrap();

        assert_matches!(auth.credential(), Credential::Digest(digest) => {
            assert_eq!(digest.nonce.as_deref(), Some("wf84f1ceczx41ae6cbe5aea9c8e88d359"));
            assert_eq!(digest.opaque.as_deref(), Some(""));
        });
    }
}
