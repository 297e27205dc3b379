use std::fmt;

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::matching::Matches;
use crate::message::auth::Challenge;
use crate::parser::ParseCtx;

/// The `WWW-Authenticate` SIP header.
///
/// Consists of at least one challenge for the authentication scheme(s)
/// and parameters applicable to the `Request-URI`.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::{WWWAuthenticate, SipHeaderParse};
/// let auth = WWWAuthenticate::from_bytes(b"Digest realm=\"atlanta.com\", algorithm=MD5").unwrap();
///
/// assert_eq!(
///     auth.to_string(),
///     "WWW-Authenticate: Digest realm=\"atlanta.com\", algorithm=MD5"
/// );
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct WWWAuthenticate(Challenge);

impl WWWAuthenticate {
    pub fn new(challenge: Challenge) -> Self {
        Self(challenge)
    }

    pub fn challenge(&self) -> &Challenge {
        &self.0
    }
}

impl SipHeaderParse for WWWAuthenticate {
    const NAME: &'static str = "WWW-Authenticate";
    /*
     * WWW-Authenticate  =  "WWW-Authenticate" HCOLON challenge
     * challenge         =  ("Digest" LWS digest-cln *(COMMA digest-cln))
     *                      / other-challenge
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        Ok(Self(parser.parse_auth_challenge()?))
    }
}

impl fmt::Display for WWWAuthenticate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.0)
    }
}

impl Matches for WWWAuthenticate {
    fn matches(&self, template: &Self) -> bool {
        self.0.matches(&template.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let src = b"Digest realm=\"atlanta.com\", domain=\"sip:boxesbybob.com\", \
        qop=\"auth\", nonce=\"f84f1cec41e6cbe5aea9c8e88d359\", opaque=\"\", stale=FALSE, algorithm=MD5\r\n";
        let mut parser = ParseCtx::new(src);
        let auth = WWWAuthenticate::parse(&mut parser).unwrap();

        assert_eq!(parser.remaining(), b"\r\n");
        assert_matches!(auth.challenge(), Challenge::Digest(digest) => {
            assert_eq!(digest.realm.as_deref(), Some("atlanta.com"));
            assert_eq!(digest.domain.as_deref(), Some("sip:boxesbybob.com"));
            assert_eq!(digest.qop.as_deref(), Some("auth"));
            assert_eq!(digest.stale.as_deref(), Some("FALSE"));
            assert_eq!(digest.algorithm.as_deref(), Some("MD5"));
        });
    }

    #[test]
    fn test_parse_empty_element() {
        assert!(WWWAuthenticate::from_bytes(b"Digest realm=\"a\",, nonce=\"b\"").is_err());
    }
}
