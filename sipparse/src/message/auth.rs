//! SIP Auth types
//!
use std::fmt;
use std::sync::Arc;

use itertools::Itertools;

use crate::matching::{Matches, matches_ignore_case};
use crate::message::Parameters;

/// The `Digest` scheme name.
pub(crate) const DIGEST: &str = "Digest";

pub(crate) const REALM: &str = "realm";
pub(crate) const NONCE: &str = "nonce";
pub(crate) const DOMAIN: &str = "domain";
pub(crate) const ALGORITHM: &str = "algorithm";
pub(crate) const OPAQUE: &str = "opaque";
pub(crate) const QOP: &str = "qop";
pub(crate) const STALE: &str = "stale";
pub(crate) const USERNAME: &str = "username";
pub(crate) const URI: &str = "uri";
pub(crate) const RESPONSE: &str = "response";
pub(crate) const CNONCE: &str = "cnonce";
pub(crate) const NC: &str = "nc";

/// A `name=value` pair of an auth header, `quoted` tells how to write it.
struct AuthParam<'a> {
    name: &'a str,
    value: Option<&'a str>,
    quoted: bool,
}

impl fmt::Display for AuthParam<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) if self.quoted => write!(f, "{}=\"{}\"", self.name, value),
            Some(value) => write!(f, "{}={}", self.name, value),
            None => f.write_str(self.name),
        }
    }
}

fn write_auth_params<'a>(
    f: &mut fmt::Formatter<'_>,
    scheme: &str,
    known: impl Iterator<Item = AuthParam<'a>>,
    other: &'a Parameters,
) -> fmt::Result {
    let other = other.iter().map(|p| AuthParam {
        name: p.name(),
        value: p.value(),
        quoted: false,
    });

    write!(f, "{scheme} {}", known.chain(other).format(", "))
}

/// Builds the known parameter list skipping the unset ones.
macro_rules! auth_params {
    ($($field:expr, $name:expr, $quoted:expr);* $(;)?) => {
        [$(($name, $field.as_deref(), $quoted)),*]
            .into_iter()
            .filter_map(|(name, value, quoted)| value.map(|value| AuthParam { name, value: Some(value), quoted }))
    };
}

/// A Digest Challenge.
///
/// Values are stored without their quotes.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct DigestChallenge {
    /// The realm of the digest authentication.
    pub realm: Option<Arc<str>>,

    /// The domain of the digest authentication.
    pub domain: Option<Arc<str>>,

    /// The nonce of the digest authentication.
    pub nonce: Option<Arc<str>>,

    /// The opaque value of the digest authentication.
    pub opaque: Option<Arc<str>>,

    /// Indicates whether the previous request was stale.
    pub stale: Option<Arc<str>>,

    /// The algorithm used in the digest authentication.
    pub algorithm: Option<Arc<str>>,

    /// The quality of protection (qop) value.
    pub qop: Option<Arc<str>>,

    /// Extension parameters.
    pub other: Parameters,
}

/// This enum represents an authentication challenge mechanism
/// used in `Proxy-Authenticate` and `WWW-Authenticate` headers.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Challenge {
    /// A `Digest` authentication scheme.
    Digest(DigestChallenge),
    /// Any other authentication scheme not specifically handled.
    Other {
        /// The name of the authentication scheme.
        scheme: Arc<str>,

        /// The parameters associated with the scheme.
        param: Parameters,
    },
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Challenge::Digest(digest) => {
                let known = auth_params! {
                    digest.realm, REALM, true;
                    digest.domain, DOMAIN, true;
                    digest.nonce, NONCE, true;
                    digest.opaque, OPAQUE, true;
                    digest.stale, STALE, false;
                    digest.algorithm, ALGORITHM, false;
                    digest.qop, QOP, true;
                };
                write_auth_params(f, DIGEST, known, &digest.other)
            }
            Challenge::Other { scheme, param } => write_auth_params(f, scheme, std::iter::empty(), param),
        }
    }
}

impl Matches for Challenge {
    fn matches(&self, template: &Self) -> bool {
        match (self, template) {
            (Challenge::Digest(digest), Challenge::Digest(t)) => {
                digest.realm.matches(&t.realm)
                    && digest.nonce.matches(&t.nonce)
                    && digest.algorithm.matches(&t.algorithm)
                    && digest.qop.matches(&t.qop)
                    && digest.other.matches(&t.other)
            }
            (
                Challenge::Other { scheme, param },
                Challenge::Other {
                    scheme: t_scheme,
                    param: t_param,
                },
            ) => matches_ignore_case(scheme, t_scheme) && param.matches(t_param),
            _ => false,
        }
    }
}

/// Represents credentials for a `Digest` authentication scheme,
/// typically found in the `Authorization` and `Proxy-Authorization` headers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DigestCredential {
    /// The realm value that defines the protection space.
    pub realm: Option<Arc<str>>,

    /// The username associated with the credential.
    pub username: Option<Arc<str>>,

    /// The nonce value provided by the server.
    pub nonce: Option<Arc<str>>,

    /// The URI of the requested resource.
    pub uri: Option<Arc<str>>,

    /// The response hash calculated from the credential data.
    pub response: Option<Arc<str>>,

    /// The algorithm used to hash the credentials (e.g., "MD5").
    pub algorithm: Option<Arc<str>>,

    /// The client nonce value (cnonce) used to prevent replay attacks.
    pub cnonce: Option<Arc<str>>,

    /// The opaque value provided by the server, to be returned unchanged.
    pub opaque: Option<Arc<str>>,

    /// The quality of protection (qop) applied to the message.
    pub qop: Option<Arc<str>>,

    /// The nonce count (nc), indicating the number of requests made with the same nonce.
    pub nc: Option<Arc<str>>,

    /// Extension parameters.
    pub other: Parameters,
}

/// This type represent a credential containing the
/// authentication information in `Authorization` and
/// `Proxy-Authorization` headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// A `digest` authentication scheme.
    Digest(DigestCredential),
    /// Other scheme not specified.
    Other {
        /// The name of the authentication scheme.
        scheme: Arc<str>,

        /// The parameters associated with the scheme.
        param: Parameters,
    },
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Digest(digest) => {
                let known = auth_params! {
                    digest.username, USERNAME, true;
                    digest.realm, REALM, true;
                    digest.nonce, NONCE, true;
                    digest.uri, URI, true;
                    digest.response, RESPONSE, true;
                    digest.algorithm, ALGORITHM, false;
                    digest.cnonce, CNONCE, true;
                    digest.opaque, OPAQUE, true;
                    digest.qop, QOP, false;
                    digest.nc, NC, false;
                };
                write_auth_params(f, DIGEST, known, &digest.other)
            }
            Credential::Other { scheme, param } => write_auth_params(f, scheme, std::iter::empty(), param),
        }
    }
}

impl Matches for Credential {
    fn matches(&self, template: &Self) -> bool {
        match (self, template) {
            (Credential::Digest(digest), Credential::Digest(t)) => {
                digest.username.matches(&t.username)
                    && digest.realm.matches(&t.realm)
                    && digest.nonce.matches(&t.nonce)
                    && digest.uri.matches(&t.uri)
                    && digest.response.matches(&t.response)
                    && digest.other.matches(&t.other)
            }
            (
                Credential::Other { scheme, param },
                Credential::Other {
                    scheme: t_scheme,
                    param: t_param,
                },
            ) => matches_ignore_case(scheme, t_scheme) && param.matches(t_param),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_display() {
        let challenge = Challenge::Digest(DigestChallenge {
            realm: Some("atlanta.com".into()),
            nonce: Some("84a4cc6f3082121f32b42a2187831a9e".into()),
            algorithm: Some("MD5".into()),
            ..Default::default()
        });

        assert_eq!(
            challenge.to_string(),
            "Digest realm=\"atlanta.com\", nonce=\"84a4cc6f3082121f32b42a2187831a9e\", algorithm=MD5"
        );
    }

    #[test]
    fn test_token_credential_display() {
        let credential = Credential::Other {
            scheme: "Basic".into(),
            param: [crate::message::Parameter::new("QWxhZGRpbg", None)].into_iter().collect(),
        };

        assert_eq!(credential.to_string(), "Basic QWxhZGRpbg");
    }

    #[test]
    fn test_other_credential_display() {
        let credential = Credential::Other {
            scheme: "Basic".into(),
            param: Parameters::from([("token", "abc")]),
        };

        assert_eq!(credential.to_string(), "Basic token=abc");
    }
}
