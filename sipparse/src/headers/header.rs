use std::fmt;
use std::sync::Arc;

use enum_as_inner::EnumAsInner;

use crate::headers::*;
use crate::matching::{matches_ignore_case, Matches};

macro_rules! define_headers {
    ($( $(#[$doc:meta])* $variant:ident, )*) => {
        /// A SIP Header.
        ///
        /// This enum contain the SIP headers, as defined in `RFC3261` and its
        /// extensions, see their respective documentation for more details.
        #[derive(Debug, PartialEq, Eq, EnumAsInner, Clone)]
        pub enum Header {
            $( $(#[$doc])* $variant($variant), )*
            /// Any header without a dedicated grammar, kept as written.
            Extension(ExtensionHeader),
        }

        /// Identifies a registered header type.
        #[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
        pub enum HeaderKind {
            $( $(#[$doc])* $variant, )*
        }

        impl HeaderKind {
            /// Every registered header kind.
            pub const ALL: &'static [HeaderKind] = &[$(HeaderKind::$variant,)*];

            /// The canonical header name.
            pub fn name(&self) -> &'static str {
                match self {
                    $( HeaderKind::$variant => <$variant as SipHeaderParse>::NAME, )*
                }
            }
        }

        impl Header {
            /// The header kind, `None` for [`Header::Extension`].
            pub fn kind(&self) -> Option<HeaderKind> {
                match self {
                    $( Header::$variant(_) => Some(HeaderKind::$variant), )*
                    Header::Extension(_) => None,
                }
            }

            /// The canonical header name, or the name as written for
            /// extension headers.
            pub fn name(&self) -> &str {
                match self {
                    $( Header::$variant(_) => <$variant as SipHeaderParse>::NAME, )*
                    Header::Extension(ext) => ext.name(),
                }
            }
        }

        impl fmt::Display for Header {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $( Header::$variant(hdr) => fmt::Display::fmt(hdr, f), )*
                    Header::Extension(ext) => fmt::Display::fmt(ext, f),
                }
            }
        }

        impl Matches for Header {
            fn matches(&self, template: &Self) -> bool {
                match (self, template) {
                    $( (Header::$variant(hdr), Header::$variant(t)) => hdr.matches(t), )*
                    (Header::Extension(ext), Header::Extension(t)) => ext.matches(t),
                    _ => false,
                }
            }
        }

        $(
            impl std::convert::From<$variant> for Header {
                fn from(hdr: $variant) -> Self {
                    Header::$variant(hdr)
                }
            }
        )*
    };
}

define_headers! {
    /// `Accept` Header
    Accept,
    /// `Accept-Encoding` Header
    AcceptEncoding,
    /// `Accept-Language` Header
    AcceptLanguage,
    /// `Alert-Info` Header
    AlertInfo,
    /// `Allow` Header
    Allow,
    /// `Allow-Events` Header
    AllowEvents,
    /// `Authentication-Info` Header
    AuthenticationInfo,
    /// `Authorization` Header
    Authorization,
    /// `Call-ID` Header
    CallId,
    /// `Call-Info` Header
    CallInfo,
    /// `Contact` Header
    Contact,
    /// `Content-Disposition` Header
    ContentDisposition,
    /// `Content-Encoding` Header
    ContentEncoding,
    /// `Content-Language` Header
    ContentLanguage,
    /// `Content-Length` Header
    ContentLength,
    /// `Content-Type` Header
    ContentType,
    /// `CSeq` Header
    CSeq,
    /// `Date` Header
    Date,
    /// `Error-Info` Header
    ErrorInfo,
    /// `Event` Header
    Event,
    /// `Expires` Header
    Expires,
    /// `From` Header
    From,
    /// `In-Reply-To` Header
    InReplyTo,
    /// `Max-Forwards` Header
    MaxForwards,
    /// `MIME-Version` Header
    MimeVersion,
    /// `Min-Expires` Header
    MinExpires,
    /// `Organization` Header
    Organization,
    /// `Priority` Header
    Priority,
    /// `Proxy-Authenticate` Header
    ProxyAuthenticate,
    /// `Proxy-Authorization` Header
    ProxyAuthorization,
    /// `Proxy-Require` Header
    ProxyRequire,
    /// `Record-Route` Header
    RecordRoute,
    /// `Reply-To` Header
    ReplyTo,
    /// `Require` Header
    Require,
    /// `Retry-After` Header
    RetryAfter,
    /// `Route` Header
    Route,
    /// `Server` Header
    Server,
    /// `Subject` Header
    Subject,
    /// `Supported` Header
    Supported,
    /// `Timestamp` Header
    Timestamp,
    /// `To` Header
    To,
    /// `Unsupported` Header
    Unsupported,
    /// `User-Agent` Header
    UserAgent,
    /// `Via` Header
    Via,
    /// `Warning` Header
    Warning,
    /// `WWW-Authenticate` Header
    WWWAuthenticate,
}

/// A header without a dedicated grammar.
///
/// The line is kept exactly as it was unfolded, so encoding it gives back
/// the original text.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ExtensionHeader {
    raw: Arc<str>,
    name: Arc<str>,
    value: Arc<str>,
}

impl ExtensionHeader {
    /// Creates an extension header encoded as `name: value`.
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            raw: format!("{name}: {value}").into(),
            name: name.into(),
            value: value.into(),
        }
    }

    pub(crate) fn from_parts(raw: &str, name: &str, value: &str) -> Self {
        Self {
            raw: raw.into(),
            name: name.into(),
            value: value.into(),
        }
    }

    /// The header name as written.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value after the colon, trimmed.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The whole header line.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ExtensionHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Matches for ExtensionHeader {
    fn matches(&self, template: &Self) -> bool {
        matches_ignore_case(&self.name, &template.name) && self.value.matches(&template.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::SipMethod;

    #[test]
    fn test_kind_and_name() {
        let hdr = Header::CSeq(CSeq::new(4711, SipMethod::Invite));

        assert_eq!(hdr.kind(), Some(HeaderKind::CSeq));
        assert_eq!(hdr.name(), "CSeq");
        assert_eq!(hdr.to_string(), "CSeq: 4711 INVITE");
        assert!(hdr.as_extension().is_none());
    }

    #[test]
    fn test_extension_keeps_raw_text() {
        let hdr = Header::Extension(ExtensionHeader::from_parts("X-Foo:   bar", "X-Foo", "bar"));

        assert_eq!(hdr.kind(), None);
        assert_eq!(hdr.name(), "X-Foo");
        assert_eq!(hdr.to_string(), "X-Foo:   bar");
        assert!(hdr.matches(&Header::Extension(ExtensionHeader::new("x-foo", ""))));
    }

    #[test]
    fn test_all_kinds_have_names() {
        assert!(HeaderKind::ALL.iter().all(|kind| !kind.name().is_empty()));
    }
}
