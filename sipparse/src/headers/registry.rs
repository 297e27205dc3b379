//! Header registry.
//!
//! Maps long and compact header names, ignoring case, to the grammar of the
//! header. The table is checked once, the first time it is used.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use thiserror::Error;

use crate::error::Result;
use crate::headers::{Header, HeaderKind, SipHeaderParse};
use crate::parser::ParseCtx;

/// Parses a header value into a [`Header`].
pub type ParseFn = fn(&mut ParseCtx) -> Result<Header>;

/// One registered header.
pub struct RegistryEntry {
    pub kind: HeaderKind,
    pub name: &'static str,
    pub short: Option<&'static str>,
    pub(crate) parse: ParseFn,
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("short", &self.short)
            .finish()
    }
}

/// Invalid registry table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("header {0:?} has an empty name")]
    EmptyName(HeaderKind),
    #[error("header name '{0}' is registered twice")]
    DuplicateName(&'static str),
    #[error("header {0:?} is registered twice")]
    DuplicateKind(HeaderKind),
    #[error("header {0:?} is not registered")]
    MissingKind(HeaderKind),
}

fn parse_as<H>(parser: &mut ParseCtx) -> Result<Header>
where
    H: SipHeaderParse + Into<Header>,
{
    H::parse(parser).map(Into::into)
}

macro_rules! entry {
    ($header:ident) => {
        RegistryEntry {
            kind: HeaderKind::$header,
            name: <$crate::headers::$header as SipHeaderParse>::NAME,
            short: <$crate::headers::$header as SipHeaderParse>::SHORT_NAME,
            parse: parse_as::<$crate::headers::$header>,
        }
    };
}

static ENTRIES: &[RegistryEntry] = &[
    entry!(Accept),
    entry!(AcceptEncoding),
    entry!(AcceptLanguage),
    entry!(AlertInfo),
    entry!(Allow),
    entry!(AllowEvents),
    entry!(AuthenticationInfo),
    entry!(Authorization),
    entry!(CallId),
    entry!(CallInfo),
    entry!(Contact),
    entry!(ContentDisposition),
    entry!(ContentEncoding),
    entry!(ContentLanguage),
    entry!(ContentLength),
    entry!(ContentType),
    entry!(CSeq),
    entry!(Date),
    entry!(ErrorInfo),
    entry!(Event),
    entry!(Expires),
    entry!(From),
    entry!(InReplyTo),
    entry!(MaxForwards),
    entry!(MimeVersion),
    entry!(MinExpires),
    entry!(Organization),
    entry!(Priority),
    entry!(ProxyAuthenticate),
    entry!(ProxyAuthorization),
    entry!(ProxyRequire),
    entry!(RecordRoute),
    entry!(ReplyTo),
    entry!(Require),
    entry!(RetryAfter),
    entry!(Route),
    entry!(Server),
    entry!(Subject),
    entry!(Supported),
    entry!(Timestamp),
    entry!(To),
    entry!(Unsupported),
    entry!(UserAgent),
    entry!(Via),
    entry!(Warning),
    entry!(WWWAuthenticate),
];

static REGISTRY: LazyLock<HeaderRegistry> = LazyLock::new(|| match HeaderRegistry::new(ENTRIES) {
    Ok(registry) => registry,
    Err(err) => panic!("invalid header registry: {err}"),
});

/// Lookup table from header names to their grammar.
#[derive(Debug)]
pub struct HeaderRegistry {
    entries: &'static [RegistryEntry],
    index: HashMap<String, usize>,
}

impl HeaderRegistry {
    /// Builds a registry over `entries` and [validates] it.
    ///
    /// [validates]: HeaderRegistry::validate
    pub fn new(entries: &'static [RegistryEntry]) -> std::result::Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(entries.len() * 2);

        for (i, entry) in entries.iter().enumerate() {
            for name in std::iter::once(entry.name).chain(entry.short) {
                if index.insert(name.to_ascii_lowercase(), i).is_some() {
                    return Err(RegistryError::DuplicateName(name));
                }
            }
        }
        let registry = Self { entries, index };
        registry.validate()?;

        Ok(registry)
    }

    /// Checks that every [`HeaderKind`] has exactly one entry and that no
    /// name is empty.
    pub fn validate(&self) -> std::result::Result<(), RegistryError> {
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.name.is_empty() || entry.short.is_some_and(str::is_empty) {
                return Err(RegistryError::EmptyName(entry.kind));
            }
            if self.entries[..i].iter().any(|e| e.kind == entry.kind) {
                return Err(RegistryError::DuplicateKind(entry.kind));
            }
        }

        match HeaderKind::ALL
            .iter()
            .find(|kind| !self.entries.iter().any(|e| e.kind == **kind))
        {
            Some(kind) => Err(RegistryError::MissingKind(*kind)),
            None => Ok(()),
        }
    }

    /// The registry of every header type of the crate.
    ///
    /// # Panics
    ///
    /// On first use, if the built-in table is invalid.
    pub fn global() -> &'static HeaderRegistry {
        &REGISTRY
    }

    /// Finds the entry of a long or compact name, ignoring ASCII case.
    pub fn lookup(&self, name: &str) -> Option<&RegistryEntry> {
        self.index
            .get(name.to_ascii_lowercase().as_str())
            .map(|&i| &self.entries[i])
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_registry_is_valid() {
        let registry = HeaderRegistry::global();

        assert_eq!(registry.entries().len(), HeaderKind::ALL.len());
        assert_eq!(registry.validate(), Ok(()));
    }

    #[test]
    fn test_lookup_ignores_case() {
        let registry = HeaderRegistry::global();

        assert_eq!(registry.lookup("CALL-ID").map(|e| e.kind), Some(HeaderKind::CallId));
        assert_eq!(registry.lookup("i").map(|e| e.kind), Some(HeaderKind::CallId));
        assert_eq!(registry.lookup("V").map(|e| e.name), Some("Via"));
        assert_eq!(registry.lookup("u").map(|e| e.name), Some("Allow-Events"));
        assert!(registry.lookup("X-Foo").is_none());
    }

    #[test]
    fn test_duplicate_entries_are_rejected() {
        static DUPLICATE: &[RegistryEntry] = &[entry!(CallId), entry!(CallId)];

        assert_eq!(
            HeaderRegistry::new(DUPLICATE).err(),
            Some(RegistryError::DuplicateName("Call-ID"))
        );
    }

    #[test]
    fn test_missing_entries_are_rejected() {
        static PARTIAL: &[RegistryEntry] = &[entry!(Accept)];

        assert_eq!(
            HeaderRegistry::new(PARTIAL).err(),
            Some(RegistryError::MissingKind(HeaderKind::AcceptEncoding))
        );
    }
}
