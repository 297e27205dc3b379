use std::fmt;

use itertools::Itertools;

use crate::error::Result;
use crate::headers::{InfoUri, SipHeaderParse};
use crate::matching::Matches;
use crate::parser::ParseCtx;

const PURPOSE_PARAM: &str = "purpose";

/// The `Call-Info` SIP header.
///
/// Provides additional information about the caller or callee.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::{CallInfo, SipHeaderParse};
/// let info = CallInfo::from_bytes(b"<http://wwww.example.com/alice/photo.jpg> ;purpose=icon").unwrap();
///
/// assert_eq!(info.purpose(), Some("icon"));
/// assert_eq!(
///     info.to_string(),
///     "Call-Info: <http://wwww.example.com/alice/photo.jpg>;purpose=icon"
/// );
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CallInfo(Vec<InfoUri>);

impl CallInfo {
    pub fn new(infos: Vec<InfoUri>) -> Self {
        Self(infos)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InfoUri> {
        self.0.iter()
    }

    /// The `purpose` parameter of the first entry.
    pub fn purpose(&self) -> Option<&str> {
        self.0.first()?.params().get_named(PURPOSE_PARAM)
    }
}

impl SipHeaderParse for CallInfo {
    const NAME: &'static str = "Call-Info";
    /*
     * Call-Info   =  "Call-Info" HCOLON info *(COMMA info)
     * info        =  LAQUOT absoluteURI RAQUOT *( SEMI info-param)
     * info-param  =  ( "purpose" EQUAL ( "icon" / "info"
     *                / "card" / token ) ) / generic-param
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        Ok(Self(InfoUri::parse_list(parser)?))
    }
}

impl fmt::Display for CallInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.0.iter().format(", "))
    }
}

impl Matches for CallInfo {
    fn matches(&self, template: &Self) -> bool {
        self.0.matches(&template.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let info = CallInfo::from_bytes(
            b"<http://wwww.example.com/alice/photo.jpg> ;purpose=icon, \
              <http://www.example.com/alice/> ;purpose=info",
        )
        .unwrap();
        let infos: Vec<_> = info.iter().collect();

        assert_eq!(infos.len(), 2);
        assert_eq!(infos[1].params().get_named("purpose"), Some("info"));
    }
}
