use std::fmt;
use std::sync::Arc;

use itertools::Itertools;

use crate::error::Result;
use crate::headers::{SipHeaderParse, Q_PARAM};
use crate::macros::{comma_separated_header_value, parse_params};
use crate::matching::{matches_ignore_case, Matches};
use crate::message::Parameters;
use crate::parser::ParseCtx;
use crate::Q;

/// A language range with its parameters, e.g. `da;q=0.8`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Language {
    language: Arc<str>,
    params: Parameters,
}

impl Language {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.into(),
            params: Parameters::new(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the `q` parameter.
    pub fn q(&self) -> Option<Q> {
        self.params.get_named(Q_PARAM)?.parse().ok()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.language, self.params)
    }
}

impl Matches for Language {
    fn matches(&self, template: &Self) -> bool {
        matches_ignore_case(&self.language, &template.language) && self.params.matches(&template.params)
    }
}

/// The `Accept-Language` SIP header.
///
/// Indicates the preferred languages for reason phrases, session
/// descriptions, or status responses.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::{AcceptLanguage, SipHeaderParse};
/// let lang = AcceptLanguage::from_bytes(b"da, en-gb;q=0.8").unwrap();
///
/// assert_eq!(lang.to_string(), "Accept-Language: da, en-gb;q=0.8");
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct AcceptLanguage(Vec<Language>);

impl AcceptLanguage {
    pub fn new(languages: Vec<Language>) -> Self {
        Self(languages)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.0.iter()
    }
}

impl SipHeaderParse for AcceptLanguage {
    const NAME: &'static str = "Accept-Language";
    /*
     * Accept-Language  =  "Accept-Language" HCOLON
     *                      [ language *(COMMA language) ]
     * language         =  language-range *(SEMI accept-param)
     * language-range   =  ( ( 1*8ALPHA *( "-" 1*8ALPHA ) ) / "*" )
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        parser.ws();
        if parser.is_eof() {
            return Ok(Self::default());
        }
        let languages = comma_separated_header_value!(parser => {
            let language = parser.parse_token()?.into();
            let params = parse_params!(parser, ParseCtx::parse_param);

            Language { language, params }
        });

        Ok(Self(languages))
    }
}

impl fmt::Display for AcceptLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.0.iter().format(", "))
    }
}

impl Matches for AcceptLanguage {
    fn matches(&self, template: &Self) -> bool {
        self.0.matches(&template.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let lang = AcceptLanguage::from_bytes(b"da, en-gb;q=0.8, en;q=0.7").unwrap();
        let langs: Vec<_> = lang.iter().collect();

        assert_eq!(langs.len(), 3);
        assert_eq!(langs[0].q(), None);
        assert_eq!(langs[1].language(), "en-gb");
        assert_eq!(langs[2].q(), Some(Q(700)));
    }
}
