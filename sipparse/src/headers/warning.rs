use std::fmt;
use std::sync::Arc;

use itertools::Itertools;
use sipparse_util::digits;
use sipparse_util::util::is_space;

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::macros::comma_separated_header_value;
use crate::matching::Matches;
use crate::parser::ParseCtx;

/// One `warning-value` of a `Warning` header.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct WarningValue {
    code: u16,
    agent: Arc<str>,
    text: Arc<str>,
}

impl WarningValue {
    pub fn new(code: u16, agent: &str, text: &str) -> Self {
        Self {
            code,
            agent: agent.into(),
            text: text.into(),
        }
    }

    /// The three digit warning code.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// The host name or pseudonym of the agent adding the warning.
    pub fn agent(&self) -> &str {
        &self.agent
    }

    /// The warning text, unquoted.
    pub fn text(&self) -> &str {
        &self.text
    }

    /*
     * warning-value  =  warn-code SP warn-agent SP warn-text
     * warn-code      =  3DIGIT
     * warn-agent     =  hostport / pseudonym
     * warn-text      =  quoted-string
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        let digits = digits!(parser);
        if digits.len() != 3 {
            return parser.syntax_error("warn-code must have 3 digits");
        }
        let code = digits.iter().fold(0u16, |code, d| code * 10 + u16::from(d - b'0'));

        if parser.read_while(is_space).is_empty() {
            return parser.syntax_error("expected space after warn-code");
        }
        let agent = parser.read_while_str(|b| !is_space(b) && b != b'"')?;
        if agent.is_empty() {
            return parser.syntax_error("expected warn-agent");
        }
        parser.ws();
        let text = parser.parse_quoted()?;

        Ok(Self::new(code, agent, &text))
    }
}

impl fmt::Display for WarningValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} \"", self.code, self.agent)?;
        for c in self.text.chars() {
            if matches!(c, '"' | '\\') {
                f.write_str("\\")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("\"")
    }
}

impl Matches for WarningValue {
    fn matches(&self, template: &Self) -> bool {
        self.code == template.code && self.agent.matches(&template.agent) && self.text.matches(&template.text)
    }
}

/// The `Warning` SIP header.
///
/// Carries additional information about the status of a response.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::{Warning, SipHeaderParse};
/// let warning = Warning::from_bytes(b"307 isi.edu \"Session parameter 'foo' not understood\"").unwrap();
/// let value = warning.iter().next().unwrap();
///
/// assert_eq!(value.code(), 307);
/// assert_eq!(value.agent(), "isi.edu");
/// assert_eq!(value.text(), "Session parameter 'foo' not understood");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Warning(Vec<WarningValue>);

impl Warning {
    pub fn new(values: Vec<WarningValue>) -> Self {
        Self(values)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WarningValue> {
        self.0.iter()
    }
}

impl SipHeaderParse for Warning {
    const NAME: &'static str = "Warning";
    /*
     * Warning  =  "Warning" HCOLON warning-value *(COMMA warning-value)
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        let values = comma_separated_header_value!(parser => WarningValue::parse(parser)?);

        Ok(Self(values))
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.0.iter().format(", "))
    }
}

impl Matches for Warning {
    fn matches(&self, template: &Self) -> bool {
        self.0.matches(&template.0)
    }
}
