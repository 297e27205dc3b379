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

/// A content coding with its parameters, e.g. `gzip;q=0.5`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Coding {
    coding: Arc<str>,
    params: Parameters,
}

impl Coding {
    pub fn new(coding: &str) -> Self {
        Self {
            coding: coding.into(),
            params: Parameters::new(),
        }
    }

    pub fn coding(&self) -> &str {
        &self.coding
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Returns the `q` parameter.
    pub fn q(&self) -> Option<Q> {
        self.params.get_named(Q_PARAM)?.parse().ok()
    }
}

impl fmt::Display for Coding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.coding, self.params)
    }
}

impl Matches for Coding {
    fn matches(&self, template: &Self) -> bool {
        matches_ignore_case(&self.coding, &template.coding) && self.params.matches(&template.params)
    }
}

/// The `Accept-Encoding` SIP header.
///
/// Indicates what content codings the client can understand.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::{AcceptEncoding, SipHeaderParse};
/// let encoding = AcceptEncoding::from_bytes(b"gzip;q=0.5, identity").unwrap();
///
/// assert_eq!(encoding.to_string(), "Accept-Encoding: gzip;q=0.5, identity");
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct AcceptEncoding(Vec<Coding>);

impl AcceptEncoding {
    pub fn new(codings: Vec<Coding>) -> Self {
        Self(codings)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coding> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl SipHeaderParse for AcceptEncoding {
    const NAME: &'static str = "Accept-Encoding";
    /*
     * Accept-Encoding  =  "Accept-Encoding" HCOLON
     *                      [ encoding *(COMMA encoding) ]
     * encoding         =  codings *(SEMI accept-param)
     * codings          =  content-coding / "*"
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        parser.ws();
        if parser.is_eof() {
            return Ok(Self::default());
        }
        let codings = comma_separated_header_value!(parser => {
            let coding = parser.parse_token()?.into();
            let params = parse_params!(parser, ParseCtx::parse_param);

            Coding { coding, params }
        });

        Ok(Self(codings))
    }
}

impl fmt::Display for AcceptEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::NAME, self.0.iter().format(", "))
    }
}

impl Matches for AcceptEncoding {
    fn matches(&self, template: &Self) -> bool {
        self.0.matches(&template.0)
    }
}
