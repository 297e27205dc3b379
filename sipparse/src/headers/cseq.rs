use std::fmt;

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::matching::Matches;
use crate::message::SipMethod;
use crate::parser::ParseCtx;

/// The `CSeq` SIP header.
///
/// Ensures order and tracking of SIP transactions within a
/// session.
///
/// # Examples
///
/// ```
/// # use sipparse::{headers::CSeq, message::SipMethod};
/// let cseq = CSeq::new(1, SipMethod::Options);
///
/// assert_eq!(
///     "CSeq: 1 OPTIONS",
///     cseq.to_string()
/// );
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CSeq {
    /// The CSeq number.
    pub cseq: u32,
    /// The CSeq method.
    pub method: SipMethod,
}

impl CSeq {
    /// Creates a new `CSeq` instance.
    pub fn new(cseq: u32, method: SipMethod) -> Self {
        Self { cseq, method }
    }

    /// Returns the cseq number.
    pub fn cseq(&self) -> u32 {
        self.cseq
    }

    /// Returns the SIP method associated with the cseq.
    pub fn method(&self) -> &SipMethod {
        &self.method
    }
}

impl SipHeaderParse for CSeq {
    const NAME: &'static str = "CSeq";
    /*
     * CSeq  =  "CSeq" HCOLON 1*DIGIT LWS Method
     */
    fn parse(parser: &mut ParseCtx) -> Result<CSeq> {
        let cseq = parser.parse_u32()?;

        if parser.read_while(sipparse_util::util::is_space).is_empty() {
            return parser.syntax_error("expected space before method");
        }
        let method = SipMethod::from(parser.parse_token()?);

        Ok(CSeq { cseq, method })
    }
}

impl fmt::Display for CSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", CSeq::NAME, self.cseq, self.method)
    }
}

impl Matches for CSeq {
    fn matches(&self, template: &Self) -> bool {
        self.cseq == template.cseq && self.method.matches(&template.method)
    }
}
