use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::macros::parse_params;
use crate::matching::{matches_ignore_case, Matches};
use crate::message::Parameters;
use crate::parser::ParseCtx;

const ID_PARAM: &str = "id";

/// The `Event` SIP header.
///
/// Names the event package of a `SUBSCRIBE` or `NOTIFY`.
///
/// # Examples
///
/// ```
/// # use sipparse::headers::Event;
/// let event = Event::new("presence");
///
/// assert_eq!(event.to_string(), "Event: presence");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Event {
    event_type: Arc<str>,
    params: Parameters,
}

impl Event {
    pub fn new(event_type: &str) -> Self {
        Self {
            event_type: event_type.into(),
            params: Parameters::new(),
        }
    }

    /// The event package, with its template if any, e.g. `presence.winfo`.
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Returns the `id` parameter.
    pub fn id(&self) -> Option<&str> {
        self.params.get_named(ID_PARAM)
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }
}

impl SipHeaderParse for Event {
    const NAME: &'static str = "Event";
    const SHORT_NAME: Option<&'static str> = Some("o");
    /*
     * Event       =  ( "Event" / "o" ) HCOLON event-type
     *                *( SEMI event-param )
     * event-type  =  event-package *( "." event-template )
     */
    fn parse(parser: &mut ParseCtx) -> Result<Self> {
        let event_type = parser.parse_token()?.into();
        let params = parse_params!(parser, ParseCtx::parse_param);

        Ok(Self { event_type, params })
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}{}", Self::NAME, self.event_type, self.params)
    }
}

impl Matches for Event {
    fn matches(&self, template: &Self) -> bool {
        matches_ignore_case(&self.event_type, &template.event_type) && self.params.matches(&template.params)
    }
}
