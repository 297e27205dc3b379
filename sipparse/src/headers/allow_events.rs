use crate::macros::token_list_header;

// Allow-Events =  ( "Allow-Events" / "u" ) HCOLON event-type
//                 *(COMMA event-type)
token_list_header! {
    /// The `Allow-Events` SIP header.
    ///
    /// Lists the event packages the sender supports.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sipparse::headers::AllowEvents;
    /// let events = AllowEvents::new(["presence", "dialog"]);
    ///
    /// assert_eq!(events.to_string(), "Allow-Events: presence, dialog");
    /// ```
    AllowEvents {
        name: "Allow-Events",
        short: Some("u"),
        allow_empty: false,
    }
}
