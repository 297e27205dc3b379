use crate::macros::text_header;

// User-Agent  =  "User-Agent" HCOLON server-val *(LWS server-val)
text_header! {
    /// The `User-Agent` SIP header.
    ///
    /// Information about the UAC originating the request.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sipparse::headers::UserAgent;
    /// let agent = UserAgent::new("Softphone Beta1.5");
    ///
    /// assert_eq!(agent.to_string(), "User-Agent: Softphone Beta1.5");
    /// ```
    UserAgent {
        name: "User-Agent",
        short: None,
        allow_empty: false,
    }
}
