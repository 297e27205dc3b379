use crate::macros::text_header;

// Server  =  "Server" HCOLON server-val *(LWS server-val)
text_header! {
    /// The `Server` SIP header.
    ///
    /// Information about the software used by the UAS to handle the
    /// request.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sipparse::headers::Server;
    /// let server = Server::new("HomeServer v2");
    ///
    /// assert_eq!(server.to_string(), "Server: HomeServer v2");
    /// ```
    Server {
        name: "Server",
        short: None,
        allow_empty: false,
    }
}
