use crate::macros::token_list_header;

// Proxy-Require  =  "Proxy-Require" HCOLON option-tag
//                   *(COMMA option-tag)
token_list_header! {
    /// The `Proxy-Require` SIP header.
    ///
    /// Indicates proxy-sensitive features that must be supported by the
    /// proxy.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sipparse::headers::ProxyRequire;
    /// let require = ProxyRequire::new(["foo", "bar"]);
    ///
    /// assert_eq!(require.to_string(), "Proxy-Require: foo, bar");
    /// ```
    ProxyRequire {
        name: "Proxy-Require",
        short: None,
        allow_empty: false,
    }
}
