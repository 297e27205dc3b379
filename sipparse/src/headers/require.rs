use crate::macros::token_list_header;

// Require  =  "Require" HCOLON option-tag *(COMMA option-tag)
token_list_header! {
    /// The `Require` SIP header.
    ///
    /// Lists the options the sender expects the recipient to support.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sipparse::headers::Require;
    /// let require = Require::new(["100rel"]);
    ///
    /// assert_eq!(require.to_string(), "Require: 100rel");
    /// ```
    Require {
        name: "Require",
        short: None,
        allow_empty: false,
    }
}
