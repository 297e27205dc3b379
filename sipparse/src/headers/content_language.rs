use crate::macros::token_list_header;

// Content-Language  =  "Content-Language" HCOLON
//                      language-tag *(COMMA language-tag)
token_list_header! {
    /// The `Content-Language` SIP header.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sipparse::headers::ContentLanguage;
    /// let lang = ContentLanguage::new(["fr", "en-US"]);
    ///
    /// assert_eq!(lang.to_string(), "Content-Language: fr, en-US");
    /// ```
    ContentLanguage {
        name: "Content-Language",
        short: None,
        allow_empty: false,
    }
}
