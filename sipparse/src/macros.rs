macro_rules! lookup_table {
    ($name:ident => $( $slice:expr ),+) => {
        const $name: [bool; 256] = {
            let mut arr = [false; 256];
            $(
                let mut i = 0;
                while i < $slice.len() {
                    arr[$slice[i] as usize] = true;
                    i += 1;
                }
            )*
            arr
        };
    };
}

/// Reads `*(SEMI param)` into a [`Parameters`] list.
///
/// [`Parameters`]: crate::message::Parameters
macro_rules! parse_params {
    ($parser:ident, $func:expr) => {{
        let mut params = $crate::message::Parameters::new();
        $parser.ws();
        while $parser.advance_if(b';').is_some() {
            $parser.ws();
            let param = $func($parser)?;
            params.push(param);
            $parser.ws();
        }
        params
    }};
}

/// Runs `$body` for each element of a comma separated list.
///
/// An empty element (`"a,,b"`, `"a,"`) makes the enclosing function
/// return an error.
macro_rules! comma_separated {
    ($parser:ident => $body:expr) => {{
        loop {
            $parser.ws();
            if matches!($parser.peek(), Some(b',') | None) {
                return $parser.syntax_error("empty list element");
            }
            $body;
            $parser.ws();
            if $parser.advance_if(b',').is_none() {
                break;
            }
        }
    }};
}

/// Same as [`comma_separated`] collecting each element in a `Vec`.
macro_rules! comma_separated_header_value {
    ($parser:ident => $body:expr) => {{
        let mut hdr_itens = Vec::with_capacity(1);
        $crate::macros::comma_separated!($parser => {
            hdr_itens.push($body);
        });
        hdr_itens
    }};
}

/// Defines a header whose value is a comma separated list of tokens.
macro_rules! token_list_header {
    (
        $(#[$doc:meta])*
        $header:ident {
            name: $hname:literal,
            short: $short:expr,
            allow_empty: $allow_empty:literal $(,)?
        }
    ) => {
        $(#[$doc])*
        #[derive(Debug, PartialEq, Eq, Clone, Default)]
        pub struct $header(Vec<std::sync::Arc<str>>);

        impl $header {
            /// Creates the header from a list of tokens.
            pub fn new<I, S>(tokens: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: AsRef<str>,
            {
                Self(tokens.into_iter().map(|t| std::sync::Arc::from(t.as_ref())).collect())
            }

            /// Returns an iterator over the tokens, in wire order.
            pub fn iter(&self) -> impl Iterator<Item = &str> {
                self.0.iter().map(|t| t.as_ref())
            }

            /// Returns `true` if `token` is in the list, ignoring ASCII case.
            pub fn contains(&self, token: &str) -> bool {
                self.iter().any(|t| t.eq_ignore_ascii_case(token))
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl $crate::headers::SipHeaderParse for $header {
            const NAME: &'static str = $hname;
            const SHORT_NAME: Option<&'static str> = $short;

            fn parse(parser: &mut $crate::parser::ParseCtx) -> $crate::Result<Self> {
                parser.ws();
                if $allow_empty && parser.is_eof() {
                    return Ok(Self::default());
                }
                let tokens = $crate::macros::comma_separated_header_value!(parser => {
                    std::sync::Arc::<str>::from(parser.parse_token()?)
                });

                Ok(Self(tokens))
            }
        }

        impl std::fmt::Display for $header {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                use itertools::Itertools;

                write!(
                    f,
                    "{}: {}",
                    <Self as $crate::headers::SipHeaderParse>::NAME,
                    self.0.iter().format(", ")
                )
            }
        }

        impl $crate::matching::Matches for $header {
            fn matches(&self, template: &Self) -> bool {
                template.iter().all(|t| self.contains(t))
            }
        }
    };
}

/// Defines a header whose value is a single unsigned number.
macro_rules! numeric_header {
    (
        $(#[$doc:meta])*
        $header:ident {
            name: $hname:literal,
            short: $short:expr $(,)?
        }
    ) => {
        $(#[$doc])*
        #[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
        pub struct $header(u64);

        impl $header {
            /// Creates the header.
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the numeric value.
            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl $crate::headers::SipHeaderParse for $header {
            const NAME: &'static str = $hname;
            const SHORT_NAME: Option<&'static str> = $short;

            fn parse(parser: &mut $crate::parser::ParseCtx) -> $crate::Result<Self> {
                Ok(Self(parser.parse_u64()?))
            }
        }

        impl std::fmt::Display for $header {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}: {}", <Self as $crate::headers::SipHeaderParse>::NAME, self.0)
            }
        }

        impl $crate::matching::Matches for $header {
            fn matches(&self, template: &Self) -> bool {
                self.0 == template.0
            }
        }
    };
}

/// Defines a header whose value is free text up to the end of the line.
macro_rules! text_header {
    (
        $(#[$doc:meta])*
        $header:ident {
            name: $hname:literal,
            short: $short:expr,
            allow_empty: $allow_empty:literal $(,)?
        }
    ) => {
        $(#[$doc])*
        #[derive(Debug, PartialEq, Eq, Clone)]
        pub struct $header(std::sync::Arc<str>);

        impl $header {
            /// Creates the header.
            pub fn new(value: &str) -> Self {
                Self(value.into())
            }

            /// Returns the header value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl $crate::headers::SipHeaderParse for $header {
            const NAME: &'static str = $hname;
            const SHORT_NAME: Option<&'static str> = $short;

            fn parse(parser: &mut $crate::parser::ParseCtx) -> $crate::Result<Self> {
                let text = parser.read_rest()?;
                if !$allow_empty && text.is_empty() {
                    return parser.syntax_error("empty header value");
                }

                Ok(Self(text.into()))
            }
        }

        impl std::fmt::Display for $header {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}: {}", <Self as $crate::headers::SipHeaderParse>::NAME, self.0)
            }
        }

        impl $crate::matching::Matches for $header {
            fn matches(&self, template: &Self) -> bool {
                $crate::matching::Matches::matches(&self.0, &template.0)
            }
        }
    };
}

/// Builds a [`Headers`] list.
///
/// [`Headers`]: crate::headers::Headers
#[macro_export]
macro_rules! headers {
    () => (
        $crate::headers::Headers::new()
    );
    ($($x:expr),+ $(,)?) => (
        $crate::headers::Headers::from(vec![$($x),+])
    );
}

#[macro_export]
macro_rules! filter_map_header {
    ($hdrs:expr, $header:ident) => {
        $hdrs.iter().filter_map(|hdr| {
            if let $crate::headers::Header::$header(v) = hdr {
                Some(v)
            } else {
                None
            }
        })
    };
}

#[macro_export]
macro_rules! find_map_header {
    ($hdrs:expr, $header:ident) => {
        $hdrs.iter().find_map(|hdr| {
            if let $crate::headers::Header::$header(v) = hdr {
                Some(v)
            } else {
                None
            }
        })
    };
}

pub(crate) use comma_separated;
pub(crate) use comma_separated_header_value;
pub use filter_map_header;
pub use find_map_header;
pub use headers;
pub(crate) use lookup_table;
pub(crate) use numeric_header;
pub(crate) use parse_params;
pub(crate) use text_header;
pub(crate) use token_list_header;
