use std::str::Utf8Error;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while parsing SIP text.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The message has no usable start line or no end of headers.
    #[error("Malformed message: {0}")]
    MalformedMessage(String),

    /// A header value does not follow its grammar.
    #[error("Malformed '{name}' header at offset {offset} near '{text}': {source}")]
    MalformedHeader {
        /// The header name as registered, or as found in the line.
        name: String,
        /// The text from the failure offset to the end of the line.
        text: String,
        /// The offset of the failure within the header line.
        offset: usize,
        /// What went wrong.
        source: Box<Error>,
    },

    /// An invalid SIP, tel or generic URI.
    #[error("Malformed URI '{text}' at offset {offset}: {reason}")]
    MalformedUri {
        text: String,
        offset: usize,
        reason: String,
    },

    /// An invalid name-addr or addr-spec.
    #[error("Malformed address '{text}' at offset {offset}: {reason}")]
    MalformedAddress {
        text: String,
        offset: usize,
        reason: String,
    },

    /// A grammar failure not yet attributed to a header.
    #[error("Syntax error at offset {offset}: {reason}")]
    Syntax { offset: usize, reason: String },

    #[error(transparent)]
    Scan(#[from] sipparse_util::Error),

    #[error(transparent)]
    Utf8(#[from] Utf8Error),
}

impl Error {
    /// Returns `true` if the error is a [`Error::MalformedHeader`].
    pub fn is_malformed_header(&self) -> bool {
        matches!(self, Error::MalformedHeader { .. })
    }

    /// Byte offset of the failure, when known.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::MalformedHeader { offset, .. }
            | Error::MalformedUri { offset, .. }
            | Error::MalformedAddress { offset, .. }
            | Error::Syntax { offset, .. } => Some(*offset),
            Error::Scan(err) => Some(err.offset),
            Error::MalformedMessage(_) | Error::Utf8(_) => None,
        }
    }
}

/// A header line that failed to parse while assembling a message.
///
/// Recorded on the message when the parser is not strict.
#[derive(Debug, Clone)]
pub struct HeaderError {
    /// Index of the logical header line, the start line being `0`.
    pub line: usize,
    /// The header name as written in the line.
    pub name: String,
    /// The unfolded header line.
    pub text: String,
    /// The parse failure.
    pub error: Error,
}
