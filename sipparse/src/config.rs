//! Parser configuration.

use std::fmt;
use std::sync::Arc;

use crate::error::HeaderError;

/// Callback invoked for each header line that fails to parse.
pub type ErrorListener = Arc<dyn Fn(&HeaderError) + Send + Sync>;

/// Options of a [`MessageParser`].
///
/// [`MessageParser`]: crate::parser::MessageParser
#[derive(Clone)]
pub struct ParserConfig {
    /// Fail the whole message on the first bad header line.
    pub strict: bool,
    /// Copy the body after the headers into the message.
    pub read_body: bool,
    /// Notified of every bad header line, strict or not.
    pub error_listener: Option<ErrorListener>,
}

impl ParserConfig {
    /// Returns a builder for `ParserConfig`.
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            strict: false,
            read_body: true,
            error_listener: None,
        }
    }
}

impl fmt::Debug for ParserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserConfig")
            .field("strict", &self.strict)
            .field("read_body", &self.read_body)
            .field("error_listener", &self.error_listener.is_some())
            .finish()
    }
}

/// Builder for [`ParserConfig`].
#[derive(Default)]
pub struct ParserConfigBuilder {
    config: ParserConfig,
}

impl ParserConfigBuilder {
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    pub fn with_read_body(mut self, read_body: bool) -> Self {
        self.config.read_body = read_body;
        self
    }

    pub fn with_error_listener<F>(mut self, listener: F) -> Self
    where
        F: Fn(&HeaderError) + Send + Sync + 'static,
    {
        self.config.error_listener = Some(Arc::new(listener));
        self
    }

    pub fn build(self) -> ParserConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();

        assert!(!config.strict);
        assert!(config.read_body);
        assert!(config.error_listener.is_none());
    }

    #[test]
    fn test_builder() {
        let config = ParserConfig::builder()
            .with_strict(true)
            .with_read_body(false)
            .with_error_listener(|_| {})
            .build();

        assert!(config.strict);
        assert!(!config.read_body);
        assert_eq!(
            format!("{config:?}"),
            "ParserConfig { strict: true, read_body: false, error_listener: true }"
        );
    }
}
