use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::matching::Matches;
use crate::parser::ParseCtx;
use crate::{Error, Result};

/// The `;name[=value]` list that follows a URI, an address or a header value.
///
/// Kept in wire order, repeated names included.
#[derive(Debug, PartialEq, Eq, Default, Clone)]
pub struct Parameters {
    inner: Vec<Parameter>,
}

impl Parameters {
    pub fn new() -> Self {
        Self { inner: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Value of the first `name` parameter, compared ignoring ASCII case.
    ///
    /// `None` when missing or valueless, see [`Parameters::contains`].
    pub fn get_named(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Parameter::value)
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.get_all(name).next()
    }

    /// Every `name` parameter, in wire order.
    pub fn get_all<'a, 'n>(&'a self, name: &'n str) -> impl Iterator<Item = &'a Parameter> + use<'a, 'n> {
        self.inner.iter().filter(move |p| p.name.eq_ignore_ascii_case(name))
    }

    /// `true` for `name` with or without a value.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.inner.iter()
    }

    pub fn push(&mut self, param: Parameter) {
        self.inner.push(param)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for param in &self.inner {
            write!(f, ";{param}")?;
        }
        Ok(())
    }
}

impl<'a, const N: usize> From<[(&'a str, &'a str); N]> for Parameters {
    fn from(params: [(&'a str, &'a str); N]) -> Self {
        let inner = params
            .into_iter()
            .map(|(name, value)| Parameter::new(name, Some(value)))
            .collect();

        Self { inner }
    }
}

impl FromIterator<Parameter> for Parameters {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl Matches for Parameters {
    /// Each template parameter must be present, a template parameter without
    /// value only requires the name.
    fn matches(&self, template: &Self) -> bool {
        template.iter().all(|t| match (self.get(&t.name), &t.value) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(p), Some(v)) => p.value().is_some_and(|value| value.eq_ignore_ascii_case(v)),
        })
    }
}

/// One `name[=value]` pair.
///
/// A quoted value is stored with its quotes so it encodes back unchanged.
///
/// # Examples
///
/// ```
/// use sipparse::message::Parameter;
///
/// let param: Parameter = "param=value".parse().unwrap();
///
/// assert_eq!(param.name(), "param");
/// assert_eq!(param.value(), Some("value"));
/// ```
#[derive(Debug, PartialEq, Eq, Default, Clone)]
pub struct Parameter {
    pub(crate) name: Arc<str>,
    pub(crate) value: Option<Arc<str>>,
}

impl Parameter {
    pub fn new(name: &str, value: Option<&str>) -> Self {
        Self {
            name: name.into(),
            value: value.map(|v| v.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns the value without surrounding quotes.
    pub fn unquoted_value(&self) -> Option<&str> {
        self.value().map(crate::parser::unquote)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(v) = &self.value {
            write!(f, "={v}")?;
        }
        Ok(())
    }
}

impl FromStr for Parameter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parser = ParseCtx::new(s);
        let param = parser.parse_param()?;
        parser.expect_end()?;

        Ok(param)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_from_str() {
        let param: Parameter = "param=value".parse().unwrap();
        assert_eq!(param.name(), "param");
        assert_eq!(param.value(), Some("value"));

        let param: Parameter = "lr".parse().unwrap();
        assert_eq!(param.value(), None);

        let param: Parameter = "realm=\"atlanta.com\"".parse().unwrap();
        assert_eq!(param.value(), Some("\"atlanta.com\""));
        assert_eq!(param.unquoted_value(), Some("atlanta.com"));
    }

    #[test]
    fn test_parameters_display() {
        let params = Parameters::from([("param1", "value1"), ("param2", "value2")]);
        assert_eq!(params.to_string(), ";param1=value1;param2=value2");
    }

    #[test]
    fn test_parameters_get_named() {
        let params = Parameters::from([("param1", "value1"), ("Param2", "value2")]);
        assert_eq!(params.get_named("param1"), Some("value1"));
        assert_eq!(params.get_named("param2"), Some("value2"));
        assert_eq!(params.get_named("param3"), None);
    }

    #[test]
    fn test_parameters_lookup_outlives_name() {
        let params = Parameters::from([("tag", "1928301774")]);
        let (param, value) = {
            let name = String::from("TAG");
            (params.get(&name), params.get_named(&name))
        };

        assert_eq!(param.map(Parameter::name), Some("tag"));
        assert_eq!(value, Some("1928301774"));
    }

    #[test]
    fn test_parameters_keep_duplicates() {
        let params: Parameters = [Parameter::new("a", Some("1")), Parameter::new("a", Some("2"))]
            .into_iter()
            .collect();

        assert_eq!(params.len(), 2);
        assert_eq!(params.get_named("a"), Some("1"));
        assert_eq!(params.get_all("A").filter_map(Parameter::value).collect::<Vec<_>>(), ["1", "2"]);
        assert_eq!(params.to_string(), ";a=1;a=2");
    }

    #[test]
    fn test_parameters_matches() {
        let params = Parameters::from([("transport", "tcp"), ("lr", "")]);

        assert!(params.matches(&Parameters::new()));
        assert!(params.matches(&Parameters::from([("transport", "TCP")])));
        assert!(params.matches(&[Parameter::new("lr", None)].into_iter().collect()));
        assert!(!params.matches(&Parameters::from([("transport", "udp")])));
        assert!(!params.matches(&Parameters::from([("maddr", "x")])));
    }
}
