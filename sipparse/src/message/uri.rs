use std::borrow::Cow;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::Arc;

use crate::matching::{Matches, matches_ignore_case};
use crate::message::{Parameter, Parameters, SipMethod};
use crate::{Error, Result};

const TRANSPORT_PARAM: &str = "transport";
const USER_PARAM: &str = "user";
const METHOD_PARAM: &str = "method";
const TTL_PARAM: &str = "ttl";
const LR_PARAM: &str = "lr";
const MADDR_PARAM: &str = "maddr";

/// Any URI found in a SIP message.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Uri {
    /// A `sip:` or `sips:` URI.
    Sip(SipUri),
    /// A `tel:` URL.
    Tel(TelUrl),
    /// Any other scheme, kept opaque.
    Generic(GenericUri),
}

impl Uri {
    /// Returns the scheme as written for generic URIs, lowercase otherwise.
    pub fn scheme_str(&self) -> &str {
        match self {
            Uri::Sip(uri) => uri.scheme.as_str(),
            Uri::Tel(_) => "tel",
            Uri::Generic(uri) => &uri.scheme,
        }
    }

    /// Returns `true` for `sip:` and `sips:` URIs.
    pub fn is_sip(&self) -> bool {
        matches!(self, Uri::Sip(_))
    }

    /// Returns the SIP URI, if it is one.
    pub fn as_sip(&self) -> Option<&SipUri> {
        match self {
            Uri::Sip(uri) => Some(uri),
            _ => None,
        }
    }

    /// Returns the tel URL, if it is one.
    pub fn as_tel(&self) -> Option<&TelUrl> {
        match self {
            Uri::Tel(tel) => Some(tel),
            _ => None,
        }
    }

    /// Returns `true` when the URI carries `;` parameters or `?` headers,
    /// which forces the name-addr form in address headers.
    pub(crate) fn needs_brackets(&self) -> bool {
        match self {
            Uri::Sip(uri) => !uri.params.is_empty() || uri.headers.is_some(),
            Uri::Tel(tel) => !tel.params.is_empty(),
            Uri::Generic(uri) => uri.rest.contains([';', ',', '?']),
        }
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Uri::Sip(uri) => fmt::Display::fmt(uri, f),
            Uri::Tel(tel) => fmt::Display::fmt(tel, f),
            Uri::Generic(uri) => fmt::Display::fmt(uri, f),
        }
    }
}

impl FromStr for Uri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse_uri(s)
    }
}

impl Matches for Uri {
    fn matches(&self, template: &Self) -> bool {
        match (self, template) {
            (Uri::Sip(uri), Uri::Sip(template)) => uri.matches(template),
            (Uri::Tel(tel), Uri::Tel(template)) => tel.matches(template),
            (Uri::Generic(uri), Uri::Generic(template)) => uri.matches(template),
            _ => false,
        }
    }
}

/// The scheme of a [`SipUri`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Scheme {
    #[default]
    Sip,
    Sips,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Sip => "sip",
            Scheme::Sips => "sips",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `sip:` or `sips:` URI.
///
/// ```text
/// SIP-URI  =  "sip:" [ userinfo ] hostport uri-parameters [ headers ]
/// ```
///
/// The `?` headers part is kept as opaque text, percent escapes included.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct SipUri {
    pub(crate) scheme: Scheme,
    pub(crate) user: Option<UserInfo>,
    pub(crate) host_port: HostPort,
    pub(crate) params: Parameters,
    pub(crate) headers: Option<Arc<str>>,
}

impl SipUri {
    /// Creates a URI without parameters.
    pub fn new(scheme: Scheme, user: Option<UserInfo>, host_port: HostPort) -> Self {
        Self {
            scheme,
            user,
            host_port,
            params: Parameters::new(),
            headers: None,
        }
    }

    /// Returns a builder for `SipUri`.
    pub fn builder() -> UriBuilder {
        UriBuilder::default()
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub fn host_port(&self) -> &HostPort {
        &self.host_port
    }

    /// All uri-parameters, in wire order.
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// The raw text after `?`, if any.
    pub fn headers(&self) -> Option<&str> {
        self.headers.as_deref()
    }

    /// Returns the `transport` parameter.
    pub fn transport_param(&self) -> Option<&str> {
        self.params.get_named(TRANSPORT_PARAM)
    }

    /// Returns the `user` parameter.
    pub fn user_param(&self) -> Option<&str> {
        self.params.get_named(USER_PARAM)
    }

    /// Returns the `method` parameter.
    pub fn method_param(&self) -> Option<SipMethod> {
        self.params.get_named(METHOD_PARAM).map(SipMethod::from)
    }

    /// Returns the `ttl` parameter, `None` if absent or not in `0..=255`.
    pub fn ttl_param(&self) -> Option<u8> {
        self.params.get_named(TTL_PARAM).and_then(|ttl| ttl.parse().ok())
    }

    /// Returns `true` if the `lr` parameter is present.
    pub fn lr_param(&self) -> bool {
        self.params.contains(LR_PARAM)
    }

    /// Returns the `maddr` parameter.
    pub fn maddr_param(&self) -> Option<&str> {
        self.params.get_named(MADDR_PARAM)
    }
}

impl fmt::Display for SipUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.scheme)?;

        if let Some(user) = &self.user {
            write!(f, "{user}@")?;
        }
        write!(f, "{}{}", self.host_port, self.params)?;

        if let Some(headers) = &self.headers {
            write!(f, "?{headers}")?;
        }

        Ok(())
    }
}

impl Matches for SipUri {
    fn matches(&self, template: &Self) -> bool {
        self.scheme == template.scheme
            && self.user.matches(&template.user)
            && self.host_port.matches(&template.host_port)
            && self.params.matches(&template.params)
            && self.headers.matches(&template.headers)
    }
}

/// Builder for [`SipUri`].
#[derive(Default)]
pub struct UriBuilder {
    uri: SipUri,
}

impl UriBuilder {
    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.uri.scheme = scheme;
        self
    }

    pub fn user(mut self, user: UserInfo) -> Self {
        self.uri.user = Some(user);
        self
    }

    pub fn host(mut self, host_port: HostPort) -> Self {
        self.uri.host_port = host_port;
        self
    }

    pub fn param(mut self, name: &str, value: Option<&str>) -> Self {
        self.uri.params.push(Parameter::new(name, value));
        self
    }

    pub fn headers(mut self, headers: &str) -> Self {
        self.uri.headers = Some(headers.into());
        self
    }

    pub fn build(self) -> SipUri {
        self.uri
    }
}

/// The `user[:password]` part of a [`SipUri`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UserInfo {
    pub(crate) user: Arc<str>,
    pub(crate) pass: Option<Arc<str>>,
}

impl UserInfo {
    pub fn new(user: &str, pass: Option<&str>) -> Self {
        Self {
            user: user.into(),
            pass: pass.map(Into::into),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn pass(&self) -> Option<&str> {
        self.pass.as_deref()
    }
}

impl fmt::Display for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user)?;
        if let Some(pass) = &self.pass {
            write!(f, ":{pass}")?;
        }
        Ok(())
    }
}

impl Matches for UserInfo {
    fn matches(&self, template: &Self) -> bool {
        self.user.matches(&template.user) && self.pass.matches(&template.pass)
    }
}

/// A domain name or an IP address.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Host {
    DomainName(Arc<str>),
    IpAddr(IpAddr),
}

impl Host {
    /// Returns `true` if the host is an IP address.
    pub fn is_ip_addr(&self) -> bool {
        matches!(self, Host::IpAddr(_))
    }

    /// The host as text, IPv6 addresses without brackets.
    pub fn as_str(&self) -> Cow<'_, str> {
        match self {
            Host::DomainName(host) => Cow::Borrowed(host),
            Host::IpAddr(ip_addr) => Cow::Owned(ip_addr.to_string()),
        }
    }
}

impl Default for Host {
    fn default() -> Self {
        Host::DomainName(Arc::from(""))
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::DomainName(domain) => f.write_str(domain),
            Host::IpAddr(IpAddr::V6(ip)) => write!(f, "[{ip}]"),
            Host::IpAddr(ip) => write!(f, "{ip}"),
        }
    }
}

impl FromStr for Host {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse_host(s)
    }
}

impl Matches for Host {
    /// Domain names compare ignoring case, an empty domain matches any host.
    fn matches(&self, template: &Self) -> bool {
        match (self, template) {
            (_, Host::DomainName(t)) if t.is_empty() => true,
            (Host::DomainName(host), Host::DomainName(t)) => matches_ignore_case(host, t),
            (Host::IpAddr(ip), Host::IpAddr(t)) => ip == t,
            _ => false,
        }
    }
}

/// A host with an optional port.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct HostPort {
    pub host: Host,
    pub port: Option<u16>,
}

impl HostPort {
    pub fn new(host: Host, port: Option<u16>) -> Self {
        Self { host, port }
    }

    /// Returns the IP address, if the host is one.
    pub fn ip_addr(&self) -> Option<IpAddr> {
        match self.host {
            Host::IpAddr(ip) => Some(ip),
            Host::DomainName(_) => None,
        }
    }

    pub fn is_domain(&self) -> bool {
        !self.host.is_ip_addr()
    }

    pub fn host_as_str(&self) -> Cow<'_, str> {
        self.host.as_str()
    }
}

impl FromStr for HostPort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse_host_port(s)
    }
}

impl From<Host> for HostPort {
    fn from(host: Host) -> Self {
        Self { host, port: None }
    }
}

impl fmt::Display for HostPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

impl Matches for HostPort {
    fn matches(&self, template: &Self) -> bool {
        self.host.matches(&template.host) && template.port.is_none_or(|port| self.port == Some(port))
    }
}

/// A `tel:` URL (RFC3966).
///
/// Only the subscriber number and its parameters are kept.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TelUrl {
    pub(crate) global: bool,
    pub(crate) number: Arc<str>,
    pub(crate) params: Parameters,
}

impl TelUrl {
    /// Creates a tel URL, `number` without the leading `+`.
    pub fn new(global: bool, number: &str) -> Self {
        Self {
            global,
            number: number.into(),
            params: Parameters::new(),
        }
    }

    /// Returns `true` for a global number (`+` prefixed).
    pub fn is_global(&self) -> bool {
        self.global
    }

    /// The number without the `+` prefix, separators included.
    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Returns the `phone-context` parameter.
    pub fn phone_context(&self) -> Option<&str> {
        self.params.get_named("phone-context")
    }

    /// Returns the `isub` parameter.
    pub fn isub(&self) -> Option<&str> {
        self.params.get_named("isub")
    }
}

impl fmt::Display for TelUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("tel:")?;
        if self.global {
            f.write_str("+")?;
        }
        write!(f, "{}{}", self.number, self.params)
    }
}

impl Matches for TelUrl {
    fn matches(&self, template: &Self) -> bool {
        (template.number.is_empty() || (self.global == template.global && self.number == template.number))
            && self.params.matches(&template.params)
    }
}

/// A URI with a scheme this crate does not interpret.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GenericUri {
    pub(crate) scheme: Arc<str>,
    pub(crate) rest: Arc<str>,
}

impl GenericUri {
    pub fn new(scheme: &str, rest: &str) -> Self {
        Self {
            scheme: scheme.into(),
            rest: rest.into(),
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Everything after `scheme:`.
    pub fn rest(&self) -> &str {
        &self.rest
    }
}

impl fmt::Display for GenericUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scheme, self.rest)
    }
}

impl Matches for GenericUri {
    fn matches(&self, template: &Self) -> bool {
        matches_ignore_case(&self.scheme, &template.scheme) && self.rest.matches(&template.rest)
    }
}
