//! Observed request snapshot.
//!
//! # Responsibilities
//! - Extract the matching-relevant fields from a structured request or a
//!   bare URL string
//! - Normalize the pathname (trailing-slash trim, empty target → `/`)
//!
//! # Design Decisions
//! - Only the pathname is taken from the target; query is irrelevant here
//! - The string form exists for off-band matching tests with no live
//!   connection; every non-URL field is absent in that form

use axum::extract::ConnectInfo;
use axum::http::{header, Request, Version};
use url::Url;

use crate::pattern::matcher::FieldValue;
use crate::request::connection::ConnectionInfo;

/// Read-only snapshot of the fields a pattern can constrain, derived fresh
/// per dispatch. Every field is best-effort optional.
#[derive(Debug, Clone, Default)]
pub struct ObservedRequest {
    pub pathname: Option<String>,
    /// Taken from the `Host` header.
    pub host: Option<String>,
    pub method: Option<String>,
    pub http_version: Option<String>,
    /// Server-side port of the accepted connection.
    pub port: Option<u16>,
    pub remote_address: Option<String>,
    pub remote_port: Option<u16>,
    pub local_address: Option<String>,
    pub local_port: Option<u16>,
}

impl ObservedRequest {
    /// Observe a structured request.
    ///
    /// Socket addressing is read from a [`ConnectionInfo`] carried in the
    /// request extensions, either wrapped in axum's `ConnectInfo` (as the
    /// server adapter inserts it) or bare (as tests and embedding callers
    /// insert it). A request without one simply has those fields absent.
    pub fn from_request<B>(request: &Request<B>, trim_trailing_slash: bool) -> Self {
        let connection = request
            .extensions()
            .get::<ConnectInfo<ConnectionInfo>>()
            .map(|info| info.0)
            .or_else(|| request.extensions().get::<ConnectionInfo>().copied())
            .unwrap_or_default();

        let pathname = normalize_pathname(request.uri().path(), trim_trailing_slash);

        let host = request
            .headers()
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        Self {
            pathname: Some(pathname),
            host,
            method: Some(request.method().as_str().to_string()),
            http_version: version_string(request.version()),
            port: connection.local.map(|addr| addr.port()),
            remote_address: connection.remote.map(|addr| addr.ip().to_string()),
            remote_port: connection.remote.map(|addr| addr.port()),
            local_address: connection.local.map(|addr| addr.ip().to_string()),
            local_port: connection.local.map(|addr| addr.port()),
        }
    }

    /// Observe a bare URL string. Only the pathname is populated; every
    /// other field is absent.
    pub fn from_url(target: &str, trim_trailing_slash: bool) -> Self {
        let pathname = match Url::parse(target) {
            Ok(url) => url.path().to_string(),
            // Origin-form targets like "/a/b" need a base to parse against.
            Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse("http://switch.invalid")
                .ok()
                .and_then(|base| base.join(target).ok())
                .map(|url| url.path().to_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };

        Self {
            pathname: Some(normalize_pathname(&pathname, trim_trailing_slash)),
            ..Self::default()
        }
    }

    pub(crate) fn pathname_value(&self) -> Option<FieldValue<'_>> {
        text(&self.pathname)
    }

    pub(crate) fn host_value(&self) -> Option<FieldValue<'_>> {
        text(&self.host)
    }

    pub(crate) fn method_value(&self) -> Option<FieldValue<'_>> {
        text(&self.method)
    }

    pub(crate) fn http_version_value(&self) -> Option<FieldValue<'_>> {
        text(&self.http_version)
    }

    pub(crate) fn port_value(&self) -> Option<FieldValue<'static>> {
        number(self.port)
    }

    pub(crate) fn remote_address_value(&self) -> Option<FieldValue<'_>> {
        text(&self.remote_address)
    }

    pub(crate) fn remote_port_value(&self) -> Option<FieldValue<'static>> {
        number(self.remote_port)
    }

    pub(crate) fn local_address_value(&self) -> Option<FieldValue<'_>> {
        text(&self.local_address)
    }

    pub(crate) fn local_port_value(&self) -> Option<FieldValue<'static>> {
        number(self.local_port)
    }
}

fn text(value: &Option<String>) -> Option<FieldValue<'_>> {
    value.as_deref().map(FieldValue::Text)
}

fn number(value: Option<u16>) -> Option<FieldValue<'static>> {
    value.map(|n| FieldValue::Number(u64::from(n)))
}

/// Empty targets observe as `/`; with trimming enabled, exactly one trailing
/// `/` is stripped from any pathname longer than the root.
fn normalize_pathname(path: &str, trim_trailing_slash: bool) -> String {
    let mut pathname = if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    };
    if trim_trailing_slash && pathname.len() > 1 && pathname.ends_with('/') {
        pathname.pop();
    }
    pathname
}

fn version_string(version: Version) -> Option<String> {
    let text = if version == Version::HTTP_11 {
        "1.1"
    } else if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2.0"
    } else if version == Version::HTTP_3 {
        "3.0"
    } else if version == Version::HTTP_09 {
        "0.9"
    } else {
        return None;
    };
    Some(text.to_string())
}

/// Inputs the dispatcher can derive an [`ObservedRequest`] from: structured
/// requests and, for off-band matching tests, bare URL strings.
pub trait Observe {
    fn observe(&self, trim_trailing_slash: bool) -> ObservedRequest;
}

impl<B> Observe for Request<B> {
    fn observe(&self, trim_trailing_slash: bool) -> ObservedRequest {
        ObservedRequest::from_request(self, trim_trailing_slash)
    }
}

impl Observe for str {
    fn observe(&self, trim_trailing_slash: bool) -> ObservedRequest {
        ObservedRequest::from_url(self, trim_trailing_slash)
    }
}

impl Observe for String {
    fn observe(&self, trim_trailing_slash: bool) -> ObservedRequest {
        ObservedRequest::from_url(self, trim_trailing_slash)
    }
}
