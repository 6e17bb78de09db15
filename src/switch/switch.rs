//! The switch: ordered handler registry, dispatcher, and error boundary.
//!
//! # Responsibilities
//! - Own the append-only ordered list of (pattern, handler) entries
//! - Resolve the first entry whose pattern satisfies every observed field
//! - Invoke the resolved handler and await its completion uniformly
//! - Convert any failure into the fallback 500 response (default mode) or
//!   surface it raw (caller-policy mode)

use std::future::Future;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;

use crate::config::SwitchOptions;
use crate::error::{BoxError, SwitchError};
use crate::pattern::matcher::matches;
use crate::pattern::Pattern;
use crate::request::observed::{Observe, ObservedRequest};
use crate::switch::handler::{Handle, Handler, HandlerEntry};

/// Pattern-matching request dispatcher.
///
/// Registration happens at setup time; the registry is read-only during
/// dispatch, so a `Switch` shared behind an [`Arc`] dispatches concurrent
/// requests safely. Each dispatch is independent and reentrant; no
/// per-request state survives a call.
#[derive(Debug, Default)]
pub struct Switch {
    entries: Vec<HandlerEntry>,
    trim_trailing_slash: bool,
}

impl Switch {
    /// An empty switch with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty switch with the given options.
    pub fn with_options(options: SwitchOptions) -> Self {
        Self {
            entries: Vec::new(),
            trim_trailing_slash: options.trim_trailing_slash,
        }
    }

    /// A switch pre-populated with an ordered entry list.
    pub fn with_handlers(handlers: Vec<HandlerEntry>) -> Self {
        Self {
            entries: handlers,
            trim_trailing_slash: false,
        }
    }

    /// Register a handler function for the given pattern. Chainable.
    ///
    /// The pattern argument accepts a [`Pattern`], or the shorthand forms: a
    /// bare string or regular expression, registered as a pathname-only
    /// pattern. Entries are appended; overlap between patterns is resolved
    /// entirely by insertion order, first registered first tried.
    pub fn register<P, F, Fut>(&mut self, pattern: P, handler: F) -> &mut Self
    where
        P: Into<Pattern>,
        F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response, BoxError>> + Send + 'static,
    {
        self.register_entry(HandlerEntry::new(pattern, Handler::from_fn(handler)))
    }

    /// Ergonomic alias of [`Switch::register`].
    pub fn handle<P, F, Fut>(&mut self, pattern: P, handler: F) -> &mut Self
    where
        P: Into<Pattern>,
        F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response, BoxError>> + Send + 'static,
    {
        self.register(pattern, handler)
    }

    /// Register a delegate object for the given pattern.
    ///
    /// The delegate's handle capability is probed once, here; a delegate
    /// without one is rejected with [`SwitchError::InvalidHandlerKind`]
    /// before any request is dispatched.
    pub fn register_delegate<P>(
        &mut self,
        pattern: P,
        delegate: Arc<dyn Handle>,
    ) -> Result<&mut Self, SwitchError>
    where
        P: Into<Pattern>,
    {
        let handler = Handler::from_delegate(delegate)?;
        Ok(self.register_entry(HandlerEntry::new(pattern, handler)))
    }

    /// Append an already-normalized entry.
    pub fn register_entry(&mut self, entry: HandlerEntry) -> &mut Self {
        self.entries.push(entry);
        self
    }

    /// Registered entries, in insertion order.
    pub fn entries(&self) -> &[HandlerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve the first entry whose pattern satisfies the request.
    ///
    /// Accepts a structured request or, for off-band matching tests, a bare
    /// URL string. Deterministic: repeated calls with an identical request
    /// and unchanged registry return the identical entry.
    pub fn find_handler<O>(&self, request: &O) -> Result<&HandlerEntry, SwitchError>
    where
        O: Observe + ?Sized,
    {
        if self.entries.is_empty() {
            return Err(SwitchError::NoHandlersRegistered);
        }

        let observed = request.observe(self.trim_trailing_slash);
        self.entries
            .iter()
            .find(|entry| pattern_matches(entry.pattern(), &observed))
            .ok_or(SwitchError::NoHandlerMatched)
    }

    /// Dispatch one request, propagating failures to the caller.
    ///
    /// This is the caller-policy mode: resolution failures and handler
    /// failures come back raw so an embedding caller can apply its own
    /// failure handling instead of the fallback response.
    pub async fn try_dispatch_request(
        &self,
        request: Request<Body>,
    ) -> Result<Response, SwitchError> {
        let entry = self.find_handler(&request)?;
        entry
            .handler()
            .invoke(request)
            .await
            .map_err(SwitchError::HandlerFailure)
    }

    /// Dispatch one request, recovering every failure into the fallback
    /// 500 response.
    ///
    /// Resolution failures ("no handlers registered", "no handler matched")
    /// and handler failures are logged and answered with status 500; the
    /// resolution cases carry a short diagnostic body, the handler-failure
    /// case an empty one so no internal detail leaks to the client.
    pub async fn dispatch_request(&self, request: Request<Body>) -> Response {
        match self.try_dispatch_request(request).await {
            Ok(response) => response,
            Err(error) => {
                tracing::error!(error = %error, "Request dispatch failed");
                fallback_response(&error)
            }
        }
    }
}

/// AND every pattern field against the observed snapshot. Short-circuits on
/// the first failing field; the matcher is pure, so this is invisible beyond
/// performance.
fn pattern_matches(pattern: &Pattern, observed: &ObservedRequest) -> bool {
    matches(pattern.pathname_constraint(), observed.pathname_value())
        && matches(pattern.hostname_constraint(), observed.host_value())
        && matches(pattern.port.as_ref(), observed.port_value())
        && matches(pattern.remote_address.as_ref(), observed.remote_address_value())
        && matches(pattern.remote_port.as_ref(), observed.remote_port_value())
        && matches(pattern.local_address.as_ref(), observed.local_address_value())
        && matches(pattern.local_port.as_ref(), observed.local_port_value())
        && matches(pattern.method.as_ref(), observed.method_value())
        && matches(pattern.http_version.as_ref(), observed.http_version_value())
}

/// The safety-net response. Building it cannot reasonably fail; if it ever
/// does, the secondary failure is swallowed and a bare 500 goes out.
fn fallback_response(error: &SwitchError) -> Response {
    let body = match error {
        SwitchError::NoHandlersRegistered => Body::from("no handlers registered"),
        SwitchError::NoHandlerMatched => Body::from("no handler matched"),
        _ => Body::empty(),
    };

    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .body(body)
        .unwrap_or_else(|_| {
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        })
}
