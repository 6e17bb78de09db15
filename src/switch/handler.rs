//! Handler normalization.
//!
//! # Responsibilities
//! - Normalize the two registration shorthands (callable, delegate object)
//!   into one internal callable shape, once, at registration time
//! - Reject delegates that do not expose a handle capability
//!
//! # Design Decisions
//! - A [`Handler`] is a tagged union: `Func` for closures and functions,
//!   `Delegate` for trait objects; dispatch never probes types at runtime
//! - Handlers complete through one uniform contract: invoke, obtain a future
//!   (immediate or deferred), await it, branch on success/failure

use std::future::Future;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use futures_util::future::BoxFuture;

use crate::error::{BoxError, SwitchError};
use crate::pattern::Pattern;

/// Completion of one handler invocation. A synchronously-computed response is
/// simply an already-completed future.
pub type HandlerFuture = BoxFuture<'static, Result<Response, BoxError>>;

/// The single internal callable shape every handler normalizes into.
pub type HandlerFn = Arc<dyn Fn(Request<Body>) -> HandlerFuture + Send + Sync>;

/// A delegate object that handles requests.
///
/// `exposes_handle` is the registration-time capability probe: wrappers that
/// only conditionally carry a handler (a plugin slot that may be empty, a
/// feature-gated endpoint) return `false` and are rejected with
/// [`SwitchError::InvalidHandlerKind`] before any request is dispatched.
pub trait Handle: Send + Sync + 'static {
    /// Handle one request, producing the response to send.
    fn handle(&self, request: Request<Body>) -> HandlerFuture;

    /// Whether this delegate currently exposes its handle capability.
    fn exposes_handle(&self) -> bool {
        true
    }
}

/// A registered handler, normalized at registration.
#[derive(Clone)]
pub enum Handler {
    /// A closure or function.
    Func(HandlerFn),
    /// A delegate object bound through its handle capability.
    Delegate(Arc<dyn Handle>),
}

impl Handler {
    /// Normalize a closure or function.
    pub fn from_fn<F, Fut>(handler: F) -> Self
    where
        F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response, BoxError>> + Send + 'static,
    {
        Handler::Func(Arc::new(move |request| -> HandlerFuture {
            Box::pin(handler(request))
        }))
    }

    /// Normalize a delegate object, probing its handle capability once.
    pub fn from_delegate(delegate: Arc<dyn Handle>) -> Result<Self, SwitchError> {
        if delegate.exposes_handle() {
            Ok(Handler::Delegate(delegate))
        } else {
            Err(SwitchError::InvalidHandlerKind)
        }
    }

    /// Invoke the handler with one request.
    pub fn invoke(&self, request: Request<Body>) -> HandlerFuture {
        match self {
            Handler::Func(f) => f(request),
            Handler::Delegate(d) => d.handle(request),
        }
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Handler::Func(_) => f.write_str("Handler::Func"),
            Handler::Delegate(_) => f.write_str("Handler::Delegate"),
        }
    }
}

/// An immutable (pattern, handler) pair. Entries are tried in the registry's
/// insertion order; the first satisfying entry wins.
#[derive(Debug)]
pub struct HandlerEntry {
    pattern: Pattern,
    handler: Handler,
}

impl HandlerEntry {
    pub fn new(pattern: impl Into<Pattern>, handler: Handler) -> Self {
        Self {
            pattern: pattern.into(),
            handler,
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }
}
