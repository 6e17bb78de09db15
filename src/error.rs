//! Error taxonomy for registration and dispatch.

use thiserror::Error;

/// Boxed error type carried out of handlers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by the switch.
///
/// `InvalidHandlerKind` is a registration-time programming error and always
/// propagates to the registrant. The three dispatch-time kinds are recovered
/// inside [`Switch::dispatch_request`](crate::Switch::dispatch_request) by
/// default (logged, converted to a 500 response); callers that want their own
/// failure policy use [`Switch::try_dispatch_request`](crate::Switch::try_dispatch_request)
/// and receive them raw.
#[derive(Debug, Error)]
pub enum SwitchError {
    /// The delegate passed to registration does not expose a handle capability.
    #[error("handler must be a function or a delegate exposing a handle capability")]
    InvalidHandlerKind,

    /// Dispatch was attempted against an empty registry.
    #[error("no handlers registered")]
    NoHandlersRegistered,

    /// The registry scan exhausted every entry without a satisfying pattern.
    #[error("no handler matched")]
    NoHandlerMatched,

    /// The matched handler failed, either before or while completing its
    /// asynchronous work.
    #[error("handler failed: {0}")]
    HandlerFailure(#[source] BoxError),
}
