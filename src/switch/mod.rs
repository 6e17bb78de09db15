//! Registry, dispatcher, and invocation boundary.
//!
//! # Data Flow
//! ```text
//! Registration (setup time):
//!     (pattern shorthand, handler shorthand)
//!     → handler.rs (normalize into one internal callable shape)
//!     → switch.rs (append entry; insertion order is load-bearing)
//!
//! Dispatch (per request):
//!     http::Request
//!     → request adapter (ObservedRequest snapshot)
//!     → switch.rs find_handler (ordered scan, first satisfying entry wins)
//!     → invoke handler, await completion uniformly
//!     → handler response, or fallback 500 on any failure
//! ```
//!
//! # Design Decisions
//! - Entries are immutable after registration; the registry is append-only,
//!   never reordered or deduplicated
//! - Registry is read-only during dispatch; registration must happen-before
//!   concurrent dispatches (caller discipline, no internal lock)
//! - Deterministic: identical registry and observed tuple select the same entry
//! - The boundary imposes no timeout; a handler that never completes holds
//!   its request open

pub mod handler;
#[allow(clippy::module_inception)]
pub mod switch;

pub use handler::{Handle, Handler, HandlerEntry, HandlerFn, HandlerFuture};
pub use switch::Switch;
