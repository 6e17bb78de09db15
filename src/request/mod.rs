//! Request adapter subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming http::Request (+ ConnectionInfo extension)
//!     → observed.rs (extract pathname, host header, method, version,
//!                    socket addressing; apply trailing-slash trim)
//!     → ObservedRequest snapshot, consumed by the dispatcher scan
//!
//! Bare URL string (off-band matching tests)
//!     → observed.rs (parse pathname only; every other field absent)
//!     → ObservedRequest snapshot
//! ```
//!
//! # Design Decisions
//! - Every field is best-effort: a missing header or socket yields an absent
//!   value, never a failure
//! - Host comes from the `Host` header, not the parsed URL; most requests
//!   carry only a path plus headers
//! - Port comes from the server-side local port of the accepted connection
//! - The snapshot is derived fresh per dispatch, never cached across requests

pub mod connection;
pub mod observed;

pub use connection::ConnectionInfo;
pub use observed::{Observe, ObservedRequest};
