//! Pattern-matching HTTP request dispatcher.
//!
//! Given an incoming request and an ordered list of (pattern, handler)
//! entries, the switch selects the first handler whose pattern matches every
//! constrained field of the request and invokes it; when nothing matches or
//! the handler fails, the client receives a safe fallback 500 response.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────┐
//!                       │                   SWITCH                     │
//!   Client Request      │  ┌─────────┐   ┌──────────┐   ┌───────────┐ │
//!   ────────────────────┼─▶│ server  │──▶│ request  │──▶│  switch   │ │
//!                       │  │ adapter │   │ adapter  │   │ dispatcher│ │
//!                       │  └─────────┘   └──────────┘   └─────┬─────┘ │
//!                       │                                     │       │
//!                       │                 ┌──────────┐        ▼       │
//!                       │                 │ pattern  │◀─ ordered scan │
//!                       │                 │ matcher  │   first match  │
//!                       │                 └──────────┘   wins         │
//!                       │                                     │       │
//!   Client Response     │                               ┌─────▼─────┐ │
//!   ◀───────────────────┼───────────────────────────────│  handler  │ │
//!                       │        (or fallback 500)      │ invocation│ │
//!                       │                               └───────────┘ │
//!                       └──────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use axum::body::Body;
//! use axum::response::Response;
//! use http_switch::{BoxError, Switch, SwitchServer};
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut switch = Switch::new();
//!     switch.register("/health", |_request| async {
//!         Ok::<Response, BoxError>(Response::new(Body::from("ok")))
//!     });
//!
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!     SwitchServer::new(Arc::new(switch)).run(listener).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod pattern;
pub mod request;
pub mod server;
pub mod switch;

pub use config::SwitchOptions;
pub use error::{BoxError, SwitchError};
pub use pattern::{FieldPattern, FieldValue, Pattern};
pub use request::{ConnectionInfo, Observe, ObservedRequest};
pub use server::SwitchServer;
pub use switch::{Handle, Handler, HandlerEntry, HandlerFn, HandlerFuture, Switch};
