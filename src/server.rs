//! Server adapter: the explicit subscription point between a listening
//! socket and the switch.
//!
//! # Responsibilities
//! - Bind the switch to a tokio listener through an axum catch-all route
//! - Capture per-connection socket addressing as [`ConnectionInfo`]
//! - Correlate request logs with a generated request id
//! - Shut down gracefully on ctrl-c
//!
//! # Design Decisions
//! - The core stays a plain dispatch function; this adapter is constructed
//!   once at setup and holds the only long-lived reference to the switch
//! - No timeout layer here: the switch imposes none by contract, and hosts
//!   that want one add their own layer around the router

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::response::Response;
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::request::connection::ConnectionInfo;
use crate::switch::Switch;

/// HTTP server that feeds every incoming request into a shared [`Switch`].
pub struct SwitchServer {
    switch: Arc<Switch>,
}

impl SwitchServer {
    pub fn new(switch: Arc<Switch>) -> Self {
        Self { switch }
    }

    /// Build the axum router: one catch-all route into the dispatcher.
    fn build_router(&self) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch_handler))
            .route("/", any(dispatch_handler))
            .with_state(self.switch.clone())
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            handlers = self.switch.len(),
            "Switch server starting"
        );

        let app = self
            .build_router()
            .into_make_service_with_connect_info::<ConnectionInfo>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Switch server stopped");
        Ok(())
    }
}

/// Catch-all route handler: log, then hand the request to the switch's
/// error-recovering dispatch.
async fn dispatch_handler(
    State(switch): State<Arc<Switch>>,
    request: Request<Body>,
) -> Response {
    let request_id = Uuid::new_v4();

    tracing::debug!(
        request_id = %request_id,
        method = %request.method(),
        path = request.uri().path(),
        "Dispatching request"
    );

    let response = switch.dispatch_request(request).await;

    tracing::debug!(
        request_id = %request_id,
        status = response.status().as_u16(),
        "Dispatch complete"
    );

    response
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
