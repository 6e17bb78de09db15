//! End-to-end dispatch over a real listener.

mod common;

use std::sync::Arc;

use http_switch::{Pattern, Switch, SwitchServer};
use tokio::net::TcpListener;

use common::respond;

async fn serve(switch: Switch) -> String {
    common::init_tracing();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(SwitchServer::new(Arc::new(switch)).run(listener));
    format!("http://{addr}")
}

#[tokio::test]
async fn matched_request_reaches_handler() {
    let mut switch = Switch::new();
    switch.register("/health", |_req| async { respond(200, "healthy") });

    let base = serve(switch).await;
    let response = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "healthy");
}

#[tokio::test]
async fn unmatched_request_receives_fallback_500() {
    let mut switch = Switch::new();
    switch.register("/known", |_req| async { respond(200, "known") });

    let base = serve(switch).await;
    let response = reqwest::get(format!("{base}/unknown")).await.unwrap();
    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(response.text().await.unwrap(), "no handler matched");
}

#[tokio::test]
async fn connection_local_port_satisfies_port_pattern() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut switch = Switch::new();
    switch.register(Pattern::new().port(addr.port()), |_req| async {
        respond(200, "port-matched")
    });

    tokio::spawn(SwitchServer::new(Arc::new(switch)).run(listener));

    let response = reqwest::get(format!("http://{addr}/any"))
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "port-matched");
}
