#![allow(dead_code)] // Test helpers appear unused when compiled independently

use axum::Router;
use reqwest::{Client, Method};
use tokio::net::TcpListener;

/// Serve `app` on a loopback port. Returns the base URL.
pub async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Issue `method` against `base` + `path`. Returns (status code, body).
pub async fn call(client: &Client, method: Method, base: &str, path: &str) -> (u16, String) {
    let resp = client
        .request(method, format!("{base}{path}"))
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    (status, resp.text().await.unwrap())
}

pub async fn get(client: &Client, base: &str, path: &str) -> (u16, String) {
    call(client, Method::GET, base, path).await
}
