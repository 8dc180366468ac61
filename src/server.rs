//! Static file server for the rendered page.
//!
//! `GET /` answers with `index.html` from the served directory, every other path
//! is looked up relative to it, and unknown paths get the default 404. All
//! responses carry permissive CORS headers and every request is logged.

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

/// Port used when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub root: PathBuf,
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Defaults, with the port taken from `PORT` when it holds a valid number.
    pub fn from_env(root: impl Into<PathBuf>) -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self {
            root: root.into(),
            port,
            ..Self::default()
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Router serving `root`.
pub fn router(root: &Path) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(root.join("index.html")))
        .fallback_service(ServeDir::new(root))
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
}

/// Access log line per request: method, path, status, latency.
async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let started = Instant::now();
    let res = next.run(req).await;
    log::info!(
        "{} {} {} {:.3} ms",
        method,
        uri,
        res.status().as_u16(),
        started.elapsed().as_secs_f64() * 1000.0
    );
    res
}

/// Bind and serve until Ctrl-C.
pub async fn run(config: ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.addr())
        .await
        .with_context(|| format!("bind {}", config.addr()))?;
    let port = listener.local_addr()?.port();
    log::info!("Now listening on port {} (serving {})", port, config.root.display());
    axum::serve(listener, router(&config.root))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("server stopped");
    Ok(())
}

/// Serve `root` on an already bound listener (no shutdown hook).
pub async fn serve_on(listener: TcpListener, root: PathBuf) -> Result<()> {
    axum::serve(listener, router(&root)).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("cannot listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
