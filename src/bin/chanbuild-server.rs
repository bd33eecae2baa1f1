use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Form, Query, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Parser;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use chanbuild::logging::{self, LogTarget};
use chanbuild::remote::{ChannelNameForm, GetChannelListQuery, SetChannelListForm};

#[path = "chanbuild_server/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "chanbuild_server/persistence.rs"]
mod persistence;
use self::persistence::*;
#[path = "chanbuild_server/handlers_channels.rs"]
mod handlers_channels;
use self::handlers_channels::*;
#[path = "chanbuild_server/routes.rs"]
mod routes;
use self::routes::*;

const SESSION_COOKIE_NAME: &str = "session";

#[derive(Clone)]
struct AppState {
    data_dir: PathBuf,
    dev_session: String,
    channels: Arc<RwLock<ChannelStore>>,
}

#[derive(Parser)]
#[command(name = "chanbuild-server")]
#[command(about = "Channel builder backend (development)", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// Data directory holding channels.json
    #[arg(long, default_value = "./chanbuild-data")]
    data_dir: PathBuf,

    /// Value of the `session` cookie every API call must present
    #[arg(long, default_value = "dev")]
    dev_session: String,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();
    logging::init(LogTarget::Stderr, "info")?;

    std::fs::create_dir_all(&args.data_dir)
        .with_context(|| format!("create data dir {}", args.data_dir.display()))?;
    let channels = load_channels_from_disk(&args.data_dir).context("load channels")?;
    info!(
        channels = channels.channels.len(),
        active = channels.active.as_deref().unwrap_or("-"),
        "channels loaded"
    );

    let state = Arc::new(AppState {
        data_dir: args.data_dir,
        dev_session: args.dev_session,
        channels: Arc::new(RwLock::new(channels)),
    });

    let authed = authed_router(state.clone());

    let app = Router::new()
        .route("/healthz", get(healthz))
        .merge(authed)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;

    let local_addr = listener.local_addr().context("read listener local addr")?;
    info!(addr = %local_addr, "chanbuild-server listening");

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

async fn healthz() -> &'static str {
    "ok"
}

/// Value of the `session` cookie, looking through every `Cookie` header.
fn session_cookie(headers: &axum::http::HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == SESSION_COOKIE_NAME)
        .map(|(_, v)| v)
}

async fn require_session(
    State(state): State<Arc<AppState>>,
    req: axum::extract::Request,
    next: Next,
) -> Response {
    match session_cookie(req.headers()) {
        Some(session) if session == state.dev_session => next.run(req).await,
        _ => {
            warn!(path = %req.uri().path(), "rejected request without valid session");
            unauthorized()
        }
    }
}
