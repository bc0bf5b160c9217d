//! Tracing subscriber setup and the per-request span.
//!
//! Every request runs inside a `request` span carrying the `x-request-id`
//! value, method and matched route. The authenticated customer and the
//! response status are recorded on the same span once known, so handler
//! events inherit them.
//!
//! Output goes to the console (text, or JSON with `LOG_FORMAT=json`) filtered
//! by `RUST_LOG`, and to a daily rolling `customer-api.json` under `LOG_DIR`
//! (default `storage/logs`).

use std::env;
use std::fs;
use std::time::Duration;

use anyhow::Context;
use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::{Request, Response};
use tracing::{Span, error, field, info, info_span, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const DEFAULT_LOG_DIR: &str = "storage/logs";
const DEFAULT_FILTER: &str = "customer_api=info,tower_http=warn";

pub fn request_span(request: &Request<Body>) -> Span {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(MatchedPath::as_str)
        .unwrap_or_else(|| request.uri().path());

    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        route = %route,
        customer = field::Empty,
        status = field::Empty,
        latency_ms = field::Empty,
    )
}

/// Records the outcome on the request span. Client errors log at warn and
/// server errors at error.
pub fn record_response(response: &Response<Body>, latency: Duration, span: &Span) {
    let status = response.status();
    span.record("status", status.as_u16());
    span.record("latency_ms", latency.as_millis() as u64);

    if status.is_server_error() {
        error!("Request failed");
    } else if status.is_client_error() {
        warn!("Request rejected");
    } else {
        info!("Request completed");
    }
}

/// Installs the global subscriber. The returned guard flushes the file
/// writer and must live until the process exits.
pub fn init_tracing() -> anyhow::Result<WorkerGuard> {
    let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string());
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir))?;

    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let json_console =
        env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    let console_layer: Box<dyn Layer<Registry> + Send + Sync> = if json_console {
        fmt::layer().json().flatten_event(true).boxed()
    } else {
        fmt::layer().compact().with_target(false).boxed()
    };

    let (file_writer, guard) =
        tracing_appender::non_blocking(rolling::daily(&log_dir, "customer-api.json"));

    let file_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(false)
        .with_ansi(false)
        .with_writer(file_writer)
        .with_filter(EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(console_layer.with_filter(console_filter))
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    info!(log_dir = %log_dir, "Tracing initialized");
    Ok(guard)
}
