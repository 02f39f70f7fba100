//! reel-api - HTTP API server for reel

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use reel_api::{app, AppState};
use reel_core::MovieRepository;
use reel_db::{Database, InMemoryMovieRepository};

/// Generates time-ordered UUIDv7 request correlation IDs.
///
/// UUIDv7 embeds a Unix timestamp, so IDs sort chronologically — useful
/// for log correlation when chasing a failed request through the store.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Parse allowed origins from a comma-separated environment variable.
///
/// # Environment Variable
/// `ALLOWED_ORIGINS` - Comma-separated list of allowed origins
/// (default: http://localhost:3000)
fn parse_allowed_origins() -> Vec<HeaderValue> {
    let origins_str =
        std::env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".to_string());

    origins_str
        .split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(e) => {
                    warn!("Invalid CORS origin '{}': {}", trimmed, e);
                    None
                }
            }
        })
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with configurable output
    //
    // Environment variables:
    //   LOG_FORMAT  - "json" or "text" (default: "text")
    //   LOG_FILE    - path to log file (optional, enables file logging)
    //   RUST_LOG    - standard env filter (default: "reel_api=debug,tower_http=debug")
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let log_file = std::env::var("LOG_FILE").ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "reel_api=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(env_filter);

    // Optionally create a file appender with daily rotation
    let _file_guard = if let Some(ref path) = log_file {
        let file_dir = std::path::Path::new(path)
            .parent()
            .unwrap_or(std::path::Path::new("."));
        let file_name = std::path::Path::new(path)
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("reel-api.log");
        let file_appender = tracing_appender::rolling::daily(file_dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        if log_format == "json" {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking),
                )
                .init();
        } else {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false), // no ANSI in files
                )
                .init();
        }
        Some(guard)
    } else {
        // Console-only output
        if log_format == "json" {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        } else {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
        None
    };

    info!(
        log_format = %log_format,
        log_file = log_file.as_deref().unwrap_or("(stdout)"),
        "Logging initialized"
    );

    // Get configuration from environment
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .unwrap_or(3000);

    // Select the store backend.
    //
    // STORE_BACKEND - "postgres" (default) or "memory" for an ephemeral
    // in-process store.
    let store_backend = std::env::var("STORE_BACKEND").unwrap_or_else(|_| "postgres".to_string());
    let movies: Arc<dyn MovieRepository> = match store_backend.as_str() {
        "postgres" => {
            let database_url = std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/reel".to_string());

            info!("Connecting to database...");
            let db = Database::connect(&database_url).await?;
            info!("Database connected");

            // Run pending database migrations on startup
            info!("Running database migrations...");
            db.migrate().await?;
            info!("Database migrations complete");

            Arc::new(db.movies)
        }
        "memory" => {
            warn!("Using in-memory store; records will not survive a restart");
            Arc::new(InMemoryMovieRepository::new())
        }
        other => {
            anyhow::bail!(
                "Unknown STORE_BACKEND '{}' (expected \"postgres\" or \"memory\")",
                other
            );
        }
    };

    // Create app state
    let state = AppState { movies };

    // Build router
    let app = app(state)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer({
            let allowed_origins = parse_allowed_origins();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed_origins))
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        });

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
