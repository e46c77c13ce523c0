use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use mapvet::core::config;
use mapvet::{
    AnalysisError, AnalyzeRequest, AnalyzeResponse, AppState, ErrorResponse, ProductSource,
    ReportBuilder, SourceError, StaticEncoder, TextEncoder,
};

const INDEX_HTML: &str = include_str!("../assets/index.html");

fn parse_port_from_args() -> Option<u16> {
    let mut args = std::env::args().peekable();
    while let Some(a) = args.next() {
        if a == "--port" {
            if let Some(v) = args.next() {
                if let Ok(p) = v.parse::<u16>() {
                    return Some(p);
                }
            }
        } else if let Some(rest) = a.strip_prefix("--port=") {
            if let Ok(p) = rest.parse::<u16>() {
                return Some(p);
            }
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!("Starting mapvet");

    let cfg = config::load_config();
    let model_id = cfg.resolve_model_id();

    // Load the embedding model eagerly; a failure here is fatal and not retried.
    let encoder = tokio::task::spawn_blocking(move || StaticEncoder::load(&model_id))
        .await
        .map_err(|e| anyhow::anyhow!("model load task failed: {e}"))??;
    let encoder = Arc::new(encoder);

    let port = cfg.resolve_port(parse_port_from_args());
    let state = Arc::new(AppState::new(encoder, cfg));

    let app = Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/analyze", post(analyze_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(l) => l,
        Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
            anyhow::bail!(
                "Address already in use: {}. Stop the existing process or run with --port {} (or set PORT/MAPVET_PORT).",
                bind_addr,
                port.saturating_add(1)
            )
        }
        Err(e) => return Err(e.into()),
    };
    info!("mapvet listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).ok();

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = async {
                if let Some(ref mut s) = sigterm {
                    s.recv().await;
                } else {
                    std::future::pending::<()>().await;
                }
            } => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "mapvet",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.encoder.model_id(),
        "embedding_dim": state.encoder.dimension()
    }))
}

async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let product_url = request.product_url.trim().to_string();
    let category_name = request.category_name.trim().to_string();

    if product_url.is_empty() || category_name.is_empty() {
        return Err(error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Both product_url and category_name are required",
        ));
    }

    info!(
        "Analyzing '{}' against category '{}'",
        product_url, category_name
    );

    match run_analysis(&state, &product_url, &category_name).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            error!("Analysis failed for {}: {}", product_url, e);
            Err(error_response(status_for(&e), &e.to_string()))
        }
    }
}

/// One full analysis: fetch the record, score it, assemble the response.
/// Every failure is terminal for this analysis only; the loaded model stays
/// valid for the next request.
async fn run_analysis(
    state: &Arc<AppState>,
    product_url: &str,
    category_name: &str,
) -> Result<AnalyzeResponse, AnalysisError> {
    let record = state.product_source.fetch(product_url).await?;

    // Embedding is CPU-bound; keep it off the async runtime.
    let encoder = Arc::clone(&state.encoder);
    let record_for_build = record.clone();
    let category = category_name.to_string();
    let report = tokio::task::spawn_blocking(move || {
        ReportBuilder::new(encoder.as_ref()).build(&record_for_build, &category)
    })
    .await
    .map_err(|e| AnalysisError::Embedding(e.to_string()))?;

    Ok(AnalyzeResponse {
        product: record,
        category_name: category_name.to_string(),
        rows: report.rows,
        generated_at: Utc::now(),
    })
}

fn status_for(error: &AnalysisError) -> StatusCode {
    match error {
        AnalysisError::Source(SourceError::NotFound { .. }) => StatusCode::NOT_FOUND,
        AnalysisError::Source(SourceError::Unreachable(_)) => StatusCode::BAD_GATEWAY,
        AnalysisError::Embedding(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
