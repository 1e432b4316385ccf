// ReplicaPro - Web Server
// REST API + static demo page. The presentation layer: everything here just
// reads the static catalogs, calls the allocation calculator, and echoes the
// results back to the page.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use replica_pro::{
    compute, generate_all, generate_series, AllocationError, IndexProfile, IndexRegistry,
    Instrument, InstrumentRegistry, ReturnSeries,
};

/// Shared application state
///
/// Both registries are built once at startup and never mutated, so handlers
/// share them without locking.
#[derive(Clone)]
struct AppState {
    instruments: Arc<InstrumentRegistry>,
    indices: Arc<IndexRegistry>,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn err(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

/// Index summary for the list endpoint (weights omitted)
#[derive(Serialize)]
struct IndexSummary {
    name: String,
    tracking_error: f64,
    trading_costs: f64,
}

impl From<&IndexProfile> for IndexSummary {
    fn from(profile: &IndexProfile) -> Self {
        Self {
            name: profile.name.clone(),
            tracking_error: profile.tracking_error,
            trading_costs: profile.trading_costs,
        }
    }
}

#[derive(Deserialize)]
struct AllocationParams {
    amount: f64,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/instruments - List the futures contracts
async fn get_instruments(State(state): State<AppState>) -> impl IntoResponse {
    let instruments: Vec<Instrument> = state.instruments.all().to_vec();
    Json(ApiResponse::ok(instruments))
}

/// GET /api/indices - List the replicable indices
async fn get_indices(State(state): State<AppState>) -> impl IntoResponse {
    let summaries: Vec<IndexSummary> =
        state.indices.all().iter().map(|p| p.into()).collect();
    Json(ApiResponse::ok(summaries))
}

/// GET /api/indices/:name - Full profile for one index
async fn get_index_detail(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let decoded = decode_name(&name);

    match state.indices.find_by_name(&decoded) {
        Some(profile) => {
            (StatusCode::OK, Json(ApiResponse::ok(profile.clone()))).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<IndexProfile>::err(format!(
                "unknown index: {:?}",
                decoded
            ))),
        )
            .into_response(),
    }
}

/// GET /api/indices/:name/returns - Synthetic return series for one index
async fn get_index_returns(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let decoded = decode_name(&name);

    if !state.indices.contains(&decoded) {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<ReturnSeries>::err(format!(
                "unknown index: {:?}",
                decoded
            ))),
        )
            .into_response();
    }

    // Fresh draws on every request, like the original page reload
    let mut rng = StdRng::from_os_rng();
    let series = generate_series(&decoded, &mut rng);
    (StatusCode::OK, Json(ApiResponse::ok(series))).into_response()
}

/// GET /api/returns - Synthetic return series for all indices (the chart)
async fn get_all_returns(State(state): State<AppState>) -> impl IntoResponse {
    let mut rng = StdRng::from_os_rng();
    let series = generate_all(&state.indices, &mut rng);
    Json(ApiResponse::ok(series))
}

/// GET /api/indices/:name/allocation?amount=X - Run the calculator
async fn get_allocation(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<AllocationParams>,
) -> impl IntoResponse {
    let decoded = decode_name(&name);

    match compute(&decoded, params.amount, &state.indices) {
        Ok(result) => (StatusCode::OK, Json(ApiResponse::ok(result))).into_response(),
        Err(e) => {
            let status = match e {
                AllocationError::UnknownIndex(_) => StatusCode::NOT_FOUND,
                AllocationError::InvalidAmount(_) => StatusCode::BAD_REQUEST,
            };
            (
                status,
                Json(ApiResponse::<replica_pro::AllocationResult>::err(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Decode URL-encoded index names ("MSCI%20World%20AC")
fn decode_name(name: &str) -> String {
    urlencoding::decode(name)
        .unwrap_or_else(|_| name.into())
        .into_owned()
}

/// GET / - Serve the demo page
async fn serve_index() -> impl IntoResponse {
    Html(include_str!("../web/index.html"))
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() {
    println!("🌐 ReplicaPro - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Static catalogs, built once
    let state = AppState {
        instruments: Arc::new(InstrumentRegistry::new()),
        indices: Arc::new(IndexRegistry::new()),
    };

    println!(
        "✓ Catalogs loaded: {} instruments, {} indices",
        state.instruments.count(),
        state.indices.count()
    );

    // Build API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/instruments", get(get_instruments))
        .route("/indices", get(get_indices))
        .route("/indices/:name", get(get_index_detail))
        .route("/indices/:name/returns", get(get_index_returns))
        .route("/indices/:name/allocation", get(get_allocation))
        .route("/returns", get(get_all_returns))
        .with_state(state.clone());

    // Build main router
    let app = Router::new()
        .route("/", get(serve_index))
        .nest("/api", api_routes)
        .nest_service("/static", ServeDir::new("web"))
        .layer(CorsLayer::permissive());

    // Start server
    let addr = "0.0.0.0:3000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://localhost:3000");
    println!("   API: http://localhost:3000/api/indices");
    println!("   UI:  http://localhost:3000");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
