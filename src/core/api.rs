//! HTTP + WebSocket API for Wardbreak
//!
//! Endpoints:
//! - POST /session/new - Create new duel session
//! - GET /session/{id} - Get session status
//! - POST /session/{id}/submit - Submit a phrase to the warden
//! - POST /classify - One-shot barrier classification
//! - POST /analyze - One-shot signal analysis
//! - WS /ws/{id} - Live updates
//! - GET /health - Health check

use axum::{
    extract::{Path, State, WebSocketUpgrade, ws::{Message, WebSocket}},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use crate::core::{classify, ResistanceEngine, ResponseComposer, SignalDetector};
use crate::types::{FilterSpec, FilterStrategy, FilterVerdict, SignalBag};

/// One player's duel session
pub struct Session {
    pub id: String,
    pub engine: ResistanceEngine,
    pub composer: ResponseComposer,
    pub update_tx: broadcast::Sender<SessionUpdate>,
}

/// Live update message
#[derive(Debug, Clone, Serialize)]
pub struct SessionUpdate {
    pub score: f64,
    pub delta: f64,
    pub band: String,
    pub revealed_count: usize,
    pub attempts: u32,
    pub defeated: bool,
}

/// App state
pub struct AppState {
    pub sessions: RwLock<HashMap<String, Session>>,
}

/// Create new session request
#[derive(Debug, Deserialize)]
pub struct NewSessionRequest {
    pub seed: Option<u64>,
}

/// Create new session response
#[derive(Debug, Serialize)]
pub struct NewSessionResponse {
    pub session_id: String,
    pub websocket_url: String,
}

/// Session status response
#[derive(Debug, Serialize)]
pub struct SessionStatusResponse {
    pub session_id: String,
    pub score: f64,
    pub band: String,
    pub attempts: u32,
    pub revealed_count: usize,
    pub secret_total: usize,
    pub defeated: bool,
}

/// Submit request
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub text: String,
}

/// Submit response
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub score: f64,
    pub delta: f64,
    pub band: String,
    pub revealed_count: usize,
    pub revealed_units: Vec<String>,
    pub narrative: String,
    pub defeated: bool,
}

/// Classify request
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
    /// Strategy name; unknown names degrade to "exact"
    pub strategy: String,
    #[serde(default)]
    pub blocklist: Vec<String>,
}

/// Analyze request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub sessions_active: usize,
}

/// Create the API router
pub fn create_router() -> Router {
    let state = Arc::new(AppState {
        sessions: RwLock::new(HashMap::new()),
    });

    Router::new()
        .route("/health", get(health))
        .route("/session/new", post(create_session))
        .route("/session/:id", get(get_session))
        .route("/session/:id/submit", post(submit_phrase))
        .route("/classify", post(classify_phrase))
        .route("/analyze", post(analyze_phrase))
        .route("/ws/:id", get(websocket_handler))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let sessions = state.sessions.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        sessions_active: sessions.len(),
    })
}

/// Create new session
async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewSessionRequest>,
) -> Result<Json<NewSessionResponse>, StatusCode> {
    let session_id = generate_session_id();
    let (tx, _) = broadcast::channel(100);

    let (engine, composer) = match req.seed {
        Some(seed) => (
            ResistanceEngine::with_seed(seed),
            ResponseComposer::with_seed(seed),
        ),
        None => (ResistanceEngine::new(), ResponseComposer::new()),
    };

    let session = Session {
        id: session_id.clone(),
        engine,
        composer,
        update_tx: tx,
    };

    let mut sessions = state.sessions.write().await;
    sessions.insert(session_id.clone(), session);

    Ok(Json(NewSessionResponse {
        session_id: session_id.clone(),
        websocket_url: format!("/ws/{}", session_id),
    }))
}

/// Get session status
async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionStatusResponse>, StatusCode> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(SessionStatusResponse {
        session_id: id,
        score: session.engine.score(),
        band: session.engine.band().to_string(),
        attempts: session.engine.attempts(),
        revealed_count: session.engine.revealed_count(),
        secret_total: session.engine.secret_len(),
        defeated: session.engine.is_defeated(),
    }))
}

/// Submit a phrase to a session's warden
async fn submit_phrase(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, StatusCode> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;

    let is_first = session.engine.attempts() == 0;
    let output = session.engine.submit(&req.text);
    let revealed = session.engine.revealed_units().to_vec();
    let narrative = session.composer.compose(&output, &revealed, is_first);

    let update = SessionUpdate {
        score: output.score,
        delta: output.delta,
        band: output.band.to_string(),
        revealed_count: output.revealed_count,
        attempts: session.engine.attempts(),
        defeated: output.defeated,
    };
    let _ = session.update_tx.send(update);

    Ok(Json(SubmitResponse {
        score: output.score,
        delta: output.delta,
        band: output.band.to_string(),
        revealed_count: output.revealed_count,
        revealed_units: revealed,
        narrative,
        defeated: output.defeated,
    }))
}

/// One-shot barrier classification (no session state)
async fn classify_phrase(Json(req): Json<ClassifyRequest>) -> Json<FilterVerdict> {
    let spec = FilterSpec::new(FilterStrategy::from_name(&req.strategy), req.blocklist);
    Json(classify(&req.text, &spec))
}

/// One-shot signal analysis (no session state)
async fn analyze_phrase(Json(req): Json<AnalyzeRequest>) -> Json<SignalBag> {
    Json(SignalDetector::new().analyze(&req.text))
}

/// WebSocket handler for live updates
async fn websocket_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ws: WebSocketUpgrade,
) -> Result<impl IntoResponse, StatusCode> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    let rx = session.update_tx.subscribe();
    drop(sessions);

    Ok(ws.on_upgrade(move |socket| async move {
        handle_websocket(socket, rx).await;
    }))
}

/// Handle WebSocket connection
async fn handle_websocket(mut socket: WebSocket, mut rx: broadcast::Receiver<SessionUpdate>) {
    while let Ok(update) = rx.recv().await {
        let json = serde_json::to_string(&update).unwrap_or_default();
        if socket.send(Message::Text(json)).await.is_err() {
            break;
        }
    }
}

/// Generate session ID
fn generate_session_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    format!("session_{:x}", nanos as u64)
}

/// Run the API server
pub async fn run_server(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("Wardbreak API running on {}", addr);
    println!("  POST /session/new         - Create session");
    println!("  GET  /session/:id         - Get status");
    println!("  POST /session/:id/submit  - Submit a phrase");
    println!("  POST /classify            - One-shot classification");
    println!("  POST /analyze             - One-shot analysis");
    println!("  WS   /ws/:id              - Live updates");
    println!("  GET  /health              - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
