//! REST surface of the MoodWise Wallet server.

use crate::ai::AdviceService;
use crate::domain::{aggregate, SummaryService, TransactionService};
use crate::storage::CatalogClient;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use shared::{
    AdviceForMoodRequest, AdviceResponse, CreateTransactionRequest, DetectMoodFromImageRequest,
    DetectMoodFromTextRequest, ExpenseAdviceRequest, FieldErrors, ImportCsvRequest,
    ImportResponse, MoodResponse, TransactionListResponse,
};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

/// Fixed user-facing strings for service-boundary failures. The cause
/// is logged; the user only sees the apology.
const MOOD_ADVICE_APOLOGY: &str = "Sorry, I couldn't get advice for you right now.";
const CHAT_ADVICE_APOLOGY: &str = "Sorry, I couldn't process your request. Please try again.";
const SUMMARY_APOLOGY: &str = "Sorry, I couldn't analyze your expenses right now.";
const MOOD_DETECT_APOLOGY: &str = "Sorry, I couldn't detect your mood right now.";

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub transactions: TransactionService,
    pub summary: SummaryService,
    pub advice: Arc<dyn AdviceService>,
    pub catalog: Option<CatalogClient>,
}

/// Build the `/api` router over the given state.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/transactions", get(list_transactions).post(create_transaction))
        .route("/transactions/import", post(import_transactions))
        .route("/transactions/mood-spending", get(mood_spending))
        .route("/transactions/summary", get(expense_summary))
        .route("/transactions/:id", delete(delete_transaction))
        .route("/mood/text", post(detect_mood_from_text))
        .route("/mood/image", post(detect_mood_from_image))
        .route("/advice/mood", post(advice_for_mood))
        .route("/advice/chat", post(expense_advice))
        .route("/catalog/users", post(create_user))
        .route("/catalog/advice", get(list_advice))
        .route("/catalog/advice/save", post(save_advice))
        .route("/catalog/mood-logs", get(list_mood_logs));

    Router::new().nest("/api", api).with_state(state)
}

/// GET /api/transactions
async fn list_transactions(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/transactions");
    let transactions = state.transactions.list().await;
    Json(TransactionListResponse { transactions })
}

/// POST /api/transactions
async fn create_transaction(
    State(state): State<AppState>,
    Json(request): Json<CreateTransactionRequest>,
) -> impl IntoResponse {
    info!("POST /api/transactions - category: {}", request.category);
    match state.transactions.create(request).await {
        Ok(transaction) => (StatusCode::CREATED, Json(transaction)).into_response(),
        Err(validation) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(FieldErrors {
                errors: validation.errors,
            }),
        )
            .into_response(),
    }
}

/// DELETE /api/transactions/:id
async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/transactions/{}", id);
    if state.transactions.delete(&id).await {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (StatusCode::NOT_FOUND, "Transaction not found").into_response()
    }
}

/// POST /api/transactions/import
async fn import_transactions(
    State(state): State<AppState>,
    Json(request): Json<ImportCsvRequest>,
) -> impl IntoResponse {
    info!("POST /api/transactions/import - {} bytes", request.csv.len());
    match state.transactions.import_csv(&request.csv).await {
        Ok(imported) => (StatusCode::CREATED, Json(ImportResponse { imported })).into_response(),
        // the importer's message is the user-facing error, verbatim
        Err(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    }
}

/// GET /api/transactions/mood-spending
async fn mood_spending(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/transactions/mood-spending");
    let transactions = state.transactions.list().await;
    Json(aggregate::mood_spending(&transactions))
}

/// GET /api/transactions/summary
async fn expense_summary(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/transactions/summary");
    let transactions = state.transactions.list().await;
    match state.summary.summarize(&transactions).await {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => {
            error!("Error summarizing expenses: {:?}", e);
            (StatusCode::BAD_GATEWAY, SUMMARY_APOLOGY).into_response()
        }
    }
}

/// POST /api/mood/text
async fn detect_mood_from_text(
    State(state): State<AppState>,
    Json(request): Json<DetectMoodFromTextRequest>,
) -> impl IntoResponse {
    info!("POST /api/mood/text");
    if request.text.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "Text input cannot be empty.").into_response();
    }
    match state.advice.detect_mood_from_text(&request.text).await {
        Ok(mood) => Json(MoodResponse { mood }).into_response(),
        Err(e) => {
            error!("Error detecting mood from text: {:?}", e);
            (StatusCode::BAD_GATEWAY, MOOD_DETECT_APOLOGY).into_response()
        }
    }
}

/// POST /api/mood/image
async fn detect_mood_from_image(
    State(state): State<AppState>,
    Json(request): Json<DetectMoodFromImageRequest>,
) -> impl IntoResponse {
    info!("POST /api/mood/image");
    if request.photo_data_uri.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "Image data cannot be empty.").into_response();
    }
    match state
        .advice
        .detect_mood_from_image(&request.photo_data_uri)
        .await
    {
        Ok(mood) => Json(MoodResponse { mood }).into_response(),
        Err(e) => {
            error!("Error detecting mood from image: {:?}", e);
            (StatusCode::BAD_GATEWAY, MOOD_DETECT_APOLOGY).into_response()
        }
    }
}

/// POST /api/advice/mood
///
/// Advice failures never propagate: the user gets the fixed apology as
/// the advice text, exactly like the original UI behaved.
async fn advice_for_mood(
    State(state): State<AppState>,
    Json(request): Json<AdviceForMoodRequest>,
) -> impl IntoResponse {
    info!("POST /api/advice/mood - mood: {}", request.mood);
    let advice = match state.advice.advice_for_mood(request.mood).await {
        Ok(advice) => advice,
        Err(e) => {
            error!("Error getting advice for mood: {:?}", e);
            MOOD_ADVICE_APOLOGY.to_string()
        }
    };
    Json(AdviceResponse { advice })
}

/// POST /api/advice/chat
async fn expense_advice(
    State(state): State<AppState>,
    Json(request): Json<ExpenseAdviceRequest>,
) -> impl IntoResponse {
    info!("POST /api/advice/chat - {} messages", request.history.len());
    let advice = match state.advice.expense_advice(&request.history).await {
        Ok(advice) => advice,
        Err(e) => {
            error!("Error getting expense advice: {:?}", e);
            CHAT_ADVICE_APOLOGY.to_string()
        }
    };
    Json(AdviceResponse { advice })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SaveAdviceRequest {
    advice_id: Uuid,
}

fn catalog_unavailable() -> axum::response::Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        "Persistence service is not configured",
    )
        .into_response()
}

/// POST /api/catalog/users
async fn create_user(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/catalog/users");
    let Some(catalog) = &state.catalog else {
        return catalog_unavailable();
    };
    match catalog.create_user().await {
        Ok(key) => (StatusCode::CREATED, Json(key)).into_response(),
        Err(e) => {
            error!("Error creating user: {:?}", e);
            (StatusCode::BAD_GATEWAY, "Persistence service unavailable").into_response()
        }
    }
}

/// GET /api/catalog/advice
async fn list_advice(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/catalog/advice");
    let Some(catalog) = &state.catalog else {
        return catalog_unavailable();
    };
    match catalog.list_advice().await {
        Ok(advices) => Json(advices).into_response(),
        Err(e) => {
            error!("Error listing advice catalog: {:?}", e);
            (StatusCode::BAD_GATEWAY, "Persistence service unavailable").into_response()
        }
    }
}

/// POST /api/catalog/advice/save
async fn save_advice(
    State(state): State<AppState>,
    Json(request): Json<SaveAdviceRequest>,
) -> impl IntoResponse {
    info!("POST /api/catalog/advice/save - {}", request.advice_id);
    let Some(catalog) = &state.catalog else {
        return catalog_unavailable();
    };
    match catalog.save_advice(request.advice_id).await {
        Ok(key) => (StatusCode::CREATED, Json(key)).into_response(),
        Err(e) => {
            error!("Error saving advice: {:?}", e);
            (StatusCode::BAD_GATEWAY, "Persistence service unavailable").into_response()
        }
    }
}

/// GET /api/catalog/mood-logs
async fn list_mood_logs(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/catalog/mood-logs");
    let Some(catalog) = &state.catalog else {
        return catalog_unavailable();
    };
    match catalog.list_my_mood_logs().await {
        Ok(logs) => Json(logs).into_response(),
        Err(e) => {
            error!("Error listing mood logs: {:?}", e);
            (StatusCode::BAD_GATEWAY, "Persistence service unavailable").into_response()
        }
    }
}
