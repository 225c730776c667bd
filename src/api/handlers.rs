use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::accessory::Accessory;
use crate::models::answers::RawAnswers;
use crate::models::product::Product;
use crate::services::{accessories, relaxation};

use super::identity::UserId;
use super::AppState;

// Request/Response types

#[derive(Debug, Serialize)]
pub struct QuizTokenResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    pub token: Option<String>,
}

/// Catalog item fields exposed on a recommendation listing.
#[derive(Debug, Serialize)]
pub struct RecommendationItem {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    pub sizes: Vec<String>,
}

impl From<&Product> for RecommendationItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            category: product.category.clone(),
            image: product.primary_image().map(str::to_owned),
            sizes: product.sizes.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub results: Vec<RecommendationItem>,
    pub relaxed: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessoryParams {
    pub product_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessoryResponse {
    pub product_id: String,
    pub recommendations: Vec<Accessory>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Validates a style-quiz payload and appends it to the submission log,
/// returning the redemption token.
pub async fn submit_quiz(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(payload): Json<RawAnswers>,
) -> AppResult<Json<QuizTokenResponse>> {
    let answers = payload.validate()?;
    let token = state.submissions.create(&user_id, answers).await?;

    tracing::info!(user = %user_id, "quiz submission stored");

    Ok(Json(QuizTokenResponse { token }))
}

/// Redeems a submission token for a ranked, capped list of catalog
/// matches. The token must belong to the requesting user.
pub async fn recommendations(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Query(params): Query<RecommendationParams>,
) -> AppResult<Json<RecommendationResponse>> {
    let token = params
        .token
        .filter(|t| !t.is_empty())
        .ok_or(AppError::MissingParameter("token"))?;

    let submission = state
        .submissions
        .find(&user_id, &token)
        .await
        .ok_or_else(|| AppError::NotFound("Invalid token".to_string()))?;

    let matches = relaxation::recommend(&state.products, &submission.answers);

    tracing::debug!(
        user = %user_id,
        results = matches.candidates.len(),
        relaxed = matches.relaxed,
        "recommendations computed"
    );

    Ok(Json(RecommendationResponse {
        results: matches
            .candidates
            .iter()
            .map(|c| RecommendationItem::from(c.product))
            .collect(),
        relaxed: matches.relaxed,
    }))
}

/// Returns up to three diversified accessory picks for a product page.
pub async fn accessories_for_product(
    State(state): State<AppState>,
    Query(params): Query<AccessoryParams>,
) -> AppResult<Json<AccessoryResponse>> {
    let product_id = params
        .product_id
        .filter(|p| !p.is_empty())
        .ok_or(AppError::MissingParameter("productId"))?;

    let product = state
        .products
        .iter()
        .find(|p| p.id == product_id)
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    let picks = accessories::recommend_accessories(&state.accessories, product);

    Ok(Json(AccessoryResponse {
        product_id,
        recommendations: picks.into_iter().cloned().collect(),
    }))
}
