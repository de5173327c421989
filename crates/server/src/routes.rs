//! HTTP routes.
//!
//! Request validation is left to axum's `Json` extractor: a body that is
//! not JSON, or has no `user_profile` object, is rejected before the
//! recommender runs.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use profile::RecommendationRequest;

use crate::recommender::{NutritionRecommendation, NutritionRecommender};

pub const RECOMMENDATION_PATH: &str = "/api/ai/recommendation/generate";
pub const HEALTH_PATH: &str = "/health";

/// Build the application router
pub fn router(recommender: NutritionRecommender) -> Router {
    Router::new()
        .route(RECOMMENDATION_PATH, post(generate_recommendation))
        .route(HEALTH_PATH, get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(recommender)
}

async fn generate_recommendation(
    State(recommender): State<NutritionRecommender>,
    Json(request): Json<RecommendationRequest>,
) -> Json<NutritionRecommendation> {
    let recommendation = recommender.recommend_request(&request, &mut rand::rng());
    Json(recommendation)
}

async fn health(State(recommender): State<NutritionRecommender>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "foods": recommender.food_table().len(),
    }))
}
