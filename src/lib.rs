pub mod db;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod services;

use axum::{
    http::{header, HeaderValue},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::{rejections::AppError, services::quiz::QuizService};

#[derive(Clone)]
pub struct AppState {
    pub db: db::Db,
    pub quiz: QuizService,
}

impl AppState {
    /// `quiz_seed` fixes the quiz random source; `None` seeds it from entropy.
    pub fn new(db: db::Db, quiz_seed: Option<u64>) -> Self {
        let quiz = QuizService::new(db.clone(), quiz_seed);
        Self { db, quiz }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::category::routes())
        .merge(handlers::question::routes())
        .merge(handlers::quiz::routes())
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CorsLayer::new().allow_origin(Any))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(names::CORS_ALLOW_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(names::CORS_ALLOW_METHODS),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("resource not found")
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
