use axum::{
    extract::State,
    routing::get,
    Json, Router,
};

use crate::{
    extractors::PathId,
    models::{CategoriesResponse, QuestionListResponse},
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::CATEGORIES_URL, get(list_categories))
        .route(names::CATEGORY_QUESTIONS_URL, get(category_questions))
}

async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = state
        .db
        .categories()
        .await
        .reject("could not get categories")?;

    if categories.is_empty() {
        return Err(AppError::NotFound("no categories found"));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: categories.into_iter().map(|c| c.kind).collect(),
    }))
}

async fn category_questions(
    State(state): State<AppState>,
    PathId(category_id): PathId,
) -> Result<Json<QuestionListResponse>, AppError> {
    let questions = state
        .db
        .questions_in_category(category_id)
        .await
        .reject("could not get questions for category")?;

    if questions.is_empty() {
        return Err(AppError::NotFound("no questions found in category"));
    }

    Ok(Json(QuestionListResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: Some(category_id),
    }))
}
