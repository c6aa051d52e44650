use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};

use crate::{
    extractors::{JsonBody, Page, PathId},
    models::{
        CreateQuestionBody, CreatedResponse, DeletedResponse, QuestionListResponse,
        QuestionsPageResponse, SearchBody,
    },
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            names::QUESTIONS_URL,
            get(list_questions).post(create_question),
        )
        .route(names::SEARCH_QUESTIONS_URL, post(search_questions))
        .route(names::QUESTION_URL, delete(delete_question))
}

async fn list_questions(
    State(state): State<AppState>,
    Page(page): Page,
) -> Result<Json<QuestionsPageResponse>, AppError> {
    let questions = state
        .db
        .questions_page(page, names::QUESTIONS_PER_PAGE)
        .await
        .reject("could not get questions")?;

    if questions.is_empty() {
        return Err(AppError::NotFound("no questions on this page"));
    }

    let total_questions = state
        .db
        .questions_count()
        .await
        .reject("could not count questions")?;

    let categories = state
        .db
        .categories()
        .await
        .reject("could not get categories")?;

    Ok(Json(QuestionsPageResponse {
        success: true,
        questions,
        total_questions,
        categories,
        current_category: None,
    }))
}

async fn delete_question(
    State(state): State<AppState>,
    PathId(question_id): PathId,
) -> Result<Json<DeletedResponse>, AppError> {
    let deleted = state
        .db
        .delete_question(question_id)
        .await
        .reject_unprocessable("could not delete question")?;

    if !deleted {
        return Err(AppError::NotFound("question not found"));
    }

    Ok(Json(DeletedResponse {
        success: true,
        deleted: question_id,
    }))
}

async fn create_question(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateQuestionBody>,
) -> Result<Json<CreatedResponse>, AppError> {
    let new_question = body.validate().map_err(AppError::BadRequest)?;

    let created = state
        .db
        .create_question(&new_question)
        .await
        .reject_unprocessable("could not create question")?;

    Ok(Json(CreatedResponse {
        success: true,
        created,
    }))
}

async fn search_questions(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<SearchBody>,
) -> Result<Json<QuestionListResponse>, AppError> {
    let term = body
        .search_term
        .ok_or(AppError::BadRequest("searchTerm is required"))?;

    let questions = state
        .db
        .search_questions(&term)
        .await
        .reject("could not search questions")?;

    if questions.is_empty() {
        return Err(AppError::NotFound("no questions match the search term"));
    }

    Ok(Json(QuestionListResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}
