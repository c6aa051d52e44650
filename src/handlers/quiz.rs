use axum::{extract::State, routing::post, Json, Router};

use crate::{
    extractors::JsonBody,
    models::{QuizBody, QuizQuestionResponse},
    names,
    rejections::{AppError, ResultExt},
    services::quiz::DrawOutcome,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::QUIZZES_URL, post(next_quiz_question))
}

async fn next_quiz_question(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<QuizBody>,
) -> Result<Json<QuizQuestionResponse>, AppError> {
    let category = body.category_filter();

    let outcome = state
        .quiz
        .next_question(category, body.previous_questions())
        .await
        .reject("could not draw a quiz question")?;

    match outcome {
        DrawOutcome::Question(question) => Ok(Json(QuizQuestionResponse {
            success: true,
            question,
        })),
        DrawOutcome::Exhausted => {
            tracing::info!(
                "quiz exhausted for category {category:?} after {} questions",
                body.previous_questions().len()
            );
            Err(AppError::NotFound("no unseen questions left"))
        }
    }
}
