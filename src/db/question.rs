use color_eyre::Result;

use super::models::{NewQuestion, Question};
use super::Db;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

impl Db {
    /// One page of questions ordered by id. `page` is 1-based.
    /// Pages whose offset does not fit the store's integer range are empty.
    pub async fn questions_page(&self, page: u64, per_page: u32) -> Result<Vec<Question>> {
        let Some(offset) = page
            .saturating_sub(1)
            .checked_mul(u64::from(per_page))
            .and_then(|offset| i64::try_from(offset).ok())
        else {
            return Ok(Vec::new());
        };

        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id LIMIT ? OFFSET ?"
        ))
        .bind(i64::from(per_page))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn questions_count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn all_questions(&self) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn get_question(&self, question_id: i64) -> Result<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?"
        ))
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    pub async fn questions_in_category(&self, category_id: i64) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ? ORDER BY id"
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    /// Case-insensitive substring match on the question text, folding case
    /// with Unicode rules. `%` and `_` in `term` match literally.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let needle = term.to_lowercase();

        let questions = self
            .all_questions()
            .await?
            .into_iter()
            .filter(|q| contains_folded(&q.question, &needle))
            .collect();

        Ok(questions)
    }

    pub async fn create_question(&self, new: &NewQuestion) -> Result<i64> {
        let id = sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        tracing::info!(
            "new question created with id: {id} in category: {}",
            new.category
        );
        Ok(id)
    }

    /// Returns `false` when no question has `question_id`.
    pub async fn delete_question(&self, question_id: i64) -> Result<bool> {
        let deleted = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(question_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if deleted > 0 {
            tracing::info!("question {question_id} deleted");
        }

        Ok(deleted > 0)
    }
}

fn contains_folded(text: &str, lowered_needle: &str) -> bool {
    text.to_lowercase().contains(lowered_needle)
}
