use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use color_eyre::{eyre::eyre, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::db::models::Question;
use crate::db::Db;

// ---------------------------------------------------------------------------
// QuizRepository trait
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait QuizRepository: Send + Sync {
    /// Every question in `category`, or every question when `None`.
    fn quiz_candidates(
        &self,
        category: Option<i64>,
    ) -> impl std::future::Future<Output = Result<Vec<Question>>> + Send;
}

impl QuizRepository for Db {
    async fn quiz_candidates(&self, category: Option<i64>) -> Result<Vec<Question>> {
        match category {
            Some(category_id) => self.questions_in_category(category_id).await,
            None => self.all_questions().await,
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome enums
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum DrawOutcome {
    Question(Question),
    /// Every candidate has already been asked, or there were none.
    Exhausted,
}

// ---------------------------------------------------------------------------
// QuizService
// ---------------------------------------------------------------------------

/// Draws quiz questions uniformly at random from the questions a player has
/// not seen yet. The random source is shared by every clone of the service.
pub struct QuizService<R: QuizRepository = Db> {
    repo: R,
    rng: Arc<Mutex<StdRng>>,
}

impl<R: QuizRepository + Clone> Clone for QuizService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            rng: Arc::clone(&self.rng),
        }
    }
}

impl<R: QuizRepository> QuizService<R> {
    /// A fixed `seed` makes the sequence of draws reproducible.
    pub fn new(repo: R, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            repo,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    pub async fn next_question(
        &self,
        category: Option<i64>,
        previous_questions: &[i64],
    ) -> Result<DrawOutcome> {
        let candidates = self.repo.quiz_candidates(category).await?;

        let seen: HashSet<i64> = previous_questions.iter().copied().collect();
        let unseen: Vec<Question> = candidates
            .into_iter()
            .filter(|q| !seen.contains(&q.id))
            .collect();

        let picked = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| eyre!("quiz random source is poisoned"))?;
            unseen.choose(&mut *rng).cloned()
        };

        match picked {
            Some(question) => {
                tracing::debug!(
                    "drew question {} from {} unseen candidates",
                    question.id,
                    unseen.len()
                );
                Ok(DrawOutcome::Question(question))
            }
            None => Ok(DrawOutcome::Exhausted),
        }
    }
}
