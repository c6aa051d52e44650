#![allow(dead_code)]

use trivia_api::db::{Db, NewQuestion};

pub async fn create_test_db() -> Db {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path =
        std::env::temp_dir().join(format!("trivia_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite://{}", path.display());
    Db::new(&url).await.expect("failed to create test database")
}

pub fn new_question(text: &str, category: i64) -> NewQuestion {
    NewQuestion {
        question: text.to_string(),
        answer: format!("Answer to {text}"),
        category,
        difficulty: 2,
    }
}

/// Creates one "Science" category and `n` questions in it named
/// "Question 1".."Question n". Returns the category id and question ids.
pub async fn seed_questions(db: &Db, n: usize) -> (i64, Vec<i64>) {
    let category = db
        .create_category("Science")
        .await
        .expect("create category");

    let mut ids = Vec::with_capacity(n);
    for i in 1..=n {
        let id = db
            .create_question(&new_question(&format!("Question {i}"), category))
            .await
            .expect("create question");
        ids.push(id);
    }

    (category, ids)
}
