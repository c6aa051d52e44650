pub const CATEGORIES_URL: &str = "/categories";
pub const CATEGORY_QUESTIONS_URL: &str = "/categories/{id}/questions";
pub const QUESTIONS_URL: &str = "/questions";
pub const QUESTION_URL: &str = "/questions/{id}";
pub const SEARCH_QUESTIONS_URL: &str = "/questions/search";
pub const QUIZZES_URL: &str = "/quizzes";

pub fn question_url(question_id: i64) -> String {
    format!("/questions/{question_id}")
}

pub fn category_questions_url(category_id: i64) -> String {
    format!("/categories/{category_id}/questions")
}

pub const QUESTIONS_PER_PAGE: u32 = 10;
pub const DEFAULT_PAGE: u64 = 1;

// Quiz category sentinels meaning "every category"
pub const ALL_CATEGORIES_ID: i64 = 0;
pub const ALL_CATEGORIES_TYPE: &str = "click";

pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

// Cross-origin headers attached to every response
pub const CORS_ALLOW_HEADERS: &str = "Content-Type,Authorization,true";
pub const CORS_ALLOW_METHODS: &str = "GET,PUT,POST,DELETE,OPTIONS";
