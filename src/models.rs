use std::{fmt, marker::PhantomData, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    db::models::{Category, NewQuestion, Question},
    names,
};

/// Deserialize an optional integer that may arrive as a JSON number or as a
/// string containing a number. HTML forms always send values as strings.
fn deserialize_optional_int<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: TryFrom<i64> + FromStr,
{
    struct Vis<T>(PhantomData<T>);

    impl<'de, T: TryFrom<i64> + FromStr> serde::de::Visitor<'de> for Vis<T> {
        type Value = Option<T>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("integer or numeric string")
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
            T::try_from(v)
                .map(Some)
                .map_err(|_| E::custom(format!("integer {v} out of range")))
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
            let v = i64::try_from(v).map_err(|_| E::custom(format!("integer {v} out of range")))?;
            serde::de::Visitor::visit_i64(self, v)
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
            v.trim()
                .parse()
                .map(Some)
                .map_err(|_| E::custom(format!("{v:?} is not an integer")))
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }

    d.deserialize_any(Vis(PhantomData))
}

#[derive(Debug, Deserialize)]
pub struct CreateQuestionBody {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_int")]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_int")]
    pub difficulty: Option<i32>,
}

impl CreateQuestionBody {
    /// Checks every required field is present. The error names the first
    /// missing one.
    pub fn validate(self) -> Result<NewQuestion, &'static str> {
        let question = self
            .question
            .filter(|q| !q.trim().is_empty())
            .ok_or("question text is required")?;
        let answer = self
            .answer
            .filter(|a| !a.trim().is_empty())
            .ok_or("answer text is required")?;
        let category = self.category.ok_or("category is required")?;
        let difficulty = self.difficulty.ok_or("difficulty is required")?;

        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBody {
    #[serde(default)]
    pub search_term: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "deserialize_optional_int")]
    pub id: Option<i64>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuizBody {
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

impl QuizBody {
    /// The category to draw from, or `None` for every category.
    pub fn category_filter(&self) -> Option<i64> {
        let category = self.quiz_category.as_ref()?;

        if category.kind.as_deref() == Some(names::ALL_CATEGORIES_TYPE) {
            return None;
        }

        category.id.filter(|id| *id != names::ALL_CATEGORIES_ID)
    }

    pub fn previous_questions(&self) -> &[i64] {
        self.previous_questions.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: Vec<Category>,
    pub current_category: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i64,
}

#[derive(Debug, Serialize)]
pub struct QuizQuestionResponse {
    pub success: bool,
    pub question: Question,
}
