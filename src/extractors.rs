use std::{collections::HashMap, num::IntErrorKind};

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::{
    names,
    rejections::{AppError, ResultExt},
};

/// JSON body extractor whose rejections use the API's JSON error shape
/// instead of axum's plain-text ones.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .reject_input("request body must be a valid JSON object")?;
        Ok(JsonBody(value))
    }
}

/// A numeric `{id}` path segment. Anything that is not an integer cannot
/// name a record, so it is reported as not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub i64);

impl<S: Send + Sync> FromRequestParts<S> for PathId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!("unusable id in path: {e}");
                AppError::NotFound("resource not found")
            })?;
        Ok(PathId(id))
    }
}

/// The 1-based `page` query parameter. Missing, non-numeric and
/// non-positive values fall back to the first page. A number too large to
/// represent is past every real page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(pub u64);

impl<S: Send + Sync> FromRequestParts<S> for Page {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .reject_input("malformed query string")?;

        Ok(Page(parse_page(params.get("page").map(String::as_str))))
    }
}

fn parse_page(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return names::DEFAULT_PAGE;
    };

    match raw.trim().parse::<u64>() {
        Ok(0) => names::DEFAULT_PAGE,
        Ok(page) => page,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => u64::MAX,
        Err(_) => names::DEFAULT_PAGE,
    }
}
