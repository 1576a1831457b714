//! Custom axum extractors for Collabhub

use axum::{
    extract::{rejection::JsonRejection, FromRequest, OptionalFromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use validator::Validate;

use crate::Error;

/// Default page size for page-based list endpoints
const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size for page-based list endpoints
const MAX_PAGE_SIZE: i64 = 100;

/// Page-number pagination query parameters (`?page=2&pageSize=10`)
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub page_size: Option<i64>,
}

impl PageQuery {
    /// Get the 1-based page, defaulting to 1 when absent or not positive
    pub fn page(&self) -> i64 {
        match self.page {
            Some(p) if p > 0 => p,
            _ => 1,
        }
    }

    /// Get the page size, defaulting to 10, clamped to 1..=100
    pub fn page_size(&self) -> i64 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    /// Row offset of the first item on this page
    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.page_size())
    }
}

/// JSON extractor that validates the deserialized value automatically.
///
/// Replaces `Json<T>` + manual `.validate()` calls in handlers.
/// Requires `T: DeserializeOwned + Validate`.
///
/// All input errors (deserialization + validation) return 400.
///
/// As `Option<ValidatedJson<T>>` a request without a `Content-Type` header
/// extracts as `None`, for endpoints whose body is entirely optional.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

/// Rejection type for `ValidatedJson`:
/// - JSON deserialization errors → 400 (via `Error::Validation`)
/// - Validation errors → 400 (via `Error::Validation`)
#[derive(Debug)]
pub enum ValidatedJsonRejection {
    Json(JsonRejection),
    Validation(Error),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            ValidatedJsonRejection::Json(e) => Error::Validation(e.body_text()).into_response(),
            ValidatedJsonRejection::Validation(e) => e.into_response(),
        }
    }
}

fn validated<T: Validate>(value: T) -> Result<ValidatedJson<T>, ValidatedJsonRejection> {
    value.validate().map_err(|e| {
        ValidatedJsonRejection::Validation(Error::Validation(format!(
            "Validation failed: {}",
            e
        )))
    })?;
    Ok(ValidatedJson(value))
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = <Json<T> as FromRequest<S>>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Json)?;
        validated(value)
    }
}

impl<T, S> OptionalFromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Option<Self>, Self::Rejection> {
        let value = <Json<T> as OptionalFromRequest<S>>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Json)?;
        value.map(|Json(value)| validated(value)).transpose()
    }
}
