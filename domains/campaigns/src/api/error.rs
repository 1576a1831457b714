//! Handler error: either a campaign rule violation or a common error raised
//! while resolving the caller

use axum::response::{IntoResponse, Response};
use collabhub_common::Error;

use crate::domain::error::CampaignError;

#[derive(Debug)]
pub enum ApiError {
    Campaign(CampaignError),
    Common(Error),
}

impl From<CampaignError> for ApiError {
    fn from(err: CampaignError) -> Self {
        ApiError::Campaign(err)
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Common(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Campaign(e) => e.into_response(),
            ApiError::Common(e) => e.into_response(),
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
