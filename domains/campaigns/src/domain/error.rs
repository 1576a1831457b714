//! Error taxonomy for the campaign lifecycle
//!
//! Every variant belongs to one `ErrorKind`, which fixes its HTTP status.
//! Store failures are carried as `Infrastructure` around the common error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use collabhub_common::StateError;
use serde_json::json;
use uuid::Uuid;

use crate::domain::entities::{CampaignStatus, Stage};

/// Error family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    StateConflict,
    Infrastructure,
}

#[derive(Debug, thiserror::Error)]
pub enum CampaignError {
    #[error("Brand {0} not found")]
    BrandNotFound(Uuid),

    #[error("Category {0} not found")]
    CategoryNotFound(Uuid),

    #[error("Campaign {0} not found")]
    CampaignNotFound(Uuid),

    #[error("Influencer {0} not found")]
    InfluencerNotFound(Uuid),

    #[error("Invalid period '{stage}': start must be before end")]
    InvalidPeriodOrder { stage: Stage },

    #[error("Period '{previous}' must end before '{next}' starts")]
    InvalidPeriodSequence { previous: Stage, next: Stage },

    #[error("Budget must be greater than 0, below 10^12, with at most 2 decimal places")]
    InvalidBudget,

    #[error("applyLimit cannot be negative")]
    InvalidApplyLimit,

    #[error("{0} is required")]
    MissingRequiredField(&'static str),

    #[error("At least one category is required")]
    EmptyCategorySet,

    #[error("Cursor is malformed")]
    InvalidCursor,

    #[error(transparent)]
    InvalidTransition(#[from] StateError),

    #[error("Campaign is not open for applications (status: {status})")]
    CampaignNotOpen { status: CampaignStatus },

    #[error("Influencer has already applied to this campaign")]
    DuplicateApplication,

    #[error("Campaign status transitions are not available")]
    TransitionUnavailable,

    #[error(transparent)]
    Infrastructure(#[from] collabhub_common::Error),
}

impl CampaignError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CampaignError::BrandNotFound(_)
            | CampaignError::CategoryNotFound(_)
            | CampaignError::CampaignNotFound(_)
            | CampaignError::InfluencerNotFound(_) => ErrorKind::NotFound,
            CampaignError::InvalidPeriodOrder { .. }
            | CampaignError::InvalidPeriodSequence { .. }
            | CampaignError::InvalidBudget
            | CampaignError::InvalidApplyLimit
            | CampaignError::MissingRequiredField(_)
            | CampaignError::EmptyCategorySet
            | CampaignError::InvalidCursor
            | CampaignError::InvalidTransition(_) => ErrorKind::Validation,
            CampaignError::CampaignNotOpen { .. }
            | CampaignError::DuplicateApplication
            | CampaignError::TransitionUnavailable => ErrorKind::StateConflict,
            CampaignError::Infrastructure(_) => ErrorKind::Infrastructure,
        }
    }

    /// Machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            CampaignError::BrandNotFound(_) => "BRAND_NOT_FOUND",
            CampaignError::CategoryNotFound(_) => "CATEGORY_NOT_FOUND",
            CampaignError::CampaignNotFound(_) => "CAMPAIGN_NOT_FOUND",
            CampaignError::InfluencerNotFound(_) => "INFLUENCER_NOT_FOUND",
            CampaignError::InvalidPeriodOrder { .. } => "INVALID_PERIOD_ORDER",
            CampaignError::InvalidPeriodSequence { .. } => "INVALID_PERIOD_SEQUENCE",
            CampaignError::InvalidBudget => "INVALID_BUDGET",
            CampaignError::InvalidApplyLimit => "INVALID_APPLY_LIMIT",
            CampaignError::MissingRequiredField(_) => "MISSING_REQUIRED_FIELD",
            CampaignError::EmptyCategorySet => "EMPTY_CATEGORY_SET",
            CampaignError::InvalidCursor => "INVALID_CURSOR",
            CampaignError::InvalidTransition(_) => "INVALID_TRANSITION",
            CampaignError::CampaignNotOpen { .. } => "CAMPAIGN_NOT_OPEN",
            CampaignError::DuplicateApplication => "DUPLICATE_APPLICATION",
            CampaignError::TransitionUnavailable => "TRANSITION_UNAVAILABLE",
            CampaignError::Infrastructure(e) => e.error_code(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::StateConflict => StatusCode::CONFLICT,
            ErrorKind::Infrastructure => match self {
                CampaignError::Infrastructure(e) => e.status_code(),
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for CampaignError {
    fn into_response(self) -> Response {
        if let CampaignError::Infrastructure(inner) = self {
            // Common error logs server-side failures itself
            return inner.into_response();
        }

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        }));

        (self.status_code(), body).into_response()
    }
}
