//! Campaigns domain: campaign lifecycle, applications, discovery

pub mod api;
pub mod domain;
pub mod repository;
pub mod service;

// Re-export domain types at the crate root for convenience
pub use domain::cursor::CursorPosition;
pub use domain::entities::{
    Application, ApplicationStatus, Campaign, CampaignPeriods, CampaignStatus,
    CampaignWithApplyCount, NewCampaign, Period, Stage, KNOWN_SOCIAL_PLATFORMS,
};
pub use domain::error::{CampaignError, ErrorKind};
pub use domain::state::{CampaignEvent, CampaignStateMachine, StateError};
pub use domain::validation::{validate_campaign_fields, validate_campaign_periods};

// Re-export repository types
pub use repository::{CampaignStore, InMemoryCampaignStore, PgCampaignStore, StoreCapabilities};

pub use service::{
    CampaignService, DiscoveryService, GeneralListing, ListingAction, PaginatedCampaigns,
    Pagination,
};

// Re-export API types
pub use api::routes;
pub use api::CampaignsState;
