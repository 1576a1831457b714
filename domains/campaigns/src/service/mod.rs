//! Campaign lifecycle and discovery services

pub mod discovery;
pub mod lifecycle;

pub use discovery::{
    DiscoveryService, GeneralListing, ListingAction, PaginatedCampaigns, Pagination,
};
pub use lifecycle::CampaignService;
