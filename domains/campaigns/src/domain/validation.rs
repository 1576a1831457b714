//! Campaign creation rules
//!
//! Both checks short-circuit on the first violation and never touch the store.

use collabhub_accounts::domain::validation::fits_money_column;
use rust_decimal::Decimal;

use crate::domain::entities::{CampaignPeriods, NewCampaign, Stage};
use crate::domain::error::CampaignError;

/// Every stage must have `start < end`, and each stage must end no later than
/// the next one starts. Touching boundaries are accepted.
pub fn validate_campaign_periods(periods: &CampaignPeriods) -> Result<(), CampaignError> {
    for (stage, period) in periods.iter() {
        if period.start >= period.end {
            return Err(CampaignError::InvalidPeriodOrder { stage });
        }
    }

    for pair in Stage::ALL.windows(2) {
        let (previous, next) = (pair[0], pair[1]);
        if periods.get(previous).end > periods.get(next).start {
            return Err(CampaignError::InvalidPeriodSequence { previous, next });
        }
    }

    Ok(())
}

pub fn validate_campaign_fields(campaign: &NewCampaign) -> Result<(), CampaignError> {
    if campaign.categories.is_empty() {
        return Err(CampaignError::EmptyCategorySet);
    }

    if campaign.budget <= Decimal::ZERO || !fits_money_column(campaign.budget) {
        return Err(CampaignError::InvalidBudget);
    }

    if campaign.apply_limit.is_some_and(|limit| limit < 0) {
        return Err(CampaignError::InvalidApplyLimit);
    }

    let required = [
        ("title", &campaign.title),
        ("description", &campaign.description),
        ("reward", &campaign.reward),
        ("policyAndCondition", &campaign.policy_and_condition),
        ("guide", &campaign.guide),
        ("contentRequired", &campaign.content_required),
        ("location", &campaign.location),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(CampaignError::MissingRequiredField(*field));
    }

    Ok(())
}
