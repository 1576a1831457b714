//! State machine for campaign status transitions
//!
//! Campaign states: Open → InProgress → Completed (terminal)

pub use collabhub_common::StateError;

use crate::domain::entities::CampaignStatus;

impl CampaignStatus {
    /// Get all valid next states from current state
    pub fn valid_transitions(&self) -> &'static [CampaignStatus] {
        match self {
            Self::Open => &[Self::InProgress],
            Self::InProgress => &[Self::Completed],
            Self::Completed => &[],
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

/// Events that trigger campaign status transitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CampaignEvent {
    /// Close applications and start the campaign
    Start,
    /// Finish the campaign
    Complete,
}

impl CampaignEvent {
    /// The event that moves a campaign into `target`, if any
    pub fn toward(target: CampaignStatus) -> Option<CampaignEvent> {
        match target {
            CampaignStatus::InProgress => Some(CampaignEvent::Start),
            CampaignStatus::Completed => Some(CampaignEvent::Complete),
            CampaignStatus::Open => None,
        }
    }
}

impl std::fmt::Display for CampaignEvent {
    #[mutants::skip] // Only feeds transition error messages
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

/// Campaign state machine
pub struct CampaignStateMachine;

impl CampaignStateMachine {
    /// Attempt a state transition
    pub fn transition(
        current: CampaignStatus,
        event: CampaignEvent,
    ) -> Result<CampaignStatus, StateError> {
        if current.is_terminal() {
            return Err(StateError::TerminalState(current.to_string()));
        }

        match (current, event) {
            (CampaignStatus::Open, CampaignEvent::Start) => Ok(CampaignStatus::InProgress),
            (CampaignStatus::InProgress, CampaignEvent::Complete) => Ok(CampaignStatus::Completed),
            _ => Err(StateError::InvalidTransition {
                from: current.to_string(),
                event: event.to_string(),
            }),
        }
    }

    /// Validate a move to `target` by finding the event that leads there
    pub fn transition_to(
        current: CampaignStatus,
        target: CampaignStatus,
    ) -> Result<CampaignStatus, StateError> {
        let event = CampaignEvent::toward(target).ok_or_else(|| StateError::InvalidTransition {
            from: current.to_string(),
            event: format!("reopen to {}", target),
        })?;

        Self::transition(current, event)
    }
}
