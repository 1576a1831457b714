//! Opaque keyset cursor for the general campaign listing
//!
//! A cursor marks the `(created_at, id)` of the last campaign a page
//! returned. It is 8 bytes of big-endian microseconds followed by the 16 id
//! bytes, URL-safe base64 encoded without padding.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::Campaign;
use crate::domain::error::CampaignError;

const CURSOR_LEN: usize = 8 + 16;

/// Position in the `created_at DESC, id DESC` ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub created_at: DateTime<Utc>,
    pub id: Uuid,
}

impl CursorPosition {
    pub fn of(campaign: &Campaign) -> Self {
        Self {
            created_at: campaign.created_at,
            id: campaign.id,
        }
    }

    pub fn encode(&self) -> String {
        let mut bytes = [0u8; CURSOR_LEN];
        bytes[..8].copy_from_slice(&self.created_at.timestamp_micros().to_be_bytes());
        bytes[8..].copy_from_slice(self.id.as_bytes());
        URL_SAFE_NO_PAD.encode(bytes)
    }

    pub fn decode(token: &str) -> Result<Self, CampaignError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|_| CampaignError::InvalidCursor)?;
        if bytes.len() != CURSOR_LEN {
            return Err(CampaignError::InvalidCursor);
        }

        let mut micros = [0u8; 8];
        micros.copy_from_slice(&bytes[..8]);
        let created_at = DateTime::from_timestamp_micros(i64::from_be_bytes(micros))
            .ok_or(CampaignError::InvalidCursor)?;
        let id = Uuid::from_slice(&bytes[8..]).map_err(|_| CampaignError::InvalidCursor)?;

        Ok(Self { created_at, id })
    }

    /// Whether `campaign` sorts strictly after this position
    pub fn precedes(&self, campaign: &Campaign) -> bool {
        (campaign.created_at, campaign.id) < (self.created_at, self.id)
    }
}
