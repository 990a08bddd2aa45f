//! Campaign repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::campaign::{Campaign, MessageHistory};
use crate::errors::DomainError;

/// Repository trait for campaigns and their message history
///
/// The campaign and its history row are always written together: a history
/// row must never exist whose campaign_id does not resolve to a persisted
/// campaign, so implementations wrap both inserts in one transaction.
#[async_trait]
pub trait CampaignRepository: Send + Sync {
    /// Atomically persist a campaign and its linked history record.
    ///
    /// Both rows are written or neither is. The history's `campaign_id`
    /// must equal `campaign.id`; implementations may reject a mismatch.
    async fn create_with_history(
        &self,
        campaign: Campaign,
        history: MessageHistory,
    ) -> Result<(Campaign, MessageHistory), DomainError>;

    /// Find a campaign by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Campaign>, DomainError>;

    /// List a user's campaigns, newest first
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Campaign>, DomainError>;

    /// Fetch the history records belonging to a campaign
    async fn history_for_campaign(
        &self,
        campaign_id: Uuid,
    ) -> Result<Vec<MessageHistory>, DomainError>;
}
