//! Mock implementation of CampaignRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::campaign::{Campaign, MessageHistory};
use crate::errors::DomainError;

use super::trait_::CampaignRepository;

/// In-memory campaign repository for testing.
///
/// Writes can be made to fail on demand (`fail_next_writes`) to exercise
/// the recorder's fallback and escalation paths.
pub struct MockCampaignRepository {
    campaigns: Arc<RwLock<HashMap<Uuid, Campaign>>>,
    histories: Arc<RwLock<HashMap<Uuid, MessageHistory>>>,
    failures_remaining: Arc<RwLock<u32>>,
}

impl MockCampaignRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            campaigns: Arc::new(RwLock::new(HashMap::new())),
            histories: Arc::new(RwLock::new(HashMap::new())),
            failures_remaining: Arc::new(RwLock::new(0)),
        }
    }

    /// Make the next `n` writes fail with a database error
    pub async fn fail_next_writes(&self, n: u32) {
        *self.failures_remaining.write().await = n;
    }

    /// Number of campaigns currently stored
    pub async fn campaign_count(&self) -> usize {
        self.campaigns.read().await.len()
    }

    /// Number of history records currently stored
    pub async fn history_count(&self) -> usize {
        self.histories.read().await.len()
    }
}

impl Default for MockCampaignRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CampaignRepository for MockCampaignRepository {
    async fn create_with_history(
        &self,
        campaign: Campaign,
        history: MessageHistory,
    ) -> Result<(Campaign, MessageHistory), DomainError> {
        {
            let mut failures = self.failures_remaining.write().await;
            if *failures > 0 {
                *failures -= 1;
                return Err(DomainError::Database {
                    message: "simulated write failure".to_string(),
                });
            }
        }

        if history.campaign_id != campaign.id {
            return Err(DomainError::Validation {
                message: "history.campaign_id does not match campaign.id".to_string(),
            });
        }

        self.campaigns
            .write()
            .await
            .insert(campaign.id, campaign.clone());
        self.histories
            .write()
            .await
            .insert(history.id, history.clone());
        Ok((campaign, history))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Campaign>, DomainError> {
        let campaigns = self.campaigns.read().await;
        Ok(campaigns.get(&id).cloned())
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Campaign>, DomainError> {
        let campaigns = self.campaigns.read().await;
        let mut result: Vec<Campaign> = campaigns
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn history_for_campaign(
        &self,
        campaign_id: Uuid,
    ) -> Result<Vec<MessageHistory>, DomainError> {
        let histories = self.histories.read().await;
        Ok(histories
            .values()
            .filter(|h| h.campaign_id == campaign_id)
            .cloned()
            .collect())
    }
}
