//! Campaign recorder implementation

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use crate::domain::entities::campaign::{Campaign, DeliveryStatus, MessageHistory};
use crate::domain::value_objects::SendOutcome;
use crate::errors::{DispatchError, DomainResult};
use crate::repositories::CampaignRepository;

/// Persists the audit trail of one bulk send attempt.
///
/// Every attempt gets exactly one campaign and one linked history row,
/// success or failure, written atomically. There is no idempotency:
/// each invocation inserts fresh rows.
pub struct CampaignRecorder<C: CampaignRepository> {
    campaigns: Arc<C>,
}

impl<C: CampaignRepository> CampaignRecorder<C> {
    pub fn new(campaigns: Arc<C>) -> Self {
        Self { campaigns }
    }

    /// Record one send attempt.
    ///
    /// On the failure path, if the write itself fails, a second
    /// "System Error" campaign write is attempted so the audit trail
    /// survives a partial data-layer outage. If that also fails the
    /// original data-layer error escalates as
    /// [`DispatchError::LoggingFailed`].
    pub async fn record_attempt(
        &self,
        user_id: Uuid,
        context: &str,
        recipients: &[String],
        content: &str,
        outcome: &SendOutcome,
    ) -> DomainResult<(Campaign, MessageHistory)> {
        let name = format!("Bulk SMS - {}", Utc::now().to_rfc3339());
        let (status, description) = if outcome.is_success() {
            (DeliveryStatus::Sent, format!("Sent via {context}"))
        } else {
            (DeliveryStatus::Failed, format!("Send failed via {context}"))
        };

        let campaign = Campaign::new(user_id, name, Some(description));
        let history = MessageHistory::new(
            campaign.id,
            recipients.to_vec(),
            content,
            status,
            Some(outcome.raw_response.clone()),
        );

        match self
            .campaigns
            .create_with_history(campaign, history)
            .await
        {
            Ok(pair) => {
                info!(
                    user_id = %user_id,
                    campaign_id = %pair.0.id,
                    status = pair.1.status.as_str(),
                    "Recorded send attempt"
                );
                Ok(pair)
            }
            // Success-path write failures surface as ordinary data-layer
            // errors; only the failure path gets a second chance.
            Err(first_err) if !outcome.is_success() => {
                error!(
                    user_id = %user_id,
                    error = %first_err,
                    "Failed to record failed send, attempting system error campaign"
                );

                let fallback = Campaign::new(
                    user_id,
                    "System Error",
                    Some(format!("Failed to record send attempt: {first_err}")),
                );
                let fallback_history = MessageHistory::new(
                    fallback.id,
                    recipients.to_vec(),
                    content,
                    DeliveryStatus::Failed,
                    Some(outcome.raw_response.clone()),
                );

                match self
                    .campaigns
                    .create_with_history(fallback, fallback_history)
                    .await
                {
                    Ok(pair) => Ok(pair),
                    Err(second_err) => {
                        error!(
                            user_id = %user_id,
                            error = %second_err,
                            "System error campaign write failed, audit trail lost"
                        );
                        Err(DispatchError::LoggingFailed {
                            cause: first_err.to_string(),
                        }
                        .into())
                    }
                }
            }
            Err(err) => Err(err),
        }
    }
}
