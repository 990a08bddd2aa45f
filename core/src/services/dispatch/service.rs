//! Bulk dispatch service

use tracing::{info, warn};
use tr_shared::utils::phone::is_valid_recipient;
use uuid::Uuid;

use crate::domain::value_objects::{DispatchSummary, SendOutcome};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{
    CampaignRepository, DefaultProviderRepository, SystemCredentialRepository,
    UserCredentialRepository,
};
use crate::services::selector::{ProviderSelector, SelectionRng, UniformRng};

use super::executor::SendExecutor;
use super::recorder::CampaignRecorder;

/// Orchestrates one bulk send: choose a credential, execute the outbound
/// call, record the attempt, report aggregate counts.
///
/// Provider-level failures are never raised to the caller; they come back
/// as `total_failed` counts with the attempt recorded. Only configuration
/// problems (`NoProviderAvailable`, `UnsupportedProvider`) and an
/// unrecoverable audit-trail loss (`LoggingFailed`) surface as errors.
pub struct DispatchService<U, D, S, C, R = UniformRng>
where
    U: UserCredentialRepository,
    D: DefaultProviderRepository,
    S: SystemCredentialRepository,
    C: CampaignRepository,
    R: SelectionRng,
{
    selector: ProviderSelector<U, D, S, R>,
    executor: SendExecutor,
    recorder: CampaignRecorder<C>,
}

impl<U, D, S, C, R> DispatchService<U, D, S, C, R>
where
    U: UserCredentialRepository,
    D: DefaultProviderRepository,
    S: SystemCredentialRepository,
    C: CampaignRepository,
    R: SelectionRng,
{
    pub fn new(
        selector: ProviderSelector<U, D, S, R>,
        executor: SendExecutor,
        recorder: CampaignRecorder<C>,
    ) -> Self {
        Self {
            selector,
            executor,
            recorder,
        }
    }

    /// Send one message to a list of recipients as a recorded campaign.
    ///
    /// # Returns
    /// * `Ok(DispatchSummary)` - The attempt was recorded; counts reflect
    ///   whether the provider accepted the send
    /// * `Err(DispatchError::NoProviderAvailable)` - No usable credential;
    ///   nothing was sent or recorded
    /// * `Err(DispatchError::UnsupportedProvider)` - No gateway for the
    ///   selected provider; a failed attempt was recorded first
    /// * `Err(DispatchError::LoggingFailed)` - The audit trail could not
    ///   be written after a failed send
    pub async fn send_bulk(
        &self,
        user_id: Uuid,
        sender: Option<&str>,
        message: &str,
        recipients: &[String],
    ) -> DomainResult<DispatchSummary> {
        if message.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "Message body must not be empty".to_string(),
            });
        }
        if recipients.is_empty() {
            return Err(DomainError::Validation {
                message: "Recipient list must not be empty".to_string(),
            });
        }
        if let Some(bad) = recipients.iter().find(|r| !is_valid_recipient(r)) {
            return Err(DomainError::Validation {
                message: format!("Invalid recipient number: {bad}"),
            });
        }

        // Fails before any outbound call or campaign write when no
        // credential exists anywhere in the chain.
        let selection = self.selector.choose(user_id).await?;
        let context = format!(
            "{} ({})",
            selection.credential.provider_name,
            selection.kind.as_str()
        );

        let outcome = match self
            .executor
            .execute(&selection.credential, sender, message, recipients)
            .await
        {
            Ok(outcome) => outcome,
            Err(err) => {
                // A missing gateway is a config error the caller must see,
                // but the attempt is still recorded first.
                warn!(user_id = %user_id, error = %err, "Executor rejected dispatch");
                let failure = SendOutcome::failure(err.to_string());
                self.recorder
                    .record_attempt(user_id, &context, recipients, message, &failure)
                    .await?;
                return Err(err);
            }
        };

        let (campaign, _history) = self
            .recorder
            .record_attempt(user_id, &context, recipients, message, &outcome)
            .await?;

        let summary = if outcome.is_success() {
            DispatchSummary {
                campaign_id: campaign.id,
                total_sent: recipients.len(),
                total_failed: 0,
            }
        } else {
            DispatchSummary {
                campaign_id: campaign.id,
                total_sent: 0,
                total_failed: recipients.len(),
            }
        };

        info!(
            user_id = %user_id,
            campaign_id = %summary.campaign_id,
            total_sent = summary.total_sent,
            total_failed = summary.total_failed,
            "Bulk dispatch complete"
        );
        Ok(summary)
    }
}
