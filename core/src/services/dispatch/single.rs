//! Single direct-message path

use std::sync::Arc;

use tracing::{info, warn};
use tr_shared::utils::phone::{is_valid_recipient, normalize_phone_number};
use uuid::Uuid;

use crate::domain::entities::campaign::DeliveryStatus;
use crate::domain::entities::message::Message;
use crate::domain::value_objects::SendOutcome;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{
    ContactRepository, DefaultProviderRepository, MessageRepository,
    SystemCredentialRepository, UserCredentialRepository,
};
use crate::services::selector::{ProviderSelector, SelectionRng, UniformRng};

use super::executor::SendExecutor;

/// Sends one message to a single contact, tracked on the `Message` row
/// itself rather than the campaign/history pair.
///
/// The row is inserted with status `pending` before the outbound call so
/// a record exists even if the process dies mid-send, then updated in
/// place once the outcome is known.
pub struct DirectMessageService<T, M, U, D, S, R = UniformRng>
where
    T: ContactRepository,
    M: MessageRepository,
    U: UserCredentialRepository,
    D: DefaultProviderRepository,
    S: SystemCredentialRepository,
    R: SelectionRng,
{
    contacts: Arc<T>,
    messages: Arc<M>,
    selector: ProviderSelector<U, D, S, R>,
    executor: SendExecutor,
}

impl<T, M, U, D, S, R> DirectMessageService<T, M, U, D, S, R>
where
    T: ContactRepository,
    M: MessageRepository,
    U: UserCredentialRepository,
    D: DefaultProviderRepository,
    S: SystemCredentialRepository,
    R: SelectionRng,
{
    pub fn new(
        contacts: Arc<T>,
        messages: Arc<M>,
        selector: ProviderSelector<U, D, S, R>,
        executor: SendExecutor,
    ) -> Self {
        Self {
            contacts,
            messages,
            selector,
            executor,
        }
    }

    /// Send one message to a contact and return the resolved row.
    ///
    /// Selection and executor errors do not abort the call; they are
    /// captured into the row as a `failed` outcome with the diagnostic
    /// text, and the updated `Message` is returned.
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - The contact does not exist
    pub async fn send_single(
        &self,
        user_id: Uuid,
        contact_id: Uuid,
        content: &str,
    ) -> DomainResult<Message> {
        if content.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "Message body must not be empty".to_string(),
            });
        }

        let contact = self
            .contacts
            .find_by_id(contact_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("Contact {contact_id}"),
            })?;

        // At-least-record: the pending row exists before any outbound work.
        let message = self
            .messages
            .insert(Message::pending(user_id, contact_id, content))
            .await?;

        let recipients = vec![contact.phone_number];
        let outcome = match self.selector.choose(user_id).await {
            Ok(selection) => match self
                .executor
                .execute(&selection.credential, None, content, &recipients)
                .await
            {
                Ok(outcome) => outcome,
                Err(err) => {
                    warn!(user_id = %user_id, error = %err, "Direct send rejected by executor");
                    SendOutcome::failure(err.to_string())
                }
            },
            Err(err) => {
                warn!(user_id = %user_id, error = %err, "No credential for direct send");
                SendOutcome::failure(err.to_string())
            }
        };

        let status = if outcome.is_success() {
            DeliveryStatus::Sent
        } else {
            DeliveryStatus::Failed
        };

        let resolved = self
            .messages
            .update_outcome(message.id, status, &outcome.raw_response)
            .await?;

        info!(
            user_id = %user_id,
            message_id = %resolved.id,
            status = resolved.status.as_str(),
            "Direct message resolved"
        );
        Ok(resolved)
    }

    /// Send one message to a phone number by resolving it to a contact.
    ///
    /// The number is normalized before lookup, so formatted input matches
    /// contacts stored in plain E.164.
    ///
    /// # Returns
    /// * `Err(DomainError::Validation)` - The number is not valid E.164
    /// * `Err(DomainError::NotFound)` - No contact has that number
    pub async fn send_single_by_phone(
        &self,
        user_id: Uuid,
        phone: &str,
        content: &str,
    ) -> DomainResult<Message> {
        if !is_valid_recipient(phone) {
            return Err(DomainError::Validation {
                message: format!("Invalid recipient number: {phone}"),
            });
        }

        let normalized = normalize_phone_number(phone);
        let contact_id = self
            .contacts
            .find_id_by_phone(&normalized)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("Contact with number {normalized}"),
            })?;

        self.send_single(user_id, contact_id, content).await
    }
}
