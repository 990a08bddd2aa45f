//! Mock contact repository for testing

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::contact::Contact;
use crate::errors::DomainError;

use super::trait_::ContactRepository;

/// In-memory mock implementation of `ContactRepository`
#[derive(Clone, Default)]
pub struct MockContactRepository {
    contacts: Arc<RwLock<HashMap<Uuid, Contact>>>,
}

impl MockContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock pre-populated with the given contacts
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let map = contacts.into_iter().map(|c| (c.id, c)).collect();
        Self {
            contacts: Arc::new(RwLock::new(map)),
        }
    }

    pub async fn insert(&self, contact: Contact) {
        self.contacts.write().await.insert(contact.id, contact);
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, DomainError> {
        Ok(self.contacts.read().await.get(&id).cloned())
    }

    async fn find_id_by_phone(&self, phone: &str) -> Result<Option<Uuid>, DomainError> {
        Ok(self
            .contacts
            .read()
            .await
            .values()
            .find(|c| c.phone_number == phone)
            .map(|c| c.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_contact(phone: &str) -> Contact {
        Contact::new(
            Uuid::new_v4(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            "ada@example.com".to_string(),
            phone.to_string(),
        )
    }

    #[tokio::test]
    async fn finds_contact_by_id() {
        let contact = sample_contact("+233200000001");
        let id = contact.id;
        let repo = MockContactRepository::with_contacts(vec![contact]);

        let found = repo.find_by_id(id).await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().id, id);
    }

    #[tokio::test]
    async fn finds_contact_id_by_phone() {
        let contact = sample_contact("+233200000002");
        let id = contact.id;
        let repo = MockContactRepository::with_contacts(vec![contact]);

        let found = repo.find_id_by_phone("+233200000002").await.unwrap();
        assert_eq!(found, Some(id));

        let missing = repo.find_id_by_phone("+233209999999").await.unwrap();
        assert!(missing.is_none());
    }
}
