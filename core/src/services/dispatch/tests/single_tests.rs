//! Direct message path tests

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::campaign::DeliveryStatus;
use crate::domain::entities::contact::Contact;
use crate::domain::entities::credential::UserCredential;
use crate::errors::DomainError;
use crate::repositories::{
    MessageRepository, MockContactRepository, MockCredentialStore, MockMessageRepository,
    UserCredentialRepository,
};
use crate::services::dispatch::executor::SendExecutor;
use crate::services::dispatch::single::DirectMessageService;
use crate::services::selector::ProviderSelector;

use super::mocks::{registry_with, FixedRng, StubGateway};

type TestService = DirectMessageService<
    MockContactRepository,
    MockMessageRepository,
    MockCredentialStore,
    MockCredentialStore,
    MockCredentialStore,
    FixedRng,
>;

struct Fixture {
    store: Arc<MockCredentialStore>,
    contacts: Arc<MockContactRepository>,
    messages: Arc<MockMessageRepository>,
    user_id: Uuid,
    contact_id: Uuid,
}

impl Fixture {
    async fn new() -> Self {
        let contact = Contact::new(
            Uuid::new_v4(),
            "Kofi".to_string(),
            "Mensah".to_string(),
            "kofi@example.com".to_string(),
            "+233501234567".to_string(),
        );
        let contact_id = contact.id;
        Self {
            store: Arc::new(MockCredentialStore::new()),
            contacts: Arc::new(MockContactRepository::with_contacts(vec![contact])),
            messages: Arc::new(MockMessageRepository::new()),
            user_id: Uuid::new_v4(),
            contact_id,
        }
    }

    async fn with_credential(self, provider_name: &str) -> Self {
        let provider_id = Uuid::new_v4();
        self.store.register_provider(provider_id, provider_name).await;
        UserCredentialRepository::create(
            &*self.store,
            UserCredential::new(self.user_id, provider_id, "key", None),
        )
        .await
        .unwrap();
        self
    }

    fn service(&self, gateway: StubGateway) -> (TestService, Arc<tokio::sync::Mutex<Vec<super::mocks::RecordedCall>>>) {
        let (registry, calls) = registry_with(gateway);
        let selector = ProviderSelector::with_rng(
            self.store.clone(),
            self.store.clone(),
            self.store.clone(),
            FixedRng(0),
        );
        let service = DirectMessageService::new(
            self.contacts.clone(),
            self.messages.clone(),
            selector,
            SendExecutor::new(registry),
        );
        (service, calls)
    }
}

#[tokio::test]
async fn successful_send_resolves_the_row_in_place() {
    let fixture = Fixture::new().await.with_credential("Alpha").await;
    let (service, calls) = fixture.service(StubGateway::succeeding("Alpha", "1000|accepted"));

    let message = service
        .send_single(fixture.user_id, fixture.contact_id, "Hi Kofi")
        .await
        .unwrap();

    assert_eq!(message.status, DeliveryStatus::Sent);
    assert_eq!(message.provider_response.as_deref(), Some("1000|accepted"));
    assert_eq!(message.content, "Hi Kofi");

    // The outbound call addressed the contact's phone number.
    let calls = calls.lock().await;
    assert_eq!(calls[0].recipients, vec!["+233501234567".to_string()]);

    // Same row, updated in place.
    let stored = fixture.messages.find_by_id(message.id).await.unwrap().unwrap();
    assert_eq!(stored.status, DeliveryStatus::Sent);
}

#[tokio::test]
async fn gateway_failure_is_captured_on_the_row() {
    let fixture = Fixture::new().await.with_credential("Alpha").await;
    let (service, _) = fixture.service(StubGateway::failing("Alpha", "1002|invalid key"));

    let message = service
        .send_single(fixture.user_id, fixture.contact_id, "Hi")
        .await
        .unwrap();

    assert_eq!(message.status, DeliveryStatus::Failed);
    assert_eq!(message.provider_response.as_deref(), Some("1002|invalid key"));
}

#[tokio::test]
async fn no_credential_marks_the_row_failed_instead_of_erroring() {
    let fixture = Fixture::new().await;
    let (service, calls) = fixture.service(StubGateway::succeeding("Alpha", "ok"));

    let message = service
        .send_single(fixture.user_id, fixture.contact_id, "Hi")
        .await
        .unwrap();

    assert_eq!(message.status, DeliveryStatus::Failed);
    assert!(message
        .provider_response
        .as_deref()
        .unwrap()
        .contains("No SMS provider available"));
    assert!(calls.lock().await.is_empty());
}

#[tokio::test]
async fn unsupported_provider_marks_the_row_failed() {
    let fixture = Fixture::new().await.with_credential("Foo").await;
    let (service, _) = fixture.service(StubGateway::succeeding("Alpha", "ok"));

    let message = service
        .send_single(fixture.user_id, fixture.contact_id, "Hi")
        .await
        .unwrap();

    assert_eq!(message.status, DeliveryStatus::Failed);
    assert!(message
        .provider_response
        .as_deref()
        .unwrap()
        .contains("Foo"));
}

#[tokio::test]
async fn unknown_contact_is_not_found_and_nothing_is_inserted() {
    let fixture = Fixture::new().await.with_credential("Alpha").await;
    let (service, _) = fixture.service(StubGateway::succeeding("Alpha", "ok"));

    let result = service
        .send_single(fixture.user_id, Uuid::new_v4(), "Hi")
        .await;

    assert!(matches!(result, Err(DomainError::NotFound { .. })));
    assert_eq!(fixture.messages.count().await, 0);
}

#[tokio::test]
async fn send_by_phone_resolves_the_contact_after_normalization() {
    let fixture = Fixture::new().await.with_credential("Alpha").await;
    let (service, calls) = fixture.service(StubGateway::succeeding("Alpha", "ok"));

    // Formatted input matches the contact stored as +233501234567.
    let message = service
        .send_single_by_phone(fixture.user_id, "+233 50 123 4567", "Hi Kofi")
        .await
        .unwrap();

    assert_eq!(message.status, DeliveryStatus::Sent);
    assert_eq!(message.contact_id, fixture.contact_id);
    assert_eq!(
        calls.lock().await[0].recipients,
        vec!["+233501234567".to_string()]
    );
}

#[tokio::test]
async fn send_by_phone_rejects_malformed_numbers() {
    let fixture = Fixture::new().await.with_credential("Alpha").await;
    let (service, calls) = fixture.service(StubGateway::succeeding("Alpha", "ok"));

    let result = service
        .send_single_by_phone(fixture.user_id, "0244123456", "Hi")
        .await;

    assert!(matches!(result, Err(DomainError::Validation { .. })));
    assert!(calls.lock().await.is_empty());
    assert_eq!(fixture.messages.count().await, 0);
}

#[tokio::test]
async fn send_by_phone_with_unknown_number_is_not_found() {
    let fixture = Fixture::new().await.with_credential("Alpha").await;
    let (service, _) = fixture.service(StubGateway::succeeding("Alpha", "ok"));

    let result = service
        .send_single_by_phone(fixture.user_id, "+233209999999", "Hi")
        .await;

    assert!(matches!(result, Err(DomainError::NotFound { .. })));
    assert_eq!(fixture.messages.count().await, 0);
}

#[tokio::test]
async fn empty_content_is_rejected() {
    let fixture = Fixture::new().await.with_credential("Alpha").await;
    let (service, _) = fixture.service(StubGateway::succeeding("Alpha", "ok"));

    let result = service
        .send_single(fixture.user_id, fixture.contact_id, "   ")
        .await;

    assert!(matches!(result, Err(DomainError::Validation { .. })));
}
