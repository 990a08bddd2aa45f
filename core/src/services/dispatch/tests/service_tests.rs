//! Bulk dispatch flow tests

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::campaign::DeliveryStatus;
use crate::domain::entities::credential::{SystemCredential, UserCredential};
use crate::errors::{DispatchError, DomainError};
use crate::repositories::{
    CampaignRepository, MockCampaignRepository, MockCredentialStore, SystemCredentialRepository,
    UserCredentialRepository,
};
use crate::services::dispatch::executor::SendExecutor;
use crate::services::dispatch::recorder::CampaignRecorder;
use crate::services::dispatch::service::DispatchService;
use crate::services::selector::ProviderSelector;

use super::mocks::{registry_with, FixedRng, StubGateway};

type TestDispatch = DispatchService<
    MockCredentialStore,
    MockCredentialStore,
    MockCredentialStore,
    MockCampaignRepository,
    FixedRng,
>;

fn service(
    store: &Arc<MockCredentialStore>,
    campaigns: &Arc<MockCampaignRepository>,
    gateway: StubGateway,
) -> (TestDispatch, Arc<tokio::sync::Mutex<Vec<super::mocks::RecordedCall>>>) {
    let (registry, calls) = registry_with(gateway);
    let selector =
        ProviderSelector::with_rng(store.clone(), store.clone(), store.clone(), FixedRng(0));
    let service = DispatchService::new(
        selector,
        SendExecutor::new(registry),
        CampaignRecorder::new(campaigns.clone()),
    );
    (service, calls)
}

async fn seed_user_credential(
    store: &MockCredentialStore,
    user_id: Uuid,
    provider_name: &str,
    api_key: &str,
) -> Uuid {
    let provider_id = Uuid::new_v4();
    store.register_provider(provider_id, provider_name).await;
    UserCredentialRepository::create(
        store,
        UserCredential::new(user_id, provider_id, api_key, None),
    )
    .await
    .unwrap();
    provider_id
}

fn recipients() -> Vec<String> {
    vec!["+233501234567".to_string()]
}

#[tokio::test]
async fn alpha_only_user_sends_and_records_sent() {
    // User holds a single "Alpha" credential, no default, no system config.
    let store = Arc::new(MockCredentialStore::new());
    let campaigns = Arc::new(MockCampaignRepository::new());
    let user_id = Uuid::new_v4();
    seed_user_credential(&store, user_id, "Alpha", "alpha-key").await;

    let (service, calls) = service(&store, &campaigns, StubGateway::succeeding("Alpha", "ok"));

    let summary = service
        .send_bulk(user_id, None, "Hi", &recipients())
        .await
        .unwrap();

    assert_eq!(summary.total_sent, 1);
    assert_eq!(summary.total_failed, 0);
    assert_eq!(calls.lock().await.len(), 1);

    assert_eq!(campaigns.campaign_count().await, 1);
    let rows = campaigns.history_for_campaign(summary.campaign_id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, DeliveryStatus::Sent);
}

#[tokio::test]
async fn provider_failure_returns_counts_not_error() {
    let store = Arc::new(MockCredentialStore::new());
    let campaigns = Arc::new(MockCampaignRepository::new());
    let user_id = Uuid::new_v4();
    seed_user_credential(&store, user_id, "Alpha", "alpha-key").await;

    let (service, _) = service(
        &store,
        &campaigns,
        StubGateway::failing("Alpha", "1002|invalid key"),
    );

    let many = vec![
        "+233501234567".to_string(),
        "+233207654321".to_string(),
        "+233551112223".to_string(),
    ];
    let summary = service.send_bulk(user_id, None, "Hi", &many).await.unwrap();

    assert_eq!(summary.total_sent, 0);
    assert_eq!(summary.total_failed, 3);

    let rows = campaigns.history_for_campaign(summary.campaign_id).await.unwrap();
    assert_eq!(rows[0].status, DeliveryStatus::Failed);
    assert_eq!(rows[0].provider_response.as_deref(), Some("1002|invalid key"));
}

#[tokio::test]
async fn unsupported_provider_is_recorded_then_surfaced() {
    // The user's only credential names a provider with no gateway.
    let store = Arc::new(MockCredentialStore::new());
    let campaigns = Arc::new(MockCampaignRepository::new());
    let user_id = Uuid::new_v4();
    seed_user_credential(&store, user_id, "Foo", "foo-key").await;

    let (service, calls) = service(&store, &campaigns, StubGateway::succeeding("Alpha", "ok"));

    let result = service.send_bulk(user_id, None, "Hi", &recipients()).await;

    match result {
        Err(DomainError::Dispatch(DispatchError::UnsupportedProvider { provider })) => {
            assert_eq!(provider, "Foo");
        }
        other => panic!("expected UnsupportedProvider, got {other:?}"),
    }

    // No outbound call, but the failed attempt is still on record.
    assert!(calls.lock().await.is_empty());
    assert_eq!(campaigns.campaign_count().await, 1);
    assert_eq!(campaigns.history_count().await, 1);
}

#[tokio::test]
async fn no_credentials_aborts_before_any_call_or_write() {
    let store = Arc::new(MockCredentialStore::new());
    let campaigns = Arc::new(MockCampaignRepository::new());

    let (service, calls) = service(&store, &campaigns, StubGateway::succeeding("Alpha", "ok"));

    let result = service
        .send_bulk(Uuid::new_v4(), None, "Hi", &recipients())
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Dispatch(DispatchError::NoProviderAvailable))
    ));
    assert!(calls.lock().await.is_empty());
    assert_eq!(campaigns.campaign_count().await, 0);
}

#[tokio::test]
async fn system_credential_carries_the_send() {
    let store = Arc::new(MockCredentialStore::new());
    let campaigns = Arc::new(MockCampaignRepository::new());
    let provider_id = Uuid::new_v4();
    store.register_provider(provider_id, "Alpha").await;
    SystemCredentialRepository::create(
        &*store,
        SystemCredential::new(provider_id, "system-key", Some("SYSTEM".to_string())),
    )
    .await
    .unwrap();

    let (service, calls) = service(&store, &campaigns, StubGateway::succeeding("Alpha", "ok"));

    let summary = service
        .send_bulk(Uuid::new_v4(), None, "Hi", &recipients())
        .await
        .unwrap();

    assert_eq!(summary.total_sent, 1);
    let calls = calls.lock().await;
    assert_eq!(calls[0].api_key, "system-key");
    assert_eq!(calls[0].sender_id, "SYSTEM");
}

#[tokio::test]
async fn recording_loss_surfaces_as_logging_failed() {
    let store = Arc::new(MockCredentialStore::new());
    let campaigns = Arc::new(MockCampaignRepository::new());
    let user_id = Uuid::new_v4();
    seed_user_credential(&store, user_id, "Alpha", "alpha-key").await;
    campaigns.fail_next_writes(2).await;

    let (service, _) = service(
        &store,
        &campaigns,
        StubGateway::failing("Alpha", "connection timed out"),
    );

    let result = service.send_bulk(user_id, None, "Hi", &recipients()).await;

    // Distinguishable from counts-with-failures: the audit trail is gone.
    assert!(matches!(
        result,
        Err(DomainError::Dispatch(DispatchError::LoggingFailed { .. }))
    ));
}

#[tokio::test]
async fn empty_message_or_recipients_is_rejected_upfront() {
    let store = Arc::new(MockCredentialStore::new());
    let campaigns = Arc::new(MockCampaignRepository::new());
    let user_id = Uuid::new_v4();
    seed_user_credential(&store, user_id, "Alpha", "alpha-key").await;

    let (service, calls) = service(&store, &campaigns, StubGateway::succeeding("Alpha", "ok"));

    let blank = service.send_bulk(user_id, None, "  ", &recipients()).await;
    assert!(matches!(blank, Err(DomainError::Validation { .. })));

    let nobody = service.send_bulk(user_id, None, "Hi", &[]).await;
    assert!(matches!(nobody, Err(DomainError::Validation { .. })));

    assert!(calls.lock().await.is_empty());
    assert_eq!(campaigns.campaign_count().await, 0);
}

#[tokio::test]
async fn malformed_recipient_is_rejected_upfront() {
    let store = Arc::new(MockCredentialStore::new());
    let campaigns = Arc::new(MockCampaignRepository::new());
    let user_id = Uuid::new_v4();
    seed_user_credential(&store, user_id, "Alpha", "alpha-key").await;

    let (service, calls) = service(&store, &campaigns, StubGateway::succeeding("Alpha", "ok"));

    // One bad address poisons the whole batch before any outbound work.
    let mixed = vec!["+233501234567".to_string(), "0244123456".to_string()];
    let result = service.send_bulk(user_id, None, "Hi", &mixed).await;

    assert!(matches!(result, Err(DomainError::Validation { .. })));
    assert!(calls.lock().await.is_empty());
    assert_eq!(campaigns.campaign_count().await, 0);
}

#[tokio::test]
async fn sender_override_reaches_the_gateway() {
    let store = Arc::new(MockCredentialStore::new());
    let campaigns = Arc::new(MockCampaignRepository::new());
    let user_id = Uuid::new_v4();
    seed_user_credential(&store, user_id, "Alpha", "alpha-key").await;

    let (service, calls) = service(&store, &campaigns, StubGateway::succeeding("Alpha", "ok"));

    service
        .send_bulk(user_id, Some("PROMO"), "Hi", &recipients())
        .await
        .unwrap();

    assert_eq!(calls.lock().await[0].sender_id, "PROMO");
}
