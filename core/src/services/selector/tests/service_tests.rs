//! Selection priority tests

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::credential::{SystemCredential, UserCredential};
use crate::domain::value_objects::{CredentialOwner, SelectionKind};
use crate::errors::{DispatchError, DomainError};
use crate::repositories::{MockCredentialStore, SystemCredentialRepository, UserCredentialRepository, DefaultProviderRepository};
use crate::services::selector::ProviderSelector;

use super::mocks::FixedRng;

fn selector(
    store: &Arc<MockCredentialStore>,
) -> ProviderSelector<MockCredentialStore, MockCredentialStore, MockCredentialStore, FixedRng> {
    ProviderSelector::with_rng(store.clone(), store.clone(), store.clone(), FixedRng(0))
}

#[tokio::test]
async fn default_wins_over_other_credentials() {
    let store = Arc::new(MockCredentialStore::new());
    let user_id = Uuid::new_v4();
    let alpha = Uuid::new_v4();
    let beta = Uuid::new_v4();
    store.register_provider(alpha, "Alpha").await;
    store.register_provider(beta, "Beta").await;

    UserCredentialRepository::create(&*store, UserCredential::new(user_id, alpha, "alpha-key", None))
        .await
        .unwrap();
    UserCredentialRepository::create(&*store, UserCredential::new(user_id, beta, "beta-key", None))
        .await
        .unwrap();
    store.set(user_id, beta).await.unwrap();

    let selection = selector(&store).choose(user_id).await.unwrap();
    assert_eq!(selection.kind, SelectionKind::UserDefault);
    assert_eq!(selection.credential.provider_name, "Beta");
    assert_eq!(selection.credential.api_key, "beta-key");
}

#[tokio::test]
async fn dangling_default_falls_through_to_random() {
    let store = Arc::new(MockCredentialStore::new());
    let user_id = Uuid::new_v4();
    let alpha = Uuid::new_v4();
    let orphaned = Uuid::new_v4();
    store.register_provider(alpha, "Alpha").await;

    UserCredentialRepository::create(&*store, UserCredential::new(user_id, alpha, "alpha-key", None))
        .await
        .unwrap();
    // Default points at a provider the user holds no credential for
    store.set(user_id, orphaned).await.unwrap();

    let selection = selector(&store).choose(user_id).await.unwrap();
    assert_eq!(selection.kind, SelectionKind::UserRandom);
    assert_eq!(selection.credential.provider_name, "Alpha");
}

#[tokio::test]
async fn random_pick_never_crosses_users() {
    let store = Arc::new(MockCredentialStore::new());
    let user_id = Uuid::new_v4();
    let other_user = Uuid::new_v4();
    let alpha = Uuid::new_v4();
    let beta = Uuid::new_v4();
    store.register_provider(alpha, "Alpha").await;
    store.register_provider(beta, "Beta").await;

    UserCredentialRepository::create(&*store, UserCredential::new(user_id, alpha, "mine", None))
        .await
        .unwrap();
    UserCredentialRepository::create(&*store, UserCredential::new(other_user, beta, "theirs", None))
        .await
        .unwrap();

    // FixedRng(5) clamps to the last candidate; the only candidate must
    // still belong to the requesting user.
    let selector = ProviderSelector::with_rng(
        store.clone(),
        store.clone(),
        store.clone(),
        FixedRng(5),
    );
    let selection = selector.choose(user_id).await.unwrap();
    assert_eq!(selection.kind, SelectionKind::UserRandom);
    assert_eq!(selection.credential.owner, CredentialOwner::User(user_id));
    assert_eq!(selection.credential.api_key, "mine");
}

#[tokio::test]
async fn deterministic_rng_picks_expected_candidate() {
    let store = Arc::new(MockCredentialStore::new());
    let user_id = Uuid::new_v4();
    let alpha = Uuid::new_v4();
    let beta = Uuid::new_v4();
    store.register_provider(alpha, "Alpha").await;
    store.register_provider(beta, "Beta").await;

    UserCredentialRepository::create(&*store, UserCredential::new(user_id, alpha, "alpha-key", None))
        .await
        .unwrap();
    UserCredentialRepository::create(&*store, UserCredential::new(user_id, beta, "beta-key", None))
        .await
        .unwrap();

    // Candidates are ordered by provider name; index 1 is "Beta".
    let selector = ProviderSelector::with_rng(
        store.clone(),
        store.clone(),
        store.clone(),
        FixedRng(1),
    );
    let selection = selector.choose(user_id).await.unwrap();
    assert_eq!(selection.credential.provider_name, "Beta");
}

#[tokio::test]
async fn no_credentials_falls_back_to_system() {
    let store = Arc::new(MockCredentialStore::new());
    let user_id = Uuid::new_v4();
    let provider_id = Uuid::new_v4();
    store.register_provider(provider_id, "MNotify").await;

    SystemCredentialRepository::create(
        &*store,
        SystemCredential::new(provider_id, "system-key", Some("SYSTEM".to_string())),
    )
    .await
    .unwrap();

    let selection = selector(&store).choose(user_id).await.unwrap();
    assert_eq!(selection.kind, SelectionKind::SystemDefault);
    assert_eq!(selection.credential.owner, CredentialOwner::System);
    assert_eq!(selection.credential.api_key, "system-key");
}

#[tokio::test]
async fn empty_chain_fails_with_no_provider_available() {
    let store = Arc::new(MockCredentialStore::new());
    let result = selector(&store).choose(Uuid::new_v4()).await;

    assert!(matches!(
        result,
        Err(DomainError::Dispatch(DispatchError::NoProviderAvailable))
    ));
}
