//! Notification feed service tests

use std::sync::Arc;

use uuid::Uuid;

use crate::errors::DomainError;
use crate::repositories::MockNotificationRepository;
use crate::services::notification::NotificationService;

fn service() -> (
    NotificationService<MockNotificationRepository>,
    Arc<MockNotificationRepository>,
) {
    let repo = Arc::new(MockNotificationRepository::new());
    (NotificationService::new(repo.clone()), repo)
}

#[tokio::test]
async fn notify_persists_and_returns_the_notification() {
    let (service, repo) = service();
    let recipient = Uuid::new_v4();

    let notification = service
        .notify(recipient, "Campaign sent", "2 sent, 0 failed", "campaign")
        .await
        .unwrap();

    assert_eq!(notification.recipient_id, recipient);
    assert_eq!(notification.kind, "campaign");
    assert_eq!(repo.count().await, 1);
}

#[tokio::test]
async fn empty_title_or_body_is_rejected() {
    let (service, repo) = service();
    let recipient = Uuid::new_v4();

    let no_title = service.notify(recipient, "  ", "body", "campaign").await;
    assert!(matches!(no_title, Err(DomainError::Validation { .. })));

    let no_body = service.notify(recipient, "Title", "", "campaign").await;
    assert!(matches!(no_body, Err(DomainError::Validation { .. })));

    assert_eq!(repo.count().await, 0);
}

#[tokio::test]
async fn list_pages_newest_first_and_scopes_by_recipient() {
    let (service, _) = service();
    let recipient = Uuid::new_v4();

    for i in 0..3 {
        service
            .notify(recipient, &format!("Title {i}"), "body", "campaign")
            .await
            .unwrap();
    }
    service
        .notify(Uuid::new_v4(), "Someone else's", "body", "campaign")
        .await
        .unwrap();

    let first_page = service.list(recipient, 1, 2).await.unwrap();
    assert_eq!(first_page.len(), 2);
    assert_eq!(first_page[0].title, "Title 2");
    assert_eq!(first_page[1].title, "Title 1");

    let second_page = service.list(recipient, 2, 2).await.unwrap();
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].title, "Title 0");
}

#[tokio::test]
async fn list_normalizes_page_zero_and_default_page_size() {
    let (service, _) = service();
    let recipient = Uuid::new_v4();

    for i in 0..12 {
        service
            .notify(recipient, &format!("Title {i}"), "body", "campaign")
            .await
            .unwrap();
    }

    // page 0 reads as page 1; per_page 0 falls back to the default of 10
    let page = service.list(recipient, 0, 0).await.unwrap();
    assert_eq!(page.len(), 10);
    assert_eq!(page[0].title, "Title 11");
}
