//! Notification feed repository.

#[path = "trait.rs"]
mod trait_;

mod mock;

pub use mock::MockNotificationRepository;
pub use trait_::NotificationRepository;
