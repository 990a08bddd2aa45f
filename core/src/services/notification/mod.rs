//! In-app notification feed.
//!
//! Writing a notification and paging through a user's feed. Delivery to
//! clients (websocket, push) lives outside this core.

mod service;

#[cfg(test)]
mod tests;

pub use service::NotificationService;
