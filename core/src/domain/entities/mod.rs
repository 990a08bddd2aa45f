//! Domain entities representing core business objects.

pub mod campaign;
pub mod contact;
pub mod credential;
pub mod message;
pub mod notification;
pub mod provider;

// Re-export commonly used types
pub use campaign::{Campaign, DeliveryStatus, MessageHistory};
pub use contact::Contact;
pub use credential::{SystemCredential, UserCredential, UserDefaultProvider};
pub use message::Message;
pub use notification::Notification;
pub use provider::Provider;
