//! Business logic services.
//!
//! The dispatch pipeline is split into three small collaborators (selector,
//! executor, recorder) orchestrated by the bulk and single-send services.
//! Administration of providers and credentials lives in `admin`, the in-app
//! notification feed in `notification`.

pub mod admin;
pub mod dispatch;
pub mod notification;
pub mod selector;

pub use admin::{CredentialService, ProviderService};
pub use dispatch::{
    CampaignRecorder, DirectMessageService, DispatchService, GatewayRegistry, SendExecutor,
    SmsGateway,
};
pub use notification::NotificationService;
pub use selector::{ProviderSelector, SelectionRng, UniformRng};
