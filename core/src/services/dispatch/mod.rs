//! Send pipeline: gateway registry, executor, recorder and the two
//! dispatch entry points (bulk campaign sends, single direct messages).

mod executor;
mod gateway;
mod recorder;
mod service;
mod single;

#[cfg(test)]
mod tests;

pub use executor::SendExecutor;
pub use gateway::{GatewayRegistry, SmsGateway};
pub use recorder::CampaignRecorder;
pub use service::DispatchService;
pub use single::DirectMessageService;
