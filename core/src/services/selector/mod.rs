//! Provider selection.
//!
//! Resolves which credential a send should go out with, in strict priority
//! order: the user's explicit default, a uniformly random pick among the
//! user's own credentials, then a random system-wide fallback credential.
//! Every send re-resolves; nothing is cached or sticky.

mod rng;
mod service;

#[cfg(test)]
mod tests;

pub use rng::{SelectionRng, UniformRng};
pub use service::ProviderSelector;
