//! Tests for the send pipeline

#[cfg(test)]
mod mocks;

#[cfg(test)]
mod service_tests;
#[cfg(test)]
mod single_tests;
