//! Tests for provider selection

#[cfg(test)]
mod service_tests;
