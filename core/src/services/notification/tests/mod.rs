//! Tests for the notification feed service

#[cfg(test)]
mod service_tests;
