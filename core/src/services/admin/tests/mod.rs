//! Tests for provider and credential administration
