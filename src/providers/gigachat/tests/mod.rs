//! Tests for GigaChat provider internals
//!
//! Pure-function tests only. HTTP behaviour is covered by the MockServer
//! tests in tests/gigachat_client_integration_tests.rs and
//! tests/token_lifecycle_integration_tests.rs.
