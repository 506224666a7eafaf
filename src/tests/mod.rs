// Test modules for gigachat-client crate
//
// Each source module has a corresponding test file that focuses on
// behaviour verification. HTTP-level tests against a mock server live in
// the crate's tests/ directory.

// Test helper utilities
pub mod helpers;

pub mod config;
