//! Integration tests

mod engine_test;
mod fallback_test;
mod session_test;
