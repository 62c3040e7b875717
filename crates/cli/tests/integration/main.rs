//! Integration tests for the fpmfile CLI.
//!
//! The packaging tool is replaced by `tests/fixtures/fake-fpm.sh`, which logs
//! every invocation so tests can assert on the exact arguments fpm would get.

#![cfg(unix)]

mod build_tests;
mod common;
