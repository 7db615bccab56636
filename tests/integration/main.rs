//! Integration tests for the `patterns` library and binary.

mod cli_test;
mod helpers;
mod observer_test;
mod traversal_test;
