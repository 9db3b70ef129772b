//! Bedside library exports for the binary and for testing

pub mod auth;
pub mod core;
pub mod generation;
pub mod tui;

#[cfg(test)]
pub mod test_support;
