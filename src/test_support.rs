//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::generation::{GenerationError, GenerationProvider, GenerationRequest};

/// A provider that always replies with a fixed canned text.
pub struct CannedGenerator {
    pub reply: String,
}

impl Default for CannedGenerator {
    fn default() -> Self {
        Self {
            reply: "Canned reply.".to_string(),
        }
    }
}

#[async_trait]
impl GenerationProvider for CannedGenerator {
    fn name(&self) -> &str {
        "canned"
    }

    async fn generate(&self, _request: GenerationRequest<'_>) -> Result<String, GenerationError> {
        Ok(self.reply.clone())
    }
}

/// A provider that fails every call with a network fault.
pub struct FailingGenerator;

#[async_trait]
impl GenerationProvider for FailingGenerator {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(&self, _request: GenerationRequest<'_>) -> Result<String, GenerationError> {
        Err(GenerationError::Network("connection refused".to_string()))
    }
}

/// Creates a test App with a CannedGenerator.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(CannedGenerator::default()), "test-model".to_string())
}
