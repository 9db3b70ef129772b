pub mod openrouter;
pub mod provider;

pub use openrouter::OpenRouterProvider;
pub use provider::{GenerationError, GenerationProvider, GenerationRequest};
