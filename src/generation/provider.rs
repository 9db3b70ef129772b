use std::fmt;

use async_trait::async_trait;

/// Errors that can occur during a generation call.
///
/// The conversation layer collapses every variant into the same fallback
/// message; the variants exist so operators can tell faults apart in logs.
#[derive(Debug)]
pub enum GenerationError {
    /// Provider misconfigured (missing API key, bad URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned an error response (quota, auth, server fault).
    Api { status: u16, message: String },
    /// Failed to parse the provider's response.
    Parse(String),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::Config(msg) => write!(f, "config error: {msg}"),
            GenerationError::Network(msg) => write!(f, "network error: {msg}"),
            GenerationError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            GenerationError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for GenerationError {}

/// Everything a provider needs to fulfill a generation request.
pub struct GenerationRequest<'a> {
    /// Full prompt: persona template plus the user's literal text.
    pub prompt: &'a str,
    pub model: &'a str,
    pub max_output_tokens: u32,
}

/// A hosted text-generation service: one prompt in, one reply out.
/// No streaming, no tool calls — a single suspending round trip.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Generates a reply for the given request.
    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, GenerationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GenerationError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 429): quota exceeded");
        assert_eq!(
            GenerationError::Network("timed out".to_string()).to_string(),
            "network error: timed out"
        );
    }
}
