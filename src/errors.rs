/*!
 * Error types for the tarjoman translation core.
 *
 * This module contains custom error types for different parts of the pipeline,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when working with provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error with authentication (missing or rejected credential)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// Provider requires an endpoint URL that was not supplied.
    /// Configuration problem, distinct from authentication.
    #[error("Missing endpoint: {0}")]
    MissingEndpoint(String),
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The request carried no translatable text
    #[error("No text provided for translation")]
    EmptyInput,

    /// The service has no usable provider configuration
    #[error("Translation service is not configured: {0}")]
    NotConfigured(String),

    /// Error from the provider API, tagged with the provider name
    #[error("Provider '{provider}' failed: {source}")]
    Provider {
        /// Lowercase provider identifier
        provider: String,
        /// Underlying provider error
        #[source]
        source: ProviderError,
    },
}

impl TranslationError {
    /// Wrap a provider error with the provider's name
    pub fn from_provider(provider: impl Into<String>, source: ProviderError) -> Self {
        Self::Provider {
            provider: provider.into(),
            source,
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
