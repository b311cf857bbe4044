/*!
 * Tests for error types and their display formatting
 */

use tarjoman::errors::{AppError, ProviderError, TranslationError};

#[test]
fn test_providerError_display_shouldDescribeEachVariant() {
    let request_failed = ProviderError::RequestFailed("connection refused".to_string());
    assert_eq!(
        request_failed.to_string(),
        "API request failed: connection refused"
    );

    let parse_error = ProviderError::ParseError("unexpected token".to_string());
    assert_eq!(
        parse_error.to_string(),
        "Failed to parse API response: unexpected token"
    );

    let api_error = ProviderError::ApiError {
        status_code: 429,
        message: "too many requests".to_string(),
    };
    assert_eq!(
        api_error.to_string(),
        "API responded with error: 429 - too many requests"
    );

    let auth = ProviderError::AuthenticationError("invalid key".to_string());
    assert_eq!(auth.to_string(), "Authentication error: invalid key");

    let endpoint = ProviderError::MissingEndpoint("no URL".to_string());
    assert_eq!(endpoint.to_string(), "Missing endpoint: no URL");
}

#[test]
fn test_translationError_emptyInput_shouldHaveStableMessage() {
    assert_eq!(
        TranslationError::EmptyInput.to_string(),
        "No text provided for translation"
    );
}

#[test]
fn test_translationError_fromProvider_shouldCarryProviderName() {
    let error = TranslationError::from_provider(
        "anthropic",
        ProviderError::AuthenticationError("invalid key".to_string()),
    );

    let message = error.to_string();
    assert!(message.contains("anthropic"));
    assert!(message.contains("Authentication error"));

    match error {
        TranslationError::Provider { provider, source } => {
            assert_eq!(provider, "anthropic");
            assert!(matches!(source, ProviderError::AuthenticationError(_)));
        }
        other => panic!("unexpected variant: {}", other),
    }
}

#[test]
fn test_appError_fromProviderError_shouldWrap() {
    let app_error: AppError =
        ProviderError::RequestFailed("connection refused".to_string()).into();

    assert!(matches!(app_error, AppError::Provider(_)));
    assert!(app_error.to_string().contains("connection refused"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
    let app_error: AppError = io_error.into();

    assert!(matches!(app_error, AppError::File(_)));
}
