/*!
 * Mock provider implementations for testing.
 *
 * This module provides a scripted provider that records every prompt it
 * receives and plays back queued responses, plus failure injection for the
 * whole error taxonomy. No network traffic is ever produced.
 */

// Allow dead code - the mock is consumed by the test suite
#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::{GenerationRequest, Provider};

/// Failure mode injected into the next call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockFailure {
    /// Authentication error (invalid API key)
    Auth,
    /// Transport failure
    Request,
    /// API-level error with a status code
    Api,
    /// Unparsable response payload
    Parse,
}

/// Scripted provider for tests.
///
/// Responses are played back in FIFO order; when the queue is empty a fixed
/// fallback response is returned, so a two-round-trip translate call can be
/// scripted with exactly two queued strings.
#[derive(Debug)]
pub struct MockProvider {
    /// Queued responses, consumed front-first
    responses: Mutex<VecDeque<String>>,
    /// Fallback returned once the queue is empty
    fallback: String,
    /// Every prompt received, in call order
    prompts: Arc<Mutex<Vec<String>>>,
    /// Number of generate calls
    call_count: Arc<AtomicUsize>,
    /// Failure injected into the next call, if any
    fail_next: Mutex<Option<MockFailure>>,
}

impl MockProvider {
    /// Create a mock that always answers with the given text
    pub fn answering(fallback: impl Into<String>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            fallback: fallback.into(),
            prompts: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(AtomicUsize::new(0)),
            fail_next: Mutex::new(None),
        }
    }

    /// Create a mock playing back the given responses in order
    pub fn scripted(responses: Vec<String>) -> Self {
        let mock = Self::answering("mock response");
        *mock.responses.lock() = responses.into();
        mock
    }

    /// Queue one more response
    pub fn push_response(&self, response: impl Into<String>) {
        self.responses.lock().push_back(response.into());
    }

    /// Inject a failure into the next generate call
    pub fn fail_next_call(&self, failure: MockFailure) {
        *self.fail_next.lock() = Some(failure);
    }

    /// Handle to the captured prompts
    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        self.prompts.clone()
    }

    /// Handle to the call counter
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        self.call_count.clone()
    }

    /// Number of generate calls so far
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(&self, request: GenerationRequest) -> Result<String, ProviderError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().push(request.prompt.clone());

        if let Some(failure) = self.fail_next.lock().take() {
            return match failure {
                MockFailure::Auth => Err(ProviderError::AuthenticationError(
                    "Invalid API key".to_string(),
                )),
                MockFailure::Request => Err(ProviderError::RequestFailed(
                    "Connection refused".to_string(),
                )),
                MockFailure::Api => Err(ProviderError::ApiError {
                    status_code: 400,
                    message: "Bad request".to_string(),
                }),
                MockFailure::Parse => Err(ProviderError::ParseError(
                    "Malformed payload".to_string(),
                )),
            };
        }

        let next = self.responses.lock().pop_front();
        Ok(next.unwrap_or_else(|| self.fallback.clone()))
    }
}
