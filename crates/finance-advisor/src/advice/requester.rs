//! Advice Requester
//!
//! Single-shot call to an `LlmProvider`. Never fails: any provider error is
//! logged, reported back as a diagnostic, and replaced by a generic tip.

use std::sync::Arc;

use llm_core::{GenerationOptions, LlmError, LlmProvider, Message};
use serde::{Deserialize, Serialize};

use super::prompt::build_advice_prompt;
use crate::model::FinancialRecord;

/// Tip returned whenever the provider cannot produce one
pub const FALLBACK_TIP: &str = "🤖 Tip: Review your largest expense category for potential savings.";

/// Sampling parameters for short, steady one- or two-sentence tips
pub fn advice_options() -> GenerationOptions {
    GenerationOptions {
        model: "llama3-70b-8192".into(),
        temperature: 0.7,
        max_tokens: 128,
        top_p: 1.0,
        stop_sequences: Vec::new(),
    }
}

/// Tip text plus an operator-facing diagnostic when the fallback was used
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl Advice {
    fn generated(text: impl Into<String>) -> Self {
        Self { text: text.into(), diagnostic: None }
    }

    fn fallback(diagnostic: String) -> Self {
        Self { text: FALLBACK_TIP.into(), diagnostic: Some(diagnostic) }
    }

    /// Whether the provider failed and the generic tip was substituted
    pub const fn is_fallback(&self) -> bool {
        self.diagnostic.is_some()
    }
}

/// Asks a provider for one personalized tip per record
#[derive(Clone)]
pub struct AdviceRequester {
    provider: Arc<dyn LlmProvider>,
    options: GenerationOptions,
}

impl AdviceRequester {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider, options: advice_options() }
    }

    /// Use a different model with the same sampling parameters
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.options = self.options.with_model(model);
        self
    }

    pub const fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn provider(&self) -> &dyn LlmProvider {
        self.provider.as_ref()
    }

    /// Request a tip for `record`; one attempt, no retry
    pub async fn request_advice(&self, record: &FinancialRecord) -> Advice {
        let messages = [Message::user(build_advice_prompt(record))];

        let result = self
            .provider
            .complete(&messages, &self.options)
            .await
            .and_then(|completion| {
                let text = completion.content.trim();
                if text.is_empty() {
                    Err(LlmError::EmptyResponse(self.provider.name().to_string()))
                } else {
                    Ok(text.to_string())
                }
            });

        match result {
            Ok(text) => {
                tracing::debug!(provider = self.provider.name(), "advice generated");
                Advice::generated(text)
            }
            Err(e) => {
                tracing::error!(provider = self.provider.name(), error = %e, "advice request failed");
                Advice::fallback(format!(
                    "{} API error: {} Please check your API key and internet connection.",
                    self.provider.name(),
                    e.user_message()
                ))
            }
        }
    }
}
