//! # llm-runtime
//!
//! Runtime providers for the finance tips service.
//!
//! ## Providers
//!
//! - **Groq** (default): hosted inference through Groq's OpenAI-compatible
//!   chat completions API
//!
//! ## Usage
//!
//! ```rust,ignore
//! use llm_runtime::groq::{GroqConfig, GroqProvider};
//!
//! let provider = GroqProvider::new(GroqConfig::from_env()?)?;
//! let requester = AdviceRequester::new(Arc::new(provider));
//! ```

#[cfg(feature = "groq")]
pub mod groq;

#[cfg(feature = "groq")]
pub use groq::{ApiKey, GroqConfig, GroqProvider};

// Re-export core types for convenience
pub use llm_core::{Completion, GenerationOptions, LlmError, LlmProvider, Message, Result, Role};
