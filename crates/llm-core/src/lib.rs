//! # llm-core
//!
//! Provider-agnostic LLM abstraction used by the finance advisor.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 AdviceRequester                      │
//! │  ┌──────────────┐        ┌────────────────────────┐  │
//! │  │   Prompt     │──────▶ │  dyn LlmProvider       │  │
//! │  │   Builder    │        │  (Groq, fakes, ...)    │  │
//! │  └──────────────┘        └────────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! The `LlmProvider` trait is the only seam between domain code and the
//! network, so tests can swap in a fake without touching the requester.

pub mod error;
pub mod message;
pub mod provider;

pub use error::{LlmError, Result};
pub use message::{Message, Role};
pub use provider::{Completion, FinishReason, GenerationOptions, LlmProvider, TokenUsage};
