//! LLM Advice
//!
//! Builds a prompt from a record and asks a provider for one short tip.

mod prompt;
mod requester;

pub use prompt::build_advice_prompt;
pub use requester::{advice_options, Advice, AdviceRequester, FALLBACK_TIP};
