//! Server Configuration
//!
//! Read once at startup from the environment (optionally seeded by `.env`).

use std::io::IsTerminal;

use finance_advisor::advice::advice_options;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8501";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// `BIND_ADDR`
    pub bind_addr: String,

    /// `GROQ_MODEL`
    pub model: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            bind_addr: non_blank("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            model: non_blank("GROQ_MODEL").unwrap_or_else(|| advice_options().model),
        }
    }
}

/// Resolve the Groq credential: environment first, then the operator
///
/// Fails when neither yields a non-blank key. Nothing else may start
/// before this succeeds.
pub fn resolve_api_key(
    from_env: Option<String>,
    prompt: impl FnOnce() -> Option<String>,
) -> anyhow::Result<String> {
    let clean = |key: String| Some(key.trim().to_string()).filter(|k| !k.is_empty());

    from_env
        .and_then(clean)
        .or_else(|| prompt().and_then(clean))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Please enter your Groq API key to continue: set GROQ_API_KEY in the environment or in .env"
            )
        })
}

/// Ask for the key on the terminal without echoing it
pub fn prompt_for_api_key() -> Option<String> {
    if !std::io::stdin().is_terminal() {
        return None;
    }

    match rpassword::prompt_password("Enter Groq API Key: ") {
        Ok(key) => Some(key),
        Err(e) => {
            tracing::warn!("Could not read API key from terminal: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.model, "llama3-70b-8192");
    }

    #[test]
    fn test_overrides_and_blank_values() {
        let config = ServerConfig::from_lookup(|name| match name {
            "BIND_ADDR" => Some("0.0.0.0:9000".into()),
            "GROQ_MODEL" => Some("  ".into()),
            _ => None,
        });
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.model, "llama3-70b-8192");
    }

    #[test]
    fn test_env_key_wins_without_prompting() {
        let key = resolve_api_key(Some(" gsk_env ".into()), || panic!("should not prompt")).unwrap();
        assert_eq!(key, "gsk_env");
    }

    #[test]
    fn test_prompt_used_when_env_missing_or_blank() {
        let key = resolve_api_key(None, || Some("gsk_typed".into())).unwrap();
        assert_eq!(key, "gsk_typed");

        let key = resolve_api_key(Some(String::new()), || Some("gsk_typed".into())).unwrap();
        assert_eq!(key, "gsk_typed");
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let err = resolve_api_key(None, || None).unwrap_err();
        assert!(err.to_string().contains("GROQ_API_KEY"));

        assert!(resolve_api_key(None, || Some("   ".into())).is_err());
    }
}
