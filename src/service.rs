//! The provider-neutral generation contract and prompt validation.

use crate::bongo::AiResponse;
use crate::error::AiServiceError;

const EMPTY_PROMPT: &str = "Prompt cannot be empty and must be a string";
const BLANK_PROMPT: &str = "Prompt cannot be whitespace only";

/// A text-generation backend.
///
/// `generate_response` validates before doing any I/O, so an invalid
/// prompt fails with [`AiServiceError::InvalidPrompt`] without touching the
/// network. A service that answers with its own error status yields an
/// `Ok` [`AiResponse`] carrying that status; only failures to get an answer
/// at all are returned as `Err`.
#[allow(async_fn_in_trait)]
pub trait AiService {
    async fn generate_response(&self, prompt: &str) -> Result<AiResponse, AiServiceError>;

    fn validate_prompt(&self, prompt: &str) -> Result<(), AiServiceError> {
        validate_prompt(prompt)
    }
}

/// Rejects empty and whitespace-only prompts.
pub fn validate_prompt(prompt: &str) -> Result<(), AiServiceError> {
    if prompt.is_empty() {
        return Err(AiServiceError::InvalidPrompt(EMPTY_PROMPT.into()));
    }
    if prompt.trim().is_empty() {
        return Err(AiServiceError::InvalidPrompt(BLANK_PROMPT.into()));
    }
    Ok(())
}

/// Accepts raw input only if it is UTF-8 text that passes [`validate_prompt`].
pub fn prompt_from_bytes(raw: &[u8]) -> Result<&str, AiServiceError> {
    let prompt =
        std::str::from_utf8(raw).map_err(|_| AiServiceError::InvalidPrompt(EMPTY_PROMPT.into()))?;
    validate_prompt(prompt)?;
    Ok(prompt)
}

/// Accepts a JSON value only if it is a string that passes [`validate_prompt`].
pub fn prompt_from_value(value: &serde_json::Value) -> Result<&str, AiServiceError> {
    let prompt = value
        .as_str()
        .ok_or_else(|| AiServiceError::InvalidPrompt(EMPTY_PROMPT.into()))?;
    validate_prompt(prompt)?;
    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_prompt_rejected() {
        let err = validate_prompt("").unwrap_err();
        assert_eq!(err, AiServiceError::InvalidPrompt(EMPTY_PROMPT.into()));
    }

    #[test]
    fn whitespace_prompts_rejected() {
        for prompt in [" ", "   ", "\t", "\n\r\n", " \t \u{3000} "] {
            let err = validate_prompt(prompt).unwrap_err();
            assert_eq!(err, AiServiceError::InvalidPrompt(BLANK_PROMPT.into()), "{prompt:?}");
        }
    }

    #[test]
    fn text_prompts_accepted() {
        for prompt in ["Hello", "  padded  ", "a", "\n42\n", "こんにちは"] {
            assert!(validate_prompt(prompt).is_ok(), "{prompt:?}");
        }
    }

    #[test]
    fn non_utf8_bytes_rejected() {
        let err = prompt_from_bytes(&[0xff, 0xfe, 0x41]).unwrap_err();
        assert!(err.is_invalid_prompt());
    }

    #[test]
    fn utf8_bytes_validated() {
        assert_eq!(prompt_from_bytes(b"Hello").unwrap(), "Hello");
        assert!(prompt_from_bytes(b"  \n").unwrap_err().is_invalid_prompt());
    }

    #[test]
    fn non_string_values_rejected() {
        for value in [json!(null), json!(42), json!(true), json!(["hi"]), json!({"p": "hi"})] {
            let err = prompt_from_value(&value).unwrap_err();
            assert!(err.is_invalid_prompt(), "{value}");
        }
    }

    #[test]
    fn string_value_accepted() {
        let value = json!("Tell me a joke");
        assert_eq!(prompt_from_value(&value).unwrap(), "Tell me a joke");
        assert!(prompt_from_value(&json!("   ")).unwrap_err().is_invalid_prompt());
    }
}
