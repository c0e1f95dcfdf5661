//! Canonical completion request and result types.
//!
//! The request is fully populated at the deserialization boundary: wire
//! fields that accept more than one JSON shape are coerced here and every
//! optional field carries its documented default, so downstream code never
//! probes raw JSON again.

use serde::Deserialize;
use thiserror::Error;

/// Prompt used when the request carries no `prompt` field at all.
pub const DEFAULT_PROMPT: &str = "<|endoftext|>";

/// Why raw request bytes could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestParseError {
    /// Bytes were not a JSON object, or a field had an unusable type.
    #[error("request body is not a usable JSON object: {0}")]
    MalformedInput(String),
    /// A required field was absent.
    #[error("request body is missing required field `{0}`")]
    MissingField(&'static str),
}

/// Wire fields that accept either a single string or an array of strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum StringOrSeq {
    One(String),
    Many(Vec<String>),
}

impl From<StringOrSeq> for Vec<String> {
    fn from(value: StringOrSeq) -> Self {
        match value {
            StringOrSeq::One(s) => vec![s],
            StringOrSeq::Many(v) => v,
        }
    }
}

/// Raw wire shape; only an intermediate for [`CompletionRequest`].
#[derive(Debug, Deserialize)]
struct WireRequest {
    model: String,
    prompt: Option<StringOrSeq>,
    suffix: Option<String>,
    max_tokens: Option<i32>,
    temperature: Option<f32>,
    top_p: Option<f32>,
    n: Option<i32>,
    stream: Option<bool>,
    logprobs: Option<i32>,
    echo: Option<bool>,
    stop: Option<StringOrSeq>,
    presence_penalty: Option<f32>,
    frequency_penalty: Option<f32>,
    best_of: Option<i32>,
    user: Option<String>,
}

/// A fully-populated completion request, constructed once per request and
/// discarded after the response is built.
///
/// Several accepted fields are not honored by generation: `n`, `stream`,
/// `logprobs`, `echo`, `presence_penalty`, `frequency_penalty`, `best_of`,
/// `user`, and every prompt past the first. They are independent fields
/// here; none of them aliases another.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    /// Ordered prompt sequence. Only element 0 drives generation.
    pub prompts: Vec<String>,
    pub suffix: Option<String>,
    pub max_tokens: i32,
    pub temperature: f32,
    pub top_p: f32,
    pub n: i32,
    pub stream: bool,
    pub logprobs: Option<i32>,
    pub echo: bool,
    /// Ordered stop sequences; passed through to the engine.
    pub stop: Vec<String>,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
    pub best_of: i32,
    pub user: Option<String>,
}

impl CompletionRequest {
    /// Normalize raw request bytes into a canonical request.
    ///
    /// Distinguishes the two client-error conditions: bytes that are not a
    /// JSON object (or carry uncoercible field types) are `MalformedInput`;
    /// a well-formed object without `"model"` is `MissingField`. No further
    /// validation happens; a negative `max_tokens` passes through
    /// uninspected.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, RequestParseError> {
        let value: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| RequestParseError::MalformedInput(e.to_string()))?;
        if !value.is_object() {
            return Err(RequestParseError::MalformedInput(
                "top-level value is not an object".to_string(),
            ));
        }
        if value.get("model").is_none() {
            return Err(RequestParseError::MissingField("model"));
        }
        let wire: WireRequest = serde_json::from_value(value)
            .map_err(|e| RequestParseError::MalformedInput(e.to_string()))?;
        Ok(wire.into_canonical())
    }

    /// The prompt that drives generation.
    pub fn first_prompt(&self) -> &str {
        self.prompts.first().map_or(DEFAULT_PROMPT, String::as_str)
    }
}

impl WireRequest {
    fn into_canonical(self) -> CompletionRequest {
        CompletionRequest {
            model: self.model,
            prompts: self
                .prompt
                .map(Vec::from)
                .unwrap_or_else(|| vec![DEFAULT_PROMPT.to_string()]),
            suffix: self.suffix,
            max_tokens: self.max_tokens.unwrap_or(16),
            temperature: self.temperature.unwrap_or(1.0),
            top_p: self.top_p.unwrap_or(1.0),
            n: self.n.unwrap_or(1),
            stream: self.stream.unwrap_or(false),
            logprobs: self.logprobs,
            echo: self.echo.unwrap_or(false),
            stop: self.stop.map(Vec::from).unwrap_or_default(),
            presence_penalty: self.presence_penalty.unwrap_or(0.0),
            frequency_penalty: self.frequency_penalty.unwrap_or(0.0),
            best_of: self.best_of.unwrap_or(1),
            user: self.user,
        }
    }
}

/// Outcome of a single completion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResult {
    pub text: String,
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl CompletionResult {
    /// Build from the engine's counters. Completion tokens are
    /// `total - prompt`, clamped at zero.
    pub fn from_counts(text: String, prompt_tokens: u32, total_tokens: u32) -> Self {
        Self {
            text,
            prompt_tokens,
            completion_tokens: total_tokens.saturating_sub(prompt_tokens),
        }
    }

    pub fn total_tokens(&self) -> u32 {
        self.prompt_tokens + self.completion_tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_request_gets_documented_defaults() {
        let req =
            CompletionRequest::from_json_bytes(br#"{"model":"alpha","prompt":"hi"}"#).unwrap();
        assert_eq!(req.model, "alpha");
        assert_eq!(req.prompts, vec!["hi"]);
        assert_eq!(req.max_tokens, 16);
        assert!((req.temperature - 1.0).abs() < f32::EPSILON);
        assert!((req.top_p - 1.0).abs() < f32::EPSILON);
        assert_eq!(req.n, 1);
        assert!(!req.stream);
        assert_eq!(req.logprobs, None);
        assert!(!req.echo);
        assert!(req.stop.is_empty());
        assert_eq!(req.best_of, 1);
        assert_eq!(req.user, None);
        assert_eq!(req.suffix, None);
    }

    #[test]
    fn prompt_accepts_an_array_of_strings() {
        let req =
            CompletionRequest::from_json_bytes(br#"{"model":"alpha","prompt":["a","b"]}"#).unwrap();
        assert_eq!(req.prompts, vec!["a", "b"]);
        assert_eq!(req.first_prompt(), "a");
    }

    #[test]
    fn missing_prompt_falls_back_to_end_of_text() {
        let req = CompletionRequest::from_json_bytes(br#"{"model":"alpha"}"#).unwrap();
        assert_eq!(req.prompts, vec![DEFAULT_PROMPT]);
        assert_eq!(req.first_prompt(), DEFAULT_PROMPT);
    }

    #[test]
    fn stop_accepts_string_or_array() {
        let one = CompletionRequest::from_json_bytes(br#"{"model":"m","stop":"\n"}"#).unwrap();
        assert_eq!(one.stop, vec!["\n"]);

        let many =
            CompletionRequest::from_json_bytes(br####"{"model":"m","stop":["\n","###"]}"####).unwrap();
        assert_eq!(many.stop, vec!["\n", "###"]);
    }

    #[test]
    fn invalid_json_is_malformed_input() {
        let err = CompletionRequest::from_json_bytes(b"{not json").unwrap_err();
        assert!(matches!(err, RequestParseError::MalformedInput(_)));
    }

    #[test]
    fn non_object_top_level_is_malformed_input() {
        let err = CompletionRequest::from_json_bytes(br#"["model"]"#).unwrap_err();
        assert!(matches!(err, RequestParseError::MalformedInput(_)));
    }

    #[test]
    fn absent_model_is_missing_field() {
        let err = CompletionRequest::from_json_bytes(br#"{"prompt":"hi"}"#).unwrap_err();
        assert_eq!(err, RequestParseError::MissingField("model"));
    }

    #[test]
    fn negative_max_tokens_passes_through_uninspected() {
        let req =
            CompletionRequest::from_json_bytes(br#"{"model":"m","max_tokens":-3}"#).unwrap();
        assert_eq!(req.max_tokens, -3);
    }

    #[test]
    fn penalty_fields_do_not_alias_top_p() {
        let req = CompletionRequest::from_json_bytes(
            br#"{"model":"m","presence_penalty":0.5,"frequency_penalty":0.7}"#,
        )
        .unwrap();
        assert!((req.top_p - 1.0).abs() < f32::EPSILON);
        assert!((req.presence_penalty - 0.5).abs() < f32::EPSILON);
        assert!((req.frequency_penalty - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn best_of_does_not_alias_logprobs() {
        let req =
            CompletionRequest::from_json_bytes(br#"{"model":"m","best_of":4,"logprobs":2}"#)
                .unwrap();
        assert_eq!(req.best_of, 4);
        assert_eq!(req.logprobs, Some(2));
    }

    #[test]
    fn user_does_not_alias_suffix() {
        let req = CompletionRequest::from_json_bytes(
            br#"{"model":"m","suffix":"tail","user":"tester"}"#,
        )
        .unwrap();
        assert_eq!(req.suffix.as_deref(), Some("tail"));
        assert_eq!(req.user.as_deref(), Some("tester"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let req = CompletionRequest::from_json_bytes(
            br#"{"model":"m","logit_bias":{"50256":-100}}"#,
        )
        .unwrap();
        assert_eq!(req.model, "m");
    }

    #[test]
    fn completion_tokens_never_go_negative() {
        let result = CompletionResult::from_counts("x".to_string(), 10, 7);
        assert_eq!(result.completion_tokens, 0);
        assert_eq!(result.total_tokens(), 10);
    }

    #[test]
    fn usage_arithmetic_holds() {
        let result = CompletionResult::from_counts("x".to_string(), 4, 9);
        assert_eq!(result.completion_tokens, 5);
        assert_eq!(
            result.total_tokens(),
            result.prompt_tokens + result.completion_tokens
        );
    }
}
