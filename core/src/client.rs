//! Stateless request builder and response parser for the dictionary API.
//!
//! # Design
//! `DictionaryClient` holds only its `ClientConfig` and carries no mutable
//! state between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. HTTP status is ignored when classifying responses: the
//! service signals errors through the body, and `getLangs` even changes the
//! body's JSON type (array on success, object on failure).

use serde_json::Value;
use tracing::debug;

use crate::config::{ClientConfig, GET_LANGS_PATH, LOOKUP_PATH};
use crate::error::DictionaryError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{LanguagePairList, LookupRequest, LookupResult};

/// Synchronous, stateless client for the dictionary API.
#[derive(Debug, Clone)]
pub struct DictionaryClient {
    config: ClientConfig,
}

impl DictionaryClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn build_get_langs(&self) -> HttpRequest {
        form_post(
            self.config.endpoint(GET_LANGS_PATH),
            vec![("key".to_string(), self.config.api_key().to_string())],
        )
    }

    pub fn build_lookup(&self, request: &LookupRequest) -> HttpRequest {
        let flags = request.flags_mask();
        debug!(lang = %request.lang, flags, "building lookup request");
        form_post(
            self.config.endpoint(LOOKUP_PATH),
            vec![
                ("key".to_string(), self.config.api_key().to_string()),
                ("ui".to_string(), self.config.ui().to_string()),
                ("lang".to_string(), request.lang.clone()),
                ("text".to_string(), request.text.clone()),
                ("flags".to_string(), flags.to_string()),
            ],
        )
    }

    /// Decode the supported language pairs.
    ///
    /// The body is classified by JSON type before any typed decoding: an
    /// object is an error report, an array is the list of pairs.
    pub fn parse_get_langs(&self, response: HttpResponse) -> Result<LanguagePairList, DictionaryError> {
        match parse_json(&response)? {
            Value::Object(fields) => Err(api_error(&fields)?),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::String(pair) => Ok(pair),
                    other => Err(DictionaryError::Decode(format!(
                        "language pair #{i} is not a string: {other}"
                    ))),
                })
                .collect(),
            other => Err(DictionaryError::Decode(format!(
                "expected an array of language pairs, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Decode a lookup result.
    ///
    /// A zero code with no definitions is reported as `EmptyResult`, so a
    /// successful return always carries at least one definition.
    pub fn parse_lookup(
        &self,
        request: &LookupRequest,
        response: HttpResponse,
    ) -> Result<LookupResult, DictionaryError> {
        let value = parse_json(&response)?;
        if !value.is_object() {
            return Err(DictionaryError::Decode(format!(
                "expected a lookup object, got {}",
                json_kind(&value)
            )));
        }

        let result: LookupResult =
            serde_json::from_value(value).map_err(|e| DictionaryError::Decode(e.to_string()))?;

        if result.code != 0 {
            return Err(DictionaryError::Api {
                code: result.code,
                message: result.message,
            });
        }
        if result.definitions.is_empty() {
            return Err(DictionaryError::EmptyResult {
                text: request.text.clone(),
            });
        }
        Ok(result)
    }
}

fn form_post(url: String, form: Vec<(String, String)>) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Post,
        url,
        headers: vec![("accept".to_string(), "application/json".to_string())],
        form,
    }
}

/// Parse the body as untyped JSON. A body that is not JSON at all means the
/// round-trip itself went wrong (proxy page, truncated stream, ...).
fn parse_json(response: &HttpResponse) -> Result<Value, DictionaryError> {
    serde_json::from_str(&response.body).map_err(|e| {
        DictionaryError::Transport(format!("HTTP {}: body is not JSON: {e}", response.status))
    })
}

/// Map an error object `{code, message}` to `DictionaryError::Api`.
fn api_error(fields: &serde_json::Map<String, Value>) -> Result<DictionaryError, DictionaryError> {
    let code = fields
        .get("code")
        .and_then(Value::as_i64)
        .and_then(|c| i32::try_from(c).ok())
        .ok_or_else(|| DictionaryError::Decode("error object has no integer code".to_string()))?;
    let message = fields
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    Ok(DictionaryError::Api { code, message })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
