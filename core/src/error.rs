//! Error types for the dictionary client.
//!
//! # Design
//! The upstream API reports domain failures inside the response body rather
//! than through HTTP status alone, so `Api` carries the numeric code and
//! message verbatim. `Transport` covers everything below the JSON layer
//! (connection failures, timeouts, bodies that are not JSON at all), while
//! `Decode` means the body was JSON but not in the documented shape.

/// Errors returned by `DictionaryClient` parse methods and `Dictionary` calls.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The HTTP round-trip failed or returned a body that is not JSON.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The body was valid JSON but did not match the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),

    /// The upstream API reported an error code.
    #[error("({code}) {message}")]
    Api { code: i32, message: String },

    /// The lookup succeeded but produced no definitions.
    #[error("can't get definitions for {text}: definitions are empty")]
    EmptyResult { text: String },
}

impl DictionaryError {
    /// Classify an `Api` error against the codes the upstream service documents.
    ///
    /// Returns `None` for non-API errors and for codes outside the known set.
    pub fn api_code(&self) -> Option<ApiErrorCode> {
        match self {
            DictionaryError::Api { code, .. } => ApiErrorCode::from_code(*code),
            _ => None,
        }
    }
}

/// Error codes documented by the Yandex.Dictionary API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    KeyInvalid,
    KeyBlocked,
    DailyRequestLimitExceeded,
    TextTooLong,
    LanguagePairNotSupported,
}

impl ApiErrorCode {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            401 => Some(ApiErrorCode::KeyInvalid),
            402 => Some(ApiErrorCode::KeyBlocked),
            403 => Some(ApiErrorCode::DailyRequestLimitExceeded),
            413 => Some(ApiErrorCode::TextTooLong),
            501 => Some(ApiErrorCode::LanguagePairNotSupported),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            ApiErrorCode::KeyInvalid => 401,
            ApiErrorCode::KeyBlocked => 402,
            ApiErrorCode::DailyRequestLimitExceeded => 403,
            ApiErrorCode::TextTooLong => 413,
            ApiErrorCode::LanguagePairNotSupported => 501,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_code_and_message() {
        let err = DictionaryError::Api {
            code: 413,
            message: "Invalid API key".to_string(),
        };
        assert_eq!(err.to_string(), "(413) Invalid API key");
    }

    #[test]
    fn api_code_classifies_known_codes() {
        let err = DictionaryError::Api {
            code: 501,
            message: String::new(),
        };
        assert_eq!(err.api_code(), Some(ApiErrorCode::LanguagePairNotSupported));
        assert_eq!(ApiErrorCode::LanguagePairNotSupported.code(), 501);
    }

    #[test]
    fn api_code_is_none_for_unknown_or_non_api_errors() {
        let unknown = DictionaryError::Api {
            code: 999,
            message: String::new(),
        };
        assert_eq!(unknown.api_code(), None);
        assert_eq!(DictionaryError::Decode("x".to_string()).api_code(), None);
    }

    #[test]
    fn empty_result_names_the_text() {
        let err = DictionaryError::EmptyResult {
            text: "qwzx".to_string(),
        };
        assert!(err.to_string().contains("qwzx"));
    }
}
