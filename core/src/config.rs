//! Client configuration and the fixed upstream endpoints.

/// Root of the Yandex.Dictionary JSON interface.
pub const DEFAULT_BASE_URL: &str = "https://dictionary.yandex.net/api/v1/dicservice.json";

/// Path of the supported-languages endpoint, relative to the base URL.
pub const GET_LANGS_PATH: &str = "getLangs";

/// Path of the lookup endpoint, relative to the base URL.
pub const LOOKUP_PATH: &str = "lookup";

/// Interface language used when none is given.
pub const DEFAULT_UI: &str = "en";

/// Immutable settings shared by every call a client makes.
///
/// `api_key` is sent as-is and never validated locally. `ui` selects the
/// language of part-of-speech labels in lookup results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    ui: String,
    base_url: String,
}

impl ClientConfig {
    pub fn new(api_key: &str) -> Self {
        Self::with_ui(api_key, DEFAULT_UI)
    }

    /// An empty `ui` falls back to English.
    pub fn with_ui(api_key: &str, ui: &str) -> Self {
        let ui = if ui.is_empty() { DEFAULT_UI } else { ui };
        Self {
            api_key: api_key.to_string(),
            ui: ui.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different service root, e.g. a local mock.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn ui(&self) -> &str {
        &self.ui
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}
