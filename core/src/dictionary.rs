//! One-call-per-operation facade over `DictionaryClient` and a `Transport`.

use tracing::{debug, warn};

use crate::client::DictionaryClient;
use crate::config::ClientConfig;
use crate::error::DictionaryError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{LanguagePairList, LookupRequest, LookupResult};

/// Builds, sends and parses in a single call.
///
/// Holds no mutable state, so a shared reference can serve overlapping calls
/// from several threads when the transport allows it.
#[derive(Debug, Clone)]
pub struct Dictionary<T> {
    client: DictionaryClient,
    transport: T,
}

#[cfg(feature = "ureq")]
impl Dictionary<crate::http::UreqTransport> {
    /// English UI, default endpoint, blocking `ureq` transport.
    pub fn new(api_key: &str) -> Self {
        Self::with_config(ClientConfig::new(api_key))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_transport(config, crate::http::UreqTransport::new())
    }
}

impl<T: Transport> Dictionary<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            client: DictionaryClient::new(config),
            transport,
        }
    }

    pub fn client(&self) -> &DictionaryClient {
        &self.client
    }

    /// List the language pairs the service supports.
    pub fn get_langs(&self) -> Result<LanguagePairList, DictionaryError> {
        self.send(self.client.build_get_langs())
            .and_then(|response| self.client.parse_get_langs(response))
            .inspect_err(|err| log_failure(err, None))
    }

    /// Translate `request.text` for the pair in `request.lang`.
    pub fn lookup(&self, request: &LookupRequest) -> Result<LookupResult, DictionaryError> {
        self.send(self.client.build_lookup(request))
            .and_then(|response| self.client.parse_lookup(request, response))
            .inspect_err(|err| log_failure(err, Some(request.text.as_str())))
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, DictionaryError> {
        debug!(url = %request.url, "sending request");
        let response = self.transport.send(&request)?;
        debug!(status = response.status, bytes = response.body.len(), "received response");
        Ok(response)
    }
}

/// The single place a failed call is logged.
fn log_failure(err: &DictionaryError, text: Option<&str>) {
    match err {
        DictionaryError::EmptyResult { .. } => debug!(%err, "no definitions"),
        _ => warn!(%err, text, "dictionary call failed"),
    }
}
