//! Client for the Yandex.Dictionary API.
//!
//! # Overview
//! Builds form-encoded `HttpRequest` values and parses JSON `HttpResponse`
//! values without touching the network (host-does-IO pattern). A
//! `Transport` performs the actual round-trip; `Dictionary` wires the two
//! together for callers that just want `get_langs()` and `lookup()`.
//!
//! # Design
//! - `DictionaryClient` is stateless apart from its immutable `ClientConfig`.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and parsing is testable with canned bodies.
//! - The blocking `ureq` transport sits behind the default `ureq` feature.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod http;
pub mod types;

pub use client::DictionaryClient;
pub use config::ClientConfig;
pub use dictionary::Dictionary;
pub use error::{ApiErrorCode, DictionaryError};
#[cfg(feature = "ureq")]
pub use http::UreqTransport;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use types::{Definition, Example, LanguagePairList, LookupRequest, LookupResult, TextNote, Translation};
