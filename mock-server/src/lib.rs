use std::{collections::HashMap, sync::Arc};

use axum::{extract::State, http::StatusCode, routing::post, Form, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::{debug, info};

/// Key accepted by `app()`.
pub const API_KEY: &str = "dict.1.1.mock";

/// Route prefix, matching the upstream service layout.
pub const API_ROOT: &str = "/api/v1/dicservice.json";

pub const MAX_TEXT_LEN: usize = 10_000;

/// Pairs returned by `getLangs`, in this order.
pub const LANGS: &[&str] = &[
    "ru-ru", "ru-en", "ru-de", "ru-it", "ru-fr", "en-de", "en-it", "en-ru", "en-en", "de-ru", "de-en",
];

#[derive(Clone)]
struct AppState {
    api_key: Arc<str>,
}

type Params = HashMap<String, String>;
type Reply = (StatusCode, Json<Value>);

pub fn app() -> Router {
    app_with_key(API_KEY)
}

pub fn app_with_key(api_key: &str) -> Router {
    let state = AppState {
        api_key: Arc::from(api_key),
    };
    Router::new()
        .route(&format!("{API_ROOT}/getLangs"), post(get_langs))
        .route(&format!("{API_ROOT}/lookup"), post(lookup))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock dictionary serving");
    }
    axum::serve(listener, app()).await
}

fn error_reply(status: StatusCode, message: &str) -> Reply {
    debug!(code = status.as_u16(), reason = message, "rejecting request");
    (
        status,
        Json(json!({ "code": status.as_u16(), "message": message })),
    )
}

fn check_key(state: &AppState, params: &Params) -> Result<(), Reply> {
    match params.get("key") {
        Some(key) if key.as_str() == &*state.api_key => Ok(()),
        _ => Err(error_reply(StatusCode::UNAUTHORIZED, "API key is invalid")),
    }
}

async fn get_langs(State(state): State<AppState>, Form(params): Form<Params>) -> Reply {
    if let Err(reply) = check_key(&state, &params) {
        return reply;
    }
    (StatusCode::OK, Json(json!(LANGS)))
}

async fn lookup(State(state): State<AppState>, Form(params): Form<Params>) -> Reply {
    if let Err(reply) = check_key(&state, &params) {
        return reply;
    }
    let lang = params.get("lang").map(String::as_str).unwrap_or_default();
    if !LANGS.iter().any(|pair| *pair == lang) {
        return error_reply(
            StatusCode::NOT_IMPLEMENTED,
            "The specified language pair is not supported",
        );
    }
    let text = params.get("text").map(String::as_str).unwrap_or_default();
    if text.chars().count() > MAX_TEXT_LEN {
        return error_reply(StatusCode::PAYLOAD_TOO_LARGE, "The text size exceeds the maximum");
    }
    if let Some(flags) = params.get("flags") {
        if flags.parse::<u32>().is_err() {
            return error_reply(StatusCode::BAD_REQUEST, "Invalid parameter: flags");
        }
    }
    let ui = params.get("ui").map(String::as_str).unwrap_or("en");

    let def = entry(lang, text, ui).map_or_else(Vec::new, |e| vec![e]);
    (StatusCode::OK, Json(json!({ "head": {}, "def": def })))
}

/// Part-of-speech label in the interface language.
fn pos_label(pos: &str, ui: &str) -> String {
    let label = match (pos, ui) {
        ("noun", "ru") => "существительное",
        ("verb", "ru") => "глагол",
        ("noun", "de") => "Substantiv",
        ("verb", "de") => "Verb",
        (pos, _) => pos,
    };
    label.to_string()
}

/// The built-in vocabulary. Unknown words produce no entry.
fn entry(lang: &str, text: &str, ui: &str) -> Option<Value> {
    let noun = pos_label("noun", ui);
    let verb = pos_label("verb", ui);
    let value = match (lang, text.to_lowercase().as_str()) {
        ("en-ru", "dog") => json!({
            "text": "dog", "pos": noun, "ts": "dɒg",
            "tr": [
                {
                    "text": "собака", "pos": noun, "gen": "ж",
                    "syn": [{ "text": "пес" }, { "text": "собачка" }],
                    "mean": [{ "text": "hound" }, { "text": "canine" }],
                    "ex": [
                        { "text": "hunting dog", "tr": [{ "text": "охотничья собака" }] },
                        { "text": "stray dog", "tr": [{ "text": "бездомная собака" }] }
                    ]
                },
                { "text": "кобель", "pos": noun, "mean": [{ "text": "male dog" }] }
            ]
        }),
        ("en-de", "dog") => json!({
            "text": "dog", "pos": noun, "ts": "dɒg",
            "tr": [
                { "text": "Hund", "pos": noun, "mean": [{ "text": "hound" }] }
            ]
        }),
        ("en-ru", "run") => json!({
            "text": "run", "pos": verb, "ts": "rʌn",
            "tr": [
                {
                    "text": "бежать", "pos": verb,
                    "syn": [{ "text": "бегать" }],
                    "mean": [{ "text": "go" }]
                }
            ]
        }),
        ("ru-en", "собака") => json!({
            "text": "собака", "pos": noun, "ts": "sɐˈbakə",
            "tr": [
                { "text": "dog", "pos": noun, "syn": [{ "text": "hound" }] }
            ]
        }),
        _ => return None,
    };
    Some(value)
}
