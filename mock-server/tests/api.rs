use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with_key, API_KEY, API_ROOT};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn form_request(endpoint: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(format!("{API_ROOT}/{endpoint}"))
        .header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(body.to_string())
        .unwrap()
}

fn lookup_body(lang: &str, text: &str, ui: &str) -> String {
    format!("key={API_KEY}&ui={ui}&lang={lang}&text={text}&flags=0")
}

// --- getLangs ---

#[tokio::test]
async fn get_langs_returns_array() {
    let resp = app()
        .oneshot(form_request("getLangs", &format!("key={API_KEY}")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let langs = body.as_array().unwrap();
    assert_eq!(langs[0], "ru-ru");
    assert_eq!(langs[1], "ru-en");
    assert!(langs.iter().any(|l| l == "en-ru"));
}

#[tokio::test]
async fn get_langs_bad_key_returns_error_object() {
    let resp = app()
        .oneshot(form_request("getLangs", "key=wrong"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert_eq!(body["code"], 401);
    assert_eq!(body["message"], "API key is invalid");
}

#[tokio::test]
async fn custom_key_is_honoured() {
    let resp = app_with_key("secret")
        .oneshot(form_request("getLangs", "key=secret"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app_with_key("secret")
        .oneshot(form_request("getLangs", &format!("key={API_KEY}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn get_is_not_allowed() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri(format!("{API_ROOT}/getLangs"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// --- lookup ---

#[tokio::test]
async fn lookup_known_word() {
    let resp = app()
        .oneshot(form_request("lookup", &lookup_body("en-ru", "dog", "en")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body.get("code").is_none());
    let def = &body["def"][0];
    assert_eq!(def["text"], "dog");
    assert_eq!(def["pos"], "noun");
    assert_eq!(def["tr"][0]["text"], "собака");
    assert_eq!(def["tr"][0]["ex"][0]["tr"][0]["text"], "охотничья собака");
}

#[tokio::test]
async fn lookup_localizes_part_of_speech() {
    let resp = app()
        .oneshot(form_request("lookup", &lookup_body("en-ru", "dog", "ru")))
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["def"][0]["pos"], "существительное");
    assert_eq!(body["def"][0]["tr"][0]["pos"], "существительное");
}

#[tokio::test]
async fn lookup_unknown_word_returns_empty_def() {
    let resp = app()
        .oneshot(form_request("lookup", &lookup_body("en-ru", "qwzx", "en")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["def"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn lookup_unsupported_pair_returns_501() {
    let resp = app()
        .oneshot(form_request("lookup", &lookup_body("en-mumbayumba", "dog", "en")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
    let body = body_json(resp).await;
    assert_eq!(body["code"], 501);
    assert_eq!(body["message"], "The specified language pair is not supported");
}

#[tokio::test]
async fn lookup_bad_key_returns_401() {
    let resp = app()
        .oneshot(form_request("lookup", "key=nope&ui=en&lang=en-ru&text=dog&flags=0"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await["code"], 401);
}

#[tokio::test]
async fn lookup_text_too_long_returns_413() {
    let text = "a".repeat(mock_server::MAX_TEXT_LEN + 1);
    let resp = app()
        .oneshot(form_request("lookup", &lookup_body("en-ru", &text, "en")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body_json(resp).await["code"], 413);
}

#[tokio::test]
async fn lookup_non_numeric_flags_returns_400() {
    let body = format!("key={API_KEY}&ui=en&lang=en-ru&text=dog&flags=family");
    let resp = app().oneshot(form_request("lookup", &body)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["code"], 400);
}
