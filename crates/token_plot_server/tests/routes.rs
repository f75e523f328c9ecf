use std::sync::Once;

use pretty_assertions::assert_eq;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use token_plot_core::TokenizerKind;
use token_plot_server::{build_router, AppState, Settings};
use tokio::net::TcpListener;

const FORM: &str = "application/x-www-form-urlencoded";

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(plot_logging::initialize_for_tests);
}

async fn spawn_app(settings: Settings) -> String {
    init_logging();
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let app = build_router(AppState::new(settings));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

async fn post(base: &str, content_type: &str, body: &str) -> (StatusCode, String) {
    let response = reqwest::Client::new()
        .post(format!("{base}/tokenize"))
        .header(CONTENT_TYPE, content_type)
        .body(body.to_string())
        .send()
        .await
        .expect("request");
    let status = response.status();
    (status, response.text().await.expect("body"))
}

#[tokio::test]
async fn index_serves_form() {
    let base = spawn_app(Settings::default()).await;
    let response = reqwest::get(format!("{base}/")).await.expect("request");
    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"<form action="/tokenize" method="post""#));
    assert!(html.contains(r#"name="sentence""#));
}

#[tokio::test]
async fn form_submission_renders_prediction_and_plot() {
    let base = spawn_app(Settings::default()).await;
    let (status, html) = post(&base, FORM, "sentence=The+quick+fox").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Tokens: <strong>The, quick, fox</strong>"));
    assert!(html.contains("The predicted next token length is: 3.67 characters"));
    assert!(html.contains(r#""x":[0,1,2]"#));
    assert!(html.contains(r#""y":[3,5,3]"#));
    assert!(html.contains(r#""text":["The","quick","fox"]"#));
    assert!(html.contains("Random Z"));
    assert!(html.contains(r#"href="/""#));
}

#[tokio::test]
async fn plot_library_is_loaded_before_plot_is_drawn() {
    let base = spawn_app(Settings::default()).await;
    let (status, html) = post(&base, FORM, "sentence=The+quick+fox").await;
    assert_eq!(status, StatusCode::OK);

    let library = html.find("plotly-2.35.2.min.js").expect("plotly script tag");
    let call = html.find("Plotly.newPlot").expect("plot call");
    assert!(library < call, "library at {library}, newPlot at {call}");
}

#[tokio::test]
async fn json_submission_is_accepted() {
    let base = spawn_app(Settings::default()).await;
    let (status, html) = post(
        &base,
        "application/json; charset=utf-8",
        r#"{"sentence":"Hi"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("The predicted next token length is: 2.00 characters"));
}

#[tokio::test]
async fn missing_sentence_is_a_client_error() {
    let base = spawn_app(Settings::default()).await;

    let (status, html) = post(&base, FORM, "other=value").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(html.contains("missing field `sentence`"));

    let (status, _) = post(&base, "application/json", "{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(&base, "application/json", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(&base, "text/plain", "sentence=hello").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_sentence_has_explicit_response() {
    let base = spawn_app(Settings::default()).await;
    for body in ["sentence=", "sentence=+++", "sentence=%3F%21"] {
        let (status, html) = post(&base, FORM, body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body {body}");
        assert!(html.contains("cannot predict length of empty sentence"));
        assert!(!html.contains("NaN"));
        assert!(!html.contains("Plotly.newPlot"));
    }
}

#[tokio::test]
async fn seeded_server_renders_identical_pages() {
    let base = spawn_app(Settings {
        seed: Some(11),
        ..Settings::default()
    })
    .await;
    let (_, first) = post(&base, FORM, "sentence=same+plot+twice").await;
    let (_, second) = post(&base, FORM, "sentence=same+plot+twice").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn whitespace_tokenizer_keeps_punctuation() {
    let base = spawn_app(Settings {
        tokenizer: TokenizerKind::Whitespace,
        ..Settings::default()
    })
    .await;
    let (status, html) = post(&base, FORM, "sentence=Hello%2C+world%21").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Tokens: <strong>Hello,, world!</strong>"));
    assert!(html.contains("6.00 characters"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let base = spawn_app(Settings::default()).await;
    let response = reqwest::get(format!("{base}/predict")).await.expect("request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
