use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use chat_window::chat::{Author, BackendError, ChatRequest, Message, MessagingBackend};
use chat_window::config::{AppConfig, BackendConfig, ServerConfig, UiConfig};
use chat_window::server::{AppState, router};
use chat_window::theme::Theme;
use serde_json::{Value, json};
use tower::ServiceExt;

struct FixedBackend(Result<Message, BackendError>);

#[async_trait]
impl MessagingBackend for FixedBackend {
    async fn send(&self, request: &ChatRequest) -> Result<Message, BackendError> {
        self.0
            .clone()
            .map(|reply| Message::bot(format!("{} ({})", reply.text, request.draft_text)))
    }
}

fn test_config() -> Arc<AppConfig> {
    Arc::new(AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            request_timeout_secs: 5,
        },
        backend: BackendConfig::default(),
        ui: UiConfig {
            title: "Codebase Chat".into(),
            static_dir: "static".into(),
            pkg_dir: "pkg".into(),
        },
    })
}

fn app_with(backend: Option<Arc<dyn MessagingBackend>>) -> Router {
    router(AppState {
        backend,
        config: test_config(),
    })
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.expect("Router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

fn post_chat(body: &Value) -> Request<Body> {
    Request::post("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let request = Request::get("/health").body(Body::empty()).unwrap();
    let (status, body) = send(app_with(None), request).await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_index_serves_shell_with_title() {
    let request = Request::get("/").body(Body::empty()).unwrap();
    let (status, body) = send(app_with(None), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Codebase Chat</title>"));
    assert!(body.contains("/pkg/chat_window.js"));
}

#[tokio::test]
async fn test_chat_forwards_to_backend() {
    let app = app_with(Some(Arc::new(FixedBackend(Ok(Message::bot("answer"))))));
    let request = post_chat(&json!({
        "draftText": "question",
        "conversationContext": [{ "author": "user", "text": "earlier" }]
    }));

    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["text"], "answer (question)");
}

#[tokio::test]
async fn test_chat_rejects_empty_draft() {
    let app = app_with(Some(Arc::new(FixedBackend(Ok(Message::bot("unused"))))));
    let (status, _) = send(app, post_chat(&json!({ "draftText": "   " }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chat_without_backend_is_unavailable() {
    let (status, _) = send(app_with(None), post_chat(&json!({ "draftText": "hello" }))).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_chat_maps_backend_failure_to_bad_gateway() {
    let app = app_with(Some(Arc::new(FixedBackend(Err(BackendError::Transport(
        "connection refused".into(),
    ))))));
    let (status, body) = send(app, post_chat(&json!({ "draftText": "hello" }))).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("connection refused"));
}

/// Whether `css` has a selector for the utility class `class`.
fn defines(css: &str, class: &str) -> bool {
    let selector = format!(".{}", class.replace('[', "\\[").replace(']', "\\]").replace('%', "\\%"));
    css.match_indices(&selector).any(|(at, _)| {
        css[at + selector.len()..]
            .chars()
            .next()
            .is_none_or(|next| !(next.is_ascii_alphanumeric() || next == '-'))
    })
}

#[tokio::test]
async fn test_served_stylesheet_covers_layout_and_palette() {
    let request = Request::get("/static/app.css").body(Body::empty()).unwrap();
    let (status, css) = send(app_with(None), request).await;
    assert_eq!(status, StatusCode::OK);

    let (_, page) = send(app_with(None), Request::get("/").body(Body::empty()).unwrap()).await;
    assert_eq!(page.matches("rel=\"stylesheet\"").count(), 1);
    assert!(page.contains("href=\"/static/app.css\""));

    let mut classes = vec![
        "justify-start",
        "justify-end",
        "flex-row-reverse",
        "overflow-y-auto",
        "h-[600px]",
        "max-w-[70%]",
        "flex-col",
        "flex-grow",
        "animate-fadeIn",
        "animate-bounce",
    ];
    for theme in [Theme::Light, Theme::Dark] {
        classes.extend([theme.page(), theme.heading(), theme.toggle_icon()]);
        classes.extend([theme.avatar(Author::User), theme.avatar(Author::Bot)]);
        for message in [Message::user("q"), Message::bot("a"), Message::failure("x")] {
            classes.extend(theme.bubble(&message).split_whitespace());
        }
        classes.extend(theme.field().split_whitespace());
    }

    let missing: Vec<_> = classes.into_iter().filter(|class| !defines(&css, class)).collect();
    assert!(missing.is_empty(), "stylesheet lacks rules for {missing:?}");
}

#[test]
fn test_state_from_config_without_upstream() {
    let state = AppState::from_config(test_config()).unwrap();
    assert!(state.backend.is_none());
}
