use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::{livez, readyz},
        messages::{create_message, delete_message, list_messages},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // Static assets at the web root
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/messages", get(list_messages).post(create_message))
        .route("/messages/{id}", delete(delete_message))
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .fallback_service(static_files)
        // Any origin, method, and request header, on every route
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::Config;
    use crate::storage::testing::UnavailableRepository;
    use axum::{
        body::Body,
        http::{Request, Response, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn unavailable_state() -> AppState {
        AppState::new(Arc::new(UnavailableRepository), &Config::from_vars(|_| None))
    }

    async fn body_bytes(response: Response<Body>) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    async fn body_json(response: Response<Body>) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    async fn list(app: &Router) -> Vec<Value> {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/messages")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    async fn post_json(app: &Router, body: &str) -> Response<Body> {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/messages")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn create(app: &Router, content: &str) -> Value {
        let response = post_json(app, &json!({ "message": content }).to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await
    }

    async fn delete_id(app: &Router, id: &str) -> Response<Body> {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/messages/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_messages_empty() {
        let app = create_app(AppState::default());

        assert!(list(&app).await.is_empty());
    }

    #[tokio::test]
    async fn test_end_to_end_scenario() {
        let app = create_app(AppState::default());

        assert!(list(&app).await.is_empty());

        let created = create(&app, "hi").await;
        assert_eq!(created["success"], true);
        assert_eq!(created["message"]["id"], 1);
        assert_eq!(created["message"]["content"], "hi");
        assert!(created["message"]["timestamp"].is_string());

        let messages = list(&app).await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0], created["message"]);

        let response = delete_id(&app, "1").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"success": true, "message": "Message deleted"})
        );

        assert!(list(&app).await.is_empty());

        let response = delete_id(&app, "1").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Message not found"})
        );
    }

    #[tokio::test]
    async fn test_create_then_list_puts_new_message_first() {
        let app = create_app(AppState::default());
        create(&app, "older").await;
        create(&app, "old").await;
        let before = list(&app).await;

        create(&app, "newest").await;
        let after = list(&app).await;

        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after[0]["content"], "newest");
        assert_eq!(&after[1..], &before[..]);
        let matching = after.iter().filter(|m| m["content"] == "newest").count();
        assert_eq!(matching, 1);
    }

    #[tokio::test]
    async fn test_list_orders_newest_first() {
        let app = create_app(AppState::default());
        for content in ["a", "b", "c", "d"] {
            create(&app, content).await;
        }

        let contents: Vec<String> = list(&app)
            .await
            .iter()
            .map(|m| m["content"].as_str().unwrap().to_owned())
            .collect();

        assert_eq!(contents, vec!["d", "c", "b", "a"]);
    }

    #[tokio::test]
    async fn test_create_missing_or_empty_message_is_rejected() {
        let app = create_app(AppState::default());

        for body in [r#"{}"#, r#"{"message":null}"#, r#"{"message":""}"#] {
            let response = post_json(&app, body).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(
                body_json(response).await,
                json!({"error": "Message content is required"})
            );
        }

        assert!(list(&app).await.is_empty());
    }

    #[tokio::test]
    async fn test_create_without_json_content_type_is_rejected() {
        let app = create_app(AppState::default());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/messages")
                    .body(Body::from("message=hi"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Message content is required"})
        );
        assert!(list(&app).await.is_empty());
    }

    #[tokio::test]
    async fn test_create_empty_or_falsy_body_is_rejected_as_missing_content() {
        let app = create_app(AppState::default());

        for body in ["", r#"{"message":false}"#, r#"{"message":0}"#] {
            let response = post_json(&app, body).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body:?}");
            assert_eq!(
                body_json(response).await,
                json!({"error": "Message content is required"})
            );
        }

        assert!(list(&app).await.is_empty());
    }

    #[tokio::test]
    async fn test_create_with_numeric_message_stores_its_text() {
        let app = create_app(AppState::default());

        let response = post_json(&app, r#"{"message":42}"#).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["message"]["content"], "42");
        assert_eq!(list(&app).await[0]["content"], "42");
    }

    #[tokio::test]
    async fn test_create_with_malformed_body_is_rejected() {
        let app = create_app(AppState::default());

        for body in [r#"{"message":"#, r#"{"message":[1]}"#, "not json"] {
            let response = post_json(&app, body).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(
                body_json(response).await,
                json!({"error": "Invalid request body"})
            );
        }

        assert!(list(&app).await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_nonexistent_leaves_collection_unchanged() {
        let app = create_app(AppState::default());
        create(&app, "keep me").await;
        let before = list(&app).await;

        let response = delete_id(&app, "42").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(list(&app).await, before);
    }

    #[tokio::test]
    async fn test_delete_then_list_omits_deleted_message() {
        let app = create_app(AppState::default());
        create(&app, "one").await;
        let two = create(&app, "two").await;
        create(&app, "three").await;

        let id = two["message"]["id"].as_i64().unwrap();
        let response = delete_id(&app, &id.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let remaining = list(&app).await;
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|m| m["id"].as_i64() != Some(id)));
    }

    #[tokio::test]
    async fn test_delete_with_malformed_id_is_rejected() {
        let app = create_app(AppState::default());
        create(&app, "untouched").await;

        for id in ["abc", "1.5", "99999999999"] {
            let response = delete_id(&app, id).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "id: {id}");
            assert_eq!(
                body_json(response).await,
                json!({"error": "Invalid message id"})
            );
        }

        assert_eq!(list(&app).await.len(), 1);
    }

    #[tokio::test]
    async fn test_list_storage_failure_returns_plain_text_500() {
        let app = create_app(unavailable_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/messages")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_bytes(response).await, b"Server Error");
    }

    #[tokio::test]
    async fn test_create_storage_failure_returns_json_500() {
        let app = create_app(unavailable_state());

        let response = post_json(&app, r#"{"message":"hi"}"#).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({"error": "Server Error"}));
    }

    #[tokio::test]
    async fn test_create_validation_runs_before_storage() {
        let app = create_app(unavailable_state());

        let response = post_json(&app, r#"{}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_storage_failure_returns_json_500() {
        let app = create_app(unavailable_state());

        let response = delete_id(&app, "1").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({"error": "Server Error"}));
    }

    #[tokio::test]
    async fn test_cors_headers_on_message_routes() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/messages")
                    .header("Origin", "https://board.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_arbitrary_request_headers() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/messages")
                    .header("Origin", "https://board.example")
                    .header("Access-Control-Request-Method", "POST")
                    .header("Access-Control-Request-Headers", "content-type, x-requested-with")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        assert_eq!(response.headers()["access-control-allow-headers"], "*");
        assert_eq!(response.headers()["access-control-allow-methods"], "*");
    }

    #[tokio::test]
    async fn test_cors_headers_on_health_routes() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/livez")
                    .header("Origin", "https://board.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(unavailable_state());

        let response = app
            .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readyz_reports_storage_state() {
        let app = create_app(AppState::default());
        let response = app
            .oneshot(Request::builder().uri("/readyz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"healthy": true}));

        let app = create_app(unavailable_state());
        let response = app
            .oneshot(Request::builder().uri("/readyz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await["healthy"], false);
    }

    #[tokio::test]
    async fn test_static_files_served_from_web_root() {
        let dir = std::env::temp_dir().join(format!("msgboard-static-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<h1>Message Board</h1>").unwrap();

        let config = Config::from_vars(|key| match key {
            "STATIC_DIR" => Some(dir.to_string_lossy().into_owned()),
            _ => None,
        });
        let state = AppState::new(
            Arc::new(crate::storage::InMemoryRepository::new()),
            &config,
        );
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"<h1>Message Board</h1>");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/missing.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        std::fs::remove_dir_all(&dir).ok();
    }
}
