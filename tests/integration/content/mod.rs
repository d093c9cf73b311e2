//! Content endpoint integration tests

use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::common::{json_request, parse_body, request, ContentTestApp};

mod test_get_content {
    use super::*;

    #[tokio::test]
    async fn test_get_with_valid_metadata_returns_parsed_value() {
        let app = ContentTestApp::new();
        app.seed("post-1", Some(r#"{"tags":["rust","web"],"draft":false}"#));

        let resp = app
            .router()
            .oneshot(request(Method::GET, "/api/content/post-1", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = parse_body(resp).await;
        assert_eq!(body["content"]["id"], "post-1");
        assert_eq!(
            body["content"]["metadata"],
            json!({"tags": ["rust", "web"], "draft": false})
        );
    }

    #[tokio::test]
    async fn test_get_with_unparseable_metadata_returns_empty_object() {
        let app = ContentTestApp::new();
        app.seed("post-2", Some("{this is not json"));

        let resp = app
            .router()
            .oneshot(request(Method::GET, "/api/content/post-2", None))
            .await
            .unwrap();
        // Bad metadata never fails the request
        assert_eq!(resp.status(), StatusCode::OK);

        let body = parse_body(resp).await;
        assert_eq!(body["content"]["metadata"], json!({}));
    }

    #[tokio::test]
    async fn test_get_with_null_metadata_stays_null() {
        let app = ContentTestApp::new();
        app.seed("post-3", None);

        let resp = app
            .router()
            .oneshot(request(Method::GET, "/api/content/post-3", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = parse_body(resp).await;
        assert!(body["content"]["metadata"].is_null());
    }

    #[tokio::test]
    async fn test_get_unknown_id_returns_404() {
        let app = ContentTestApp::new();

        let resp = app
            .router()
            .oneshot(request(Method::GET, "/api/content/missing", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = parse_body(resp).await;
        assert_eq!(body, json!({"error": "Content not found"}));
    }

    #[tokio::test]
    async fn test_get_store_failure_returns_500_with_message() {
        let app = ContentTestApp::new();
        app.store.fail_with("connection refused");

        let resp = app
            .router()
            .oneshot(request(Method::GET, "/api/content/post-1", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = parse_body(resp).await;
        assert_eq!(body, json!({"error": "connection refused"}));
    }
}

mod test_put_content {
    use super::*;

    #[tokio::test]
    async fn test_put_then_get_roundtrips_metadata() {
        let app = ContentTestApp::new();

        let resp = app
            .router()
            .oneshot(json_request(
                Method::PUT,
                "/api/content/post-1",
                &json!({"title": "Hello", "metadata": {"tags": ["a"]}}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = app
            .router()
            .oneshot(request(Method::GET, "/api/content/post-1", None))
            .await
            .unwrap();
        let body = parse_body(resp).await;
        assert_eq!(body["content"]["title"], "Hello");
        assert_eq!(body["content"]["metadata"], json!({"tags": ["a"]}));
    }

    #[tokio::test]
    async fn test_put_replaces_existing_record() {
        let app = ContentTestApp::new();
        app.seed("post-1", Some(r#"{"old":true}"#));

        let resp = app
            .router()
            .oneshot(json_request(
                Method::PUT,
                "/api/content/post-1",
                &json!({"title": "Replaced"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = parse_body(resp).await;
        assert_eq!(body["content"]["title"], "Replaced");
        assert!(body["content"]["metadata"].is_null());
    }

    #[tokio::test]
    async fn test_put_overlong_title_returns_400() {
        let app = ContentTestApp::new();

        let resp = app
            .router()
            .oneshot(json_request(
                Method::PUT,
                "/api/content/post-1",
                &json!({"title": "x".repeat(201)}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

mod test_delete_content {
    use super::*;

    #[tokio::test]
    async fn test_delete_existing_returns_204() {
        let app = ContentTestApp::new();
        app.seed("post-1", None);

        let resp = app
            .router()
            .oneshot(request(Method::DELETE, "/api/content/post-1", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let resp = app
            .router()
            .oneshot(request(Method::GET, "/api/content/post-1", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_unknown_returns_404() {
        let app = ContentTestApp::new();

        let resp = app
            .router()
            .oneshot(request(Method::DELETE, "/api/content/missing", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = parse_body(resp).await;
        assert_eq!(body, json!({"error": "Content not found"}));
    }
}
