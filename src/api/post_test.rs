use super::*;
use crate::test_support::{MockBackend, TestClient};
use serde_json::json;

#[tokio::test]
async fn post_list_scenario() {
    let backend = MockBackend::start(200, r#"{"list":[{"postId":1},{"postId":2}],"total":5}"#).await;
    let t = TestClient::new(&backend.base_url, Some("abc123"));

    let page = get_post_list(&t.client, PageQuery::new(1, 10)).await.unwrap();

    assert_eq!(page, json!({ "list": [{ "postId": 1 }, { "postId": 2 }], "total": 5 }));
    let req = backend.single_request();
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/admin/post/page");
    assert_eq!(req.query.as_deref(), Some("page=1&size=10"));
    assert_eq!(req.token.as_deref(), Some("abc123"));
    assert!(t.sink.notices().is_empty());
}

#[tokio::test]
async fn toggle_block_sends_post_id_in_body() {
    let backend = MockBackend::start(200, "true").await;
    let t = TestClient::new(&backend.base_url, Some("abc123"));

    toggle_post_block(&t.client, PostId { post_id: 12 }).await.unwrap();

    let req = backend.single_request();
    assert_eq!(req.path, "/admin/post/toggleBlock");
    assert_eq!(req.body, Some(json!({ "postId": 12 })));
}

#[tokio::test]
async fn batch_delete_sends_id_list() {
    let backend = MockBackend::start(200, "{}").await;
    let t = TestClient::new(&backend.base_url, Some("abc123"));

    batch_delete_posts(&t.client, &PostIds { post_ids: vec![4, 5] }).await.unwrap();

    assert_eq!(backend.single_request().body, Some(json!({ "postIds": [4, 5] })));
}

#[tokio::test]
async fn expired_session_during_moderation_tears_down_session() {
    let backend = MockBackend::start(401, "{}").await;
    let t = TestClient::new(&backend.base_url, Some("abc123"));

    let err = delete_post(&t.client, PostId { post_id: 1 }).await.unwrap_err();

    assert_eq!(err, ApiError::Unauthorized);
    assert!(!t.session.is_authenticated());
    assert_eq!(t.sink.notices().len(), 1);
}
