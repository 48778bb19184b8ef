use super::*;
use crate::test_support::{MockBackend, TestClient};
use serde_json::json;

#[tokio::test]
async fn delete_tag_embeds_id_in_path() {
    let backend = MockBackend::start(200, "{}").await;
    let t = TestClient::new(&backend.base_url, Some("abc123"));

    delete_tag(&t.client, 31).await.unwrap();

    let req = backend.single_request();
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.path, "/tag/delete/31");
    assert_eq!(req.body, None);
}

#[tokio::test]
async fn create_system_tag_defaults_type() {
    let backend = MockBackend::start(200, r#"{"tagId":8}"#).await;
    let t = TestClient::new(&backend.base_url, Some("abc123"));

    let created = create_system_tag(&t.client, &NewTag { name: "campus".into(), tag_type: None }).await.unwrap();

    assert_eq!(created, json!({ "tagId": 8 }));
    assert_eq!(backend.single_request().body, Some(json!({ "name": "campus", "type": 0 })));
}

#[tokio::test]
async fn search_tags_uses_query() {
    let backend = MockBackend::start(200, "[]").await;
    let t = TestClient::new(&backend.base_url, None);

    search_tags(&t.client, &TagSearch { name: "music".into() }).await.unwrap();

    let req = backend.single_request();
    assert_eq!(req.path, "/tag/search");
    assert_eq!(req.query.as_deref(), Some("name=music"));
}
