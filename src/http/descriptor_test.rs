use super::*;
use serde_json::json;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Paging {
    page: u32,
    size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_type: Option<i32>,
}

#[test]
fn with_query_flattens_struct_fields() {
    let descriptor =
        RequestDescriptor::get("/admin/post/page").with_query(&Paging { page: 1, size: 10, target_type: None });
    assert_eq!(descriptor.method(), &Method::GET);
    assert_eq!(descriptor.path(), "/admin/post/page");
    assert_eq!(
        descriptor.query_pairs().unwrap(),
        vec![("page".to_owned(), "1".to_owned()), ("size".to_owned(), "10".to_owned())]
    );
    assert!(descriptor.fault().is_none());
}

#[test]
fn null_query_values_are_dropped() {
    let descriptor = RequestDescriptor::get("/tag/search").with_query(&json!({ "name": "rust", "type": null }));
    assert_eq!(descriptor.query_pairs().unwrap(), vec![("name".to_owned(), "rust".to_owned())]);
}

#[test]
fn nested_query_value_is_rejected() {
    let descriptor = RequestDescriptor::get("/x").with_query(&json!({ "ids": [1, 2] }));
    assert_eq!(descriptor.query_pairs().unwrap_err(), "query parameter `ids` must be a scalar");
}

#[test]
fn scalar_query_records_fault() {
    let descriptor = RequestDescriptor::get("/x").with_query(&5);
    assert!(descriptor.fault().unwrap().starts_with("query parameters must be an object"));
}

#[test]
fn with_body_keeps_payload() {
    let descriptor = RequestDescriptor::post("/admin/post/delete").with_body(&json!({ "postId": 7 }));
    assert_eq!(descriptor.method(), &Method::POST);
    assert_eq!(descriptor.body(), Some(&json!({ "postId": 7 })));
}

#[test]
fn unserializable_body_records_fault() {
    let mut map = std::collections::HashMap::new();
    map.insert(vec![1_u8], 1);
    let descriptor = RequestDescriptor::post("/x").with_body(&map);
    assert!(descriptor.body().is_none());
    assert!(descriptor.fault().unwrap().starts_with("request body:"));
}
