use super::*;
use crate::test_support::{MockBackend, TestClient};

#[tokio::test]
async fn handle_report_sends_verdict_in_query_not_body() {
    let backend = MockBackend::start(200, "true").await;
    let t = TestClient::new(&backend.base_url, Some("abc123"));

    handle_report(&t.client, ReportVerdict { report_id: 3, status: 1, admin_id: 9 }).await.unwrap();

    let req = backend.single_request();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/report/admin/handle");
    assert_eq!(req.query.as_deref(), Some("adminId=9&reportId=3&status=1"));
    assert_eq!(req.body, None);
}

#[tokio::test]
async fn filter_reports_skips_unset_fields() {
    let backend = MockBackend::start(200, r#"{"content":[]}"#).await;
    let t = TestClient::new(&backend.base_url, Some("abc123"));

    let filter = ReportFilter {
        page: Some(0),
        target_type: Some(2),
        start_time: Some("2024-05-01 00:00:00".into()),
        ..ReportFilter::default()
    };
    filter_reports(&t.client, &filter).await.unwrap();

    let req = backend.single_request();
    assert_eq!(req.path, "/report/admin/filter");
    assert_eq!(req.query.as_deref(), Some("page=0&startTime=2024-05-01+00%3A00%3A00&targetType=2"));
}

#[tokio::test]
async fn failed_report_call_still_notifies_once() {
    let backend = MockBackend::start(404, "{}").await;
    let t = TestClient::new(&backend.base_url, Some("abc123"));

    let err = get_report_detail(&t.client, ReportId { report_id: 77 }).await.unwrap_err();

    assert_eq!(err, ApiError::NotFound);
    assert_eq!(t.sink.notices().len(), 1);
}
