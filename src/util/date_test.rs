use super::*;

#[test]
fn missing_or_blank_input_renders_placeholder() {
    assert_eq!(format_date_time(None, None), "--");
    assert_eq!(format_date_time(Some(""), None), "--");
    assert_eq!(format_date_time(Some("   "), None), "--");
}

#[test]
fn unparseable_input_is_returned_unchanged() {
    assert_eq!(format_date_time(Some("yesterday"), None), "yesterday");
}

#[test]
fn local_timestamp_uses_default_format() {
    assert_eq!(format_date_time(Some("2024-05-01T08:03:09"), None), "2024-05-01 08:03:09");
    assert_eq!(format_date_time(Some("2024-05-01 08:03:09"), None), "2024-05-01 08:03:09");
    assert_eq!(format_date_time(Some("2024-05-01T08:03:09.250"), None), "2024-05-01 08:03:09");
}

#[test]
fn rfc3339_keeps_its_offset() {
    assert_eq!(format_date_time(Some("2024-12-31T23:59:58+08:00"), None), "2024-12-31 23:59:58");
    assert_eq!(format_date_time(Some("2024-01-02T03:04:05Z"), None), "2024-01-02 03:04:05");
}

#[test]
fn date_only_renders_midnight() {
    assert_eq!(format_date_time(Some("2024-02-29"), None), "2024-02-29 00:00:00");
}

#[test]
fn custom_format_replaces_each_token_once() {
    assert_eq!(format_date_time(Some("2024-05-01 08:03:09"), Some("YYYY/MM/DD")), "2024/05/01");
    assert_eq!(format_date_time(Some("2024-05-01 08:03:09"), Some("HH:mm")), "08:03");
    assert_eq!(format_date_time(Some("2024-05-01 08:03:09"), Some("DD DD")), "01 DD");
}
