use super::*;

#[test]
fn in_memory_session_starts_anonymous() {
    let session = SessionContext::in_memory();
    assert_eq!(session.token(), None);
    assert_eq!(session.state(), SessionState::Anonymous);
}

#[test]
fn set_token_makes_session_authenticated() {
    let session = SessionContext::in_memory();
    session.set_token("abc123").unwrap();
    assert_eq!(session.token().as_deref(), Some("abc123"));
    assert!(session.is_authenticated());
}

#[test]
fn clear_removes_token() {
    let session = SessionContext::new(MemoryTokenStore::with_token("abc123"));
    session.clear().unwrap();
    assert_eq!(session.token(), None);
    session.clear().unwrap();
}

#[test]
fn empty_token_reads_as_absent() {
    let session = SessionContext::new(MemoryTokenStore::with_token(""));
    assert_eq!(session.token(), None);
    assert_eq!(session.state(), SessionState::Anonymous);
}

#[test]
fn clones_share_one_credential() {
    let session = SessionContext::in_memory();
    let other = session.clone();
    session.set_token("t1").unwrap();
    assert_eq!(other.token().as_deref(), Some("t1"));
    other.clear().unwrap();
    assert!(!session.is_authenticated());
}

#[test]
fn debug_output_hides_token() {
    let session = SessionContext::new(MemoryTokenStore::with_token("secret-token"));
    let rendered = format!("{session:?}");
    assert!(rendered.contains("Authenticated"));
    assert!(!rendered.contains("secret-token"));
}
