use super::*;

#[test]
fn missing_marker_is_anonymous() {
    assert_eq!(SessionStatus::from_marker(None), SessionStatus::Anonymous);
}

#[test]
fn empty_marker_is_anonymous() {
    assert_eq!(SessionStatus::from_marker(Some(String::new())), SessionStatus::Anonymous);
}

#[test]
fn any_non_empty_marker_is_authenticated() {
    let status = SessionStatus::from_marker(Some("17".to_owned()));
    assert!(status.is_authenticated());
    assert_eq!(status.user_id(), Some("17"));
}

#[test]
fn default_status_is_anonymous() {
    assert!(!SessionStatus::default().is_authenticated());
    assert_eq!(SessionStatus::default().user_id(), None);
}

#[test]
fn memory_session_starts_empty() {
    let session = MemorySession::new();
    assert_eq!(session.read_marker(), None);
    assert_eq!(session.status(), SessionStatus::Anonymous);
}

#[test]
fn memory_session_sign_in_and_clear() {
    let session = MemorySession::new();
    session.sign_in("5");
    assert_eq!(session.status(), SessionStatus::Authenticated { user_id: "5".to_owned() });

    session.clear();
    assert_eq!(session.read_marker(), None);
}

#[test]
fn memory_session_reads_fresh_each_time() {
    let session = MemorySession::signed_in("1");
    assert!(session.status().is_authenticated());
    session.clear();
    assert!(!session.status().is_authenticated());
    session.sign_in("2");
    assert_eq!(session.status().user_id(), Some("2"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_session_is_anonymous_outside_the_browser() {
    let session = BrowserSession;
    assert_eq!(session.read_marker(), None);
    session.clear();
    assert!(!session.status().is_authenticated());
}

#[test]
fn handle_delegates_to_accessor() {
    let handle = SessionHandle::new(MemorySession::signed_in("9"));
    assert_eq!(handle.status().user_id(), Some("9"));
    handle.clear();
    assert_eq!(handle.accessor().read_marker(), None);
}
