use super::*;
use crate::routing::table::RouteTarget;
use crate::session::MemorySession;

fn anonymous() -> MemorySession {
    MemorySession::new()
}

fn signed_in() -> MemorySession {
    MemorySession::signed_in("42")
}

fn go(path: &str, session: &MemorySession) -> Navigation {
    Navigator::app()
        .navigate(path, session)
        .unwrap_or_else(|e| panic!("navigation to {path} failed: {e}"))
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn anonymous_profile_lands_on_login() {
    let nav = go("/profile", &anonymous());
    assert_eq!(nav.path, "/login");
    assert_eq!(nav.view, ViewId::Login);
    assert_eq!(
        nav.redirects,
        vec![Redirect { from: "/profile".to_owned(), to: "/login".to_owned(), cause: RedirectCause::Login }]
    );
}

#[test]
fn signed_in_login_lands_on_dashboard() {
    let nav = go("/login", &signed_in());
    assert_eq!(nav.path, "/dashboard");
    assert_eq!(nav.view, ViewId::Dashboard);
    assert_eq!(nav.redirects.len(), 1);
    assert_eq!(nav.redirects[0].cause, RedirectCause::Home);
}

#[test]
fn signed_in_event_binds_id_without_redirect() {
    let nav = go("/event/42", &signed_in());
    assert!(!nav.was_redirected());
    assert_eq!(nav.view, ViewId::EventDetail);
    assert_eq!(nav.params.get("id"), Some("42"));
}

// =============================================================
// Route redirects run before the guard
// =============================================================

#[test]
fn root_goes_to_dashboard_when_signed_in() {
    let nav = go("/", &signed_in());
    assert_eq!(nav.path, "/dashboard");
    assert_eq!(nav.redirects[0].cause, RedirectCause::Route);
}

#[test]
fn root_goes_to_dashboard_then_login_when_anonymous() {
    let nav = go("/", &anonymous());
    let hops: Vec<(&str, &str, RedirectCause)> = nav
        .redirects
        .iter()
        .map(|r| (r.from.as_str(), r.to.as_str(), r.cause))
        .collect();
    assert_eq!(
        hops,
        vec![("/", "/dashboard", RedirectCause::Route), ("/dashboard", "/login", RedirectCause::Login)]
    );
    assert_eq!(nav.view, ViewId::Login);
}

#[test]
fn unknown_path_redirects_to_dashboard() {
    let nav = go("/does/not/exist", &signed_in());
    assert_eq!(nav.path, "/dashboard");
    assert_eq!(nav.redirects[0].cause, RedirectCause::Route);

    let nav = go("/does/not/exist", &anonymous());
    assert_eq!(nav.path, "/login");
}

// =============================================================
// Case handling
// =============================================================

#[test]
fn signed_in_mixed_case_event_reaches_detail() {
    let nav = go("/Event/42", &signed_in());
    assert!(!nav.was_redirected());
    assert_eq!(nav.view, ViewId::EventDetail);
    assert_eq!(nav.params.get("id"), Some("42"));
}

#[test]
fn mixed_case_login_is_not_public() {
    let nav = go("/Login", &anonymous());
    assert_eq!(nav.path, "/login");
    assert_eq!(nav.redirects[0].cause, RedirectCause::Login);
}

#[test]
fn mixed_case_login_is_not_bounced_when_signed_in() {
    let nav = go("/LOGIN", &signed_in());
    assert!(!nav.was_redirected());
    assert_eq!(nav.view, ViewId::Login);
}

// =============================================================
// Allowed navigations
// =============================================================

#[test]
fn signed_in_reaches_every_protected_view() {
    for (path, view) in [
        ("/dashboard", ViewId::Dashboard),
        ("/profile", ViewId::Profile),
        ("/admin", ViewId::Admin),
    ] {
        let nav = go(path, &signed_in());
        assert_eq!(nav.view, view);
        assert!(!nav.was_redirected(), "path {path}");
    }
}

#[test]
fn anonymous_reaches_public_views() {
    assert_eq!(go("/login", &anonymous()).view, ViewId::Login);
    assert_eq!(go("/register", &anonymous()).view, ViewId::Register);
}

#[test]
fn requested_path_is_canonical() {
    let nav = go("/register/?from=home", &anonymous());
    assert_eq!(nav.requested, "/register");
    assert!(!nav.was_redirected());
}

// =============================================================
// Session is read per navigation
// =============================================================

#[test]
fn session_changes_apply_to_the_next_navigation() {
    let navigator = Navigator::app();
    let session = MemorySession::new();

    assert_eq!(navigator.navigate("/profile", &session).unwrap().view, ViewId::Login);
    session.sign_in("7");
    assert_eq!(navigator.navigate("/profile", &session).unwrap().view, ViewId::Profile);
    session.clear();
    assert_eq!(navigator.navigate("/profile", &session).unwrap().view, ViewId::Login);
}

#[test]
fn empty_marker_counts_as_anonymous() {
    let nav = go("/admin", &MemorySession::signed_in(""));
    assert_eq!(nav.view, ViewId::Login);
}

// =============================================================
// Loops
// =============================================================

#[test]
fn route_redirect_cycle_is_reported() {
    let table = RouteTable::new([
        ("/a", RouteTarget::Redirect("/b".to_owned())),
        ("/b", RouteTarget::Redirect("/a".to_owned())),
        ("/*", RouteTarget::View(ViewId::Dashboard)),
    ])
    .unwrap();
    let navigator = Navigator::new(table, GuardPolicy::app());

    let err = navigator.navigate_as("/a", &SessionStatus::Anonymous).unwrap_err();
    let NavigationError::RedirectLoop { requested, hops, .. } = err;
    assert_eq!(requested, "/a");
    assert_eq!(hops, MAX_REDIRECTS);
}

#[test]
fn guard_cycle_is_reported_when_login_is_not_routable() {
    let table = RouteTable::new([
        ("/dashboard", RouteTarget::View(ViewId::Dashboard)),
        ("/*", RouteTarget::Redirect("/dashboard".to_owned())),
    ])
    .unwrap();
    let navigator = Navigator::new(table, GuardPolicy::app());

    assert!(matches!(
        navigator.navigate_as("/dashboard", &SessionStatus::Anonymous),
        Err(NavigationError::RedirectLoop { .. })
    ));
}

#[test]
fn accessors_expose_configuration() {
    let navigator = Navigator::app();
    assert_eq!(navigator.policy().login_path(), "/login");
    assert_eq!(navigator.policy().home_path(), "/dashboard");
}
