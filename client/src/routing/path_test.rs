use super::*;

#[test]
fn canonicalize_keeps_plain_paths() {
    assert_eq!(canonicalize("/dashboard"), "/dashboard");
    assert_eq!(canonicalize("/event/42"), "/event/42");
}

#[test]
fn canonicalize_empty_and_root() {
    assert_eq!(canonicalize(""), "/");
    assert_eq!(canonicalize("/"), "/");
    assert_eq!(canonicalize("///"), "/");
}

#[test]
fn canonicalize_strips_trailing_slash() {
    assert_eq!(canonicalize("/login/"), "/login");
    assert_eq!(canonicalize("/event/42//"), "/event/42");
}

#[test]
fn canonicalize_adds_leading_slash() {
    assert_eq!(canonicalize("profile"), "/profile");
}

#[test]
fn canonicalize_collapses_repeated_slashes() {
    assert_eq!(canonicalize("//event///7"), "/event/7");
}

#[test]
fn canonicalize_drops_query_and_fragment() {
    assert_eq!(canonicalize("/login?next=/admin"), "/login");
    assert_eq!(canonicalize("/profile#settings"), "/profile");
    assert_eq!(canonicalize("/register/?a=1#b"), "/register");
    assert_eq!(canonicalize("?only=query"), "/");
}

#[test]
fn canonicalize_preserves_case() {
    assert_eq!(canonicalize("/Login"), "/Login");
}

#[test]
fn segments_skips_empty_parts() {
    let parts: Vec<&str> = segments("/event//42/").collect();
    assert_eq!(parts, vec!["event", "42"]);
    assert_eq!(segments("/").count(), 0);
}
