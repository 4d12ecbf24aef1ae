//! Path canonicalization shared by route matching and the navigation guard.
//!
//! DESIGN
//! ======
//! Both the table and the guard compare against the same canonical string,
//! so `/login/` and `/login?next=x` are treated exactly like `/login`.
//! Case is preserved here. The table matches static segments ignoring ASCII
//! case, while the guard's public-page check compares exactly.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

/// Canonical form of a navigation path.
///
/// Drops any query or fragment, guarantees a leading `/`, collapses repeated
/// slashes and strips a trailing slash (the root stays `/`).
pub fn canonicalize(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let mut out = String::with_capacity(end + 1);
    for segment in segments(&raw[..end]) {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

/// Non-empty `/`-separated segments of `path`.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
