//! Navigation guard deciding allow/redirect from the session status.
//!
//! SYSTEM CONTEXT
//! ==============
//! Evaluated on the resolved destination of every navigation. Public paths
//! are reachable anonymously; everything else requires a session marker.
//! Signed-in users are bounced off the login and registration pages.
//!
//! The guard is a pure function of `(path, status)`: it reads no storage,
//! mutates nothing and never contacts a backend. It is a UX redirect only;
//! the API still has to authorize every request.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::collections::BTreeSet;

use super::path::canonicalize;
use crate::session::SessionStatus;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const HOME_PATH: &str = "/dashboard";

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

/// Which paths are public and where redirects go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardPolicy {
    public_paths: BTreeSet<String>,
    auth_entry_paths: BTreeSet<String>,
    login_path: String,
    home_path: String,
}

impl GuardPolicy {
    /// Policy with `login_path` as its only public page.
    pub fn new(login_path: &str, home_path: &str) -> Self {
        let login_path = canonicalize(login_path);
        Self {
            public_paths: BTreeSet::from([login_path.clone()]),
            auth_entry_paths: BTreeSet::from([login_path.clone()]),
            login_path,
            home_path: canonicalize(home_path),
        }
    }

    /// Policy used by the application: `/login` and `/register` are public,
    /// and both send signed-in users to `/dashboard`.
    pub fn app() -> Self {
        Self::new(LOGIN_PATH, HOME_PATH).with_auth_entry_path(REGISTER_PATH)
    }

    /// Make `path` reachable without a session.
    #[must_use]
    pub fn with_public_path(mut self, path: &str) -> Self {
        self.public_paths.insert(canonicalize(path));
        self
    }

    /// Public path that signed-in users are redirected away from.
    #[must_use]
    pub fn with_auth_entry_path(mut self, path: &str) -> Self {
        let path = canonicalize(path);
        self.public_paths.insert(path.clone());
        self.auth_entry_paths.insert(path);
        self
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.public_paths.contains(&canonicalize(path))
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn home_path(&self) -> &str {
        &self.home_path
    }

    /// Decide whether navigation to `path` may proceed.
    pub fn evaluate(&self, path: &str, status: &SessionStatus) -> GuardDecision {
        let path = canonicalize(path);
        let signed_in = status.is_authenticated();

        if !signed_in && !self.public_paths.contains(&path) {
            GuardDecision::RedirectToLogin
        } else if signed_in && self.auth_entry_paths.contains(&path) {
            GuardDecision::RedirectToHome
        } else {
            GuardDecision::Allow
        }
    }

    /// Path a decision redirects to, or `None` for [`GuardDecision::Allow`].
    pub fn redirect_target(&self, decision: GuardDecision) -> Option<&str> {
        match decision {
            GuardDecision::Allow => None,
            GuardDecision::RedirectToLogin => Some(&self.login_path),
            GuardDecision::RedirectToHome => Some(&self.home_path),
        }
    }
}
