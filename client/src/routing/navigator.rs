//! Navigation pipeline: canonicalize, resolve, guard, repeat until a view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app shell runs [`Navigator::navigate`] on every location change. The
//! session is read exactly once per attempt, route-level redirects are
//! followed before the guard sees the destination, and a guard redirect
//! restarts resolution at its target.
//!
//! ERROR HANDLING
//! ==============
//! Unknown paths and unauthorized access are ordinary redirects, never
//! errors. The only failure is a redirect cycle, which can only come from a
//! misconfigured table/policy pair and is cut off after [`MAX_REDIRECTS`].

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use super::guard::{GuardDecision, GuardPolicy};
use super::path::canonicalize;
use super::table::{Resolution, RouteParams, RouteTable, ViewId};
use crate::session::{SessionAccessor, SessionStatus};

/// Upper bound on redirect hops within a single navigation.
pub const MAX_REDIRECTS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectCause {
    /// A `Redirect` entry in the route table.
    Route,
    /// The guard required a session.
    Login,
    /// The guard sent a signed-in user away from a login/registration page.
    Home,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub from: String,
    pub to: String,
    pub cause: RedirectCause,
}

/// A completed navigation: the view to render and how we got there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    /// Canonical form of the path that was asked for.
    pub requested: String,
    /// Canonical path of the allowed view.
    pub path: String,
    pub view: ViewId,
    pub params: RouteParams,
    pub redirects: Vec<Redirect>,
}

impl Navigation {
    pub fn was_redirected(&self) -> bool {
        !self.redirects.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("navigation to {requested:?} exceeded {hops} redirects (last at {last:?})")]
    RedirectLoop { requested: String, last: String, hops: usize },
}

/// Route table plus guard policy.
#[derive(Clone, Debug)]
pub struct Navigator {
    table: RouteTable,
    policy: GuardPolicy,
}

impl Navigator {
    pub fn new(table: RouteTable, policy: GuardPolicy) -> Self {
        Self { table, policy }
    }

    pub fn app() -> Self {
        Self::new(RouteTable::app(), GuardPolicy::app())
    }

    pub fn policy(&self) -> &GuardPolicy {
        &self.policy
    }

    /// Navigate to `path`, reading the session marker once from `session`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::RedirectLoop`] when redirects cycle.
    pub fn navigate(&self, path: &str, session: &dyn SessionAccessor) -> Result<Navigation, NavigationError> {
        let status = session.status();
        self.navigate_as(path, &status)
    }

    /// Navigate to `path` with an already-read session status.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::RedirectLoop`] when redirects cycle.
    pub fn navigate_as(&self, path: &str, status: &SessionStatus) -> Result<Navigation, NavigationError> {
        let requested = canonicalize(path);
        let mut current = requested.clone();
        let mut redirects: Vec<Redirect> = Vec::new();

        loop {
            let (to, cause) = match self.table.resolve(&current) {
                Resolution::Redirect { to } => (canonicalize(&to), RedirectCause::Route),
                Resolution::View { view, params } => {
                    let decision = self.policy.evaluate(&current, status);
                    let Some(target) = self.policy.redirect_target(decision) else {
                        return Ok(Navigation { requested, path: current, view, params, redirects });
                    };
                    let cause = match decision {
                        GuardDecision::RedirectToHome => RedirectCause::Home,
                        _ => RedirectCause::Login,
                    };
                    (target.to_owned(), cause)
                }
            };

            if redirects.len() >= MAX_REDIRECTS {
                log::warn!("redirect loop navigating to {requested} (stuck at {current})");
                return Err(NavigationError::RedirectLoop { requested, last: current, hops: redirects.len() });
            }

            log::debug!("redirect {current} -> {to} ({cause:?})");
            let from = std::mem::replace(&mut current, to.clone());
            redirects.push(Redirect { from, to, cause });
        }
    }
}
