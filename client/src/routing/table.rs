//! Ordered route table with first-match-wins resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The table is built once at startup and never mutated. Every navigation
//! resolves through it before the guard runs, so route-level redirects such
//! as `/` → `/dashboard` apply regardless of session state.
//!
//! DESIGN
//! ======
//! Entries are tagged variants (`Redirect` or `View`) tried in declaration
//! order. The last entry must be a bare catch-all (`/*`), which makes
//! resolution total: unmatched paths fall through to it instead of failing.
//!
//! Pattern syntax:
//! - `name`: static segment, compared ASCII case-insensitively
//! - `:name`: parameter, binds exactly one non-empty segment
//! - `*` or `*name`: wildcard, final segment only, binds the remainder

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::fmt;

use super::path::{canonicalize, segments};

// =============================================================================
// VIEWS
// =============================================================================

/// Page views reachable through the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    Login,
    Register,
    Dashboard,
    Profile,
    EventDetail,
    Admin,
}

impl ViewId {
    /// Stable lowercase name, used in logs and page titles.
    pub fn name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::Dashboard => "dashboard",
            Self::Profile => "profile",
            Self::EventDetail => "event-detail",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Structural problems detected while building a [`RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("route table has no entries")]
    Empty,

    #[error("pattern {pattern:?} must start with '/'")]
    RelativePattern { pattern: String },

    #[error("pattern {pattern:?} has a parameter without a name")]
    UnnamedParam { pattern: String },

    #[error("pattern {pattern:?} binds parameter {name:?} more than once")]
    DuplicateParam { pattern: String, name: String },

    #[error("pattern {pattern:?} has a wildcard before its final segment")]
    WildcardNotLast { pattern: String },

    #[error("catch-all {pattern:?} at position {index} shadows the entries after it")]
    CatchAllNotLast { pattern: String, index: usize },

    #[error("last entry {pattern:?} is not a catch-all")]
    MissingCatchAll { pattern: String },

    #[error("redirect target {target:?} of {pattern:?} is not an absolute path")]
    RelativeRedirect { pattern: String, target: String },
}

// =============================================================================
// PARAMS
// =============================================================================

/// Named values bound by `:param` and `*name` segments, in pattern order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams {
    entries: Vec<(String, String)>,
}

impl RouteParams {
    /// Value bound to `name`, if the matched pattern declares it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, name: &str, value: String) {
        self.entries.push((name.to_owned(), value));
    }
}

// =============================================================================
// PATTERNS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    Wildcard(Option<String>),
}

/// A parsed route pattern such as `/event/:id` or `/*`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern string.
    ///
    /// # Errors
    ///
    /// Returns an error for relative patterns, unnamed or duplicate
    /// parameters, and wildcards that are not the final segment.
    pub fn parse(source: &str) -> Result<Self, RouteTableError> {
        if !source.starts_with('/') {
            return Err(RouteTableError::RelativePattern { pattern: source.to_owned() });
        }

        let raw: Vec<&str> = segments(source).collect();
        let mut parsed = Vec::with_capacity(raw.len());
        let mut names: Vec<&str> = Vec::new();

        for (i, part) in raw.iter().enumerate() {
            let segment = if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(RouteTableError::UnnamedParam { pattern: source.to_owned() });
                }
                if names.contains(&name) {
                    return Err(RouteTableError::DuplicateParam {
                        pattern: source.to_owned(),
                        name: name.to_owned(),
                    });
                }
                names.push(name);
                Segment::Param(name.to_owned())
            } else if let Some(name) = part.strip_prefix('*') {
                if i + 1 != raw.len() {
                    return Err(RouteTableError::WildcardNotLast { pattern: source.to_owned() });
                }
                if names.contains(&name) {
                    return Err(RouteTableError::DuplicateParam {
                        pattern: source.to_owned(),
                        name: name.to_owned(),
                    });
                }
                Segment::Wildcard((!name.is_empty()).then(|| name.to_owned()))
            } else {
                Segment::Static((*part).to_owned())
            };
            parsed.push(segment);
        }

        Ok(Self { source: source.to_owned(), segments: parsed })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True for a pattern that matches every path (`/*` or `/*name`).
    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.as_slice(), [Segment::Wildcard(_)])
    }

    /// Match pre-split path segments, returning the bound parameters.
    /// Parameter values keep the case they were written in.
    fn match_segments(&self, path: &[&str]) -> Option<RouteParams> {
        let mut params = RouteParams::default();
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Static(expected) => {
                    if !path.get(i).is_some_and(|actual| actual.eq_ignore_ascii_case(expected)) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = path.get(i)?;
                    params.insert(name, (*value).to_owned());
                }
                Segment::Wildcard(name) => {
                    if let Some(name) = name {
                        params.insert(name, path.get(i..).unwrap_or_default().join("/"));
                    }
                    return Some(params);
                }
            }
        }
        (path.len() == self.segments.len()).then_some(params)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

// =============================================================================
// TABLE
// =============================================================================

/// What a matched entry leads to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    /// Navigate elsewhere before any view is considered.
    Redirect(String),
    /// Render a page view.
    View(ViewId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: RoutePattern,
    pub target: RouteTarget,
}

/// Result of resolving a path against the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    View { view: ViewId, params: RouteParams },
    Redirect { to: String },
}

/// Immutable, validated route table.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<RouteEntry>,
    catch_all: RouteEntry,
}

impl RouteTable {
    /// Build a table from `(pattern, target)` pairs in match order.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is malformed, a redirect target is not
    /// absolute, or the final entry is not the only catch-all.
    pub fn new<'a, I>(entries: I) -> Result<Self, RouteTableError>
    where
        I: IntoIterator<Item = (&'a str, RouteTarget)>,
    {
        let mut routes = Vec::new();
        for (pattern, target) in entries {
            let pattern = RoutePattern::parse(pattern)?;
            if let RouteTarget::Redirect(to) = &target {
                if !to.starts_with('/') {
                    return Err(RouteTableError::RelativeRedirect {
                        pattern: pattern.source,
                        target: to.clone(),
                    });
                }
            }
            routes.push(RouteEntry { pattern, target });
        }

        let catch_all = routes.pop().ok_or(RouteTableError::Empty)?;
        if !catch_all.pattern.is_catch_all() {
            return Err(RouteTableError::MissingCatchAll { pattern: catch_all.pattern.source });
        }
        if let Some((index, entry)) = routes.iter().enumerate().find(|(_, e)| e.pattern.is_catch_all()) {
            return Err(RouteTableError::CatchAllNotLast { pattern: entry.pattern.source.clone(), index });
        }

        Ok(Self { routes, catch_all })
    }

    /// The application's route table.
    pub fn app() -> Self {
        Self::new(app_routes()).expect("application route table is well-formed")
    }

    /// Resolve `path` to a view or redirect, first match wins.
    pub fn resolve(&self, path: &str) -> Resolution {
        let canonical = canonicalize(path);
        let parts: Vec<&str> = segments(&canonical).collect();

        for entry in &self.routes {
            if let Some(params) = entry.pattern.match_segments(&parts) {
                return Self::resolution(&entry.target, params);
            }
        }

        let params = self.catch_all.pattern.match_segments(&parts).unwrap_or_default();
        Self::resolution(&self.catch_all.target, params)
    }

    /// Entries in match order, catch-all last.
    #[cfg(test)]
    pub(crate) fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.routes.iter().chain(std::iter::once(&self.catch_all))
    }

    fn resolution(target: &RouteTarget, params: RouteParams) -> Resolution {
        match target {
            RouteTarget::Redirect(to) => Resolution::Redirect { to: to.clone() },
            RouteTarget::View(view) => Resolution::View { view: *view, params },
        }
    }
}

/// Route declarations for the event-board application, in match order.
pub fn app_routes() -> Vec<(&'static str, RouteTarget)> {
    vec![
        ("/", RouteTarget::Redirect("/dashboard".to_owned())),
        ("/login", RouteTarget::View(ViewId::Login)),
        ("/register", RouteTarget::View(ViewId::Register)),
        ("/dashboard", RouteTarget::View(ViewId::Dashboard)),
        ("/profile", RouteTarget::View(ViewId::Profile)),
        ("/event/:id", RouteTarget::View(ViewId::EventDetail)),
        ("/admin", RouteTarget::View(ViewId::Admin)),
        ("/*path", RouteTarget::Redirect("/dashboard".to_owned())),
    ]
}
