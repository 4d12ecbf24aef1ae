//! Session marker access for the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow stores the signed-in user's identifier under
//! [`SESSION_KEY`] in `localStorage`. The guard never reads storage itself:
//! the navigator asks an injected [`SessionAccessor`] once per navigation
//! attempt and hands the resulting [`SessionStatus`] to the guard.
//!
//! TRADE-OFFS
//! ==========
//! Presence of a non-empty identifier is the whole contract. There is no
//! expiry and no server round-trip, so a stale marker still counts as signed
//! in until something clears it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError};

/// `localStorage` key holding the signed-in user's identifier.
pub const SESSION_KEY: &str = "user_id";

/// Authentication status derived from the session marker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Anonymous,
    Authenticated { user_id: String },
}

impl SessionStatus {
    /// Interpret a stored marker. Missing and empty markers are anonymous.
    pub fn from_marker(marker: Option<String>) -> Self {
        match marker {
            Some(user_id) if !user_id.is_empty() => Self::Authenticated { user_id },
            _ => Self::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn user_id(&self) -> Option<&str> {
        match self {
            Self::Authenticated { user_id } => Some(user_id),
            Self::Anonymous => None,
        }
    }
}

/// Source of the session marker.
pub trait SessionAccessor: Send + Sync {
    /// Current raw marker, read fresh on every call.
    fn read_marker(&self) -> Option<String>;

    /// Remove the marker (sign out).
    fn clear(&self);

    fn status(&self) -> SessionStatus {
        SessionStatus::from_marker(self.read_marker())
    }
}

/// Shared handle provided to components through Leptos context.
#[derive(Clone)]
pub struct SessionHandle(Arc<dyn SessionAccessor>);

impl SessionHandle {
    pub fn new<S: SessionAccessor + 'static>(accessor: S) -> Self {
        Self(Arc::new(accessor))
    }

    pub fn accessor(&self) -> &dyn SessionAccessor {
        self.0.as_ref()
    }

    pub fn status(&self) -> SessionStatus {
        self.0.status()
    }

    pub fn clear(&self) {
        self.0.clear();
    }
}

// =============================================================================
// BROWSER STORAGE
// =============================================================================

/// Marker stored in the browser's `localStorage`.
///
/// Outside a `csr` build there is no storage, so the marker always reads
/// as absent and `clear` is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionAccessor for BrowserSession {
    fn read_marker(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(SESSION_KEY).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(SESSION_KEY).is_err() {
                    log::warn!("failed to remove {SESSION_KEY} from localStorage");
                }
            }
        }
    }
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// Marker held in process memory.
#[derive(Debug, Default)]
pub struct MemorySession {
    marker: Mutex<Option<String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(user_id: impl Into<String>) -> Self {
        Self { marker: Mutex::new(Some(user_id.into())) }
    }

    pub fn sign_in(&self, user_id: impl Into<String>) {
        *self.marker.lock().unwrap_or_else(PoisonError::into_inner) = Some(user_id.into());
    }
}

impl SessionAccessor for MemorySession {
    fn read_marker(&self) -> Option<String> {
        self.marker.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn clear(&self) {
        *self.marker.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
