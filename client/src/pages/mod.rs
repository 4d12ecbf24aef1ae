//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is selected by `app::NavigationHost` from the resolved
//! `ViewId`; pages never check the session themselves because the guard has
//! already run by the time they render.

pub mod admin;
pub mod dashboard;
pub mod event_detail;
pub mod login;
pub mod profile;
pub mod register;
