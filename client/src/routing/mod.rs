//! Client-side routing: route table, navigation guard and the pipeline
//! that combines them.
//!
//! ARCHITECTURE
//! ============
//! `path` canonicalizes, `table` resolves, `guard` authorizes, and
//! `navigator` loops over the three until a view is allowed. None of these
//! touch the DOM; the app shell in `app` feeds them the router location.

pub mod guard;
pub mod navigator;
pub mod path;
pub mod table;

pub use guard::{GuardDecision, GuardPolicy};
pub use navigator::{Navigation, NavigationError, Navigator};
pub use table::{Resolution, RouteParams, RouteTable, RouteTarget, ViewId};
