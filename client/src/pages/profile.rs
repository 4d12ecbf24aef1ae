//! Profile page with sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signing out clears the session marker and navigates to the login page;
//! the guard re-reads the marker on that navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use std::sync::Arc;

use crate::routing::Navigator;
use crate::session::SessionHandle;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let user_id = session.status().user_id().map(str::to_owned).unwrap_or_default();
    let login_path = expect_context::<Arc<Navigator>>().policy().login_path().to_owned();
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        session.clear();
        navigate(&login_path, NavigateOptions::default());
    };

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <p class="profile-page__user">{format!("Signed in as user {user_id}")}</p>
            <button class="profile-page__sign-out" on:click=on_sign_out>
                "Sign out"
            </button>
        </div>
    }
}
