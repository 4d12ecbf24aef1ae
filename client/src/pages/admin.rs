//! Admin page.
//!
//! Reaching this route only requires a session marker. Whether the user
//! actually holds the admin role is for the API to enforce.

use leptos::prelude::*;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <div class="admin-page">
            <h1>"Administration"</h1>
        </div>
    }
}
