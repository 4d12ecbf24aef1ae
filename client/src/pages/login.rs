//! Login page.

use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"Event Board"</h1>
            <p>"Sign in to manage your events"</p>
            <a href="/register" class="login-link">
                "Create an account"
            </a>
        </div>
    }
}
