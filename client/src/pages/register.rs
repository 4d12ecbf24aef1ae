//! Registration page.

use leptos::prelude::*;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"Create an account"</h1>
            <a href="/login" class="login-link">
                "Already registered? Sign in"
            </a>
        </div>
    }
}
