//! Dashboard page, the default authenticated landing route.

use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            <nav class="dashboard-nav">
                <a href="/profile">"Profile"</a>
                <a href="/admin">"Admin"</a>
            </nav>
        </div>
    }
}
