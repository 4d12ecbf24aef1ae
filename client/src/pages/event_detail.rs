//! Event detail page for `/event/:id`.

use leptos::prelude::*;

/// Detail view for one event; `id` is the raw `:id` path segment.
#[component]
pub fn EventDetailPage(id: String) -> impl IntoView {
    view! {
        <div class="event-page" data-event-id=id.clone()>
            <h1>{format!("Event {id}")}</h1>
            <a href="/dashboard">"Back to dashboard"</a>
        </div>
    }
}
