//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `leptos_router` owns browser history and the current location; the
//! `Navigator` owns matching and authorization. `NavigationHost` is the
//! router's only outlet: it re-runs the navigator whenever the pathname
//! changes, replaces the history entry when the outcome was redirected, and
//! renders the resolved page otherwise.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::components::Router;
use leptos_router::hooks::{use_location, use_navigate};

use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, event_detail::EventDetailPage, login::LoginPage,
    profile::ProfilePage, register::RegisterPage,
};
use crate::routing::{Navigation, NavigationError, Navigator, RouteParams, ViewId};
use crate::session::{BrowserSession, SessionHandle};

/// Root application component.
///
/// Builds the navigator once, provides it and the browser-backed session
/// accessor as context, and mounts the router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(Arc::new(Navigator::app()));
    provide_context(SessionHandle::new(BrowserSession));

    view! {
        <Title text="Event Board"/>
        <Router>
            <main>
                <NavigationHost/>
            </main>
        </Router>
    }
}

/// Router outlet that applies the route table and guard on every location
/// change.
#[component]
pub fn NavigationHost() -> impl IntoView {
    let navigator = expect_context::<Arc<Navigator>>();
    let session = expect_context::<SessionHandle>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let outcome = Memo::new(move |_| navigator.navigate(&pathname.get(), session.accessor()));

    Effect::new(move || {
        if let Ok(nav) = outcome.get() {
            if nav.was_redirected() {
                navigate(&nav.path, NavigateOptions { replace: true, ..Default::default() });
            }
        }
    });

    move || match outcome.get() {
        Ok(nav) if !nav.was_redirected() => render_view(&nav),
        Ok(_) => ().into_any(),
        Err(err) => render_error(&err),
    }
}

fn render_view(nav: &Navigation) -> AnyView {
    match nav.view {
        ViewId::Login => view! { <LoginPage/> }.into_any(),
        ViewId::Register => view! { <RegisterPage/> }.into_any(),
        ViewId::Dashboard => view! { <DashboardPage/> }.into_any(),
        ViewId::Profile => view! { <ProfilePage/> }.into_any(),
        ViewId::EventDetail => {
            let id = event_id(&nav.params);
            view! { <EventDetailPage id=id/> }.into_any()
        }
        ViewId::Admin => view! { <AdminPage/> }.into_any(),
    }
}

fn render_error(err: &NavigationError) -> AnyView {
    log::error!("{err}");
    view! {
        <div class="navigation-error">
            <p>"This page could not be opened."</p>
        </div>
    }
    .into_any()
}

fn event_id(params: &RouteParams) -> String {
    params.get("id").unwrap_or_default().to_owned()
}
