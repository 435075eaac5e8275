//! Dashboard page: the protected view behind the session guard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::User;
use crate::session::guard::{self, GuardDecision};
use crate::session::store::StoreHandle;

/// Dashboard page — shows the cached profile and a protected-endpoint
/// smoke test. Redirects to `/auth` when no session is persisted.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<StoreHandle>();
    let navigate = use_navigate();

    let user = RwSignal::new(None::<User>);
    let token = RwSignal::new(String::new());
    let probe_result = RwSignal::new(None::<String>);

    // Guard on mount: unauthenticated (or corrupt-session) visits redirect.
    {
        let store = store.clone();
        let navigate = navigate.clone();
        Effect::new(move || match guard::require_session(&*store) {
            GuardDecision::Allow(session) => {
                token.set(session.token);
                user.set(Some(session.user));
            }
            GuardDecision::RedirectToAuth => {
                navigate("/auth", NavigateOptions::default());
            }
        });
    }

    let on_logout = {
        let store = store.clone();
        let navigate = navigate.clone();
        move |_| {
            guard::logout(&*store);
            navigate("/", NavigateOptions::default());
        }
    };

    let on_probe = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let token = token.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_protected_probe(&token).await {
                    Ok(text) => {
                        probe_result.set(Some(format!("Protected endpoint response: {text}")));
                    }
                    Err(message) => probe_result.set(Some(message)),
                }
            });
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"FocusBoard Dashboard"</h1>
                <div class="dashboard-page__header-actions">
                    <span>
                        {move || {
                            user.with(|u| {
                                u.as_ref().map(|u| format!("Welcome, {}!", u.name)).unwrap_or_default()
                            })
                        }}
                    </span>
                    <button class="btn btn--danger" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </header>

            <main class="dashboard-page__grid">
                <section class="dashboard-page__card">
                    <h2>"User Information"</h2>
                    {move || {
                        user.with(|u| {
                            u.as_ref()
                                .map(|u| {
                                    view! {
                                        <dl class="dashboard-page__profile">
                                            <dt>"Name"</dt>
                                            <dd>{u.name.clone()}</dd>
                                            <dt>"Email"</dt>
                                            <dd>{u.email.clone()}</dd>
                                            <dt>"Role"</dt>
                                            <dd>{u.role.clone()}</dd>
                                            <dt>"ID"</dt>
                                            <dd>{u.id}</dd>
                                        </dl>
                                    }
                                })
                        })
                    }}
                </section>

                <section class="dashboard-page__card">
                    <h2>"Quick Actions"</h2>
                    <button class="btn btn--primary" on:click=on_probe>
                        "Test Protected Endpoint"
                    </button>
                    {move || {
                        probe_result
                            .get()
                            .map(|text| view! { <p class="dashboard-page__probe">{text}</p> })
                    }}
                </section>
            </main>
        </div>
    }
}
