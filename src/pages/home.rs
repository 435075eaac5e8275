//! Public landing page.

use leptos::prelude::*;

/// Marketing hero with a call-to-action into the auth flow.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1 class="home-page__title">"FocusBoard"</h1>
            <p class="home-page__tagline">
                "Plan your day, track your tasks, and stay focused on what matters."
            </p>
            <a href="/auth" class="home-page__cta">
                "Get Started"
            </a>
        </div>
    }
}
