//! Authentication page: the sign-in / sign-up form over the auth state
//! machine.
//!
//! The page owns no transition logic. Every interaction maps to one core
//! operation: tab clicks to `set_mode`, keystrokes to `update_field`, and
//! the form submit to the async submission flow.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::session::store::StoreHandle;
use crate::state::auth::{AuthFormState, AuthMode, Field, SubmissionStatus};

/// Auth page — mode tabs, credential form, and error/success banners.
#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthFormState>>();
    let store = expect_context::<StoreHandle>();

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let mode = move || auth.with(|s| s.mode);
    let status = move || auth.with(|s| s.status);
    let submitting = move || status() == SubmissionStatus::Submitting;
    let succeeded = move || status() == SubmissionStatus::Succeeded;
    let error = move || auth.with(|s| s.error.clone());

    let set_sign_in = move |_| auth.update(|s| s.set_mode(AuthMode::SignIn));
    let set_sign_up = move |_| auth.update(|s| s.set_mode(AuthMode::SignUp));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            crate::state::auth::submit(auth, store.clone(), move || {
                navigate("/dashboard", NavigateOptions::default());
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &store;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <header class="auth-page__header">
                    <h1>
                        {move || {
                            if mode() == AuthMode::SignIn { "Welcome Back" } else { "Join FocusBoard" }
                        }}
                    </h1>
                    <p>
                        {move || {
                            if mode() == AuthMode::SignIn {
                                "Sign in to your account"
                            } else {
                                "Create your account"
                            }
                        }}
                    </p>
                </header>

                <Show when=move || !error().is_empty()>
                    <div class="auth-page__banner auth-page__banner--error">
                        <p>{error}</p>
                    </div>
                </Show>

                <Show when=succeeded>
                    <div class="auth-page__banner auth-page__banner--success">
                        <p>
                            {move || {
                                if mode() == AuthMode::SignIn {
                                    "Login successful! Redirecting..."
                                } else {
                                    "Account created successfully! Redirecting..."
                                }
                            }}
                        </p>
                    </div>
                </Show>

                <div class="auth-page__tabs">
                    <button
                        type="button"
                        class=move || {
                            if mode() == AuthMode::SignIn {
                                "auth-page__tab auth-page__tab--active"
                            } else {
                                "auth-page__tab"
                            }
                        }
                        on:click=set_sign_in
                    >
                        "Sign In"
                    </button>
                    <button
                        type="button"
                        class=move || {
                            if mode() == AuthMode::SignUp {
                                "auth-page__tab auth-page__tab--active"
                            } else {
                                "auth-page__tab"
                            }
                        }
                        on:click=set_sign_up
                    >
                        "Sign Up"
                    </button>
                </div>

                <form class="auth-page__form" on:submit=on_submit>
                    <Show when=move || mode() == AuthMode::SignUp>
                        <CredentialInput
                            label="Name"
                            input_type="text"
                            placeholder="Your Name"
                            field=Field::Name
                            auth=auth
                        />
                    </Show>

                    <CredentialInput
                        label="Email Address"
                        input_type="email"
                        placeholder="Your Email"
                        field=Field::Email
                        auth=auth
                    />

                    <CredentialInput
                        label="Password"
                        input_type="password"
                        placeholder="Your Password"
                        field=Field::Password
                        auth=auth
                    />

                    <Show when=move || mode() == AuthMode::SignUp>
                        <CredentialInput
                            label="Confirm Password"
                            input_type="password"
                            placeholder="Confirm Your Password"
                            field=Field::ConfirmPassword
                            auth=auth
                        />
                    </Show>

                    <button
                        type="submit"
                        class="btn btn--primary auth-page__submit"
                        disabled=submitting
                    >
                        {move || match (submitting(), mode()) {
                            (true, AuthMode::SignIn) => "Signing In...",
                            (true, AuthMode::SignUp) => "Signing Up...",
                            (false, AuthMode::SignIn) => "Sign In",
                            (false, AuthMode::SignUp) => "Sign Up",
                        }}
                    </button>
                </form>

                <footer class="auth-page__footer">
                    <Show
                        when=move || mode() == AuthMode::SignIn
                        fallback=move || {
                            view! {
                                <p>
                                    "Already have an account? "
                                    <button type="button" class="auth-page__link" on:click=set_sign_in>
                                        "Sign In"
                                    </button>
                                </p>
                            }
                        }
                    >
                        <p>
                            "Don't have an account? "
                            <button type="button" class="auth-page__link" on:click=set_sign_up>
                                "Sign Up"
                            </button>
                        </p>
                    </Show>
                </footer>
            </div>
        </div>
    }
}

/// Labelled input bound to one draft field, with its validation caption.
#[component]
fn CredentialInput(
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    field: Field,
    auth: RwSignal<AuthFormState>,
) -> impl IntoView {
    let value = move || auth.with(|s| s.draft.field(field).to_owned());
    let field_error = move || auth.with(|s| s.field_errors.get(field).map(str::to_owned));

    view! {
        <label class="auth-page__label">
            {label}
            <input
                class=move || {
                    if field_error().is_some() {
                        "auth-page__input auth-page__input--invalid"
                    } else {
                        "auth-page__input"
                    }
                }
                type=input_type
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| {
                    auth.update(|s| s.update_field(field, event_target_value(&ev)));
                }
            />
        </label>
        {move || field_error().map(|message| view! { <p class="auth-page__field-error">{message}</p> })}
    }
}
