// src/ui/pages/login.rs - Email/password and Google sign-in

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::catalog::{DEMO_EMAIL, DEMO_PASSWORD};
use crate::ui::{
    components::{Alert, Button, Input},
    pages::AuthCard,
    router::Route,
    state::use_session,
};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials. Try boss@reon.ai / reon123";

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut login_error = use_signal(|| None::<String>);
    let pending = session.pending;

    let handle_submit = {
        let session = session.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            login_error.set(None);
            let session = session.clone();
            spawn(async move {
                match session.login(&email(), &password()).await {
                    Ok(true) => {
                        navigator.push(Route::Overview {});
                    }
                    Ok(false) => login_error.set(Some(INVALID_CREDENTIALS.to_string())),
                    Err(e) => {
                        tracing::warn!("Sign-in failed: {}", e);
                        login_error.set(Some(e.message));
                    }
                }
            });
        }
    };

    let handle_google = move |_: MouseEvent| {
        login_error.set(None);
        let session = session.clone();
        spawn(async move {
            match session.login_with_google().await {
                Ok(_) => {
                    navigator.push(Route::Onboarding {});
                }
                Err(e) => login_error.set(Some(e.message)),
            }
        });
    };

    rsx! {
        AuthCard {
            title: "Welcome back".to_string(),
            subtitle: "Sign in to your Reon.ai workspace".to_string(),

            form {
                class: "space-y-5",
                onsubmit: handle_submit,

                if let Some(error) = login_error() {
                    Alert { variant: "error".to_string(), "{error}" }
                }

                Alert {
                    variant: "info".to_string(),
                    "Demo account: {DEMO_EMAIL} / {DEMO_PASSWORD}"
                }

                Input {
                    input_type: "email".to_string(),
                    id: "email".to_string(),
                    label: "Email".to_string(),
                    placeholder: "you@company.com".to_string(),
                    value: email(),
                    required: true,
                    oninput: move |value: String| email.set(value)
                }
                Input {
                    input_type: "password".to_string(),
                    id: "password".to_string(),
                    label: "Password".to_string(),
                    value: password(),
                    required: true,
                    oninput: move |value: String| password.set(value)
                }

                Button {
                    button_type: "submit".to_string(),
                    class: "w-full".to_string(),
                    loading: pending(),
                    if pending() { "Signing in..." } else { "Sign in" }
                }
            }

            div {
                class: "mt-6",
                div {
                    class: "relative flex justify-center text-sm",
                    span { class: "px-2 bg-white text-gray-500", "or" }
                }
                Button {
                    variant: "secondary".to_string(),
                    class: "mt-4 w-full".to_string(),
                    disabled: pending(),
                    onclick: handle_google,
                    "Continue with Google"
                }
            }

            p {
                class: "mt-6 text-center text-sm text-gray-600",
                "Don't have an account? "
                Link { to: Route::Signup {}, class: "font-medium text-indigo-600 hover:text-indigo-500", "Sign up" }
            }
        }
    }
}
