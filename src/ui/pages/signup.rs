// src/ui/pages/signup.rs - Account creation form

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::{
    components::{Alert, Button, Input},
    pages::AuthCard,
    router::Route,
    state::use_session,
};
use crate::utils;

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// Form-level check before the simulated account creation
pub fn validate_signup(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(())
}

#[component]
pub fn Signup() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let delay = session.manager.config().login_delay();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Err(message) = validate_signup(&password(), &confirm()) {
            error.set(Some(message.to_string()));
            return;
        }
        error.set(None);
        submitting.set(true);
        spawn(async move {
            utils::sleep(delay).await;
            submitting.set(false);
            navigator.push(Route::Onboarding {});
        });
    };

    let handle_google = move |_: MouseEvent| {
        let session = session.clone();
        spawn(async move {
            match session.login_with_google().await {
                Ok(_) => {
                    navigator.push(Route::Onboarding {});
                }
                Err(e) => error.set(Some(e.message)),
            }
        });
    };

    rsx! {
        AuthCard {
            title: "Create your account".to_string(),
            subtitle: "Start your 14-day free trial".to_string(),

            form {
                class: "space-y-5",
                onsubmit: handle_submit,

                if let Some(message) = error() {
                    Alert { variant: "error".to_string(), "{message}" }
                }

                Input {
                    id: "name".to_string(),
                    label: "Full name".to_string(),
                    value: name(),
                    required: true,
                    oninput: move |value: String| name.set(value)
                }
                Input {
                    input_type: "email".to_string(),
                    id: "email".to_string(),
                    label: "Work email".to_string(),
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
                Input {
                    input_type: "password".to_string(),
                    id: "confirm".to_string(),
                    label: "Confirm password".to_string(),
                    value: confirm(),
                    required: true,
                    oninput: move |value: String| confirm.set(value)
                }

                Button {
                    button_type: "submit".to_string(),
                    class: "w-full".to_string(),
                    loading: submitting(),
                    "Create account"
                }
            }

            Button {
                variant: "secondary".to_string(),
                class: "mt-4 w-full".to_string(),
                disabled: submitting(),
                onclick: handle_google,
                "Continue with Google"
            }

            p {
                class: "mt-6 text-center text-sm text-gray-600",
                "Already have an account? "
                Link { to: Route::Login {}, class: "font-medium text-indigo-600 hover:text-indigo-500", "Sign in" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_confirmation() {
        assert_eq!(validate_signup("secret", "secret"), Ok(()));
        assert_eq!(validate_signup("secret", "Secret"), Err(PASSWORD_MISMATCH));
        assert_eq!(validate_signup("", "x"), Err("Passwords do not match"));
    }
}
