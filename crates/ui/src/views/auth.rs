use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::SubmitState;
use crate::views::actions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }
}

#[component]
pub fn LoginView() -> Element {
    rsx! { CredentialsForm { mode: AuthMode::Login } }
}

#[component]
pub fn RegisterView() -> Element {
    rsx! { CredentialsForm { mode: AuthMode::Register } }
}

#[component]
fn CredentialsForm(mode: AuthMode) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submit_state = use_signal(|| SubmitState::Idle);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submit_state().is_submitting() {
            return;
        }
        let auth = ctx.auth();
        let username = username();
        let password = password();
        spawn(async move {
            submit_state.set(SubmitState::Submitting);
            let outcome = match mode {
                AuthMode::Login => actions::login(&auth, &username, &password).await,
                AuthMode::Register => actions::register(&auth, &username, &password).await,
            };
            match outcome {
                Ok(route) => {
                    submit_state.set(SubmitState::Idle);
                    let _ = navigator.push(route);
                }
                Err(err) => submit_state.set(SubmitState::Failed(err)),
            }
        });
    };

    let state = submit_state();
    let title = mode.title();
    rsx! {
        div { class: "page auth-page",
            h1 { class: "view-title", "{title}" }
            if let Some(message) = state.error_message() {
                p { class: "form-error", "{message}" }
            }
            form { class: "form", onsubmit: on_submit,
                input {
                    r#type: "text",
                    placeholder: "Username",
                    required: true,
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: state.is_submitting(),
                    "{title}"
                }
            }
            match mode {
                AuthMode::Login => rsx! {
                    p { class: "auth-switch",
                        "Don't have an account? "
                        Link { to: Route::Register {}, "Register" }
                    }
                },
                AuthMode::Register => rsx! {
                    p { class: "auth-switch",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Login" }
                    }
                },
            }
        }
    }
}
