use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use services::{AuthOutcome, AuthRedirect};

use crate::context::AppContext;
use crate::routes::Route;

#[cfg(test)]
use super::test_harness::Handles;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    Login,
    Register,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Notice {
    Info(&'static str),
    Error(String),
}

#[component]
pub fn LoginView() -> Element {
    rsx! {
        div { class: "page",
            h2 { "Log in" }
            AuthForm { mode: AuthMode::Login }
            p {
                "No account yet? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}

#[component]
pub fn RegisterView() -> Element {
    rsx! {
        div { class: "page",
            h2 { "Register" }
            AuthForm { mode: AuthMode::Register }
            p {
                "Already registered? "
                Link { to: Route::Login {}, "Log in" }
            }
        }
    }
}

fn redirect_route(outcome: &AuthOutcome) -> Route {
    match outcome.redirect {
        AuthRedirect::Home => Route::Home {},
        AuthRedirect::Login => Route::Login {},
    }
}

#[component]
fn AuthForm(mode: AuthMode) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut notice = use_signal(|| None::<Notice>);
    let mut busy = use_signal(|| false);

    let submit = use_callback(move |(name, secret): (String, String)| {
        if busy() {
            return;
        }
        let auth = ctx.auth();
        busy.set(true);
        notice.set(None);
        spawn(async move {
            let result = match mode {
                AuthMode::Login => auth.login(&name, &secret).await,
                AuthMode::Register => auth.register(&name, &secret).await,
            };
            match result {
                Ok(outcome) => {
                    notice.set(Some(Notice::Info(outcome.message)));
                    tokio::time::sleep(outcome.delay).await;
                    navigator.replace(redirect_route(&outcome));
                }
                Err(err) => notice.set(Some(Notice::Error(err.user_message()))),
            }
            busy.set(false);
        });
    });

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<Handles>() {
            handles.auth_submit.register(submit);
        }
    }

    let label = match mode {
        AuthMode::Login => "Log in",
        AuthMode::Register => "Register",
    };

    rsx! {
        form {
            class: "auth-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                submit.call((username(), password()));
            },
            input {
                r#type: "text",
                placeholder: "Username",
                value: "{username}",
                oninput: move |evt| username.set(evt.value()),
            }
            input {
                r#type: "password",
                placeholder: "Password",
                value: "{password}",
                oninput: move |evt| password.set(evt.value()),
            }
            button { r#type: "submit", disabled: busy(), "{label}" }
        }
        match notice() {
            Some(Notice::Info(message)) => rsx! {
                p { class: "message ok", "{message}" }
            },
            Some(Notice::Error(message)) => rsx! {
                p { class: "message error", "{message}" }
            },
            None => rsx! {},
        }
    }
}
