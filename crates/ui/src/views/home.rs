use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = ctx.session();

    let resource = use_resource(move || {
        let session = session.clone();
        async move {
            let identity = session.get().await.map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(identity.map(|name| name.as_str().to_string()))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "Home" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(Some(name)) => rsx! {
                    p { "Welcome, {name}!" }
                    ul {
                        li { Link { to: Route::Quiz {}, "Take a quiz" } }
                        li { Link { to: Route::Chat {}, "Ask the tutor" } }
                        li { Link { to: Route::Leaderboard {}, "See the leaderboard" } }
                    }
                },
                ViewState::Ready(None) => rsx! {
                    p {
                        "You are not logged in. "
                        Link { to: Route::Login {}, "Log in" }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}
