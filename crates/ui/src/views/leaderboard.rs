use dioxus::prelude::*;
use edumate_core::model::LeaderboardEntry;
use tracing::warn;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[component]
pub fn LeaderboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let leaderboard = ctx.leaderboard();

    let mut resource = use_resource(move || {
        let leaderboard = leaderboard.clone();
        async move {
            leaderboard.top().await.map_err(|err| {
                warn!(%err, "leaderboard unavailable");
                ViewError::Message(err.user_message())
            })
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "Leaderboard" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(entries) => rsx! {
                    if entries.is_empty() {
                        p { "No scores yet." }
                    } else {
                        ol { class: "leaderboard",
                            for entry in entries {
                                LeaderRow { key: "{entry.rank}", entry }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button { onclick: move |_| resource.restart(), "Retry" }
                },
            }
        }
    }
}

#[component]
fn LeaderRow(entry: LeaderboardEntry) -> Element {
    rsx! {
        li {
            span { class: "rank", "#{entry.rank} " }
            span { class: "name", "{entry.username}" }
            span { class: "score", " {entry.total_score} pts" }
        }
    }
}
