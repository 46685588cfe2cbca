use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};
use tracing::warn;

use crate::context::AppContext;
use crate::views::{
    ChatView, HomeView, LeaderboardView, LoginView, QuizView, RegisterView, SplashView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", SplashView)] Splash {},
    #[route("/login", LoginView)] Login {},
    #[route("/register", RegisterView)] Register {},
    #[layout(Layout)]
        #[route("/home", HomeView)] Home {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/chat", ChatView)] Chat {},
        #[route("/leaderboard", LeaderboardView)] Leaderboard {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let on_logout = move |_| {
        let auth = ctx.auth();
        spawn(async move {
            if let Err(err) = auth.logout().await {
                warn!(%err, "logout failed");
            }
            navigator.replace(Route::Login {});
        });
    };

    rsx! {
        nav { class: "sidebar",
            h1 { "EduMate" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Quiz {}, "Quiz" } }
                li { Link { to: Route::Chat {}, "Tutor chat" } }
                li { Link { to: Route::Leaderboard {}, "Leaderboard" } }
            }
            button { id: "btnLogout", class: "logout", onclick: on_logout, "Log out" }
        }
    }
}
