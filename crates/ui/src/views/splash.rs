use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;

pub const SPLASH_DELAY: Duration = Duration::from_millis(1500);

#[component]
pub fn SplashView() -> Element {
    let navigator = use_navigator();

    use_future(move || async move {
        tokio::time::sleep(SPLASH_DELAY).await;
        navigator.replace(Route::Login {});
    });

    rsx! {
        div { class: "splash",
            h1 { "EduMate" }
            p { "Loading..." }
        }
    }
}
