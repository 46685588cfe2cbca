use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use edumate_core::model::Username;
use edumate_core::{ApiBase, QuizIntent};
use services::AppServices;
use services::api::ScriptedTransport;
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::{
    ChatView, HomeView, LeaderboardView, LoginView, QuizView, RegisterView, SplashView,
};

/// Slot a view fills with one of its callbacks so tests can fire it without DOM events.
pub(crate) struct TestHandle<T: 'static>(Rc<RefCell<Option<Callback<T>>>>);

impl<T: 'static> Clone for TestHandle<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: 'static> Default for TestHandle<T> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }
}

impl<T: 'static> TestHandle<T> {
    pub(crate) fn register(&self, callback: Callback<T>) {
        *self.0.borrow_mut() = Some(callback);
    }

    pub(crate) fn get(&self) -> Callback<T> {
        (*self.0.borrow()).expect("callback registered")
    }
}

#[derive(Clone, Default)]
pub(crate) struct Handles {
    pub auth_submit: TestHandle<(String, String)>,
    pub quiz_start: TestHandle<()>,
    pub quiz_dispatch: TestHandle<QuizIntent>,
    pub chat_input: TestHandle<String>,
    pub chat_submit: TestHandle<()>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Splash,
    Login,
    Register,
    Home,
    Quiz,
    Chat,
    Leaderboard,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    view: ViewKind,
    handles: Handles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Splash => rsx! { SplashView {} },
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Register => rsx! { RegisterView {} },
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Chat => rsx! { ChatView {} },
        ViewKind::Leaderboard => rsx! { LeaderboardView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: Arc<AppServices>,
    pub transport: Arc<ScriptedTransport>,
    pub handles: Handles,
}

impl ViewHarness {
    pub async fn login_as(&self, name: &str) {
        self.services
            .session()
            .set(&Username::new(name).expect("valid username"))
            .await
            .expect("store identity");
    }

    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Fire a registered callback inside the dom's runtime.
    pub fn fire<T: 'static>(&mut self, handle: &TestHandle<T>, value: T) {
        let callback = handle.get();
        self.dom.in_runtime(|| callback.call(value));
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Give spawned tasks a few turns to finish their scripted round trips.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let transport = Arc::new(ScriptedTransport::new());
    let services = Arc::new(AppServices::new(
        &Storage::in_memory(),
        ApiBase::explicit("http://127.0.0.1:8080").expect("valid base"),
        transport.clone(),
    ));
    let handles = Handles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::clone(&services),
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        services,
        transport,
        handles,
    }
}
