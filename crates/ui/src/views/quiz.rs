use dioxus::prelude::*;
use edumate_core::{QuestionView, QuizIntent};
use services::QuizRequest;
use tracing::warn;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{QuizOutcome, QuizVm, ReviewVm, start_quiz};

#[cfg(test)]
use super::test_harness::Handles;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Screen {
    Setup,
    Question(QuestionView),
    Finished(ReviewVm),
}

impl From<QuizOutcome> for Screen {
    fn from(outcome: QuizOutcome) -> Self {
        match outcome {
            QuizOutcome::Continue(question) => Self::Question(question),
            QuizOutcome::Finished(review) => Self::Finished(review),
        }
    }
}

fn option_class(selected: bool) -> &'static str {
    if selected { "option selected" } else { "option" }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut category = use_signal(String::new);
    let mut total = use_signal(|| "10".to_string());
    let mut screen = use_signal(|| Screen::Setup);
    let mut alert = use_signal(|| None::<String>);
    let mut starting = use_signal(|| false);
    let mut vm = use_signal(|| None::<QuizVm>);

    let quiz = ctx.quiz();
    let start = use_callback(move |()| {
        if starting() {
            return;
        }
        let quiz = quiz.clone();
        let request = QuizRequest::from_form(&category(), &total());
        starting.set(true);
        alert.set(None);
        spawn(async move {
            match start_quiz(&quiz, &request).await {
                Ok(started) => {
                    screen.set(started.outcome().into());
                    vm.set(Some(started));
                }
                Err(err) => alert.set(Some(err.message().to_string())),
            }
            starting.set(false);
        });
    });

    let quiz = ctx.quiz();
    let dispatch = use_callback(move |intent: QuizIntent| {
        let result = match vm.write().as_mut() {
            Some(current) => current.dispatch(intent),
            None => Err(ViewError::Unknown),
        };
        match result {
            Ok(QuizOutcome::Continue(question)) => {
                alert.set(None);
                screen.set(Screen::Question(question));
            }
            Ok(QuizOutcome::Finished(review)) => {
                alert.set(None);
                screen.set(Screen::Finished(review));
                let finished = vm.read().as_ref().map(|current| current.session().clone());
                if let Some(session) = finished {
                    let quiz = quiz.clone();
                    spawn(async move {
                        if let Err(err) = quiz.submit(&session).await {
                            warn!(%err, "quiz submission failed");
                        }
                    });
                }
            }
            Err(err) => alert.set(Some(err.message().to_string())),
        }
    });

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<Handles>() {
            handles.quiz_start.register(start);
            handles.quiz_dispatch.register(dispatch);
        }
    }

    rsx! {
        div { class: "page",
            h2 { "Quiz" }
            if let Some(message) = alert() {
                p { class: "message error", "{message}" }
            }
            match screen() {
                Screen::Setup => rsx! {
                    form {
                        id: "quizSetup",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            start.call(());
                        },
                        label {
                            "Category "
                            input {
                                placeholder: "general",
                                value: "{category}",
                                oninput: move |evt| category.set(evt.value()),
                            }
                        }
                        label {
                            "Number of questions "
                            input {
                                r#type: "number",
                                min: "1",
                                value: "{total}",
                                oninput: move |evt| total.set(evt.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            disabled: starting(),
                            if starting() { "Loading..." } else { "Start quiz" }
                        }
                    }
                },
                Screen::Question(question) => rsx! {
                    div { id: "quizGame",
                        p { class: "progress", "{question.progress_label()}" }
                        h3 { class: "question", "{question.text}" }
                        div { class: "options",
                            for option in question.options.clone() {
                                button {
                                    key: "{option.index}",
                                    class: option_class(option.selected),
                                    onclick: move |_| dispatch.call(QuizIntent::Select(option.index)),
                                    "{option.text}"
                                }
                            }
                        }
                        button {
                            id: "btnNext",
                            disabled: !question.can_advance,
                            onclick: move |_| dispatch.call(QuizIntent::Advance),
                            "Next"
                        }
                    }
                },
                Screen::Finished(review) => rsx! {
                    div { id: "quizResult",
                        h2 { "{review.score_label}" }
                        for (position, row) in review.rows.iter().enumerate() {
                            div { key: "{position}", dangerous_inner_html: "{row}" }
                        }
                        button { onclick: move |_| screen.set(Screen::Setup), "Try another quiz" }
                    }
                },
            }
        }
    }
}
