use dioxus::prelude::*;
use edumate_core::model::{ChatTranscript, prepare_message};
use tracing::warn;

use crate::context::AppContext;
use crate::vm::map_chat_bubbles;

#[cfg(test)]
use super::test_harness::Handles;

#[component]
pub fn ChatView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut transcript = use_signal(ChatTranscript::new);
    let mut draft = use_signal(String::new);

    let history_chat = ctx.chat();
    use_future(move || {
        let chat = history_chat.clone();
        async move {
            match chat.history().await {
                Ok(history) => {
                    let mut turns = history.turns().to_vec();
                    turns.extend_from_slice(transcript.read().turns());
                    transcript.set(ChatTranscript::from_turns(turns));
                }
                Err(err) => warn!(%err, "chat history unavailable"),
            }
        }
    });

    let edit = use_callback(move |text: String| draft.set(text));

    let chat = ctx.chat();
    let mut sending = use_signal(|| false);
    let send = use_callback(move |()| {
        if *sending.peek() {
            return;
        }
        let Some(message) = prepare_message(&draft.peek()) else {
            return;
        };
        sending.set(true);
        transcript.write().push_user(message.clone());
        let chat = chat.clone();
        spawn(async move {
            match chat.send(&message).await {
                Ok(reply) => transcript.write().push_bot(reply),
                Err(err) => {
                    warn!(%err, "chat send failed");
                    transcript.write().push_failure(&err.detail());
                }
            }
            draft.set(String::new());
            sending.set(false);
        });
    });

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<Handles>() {
            handles.chat_input.register(edit);
            handles.chat_submit.register(send);
        }
    }

    let bubbles = map_chat_bubbles(&transcript.read());

    rsx! {
        div { class: "page",
            h2 { "Tutor chat" }
            div { id: "chatBox", class: "chat-box",
                for (position, bubble) in bubbles.into_iter().enumerate() {
                    div { key: "{position}", class: bubble.class,
                        div { class: "chat-bubble",
                            span { class: "avatar", "{bubble.avatar}" }
                            span { class: "msg-text", dangerous_inner_html: "{bubble.html}" }
                        }
                    }
                }
            }
            form {
                id: "chatForm",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    send.call(());
                },
                input {
                    id: "chatInput",
                    placeholder: "Ask something...",
                    value: "{draft}",
                    oninput: move |evt| edit.call(evt.value()),
                }
                button { r#type: "submit", disabled: sending(), "Send" }
            }
        }
    }
}
