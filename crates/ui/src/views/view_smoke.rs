use edumate_core::QuizIntent;

use super::test_harness::{ViewKind, setup_view_harness};

const TWO_QUESTIONS: &str = r#"{
    "quiz_id": "q-1",
    "questions": [
        {"q": "Which tag is <script>?", "options": ["<b>", "<script>"], "answer": "B"},
        {"question": "2 + 2?", "options": ["3", "4"], "answer": "1"}
    ]
}"#;

#[tokio::test(flavor = "current_thread")]
async fn splash_view_smoke_renders_brand() {
    let mut harness = setup_view_harness(ViewKind::Splash);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("EduMate"), "missing brand in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_shows_validation_error() {
    let mut harness = setup_view_harness(ViewKind::Login);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Password"), "missing form in {html}");

    let submit = harness.handles.auth_submit.clone();
    harness.fire(&submit, ("ana".to_string(), String::new()));
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Username and password are required."),
        "missing validation message in {html}"
    );
    assert!(harness.transport.requests().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_confirms_and_stores_identity() {
    let mut harness = setup_view_harness(ViewKind::Login);
    harness.transport.push_response(200, r#"{"success": true}"#);
    harness.rebuild();

    let submit = harness.handles.auth_submit.clone();
    harness.fire(&submit, ("ana".to_string(), "secret".to_string()));
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Login successful"), "missing confirmation in {html}");
    let stored = harness.services.session().get().await.unwrap();
    assert_eq!(stored.map(|name| name.as_str().to_string()), Some("ana".to_string()));
}

#[tokio::test(flavor = "current_thread")]
async fn register_view_smoke_shows_server_message() {
    let mut harness = setup_view_harness(ViewKind::Register);
    harness
        .transport
        .push_response(409, r#"{"success": false, "msg": "Username taken"}"#);
    harness.rebuild();

    let submit = harness.handles.auth_submit.clone();
    harness.fire(&submit, ("ana".to_string(), "pw".to_string()));
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Username taken"), "missing server message in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_greets_identity() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.login_as("ana").await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Welcome, ana!"), "missing greeting in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_rejects_without_identity() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();

    let start = harness.handles.quiz_start.clone();
    harness.fire(&start, ());
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Please log in first."), "missing error in {html}");
    assert!(html.contains("quizSetup"), "left setup in {html}");
    assert!(harness.transport.requests().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_empty_payload_stays_in_setup() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.login_as("ana").await;
    harness.transport.push_response(200, r#"{"questions": []}"#);
    harness.rebuild();

    let start = harness.handles.quiz_start.clone();
    harness.fire(&start, ());
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Could not start the quiz: No questions available."),
        "missing error in {html}"
    );
    assert!(html.contains("quizSetup"), "left setup in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_plays_through_and_escapes_review() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.login_as("ana").await;
    harness.transport.push_response(200, TWO_QUESTIONS);
    harness
        .transport
        .push_response(200, r#"{"correct": 2, "total": 2, "score_percent": 100}"#);
    harness.rebuild();

    let start = harness.handles.quiz_start.clone();
    harness.fire(&start, ());
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "missing progress in {html}");
    assert!(html.contains("Which tag is &lt;script&gt;?"), "unescaped question in {html}");

    let dispatch = harness.handles.quiz_dispatch.clone();
    harness.fire(&dispatch, QuizIntent::Select(0));
    harness.fire(&dispatch, QuizIntent::Select(1));
    harness.fire(&dispatch, QuizIntent::Advance);
    let html = harness.render();
    assert!(html.contains("Question 2 of 2"), "did not advance in {html}");

    harness.fire(&dispatch, QuizIntent::Select(1));
    harness.fire(&dispatch, QuizIntent::Advance);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Your score: 100% (2/2)"), "missing score in {html}");
    assert!(html.contains("&lt;script&gt;"), "missing escaped option in {html}");
    assert!(!html.contains("<script>"), "raw markup leaked in {html}");

    let sent = harness.transport.requests();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].url, "http://127.0.0.1:8080/api/quiz/q-1/submit");

    harness.fire(&dispatch, QuizIntent::Advance);
    let html = harness.render();
    assert!(html.contains("Your score: 100% (2/2)"), "re-entered quiz in {html}");
    assert!(html.contains("Something went wrong"), "missing alert in {html}");
    assert_eq!(harness.transport.requests().len(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn chat_view_smoke_escapes_history_and_replies() {
    let mut harness = setup_view_harness(ViewKind::Chat);
    harness.login_as("ana").await;
    harness.transport.push_response(
        200,
        r#"{"history": [{"role": "bot", "message": "<script>alert(1)</script>"}]}"#,
    );
    harness
        .transport
        .push_response(200, r#"{"reply": "Hi <b>there</b>"}"#);
    harness.transport.push_response(500, r#"{"error": "Model overloaded"}"#);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"),
        "missing escaped history in {html}"
    );
    assert!(!html.contains("<script>"), "raw markup leaked in {html}");

    let input = harness.handles.chat_input.clone();
    let submit = harness.handles.chat_submit.clone();

    harness.fire(&input, "   ".to_string());
    harness.fire(&submit, ());
    assert_eq!(harness.transport.requests().len(), 1);

    harness.fire(&input, "  hello ".to_string());
    let html = harness.render();
    assert!(html.contains(r#"value="  hello ""#), "draft not rendered in {html}");

    harness.fire(&submit, ());
    harness.fire(&submit, ());
    harness.settle().await;

    assert_eq!(harness.transport.requests().len(), 2);
    let html = harness.render();
    assert!(
        html.contains("Hi &lt;b&gt;there&lt;/b&gt;"),
        "missing escaped reply in {html}"
    );
    assert_eq!(html.matches(r#"class="msg-text""#).count(), 3, "{html}");
    assert!(!html.contains(r#"value="  hello ""#), "draft kept after reply in {html}");

    harness.fire(&input, "again".to_string());
    harness.fire(&submit, ());
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Failed to send message: Model overloaded"),
        "missing failure turn in {html}"
    );
    assert!(!html.contains(r#"value="again""#), "draft kept after failure in {html}");
    assert_eq!(harness.transport.requests().len(), 3);
}

#[tokio::test(flavor = "current_thread")]
async fn leaderboard_view_smoke_lists_leaders() {
    let mut harness = setup_view_harness(ViewKind::Leaderboard);
    harness.transport.push_response(
        200,
        r#"{"leaders": [{"username": "budi", "total_score": 30}, {"username": "ana", "total_score": 20}]}"#,
    );
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("budi"), "missing leader in {html}");
    assert!(html.contains("30 pts"), "missing score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn leaderboard_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness(ViewKind::Leaderboard);
    harness.transport.push_response(500, "");
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Could not load the leaderboard."),
        "missing error in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}
