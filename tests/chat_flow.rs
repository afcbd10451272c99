use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use chat_window::chat::{
    Author, BackendError, ChatRequest, ChatState, FAILURE_PREFIX, Message, MessagingBackend,
    exchange,
};
use chat_window::theme::Theme;

/// Fake backend that replays canned outcomes and records what it was sent.
#[derive(Default)]
struct ScriptedBackend {
    outcomes: Mutex<VecDeque<Result<Message, BackendError>>>,
    seen: Mutex<Vec<ChatRequest>>,
}

impl ScriptedBackend {
    fn replying(outcomes: impl IntoIterator<Item = Result<Message, BackendError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            seen: Mutex::default(),
        }
    }

    fn echo() -> Self {
        Self::default()
    }

    fn requests(&self) -> Vec<ChatRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessagingBackend for ScriptedBackend {
    async fn send(&self, request: &ChatRequest) -> Result<Message, BackendError> {
        self.seen.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Message::bot(format!("echo: {}", request.draft_text))))
    }
}

/// Type `draft` and submit it, running the exchange to completion.
/// Returns whether the submit was accepted.
async fn submit(state: &mut ChatState, backend: &ScriptedBackend, draft: &str) -> bool {
    state.set_draft(draft);
    let Some(pending) = state.begin_submit() else {
        return false;
    };
    let outcome = exchange(backend, &pending).await;
    state.finish(pending, outcome);
    true
}

#[tokio::test]
async fn test_each_submit_adds_user_and_bot_record_in_order() {
    let backend = ScriptedBackend::echo();
    let mut state = ChatState::new();
    let drafts = ["hello", "", "how are you?", "   ", "**bold** question", "\n"];

    let mut expected = Vec::new();
    for draft in drafts {
        let before = state.messages().len();
        let accepted = submit(&mut state, &backend, draft).await;

        if accepted {
            expected.push(Message::user(draft.trim()));
            expected.push(Message::bot(format!("echo: {}", draft.trim())));
            assert_eq!(state.messages().len(), before + 2);
        } else {
            assert_eq!(state.messages().len(), before);
        }
    }

    assert_eq!(state.messages(), expected.as_slice());
    assert_eq!(backend.requests().len(), 3);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_context_carries_prior_conversation() {
    let backend = ScriptedBackend::echo();
    let mut state = ChatState::new();

    submit(&mut state, &backend, "first").await;
    submit(&mut state, &backend, "second").await;

    let requests = backend.requests();
    assert!(requests[0].conversation_context.is_empty());
    assert_eq!(
        requests[1].conversation_context,
        vec![Message::user("first"), Message::bot("echo: first")]
    );
}

#[tokio::test]
async fn test_submit_while_loading_leaves_messages_untouched() {
    let backend = ScriptedBackend::echo();
    let mut state = ChatState::new();

    state.set_draft("slow question");
    let pending = state.begin_submit().unwrap();
    let snapshot = state.messages().to_vec();

    // A second submit lands before the first exchange resolves.
    state.set_draft("impatient follow-up");
    assert!(state.begin_submit().is_none());
    assert_eq!(state.messages(), snapshot.as_slice());

    let outcome = exchange(&backend, &pending).await;
    state.finish(pending, outcome);

    assert_eq!(state.messages().len(), 2);
    assert_eq!(state.draft(), "impatient follow-up");
    assert!(state.can_submit());
}

#[tokio::test]
async fn test_failure_surfaces_notice_and_allows_retry() {
    let backend = ScriptedBackend::replying([
        Err(BackendError::Status {
            status: 500,
            message: "index offline".into(),
        }),
        Ok(Message::bot("recovered")),
    ]);
    let mut state = ChatState::new();

    assert!(submit(&mut state, &backend, "question").await);
    let notice = state.messages().last().unwrap().clone();
    assert_eq!(notice.author, Author::Bot);
    assert!(notice.is_error);
    assert!(notice.text.starts_with(FAILURE_PREFIX));
    assert!(notice.text.contains("index offline"));
    assert!(!state.is_loading());
    assert_eq!(state.draft(), "question");

    // Retry with the kept draft.
    let draft = state.draft().to_owned();
    assert!(submit(&mut state, &backend, &draft).await);
    assert_eq!(state.messages().last().unwrap(), &Message::bot("recovered"));
    assert_eq!(state.messages().len(), 4);

    // The failure notice is never echoed back to the backend.
    let retry = &backend.requests()[1];
    assert_eq!(retry.conversation_context, vec![Message::user("question")]);
}

#[tokio::test]
async fn test_empty_reply_counts_as_failure() {
    let backend = ScriptedBackend::replying([Ok(Message::bot(""))]);
    let mut state = ChatState::new();

    submit(&mut state, &backend, "anything?").await;

    let last = state.messages().last().unwrap();
    assert!(last.is_error);
    assert!(!state.is_loading());
}

#[test]
fn test_theme_toggle_round_trip() {
    let mut state = ChatState::new();
    let original = state.theme();

    state.toggle_theme();
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(state.theme().scope(), "dark");

    state.toggle_theme();
    assert_eq!(state.theme(), original);
}
