use super::*;

#[test]
fn blank_submission_is_rejected() {
    let mut conversation = Conversation::new();
    assert!(conversation.submit("   ").is_none());
    assert!(conversation.messages().is_empty());
    assert_eq!(conversation.phase(), &Phase::Idle);
}

#[test]
fn submission_trims_and_appends_user_message() {
    let mut conversation = Conversation::new();
    let id = conversation.submit("  hello  ").unwrap();

    assert_eq!(conversation.messages().len(), 1);
    assert_eq!(conversation.messages()[0].id, id);
    assert_eq!(conversation.messages()[0].role, Role::User);
    assert_eq!(conversation.messages()[0].content, "hello");
    assert_eq!(conversation.phase(), &Phase::Submitting);
    assert!(conversation.is_loading());
}

#[test]
fn submission_while_loading_is_a_noop() {
    let mut conversation = Conversation::new();
    conversation.submit("first").unwrap();

    assert!(conversation.submit("second").is_none());
    assert_eq!(conversation.messages().len(), 1);
    assert_eq!(conversation.phase(), &Phase::Submitting);

    conversation.begin_stream().unwrap();
    assert!(conversation.submit("third").is_none());
    assert_eq!(conversation.messages().len(), 2);
}

#[test]
fn begin_stream_requires_submitting_phase() {
    let mut conversation = Conversation::new();
    assert!(conversation.begin_stream().is_none());

    conversation.submit("hi").unwrap();
    let id = conversation.begin_stream().unwrap();
    assert_eq!(conversation.messages()[1].id, id);
    assert_eq!(conversation.messages()[1].role, Role::Assistant);
    assert_eq!(conversation.messages()[1].content, "");
    assert_eq!(conversation.phase(), &Phase::Streaming);

    // Already streaming: a second placeholder must not appear.
    assert!(conversation.begin_stream().is_none());
    assert_eq!(conversation.messages().len(), 2);
}

#[test]
fn chunks_grow_only_the_active_message() {
    let mut conversation = Conversation::new();
    let user_id = conversation.submit("hi").unwrap();
    let assistant_id = conversation.begin_stream().unwrap();

    conversation.apply_chunk(assistant_id, "Hel");
    conversation.apply_chunk(assistant_id, "Hello");
    assert_eq!(conversation.messages()[1].content, "Hello");

    // Wrong id: ignored.
    conversation.apply_chunk(user_id, "clobbered");
    assert_eq!(conversation.messages()[0].content, "hi");
    assert_eq!(conversation.messages()[1].content, "Hello");
}

#[test]
fn completion_freezes_content() {
    let mut conversation = Conversation::new();
    conversation.submit("hi").unwrap();
    let id = conversation.begin_stream().unwrap();
    conversation.apply_chunk(id, "done");
    conversation.complete();

    assert_eq!(conversation.phase(), &Phase::Idle);
    assert!(!conversation.is_loading());

    // Stale chunk after completion must not land.
    conversation.apply_chunk(id, "done and more");
    assert_eq!(conversation.messages()[1].content, "done");
}

#[test]
fn empty_stream_leaves_empty_assistant_message() {
    let mut conversation = Conversation::new();
    conversation.submit("hi").unwrap();
    conversation.begin_stream().unwrap();
    conversation.complete();

    assert_eq!(conversation.messages()[1].content, "");
    assert_eq!(conversation.phase(), &Phase::Idle);
}

#[test]
fn failure_mid_stream_replaces_partial_answer() {
    let mut conversation = Conversation::new();
    conversation.submit("hi").unwrap();
    let id = conversation.begin_stream().unwrap();
    conversation.apply_chunk(id, "Hello, ");

    conversation.fail("connection dropped");

    assert_eq!(conversation.messages().len(), 2);
    assert_eq!(conversation.messages()[1].content, FALLBACK_NOTICE);
    assert_eq!(conversation.phase(), &Phase::Error("connection dropped".into()));
}

#[test]
fn failure_before_headers_leaves_no_placeholder() {
    let mut conversation = Conversation::new();
    conversation.submit("hi").unwrap();
    conversation.fail("request failed");

    assert_eq!(conversation.messages().len(), 1);
    assert_eq!(conversation.phase(), &Phase::Error("request failed".into()));
}

#[test]
fn next_submission_clears_error() {
    let mut conversation = Conversation::new();
    conversation.submit("hi").unwrap();
    conversation.fail("boom");

    assert!(conversation.submit("again").is_some());
    assert_eq!(conversation.phase(), &Phase::Submitting);
}

#[test]
fn dismiss_returns_to_idle() {
    let mut conversation = Conversation::new();
    conversation.submit("hi").unwrap();
    conversation.fail("boom");
    conversation.dismiss_error();
    assert_eq!(conversation.phase(), &Phase::Idle);

    // Dismissing outside Error does nothing.
    conversation.submit("hello").unwrap();
    conversation.dismiss_error();
    assert_eq!(conversation.phase(), &Phase::Submitting);
}

#[test]
fn reset_discards_the_session() {
    let mut conversation = Conversation::new();
    conversation.submit("hi").unwrap();
    let id = conversation.begin_stream().unwrap();
    conversation.apply_chunk(id, "partial");
    conversation.reset();

    assert!(conversation.messages().is_empty());
    assert_eq!(conversation.phase(), &Phase::Idle);
}

#[test]
fn request_payload_strips_ids_and_keeps_order() {
    let mut conversation = Conversation::new();
    conversation.submit("hello").unwrap();
    let id = conversation.begin_stream().unwrap();
    conversation.apply_chunk(id, "hi there");
    conversation.complete();
    conversation.submit("next question").unwrap();

    let payload = conversation.request_payload();
    assert_eq!(payload.len(), 3);
    assert_eq!(payload[0], ChatMessage { role: Role::User, content: "hello".into() });
    assert_eq!(payload[1], ChatMessage { role: Role::Assistant, content: "hi there".into() });
    assert_eq!(payload[2], ChatMessage { role: Role::User, content: "next question".into() });
}
