use super::*;

#[test]
fn new_store_holds_only_the_greeting() {
    let store = ConversationStore::new();
    assert_eq!(store.current().len(), 1);
    let first = &store.current()[0];
    assert_eq!(first.role, Role::Model);
    assert_eq!(first.text, persona::GREETING);
}

#[test]
fn append_preserves_insertion_order() {
    let mut store = ConversationStore::new();
    store.append(Message::user("first"));
    store.append(Message::model("second"));
    store.append(Message::user("third"));

    let texts: Vec<&str> = store.current().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec![persona::GREETING, "first", "second", "third"]);
}

#[test]
fn reset_restores_the_singleton_greeting() {
    let mut store = ConversationStore::new();
    store.append(Message::user("hello"));
    store.append(Message::model("hi"));

    store.reset();
    assert_eq!(store.current().len(), 1);
    assert_eq!(store.current()[0].text, persona::GREETING);

    // Idempotent: a second reset yields the same singleton log.
    store.reset();
    assert_eq!(store.current().len(), 1);
    assert_eq!(store.current()[0].text, persona::GREETING);
    assert_eq!(store.current()[0].role, Role::Model);
}

#[test]
fn subscribers_receive_append_and_reset_events() {
    let mut store = ConversationStore::new();
    let mut rx = store.subscribe();

    store.append(Message::user("hello"));
    store.reset();

    match rx.try_recv().unwrap() {
        ChatEvent::Appended(message) => {
            assert_eq!(message.role, Role::User);
            assert_eq!(message.text, "hello");
        }
        ChatEvent::Reset => panic!("expected Appended first"),
    }
    assert!(matches!(rx.try_recv().unwrap(), ChatEvent::Reset));
    assert!(rx.try_recv().is_err());
}

#[test]
fn closed_subscribers_are_pruned_on_publish() {
    let mut store = ConversationStore::new();
    let rx = store.subscribe();
    drop(rx);

    store.append(Message::user("hello"));
    assert!(store.watchers.is_empty());
}

#[test]
fn role_serializes_to_wire_names() {
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    assert_eq!(serde_json::to_string(&Role::Model).unwrap(), "\"model\"");
    assert_eq!(Role::User.wire_name(), "user");
    assert_eq!(Role::Model.wire_name(), "model");
}
