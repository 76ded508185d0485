// Session store tests - greeting seed, append-only history, isolation

use mathsolver_core::session::{SessionManager, SessionStore};
use mathsolver_core::types::{ConversationTurn, MessageRole};

#[test]
fn store_is_seeded_with_one_greeting() {
    let store = SessionStore::new("Hi! I'm a Math assistant.");
    assert_eq!(store.len(), 1);
    assert_eq!(store.all()[0].role(), MessageRole::Assistant);
}

#[test]
fn turns_keep_insertion_order() {
    let mut store = SessionStore::new("Hi");
    for index in 0..5 {
        store.append(ConversationTurn::user(format!("q{index}")));
        store.append(ConversationTurn::assistant(format!("a{index}")));
    }
    assert_eq!(store.len(), 11);
    assert_eq!(store.all()[9].content(), "q4");
    assert_eq!(store.last_user_question(), Some("q4"));
}

#[tokio::test]
async fn managers_hand_out_distinct_sessions() {
    let manager = SessionManager::new("Hi");
    let (a, store_a) = manager.create().await;
    let (b, store_b) = manager.create().await;

    store_a.lock().await.append(ConversationTurn::user("private"));

    assert_ne!(a, b);
    assert_eq!(store_b.lock().await.last_user_question(), None);
    assert!(manager.get(&a).await.is_some());
    assert!(manager.get("unknown").await.is_none());
}
