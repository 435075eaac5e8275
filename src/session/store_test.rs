use super::*;

fn sample_session() -> Session {
    Session {
        token: "t1".to_owned(),
        user: User {
            id: 1,
            name: "Ann".to_owned(),
            email: "a@b.com".to_owned(),
            role: "user".to_owned(),
        },
    }
}

// =============================================================
// Round-trip
// =============================================================

#[test]
fn persisted_session_round_trips() {
    let store = MemoryStore::new();
    store.set(&sample_session()).expect("set");
    assert_eq!(store.get(), Some(sample_session()));
}

#[test]
fn set_writes_the_two_entry_layout() {
    let store = MemoryStore::new();
    store.set(&sample_session()).expect("set");

    assert_eq!(store.entry(TOKEN_KEY).as_deref(), Some("t1"));
    let user_json = store.entry(USER_KEY).expect("user entry");
    let value: serde_json::Value = serde_json::from_str(&user_json).expect("valid JSON");
    assert_eq!(
        value,
        serde_json::json!({"id": 1, "name": "Ann", "email": "a@b.com", "role": "user"})
    );
}

#[test]
fn last_write_wins() {
    let store = MemoryStore::new();
    store.set(&sample_session()).expect("set");

    let mut second = sample_session();
    second.token = "t2".to_owned();
    second.user.name = "Bea".to_owned();
    store.set(&second).expect("set");

    assert_eq!(store.get(), Some(second));
}

// =============================================================
// Partial and corrupt layouts
// =============================================================

#[test]
fn token_without_user_reads_as_no_session() {
    let store = MemoryStore::new();
    store.set_entry(TOKEN_KEY, "t1");
    assert_eq!(store.get(), None);
}

#[test]
fn user_without_token_reads_as_no_session() {
    let store = MemoryStore::new();
    store.set_entry(USER_KEY, r#"{"id":1,"name":"Ann","email":"a@b.com","role":"user"}"#);
    assert_eq!(store.get(), None);
}

#[test]
fn unparsable_user_entry_reads_as_no_session() {
    let store = MemoryStore::new();
    store.set_entry(TOKEN_KEY, "t1");
    store.set_entry(USER_KEY, "not json");
    assert_eq!(store.get(), None);
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_removes_both_entries() {
    let store = MemoryStore::new();
    store.set(&sample_session()).expect("set");
    store.clear();
    assert_eq!(store.entry(TOKEN_KEY), None);
    assert_eq!(store.entry(USER_KEY), None);
    assert_eq!(store.get(), None);
}

#[test]
fn clear_on_empty_store_is_a_no_op() {
    let store = MemoryStore::new();
    store.clear();
    store.clear();
    assert_eq!(store.get(), None);
}

// =============================================================
// LocalStore outside the browser
// =============================================================

#[test]
fn local_store_is_inert_without_a_window() {
    let store = LocalStore;
    assert_eq!(store.get(), None);
    store.clear();
}
