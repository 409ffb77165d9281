use super::*;

#[test]
fn fresh_store_loads_defaults() {
    let store = MemoryStore::default();
    assert_eq!(load(&store), SessionFlags::default());
}

#[test]
fn save_then_load_round_trips() {
    let mut store = MemoryStore::default();
    let flags = SessionFlags { authenticated: true, intro_shown: false };
    save(&mut store, flags);

    assert_eq!(load(&store), flags);
}

#[test]
fn document_uses_camel_case_keys() {
    let mut store = MemoryStore::default();
    save(&mut store, SessionFlags { authenticated: false, intro_shown: true });

    let raw = store.get(SESSION_KEY).unwrap();
    assert_eq!(raw, r#"{"authenticated":false,"introShown":true}"#);
}

#[test]
fn corrupt_document_degrades_to_defaults() {
    let mut store = MemoryStore::default();
    store.set(SESSION_KEY, "{not json");
    assert_eq!(load(&store), SessionFlags::default());
}

#[test]
fn partial_document_fills_missing_fields() {
    let mut store = MemoryStore::default();
    store.set(SESSION_KEY, r#"{"authenticated":true}"#);
    assert_eq!(load(&store), SessionFlags { authenticated: true, intro_shown: false });
}

#[test]
fn clear_removes_the_document() {
    let mut store = MemoryStore::default();
    save(&mut store, SessionFlags { authenticated: true, intro_shown: true });
    clear(&mut store);

    assert_eq!(store.get(SESSION_KEY), None);
    assert_eq!(load(&store), SessionFlags::default());
}
