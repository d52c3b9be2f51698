use std::io::Write;

use user_dao::{InMemoryUserStore, StoreConfig, User};

#[test]
fn seed_store_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"users": [{{"name": "bob", "password": "pw1"}}], "current_user": "bob"}}"#
    )
    .unwrap();

    let config = StoreConfig::from_file(file.path()).unwrap();
    let mut store = InMemoryUserStore::from_config(config);

    assert!(store.exists_by_name("bob"));
    assert_eq!(store.current_user(), Some("bob"));

    store.save(User::new("carol", "pw2"));
    assert_eq!(store.len(), 2);
}
