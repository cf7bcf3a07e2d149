use hitlist_core::db::{open_db, open_db_in_memory};
use hitlist_core::{
    Person, PersonRepository, PersonService, SqlitePersonRepository, StoreError,
};
use rusqlite::Connection;

fn fail_inserts(conn: &Connection) {
    conn.execute_batch(
        "CREATE TEMP TRIGGER reject_people BEFORE INSERT ON people
         BEGIN
             SELECT RAISE(ABORT, 'storage unavailable');
         END;",
    )
    .unwrap();
}

#[test]
fn add_then_list_returns_exactly_the_added_name() {
    for name in ["Ned", "", "Daenerys Stormborn", "Jaqen H'ghar", "Ygritte ❄", "瓦里斯"] {
        let conn = open_db_in_memory().unwrap();
        let store = PersonService::new(SqlitePersonRepository::new(&conn));

        let added = store.add(name).unwrap();
        let listed = store.list_all().unwrap();

        assert_eq!(listed.len(), 1, "name {name:?}");
        assert_eq!(listed[0], added);
        assert_eq!(listed[0].name, name);
    }
}

#[test]
fn add_keeps_whitespace_verbatim() {
    let conn = open_db_in_memory().unwrap();
    let store = PersonService::new(SqlitePersonRepository::new(&conn));

    store.add("  Hodor\n").unwrap();
    assert_eq!(store.list_all().unwrap()[0].name, "  Hodor\n");
}

#[test]
fn list_is_in_insertion_order_and_stable() {
    let conn = open_db_in_memory().unwrap();
    let store = PersonService::new(SqlitePersonRepository::new(&conn));

    let names = ["Robb", "Ned", "Arya", "Bran", "Arya"];
    for name in names {
        store.add(name).unwrap();
    }

    let first = store.list_all().unwrap();
    let second = store.list_all().unwrap();
    assert_eq!(first, second);

    let listed: Vec<&str> = first.iter().map(|person| person.name.as_str()).collect();
    assert_eq!(listed, names);
}

#[test]
fn duplicate_names_get_distinct_ids() {
    let conn = open_db_in_memory().unwrap();
    let store = PersonService::new(SqlitePersonRepository::new(&conn));

    let first = store.add("Jon").unwrap();
    let second = store.add("Jon").unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(store.list_all().unwrap().len(), 2);
}

#[test]
fn failed_insert_returns_error_and_leaves_store_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let store = PersonService::new(SqlitePersonRepository::new(&conn));
    store.add("Ned").unwrap();

    fail_inserts(&conn);
    let err = store.add("Robb").unwrap_err();
    assert!(matches!(err, StoreError::Db(_)));
    assert!(err.to_string().contains("storage unavailable"));

    let listed = store.list_all().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Ned");
}

#[test]
fn list_fails_when_table_is_gone() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);
    conn.execute_batch("DROP TABLE people;").unwrap();

    assert!(matches!(repo.list_people(), Err(StoreError::Db(_))));
}

#[test]
fn list_rejects_corrupted_identity() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO people (uuid, name) VALUES ('not-a-uuid', 'Theon');",
        [],
    )
    .unwrap();

    let repo = SqlitePersonRepository::new(&conn);
    let err = repo.list_people().unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(message) if message.contains("not-a-uuid")));
}

#[test]
fn records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hitlist.db");

    let added = {
        let conn = open_db(&path).unwrap();
        let store = PersonService::new(SqlitePersonRepository::new(&conn));
        store.add("Catelyn").unwrap()
    };

    let conn = open_db(&path).unwrap();
    let store = PersonService::new(SqlitePersonRepository::new(&conn));
    assert_eq!(store.list_all().unwrap(), vec![added]);
}

#[test]
fn person_serializes_id_and_name_only() {
    let person = Person::new("Sansa");
    let value = serde_json::to_value(&person).unwrap();

    assert_eq!(value["name"], "Sansa");
    assert_eq!(value["id"], person.id.to_string());
    assert_eq!(value.as_object().unwrap().len(), 2);
}
