use hitlist_core::db::open_db_in_memory;
use hitlist_core::{
    AddOutcome, FixedPrompt, ListScreen, ListView, NamePrompt, PersonService, PromptOutcome,
    PromptRequest, RefreshOutcome, RowView, SqlitePersonRepository, ADD_NAME_PROMPT,
};
use rusqlite::Connection;

#[derive(Default)]
struct TableSpy {
    last_rows: Vec<RowView>,
    reloads: usize,
    errors: Vec<String>,
}

impl ListView for TableSpy {
    fn reload(&mut self, rows: &[RowView]) {
        self.last_rows = rows.to_vec();
        self.reloads += 1;
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

/// Records the prompt it was shown before answering.
struct ScriptedPrompt {
    answer: PromptOutcome,
    shown: Option<PromptRequest>,
}

impl NamePrompt for ScriptedPrompt {
    fn ask(&mut self, request: &PromptRequest) -> PromptOutcome {
        self.shown = Some(*request);
        self.answer.clone()
    }
}

fn save(name: &str) -> FixedPrompt {
    FixedPrompt(PromptOutcome::Save(name.to_string()))
}

fn screen(conn: &Connection) -> ListScreen<SqlitePersonRepository<'_>, TableSpy> {
    ListScreen::new(
        PersonService::new(SqlitePersonRepository::new(conn)),
        TableSpy::default(),
    )
}

#[test]
fn ned_then_robb_end_to_end() {
    let conn = open_db_in_memory().unwrap();
    let mut screen = screen(&conn);
    assert_eq!(
        screen.on_screen_shown(),
        RefreshOutcome::Refreshed { count: 0 }
    );

    assert!(matches!(
        screen.on_add_requested(&mut save("Ned")),
        AddOutcome::Added(_)
    ));
    assert_eq!(
        screen.on_screen_shown(),
        RefreshOutcome::Refreshed { count: 1 }
    );
    assert_eq!(screen.row_label(0), Some("Ned"));

    assert!(matches!(
        screen.on_add_requested(&mut save("Robb")),
        AddOutcome::Added(_)
    ));
    screen.on_screen_shown();

    assert_eq!(screen.row_count(), 2);
    let labels: Vec<&str> = screen
        .view()
        .last_rows
        .iter()
        .map(|row| row.label.as_str())
        .collect();
    assert!(labels.contains(&"Ned"));
    assert!(labels.contains(&"Robb"));
    assert!(screen.view().errors.is_empty());
}

#[test]
fn add_flow_shows_new_name_prompt() {
    let conn = open_db_in_memory().unwrap();
    let mut screen = screen(&conn);
    let mut prompt = ScriptedPrompt {
        answer: PromptOutcome::Save(String::new()),
        shown: None,
    };

    let outcome = screen.on_add_requested(&mut prompt);

    assert_eq!(prompt.shown, Some(ADD_NAME_PROMPT));
    assert_eq!(ADD_NAME_PROMPT.title, "New Name");
    assert_eq!(ADD_NAME_PROMPT.message, "Add a new name");
    assert!(matches!(outcome, AddOutcome::Added(person) if person.name.is_empty()));
    assert_eq!(screen.row_label(0), Some(""));
}

#[test]
fn saved_name_is_visible_without_refresh_and_matches_storage() {
    let conn = open_db_in_memory().unwrap();
    let mut screen = screen(&conn);
    screen.on_screen_shown();

    let AddOutcome::Added(person) = screen.on_add_requested(&mut save("Brienne")) else {
        panic!("save should succeed");
    };

    assert_eq!(screen.people(), std::slice::from_ref(&person));
    let store = PersonService::new(SqlitePersonRepository::new(&conn));
    assert_eq!(store.list_all().unwrap(), vec![person]);
}

#[test]
fn cancel_changes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let mut screen = screen(&conn);
    screen.on_add_requested(&mut save("Ned"));
    let reloads_before = screen.view().reloads;

    let outcome = screen.on_add_requested(&mut FixedPrompt(PromptOutcome::Cancel));

    assert_eq!(outcome, AddOutcome::Cancelled);
    assert_eq!(screen.row_count(), 1);
    assert_eq!(screen.view().reloads, reloads_before);
    let stored: i64 = conn
        .query_row("SELECT COUNT(*) FROM people;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(stored, 1);
}

#[test]
fn failed_write_is_contained_and_reported() {
    let conn = open_db_in_memory().unwrap();
    let mut screen = screen(&conn);
    screen.on_add_requested(&mut save("Ned"));
    conn.execute_batch(
        "CREATE TEMP TRIGGER reject_people BEFORE INSERT ON people
         BEGIN
             SELECT RAISE(ABORT, 'disk full');
         END;",
    )
    .unwrap();

    let outcome = screen.on_add_requested(&mut save("Robb"));

    assert_eq!(outcome, AddOutcome::Failed);
    assert_eq!(screen.row_count(), 1);
    assert_eq!(screen.view().errors.len(), 1);
    assert!(screen.view().errors[0].contains("disk full"));
    assert_eq!(screen.last_error(), Some(screen.view().errors[0].as_str()));
}

#[test]
fn failed_refresh_keeps_stale_rows() {
    let conn = open_db_in_memory().unwrap();
    let mut screen = screen(&conn);
    screen.on_add_requested(&mut save("Ned"));
    conn.execute_batch("DROP TABLE people;").unwrap();

    assert_eq!(screen.on_screen_shown(), RefreshOutcome::Failed);
    assert_eq!(screen.row_label(0), Some("Ned"));
    assert!(screen
        .last_error()
        .is_some_and(|message| message.starts_with("Could not load names")));
}
